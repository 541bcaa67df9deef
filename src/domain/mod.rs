// src/domain/mod.rs
pub mod draft;
pub mod error;
pub mod note;
pub mod page;

pub use draft::Draft;
pub use error::{DomainError, ValidationError};
pub use note::{Note, NoteId};
pub use page::{Limit, NotesPage, PageRequest};
