// src/application/mod.rs
pub mod api;
pub mod controller;
pub mod view;

pub use api::NotesApi;
pub use controller::{NotesController, Outcome};
pub use view::{EditState, FetchTicket, LimitUpdate, NotesView};
