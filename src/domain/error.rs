// src/domain/error.rs
use crate::domain::NoteId;
use thiserror::Error;

/// Failures talking to the notes service
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Server responded {status} for {url}")]
    Status { status: u16, url: String },
    #[error("Invalid response body: {0}")]
    Decode(String),
}

/// Input rejected before any request is made
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title and content are required!")]
    MissingFields,
    #[error("Note {0} is not on the current page")]
    UnknownNote(NoteId),
    #[error("No note is being edited")]
    NotEditing,
}
