// src/application/api.rs
use crate::domain::{DomainError, Draft, Note, NoteId, NotesPage, PageRequest};
use std::future::Future;

/// Remote store for notes.
///
/// Every call is independent: no retries, no cancellation, no ordering
/// between calls. Implementations report non-2xx responses as errors.
pub trait NotesApi {
    /// Fetch exactly one page together with the total page count
    fn list_notes(
        &self,
        request: PageRequest,
    ) -> impl Future<Output = Result<NotesPage, DomainError>> + Send;

    /// Create a note; the server assigns id and timestamp.
    ///
    /// Any 2xx counts as created. The echoed note is `None` when the body is
    /// not a note.
    fn create_note(
        &self,
        draft: &Draft,
    ) -> impl Future<Output = Result<Option<Note>, DomainError>> + Send;

    /// Replace title and content of an existing note
    fn update_note(
        &self,
        id: &NoteId,
        draft: &Draft,
    ) -> impl Future<Output = Result<(), DomainError>> + Send;

    fn delete_note(&self, id: &NoteId) -> impl Future<Output = Result<(), DomainError>> + Send;
}
