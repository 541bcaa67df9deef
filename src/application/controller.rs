// src/application/controller.rs
use crate::application::view::{LimitUpdate, NotesView};
use crate::application::NotesApi;
use crate::domain::{NoteId, ValidationError};
use tracing::{debug, error, info, instrument};

/// What a handler did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The remote call succeeded and the view reflects it
    Applied,
    /// Nothing to do: input rejected, page out of range, or stale response
    Ignored,
    /// The remote call failed; the error was logged and the view kept
    Failed,
}

/// Event handlers of the notes list.
///
/// Transport failures never surface as errors here: they are logged and
/// reported as [`Outcome::Failed`]. Only input validation returns `Err`.
pub struct NotesController<A: NotesApi> {
    api: A,
    view: NotesView,
}

impl<A: NotesApi> NotesController<A> {
    pub fn new(api: A, default_limit: u32) -> Self {
        Self {
            api,
            view: NotesView::new(default_limit),
        }
    }

    /// Controller whose first fetch targets `page` rather than page 1
    pub fn starting_at(api: A, page: u32, default_limit: u32) -> Self {
        Self {
            api,
            view: NotesView::starting_at(page, default_limit),
        }
    }

    pub fn view(&self) -> &NotesView {
        &self.view
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Initial load
    pub async fn mount(&mut self) -> Outcome {
        self.fetch().await
    }

    pub async fn refresh(&mut self) -> Outcome {
        self.fetch().await
    }

    #[instrument(level = "debug", skip(self))]
    async fn fetch(&mut self) -> Outcome {
        let Some(ticket) = self.view.begin_fetch() else {
            debug!("Page size is blank, not fetching");
            return Outcome::Ignored;
        };

        match self.api.list_notes(ticket.request).await {
            Ok(page) => {
                debug!(
                    page = ticket.request.page,
                    limit = ticket.request.limit,
                    count = page.notes.len(),
                    total_pages = page.total_pages,
                    "Fetched notes"
                );
                if self.view.commit_fetch(ticket, page) {
                    Outcome::Applied
                } else {
                    Outcome::Ignored
                }
            }
            Err(e) => {
                error!(error = %e, "Error fetching notes");
                Outcome::Failed
            }
        }
    }

    pub async fn go_to_page(&mut self, page: u32) -> Outcome {
        if !self.view.set_page(page) {
            debug!(page, total_pages = self.view.total_pages(), "Page out of range");
            return Outcome::Ignored;
        }
        self.fetch().await
    }

    pub async fn next_page(&mut self) -> Outcome {
        self.go_to_page(self.view.page().saturating_add(1)).await
    }

    pub async fn previous_page(&mut self) -> Outcome {
        self.go_to_page(self.view.page().saturating_sub(1)).await
    }

    pub async fn set_limit(&mut self, raw: &str) -> Outcome {
        match self.view.set_limit(raw) {
            LimitUpdate::Ignored => {
                debug!(raw, "Ignoring page size input");
                Outcome::Ignored
            }
            LimitUpdate::Stored => Outcome::Ignored,
            LimitUpdate::Refetch => self.fetch().await,
        }
    }

    pub fn set_new_title(&mut self, title: impl Into<String>) {
        self.view.set_new_title(title);
    }

    pub fn set_new_content(&mut self, content: impl Into<String>) {
        self.view.set_new_content(content);
    }

    pub fn can_submit(&self) -> bool {
        self.view.new_draft().is_complete()
    }

    /// Create the drafted note, then start over from the first page
    #[instrument(level = "debug", skip(self))]
    pub async fn add_note(&mut self) -> Result<Outcome, ValidationError> {
        let draft = self.view.new_draft().clone();
        if !draft.is_complete() {
            return Err(ValidationError::MissingFields);
        }

        match self.api.create_note(&draft).await {
            Ok(created) => {
                match created {
                    Some(note) => info!(id = %note.id, title = %note.title, "New note added"),
                    None => info!(title = %draft.title, "New note added"),
                }
                self.view.reset();
                self.fetch().await;
                Ok(Outcome::Applied)
            }
            Err(e) => {
                error!(error = %e, "Error adding note");
                Ok(Outcome::Failed)
            }
        }
    }

    pub fn begin_edit(&mut self, id: &NoteId) -> Result<(), ValidationError> {
        self.view.begin_edit(id)
    }

    pub fn set_edit_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        self.view.edit_draft_mut()?.title = title.into();
        Ok(())
    }

    pub fn set_edit_content(&mut self, content: impl Into<String>) -> Result<(), ValidationError> {
        self.view.edit_draft_mut()?.content = content.into();
        Ok(())
    }

    /// Persist the in-progress edit and reload the current page
    #[instrument(level = "debug", skip(self))]
    pub async fn save_edit(&mut self) -> Result<Outcome, ValidationError> {
        let (id, draft) = match self.view.editing() {
            Some((id, draft)) => (id.clone(), draft.clone()),
            None => return Err(ValidationError::NotEditing),
        };
        if !draft.is_complete() {
            return Err(ValidationError::MissingFields);
        }

        match self.api.update_note(&id, &draft).await {
            Ok(()) => {
                info!(%id, "Note updated");
                self.view.cancel_edit();
                self.fetch().await;
                Ok(Outcome::Applied)
            }
            Err(e) => {
                error!(error = %e, %id, "Error updating note");
                Ok(Outcome::Failed)
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        self.view.cancel_edit();
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn delete_note(&mut self, id: &NoteId) -> Outcome {
        match self.api.delete_note(id).await {
            Ok(()) => {
                info!(%id, "Note deleted");
                self.fetch().await;
                Outcome::Applied
            }
            Err(e) => {
                error!(error = %e, %id, "Error deleting note");
                Outcome::Failed
            }
        }
    }
}
