// src/application/view.rs
use crate::domain::{Draft, Limit, Note, NoteId, NotesPage, PageRequest, ValidationError};
use tracing::debug;

/// Which row, if any, is being edited
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Viewing,
    Editing { id: NoteId, draft: Draft },
}

/// Result of feeding page-size input into the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitUpdate {
    /// Input rejected, state unchanged
    Ignored,
    /// Stored, but there is nothing to fetch (blank or unchanged)
    Stored,
    /// Stored and the current page must be fetched again
    Refetch,
}

/// Handle for one in-flight page fetch.
///
/// Only the ticket from the most recent [`NotesView::begin_fetch`] can commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    pub request: PageRequest,
}

/// Client-side state of the notes list
#[derive(Debug, Clone)]
pub struct NotesView {
    page: u32,
    limit: Limit,
    total_pages: u32,
    notes: Vec<Note>,
    new_draft: Draft,
    edit: EditState,
    generation: u64,
    default_limit: u32,
}

impl NotesView {
    pub fn new(default_limit: u32) -> Self {
        Self {
            page: 1,
            limit: Limit::Value(default_limit),
            total_pages: 1,
            notes: Vec::new(),
            new_draft: Draft::default(),
            edit: EditState::Viewing,
            generation: 0,
            default_limit,
        }
    }

    /// View opened directly on `page`; the page is not checked against the server
    pub fn starting_at(page: u32, default_limit: u32) -> Self {
        Self {
            page: page.max(1),
            ..Self::new(default_limit)
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> Limit {
        self.limit
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn new_draft(&self) -> &Draft {
        &self.new_draft
    }

    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    pub fn editing(&self) -> Option<(&NoteId, &Draft)> {
        match &self.edit {
            EditState::Viewing => None,
            EditState::Editing { id, draft } => Some((id, draft)),
        }
    }

    pub fn is_editing(&self, id: &NoteId) -> bool {
        matches!(&self.edit, EditState::Editing { id: current, .. } if current == id)
    }

    pub fn previous_disabled(&self) -> bool {
        self.page == 1
    }

    pub fn next_disabled(&self) -> bool {
        self.page == self.total_pages
    }

    /// Current page and page size, `None` while the page size is blank
    pub fn page_request(&self) -> Option<PageRequest> {
        self.limit
            .value()
            .map(|limit| PageRequest::new(self.page, limit))
    }

    /// Start a fetch of the current page, invalidating every earlier ticket
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        let request = self.page_request()?;
        self.generation += 1;
        Some(FetchTicket {
            generation: self.generation,
            request,
        })
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Replace the note collection with a fetched page.
    ///
    /// Returns `false` and leaves state untouched when a newer fetch has
    /// started since `ticket` was issued.
    pub fn commit_fetch(&mut self, ticket: FetchTicket, page: NotesPage) -> bool {
        if !self.is_current(&ticket) {
            debug!(
                generation = ticket.generation,
                latest = self.generation,
                "Discarding stale page"
            );
            return false;
        }
        self.notes = page.notes;
        self.total_pages = page.total_pages;
        true
    }

    /// Move to `page` if it lies within the last known page count
    pub fn set_page(&mut self, page: u32) -> bool {
        if page == 0 || page > self.total_pages || page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    pub fn set_limit(&mut self, raw: &str) -> LimitUpdate {
        let Some(limit) = Limit::parse_input(raw) else {
            return LimitUpdate::Ignored;
        };
        let changed = limit != self.limit;
        self.limit = limit;
        match limit {
            Limit::Value(_) if changed => LimitUpdate::Refetch,
            _ => LimitUpdate::Stored,
        }
    }

    pub fn set_new_title(&mut self, title: impl Into<String>) {
        self.new_draft.title = title.into();
    }

    pub fn set_new_content(&mut self, content: impl Into<String>) {
        self.new_draft.content = content.into();
    }

    /// Put the row `id` into edit mode, dropping any other in-progress edit
    pub fn begin_edit(&mut self, id: &NoteId) -> Result<(), ValidationError> {
        let note = self
            .notes
            .iter()
            .find(|note| &note.id == id)
            .ok_or_else(|| ValidationError::UnknownNote(id.clone()))?;
        self.edit = EditState::Editing {
            id: note.id.clone(),
            draft: Draft::from(note),
        };
        Ok(())
    }

    pub fn edit_draft_mut(&mut self) -> Result<&mut Draft, ValidationError> {
        match &mut self.edit {
            EditState::Viewing => Err(ValidationError::NotEditing),
            EditState::Editing { draft, .. } => Ok(draft),
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditState::Viewing;
    }

    /// Back to the initial state. The generation keeps counting so that
    /// fetches started before the reset cannot commit.
    pub fn reset(&mut self) {
        let generation = self.generation;
        *self = Self::new(self.default_limit);
        self.generation = generation;
    }
}

impl Default for NotesView {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_PAGE_SIZE)
    }
}
