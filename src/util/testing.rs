// src/util/testing.rs

use anyhow::Result;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NotesApi;
use crate::domain::{DomainError, Draft, Note, NoteId, NotesPage, PageRequest};

/// One request received by [`MockNotesApi`]
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    List(PageRequest),
    Create(Draft),
    Update(NoteId, Draft),
    Delete(NoteId),
}

/// Endpoint selector for failure injection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiOperation {
    List,
    Create,
    Update,
    Delete,
}

/// Timestamp used for generated notes
pub fn base_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()
}

/// A note whose title and content are derived from its id
pub fn sample_note(id: &str) -> Note {
    Note {
        id: NoteId::from(id),
        title: format!("Title {id}"),
        content: format!("Content {id}"),
        created_at: Some(base_timestamp()),
    }
}

struct MockState {
    notes: Vec<Note>,
    calls: Vec<ApiCall>,
    failing: HashSet<ApiOperation>,
    next_id: usize,
}

/// In-memory notes service for testing code that depends on [`NotesApi`]
///
/// Paginates like the real server (newest first, `ceil(count / limit)` pages),
/// records every call, and fails configured operations with a transport error.
///
/// # Examples
///
/// ```
/// use notesview::util::testing::{ApiOperation, MockNotesApi};
///
/// let api = MockNotesApi::builder()
///     .with_notes(12)
///     .failing(ApiOperation::Delete)
///     .build();
/// assert_eq!(api.notes().len(), 12);
/// ```
pub struct MockNotesApi {
    state: Mutex<MockState>,
}

impl MockNotesApi {
    pub fn builder() -> MockNotesApiBuilder {
        MockNotesApiBuilder::new()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Every call received so far, in order
    pub fn calls(&self) -> Vec<ApiCall> {
        self.state().calls.clone()
    }

    /// Current server-side contents, newest first
    pub fn notes(&self) -> Vec<Note> {
        self.state().notes.clone()
    }

    /// Make every later call to `operation` fail
    pub fn fail(&self, operation: ApiOperation) {
        self.state().failing.insert(operation);
    }

    pub fn recover(&self, operation: ApiOperation) {
        self.state().failing.remove(&operation);
    }

    fn check(state: &MockState, operation: ApiOperation) -> Result<(), DomainError> {
        if state.failing.contains(&operation) {
            return Err(DomainError::Transport(format!(
                "{operation:?}: connection refused"
            )));
        }
        Ok(())
    }

    fn not_found(id: &NoteId) -> DomainError {
        DomainError::Status {
            status: 404,
            url: format!("/api/notes/{id}"),
        }
    }
}

impl NotesApi for MockNotesApi {
    async fn list_notes(&self, request: PageRequest) -> Result<NotesPage, DomainError> {
        let mut state = self.state();
        state.calls.push(ApiCall::List(request));
        Self::check(&state, ApiOperation::List)?;

        let limit = request.limit.max(1) as usize;
        let skip = (request.page.max(1) as usize - 1) * limit;
        let total_pages = state.notes.len().div_ceil(limit) as u32;
        let notes = state.notes.iter().skip(skip).take(limit).cloned().collect();
        Ok(NotesPage { notes, total_pages })
    }

    async fn create_note(&self, draft: &Draft) -> Result<Option<Note>, DomainError> {
        let mut state = self.state();
        state.calls.push(ApiCall::Create(draft.clone()));
        Self::check(&state, ApiOperation::Create)?;

        state.next_id += 1;
        let note = Note {
            id: NoteId::new(format!("created-{}", state.next_id)),
            title: draft.title.clone(),
            content: draft.content.clone(),
            created_at: Some(base_timestamp() + Duration::days(state.next_id as i64)),
        };
        state.notes.insert(0, note.clone());
        Ok(Some(note))
    }

    async fn update_note(&self, id: &NoteId, draft: &Draft) -> Result<(), DomainError> {
        let mut state = self.state();
        state.calls.push(ApiCall::Update(id.clone(), draft.clone()));
        Self::check(&state, ApiOperation::Update)?;

        let note = state
            .notes
            .iter_mut()
            .find(|note| &note.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        note.title = draft.title.clone();
        note.content = draft.content.clone();
        Ok(())
    }

    async fn delete_note(&self, id: &NoteId) -> Result<(), DomainError> {
        let mut state = self.state();
        state.calls.push(ApiCall::Delete(id.clone()));
        Self::check(&state, ApiOperation::Delete)?;

        let before = state.notes.len();
        state.notes.retain(|note| &note.id != id);
        if state.notes.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}

/// Builder for MockNotesApi
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNotesApiBuilder {
    notes: Vec<Note>,
    failing: HashSet<ApiOperation>,
}

impl MockNotesApiBuilder {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            failing: HashSet::new(),
        }
    }

    /// Append `count` generated notes with ids `note-1` .. `note-{count}`
    pub fn with_notes(mut self, count: usize) -> Self {
        let start = self.notes.len();
        self.notes
            .extend((start + 1..=start + count).map(|n| sample_note(&format!("note-{n}"))));
        self
    }

    /// Append a specific note
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Configure `operation` to fail from the start
    pub fn failing(mut self, operation: ApiOperation) -> Self {
        self.failing.insert(operation);
        self
    }

    pub fn build(self) -> MockNotesApi {
        MockNotesApi {
            state: Mutex::new(MockState {
                notes: self.notes,
                calls: Vec::new(),
                failing: self.failing,
                next_id: 0,
            }),
        }
    }
}

impl Default for MockNotesApiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "reqwest", "rustls", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
