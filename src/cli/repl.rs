// src/cli/repl.rs
use crate::application::{NotesApi, NotesController, NotesView, Outcome};
use crate::domain::NoteId;
use crate::ports::TablePresenter;
use anyhow::{Context, Result};
use std::io::Write;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

const HELP: &str = "\
Commands:
  next | n                 next page
  prev | p                 previous page
  page <N>                 jump to page N
  limit [N]                rows per page (no value clears the field)
  title <text>             title of the new note
  content <text>           content of the new note
  add                      create the new note
  edit <ROW|ID>            edit a row (row number or note id)
  set title <text>         change the title being edited
  set content <text>       change the content being edited
  save                     save the edited row
  cancel                   discard the edit
  delete <ROW|ID>          delete a note
  refresh                  reload the current page
  help                     this text
  quit | q                 leave";

/// Row reference typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowRef {
    /// 1-based position on the current page
    Row(usize),
    Id(NoteId),
}

impl RowRef {
    fn parse(raw: &str) -> Self {
        match raw.parse::<usize>() {
            Ok(row) => RowRef::Row(row),
            Err(_) => RowRef::Id(NoteId::from(raw.strip_prefix("id:").unwrap_or(raw))),
        }
    }

    /// Note id this reference points at on the current page
    pub fn resolve(&self, view: &NotesView) -> Result<NoteId, ReplError> {
        match self {
            RowRef::Row(row) => row
                .checked_sub(1)
                .and_then(|index| view.notes().get(index))
                .map(|note| note.id.clone())
                .ok_or(ReplError::NoSuchRow(*row)),
            RowRef::Id(id) => Ok(id.clone()),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplError {
    #[error("Unknown command: {0} (try 'help')")]
    UnknownCommand(String),
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("Not a page number: {0}")]
    InvalidPage(String),
    #[error("No row {0} on this page")]
    NoSuchRow(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Next,
    Previous,
    Page(u32),
    Limit(String),
    Title(String),
    Content(String),
    Add,
    Edit(RowRef),
    SetTitle(String),
    SetContent(String),
    Save,
    Cancel,
    Delete(RowRef),
    Refresh,
    Help,
    Quit,
    Empty,
}

impl ReplCommand {
    pub fn parse(line: &str) -> Result<Self, ReplError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        let (word, rest) = match trimmed.split_once(' ') {
            Some((word, rest)) => (word, rest),
            None => (trimmed, ""),
        };

        let command = match word {
            "" => ReplCommand::Empty,
            "next" | "n" => ReplCommand::Next,
            "prev" | "previous" | "p" => ReplCommand::Previous,
            "page" => {
                let raw = rest.trim();
                if raw.is_empty() {
                    return Err(ReplError::MissingArgument("page number"));
                }
                let page = raw
                    .parse::<u32>()
                    .map_err(|_| ReplError::InvalidPage(raw.to_string()))?;
                ReplCommand::Page(page)
            }
            "limit" => ReplCommand::Limit(rest.trim().to_string()),
            "title" => ReplCommand::Title(rest.to_string()),
            "content" => ReplCommand::Content(rest.to_string()),
            "add" => ReplCommand::Add,
            "edit" => ReplCommand::Edit(Self::row_ref(rest)?),
            "set" => {
                let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
                match field {
                    "title" => ReplCommand::SetTitle(value.to_string()),
                    "content" => ReplCommand::SetContent(value.to_string()),
                    "" => return Err(ReplError::MissingArgument("title or content")),
                    other => return Err(ReplError::UnknownCommand(format!("set {other}"))),
                }
            }
            "save" => ReplCommand::Save,
            "cancel" => ReplCommand::Cancel,
            "delete" | "rm" => ReplCommand::Delete(Self::row_ref(rest)?),
            "refresh" | "r" => ReplCommand::Refresh,
            "help" | "?" => ReplCommand::Help,
            "quit" | "exit" | "q" => ReplCommand::Quit,
            other => return Err(ReplError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }

    fn row_ref(rest: &str) -> Result<RowRef, ReplError> {
        let raw = rest.trim();
        if raw.is_empty() {
            return Err(ReplError::MissingArgument("row number or note id"));
        }
        Ok(RowRef::parse(raw))
    }
}

/// Apply one command; returns `false` when the session should end
pub async fn execute<A: NotesApi, W: Write>(
    controller: &mut NotesController<A>,
    command: ReplCommand,
    out: &mut W,
) -> Result<bool> {
    let outcome = match command {
        ReplCommand::Empty => None,
        ReplCommand::Quit => return Ok(false),
        ReplCommand::Help => {
            writeln!(out, "{HELP}")?;
            return Ok(true);
        }
        ReplCommand::Next => Some(controller.next_page().await),
        ReplCommand::Previous => Some(controller.previous_page().await),
        ReplCommand::Page(page) => Some(controller.go_to_page(page).await),
        ReplCommand::Limit(raw) => Some(controller.set_limit(&raw).await),
        ReplCommand::Refresh => Some(controller.refresh().await),
        ReplCommand::Title(title) => {
            controller.set_new_title(title);
            None
        }
        ReplCommand::Content(content) => {
            controller.set_new_content(content);
            None
        }
        ReplCommand::Add => alert(out, controller.add_note().await)?,
        ReplCommand::Edit(row) => {
            match row.resolve(controller.view()) {
                Ok(id) => {
                    alert(out, controller.begin_edit(&id))?;
                }
                Err(e) => writeln!(out, "! {e}")?,
            }
            None
        }
        ReplCommand::SetTitle(title) => {
            alert(out, controller.set_edit_title(title))?;
            None
        }
        ReplCommand::SetContent(content) => {
            alert(out, controller.set_edit_content(content))?;
            None
        }
        ReplCommand::Save => alert(out, controller.save_edit().await)?,
        ReplCommand::Cancel => {
            controller.cancel_edit();
            None
        }
        ReplCommand::Delete(row) => match row.resolve(controller.view()) {
            Ok(id) => Some(controller.delete_note(&id).await),
            Err(e) => {
                writeln!(out, "! {e}")?;
                None
            }
        },
    };
    debug!(?outcome, "Command done");
    Ok(true)
}

/// Print a validation failure as an alert line, pass successes through
fn alert<T, W: Write>(
    out: &mut W,
    result: Result<T, crate::domain::ValidationError>,
) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            writeln!(out, "! {e}")?;
            Ok(None)
        }
    }
}

/// Interactive loop: mount, then read commands until `quit` or end of input
pub async fn run_session<A, R, W>(
    controller: &mut NotesController<A>,
    presenter: &TablePresenter,
    input: R,
    out: &mut W,
) -> Result<()>
where
    A: NotesApi,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if controller.mount().await == Outcome::Failed {
        writeln!(out, "! Could not load notes, showing an empty list")?;
    }
    write!(out, "{}", presenter.render(controller.view()))?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };

        let keep_going = match ReplCommand::parse(&line) {
            Ok(ReplCommand::Help) => {
                execute(controller, ReplCommand::Help, out).await?;
                continue;
            }
            Ok(ReplCommand::Empty) => continue,
            Ok(command) => execute(controller, command, out).await?,
            Err(e) => {
                writeln!(out, "! {e}")?;
                continue;
            }
        };
        if !keep_going {
            break;
        }
        write!(out, "{}", presenter.render(controller.view()))?;
    }
    writeln!(out)?;
    Ok(())
}
