// src/ports/table.rs
use crate::application::NotesView;
use crate::constants::{CONTENT_COLUMN_WIDTH, TITLE_COLUMN_WIDTH};
use crate::domain::Note;
use crate::util::text::{fit_cell, format_timestamp, pad};
use std::fmt::Write;

const INDEX_WIDTH: usize = 3;
const CREATED_WIDTH: usize = 19;

/// Renders the notes view as a plain-text table for the terminal
#[derive(Debug, Clone)]
pub struct TablePresenter {
    title_width: usize,
    content_width: usize,
}

impl TablePresenter {
    pub fn new() -> Self {
        Self {
            title_width: TITLE_COLUMN_WIDTH,
            content_width: CONTENT_COLUMN_WIDTH,
        }
    }

    pub fn with_widths(title_width: usize, content_width: usize) -> Self {
        Self {
            title_width,
            content_width,
        }
    }

    pub fn render(&self, view: &NotesView) -> String {
        let mut out = String::new();
        out.push_str("Notes\n\n");
        out.push_str(&self.render_new_draft(view));
        out.push('\n');
        out.push_str(&self.render_rows(view));
        out.push('\n');
        out.push_str(&Self::render_pagination(view));
        out.push('\n');
        out
    }

    fn render_new_draft(&self, view: &NotesView) -> String {
        let draft = view.new_draft();
        let button = if draft.is_complete() {
            "[Add Note]"
        } else {
            "(Add Note)"
        };
        format!(
            "New: title=\"{}\" content=\"{}\" {}\n",
            fit_cell(&draft.title, self.title_width),
            fit_cell(&draft.content, self.content_width),
            button
        )
    }

    /// Table body without the surrounding header and pagination
    pub fn render_rows(&self, view: &NotesView) -> String {
        let mut out = String::new();
        let header = [
            pad("#", INDEX_WIDTH),
            pad("Title", self.title_width),
            pad("Content", self.content_width),
            pad("Created At", CREATED_WIDTH),
            "Actions".to_string(),
        ];
        let _ = writeln!(out, "{}", header.join(" | "));
        let rule = [
            INDEX_WIDTH,
            self.title_width,
            self.content_width,
            CREATED_WIDTH,
            16,
        ]
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-");
        let _ = writeln!(out, "{rule}");

        if view.notes().is_empty() {
            let _ = writeln!(out, "(no notes)");
        }

        for (index, note) in view.notes().iter().enumerate() {
            let _ = writeln!(out, "{}", self.render_row(view, index + 1, note));
        }
        out
    }

    fn render_row(&self, view: &NotesView, row: usize, note: &Note) -> String {
        let (marker, title, content, actions) = match view.editing() {
            Some((id, draft)) if id == &note.id => {
                ("*", draft.title.as_str(), draft.content.as_str(), "[save] [cancel]")
            }
            _ => (
                " ",
                note.title.as_str(),
                note.content.as_str(),
                "[edit] [delete]",
            ),
        };

        [
            pad(&format!("{row}{marker}"), INDEX_WIDTH),
            pad(&fit_cell(title, self.title_width), self.title_width),
            pad(&fit_cell(content, self.content_width), self.content_width),
            pad(&format_timestamp(note.created_at.as_ref()), CREATED_WIDTH),
            actions.to_string(),
        ]
        .join(" | ")
    }

    /// `[Previous] Page 1 of 3 [Next]  Rows: 5`, disabled controls in parentheses
    pub fn render_pagination(view: &NotesView) -> String {
        let previous = if view.previous_disabled() {
            "(Previous)"
        } else {
            "[Previous]"
        };
        let next = if view.next_disabled() {
            "(Next)"
        } else {
            "[Next]"
        };
        format!(
            "{previous} Page {} of {} {next}  Rows: {}",
            view.page(),
            view.total_pages(),
            view.limit()
        )
    }
}

impl Default for TablePresenter {
    fn default() -> Self {
        Self::new()
    }
}
