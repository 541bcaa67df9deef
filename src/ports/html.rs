// src/ports/html.rs
use crate::application::NotesView;
use crate::domain::Note;
use crate::util::text::format_timestamp;
use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::instrument;

#[derive(Debug)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    fn render_row(&self, view: &NotesView, note: &Note) -> String {
        let (title, content, actions, class) = match view.editing() {
            Some((id, draft)) if id == &note.id => (
                format!(
                    r#"<input type="text" value="{}">"#,
                    encode_double_quoted_attribute(&draft.title)
                ),
                format!(
                    r#"<input type="text" value="{}">"#,
                    encode_double_quoted_attribute(&draft.content)
                ),
                "<button>Save</button><button>Cancel</button>",
                r#" class="editing""#,
            ),
            _ => (
                encode_text(&note.title).to_string(),
                encode_text(&note.content).to_string(),
                "<button>Edit</button><button>Delete</button>",
                "",
            ),
        };

        format!(
            "            <tr{class} data-id=\"{id}\">\n                <td>{title}</td>\n                <td>{content}</td>\n                <td>{created}</td>\n                <td>{actions}</td>\n            </tr>\n",
            id = encode_double_quoted_attribute(note.id.as_str()),
            created = format_timestamp(note.created_at.as_ref()),
        )
    }

    #[instrument(level = "debug", skip_all)]
    pub fn render(&self, view: &NotesView) -> String {
        let rows: String = if view.notes().is_empty() {
            "            <tr><td colspan=\"4\" class=\"empty\">No notes</td></tr>\n".to_string()
        } else {
            view.notes()
                .iter()
                .map(|note| self.render_row(view, note))
                .collect()
        };
        let disabled = |flag: bool| if flag { " disabled" } else { "" };

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Notes - page {page}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 960px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #f5f5f5;
        }}
        .container {{
            background: white;
            border-radius: 8px;
            padding: 2rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        .table {{
            width: 100%;
            border-collapse: collapse;
            margin: 1rem 0;
        }}
        .table th, .table td {{
            text-align: left;
            padding: 0.5rem;
            border-bottom: 1px solid #eee;
            vertical-align: top;
        }}
        tr.editing {{
            background-color: #fff8e1;
        }}
        .empty {{
            color: #666;
            font-style: italic;
        }}
        .pagination {{
            display: flex;
            gap: 0.5rem;
            align-items: center;
        }}
    </style>
</head>
<body>
    <div class="container">
        <h1>Notes</h1>
        <table class="table">
            <thead>
                <tr><th>Title</th><th>Content</th><th>Created At</th><th>Actions</th></tr>
            </thead>
            <tbody>
{rows}            </tbody>
        </table>
        <div class="pagination">
            <button{previous}>Previous</button>
            <span> Page {page} of {total_pages} </span>
            <button{next}>Next</button>
            <input type="number" value="{limit}" min="1" max="100">
        </div>
    </div>
</body>
</html>"#,
            page = view.page(),
            total_pages = view.total_pages(),
            limit = view.limit(),
            rows = rows,
            previous = disabled(view.previous_disabled()),
            next = disabled(view.next_disabled()),
        )
    }
}

impl Default for HtmlPresenter {
    fn default() -> Self {
        Self::new()
    }
}
