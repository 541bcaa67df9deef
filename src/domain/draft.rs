// src/domain/draft.rs
use crate::domain::Note;
use serde::Serialize;

/// Title/content pair that has not been persisted yet.
///
/// Used both for the new-note form and for the row being edited. This is also
/// the request body of `POST` and `PUT`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Draft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Both fields present. Whitespace counts as present.
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.content.is_empty()
    }
}

impl From<&Note> for Draft {
    fn from(note: &Note) -> Self {
        Self::new(note.title.clone(), note.content.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("A", "B", true)]
    #[case("", "B", false)]
    #[case("A", "", false)]
    #[case("", "", false)]
    #[case(" ", "\t", true)]
    fn given_draft_fields_when_checking_completeness_then_only_emptiness_matters(
        #[case] title: &str,
        #[case] content: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(Draft::new(title, content).is_complete(), expected);
    }

    #[test]
    fn given_draft_when_serializing_then_produces_request_body() {
        let json = serde_json::to_string(&Draft::new("A", "B")).unwrap();
        assert_eq!(json, r#"{"title":"A","content":"B"}"#);
    }
}
