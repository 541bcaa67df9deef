// src/infrastructure/http.rs
use crate::application::NotesApi;
use crate::domain::{DomainError, Draft, Note, NoteId, NotesPage, PageRequest};
use crate::infrastructure::config::ApiConfig;
use anyhow::{anyhow, Context, Result};
use reqwest::Url;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// [`NotesApi`] over the notes REST endpoint
#[derive(Debug, Clone)]
pub struct HttpNotesApi {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpNotesApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid base URL: {}", config.base_url))?;
        if base_url.cannot_be_a_base() {
            return Err(anyhow!("Base URL cannot carry a path: {base_url}"));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        debug!(%base_url, timeout_secs = ?config.timeout_secs, "Created HTTP notes client");
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}?page={page}&limit={limit}`
    pub fn page_url(&self, request: PageRequest) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("page", &request.page.to_string())
            .append_pair("limit", &request.limit.to_string());
        url
    }

    /// `{base}/{id}`, with the id percent-encoded as one path segment
    pub fn note_url(&self, id: &NoteId) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id.as_str());
        }
        url
    }
}

fn map_error(err: reqwest::Error) -> DomainError {
    let url = err.url().map(|u| u.to_string()).unwrap_or_default();
    if let Some(status) = err.status() {
        DomainError::Status {
            status: status.as_u16(),
            url,
        }
    } else if err.is_decode() {
        DomainError::Decode(err.to_string())
    } else {
        DomainError::Transport(err.to_string())
    }
}

impl NotesApi for HttpNotesApi {
    #[instrument(level = "debug", skip(self), err)]
    async fn list_notes(&self, request: PageRequest) -> Result<NotesPage, DomainError> {
        let response = self
            .client
            .get(self.page_url(request))
            .send()
            .await
            .map_err(map_error)?
            .error_for_status()
            .map_err(map_error)?;

        response.json::<NotesPage>().await.map_err(map_error)
    }

    #[instrument(level = "debug", skip(self), err)]
    async fn create_note(&self, draft: &Draft) -> Result<Option<Note>, DomainError> {
        let response = self
            .client
            .post(self.base_url.clone())
            .json(draft)
            .send()
            .await
            .map_err(map_error)?
            .error_for_status()
            .map_err(map_error)?;

        // any 2xx means the note was created
        match response.json::<Note>().await {
            Ok(note) => Ok(Some(note)),
            Err(e) => {
                warn!(error = %e, "Create response is not a note");
                Ok(None)
            }
        }
    }

    #[instrument(level = "debug", skip(self), err)]
    async fn update_note(&self, id: &NoteId, draft: &Draft) -> Result<(), DomainError> {
        self.client
            .put(self.note_url(id))
            .json(draft)
            .send()
            .await
            .map_err(map_error)?
            .error_for_status()
            .map_err(map_error)?;

        Ok(())
    }

    #[instrument(level = "debug", skip(self), err)]
    async fn delete_note(&self, id: &NoteId) -> Result<(), DomainError> {
        self.client
            .delete(self.note_url(id))
            .send()
            .await
            .map_err(map_error)?
            .error_for_status()
            .map_err(map_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_BASE_URL;

    fn api(base_url: &str) -> HttpNotesApi {
        HttpNotesApi::new(&ApiConfig {
            base_url: base_url.to_string(),
            timeout_secs: None,
        })
        .unwrap()
    }

    #[test]
    fn given_page_request_when_building_url_then_carries_page_and_limit() {
        let url = api(DEFAULT_BASE_URL).page_url(PageRequest::new(2, 5));
        assert_eq!(url.as_str(), "http://localhost:5000/api/notes?page=2&limit=5");
    }

    #[test]
    fn given_note_id_when_building_url_then_appends_segment() {
        let url = api(DEFAULT_BASE_URL).note_url(&NoteId::from("65f1c0ffee"));
        assert_eq!(url.as_str(), "http://localhost:5000/api/notes/65f1c0ffee");
    }

    #[test]
    fn given_trailing_slash_when_building_note_url_then_no_double_slash() {
        let url = api("http://localhost:5000/api/notes/").note_url(&NoteId::from("abc"));
        assert_eq!(url.as_str(), "http://localhost:5000/api/notes/abc");
    }

    #[test]
    fn given_id_with_reserved_characters_when_building_url_then_encodes_them() {
        let url = api(DEFAULT_BASE_URL).note_url(&NoteId::from("a/b?c"));
        assert_eq!(url.as_str(), "http://localhost:5000/api/notes/a%2Fb%3Fc");
    }

    #[test]
    fn given_invalid_base_url_when_creating_then_fails() {
        let result = HttpNotesApi::new(&ApiConfig {
            base_url: "not a url".to_string(),
            timeout_secs: None,
        });
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn given_unreachable_server_when_listing_then_returns_transport_error() {
        // nothing listens on the discard port
        let api = api("http://127.0.0.1:9/api/notes");

        let result = api.list_notes(PageRequest::new(1, 5)).await;

        assert!(matches!(result, Err(DomainError::Transport(_))));
    }
}
