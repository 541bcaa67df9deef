use anyhow::{Context, Result};
use notesview::application::{NotesController, Outcome};
use notesview::domain::NotesPage;
use notesview::util::testing::MockNotesApi;
use std::path::PathBuf;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

/// Path to a file below `tests/fixtures`
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// List response captured from the notes server
#[allow(dead_code)]
pub fn recorded_page() -> Result<NotesPage> {
    let path = fixture_path("notes_page.json");
    let body = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read fixture {}", path.display()))?;
    serde_json::from_str(&body).context("Failed to parse fixture")
}

/// Controller over `count` generated notes, already mounted
#[allow(dead_code)]
pub async fn mounted_controller(count: usize, limit: u32) -> NotesController<MockNotesApi> {
    let api = MockNotesApi::builder().with_notes(count).build();
    let mut controller = NotesController::new(api, limit);
    assert_eq!(controller.mount().await, Outcome::Applied);
    controller
}

/// Ids shown on the current page, in order
#[allow(dead_code)]
pub fn visible_ids(controller: &NotesController<MockNotesApi>) -> Vec<String> {
    controller
        .view()
        .notes()
        .iter()
        .map(|note| note.id.to_string())
        .collect()
}

/// Request as seen by [`serve_responses`]
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub target: String,
    pub body: String,
}

#[allow(dead_code)]
impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

/// Local HTTP server answering one request per connection with the canned
/// `(status line, JSON body)` pairs, in order.
///
/// Returns the notes base URL and a channel of the requests received.
#[allow(dead_code)]
pub async fn serve_responses(
    responses: Vec<(&'static str, &'static str)>,
) -> (String, mpsc::UnboundedReceiver<RecordedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/api/notes", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        for (status, body) in responses {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            let _ = tx.send(request);
        }
    });

    (base_url, rx)
}

#[allow(dead_code)]
async fn read_request(socket: &mut tokio::net::TcpStream) -> RecordedRequest {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        buf.extend_from_slice(&chunk[..n]);
        if let Some(request) = parse_request(&buf) {
            return request;
        }
        assert!(n > 0, "connection closed before the request was complete");
    }
}

#[allow(dead_code)]
fn parse_request(buf: &[u8]) -> Option<RecordedRequest> {
    let text = std::str::from_utf8(buf).ok()?;
    let (head, body) = text.split_once("\r\n\r\n")?;
    let mut lines = head.lines();
    let mut request_line = lines.next()?.split(' ');
    let method = request_line.next()?.to_string();
    let target = request_line.next()?.to_string();
    let length = lines
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    (body.len() >= length).then(|| RecordedRequest {
        method,
        target,
        body: body[..length].to_string(),
    })
}
