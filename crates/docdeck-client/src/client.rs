//! HTTP client for the document service

use std::collections::HashMap;
use std::time::Duration;

use reqwest::{Response, StatusCode};
use serde::Deserialize;
use url::Url;

use docdeck_core::prelude::*;
use docdeck_core::{FileContent, FileRecord, SearchMatch};

/// Per-request deadline. A request that exceeds it surfaces as
/// [`Error::ServiceUnreachable`], the same as any transport failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Wire shape of `/api/search` responses: `{query, results}`.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchMatch>,
}

/// Wire shape of upload success bodies: a file record plus a human message.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(flatten)]
    record: FileRecord,
    #[serde(default)]
    message: Option<String>,
}

/// Wire shape of non-2xx bodies that carry `{error: "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// One entry of the reconciliation listing served by `/api/debug/files`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DebugFileEntry {
    pub filename: String,
    /// Whether the stored bytes still exist on the service side.
    pub exists: bool,
}

/// Server-side view of the file store, for the read-only debug panel.
///
/// Diagnostic only: nothing here ever feeds back into the file registry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DebugFileReport {
    #[serde(default)]
    pub file_count: usize,
    #[serde(default)]
    pub files: HashMap<String, DebugFileEntry>,
}

/// Thin typed wrapper over the document service HTTP API.
///
/// Each operation returns a success payload or one of the classified
/// failures from [`docdeck_core::Error`]; raw transport errors never leak
/// past this type. No operation retries on its own.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ServiceClient {
    /// Create a client for the service rooted at `base_url`
    /// (e.g. `http://localhost:5000`).
    pub fn new(base_url: Url) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::unreachable(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http, base_url })
    }

    /// Root URL this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::bad_response(format!("invalid endpoint {path}: {e}")))
    }

    /// `GET /api/files` - the server's current file listing.
    pub async fn list_files(&self) -> Result<Vec<FileRecord>> {
        let url = self.endpoint("/api/files")?;
        let response = self.http.get(url).send().await.map_err(classify_transport)?;
        let response = check_status(response, "file listing").await?;
        decode_body(response, "file listing").await
    }

    /// `POST /api/upload` - store a file, returning its new record.
    ///
    /// The service validates format and size; a rejection surfaces as
    /// [`Error::ValidationRejected`] with the message from the body.
    pub async fn upload_file(&self, bytes: Vec<u8>, original_name: &str) -> Result<FileRecord> {
        let url = self.endpoint("/api/upload")?;
        let part = reqwest::multipart::Part::bytes(bytes).file_name(original_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(classify_transport)?;

        if !response.status().is_success() {
            // Upload failures carry {error} with the rejection reason.
            let message = read_error_body(response).await;
            return Err(Error::validation_rejected(message));
        }

        let upload: UploadResponse = decode_body(response, "upload").await?;
        if let Some(message) = upload.message {
            debug!("upload accepted: {message}");
        }
        Ok(upload.record)
    }

    /// `GET /api/search?query=..[&file_id=..]` - run a text search.
    ///
    /// A blank query is rejected locally; no request is issued. The query is
    /// percent-encoded by the query serializer.
    pub async fn search(
        &self,
        query: &str,
        scope_file_id: Option<&str>,
    ) -> Result<Vec<SearchMatch>> {
        if query.trim().is_empty() {
            return Err(Error::bad_response("search query must not be empty"));
        }

        let url = self.endpoint("/api/search")?;
        let mut request = self.http.get(url).query(&[("query", query)]);
        if let Some(file_id) = scope_file_id {
            request = request.query(&[("file_id", file_id)]);
        }

        let response = request.send().await.map_err(classify_transport)?;
        let response = check_status(response, "search").await?;
        let body: SearchResponse = decode_body(response, "search").await?;
        Ok(body.results)
    }

    /// `GET /api/file-content?file_id=..` - fetch extracted content for a file.
    pub async fn fetch_content(&self, file_id: &str) -> Result<FileContent> {
        let url = self.endpoint("/api/file-content")?;
        let response = self
            .http
            .get(url)
            .query(&[("file_id", file_id)])
            .send()
            .await
            .map_err(classify_transport)?;

        if response.status() == StatusCode::NOT_FOUND {
            let message = read_error_body(response).await;
            return Err(Error::not_found(file_id, message));
        }
        let response = check_status(response, "file content").await?;
        decode_body(response, "file content").await
    }

    /// URL of the raw stored bytes for a file (`GET /api/files/<id>/raw`).
    ///
    /// The image renderer surfaces this reference; the client itself never
    /// downloads the bytes.
    pub fn raw_url(&self, file_id: &str) -> Result<Url> {
        self.endpoint(&format!("/api/files/{file_id}/raw"))
    }

    /// `GET /api/debug/files` - server-side reconciliation listing.
    pub async fn debug_files(&self) -> Result<DebugFileReport> {
        let url = self.endpoint("/api/debug/files")?;
        let response = self.http.get(url).send().await.map_err(classify_transport)?;
        let response = check_status(response, "debug listing").await?;
        decode_body(response, "debug listing").await
    }
}

/// Map a transport-level reqwest error onto the failure taxonomy.
fn classify_transport(err: reqwest::Error) -> Error {
    if err.is_decode() {
        Error::bad_response(err.to_string())
    } else {
        Error::unreachable(err.to_string())
    }
}

/// Reject non-2xx responses as `BadResponse`, keeping the status and any
/// diagnostic text the service attached.
async fn check_status(response: Response, what: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let detail = read_error_body(response).await;
    Err(Error::bad_response(format!("{what} failed ({status}): {detail}")))
}

async fn decode_body<T: serde::de::DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| Error::bad_response(format!("malformed {what} body: {e}")))
}

/// Best-effort extraction of a human-readable message from a failure body:
/// prefer `{error}`, fall back to the raw text, then to a placeholder.
async fn read_error_body(response: Response) -> String {
    match response.text().await {
        Ok(text) => match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => body.error,
            Err(_) if !text.trim().is_empty() => text,
            Err(_) => "no details from service".to_string(),
        },
        Err(_) => "no details from service".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ServiceClient {
        ServiceClient::new(Url::parse("http://localhost:5000").unwrap()).unwrap()
    }

    #[test]
    fn test_raw_url_shape() {
        let url = client().raw_url("abc-123").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/files/abc-123/raw");
    }

    #[tokio::test]
    async fn test_blank_query_rejected_without_request() {
        // The base URL points nowhere routable; if a request were issued the
        // error would be ServiceUnreachable, not BadResponse.
        let err = client().search("   ", None).await.unwrap_err();
        assert!(matches!(err, Error::BadResponse { .. }));
    }

    #[test]
    fn test_search_response_wire_format() {
        let json = r#"{"query": "invoice", "results": [
            {"file_id": "1", "filename": "a.pdf", "type": "pdf", "preview": "x"}
        ]}"#;
        let body: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.results.len(), 1);
        assert_eq!(body.results[0].file_id, "1");
    }

    #[test]
    fn test_upload_response_flattens_record() {
        let json = r#"{"id": "u1", "filename": "r.pdf", "type": "pdf",
                       "message": "File uploaded successfully"}"#;
        let body: UploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.record.id, "u1");
        assert_eq!(body.message.as_deref(), Some("File uploaded successfully"));
    }

    #[test]
    fn test_debug_report_wire_format() {
        let json = r#"{"file_count": 2, "files": {
            "a": {"filename": "one.pdf", "exists": true},
            "b": {"filename": "two.csv", "exists": false}
        }}"#;
        let report: DebugFileReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.file_count, 2);
        assert!(report.files["a"].exists);
        assert!(!report.files["b"].exists);
    }

    #[test]
    fn test_content_body_with_extra_keys_still_decodes() {
        // The service echoes id/filename/type alongside the content payload.
        let json = r#"{"id": "x", "filename": "r.pdf", "type": "pdf", "content": "hello"}"#;
        let content: FileContent = serde_json::from_str(json).unwrap();
        assert!(matches!(content, FileContent::Text { .. }));
    }
}
