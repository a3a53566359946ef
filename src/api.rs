use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::models::{AskResponse, DocumentInfo, DocumentsResponse, ErrorBody, UploadResponse};

/// Base URL of the backend RAG server.
const API_BASE: &str = "http://127.0.0.1:8000";

/// One-shot liveness probe. Any JSON body counts as healthy; the fields
/// are not inspected.
pub async fn check_health() -> Result<(), String> {
    let resp = Request::get(&format!("{API_BASE}/health"))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.ok() {
        return Err(format!("Server error: {}", resp.status()));
    }

    resp.json::<serde_json::Value>()
        .await
        .map(|_| ())
        .map_err(|e| format!("Parse error: {e}"))
}

/// Fetches the full document list. The caller replaces its copy wholesale.
pub async fn fetch_documents() -> Result<Vec<DocumentInfo>, String> {
    let resp = Request::get(&format!("{API_BASE}/documents"))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.ok() {
        return Err(format!("Server error: {}", resp.status()));
    }

    resp.json::<DocumentsResponse>()
        .await
        .map(|r| r.documents)
        .map_err(|e| format!("Parse error: {e}"))
}

/// Uploads one PDF as multipart form data under the `file` field.
///
/// On a non-success status the backend's `detail` field becomes the error
/// message, falling back to a status-derived one.
pub async fn upload_pdf(file: &File) -> Result<UploadResponse, String> {
    let form = FormData::new().map_err(|e| format!("Form error: {e:?}"))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| format!("Form error: {e:?}"))?;

    let resp = Request::post(&format!("{API_BASE}/upload"))
        .body(form)
        .map_err(|e| format!("Request error: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.ok() {
        let status = resp.status();
        let detail = resp
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail);
        return Err(detail.unwrap_or_else(|| format!("Upload failed: {status}")));
    }

    resp.json::<UploadResponse>()
        .await
        .map_err(|e| format!("Parse error: {e}"))
}

/// Sends a question, with `use_rag` selecting document-grounded vs
/// general-knowledge answering.
pub async fn ask(query: &str, use_rag: bool) -> Result<AskResponse, String> {
    let resp = Request::get(&format!("{API_BASE}/ask"))
        .query([
            ("query", query),
            ("use_rag", if use_rag { "true" } else { "false" }),
        ])
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.ok() {
        return Err(format!("Request failed: {}", resp.status()));
    }

    resp.json::<AskResponse>()
        .await
        .map_err(|e| format!("Parse error: {e}"))
}

/// Removes every uploaded document from the backend.
pub async fn clear_all_documents() -> Result<(), String> {
    let resp = Request::get(&format!("{API_BASE}/clear-all"))
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.ok() {
        return Err(format!("Server error: {}", resp.status()));
    }
    Ok(())
}
