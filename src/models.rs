use serde::Deserialize;

/// Fixed greeting shown as the first transcript entry.
pub const WELCOME_TEXT: &str = "Hello! I'm your PDF Assistant. Upload PDF documents \
and ask me questions about them. I can search through your documents and provide \
accurate answers based on their content.";

/// Placeholder answer when the backend omits the `answer` field.
pub const NO_RESPONSE_TEXT: &str = "No response received";

/// Backend connectivity, probed once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendStatus {
    Checking,
    Connected,
    Disconnected,
}

impl BackendStatus {
    pub fn is_connected(self) -> bool {
        self == BackendStatus::Connected
    }

    pub fn label(self) -> &'static str {
        match self {
            BackendStatus::Checking => "Checking…",
            BackendStatus::Connected => "Connected",
            BackendStatus::Disconnected => "Disconnected",
        }
    }
}

/// One transcript entry: either a user question or an assistant answer.
///
/// Entries are append-only and never mutated after creation. The
/// constructors below are the only way to build one, which keeps the
/// user/assistant discriminant consistent with the text fields.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub is_user: bool,
    pub sources: Vec<String>,
    pub context_used: bool,
    pub timestamp: Option<f64>,
}

impl ChatMessage {
    /// The fixed welcome entry the transcript resets to.
    pub fn welcome() -> Self {
        Self {
            id: "welcome".to_string(),
            question: String::new(),
            answer: WELCOME_TEXT.to_string(),
            is_user: false,
            sources: Vec::new(),
            context_used: false,
            timestamp: None,
        }
    }

    /// A user question, appended optimistically before the request is sent.
    pub fn user(question: &str, now_ms: f64) -> Self {
        Self {
            id: format!("user-{}", now_ms as u64),
            question: question.to_string(),
            answer: String::new(),
            is_user: true,
            sources: Vec::new(),
            context_used: false,
            timestamp: Some(now_ms),
        }
    }

    /// An assistant answer built from a successful `/ask` response.
    pub fn answer(resp: AskResponse, now_ms: f64) -> Self {
        Self {
            id: format!("ai-{}", now_ms as u64),
            question: String::new(),
            answer: resp.answer.unwrap_or_else(|| NO_RESPONSE_TEXT.to_string()),
            is_user: false,
            sources: resp.sources,
            context_used: resp.context_used,
            timestamp: Some(now_ms),
        }
    }

    /// An assistant summary for a completed upload.
    pub fn upload_summary(filename: &str, resp: &UploadResponse, now_ms: f64) -> Self {
        Self {
            id: format!("upload-{}", now_ms as u64),
            question: String::new(),
            answer: format!(
                "✅ Successfully uploaded and processed **{filename}**\n\n\
                 - Added {} text chunks\n\
                 - Document ID: {}\n\
                 - Ready for questioning",
                resp.chunks, resp.document_id
            ),
            is_user: false,
            sources: Vec::new(),
            context_used: false,
            timestamp: Some(now_ms),
        }
    }

    /// An assistant-style error bubble. `text` should already carry the
    /// `❌` failure prefix so the transcript renders it uniformly.
    pub fn error(text: String, now_ms: f64) -> Self {
        Self {
            id: format!("error-{}", now_ms as u64),
            question: String::new(),
            answer: text,
            is_user: false,
            sources: Vec::new(),
            context_used: false,
            timestamp: Some(now_ms),
        }
    }

    /// An assistant-style informational notice (e.g. after removing all
    /// documents).
    pub fn notice(text: String, now_ms: f64) -> Self {
        Self {
            id: format!("notice-{}", now_ms as u64),
            question: String::new(),
            answer: text,
            is_user: false,
            sources: Vec::new(),
            context_used: false,
            timestamp: Some(now_ms),
        }
    }
}

/// One uploaded document as reported by `GET /documents`. Created by the
/// backend on upload; the client only re-fetches, never mutates.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct DocumentInfo {
    pub id: String,
    pub filename: String,
    pub size: u64,
    /// Seconds since the Unix epoch (the backend sends a float).
    pub upload_time: f64,
    pub chunk_count: u32,
    pub status: String,
}

/// Response body of `GET /documents`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DocumentsResponse {
    #[serde(default)]
    pub documents: Vec<DocumentInfo>,
}

/// Response body of `POST /upload`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub chunks: u32,
    #[serde(default)]
    pub document_id: String,
}

/// Response body of `GET /ask`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub context_used: bool,
}

/// Error body the backend attaches to non-success upload responses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_and_assistant_discriminants() {
        let user = ChatMessage::user("What is X?", 1_000.0);
        assert!(user.is_user);
        assert_eq!(user.question, "What is X?");
        assert!(user.answer.is_empty());
        assert!(user.id.starts_with("user-"));

        let ai = ChatMessage::answer(
            AskResponse {
                answer: Some("X is Y".to_string()),
                sources: vec!["a.pdf".to_string()],
                context_used: true,
            },
            2_000.0,
        );
        assert!(!ai.is_user);
        assert!(ai.question.is_empty());
        assert_eq!(ai.answer, "X is Y");
        assert_eq!(ai.sources, vec!["a.pdf"]);
        assert!(ai.context_used);
    }

    #[test]
    fn answer_defaults_to_placeholder() {
        let ai = ChatMessage::answer(AskResponse::default(), 0.0);
        assert_eq!(ai.answer, NO_RESPONSE_TEXT);
        assert!(ai.sources.is_empty());
        assert!(!ai.context_used);
    }

    #[test]
    fn ask_response_fields_all_optional() {
        let resp: AskResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.answer, None);
        assert!(resp.sources.is_empty());
        assert!(!resp.context_used);

        let resp: AskResponse = serde_json::from_str(
            r#"{"answer":"X is Y","sources":["a.pdf"],"context_used":true}"#,
        )
        .unwrap();
        assert_eq!(resp.answer.as_deref(), Some("X is Y"));
        assert_eq!(resp.sources, vec!["a.pdf"]);
        assert!(resp.context_used);
    }

    #[test]
    fn documents_field_defaults_to_empty() {
        let resp: DocumentsResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.documents.is_empty());
    }

    #[test]
    fn document_info_parses_backend_shape() {
        let resp: DocumentsResponse = serde_json::from_str(
            r#"{"documents":[{"id":"1","filename":"a.pdf","size":2048,
                "upload_time":1700000000,"chunk_count":5,"status":"ready"}]}"#,
        )
        .unwrap();
        assert_eq!(resp.documents.len(), 1);
        let doc = &resp.documents[0];
        assert_eq!(doc.filename, "a.pdf");
        assert_eq!(doc.size, 2048);
        assert_eq!(doc.chunk_count, 5);
        assert_eq!(doc.status, "ready");
    }

    #[test]
    fn error_body_detail_is_optional() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail":"file too large"}"#).unwrap();
        assert_eq!(body.detail.as_deref(), Some("file too large"));
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.detail, None);
    }

    #[test]
    fn upload_summary_mentions_chunks_and_id() {
        let msg = ChatMessage::upload_summary(
            "report.pdf",
            &UploadResponse {
                chunks: 12,
                document_id: "ab12cd34".to_string(),
            },
            3_000.0,
        );
        assert!(msg.answer.contains("report.pdf"));
        assert!(msg.answer.contains("12 text chunks"));
        assert!(msg.answer.contains("ab12cd34"));
        assert!(!msg.is_user);
    }
}
