use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::api;
use crate::models::{BackendStatus, ChatMessage, DocumentInfo};
use crate::session::{Transcript, sanitize_question};

/// Shared application state, provided via Leptos context.
///
/// All mutation happens on the UI thread through the methods below; network
/// calls are spawned as local futures and write back through the signals
/// when they complete.
#[derive(Clone)]
pub struct AppState {
    // --- Read signals (for components to subscribe to) ---
    pub transcript: ReadSignal<Transcript>,
    pub documents: ReadSignal<Vec<DocumentInfo>>,
    pub query: ReadSignal<String>,
    pub loading: ReadSignal<bool>,
    pub uploading: ReadSignal<bool>,
    pub backend_status: ReadSignal<BackendStatus>,
    pub use_rag: ReadSignal<bool>,
    pub sidebar_open: ReadSignal<bool>,

    // --- Write signals (for mutating state) ---
    pub set_transcript: WriteSignal<Transcript>,
    pub set_documents: WriteSignal<Vec<DocumentInfo>>,
    pub set_query: WriteSignal<String>,
    set_loading: WriteSignal<bool>,
    set_uploading: WriteSignal<bool>,
    set_backend_status: WriteSignal<BackendStatus>,
    pub set_use_rag: WriteSignal<bool>,
    pub set_sidebar_open: WriteSignal<bool>,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide() -> Self {
        let (transcript, set_transcript) = signal(Transcript::new());
        let (documents, set_documents) = signal(Vec::<DocumentInfo>::new());
        let (query, set_query) = signal(String::new());
        let (loading, set_loading) = signal(false);
        let (uploading, set_uploading) = signal(false);
        let (backend_status, set_backend_status) = signal(BackendStatus::Checking);
        let (use_rag, set_use_rag) = signal(true);
        let (sidebar_open, set_sidebar_open) = signal(false);

        let state = Self {
            transcript,
            documents,
            query,
            loading,
            uploading,
            backend_status,
            use_rag,
            sidebar_open,
            set_transcript,
            set_documents,
            set_query,
            set_loading,
            set_uploading,
            set_backend_status,
            set_use_rag,
            set_sidebar_open,
        };

        provide_context(state.clone());
        state
    }

    /// One-shot startup probe. Success flips the status pill to connected
    /// and triggers the initial document fetch; failure leaves asking
    /// disabled. No retry loop.
    pub fn check_backend(&self) {
        let state = self.clone();
        spawn_local(async move {
            match api::check_health().await {
                Ok(()) => {
                    state.set_backend_status.set(BackendStatus::Connected);
                    state.refresh_documents();
                }
                Err(e) => {
                    log::error!("Backend connection failed: {e}");
                    state.set_backend_status.set(BackendStatus::Disconnected);
                }
            }
        });
    }

    /// Re-fetch the document list and replace it wholesale. Failures are
    /// logged only; the stale list stays visible.
    pub fn refresh_documents(&self) {
        let set_documents = self.set_documents;
        spawn_local(async move {
            match api::fetch_documents().await {
                Ok(docs) => set_documents.set(docs),
                Err(e) => log::error!("Failed to load documents: {e}"),
            }
        });
    }

    /// Upload one PDF. Re-entry is prevented by the `uploading` flag; the
    /// outcome (summary or error) lands in the transcript either way, and
    /// a success re-fetches the document list.
    pub fn upload_document(&self, file: File) {
        if self.uploading.get_untracked() {
            return;
        }
        self.set_uploading.set(true);

        let state = self.clone();
        spawn_local(async move {
            let filename = file.name();
            match api::upload_pdf(&file).await {
                Ok(resp) => {
                    state.set_transcript.update(|t| {
                        t.push(ChatMessage::upload_summary(&filename, &resp, now_ms()));
                    });
                    state.refresh_documents();
                }
                Err(e) => {
                    log::error!("Upload error: {e}");
                    state.set_transcript.update(|t| {
                        t.push(ChatMessage::error(format!("❌ Upload failed: {e}"), now_ms()));
                    });
                }
            }
            state.set_uploading.set(false);
        });
    }

    /// Send the current query draft to the backend.
    ///
    /// No-op when the trimmed draft is empty, a request is already in
    /// flight, or the backend is not connected. The user message is
    /// appended before the request goes out; a second ask during
    /// `loading` is rejected rather than queued.
    pub fn ask(&self) {
        let Some(question) = sanitize_question(&self.query.get_untracked()) else {
            return;
        };
        if self.loading.get_untracked() || !self.backend_status.get_untracked().is_connected() {
            return;
        }

        self.set_transcript
            .update(|t| t.push(ChatMessage::user(&question, now_ms())));
        self.set_query.set(String::new());
        self.set_loading.set(true);

        let state = self.clone();
        let use_rag = self.use_rag.get_untracked();
        spawn_local(async move {
            match api::ask(&question, use_rag).await {
                Ok(resp) => {
                    state.set_transcript.update(|t| {
                        t.push(ChatMessage::answer(resp, now_ms()));
                    });
                }
                Err(e) => {
                    log::error!("Ask error: {e}");
                    state.set_transcript.update(|t| {
                        t.push(ChatMessage::error(format!("❌ Error: {e}"), now_ms()));
                    });
                }
            }
            state.set_loading.set(false);
        });
    }

    /// Reset the transcript to the welcome message. Documents and
    /// connectivity are untouched.
    pub fn clear_chat(&self) {
        self.set_transcript.update(|t| t.clear());
    }

    /// Ask the backend to drop every uploaded document, then re-fetch the
    /// (now empty) list. The outcome is surfaced in the transcript.
    pub fn clear_all_documents(&self) {
        let state = self.clone();
        spawn_local(async move {
            match api::clear_all_documents().await {
                Ok(()) => {
                    state.set_transcript.update(|t| {
                        t.push(ChatMessage::notice(
                            "Removed all uploaded documents. Upload a new PDF to start again."
                                .to_string(),
                            now_ms(),
                        ));
                    });
                    state.refresh_documents();
                }
                Err(e) => {
                    log::error!("Clear-all error: {e}");
                    state.set_transcript.update(|t| {
                        t.push(ChatMessage::error(
                            format!("❌ Failed to remove documents: {e}"),
                            now_ms(),
                        ));
                    });
                }
            }
        });
    }
}

fn now_ms() -> f64 {
    js_sys::Date::now()
}
