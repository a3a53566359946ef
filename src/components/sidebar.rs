use leptos::html;
use leptos::prelude::*;

use crate::format;
use crate::models::DocumentInfo;
use crate::state::AppState;

/// Sidebar holding the mode toggle, upload card, document registry and stats.
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <aside class="sidebar" class:open=move || state.sidebar_open.get()>
            <ModeToggle />
            <UploadCard />
            <DocumentList />
            <StatsCard />
        </aside>
    }
}

/// Switch between document-grounded and general-knowledge answering.
#[component]
fn ModeToggle() -> impl IntoView {
    let state = expect_context::<AppState>();

    let on_toggle = {
        let state = state.clone();
        move |_| state.set_use_rag.update(|v| *v = !*v)
    };

    view! {
        <div class="sidebar-card">
            <h2>"AI Mode"</h2>
            <div class="mode-row">
                <span>"RAG Mode"</span>
                <button
                    class="mode-switch"
                    class:on=move || state.use_rag.get()
                    on:click=on_toggle
                >
                    <span class="mode-knob"></span>
                </button>
            </div>
            <p class="card-hint">
                {move || {
                    if state.use_rag.get() {
                        "Answers will use content from your uploaded PDFs"
                    } else {
                        "General knowledge mode without PDF context"
                    }
                }}
            </p>
        </div>
    }
}

/// Upload card with a hidden file input behind a single button.
#[component]
fn UploadCard() -> impl IntoView {
    let state = expect_context::<AppState>();
    let file_input: NodeRef<html::Input> = NodeRef::new();

    let on_change = {
        let state = state.clone();
        move |_| {
            let Some(input) = file_input.get() else {
                return;
            };
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                state.upload_document(file);
            }
            // Reset so the same file can be re-selected
            input.set_value("");
        }
    };

    let trigger = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    view! {
        <div class="sidebar-card">
            <h2>"Upload PDF"</h2>
            <input
                type="file"
                accept=".pdf"
                class="hidden-file-input"
                node_ref=file_input
                on:change=on_change
            />
            <button
                class="upload-btn"
                on:click=trigger
                disabled=move || state.uploading.get()
            >
                {move || if state.uploading.get() { "Processing…" } else { "Upload PDF Document" }}
            </button>
            <p class="card-hint">"Supports research papers, manuals, articles"</p>
        </div>
    }
}

/// Uploaded-document registry with manual refresh and remove-all.
#[component]
fn DocumentList() -> impl IntoView {
    let state = expect_context::<AppState>();

    let on_refresh = {
        let state = state.clone();
        move |_| state.refresh_documents()
    };

    let on_clear_all = {
        let state = state.clone();
        move |_| state.clear_all_documents()
    };

    view! {
        <div class="sidebar-card">
            <div class="card-header">
                <h2>
                    "Documents"
                    <span class="count-badge">{move || state.documents.get().len()}</span>
                </h2>
                <button class="link-btn" on:click=on_refresh>"Refresh"</button>
            </div>

            {move || {
                let docs = state.documents.get();
                if docs.is_empty() {
                    view! {
                        <div class="empty-docs">
                            <p>"No documents yet"</p>
                            <p class="card-hint">"Upload your first PDF"</p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="doc-list">
                            <For
                                each=move || state.documents.get()
                                key=|d| d.id.clone()
                                let:doc
                            >
                                <DocumentCard doc=doc />
                            </For>
                        </div>
                        <button class="link-btn danger" on:click=on_clear_all.clone()>
                            "Remove all"
                        </button>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

/// One document entry: filename plus size, chunk count and upload date.
#[component]
fn DocumentCard(doc: DocumentInfo) -> impl IntoView {
    view! {
        <div class="doc-card">
            <h3 title=doc.filename.clone()>{doc.filename.clone()}</h3>
            <div class="doc-meta">
                <span>{format::file_size(doc.size)}</span>
                <span>"•"</span>
                <span>{format!("{} chunks", doc.chunk_count)}</span>
                <span>"•"</span>
                <span>{format::upload_date(doc.upload_time)}</span>
            </div>
            <div class="doc-status">{doc.status.clone()}</div>
        </div>
    }
}

/// Document and message counters.
#[component]
fn StatsCard() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="sidebar-card">
            <h2>"Statistics"</h2>
            <div class="stats-grid">
                <div class="stat">
                    <div class="stat-value">{move || state.documents.get().len()}</div>
                    <div class="stat-label">"Documents"</div>
                </div>
                <div class="stat">
                    <div class="stat-value">
                        {move || state.transcript.get().exchange_count()}
                    </div>
                    <div class="stat-label">"Messages"</div>
                </div>
            </div>
        </div>
    }
}
