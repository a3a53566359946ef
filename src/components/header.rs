use leptos::prelude::*;

use crate::models::BackendStatus;
use crate::state::AppState;

/// Top bar: title, connectivity pill, RAG-mode indicator, chat controls.
#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<AppState>();

    let status_class = move || match state.backend_status.get() {
        BackendStatus::Connected => "status-pill connected",
        BackendStatus::Disconnected => "status-pill disconnected",
        BackendStatus::Checking => "status-pill checking",
    };

    let on_clear = {
        let state = state.clone();
        move |_| state.clear_chat()
    };

    let toggle_sidebar = {
        let state = state.clone();
        move |_| {
            state
                .set_sidebar_open
                .update(|open| *open = !*open);
        }
    };

    view! {
        <header class="app-header">
            <div class="header-title">
                <h1>"PDF RAG Assistant"</h1>
                <div class=status_class>
                    {move || state.backend_status.get().label()}
                </div>
            </div>

            <div class="header-controls">
                <div class="mode-indicator">
                    {move || if state.use_rag.get() { "RAG Active" } else { "General Mode" }}
                </div>
                <button class="clear-chat-btn" on:click=on_clear>
                    "Clear Chat"
                </button>
                <button class="sidebar-toggle" on:click=toggle_sidebar>
                    "☰"
                </button>
            </div>
        </header>
    }
}
