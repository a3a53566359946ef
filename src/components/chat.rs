use leptos::ev;
use leptos::html;
use leptos::prelude::*;

use crate::format;
use crate::models::ChatMessage;
use crate::state::AppState;

/// Main chat area with the transcript and the input row.
#[component]
pub fn ChatArea() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <main class="chat-area">
            <div class="messages-container">
                <For
                    each=move || state.transcript.get().messages()
                    key=|m| m.id.clone()
                    let:msg
                >
                    <MessageBubble msg=msg />
                </For>

                {move || {
                    state.loading.get().then(|| {
                        view! {
                            <div class="message assistant pending">
                                <span class="typing-dots">"● ● ●"</span>
                                <span class="pending-label">
                                    {if state.use_rag.get_untracked() {
                                        "Searching documents and thinking…"
                                    } else {
                                        "Thinking…"
                                    }}
                                </span>
                            </div>
                        }
                    })
                }}
            </div>

            <ChatInput />

            <footer class="chat-footer">
                "Responses are generated by AI and should be verified."
            </footer>
        </main>
    }
}

/// A single transcript entry, rendered as a user or assistant bubble.
#[component]
fn MessageBubble(msg: ChatMessage) -> impl IntoView {
    if msg.is_user {
        let time = msg.timestamp.map(format::clock_time);
        view! {
            <div class="message user">
                <p>{msg.question}</p>
                {time.map(|t| view! { <div class="msg-time">{t}</div> })}
            </div>
        }
        .into_any()
    } else {
        let time = msg.timestamp.map(format::clock_time);
        let sources = msg.sources.clone();
        view! {
            <div class="message assistant" class:grounded=msg.context_used>
                {msg.context_used.then(|| {
                    view! { <div class="context-badge">"Using PDF Context"</div> }
                })}
                <p class="answer-text">{msg.answer}</p>
                {(!sources.is_empty()).then(|| {
                    view! {
                        <div class="sources">
                            <div class="sources-label">"Sources from PDFs"</div>
                            <div class="source-chips">
                                {sources
                                    .into_iter()
                                    .map(|s| view! { <span class="source-chip" title=s.clone()>{format!("📄 {s}")}</span> })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })}
                {time.map(|t| view! { <div class="msg-time">{t}</div> })}
            </div>
        }
        .into_any()
    }
}

/// Query input with send button and an inline upload shortcut.
#[component]
fn ChatInput() -> impl IntoView {
    let state = expect_context::<AppState>();
    let file_input: NodeRef<html::Input> = NodeRef::new();

    let can_send = {
        let state = state.clone();
        move || {
            !state.loading.get()
                && state.backend_status.get().is_connected()
                && !state.query.get().trim().is_empty()
        }
    };

    let send = {
        let state = state.clone();
        move || state.ask()
    };

    let on_keydown = {
        let send = send.clone();
        move |ev: ev::KeyboardEvent| {
            if ev.key() == "Enter" && !ev.shift_key() {
                ev.prevent_default();
                send();
            }
        }
    };

    let on_file_change = {
        let state = state.clone();
        move |_| {
            let Some(input) = file_input.get() else {
                return;
            };
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                state.upload_document(file);
            }
            input.set_value("");
        }
    };

    let placeholder = {
        let state = state.clone();
        move || {
            if state.documents.get().is_empty() {
                "Upload a PDF to get started or ask a general question…"
            } else {
                "Ask anything about your documents or general knowledge…"
            }
        }
    };

    view! {
        <div class="input-area">
            <textarea
                rows="1"
                placeholder=placeholder
                prop:value=state.query
                on:input=move |ev| state.set_query.set(event_target_value(&ev))
                on:keydown=on_keydown
                disabled=move || state.loading.get()
            />

            <div class="input-controls">
                <input
                    type="file"
                    accept=".pdf"
                    class="hidden-file-input"
                    node_ref=file_input
                    on:change=on_file_change
                />
                <button
                    class="attach-btn"
                    title="Upload PDF"
                    on:click=move |_| {
                        if let Some(input) = file_input.get() {
                            input.click();
                        }
                    }
                    disabled=move || state.uploading.get()
                >
                    "📎"
                </button>

                <span class="doc-counter">
                    {move || {
                        let n = state.documents.get().len();
                        format!("{n} document{} loaded", if n == 1 { "" } else { "s" })
                    }}
                </span>

                <button
                    class="send-btn"
                    on:click=move |_| send()
                    disabled=move || !can_send()
                >
                    {move || if state.loading.get() { "Sending…" } else { "Send" }}
                </button>
            </div>
        </div>
    }
}
