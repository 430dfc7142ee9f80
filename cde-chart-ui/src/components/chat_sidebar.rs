//! Q&A chat drawer.

use crate::state::AppState;
use cde_api::models::ChatRole;
use dioxus::prelude::*;

/// Sliding chat drawer for free-form questions about the selected data.
///
/// Submitting hands the question to the app via `on_ask`; the app appends
/// the user turn, runs `POST /ai/ask`, and appends the answer.
#[component]
pub fn ChatSidebar(on_ask: EventHandler<String>) -> Element {
    let mut state = use_context::<AppState>();
    let open = (state.chat_open)();
    let pending = (state.chat_pending)();
    let error = (state.chat_error)();
    let messages = state.chat_messages.read().clone();

    let mut question = use_signal(String::new);

    let mut submit = move || {
        let text = question().trim().to_string();
        if text.is_empty() || pending {
            return;
        }
        question.set(String::new());
        on_ask.call(text);
    };

    let bubbles = messages.into_iter().enumerate().map(|(i, message)| {
        let class = match message.role {
            ChatRole::User => "chat-msg user",
            ChatRole::Assistant => "chat-msg assistant",
        };
        rsx! {
            div { key: "{i}", class: "{class}", "{message.content}" }
        }
    });

    rsx! {
        aside {
            id: "chat-sidebar",
            class: if open { "chat-drawer open" } else { "chat-drawer" },
            aria_hidden: if open { "false" } else { "true" },
            div {
                class: "chat-head",
                span { style: "font-weight: 600;", "Ask about the data" }
                button {
                    class: "btn ghost",
                    onclick: move |_| state.chat_open.set(false),
                    "Close"
                }
            }
            div {
                class: "chat-body",
                if (state.chat_messages)().is_empty() {
                    p {
                        class: "field-hint",
                        "Ask anything about the selected stations, e.g. \"Which decade was warmest?\""
                    }
                }
                {bubbles}
                if pending {
                    div { class: "chat-msg assistant", "Thinking..." }
                }
                if let Some(message) = error {
                    p { class: "field-error", "{message}" }
                }
            }
            div {
                class: "chat-input-row",
                input {
                    r#type: "text",
                    placeholder: "Ask a question...",
                    value: "{question}",
                    oninput: move |evt| question.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            submit();
                        }
                    },
                }
                button {
                    class: "btn primary",
                    disabled: pending,
                    onclick: move |_| submit(),
                    "Send"
                }
            }
        }
    }
}
