//! Messaging app: a contact rail plus an AI assistant conversation backed by the host chat
//! service.
//!
//! Sending never blocks the window manager; the request runs on the local executor and the
//! reply (or the fallback apology) is appended when it resolves.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use desktop_app_contract::{i18n::ChatStrings, translations, AppMountContext};
use leptos::ev::KeyboardEvent;
use leptos::*;
use platform_host::{send_chat_message, unix_time_ms_now, ChatOutcome, ChatService};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Author {
    Me,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ChatMessage {
    id: String,
    author: Author,
    content: String,
    timestamp_ms: u64,
    failed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Contact {
    Assistant,
    Team,
}

impl Contact {
    const ALL: [Contact; 2] = [Self::Assistant, Self::Team];

    fn name(self, strings: &ChatStrings) -> &'static str {
        match self {
            Self::Assistant => strings.ai_assistant,
            Self::Team => strings.team,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Conversation {
    messages: Vec<ChatMessage>,
    next_local_id: u64,
    pending: usize,
}

impl Conversation {
    /// Appends the user's message and returns the prompt to send, or `None` for blank input.
    fn push_user_message(&mut self, raw: &str, timestamp_ms: u64) -> Option<String> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        self.next_local_id += 1;
        self.messages.push(ChatMessage {
            id: format!("local-{}", self.next_local_id),
            author: Author::Me,
            content: text.to_string(),
            timestamp_ms,
            failed: false,
        });
        self.pending += 1;
        Some(text.to_string())
    }

    fn apply_outcome(&mut self, outcome: ChatOutcome) {
        self.pending = self.pending.saturating_sub(1);
        let failed = outcome.error().is_some();
        let reply = outcome.reply().clone();
        self.messages.push(ChatMessage {
            id: reply.id,
            author: Author::Assistant,
            content: reply.content,
            timestamp_ms: reply.timestamp_ms,
            failed,
        });
    }

    fn is_typing(&self) -> bool {
        self.pending > 0
    }
}

fn format_time(timestamp_ms: u64) -> String {
    let minutes_of_day = (timestamp_ms / 60_000) % (24 * 60);
    format!("{:02}:{:02}", minutes_of_day / 60, minutes_of_day % 60)
}

fn message_class(message: &ChatMessage) -> &'static str {
    match (message.author, message.failed) {
        (Author::Me, _) => "chat-bubble chat-bubble-me",
        (Author::Assistant, false) => "chat-bubble chat-bubble-assistant",
        (Author::Assistant, true) => "chat-bubble chat-bubble-assistant chat-bubble-failed",
    }
}

#[component]
/// Chat window contents.
pub fn ChatApp(context: AppMountContext) -> impl IntoView {
    let locale = context.locale;
    let chat: Rc<dyn ChatService> = context.chat;
    let strings = move || &translations(locale.get()).chat;

    let active_contact = create_rw_signal(Contact::Assistant);
    let conversation = create_rw_signal(Conversation::default());
    let draft = create_rw_signal(String::new());

    let send = move || {
        let mut prompt = None;
        conversation.update(|state| {
            prompt = state.push_user_message(&draft.get_untracked(), unix_time_ms_now());
        });
        let Some(prompt) = prompt else {
            return;
        };
        draft.set(String::new());

        let chat = chat.clone();
        spawn_local(async move {
            let outcome = send_chat_message(chat.as_ref(), &prompt).await;
            if let Some(error) = outcome.error() {
                logging::warn!("chat request failed: {error}");
            }
            conversation.try_update(|state| state.apply_outcome(outcome));
        });
    };
    let send = Rc::new(send);
    let send_on_enter = send.clone();

    view! {
        <div class="app-shell app-chat-shell">
            <aside class="chat-sidebar">
                <input
                    class="chat-search app-field"
                    type="search"
                    placeholder=move || strings().search
                />
                <h2 class="chat-sidebar-title">{move || strings().messages}</h2>
                <ul class="chat-contacts" aria-label=move || strings().contacts>
                    {Contact::ALL
                        .into_iter()
                        .map(|contact| {
                            view! {
                                <li>
                                    <button
                                        type="button"
                                        class="chat-contact"
                                        class:active=move || active_contact.get() == contact
                                        on:click=move |_| active_contact.set(contact)
                                    >
                                        {move || contact.name(strings())}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </aside>

            <section class="chat-main">
                <header class="chat-header">
                    <span class="chat-header-name">{move || active_contact.get().name(strings())}</span>
                    <span class="chat-header-status">
                        {move || {
                            if conversation.with(Conversation::is_typing) {
                                strings().typing
                            } else {
                                strings().online
                            }
                        }}
                    </span>
                </header>

                <div class="chat-messages" role="log" aria-live="polite">
                    <For
                        each=move || conversation.with(|state| state.messages.clone())
                        key=|message| message.id.clone()
                        let:message
                    >
                        <div class=message_class(&message)>
                            <p>{message.content.clone()}</p>
                            <time class="chat-bubble-time">{format_time(message.timestamp_ms)}</time>
                        </div>
                    </For>
                    <Show when=move || conversation.with(Conversation::is_typing) fallback=|| ()>
                        <div class="chat-typing" aria-label=move || strings().typing>
                            <span></span>
                            <span></span>
                            <span></span>
                        </div>
                    </Show>
                </div>

                <div class="chat-composer">
                    <textarea
                        class="chat-input app-field"
                        placeholder=move || strings().type_message
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                        on:keydown=move |ev: KeyboardEvent| {
                            if ev.key() == "Enter" && !ev.shift_key() {
                                ev.prevent_default();
                                send_on_enter();
                            }
                        }
                    ></textarea>
                    <button
                        type="button"
                        class="chat-send app-action"
                        disabled=move || draft.with(|text| text.trim().is_empty())
                        on:click=move |_| send()
                    >
                        {move || strings().send}
                    </button>
                </div>
            </section>
        </div>
    }
}
