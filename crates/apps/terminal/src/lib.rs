//! Terminal desktop app: a line-based emulator with a few built-in commands.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod commands;

use std::sync::atomic::{AtomicUsize, Ordering};

use desktop_app_contract::{AppLifecycleEvent, AppMountContext};
use leptos::ev::KeyboardEvent;
use leptos::*;

use crate::commands::{
    navigate_history, run_command, CommandOutcome, PROMPT, WELCOME_BANNER, WELCOME_HINT,
};

const MAX_TERMINAL_ENTRIES: usize = 200;
static NEXT_TERMINAL_INSTANCE_ID: AtomicUsize = AtomicUsize::new(1);

#[derive(Debug, Clone, PartialEq, Eq)]
enum TranscriptEntry {
    Banner(String),
    Prompt(String),
    Output(String),
    Error(String),
}

impl TranscriptEntry {
    fn class(&self) -> &'static str {
        match self {
            Self::Banner(_) => "terminal-line terminal-banner",
            Self::Prompt(_) => "terminal-line terminal-prompt-line",
            Self::Output(_) => "terminal-line",
            Self::Error(_) => "terminal-line terminal-error",
        }
    }

    fn text(&self) -> String {
        match self {
            Self::Prompt(command) => format!("{PROMPT} {command}"),
            Self::Banner(text) | Self::Output(text) | Self::Error(text) => text.clone(),
        }
    }
}

fn welcome_transcript() -> Vec<TranscriptEntry> {
    vec![
        TranscriptEntry::Banner(WELCOME_BANNER.to_string()),
        TranscriptEntry::Output(WELCOME_HINT.to_string()),
    ]
}

fn append_command(transcript: &mut Vec<(usize, TranscriptEntry)>, next_key: &mut usize, line: &str) {
    let mut push = |entry: TranscriptEntry, transcript: &mut Vec<(usize, TranscriptEntry)>| {
        transcript.push((*next_key, entry));
        *next_key += 1;
    };

    match run_command(line) {
        CommandOutcome::Clear => transcript.clear(),
        outcome => {
            push(TranscriptEntry::Prompt(line.trim().to_string()), transcript);
            match outcome {
                CommandOutcome::Output(lines) => {
                    for text in lines {
                        push(TranscriptEntry::Output(text), transcript);
                    }
                }
                CommandOutcome::NotFound(message) => push(TranscriptEntry::Error(message), transcript),
                CommandOutcome::Clear | CommandOutcome::Empty => {}
            }
        }
    }

    if transcript.len() > MAX_TERMINAL_ENTRIES {
        let overflow = transcript.len() - MAX_TERMINAL_ENTRIES;
        transcript.drain(0..overflow);
    }
}

#[component]
/// Terminal window contents.
pub fn TerminalApp(context: AppMountContext) -> impl IntoView {
    let lifecycle = context.lifecycle;
    let instance_id = NEXT_TERMINAL_INSTANCE_ID.fetch_add(1, Ordering::Relaxed);
    let input_id = format!("terminal-input-{instance_id}");

    let initial: Vec<(usize, TranscriptEntry)> = welcome_transcript().into_iter().enumerate().collect();
    let next_key = store_value(initial.len());
    let transcript = create_rw_signal(initial);
    let input = create_rw_signal(String::new());
    let history = store_value(Vec::<String>::new());
    let history_cursor = create_rw_signal(None::<usize>);
    let input_ref = create_node_ref::<html::Input>();

    create_effect(move |_| {
        if lifecycle.get() == AppLifecycleEvent::Focused {
            if let Some(element) = input_ref.get_untracked() {
                let _ = element.focus();
            }
        }
    });

    let submit = move |line: String| {
        if !line.trim().is_empty() {
            history.update_value(|entries| entries.push(line.trim().to_string()));
        }
        next_key.update_value(|key| transcript.update(|entries| append_command(entries, key, &line)));
        history_cursor.set(None);
        input.set(String::new());
    };

    let navigate = move |direction: i32| {
        let next = history.with_value(|entries| {
            let next = navigate_history(entries, history_cursor.get_untracked(), direction);
            (next, next.and_then(|index| entries.get(index).cloned()))
        });
        history_cursor.set(next.0);
        input.set(next.1.unwrap_or_default());
    };

    view! {
        <div class="app-shell app-terminal-shell" data-lifecycle=move || lifecycle.get().token()>
            <div class="terminal-screen" role="log" aria-live="polite">
                <For each=move || transcript.get() key=|(key, _)| *key let:entry>
                    <div class=entry.1.class()>{entry.1.text()}</div>
                </For>
            </div>

            <div class="terminal-input-row">
                <label class="terminal-prompt" for=input_id.clone()>{PROMPT}</label>
                <input
                    node_ref=input_ref
                    id=input_id
                    class="terminal-input app-field"
                    type="text"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=move |ev: KeyboardEvent| match ev.key().as_str() {
                        "Enter" => submit(input.get_untracked()),
                        "ArrowUp" => {
                            ev.prevent_default();
                            navigate(-1);
                        }
                        "ArrowDown" => {
                            ev.prevent_default();
                            navigate(1);
                        }
                        "l" | "L" if ev.ctrl_key() => {
                            ev.prevent_default();
                            transcript.set(Vec::new());
                        }
                        _ => {}
                    }
                    autocomplete="off"
                    spellcheck="false"
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn texts(transcript: &[(usize, TranscriptEntry)]) -> Vec<String> {
        transcript.iter().map(|(_, entry)| entry.text()).collect()
    }

    #[test]
    fn commands_echo_prompt_then_output() {
        let mut transcript = Vec::new();
        let mut next_key = 0;
        append_command(&mut transcript, &mut next_key, "ls");
        append_command(&mut transcript, &mut next_key, "whoami");

        assert_eq!(
            texts(&transcript),
            vec![
                "$ ls",
                "Documents  Downloads  Music  Pictures  Videos",
                "$ whoami",
                "Command not found: whoami",
            ]
        );
        assert_eq!(next_key, 4);
    }

    #[test]
    fn clear_wipes_transcript_without_echo() {
        let mut transcript: Vec<_> = welcome_transcript().into_iter().enumerate().collect();
        let mut next_key = transcript.len();
        append_command(&mut transcript, &mut next_key, "clear");
        assert!(transcript.is_empty());
    }

    #[test]
    fn transcript_is_capped() {
        let mut transcript = Vec::new();
        let mut next_key = 0;
        for _ in 0..MAX_TERMINAL_ENTRIES {
            append_command(&mut transcript, &mut next_key, "ls");
        }
        assert_eq!(transcript.len(), MAX_TERMINAL_ENTRIES);
        assert_eq!(transcript.last().map(|(key, _)| *key), Some(next_key - 1));
    }
}
