//! Terminal tab UI for the portfolio window.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod commands;

use leptos::ev::KeyboardEvent;
use leptos::*;
use serde::{Deserialize, Serialize};
use system_ui::prelude::*;

use crate::commands::{banner, submit, TranscriptEntry, PROMPT};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Portfolio facts the canned commands answer with.
pub struct TerminalProfile {
    /// Name shown in the banner.
    pub owner: String,
    /// Address printed by `contact`.
    pub email: String,
    /// Sentence printed by `about`.
    pub about: String,
    /// Modules listed by `skills`.
    pub skills: Vec<String>,
}

fn render_entry(entry: &TranscriptEntry) -> View {
    match entry {
        TranscriptEntry::Prompt(typed) => {
            let line = format!("{PROMPT} {typed}").trim_end().to_string();
            view! { <TerminalLine tone=TextTone::Accent>{line}</TerminalLine> }.into_view()
        }
        TranscriptEntry::Output(text) => {
            let text = text.clone();
            view! { <TerminalLine>{text}</TerminalLine> }.into_view()
        }
        TranscriptEntry::Blank => view! { <TerminalLine>{"\u{a0}"}</TerminalLine> }.into_view(),
    }
}

#[component]
/// Terminal tab contents: transcript, prompt, and a single-line input.
///
/// Clicking anywhere on the surface focuses the input.
pub fn TerminalApp(profile: TerminalProfile) -> impl IntoView {
    let transcript = create_rw_signal(banner(&profile));
    let input = create_rw_signal(String::new());
    let input_ref = create_node_ref::<html::Input>();
    let surface_ref = create_node_ref::<html::Div>();
    let profile = store_value(profile);

    let scroll_to_end = move || {
        if let Some(surface) = surface_ref.get_untracked() {
            surface.set_scroll_top(surface.scroll_height());
        }
    };

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ev.prevent_default();
        let line = input.get_untracked();
        profile.with_value(|profile| {
            transcript.update(|entries| submit(entries, &line, profile));
        });
        input.set(String::new());
        scroll_to_end();
    };

    view! {
        <TerminalSurface
            node_ref=surface_ref
            role="log".to_string()
            aria_live="polite"
            on_click=Callback::new(move |_| {
                if let Some(field) = input_ref.get_untracked() {
                    let _ = field.focus();
                }
            })
        >
            <For
                each=move || transcript.get().into_iter().enumerate()
                key=|(idx, entry)| (*idx, entry.clone())
                let:row
            >
                {render_entry(&row.1)}
            </For>
            <TerminalPrompt>
                <span aria-hidden="true">{PROMPT}</span>
                <input
                    node_ref=input_ref
                    type="text"
                    aria-label="Terminal input"
                    autocomplete="off"
                    spellcheck="false"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
            </TerminalPrompt>
        </TerminalSurface>
    }
}
