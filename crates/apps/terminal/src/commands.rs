//! Canned command interpreter behind the terminal tab.

use serde::{Deserialize, Serialize};

use crate::TerminalProfile;

/// Prompt printed before every echoed command.
pub const PROMPT: &str = r"C:\Users\Visitor>";

/// Oldest entries are dropped past this length.
pub const MAX_TERMINAL_ENTRIES: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// One rendered transcript row.
pub enum TranscriptEntry {
    /// Echo of what the visitor typed, after the prompt.
    Prompt(String),
    /// Command response text.
    Output(String),
    /// Empty spacer row.
    Blank,
}

/// Greeting shown on mount and after `clear`.
pub fn banner(profile: &TerminalProfile) -> Vec<TranscriptEntry> {
    vec![
        TranscriptEntry::Output("RetroOS [Version 4.00.950]".to_string()),
        TranscriptEntry::Output(format!("(C) {}. Type `help` to begin.", profile.owner)),
        TranscriptEntry::Blank,
    ]
}

fn response(lines: impl IntoIterator<Item = String>) -> Vec<TranscriptEntry> {
    lines
        .into_iter()
        .map(TranscriptEntry::Output)
        .chain(std::iter::once(TranscriptEntry::Blank))
        .collect()
}

/// Runs one submitted line against the transcript.
///
/// Commands are matched case-insensitively after trimming. The echo is the line exactly as typed.
pub fn submit(transcript: &mut Vec<TranscriptEntry>, raw: &str, profile: &TerminalProfile) {
    let typed = raw.trim();
    transcript.push(TranscriptEntry::Prompt(raw.to_string()));
    if typed.is_empty() {
        trim_transcript(transcript);
        return;
    }

    let output = match typed.to_lowercase().as_str() {
        "help" => response([
            "Available commands:".to_string(),
            "- [about] : Who am I?".to_string(),
            "- [skills] : What can I do?".to_string(),
            "- [contact] : Hire me".to_string(),
            "- [clear] : Clean screen".to_string(),
        ]),
        "about" => response([format!("> {}", profile.about)]),
        "skills" => response([format!(
            "> LOADED MODULES: {}",
            profile.skills.join(", ")
        )]),
        "contact" => response([
            format!("> EMAIL: {}", profile.email),
            "> STATUS: Ready to work.".to_string(),
        ]),
        "clear" => {
            *transcript = banner(profile);
            return;
        }
        _ => response(["> Available commands = help".to_string()]),
    };

    transcript.extend(output);
    trim_transcript(transcript);
}

fn trim_transcript(transcript: &mut Vec<TranscriptEntry>) {
    if transcript.len() > MAX_TERMINAL_ENTRIES {
        let overflow = transcript.len() - MAX_TERMINAL_ENTRIES;
        transcript.drain(0..overflow);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn profile() -> TerminalProfile {
        TerminalProfile {
            owner: "Ada".to_string(),
            email: "ada@example.dev".to_string(),
            about: "Builds small things well.".to_string(),
            skills: vec!["Rust".to_string(), "SQL".to_string()],
        }
    }

    fn run(input: &str) -> Vec<TranscriptEntry> {
        let mut transcript = Vec::new();
        submit(&mut transcript, input, &profile());
        transcript
    }

    #[test]
    fn blank_input_echoes_the_prompt_without_a_response() {
        assert_eq!(run(""), vec![TranscriptEntry::Prompt(String::new())]);
        assert_eq!(run("   "), vec![TranscriptEntry::Prompt("   ".to_string())]);
    }

    #[test]
    fn commands_match_trimmed_and_case_insensitive_but_echo_as_typed() {
        let transcript = run("  SKILLS ");

        assert_eq!(
            transcript,
            vec![
                TranscriptEntry::Prompt("  SKILLS ".to_string()),
                TranscriptEntry::Output("> LOADED MODULES: Rust, SQL".to_string()),
                TranscriptEntry::Blank,
            ]
        );
    }

    #[test]
    fn contact_prints_the_configured_email() {
        let transcript = run("contact");
        assert_eq!(
            transcript[1],
            TranscriptEntry::Output("> EMAIL: ada@example.dev".to_string())
        );
    }

    #[test]
    fn unknown_input_points_to_help() {
        let transcript = run("sudo rm -rf /");
        assert_eq!(
            transcript[1],
            TranscriptEntry::Output("> Available commands = help".to_string())
        );
    }

    #[test]
    fn clear_resets_to_the_banner() {
        let profile = profile();
        let mut transcript = banner(&profile);
        submit(&mut transcript, "help", &profile);
        submit(&mut transcript, "Clear", &profile);

        assert_eq!(transcript, banner(&profile));
    }

    #[test]
    fn transcript_is_capped() {
        let profile = profile();
        let mut transcript = Vec::new();
        for _ in 0..MAX_TERMINAL_ENTRIES {
            submit(&mut transcript, "about", &profile);
        }

        assert_eq!(transcript.len(), MAX_TERMINAL_ENTRIES);
        assert_eq!(transcript.last(), Some(&TranscriptEntry::Blank));
    }
}
