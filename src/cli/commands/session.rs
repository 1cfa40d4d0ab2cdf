//! Session command implementation.
//!
//! The `regex-playground session` command reads line commands from stdin
//! and feeds them through the playground event loop. Regex edits settle
//! into history after the configured debounce delay, exactly as they would
//! while typing.
//!
//! ```text
//! text  <text>       set the text to search
//! regex <regex>      set the regex
//! flags <flags>      replace the flags
//! enable <flag>      add a single flag
//! disable <flag>     remove a single flag
//! load <name>        load a saved or built-in pattern
//! select <name>      select a pattern without loading it
//! save <name>        save the current regex and flags
//! delete <name>      delete a saved pattern
//! flush              settle pending history now
//! quit               leave (pending history is discarded)
//! ```

use std::io::BufRead;
use std::sync::mpsc;
use std::thread;

use tracing::{debug, warn};

use crate::cli::args::SessionArgs;
use crate::error::Result;
use crate::playground::{run_event_loop, Event, Intent, PlaygroundState, Update};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ProjectContext};
use super::display::show_results;

/// The session command implementation.
pub struct SessionCommand {
    context: ProjectContext,
    args: SessionArgs,
}

impl SessionCommand {
    /// Create a new session command.
    pub fn new(context: ProjectContext, args: SessionArgs) -> Self {
        Self { context, args }
    }

    /// Run a session reading commands from `input`.
    pub fn run<R>(&self, input: R, ui: &mut dyn UserInterface) -> Result<CommandResult>
    where
        R: BufRead + Send + 'static,
    {
        let mut config = self.context.load_config()?;
        if let Some(delay) = self.args.delay.filter(|d| *d > 0) {
            config.debounce.delay_ms = delay;
        }

        let mut session = self.context.open_session(&config);
        let (tx, rx) = mpsc::channel();
        let reader = thread::spawn(move || {
            for line in input.lines() {
                let Ok(line) = line else { break };
                match parse_line(&line) {
                    Ok(events) => {
                        for event in events {
                            let stop = event == Event::Shutdown;
                            if tx.send(event).is_err() || stop {
                                return;
                            }
                        }
                    }
                    Err(message) => warn!("{}", message),
                }
            }
        });

        ui.show_header("Regex Playground session");
        ui.show_hint("Type `quit` to leave.");
        run_event_loop(&mut session, &rx, |state, update| render(ui, state, update));

        if reader.join().is_err() {
            warn!("Input reader stopped unexpectedly");
        }
        let state = session.close();
        debug!("Session ended on /{}/{}", state.regex(), state.flags());
        ui.success("Session ended");
        Ok(CommandResult::success())
    }
}

impl Command for SessionCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.run(std::io::BufReader::new(std::io::stdin()), ui)
    }
}

fn render(ui: &mut dyn UserInterface, state: &PlaygroundState, update: Update) {
    match update {
        Update::Intent => {
            ui.show_item("pattern", &format!("/{}/{}", state.regex(), state.flags()));
            if !state.regex().is_empty() && !state.text().is_empty() {
                show_results(ui, state);
            }
        }
        Update::Settled => {
            if let Some(latest) = state.history().first() {
                ui.show_item("history", latest);
            }
        }
    }
}

/// Turn one input line into events.
///
/// Blank lines produce no events. Unknown commands are an error message.
pub fn parse_line(line: &str) -> std::result::Result<Vec<Event>, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (command, arg) = match line.trim_start().split_once(' ') {
        Some((command, arg)) => (command, arg.to_string()),
        None => (line.trim(), String::new()),
    };

    let single = |intent: Intent| Ok(vec![Event::Intent(intent)]);
    let flag = |arg: &str| {
        let mut chars = arg.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(format!("Expected a single flag character, got '{}'", arg)),
        }
    };

    match command {
        "" => Ok(Vec::new()),
        "text" => single(Intent::SetText(arg)),
        "regex" => single(Intent::SetRegex(arg)),
        "flags" => single(Intent::SetFlags(arg.trim().to_string())),
        "enable" => single(Intent::ToggleFlag {
            flag: flag(&arg)?,
            enabled: true,
        }),
        "disable" => single(Intent::ToggleFlag {
            flag: flag(&arg)?,
            enabled: false,
        }),
        "load" => single(Intent::LoadPattern(arg.trim().to_string())),
        "select" => single(Intent::SelectPattern(arg.trim().to_string())),
        "save" => Ok(vec![
            Event::Intent(Intent::SetDraftName(arg.trim().to_string())),
            Event::Intent(Intent::SaveDraft),
        ]),
        "delete" => single(Intent::DeletePattern(arg.trim().to_string())),
        "flush" => Ok(vec![Event::Flush]),
        "quit" | "exit" => Ok(vec![Event::Shutdown]),
        other => Err(format!("Unknown session command: '{}'", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playground::SavedPattern;
    use crate::storage::{FileStorage, Persistence, REGEX_HISTORY_KEY, SAVED_PATTERNS_KEY};
    use crate::ui::MockUI;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run(temp: &TempDir, script: &str) -> MockUI {
        let cmd = SessionCommand::new(
            ProjectContext::new(temp.path(), None),
            SessionArgs::default(),
        );
        let mut ui = MockUI::new();
        let result = cmd
            .run(Cursor::new(script.as_bytes().to_vec()), &mut ui)
            .unwrap();
        assert!(result.success);
        ui
    }

    fn persistence(temp: &TempDir) -> Persistence<FileStorage> {
        Persistence::new(FileStorage::new(
            temp.path().join(".regex-playground").join("data"),
        ))
    }

    #[test]
    fn parses_commands() {
        assert_eq!(
            parse_line("regex a b"),
            Ok(vec![Event::Intent(Intent::SetRegex("a b".into()))])
        );
        assert_eq!(
            parse_line("text "),
            Ok(vec![Event::Intent(Intent::SetText(String::new()))])
        );
        assert_eq!(
            parse_line("enable i"),
            Ok(vec![Event::Intent(Intent::ToggleFlag {
                flag: 'i',
                enabled: true
            })])
        );
        assert_eq!(parse_line("flush"), Ok(vec![Event::Flush]));
        assert_eq!(parse_line("quit\r"), Ok(vec![Event::Shutdown]));
        assert_eq!(parse_line("   "), Ok(vec![]));
    }

    #[test]
    fn save_sets_draft_then_saves() {
        assert_eq!(
            parse_line("save digits"),
            Ok(vec![
                Event::Intent(Intent::SetDraftName("digits".into())),
                Event::Intent(Intent::SaveDraft),
            ])
        );
    }

    #[test]
    fn rejects_unknown_commands() {
        assert!(parse_line("frobnicate x").is_err());
        assert!(parse_line("enable ig").is_err());
        assert!(parse_line("disable").is_err());
    }

    #[test]
    fn session_matches_and_records_history() {
        let temp = TempDir::new().unwrap();
        let ui = run(&temp, "text a1b22\nregex \\d+\nflush\nquit\n");

        assert_eq!(ui.matches().len(), 2);
        assert!(ui.has_item("history", r"\d+"));
        assert!(ui.has_success("Session ended"));

        let history: Vec<String> = persistence(&temp).load(REGEX_HISTORY_KEY);
        assert_eq!(history, vec![r"\d+"]);
    }

    #[test]
    fn quitting_discards_unsettled_history() {
        let temp = TempDir::new().unwrap();
        run(&temp, "regex abc\nquit\n");

        let history: Vec<String> = persistence(&temp).load(REGEX_HISTORY_KEY);
        assert!(history.is_empty());
    }

    #[test]
    fn save_and_delete_persist() {
        let temp = TempDir::new().unwrap();
        run(&temp, "regex \\w+\nflags gi\nsave words\nquit\n");

        let saved: Vec<SavedPattern> = persistence(&temp).load(SAVED_PATTERNS_KEY);
        assert_eq!(saved, vec![SavedPattern::new("words", r"\w+", "gi")]);

        run(&temp, "delete words\nquit\n");
        let saved: Vec<SavedPattern> = persistence(&temp).load(SAVED_PATTERNS_KEY);
        assert!(saved.is_empty());
    }

    #[test]
    fn load_builtin_pattern() {
        let temp = TempDir::new().unwrap();
        let ui = run(&temp, "text on 2024-05-06\nload date\n");

        assert!(ui.has_item("pattern", r"/\d{4}-\d{2}-\d{2}/g"));
        assert_eq!(ui.matches().len(), 1);
        assert_eq!(ui.matches()[0].value, "2024-05-06");
    }

    #[test]
    fn invalid_regex_reports_error() {
        let temp = TempDir::new().unwrap();
        let ui = run(&temp, "text abc\nregex (\nquit\n");
        assert_eq!(ui.errors().len(), 1);
    }

    #[test]
    fn unknown_lines_are_skipped() {
        let temp = TempDir::new().unwrap();
        let ui = run(&temp, "bogus\ntext x\nregex x\n");
        assert_eq!(ui.matches().len(), 1);
    }
}
