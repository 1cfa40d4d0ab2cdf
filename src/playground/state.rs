//! Playground state and its transitions.
//!
//! [`PlaygroundState::apply`] is the only way to change the state. It runs
//! synchronously, recomputes derived fields (matches, validity, timing,
//! explanations), and returns the [`Effect`]s the caller must carry out:
//! debounced history scheduling and persistence writes. The transition
//! itself touches neither timers nor storage.

use std::time::Instant;

use tracing::debug;

use super::library::{self, builtin, SavedPattern, NO_SELECTION};
use super::History;
use crate::explain::explain;
use crate::matcher::{toggle_flag, CompiledPattern, Match, DEFAULT_FLAGS};

/// A user intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Replace the regex source.
    SetRegex(String),
    /// Replace the flag set.
    SetFlags(String),
    /// Add or remove one flag.
    ToggleFlag { flag: char, enabled: bool },
    /// Replace the subject text.
    SetText(String),
    /// Record a settled regex in history.
    AddToHistory(String),
    /// Save a pattern under a name.
    SavePattern {
        name: String,
        regex: String,
        flags: String,
    },
    /// Save the current regex and flags under the draft name.
    SaveDraft,
    /// Delete every saved pattern with this name.
    DeletePattern(String),
    /// Load a saved or built-in pattern, or reset on [`NO_SELECTION`].
    LoadPattern(String),
    /// Change the selected pattern name only.
    SelectPattern(String),
    /// Edit the draft pattern name.
    SetDraftName(String),
}

/// Work a transition hands back to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Feed this regex to the history debouncer.
    ScheduleHistory(String),
    /// The history changed and should be written out.
    PersistHistory,
    /// The saved patterns changed and should be written out.
    PersistSavedPatterns,
}

/// The playground aggregate.
#[derive(Debug, Clone)]
pub struct PlaygroundState {
    regex: String,
    flags: String,
    default_flags: String,
    text: String,
    matches: Vec<Match>,
    is_valid: bool,
    last_error: Option<String>,
    execution_time_ms: Option<f64>,
    explanations: Vec<String>,
    saved_patterns: Vec<SavedPattern>,
    history: History,
    selected_pattern: String,
    draft_name: String,
}

impl Default for PlaygroundState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaygroundState {
    /// An empty playground with the default flags.
    pub fn new() -> Self {
        Self {
            regex: String::new(),
            flags: DEFAULT_FLAGS.to_string(),
            default_flags: DEFAULT_FLAGS.to_string(),
            text: String::new(),
            matches: Vec::new(),
            is_valid: true,
            last_error: None,
            execution_time_ms: None,
            explanations: Vec::new(),
            saved_patterns: Vec::new(),
            history: History::new(),
            selected_pattern: String::new(),
            draft_name: String::new(),
        }
    }

    /// Use `flags` both now and whenever the playground resets.
    pub fn with_default_flags(mut self, flags: &str) -> Self {
        self.default_flags = flags.to_string();
        self.flags = self.default_flags.clone();
        self
    }

    /// Seed the persisted collections.
    pub fn with_collections(mut self, saved_patterns: Vec<SavedPattern>, history: Vec<String>) -> Self {
        self.saved_patterns = library::dedupe(saved_patterns);
        self.history = History::from_entries(history);
        self
    }

    pub fn regex(&self) -> &str {
        &self.regex
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Matches of the current regex in the current text.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Whether the current regex and flags compile.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// The compile diagnostic, when the regex is invalid.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// How long the last successful extraction took.
    pub fn execution_time_ms(&self) -> Option<f64> {
        self.execution_time_ms
    }

    /// Explanations of the current regex.
    pub fn explanations(&self) -> &[String] {
        &self.explanations
    }

    pub fn saved_patterns(&self) -> &[SavedPattern] {
        &self.saved_patterns
    }

    /// Regex history, most recent first.
    pub fn history(&self) -> &[String] {
        self.history.entries()
    }

    pub fn selected_pattern(&self) -> &str {
        &self.selected_pattern
    }

    pub fn draft_name(&self) -> &str {
        &self.draft_name
    }

    /// Apply `intent` and return the effects the caller must perform.
    pub fn apply(&mut self, intent: Intent) -> Vec<Effect> {
        let mut effects = Vec::new();

        match intent {
            Intent::SetRegex(regex) => {
                self.set_regex(regex.clone());
                self.recompute();
                effects.push(Effect::ScheduleHistory(regex));
            }
            Intent::SetFlags(flags) => {
                self.flags = flags;
                self.recompute();
            }
            Intent::ToggleFlag { flag, enabled } => {
                self.flags = toggle_flag(&self.flags, flag, enabled);
                self.recompute();
            }
            Intent::SetText(text) => {
                self.text = text;
                self.recompute();
            }
            Intent::AddToHistory(regex) => {
                if self.history.push(&regex) {
                    effects.push(Effect::PersistHistory);
                }
            }
            Intent::SavePattern { name, regex, flags } => {
                if self.save_pattern(name, regex, flags) {
                    effects.push(Effect::PersistSavedPatterns);
                }
            }
            Intent::SaveDraft => {
                let name = self.draft_name.clone();
                let (regex, flags) = (self.regex.clone(), self.flags.clone());
                if self.save_pattern(name, regex, flags) {
                    effects.push(Effect::PersistSavedPatterns);
                }
            }
            Intent::DeletePattern(name) => {
                if library::remove(&mut self.saved_patterns, &name) {
                    effects.push(Effect::PersistSavedPatterns);
                }
            }
            Intent::LoadPattern(name) => {
                self.load_pattern(&name);
                self.selected_pattern = name;
            }
            Intent::SelectPattern(name) => {
                self.selected_pattern = name;
            }
            Intent::SetDraftName(name) => {
                self.draft_name = name;
            }
        }

        effects
    }

    fn set_regex(&mut self, regex: String) {
        self.regex = regex;
        self.last_error = None;
        self.explanations = explain(&self.regex);
    }

    fn save_pattern(&mut self, name: String, regex: String, flags: String) -> bool {
        if name.is_empty() || regex.is_empty() {
            debug!("Ignoring save without a name or regex");
            return false;
        }
        library::upsert(&mut self.saved_patterns, SavedPattern { name, regex, flags });
        self.draft_name.clear();
        true
    }

    fn load_pattern(&mut self, name: &str) {
        let (regex, flags) = if name == NO_SELECTION {
            (String::new(), self.default_flags.clone())
        } else if let Some(saved) = self.saved_patterns.iter().find(|p| p.name == name) {
            (saved.regex.clone(), saved.flags.clone())
        } else if let Some(pattern) = builtin(name) {
            (pattern.regex.to_string(), self.default_flags.clone())
        } else {
            debug!("No saved or built-in pattern named '{}'", name);
            return;
        };

        self.set_regex(regex);
        self.flags = flags;
        self.recompute();
    }

    /// Recompute matches, validity, and timing from regex, flags, and text.
    fn recompute(&mut self) {
        self.matches.clear();
        self.execution_time_ms = None;
        self.last_error = None;
        self.is_valid = true;

        if self.regex.is_empty() || self.text.is_empty() {
            return;
        }

        match CompiledPattern::new(&self.regex, &self.flags) {
            Ok(pattern) => {
                let start = Instant::now();
                self.matches = pattern.find_matches(&self.text);
                self.execution_time_ms = Some(start.elapsed().as_secs_f64() * 1000.0);
            }
            Err(e) => {
                self.is_valid = false;
                self.last_error = Some(e.diagnostic());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(state: &mut PlaygroundState, regex: &str, text: &str) {
        state.apply(Intent::SetRegex(regex.to_string()));
        state.apply(Intent::SetText(text.to_string()));
    }

    #[test]
    fn initial_state() {
        let state = PlaygroundState::new();
        assert_eq!(state.regex(), "");
        assert_eq!(state.flags(), "g");
        assert_eq!(state.text(), "");
        assert!(state.is_valid());
        assert!(state.matches().is_empty());
        assert!(state.last_error().is_none());
        assert!(state.saved_patterns().is_empty());
        assert_eq!(state.selected_pattern(), "");
        assert_eq!(state.draft_name(), "");
        assert!(state.execution_time_ms().is_none());
        assert!(state.history().is_empty());
    }

    #[test]
    fn set_regex_schedules_history_without_adding() {
        let mut state = PlaygroundState::new();
        let effects = state.apply(Intent::SetRegex("test".into()));
        assert_eq!(effects, vec![Effect::ScheduleHistory("test".into())]);
        assert_eq!(state.regex(), "test");
        assert!(state.history().is_empty());
    }

    #[test]
    fn matches_recompute_on_regex_and_text() {
        let mut state = PlaygroundState::new();
        set(&mut state, r"\btest\b", "This is a test string for testing.");

        assert_eq!(
            state.matches(),
            [Match {
                index: 10,
                value: "test".into()
            }]
        );
        assert!(state.is_valid());
        assert!(state.last_error().is_none());
        assert!(state.execution_time_ms().is_some());
    }

    #[test]
    fn invalid_regex_sets_error() {
        let mut state = PlaygroundState::new();
        set(&mut state, "[", "abc");

        assert!(!state.is_valid());
        assert!(state.last_error().is_some());
        assert!(state.matches().is_empty());
        assert!(state.execution_time_ms().is_none());
    }

    #[test]
    fn invalid_regex_with_empty_text_short_circuits() {
        let mut state = PlaygroundState::new();
        state.apply(Intent::SetRegex("[".into()));
        assert!(state.is_valid());
        assert!(state.last_error().is_none());
    }

    #[test]
    fn clearing_text_resets_derived_fields() {
        let mut state = PlaygroundState::new();
        set(&mut state, "a", "aaa");
        assert_eq!(state.matches().len(), 3);

        state.apply(Intent::SetText(String::new()));
        assert!(state.matches().is_empty());
        assert!(state.execution_time_ms().is_none());
    }

    #[test]
    fn fixing_regex_clears_error() {
        let mut state = PlaygroundState::new();
        set(&mut state, "(", "abc");
        assert!(!state.is_valid());

        state.apply(Intent::SetRegex("(b)".into()));
        assert!(state.is_valid());
        assert!(state.last_error().is_none());
        assert_eq!(state.matches().len(), 1);
    }

    #[test]
    fn flags_change_recomputes() {
        let mut state = PlaygroundState::new();
        set(&mut state, "a", "aAa");
        assert_eq!(state.matches().len(), 2);

        let effects = state.apply(Intent::SetFlags("gi".into()));
        assert!(effects.is_empty());
        assert_eq!(state.matches().len(), 3);

        state.apply(Intent::ToggleFlag {
            flag: 'g',
            enabled: false,
        });
        assert_eq!(state.flags(), "i");
        assert_eq!(state.matches().len(), 1);
    }

    #[test]
    fn repeated_flag_is_reported() {
        let mut state = PlaygroundState::new();
        set(&mut state, "a", "a");
        state.apply(Intent::SetFlags("gg".into()));
        assert_eq!(state.flags(), "gg");
        assert!(!state.is_valid());
        assert!(state.matches().is_empty());
        assert!(state.last_error().unwrap().contains("Invalid flags"));
    }

    #[test]
    fn saved_pattern_keeps_flags_as_given() {
        let mut state = PlaygroundState::new();
        state.apply(Intent::SavePattern {
            name: "twice".into(),
            regex: "a".into(),
            flags: "gg".into(),
        });
        assert_eq!(state.saved_patterns()[0].flags, "gg");

        state.apply(Intent::SetText("a".into()));
        state.apply(Intent::LoadPattern("twice".into()));
        assert!(!state.is_valid());
    }

    #[test]
    fn unknown_flag_is_reported() {
        let mut state = PlaygroundState::new();
        set(&mut state, "a", "a");
        state.apply(Intent::SetFlags("gz".into()));
        assert!(!state.is_valid());
        assert!(state.last_error().unwrap().contains("gz"));
    }

    #[test]
    fn text_change_leaves_history_and_explanations() {
        let mut state = PlaygroundState::new();
        state.apply(Intent::SetRegex("a.".into()));
        let explanations = state.explanations().to_vec();

        let effects = state.apply(Intent::SetText("abc".into()));
        assert!(effects.is_empty());
        assert_eq!(state.explanations(), explanations.as_slice());
    }

    #[test]
    fn explanations_follow_regex() {
        let mut state = PlaygroundState::new();
        state.apply(Intent::SetRegex(r"\d+".into()));
        assert_eq!(state.explanations().len(), 2);
        state.apply(Intent::SetRegex("abc".into()));
        assert!(state.explanations().is_empty());
    }

    #[test]
    fn history_add_dedupes_and_persists() {
        let mut state = PlaygroundState::new();
        for regex in ["a", "b", "a"] {
            let effects = state.apply(Intent::AddToHistory(regex.into()));
            assert_eq!(effects, vec![Effect::PersistHistory]);
        }
        assert_eq!(state.history(), ["a", "b"]);

        assert!(state.apply(Intent::AddToHistory(String::new())).is_empty());
        assert!(state.apply(Intent::AddToHistory("a".into())).is_empty());
    }

    #[test]
    fn history_caps_at_ten() {
        let mut state = PlaygroundState::new();
        for i in 0..15 {
            state.apply(Intent::AddToHistory(format!("regex{}", i)));
        }
        assert_eq!(state.history().len(), 10);
        assert_eq!(state.history()[0], "regex14");
        assert_eq!(state.history()[9], "regex5");
    }

    #[test]
    fn save_pattern_requires_name_and_regex() {
        let mut state = PlaygroundState::new();
        state.apply(Intent::SetDraftName("draft".into()));

        let effects = state.apply(Intent::SavePattern {
            name: String::new(),
            regex: "a".into(),
            flags: "g".into(),
        });
        assert!(effects.is_empty());

        let effects = state.apply(Intent::SavePattern {
            name: "x".into(),
            regex: String::new(),
            flags: "g".into(),
        });
        assert!(effects.is_empty());
        assert!(state.saved_patterns().is_empty());
        assert_eq!(state.draft_name(), "draft");
    }

    #[test]
    fn save_pattern_clears_draft() {
        let mut state = PlaygroundState::new();
        state.apply(Intent::SetDraftName("digits".into()));
        let effects = state.apply(Intent::SavePattern {
            name: "digits".into(),
            regex: r"\d+".into(),
            flags: "g".into(),
        });

        assert_eq!(effects, vec![Effect::PersistSavedPatterns]);
        assert_eq!(state.saved_patterns(), [SavedPattern::new("digits", r"\d+", "g")]);
        assert_eq!(state.draft_name(), "");
    }

    #[test]
    fn resaving_a_name_overwrites() {
        let mut state = PlaygroundState::new();
        for (regex, flags) in [("a", "g"), ("b", "gi")] {
            state.apply(Intent::SavePattern {
                name: "p".into(),
                regex: regex.into(),
                flags: flags.into(),
            });
        }
        assert_eq!(state.saved_patterns(), [SavedPattern::new("p", "b", "gi")]);
    }

    #[test]
    fn save_draft_uses_current_regex() {
        let mut state = PlaygroundState::new();
        state.apply(Intent::SetRegex("x+".into()));
        state.apply(Intent::SetFlags("gm".into()));
        state.apply(Intent::SetDraftName("xs".into()));

        let effects = state.apply(Intent::SaveDraft);
        assert_eq!(effects, vec![Effect::PersistSavedPatterns]);
        assert_eq!(state.saved_patterns(), [SavedPattern::new("xs", "x+", "gm")]);
    }

    #[test]
    fn delete_removes_by_name() {
        let mut state = PlaygroundState::new()
            .with_collections(vec![SavedPattern::new("a", "1", "g")], Vec::new());

        assert!(state.apply(Intent::DeletePattern("b".into())).is_empty());
        assert_eq!(
            state.apply(Intent::DeletePattern("a".into())),
            vec![Effect::PersistSavedPatterns]
        );
        assert!(state.saved_patterns().is_empty());
    }

    #[test]
    fn load_saved_pattern_before_builtin() {
        let mut state = PlaygroundState::new()
            .with_collections(vec![SavedPattern::new("date", "custom", "i")], Vec::new());

        let effects = state.apply(Intent::LoadPattern("date".into()));
        assert!(effects.is_empty());
        assert_eq!(state.regex(), "custom");
        assert_eq!(state.flags(), "i");
        assert_eq!(state.selected_pattern(), "date");
    }

    #[test]
    fn load_builtin_uses_default_flags() {
        let mut state = PlaygroundState::new();
        state.apply(Intent::SetFlags("i".into()));
        state.apply(Intent::SetText("on 2024-01-15".into()));
        state.apply(Intent::LoadPattern("date".into()));

        assert_eq!(state.regex(), r"\d{4}-\d{2}-\d{2}");
        assert_eq!(state.flags(), "g");
        assert_eq!(state.matches().len(), 1);
        assert!(!state.explanations().is_empty());
    }

    #[test]
    fn load_no_selection_resets() {
        let mut state = PlaygroundState::new();
        set(&mut state, "a", "a");
        state.apply(Intent::SetFlags("im".into()));

        state.apply(Intent::LoadPattern(NO_SELECTION.into()));
        assert_eq!(state.regex(), "");
        assert_eq!(state.flags(), "g");
        assert!(state.matches().is_empty());
        assert_eq!(state.selected_pattern(), NO_SELECTION);
    }

    #[test]
    fn load_unknown_keeps_pattern_but_selects() {
        let mut state = PlaygroundState::new();
        state.apply(Intent::SetRegex("keep".into()));
        state.apply(Intent::LoadPattern("missing".into()));

        assert_eq!(state.regex(), "keep");
        assert_eq!(state.selected_pattern(), "missing");
    }

    #[test]
    fn select_pattern_only_changes_selection() {
        let mut state = PlaygroundState::new();
        state.apply(Intent::SelectPattern("email".into()));
        assert_eq!(state.selected_pattern(), "email");
        assert_eq!(state.regex(), "");
    }

    #[test]
    fn custom_default_flags() {
        let mut state = PlaygroundState::new().with_default_flags("gi");
        assert_eq!(state.flags(), "gi");
        state.apply(Intent::SetFlags(String::new()));
        state.apply(Intent::LoadPattern(NO_SELECTION.into()));
        assert_eq!(state.flags(), "gi");
    }

    #[test]
    fn seeded_collections_are_normalized() {
        let state = PlaygroundState::new().with_collections(
            vec![
                SavedPattern::new("a", "1", "g"),
                SavedPattern::new("a", "2", "g"),
            ],
            vec!["x".into(), "y".into(), "x".into()],
        );
        assert_eq!(state.saved_patterns().len(), 1);
        assert_eq!(state.history(), ["x", "y"]);
    }
}
