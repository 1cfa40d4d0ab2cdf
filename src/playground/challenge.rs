//! Regex challenges.
//!
//! Each challenge pairs a task with a test string and a reference solution.
//! An answer is correct when its global match list equals the solution's,
//! element by element.

use std::fmt;

use tracing::debug;

use crate::matcher::extract_matches;

/// A fixed regex exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Challenge {
    pub description: &'static str,
    pub test_string: &'static str,
    pub solution: &'static str,
}

/// The shipped challenges, in order.
pub const CHALLENGES: &[Challenge] = &[
    Challenge {
        description: "Match all words that start with 'a' or 'A'",
        test_string: "Apple and banana are fruits. An aardvark is an animal.",
        solution: r"\b[aA]\w+",
    },
    Challenge {
        description: "Match all valid email addresses",
        test_string: "Contact us at info@example.com or support@company.co.uk",
        solution: r"\b[\w.%-]+@[\w.-]+\.[a-zA-Z]{2,4}\b",
    },
    Challenge {
        description: "Match all dates in the format DD/MM/YYYY",
        test_string: "Important dates: 25/12/2023, 01/01/2024, 14/02/2024",
        solution: r"\b\d{2}/\d{2}/\d{4}\b",
    },
];

/// Outcome of submitting an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
    InvalidRegex,
}

impl Verdict {
    pub fn is_correct(self) -> bool {
        self == Verdict::Correct
    }

    pub fn message(self) -> &'static str {
        match self {
            Verdict::Correct => "Correct! Well done!",
            Verdict::Incorrect => "Not quite right. Try again!",
            Verdict::InvalidRegex => "Invalid regex. Please check your syntax.",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Challenge {
    /// Judge `regex` against this challenge.
    ///
    /// Both patterns run in global mode. An answer that matches nothing is
    /// never correct.
    pub fn check(&self, regex: &str) -> Verdict {
        let answer = match extract_matches(regex, "g", self.test_string) {
            Ok(matches) => matches,
            Err(e) => {
                debug!("Challenge answer failed to compile: {}", e.diagnostic());
                return Verdict::InvalidRegex;
            }
        };
        let expected = match extract_matches(self.solution, "g", self.test_string) {
            Ok(matches) => matches,
            Err(_) => return Verdict::Incorrect,
        };

        let same = !answer.is_empty()
            && answer.len() == expected.len()
            && answer.iter().zip(&expected).all(|(a, e)| a.value == e.value);
        if same {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }
}

/// A position in [`CHALLENGES`] with clamped navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChallengeBoard {
    index: usize,
}

impl ChallengeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at `index`, or `None` if there is no such challenge.
    pub fn at(index: usize) -> Option<Self> {
        (index < CHALLENGES.len()).then_some(Self { index })
    }

    /// Zero-based position.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static Challenge {
        &CHALLENGES[self.index]
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < CHALLENGES.len()
    }

    /// Step back, staying on the first challenge.
    pub fn previous(&mut self) {
        if self.has_previous() {
            self.index -= 1;
        }
    }

    /// Step forward, staying on the last challenge.
    pub fn next(&mut self) {
        if self.has_next() {
            self.index += 1;
        }
    }

    /// Judge `regex` against the current challenge.
    pub fn submit(&self, regex: &str) -> Verdict {
        self.current().check(regex)
    }
}
