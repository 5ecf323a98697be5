//! Word boundary detection.
//!
//! A single left-to-right scan splits text into words. The scanner is either
//! inside a word or inside a run of boundary characters; a run of any length
//! collapses into one boundary, and runs at either end produce no empty words.
//! Inside a word, two case transitions also end the current word:
//!
//! * lowercase letter or digit followed by an uppercase letter (`fooBar`)
//! * an uppercase run followed by an uppercase-then-lowercase pair (`XMLHttp`)

use serde::Serialize;

/// Which characters act as explicit word separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryClass {
    /// Whitespace, `_` and `-`.
    Separators,
    /// Anything that is not alphanumeric, Unicode letters included.
    NonAlphanumeric,
    /// Anything outside `[A-Za-z0-9]`.
    NonAsciiAlphanumeric,
}

impl BoundaryClass {
    pub fn is_boundary(self, ch: char) -> bool {
        match self {
            BoundaryClass::Separators => ch.is_whitespace() || ch == '_' || ch == '-',
            BoundaryClass::NonAlphanumeric => !ch.is_alphanumeric(),
            BoundaryClass::NonAsciiAlphanumeric => !ch.is_ascii_alphanumeric(),
        }
    }
}

/// A word found in the input. `start` and `end` are byte offsets into the
/// original (untrimmed) text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    InWord,
    InSeparatorRun,
}

/// Split `text` into words.
pub fn tokenize(text: &str, boundaries: BoundaryClass) -> Vec<Token<'_>> {
    let offset = text.len() - text.trim_start().len();
    let body = text.trim();

    let mut tokens = Vec::new();
    let mut state = ScanState::InSeparatorRun;
    let mut word_start = 0;
    let mut prev: Option<char> = None;
    let mut chars = body.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if boundaries.is_boundary(ch) {
            if state == ScanState::InWord {
                tokens.push(token(text, offset + word_start, offset + idx));
            }
            state = ScanState::InSeparatorRun;
            prev = None;
            continue;
        }

        match state {
            ScanState::InSeparatorRun => {
                word_start = idx;
                state = ScanState::InWord;
            }
            ScanState::InWord => {
                let next = chars.peek().map(|&(_, c)| c);
                if let Some(prev) = prev {
                    if is_case_transition(prev, ch, next) {
                        tokens.push(token(text, offset + word_start, offset + idx));
                        word_start = idx;
                    }
                }
            }
        }
        prev = Some(ch);
    }

    if state == ScanState::InWord {
        tokens.push(token(text, offset + word_start, offset + body.len()));
    }

    tokens
}

fn token(text: &str, start: usize, end: usize) -> Token<'_> {
    Token {
        text: &text[start..end],
        start,
        end,
    }
}

fn is_case_transition(prev: char, current: char, next: Option<char>) -> bool {
    if !current.is_ascii_uppercase() {
        return false;
    }
    if prev.is_ascii_lowercase() || prev.is_ascii_digit() {
        return true;
    }
    prev.is_ascii_uppercase() && next.is_some_and(|c| c.is_ascii_lowercase())
}
