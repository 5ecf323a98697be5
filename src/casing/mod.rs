pub mod render;
pub mod validate;

use crate::error::CaseError;
use crate::input::Input;
use crate::tokenizer::{tokenize, BoundaryClass, Token};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target casing convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Casing {
    Camel,
    Kebab,
    Snake,
    Dot,
}

impl Casing {
    pub const ALL: [Casing; 4] = [Casing::Camel, Casing::Kebab, Casing::Snake, Casing::Dot];

    /// Separator characters this casing splits on.
    pub fn boundaries(self) -> BoundaryClass {
        match self {
            Casing::Camel | Casing::Snake => BoundaryClass::Separators,
            Casing::Kebab => BoundaryClass::NonAsciiAlphanumeric,
            Casing::Dot => BoundaryClass::NonAlphanumeric,
        }
    }

    pub fn tokenize(self, text: &str) -> Vec<Token<'_>> {
        tokenize(text, self.boundaries())
    }

    /// Convert `input` into this casing. Only `Snake` and `Dot` can fail.
    pub fn convert<'a>(self, input: impl Into<Input<'a>>) -> Result<String, CaseError> {
        match self {
            Casing::Camel => Ok(to_camel_case(input)),
            Casing::Kebab => Ok(to_kebab_case(input)),
            Casing::Snake => to_snake_case(input),
            Casing::Dot => to_dot_case(input),
        }
    }

    /// Example of the convention, for help and report texts.
    pub fn example(self) -> &'static str {
        match self {
            Casing::Camel => "camelCase",
            Casing::Kebab => "kebab-case",
            Casing::Snake => "snake_case",
            Casing::Dot => "dot.case",
        }
    }
}

impl FromStr for Casing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" | "camelcase" => Ok(Casing::Camel),
            "kebab" | "kebab-case" => Ok(Casing::Kebab),
            "snake" | "snake_case" => Ok(Casing::Snake),
            "dot" | "dot.case" => Ok(Casing::Dot),
            _ => Err(format!("Unknown casing: {}", s)),
        }
    }
}

impl fmt::Display for Casing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Casing::Camel => write!(f, "camel"),
            Casing::Kebab => write!(f, "kebab"),
            Casing::Snake => write!(f, "snake"),
            Casing::Dot => write!(f, "dot"),
        }
    }
}

/// Convert any value to camelCase. Never fails: non-text values are coerced
/// to text first, so `Input::Null` becomes `"null"`.
///
/// ```
/// assert_eq!(recase::to_camel_case("mobile-number"), "mobileNumber");
/// assert_eq!(recase::to_camel_case("SCREEN_NAME"), "screenName");
/// ```
pub fn to_camel_case<'a>(input: impl Into<Input<'a>>) -> String {
    let text = input.into().coerce();
    render::camel(&Casing::Camel.tokenize(&text))
}

/// Convert any value to kebab-case. Never fails; punctuation is treated as a
/// word boundary and dropped.
///
/// ```
/// assert_eq!(recase::to_kebab_case("XMLHttpRequest"), "xml-http-request");
/// assert_eq!(recase::to_kebab_case("___"), "");
/// ```
pub fn to_kebab_case<'a>(input: impl Into<Input<'a>>) -> String {
    let text = input.into().coerce();
    if text.is_empty() {
        return String::new();
    }
    render::joined(&Casing::Kebab.tokenize(&text), '-')
}

/// Convert text to snake_case.
///
/// Fails with `InvalidInput` when the value is absent or not text, and with
/// `UnsupportedContent` when it contains a digit or the result is not made of
/// `[a-z_]` only.
pub fn to_snake_case<'a>(input: impl Into<Input<'a>>) -> Result<String, CaseError> {
    const FUNCTION: &str = "to_snake_case";

    let text = validate::require_text(input.into(), FUNCTION)?;
    if text.is_empty() {
        return Ok(String::new());
    }
    validate::reject_digits(text, FUNCTION)?;
    if text.trim().is_empty() {
        return Ok(String::new());
    }

    let snake = render::joined(&Casing::Snake.tokenize(text), '_');
    validate::snake_output(snake, FUNCTION)
}

/// Convert text to dot.case.
///
/// Fails with `InvalidInput` when the value is absent or not text, and with
/// `UnsupportedContent` when the result is not made of `[a-z0-9.]` only.
pub fn to_dot_case<'a>(input: impl Into<Input<'a>>) -> Result<String, CaseError> {
    const FUNCTION: &str = "to_dot_case";

    let text = validate::require_text(input.into(), FUNCTION)?;
    if text.trim().is_empty() {
        return Ok(String::new());
    }

    let dot = render::joined(&Casing::Dot.tokenize(text), '.');
    validate::dot_output(dot, FUNCTION)
}

/// True when `text` is already written in `casing`, i.e. converting it is a no-op.
pub fn is_case(text: &str, casing: Casing) -> bool {
    casing.convert(text).is_ok_and(|converted| converted == text)
}
