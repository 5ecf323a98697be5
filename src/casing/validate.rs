use crate::error::CaseError;
use crate::input::Input;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SNAKE_OUTPUT: Regex = Regex::new(r"^[a-z_]+$").unwrap();
    static ref DOT_OUTPUT: Regex = Regex::new(r"^[a-z0-9.]+$").unwrap();
}

/// Accept only real text; absent and non-text values are rejected.
pub fn require_text<'a>(input: Input<'a>, function: &'static str) -> Result<&'a str, CaseError> {
    if input.is_absent() {
        return Err(CaseError::InvalidInput {
            function,
            reason: "value is undefined or null",
        });
    }

    input.as_text().ok_or(CaseError::InvalidInput {
        function,
        reason: "value must be a string",
    })
}

pub fn reject_digits(text: &str, function: &'static str) -> Result<(), CaseError> {
    if text.chars().any(|c| c.is_ascii_digit()) {
        return Err(CaseError::UnsupportedContent {
            function,
            reason: "value must not contain numbers",
        });
    }
    Ok(())
}

pub fn snake_output(output: String, function: &'static str) -> Result<String, CaseError> {
    check_output(output, &SNAKE_OUTPUT, function)
}

pub fn dot_output(output: String, function: &'static str) -> Result<String, CaseError> {
    check_output(output, &DOT_OUTPUT, function)
}

// An empty token sequence renders to "" which is accepted as is.
fn check_output(output: String, pattern: &Regex, function: &'static str) -> Result<String, CaseError> {
    if output.is_empty() || pattern.is_match(&output) {
        Ok(output)
    } else {
        Err(CaseError::UnsupportedContent {
            function,
            reason: "value contains unsupported characters",
        })
    }
}
