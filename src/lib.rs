pub mod casing;
pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod input;
pub mod tokenizer;

pub use casing::{is_case, to_camel_case, to_dot_case, to_kebab_case, to_snake_case, Casing};
pub use config::Config;
pub use converter::Converter;
pub use error::{CaseError, ErrorKind};
pub use input::Input;
pub use tokenizer::{tokenize, BoundaryClass, Token};

#[derive(Debug, Clone, Default)]
pub struct ConvertResult {
    /// Inputs that produced an output. In check mode: inputs that need changing.
    pub converted_count: usize,
    pub skipped_count: usize,
    pub error_count: usize,
    pub conversions: Vec<Conversion>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub input: String,
    pub output: Option<String>,
    pub error: Option<String>,
    /// Matched an ignore pattern and was passed through unchanged.
    pub skipped: bool,
}
