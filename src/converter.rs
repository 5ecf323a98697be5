use crate::casing::{is_case, Casing};
use crate::input::Input;
use crate::{Config, Conversion, ConvertResult};
use rayon::prelude::*;
use regex::Regex;
use serde_json::Value;

/// Batch converter: applies one casing to many inputs, honoring the
/// configured ignore patterns.
pub struct Converter {
    casing: Casing,
    ignore_patterns: Vec<Regex>,
}

impl Converter {
    pub fn new(config: &Config) -> Self {
        let mut ignore_patterns = Vec::new();
        for pattern in &config.ignore_patterns {
            match Regex::new(pattern) {
                Ok(re) => ignore_patterns.push(re),
                Err(e) => tracing::warn!(%pattern, error = %e, "invalid ignore pattern"),
            }
        }

        Self {
            casing: config.casing,
            ignore_patterns,
        }
    }

    pub fn casing(&self) -> Casing {
        self.casing
    }

    /// Convert every input, in parallel, keeping the input order.
    pub fn convert_all(&self, inputs: &[Value]) -> ConvertResult {
        let conversions: Vec<Conversion> = inputs
            .par_iter()
            .map(|value| self.convert_one(value))
            .collect();

        summarize(conversions)
    }

    /// Report the inputs that are not already written in the target casing.
    /// Conforming inputs come back with `output: None`.
    pub fn check_all(&self, inputs: &[Value]) -> ConvertResult {
        let conversions: Vec<Conversion> = inputs
            .par_iter()
            .map(|value| {
                let mut conversion = self.convert_one(value);
                let conforms = conversion.skipped
                    || match value {
                        Value::String(text) => is_case(text, self.casing),
                        // coerced values conform when they render as themselves
                        other => conversion.output.as_deref() == Some(display_value(other).as_str()),
                    };
                if conforms {
                    conversion.output = None;
                }
                conversion
            })
            .collect();

        summarize(conversions)
    }

    pub fn convert_one(&self, value: &Value) -> Conversion {
        let input = Input::from(value);
        let shown = display_value(value);

        if let Some(text) = input.as_text() {
            if self.should_ignore(text) {
                tracing::debug!(input = %text, "skipping ignored input");
                return Conversion {
                    input: shown,
                    output: Some(text.to_string()),
                    error: None,
                    skipped: true,
                };
            }
        }

        match self.casing.convert(input) {
            Ok(output) => Conversion {
                input: shown,
                output: Some(output),
                error: None,
                skipped: false,
            },
            Err(e) => {
                tracing::debug!(input = %shown, casing = %self.casing, error = %e, "conversion failed");
                Conversion {
                    input: shown,
                    output: None,
                    error: Some(e.to_string()),
                    skipped: false,
                }
            }
        }
    }

    fn should_ignore(&self, text: &str) -> bool {
        self.ignore_patterns.iter().any(|pattern| pattern.is_match(text))
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn summarize(conversions: Vec<Conversion>) -> ConvertResult {
    let error_count = conversions.iter().filter(|c| c.error.is_some()).count();
    let skipped_count = conversions.iter().filter(|c| c.skipped).count();
    let converted_count = conversions
        .iter()
        .filter(|c| !c.skipped && c.output.is_some())
        .count();

    ConvertResult {
        converted_count,
        skipped_count,
        error_count,
        conversions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn converter(casing: Casing, patterns: &[&str]) -> Converter {
        let config = Config {
            casing,
            ignore_patterns: patterns.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        };
        Converter::new(&config)
    }

    fn texts(items: &[&str]) -> Vec<Value> {
        items.iter().map(|s| json!(s)).collect()
    }

    #[test]
    fn test_convert_all_keeps_order() {
        let converter = converter(Casing::Kebab, &[]);
        let inputs = texts(&["fooBar", "two words", "XMLHttpRequest", "a_b"]);
        let result = converter.convert_all(&inputs);

        let outputs: Vec<_> = result
            .conversions
            .iter()
            .map(|c| c.output.clone().unwrap())
            .collect();
        assert_eq!(outputs, vec!["foo-bar", "two-words", "xml-http-request", "a-b"]);
        assert_eq!(result.converted_count, 4);
        assert_eq!(result.error_count, 0);
    }

    #[test]
    fn test_errors_are_collected() {
        let converter = converter(Casing::Snake, &[]);
        let inputs = vec![json!("fine input"), json!("bad1"), Value::Null];
        let result = converter.convert_all(&inputs);

        assert_eq!(result.converted_count, 1);
        assert_eq!(result.error_count, 2);
        assert_eq!(
            result.conversions[1].error.as_deref(),
            Some("to_snake_case: value must not contain numbers")
        );
        assert_eq!(result.conversions[2].input, "null");
        assert_eq!(
            result.conversions[2].error.as_deref(),
            Some("to_snake_case: value is undefined or null")
        );
    }

    #[test]
    fn test_ignore_patterns_pass_through() {
        let converter = converter(Casing::Dot, &[r"^https?://", "(invalid"]);
        let inputs = texts(&["https://example.com/Path", "someValue"]);
        let result = converter.convert_all(&inputs);

        assert!(result.conversions[0].skipped);
        assert_eq!(
            result.conversions[0].output.as_deref(),
            Some("https://example.com/Path")
        );
        assert_eq!(result.conversions[1].output.as_deref(), Some("some.value"));
        assert_eq!(result.skipped_count, 1);
        assert_eq!(result.converted_count, 1);
    }

    #[test]
    fn test_check_all_flags_nonconforming() {
        let converter = converter(Casing::Camel, &[]);
        let inputs = texts(&["alreadyCamel", "not_camel"]);
        let result = converter.check_all(&inputs);

        assert_eq!(result.conversions[0].output, None);
        assert_eq!(result.conversions[1].output.as_deref(), Some("notCamel"));
        assert_eq!(result.converted_count, 1);
    }

    #[test]
    fn test_check_all_coerced_values() {
        let converter = converter(Casing::Camel, &[]);
        let inputs = vec![json!(42), json!(true), json!(["A", "b"])];
        let result = converter.check_all(&inputs);

        assert_eq!(result.conversions[0].output, None);
        assert_eq!(result.conversions[1].output, None);
        assert_eq!(result.conversions[2].output.as_deref(), Some("a,b"));
        assert_eq!(result.converted_count, 1);
    }

    #[test]
    fn test_failed_conversion_keeps_input_text() {
        let converter = converter(Casing::Dot, &[]);
        let result = converter.convert_all(&[json!(3)]);

        assert_eq!(result.conversions[0].input, "3");
        assert_eq!(
            result.conversions[0].error.as_deref(),
            Some("to_dot_case: value must be a string")
        );
    }
}
