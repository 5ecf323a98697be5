//! Dynamic input values accepted by the converters.
//!
//! The converters take "anything": callers hand over plain text most of the
//! time, but values decoded from JSON (or missing altogether) are accepted
//! too. `to_camel_case` and `to_kebab_case` coerce whatever they get into
//! text, while `to_snake_case` and `to_dot_case` insist on real text.

use serde_json::Value;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input<'a> {
    /// No value was supplied at all.
    Undefined,
    /// An explicit null.
    Null,
    Text(&'a str),
    /// Any other dynamic value (number, boolean, array, object).
    Value(&'a Value),
}

impl<'a> Input<'a> {
    /// True for `Undefined` and `Null`.
    pub fn is_absent(&self) -> bool {
        matches!(self, Input::Undefined | Input::Null)
    }

    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            Input::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Generic string coercion, the way a dynamic runtime stringifies a value.
    pub fn coerce(&self) -> Cow<'a, str> {
        match *self {
            Input::Undefined => Cow::Borrowed("undefined"),
            Input::Null => Cow::Borrowed("null"),
            Input::Text(text) => Cow::Borrowed(text),
            Input::Value(value) => Cow::Owned(coerce_value(value)),
        }
    }
}

fn coerce_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format_float(f),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        // Array elements that are null render as empty strings.
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => coerce_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

// Plain notation inside [1e-6, 1e21), exponent notation with an explicit
// sign outside it. 1.0 renders as "1" and -0.0 as "0".
fn format_float(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }

    let magnitude = f.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return f.to_string();
    }

    let exponent = format!("{:e}", f);
    match exponent.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exponent,
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(text: &'a String) -> Self {
        Input::Text(text.as_str())
    }
}

impl<'a> From<Option<&'a str>> for Input<'a> {
    fn from(text: Option<&'a str>) -> Self {
        match text {
            Some(text) => Input::Text(text),
            None => Input::Null,
        }
    }
}

impl<'a> From<&'a Value> for Input<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null => Input::Null,
            Value::String(s) => Input::Text(s.as_str()),
            other => Input::Value(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_absent_values() {
        assert_eq!(Input::Undefined.coerce(), "undefined");
        assert_eq!(Input::Null.coerce(), "null");
        assert!(Input::Undefined.is_absent());
        assert!(Input::from(None::<&str>).is_absent());
    }

    #[test]
    fn test_coerce_json_values() {
        assert_eq!(Input::from(&json!(42)).coerce(), "42");
        assert_eq!(Input::from(&json!(1.0)).coerce(), "1");
        assert_eq!(Input::from(&json!(2.5)).coerce(), "2.5");
        assert_eq!(Input::from(&json!(true)).coerce(), "true");
        assert_eq!(Input::from(&json!(["a", null, 3])).coerce(), "a,,3");
        assert_eq!(Input::from(&json!({"k": "v"})).coerce(), "[object Object]");
    }

    #[test]
    fn test_coerce_exponent_range_numbers() {
        assert_eq!(Input::from(&json!(1e21)).coerce(), "1e+21");
        assert_eq!(Input::from(&json!(1.5e22)).coerce(), "1.5e+22");
        assert_eq!(Input::from(&json!(1e-7)).coerce(), "1e-7");
        assert_eq!(Input::from(&json!(-2.5e-8)).coerce(), "-2.5e-8");
        assert_eq!(Input::from(&json!(0.000001)).coerce(), "0.000001");
        assert_eq!(Input::from(&json!(123456789.5)).coerce(), "123456789.5");
        assert_eq!(Input::from(&json!(-0.0)).coerce(), "0");
    }

    #[test]
    fn test_json_string_is_text() {
        let value = json!("fooBar");
        let input = Input::from(&value);
        assert_eq!(input.as_text(), Some("fooBar"));
        assert_eq!(Input::from(&Value::Null), Input::Null);
    }
}
