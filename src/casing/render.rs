use crate::tokenizer::Token;

/// camelCase: first word lowercased, every later word capitalized, no separator.
pub fn camel(tokens: &[Token<'_>]) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.text.len()).sum());

    for (i, token) in tokens.iter().enumerate() {
        if i == 0 {
            out.push_str(&token.text.to_ascii_lowercase());
        } else {
            push_capitalized(&mut out, token.text);
        }
    }

    out
}

/// Lowercase every word and join with `separator`.
pub fn joined(tokens: &[Token<'_>], separator: char) -> String {
    let mut out = String::new();

    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.push_str(&token.text.to_ascii_lowercase());
    }

    out
}

// Only the first character is uppercased; a leading digit stays as is.
fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        out.push_str(&chars.as_str().to_ascii_lowercase());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::{tokenize, BoundaryClass};

    #[test]
    fn test_camel_rendering() {
        let tokens = tokenize("SCREEN_NAME", BoundaryClass::Separators);
        assert_eq!(camel(&tokens), "screenName");

        let tokens = tokenize("item 123abc", BoundaryClass::Separators);
        assert_eq!(camel(&tokens), "item123abc");
    }

    #[test]
    fn test_joined_rendering() {
        let tokens = tokenize("XMLHttpRequest", BoundaryClass::Separators);
        assert_eq!(joined(&tokens, '-'), "xml-http-request");
        assert_eq!(joined(&tokens, '.'), "xml.http.request");
        assert_eq!(joined(&[], '_'), "");
    }
}
