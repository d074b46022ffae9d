// src/services/validation.rs
use serde_json::Value;

use crate::error::ValidationError;

pub const MAX_MESSAGE_LEN: usize = 2000;

/// ECMAScript `WhiteSpace` and `LineTerminator` code points. Unlike
/// `char::is_whitespace` this excludes U+0085 (NEL).
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{0b}' | '\u{0c}' | ' ' | '\u{a0}' | '\u{feff}'
            | '\u{1680}' | '\u{2000}'..='\u{200a}' | '\u{202f}' | '\u{205f}' | '\u{3000}'
            | '\n' | '\r' | '\u{2028}' | '\u{2029}'
    )
}

/// Strip leading and trailing white space the way browsers and Node do.
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(is_js_whitespace)
}

/// Check the raw `message` field. Returns the original, untrimmed text.
pub fn validate_message(message: Option<&Value>) -> Result<&str, ValidationError> {
    let text = match message {
        None | Some(Value::Null) => return Err(ValidationError::Missing),
        Some(Value::String(text)) => text.as_str(),
        Some(_) => return Err(ValidationError::NotAString),
    };

    let trimmed = trim_text(text);
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    // Length in UTF-16 code units, as clients measure it.
    if trimmed.encode_utf16().count() > MAX_MESSAGE_LEN {
        return Err(ValidationError::TooLong);
    }

    Ok(text)
}
