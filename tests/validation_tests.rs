use persona_chat_proxy::error::ValidationError;
use persona_chat_proxy::services::validation::{MAX_MESSAGE_LEN, trim_text, validate_message};
use serde_json::{Value, json};

#[test]
fn test_missing_message() {
    assert_eq!(validate_message(None), Err(ValidationError::Missing));
    assert_eq!(validate_message(Some(&Value::Null)), Err(ValidationError::Missing));
}

#[test]
fn test_non_string_message() {
    for value in [json!(1), json!(true), json!(["hi"]), json!({ "text": "hi" })] {
        assert_eq!(validate_message(Some(&value)), Err(ValidationError::NotAString));
    }
}

#[test]
fn test_blank_message() {
    for text in ["", " ", "\n\t", "\u{a0}\u{2003}", "\u{feff}"] {
        let value = json!(text);
        assert_eq!(validate_message(Some(&value)), Err(ValidationError::Empty));
    }
}

#[test]
fn test_length_limit() {
    let at_limit = json!("x".repeat(MAX_MESSAGE_LEN));
    assert!(validate_message(Some(&at_limit)).is_ok());

    let over_limit = json!("x".repeat(MAX_MESSAGE_LEN + 1));
    assert_eq!(validate_message(Some(&over_limit)), Err(ValidationError::TooLong));

    // Surrounding white space does not count.
    let padded = json!(format!("  {}  ", "x".repeat(MAX_MESSAGE_LEN)));
    assert!(validate_message(Some(&padded)).is_ok());
}

#[test]
fn test_length_counts_utf16_units() {
    // Each emoji is two UTF-16 code units.
    let emoji = json!("😀".repeat(MAX_MESSAGE_LEN / 2));
    assert!(validate_message(Some(&emoji)).is_ok());

    let emoji = json!("😀".repeat(MAX_MESSAGE_LEN / 2 + 1));
    assert_eq!(validate_message(Some(&emoji)), Err(ValidationError::TooLong));
}

#[test]
fn test_valid_message_is_returned_untrimmed() {
    let value = json!("  hello  ");
    assert_eq!(validate_message(Some(&value)), Ok("  hello  "));
}

#[test]
fn test_next_line_is_not_white_space() {
    let value = json!("\u{85}");
    assert_eq!(validate_message(Some(&value)), Ok("\u{85}"));
    assert_eq!(trim_text(" \u{85} "), "\u{85}");
}

#[test]
fn test_trim_text() {
    assert_eq!(trim_text("  Hello there.  "), "Hello there.");
    assert_eq!(trim_text("\u{feff}\r\nhi\u{2028}"), "hi");
    assert_eq!(trim_text("a b"), "a b");
    assert_eq!(trim_text("\u{b}\u{c}\u{1680}\u{200a}x\u{202f}\u{205f}\u{3000}\u{2029}"), "x");
}
