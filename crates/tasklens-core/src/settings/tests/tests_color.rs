//! Tests for Color

#![allow(clippy::unwrap_used)]

use rstest::rstest;

use crate::settings::{Color, ColorParseError};

#[test]
fn test_parse_html_color() {
    let color: Color = "#3498DB".parse().unwrap();

    assert_eq!(color, Color::rgb(0x34, 0x98, 0xDB));
}

#[test]
fn test_parse_lowercase_and_whitespace() {
    let color: Color = "  #e74c3c ".parse().unwrap();

    assert_eq!(color, Color::rgb(0xE7, 0x4C, 0x3C));
}

#[rstest]
#[case("3498DB")]
#[case("#3498D")]
#[case("#3498DBFF")]
#[case("#GG0000")]
#[case("")]
fn test_parse_rejects_malformed(#[case] input: &str) {
    let result: Result<Color, ColorParseError> = input.parse();

    assert_eq!(result, Err(ColorParseError(input.to_string())));
}

#[test]
fn test_display_is_upper_hex() {
    assert_eq!(Color::rgb(0, 0xBC, 0xD4).to_string(), "#00BCD4");
}

#[test]
fn test_serde_as_string() {
    let json = serde_json::to_string(&Color::rgb(0x2E, 0xCC, 0x71)).unwrap();
    assert_eq!(json, "\"#2ECC71\"");

    let back: Color = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Color::rgb(0x2E, 0xCC, 0x71));

    assert!(serde_json::from_str::<Color>("\"purple\"").is_err());
}
