#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_defaults() {
    let runs = parse_runs(r#"{"runs": [{"text": "a b"}]}"#, "inline").unwrap();
    assert_eq!(runs, vec![StyledRun::plain("a b")]);
}

#[test]
fn test_every_field() {
    let json = r##"{"runs": [{
        "text": "x", "bold": true, "italic": true, "underline": true,
        "strike": true, "sub": true, "super": true, "size": 14,
        "color": "#00000A", "font": "Courier New"
    }]}"##;
    let runs = parse_runs(json, "inline").unwrap();
    let style = Style::plain()
        .with_bold()
        .with_italic()
        .with_underline()
        .with_strike()
        .with_sub()
        .with_super()
        .with_size(14)
        .with_color(10)
        .with_font("Courier New");
    assert_eq!(runs, vec![StyledRun::new("x", style)]);
}

#[test]
fn test_colour_forms() {
    let json = r#"{"runs": [
        {"text": "a", "color": "FF0000"},
        {"text": "b", "color": 7},
        {"text": "c", "color": "auto"}
    ]}"#;
    let colors: Vec<u32> = parse_runs(json, "inline")
        .unwrap()
        .iter()
        .map(|run| run.style.color)
        .collect();
    assert_eq!(colors, vec![0xFF_0000, 7, DEFAULT_COLOR]);
}

#[test]
fn test_bad_colour() {
    let err = parse_runs(r#"{"runs": [{"text": "a", "color": "red"}]}"#, "doc.json").unwrap_err();
    assert!(matches!(err, ReadError::Color { ref value, .. } if value == "red"));
    assert_eq!(err.to_string(), "invalid colour \"red\" in doc.json");
}

#[test]
fn test_malformed_json() {
    let err = parse_runs(r#"{"runs": [{"bold": true}]}"#, "doc.json").unwrap_err();
    assert!(matches!(err, ReadError::Json { .. }));

    let err = parse_runs(r#"{"runs": [{"text": "a", "blink": true}]}"#, "doc.json").unwrap_err();
    assert!(matches!(err, ReadError::Json { .. }));
}

#[test]
fn test_missing_file() {
    let err = read_runs(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, ReadError::Io { .. }));
}
