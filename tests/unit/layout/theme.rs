use super::*;

#[test]
fn partial_json_overrides_only_named_fields() {
    let json = r#"{ "font_size": 20, "layout": { "max_nesting": 5 } }"#;
    let theme = Theme::from_reader(json.as_bytes()).unwrap();
    let defaults = Theme::default();
    assert_eq!(theme.font_size, 20.0);
    assert_eq!(theme.layout.max_nesting, 5);
    assert_eq!(theme.layout.line_spacing, defaults.layout.line_spacing);
    assert_eq!(theme.syntax, defaults.syntax);
}

#[test]
fn malformed_theme_is_a_validation_error() {
    let err = Theme::from_reader("{ not json".as_bytes()).unwrap_err();
    assert!(matches!(err, EditorError::Validation(_)));
    let err = Theme::from_path("/definitely/missing/theme.json").unwrap_err();
    assert!(err.to_string().contains("open theme JSON"));
}

#[test]
fn highlight_follows_focus() {
    let hl = Highlight {
        blurred_fill: Colour::rgb(1, 1, 1),
        ..Highlight::new(Colour::rgb(2, 2, 2), Colour::rgb(3, 3, 3))
    };
    assert_eq!(hl.blank_fill(true), Colour::rgb(2, 2, 2));
    assert_eq!(hl.blank_fill(false), Colour::rgb(1, 1, 1));
    assert_eq!(hl.blank_stroke(false), Colour::rgb(3, 3, 3));
}
