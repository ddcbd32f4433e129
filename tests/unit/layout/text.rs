use super::*;

#[test]
fn mono_measure_scales_with_size_and_chars() {
    let mut m = MonoMeasure {
        advance: 0.5,
        line_height: 1.5,
    };
    let s = m.measure("abcd", &TextStyle::regular(10.0));
    assert_eq!(s, Size::new(20.0, 15.0));
    assert_eq!(m.space_width(&TextStyle::regular(10.0)), 5.0);
    assert_eq!(m.measure("", &TextStyle::regular(10.0)).width, 0.0);
}

#[test]
fn mono_measure_counts_chars_not_bytes() {
    let mut m = MonoMeasure::default();
    let style = TextStyle::regular(10.0);
    assert_eq!(m.measure("é", &style).width, m.measure("e", &style).width);
}

#[test]
fn garbage_font_bytes_are_rejected() {
    let err = ParleyMeasure::from_font_bytes(b"not a font").unwrap_err();
    assert!(matches!(err, EditorError::Font(_)));
}

#[test]
fn missing_font_file_is_an_error() {
    let err = ParleyMeasure::from_path("/definitely/missing/font.ttf").unwrap_err();
    assert!(err.to_string().contains("read font bytes"));
}

fn system_font() -> Option<Vec<u8>> {
    let candidates = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];
    std::env::var("BLOCKFORM_TEST_FONT")
        .ok()
        .into_iter()
        .chain(candidates.iter().map(|p| (*p).to_owned()))
        .find_map(|p| std::fs::read(p).ok())
}

#[test]
fn parley_measure_shapes_and_caches() {
    let Some(bytes) = system_font() else {
        eprintln!("no system font found; set BLOCKFORM_TEST_FONT to run this test");
        return;
    };
    let mut m = ParleyMeasure::from_font_bytes(&bytes).unwrap();
    assert!(!m.family().trim().is_empty());

    let style = TextStyle::regular(14.0);
    let first = m.measure("hello", &style);
    assert!(first.width > 0.0);
    assert!(first.height > 0.0);
    assert_eq!(m.measure("hello", &style), first);
    assert_eq!(m.cache.len(), 1);

    let longer = m.measure("hello world", &style);
    assert!(longer.width > first.width);
    let bold = TextStyle {
        bold: true,
        ..style
    };
    m.measure("hello", &bold);
    assert_eq!(m.cache.len(), 3);
}
