use fingerprint::core::{render_grid, walk, ArtConfig};
use fingerprint::term::{encode_into, ArtView, Palette, Rgb};

#[test]
fn term_view_text_matches_core_render() {
    let inputs: [&[u8]; 4] = [b"", b"\x00", b"hello world", &[0xff; 40]];
    for data in inputs {
        let config = ArtConfig::default();
        let grid = walk(data, &config);
        let fb = ArtView::new(config.alphabet()).render(&grid);
        assert_eq!(fb.to_plain_string(), render_grid(data, &config));
    }
}

#[test]
fn term_view_respects_custom_dimensions() {
    let config = ArtConfig::builder()
        .alphabet("ab")
        .height(3)
        .width(7)
        .build()
        .unwrap();
    let grid = walk(b"\x1b", &config);
    let fb = ArtView::new(config.alphabet()).render(&grid);

    assert_eq!((fb.width(), fb.height()), (9, 5));
    assert_eq!(fb.to_plain_string(), render_grid(b"\x1b", &config));
}

#[test]
fn term_view_highlights_markers() {
    let palette = Palette::default();
    let config = ArtConfig::default();
    let grid = walk(&[0x00], &config);
    let fb = ArtView::new(config.alphabet()).render(&grid);

    // Start (4,8) and end (0,4) shifted by the border.
    let start = fb.get(9, 5).unwrap();
    assert_eq!(start.ch, 'S');
    assert_eq!(start.style, palette.start);

    let end = fb.get(5, 1).unwrap();
    assert_eq!(end.ch, 'E');
    assert_eq!(end.style, palette.end);
}

#[test]
fn term_view_uses_custom_palette() {
    let mut palette = Palette::default();
    palette.border.fg = Rgb::new(1, 2, 3);
    let view = ArtView::default().with_palette(palette);
    let fb = view.render(&walk(b"x", &ArtConfig::default()));
    assert_eq!(fb.get(0, 0).unwrap().style.fg, Rgb::new(1, 2, 3));
}

#[test]
fn styled_output_contains_every_line() {
    let config = ArtConfig::default();
    let fb = ArtView::new(config.alphabet()).render(&walk(b"abc", &config));
    let mut out = Vec::new();
    encode_into(&fb, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches('\n').count(), 10);
    assert!(text.contains('\x1b'));
}
