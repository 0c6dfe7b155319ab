//! Integration tests for the rasterizer through its public API.

use std::cell::RefCell;

use proptest::prelude::*;
use tempfile::TempDir;

use dibraster::config::RenderOptions;
use dibraster::graphics::{
    save_bmp, text_size, BuiltinFont, Color, DrawError, DrawPrimitive, Font, FontOptions, Image,
    LinePoints,
};
use dibraster::render::render;

fn recorded_points(
    width: i32,
    height: i32,
    draw: impl FnOnce(&mut Image<'_>) -> Result<(), DrawError>,
) -> Vec<(i32, i32, u8)> {
    let points = RefCell::new(Vec::new());
    {
        let mut img = Image::detached(width, height, 24).unwrap();
        img.set_pixel_callback(|x: i32, y: i32, _: Color, ch: u8| {
            points.borrow_mut().push((x, y, ch));
            true
        });
        draw(&mut img).unwrap();
    }
    points.into_inner()
}

/// Glyph record: encoding, advance, 0, width, height, offsets, solid bitmap.
fn solid_glyph(table: &mut Vec<u8>, ch: u8, advance: u8, w: u8, h: u8, xoff: i8, yoff: i8) {
    table.extend_from_slice(&[ch, advance, 0, w, h, xoff as u8, yoff as u8]);
    let len = (w as usize * h as usize + 7) / 8;
    table.extend(std::iter::repeat(0xff).take(len));
}

/// Table whose glyphs shift right and hang below the baseline.
fn offset_font_table() -> Vec<u8> {
    let mut table = vec![6, 10, 0, (-2i8) as u8];
    solid_glyph(&mut table, b'a', 5, 4, 5, 0, 0);
    solid_glyph(&mut table, b'g', 5, 4, 7, 0, -2);
    solid_glyph(&mut table, b'T', 6, 5, 8, 1, 0);
    solid_glyph(&mut table, b'j', 3, 3, 9, 1, -2);
    table.push(0);
    table
}

proptest! {
    #[test]
    fn prop_line_visits_one_point_per_major_step(
        x1 in -50i32..50, y1 in -50i32..50, x2 in -50i32..50, y2 in -50i32..50,
    ) {
        let points: Vec<_> = LinePoints::new(x1, y1, x2, y2).collect();
        let steps = (x2 - x1).abs().max((y2 - y1).abs());
        prop_assert_eq!(points.len() as i32, steps + 1);
        prop_assert_eq!(points[0], (x1, y1));
        prop_assert_eq!(*points.last().unwrap(), (x2, y2));
        for pair in points.windows(2) {
            prop_assert!((pair[1].0 - pair[0].0).abs() <= 1);
            prop_assert!((pair[1].1 - pair[0].1).abs() <= 1);
        }
    }

    #[test]
    fn prop_fill_rect_ignores_corner_order(
        x1 in -4i32..20, y1 in -4i32..20, x2 in -4i32..20, y2 in -4i32..20,
    ) {
        let color = Color::rgb(9, 8, 7);
        let mut a = Image::new(16, 16, 24).unwrap();
        let mut b = Image::new(16, 16, 24).unwrap();
        let ra = a.fill_rect(x1, y1, x2, y2, color);
        let rb = b.fill_rect(x2, y2, x1, y1, color);
        prop_assert_eq!(ra.is_ok(), rb.is_ok());
        prop_assert_eq!(a.pixels(), b.pixels());
    }

    #[test]
    fn prop_text_stays_inside_measured_box(
        lines in prop::collection::vec("[A-Za-z0-9]{0,6}", 1..4),
        medium in any::<bool>(),
        x in -20i32..20,
        y in -20i32..20,
    ) {
        let font = Font::builtin(if medium { BuiltinFont::Medium } else { BuiltinFont::Small }).unwrap();
        let text = lines.join("\n");
        let size = text_size(&font, text.as_bytes(), None);
        let points = recorded_points(8, -8, |img| img.draw_text(&font, text.as_bytes(), None, x, y, Color::WHITE));
        for (px, py, _) in points {
            prop_assert!(px >= x && px < x + size.width, "x {} outside {}+{}", px, x, size.width);
            prop_assert!(py >= y && py < y + size.height, "y {} outside {}+{}", py, y, size.height);
        }
    }

    #[test]
    fn prop_offset_glyphs_stay_inside_measured_box(
        lines in prop::collection::vec("[agTj]{0,5}", 1..4),
        spacing in 0u8..3,
        x in -10i32..10,
        y in -10i32..10,
    ) {
        let table = offset_font_table();
        let font = Font::parse(&table, FontOptions { spacing, invert: false }).unwrap();
        let text = lines.join("\n");
        let size = text_size(&font, text.as_bytes(), None);
        let points = recorded_points(8, -8, |img| img.draw_text(&font, text.as_bytes(), None, x, y, Color::WHITE));
        for (px, py, _) in points {
            prop_assert!(px >= x && px < x + size.width, "x {} outside {}+{}", px, x, size.width);
            prop_assert!(py >= y && py < y + size.height, "y {} outside {}+{}", py, y, size.height);
        }
    }
}

#[test]
fn callback_abort_stops_fill_on_third_pixel() {
    let mut calls = 0;
    {
        let mut img = Image::detached(4, 4, 32).unwrap();
        img.set_pixel_callback(|_: i32, _: i32, _: Color, _: u8| {
            calls += 1;
            calls < 3
        });
        assert!(matches!(img.fill(Color::WHITE), Err(DrawError::Aborted)));
    }
    assert_eq!(calls, 3);
}

#[test]
fn circle_starts_on_positive_x_axis() {
    for depth in [1u16, 24, 32] {
        let mut img = Image::new(32, 32, depth).unwrap();
        img.draw_circle(16, 16, 8, Color::WHITE).unwrap();
        assert_eq!(img.get_pixel(24, 16).unwrap(), Color::WHITE, "depth {}", depth);
    }
}

#[test]
fn flood_fill_stops_at_square_outline() {
    let (outline, paint) = (Color::rgb(255, 0, 0), Color::rgb(0, 0, 255));
    let mut img = Image::new(10, 10, 24).unwrap();
    img.draw_rect(2, 2, 7, 7, outline).unwrap();
    img.flood_fill(4, 4, outline, paint).unwrap();

    for y in 0..10 {
        for x in 0..10 {
            let expected = if x == 2 || x == 7 || y == 2 || y == 7 {
                if (2..=7).contains(&x) && (2..=7).contains(&y) {
                    outline
                } else {
                    Color::BLACK
                }
            } else if (3..7).contains(&x) && (3..7).contains(&y) {
                paint
            } else {
                Color::BLACK
            };
            assert_eq!(img.get_pixel(x, y).unwrap(), expected, "pixel {},{}", x, y);
        }
    }
}

#[test]
fn text_callback_reports_each_character() {
    let font = Font::builtin_with(
        BuiltinFont::Small,
        FontOptions {
            spacing: 2,
            invert: false,
        },
    )
    .unwrap();
    let points = recorded_points(1, -1, |img| img.draw_text(&font, b"AB", None, 0, 0, Color::WHITE));
    let a_max = points.iter().filter(|p| p.2 == b'A').map(|p| p.0).max().unwrap();
    let b_min = points.iter().filter(|p| p.2 == b'B').map(|p| p.0).min().unwrap();
    assert_eq!(a_max, 3);
    assert_eq!(b_min, 6);
}

#[test]
fn rendered_scene_round_trips_through_bmp() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scene.bmp");
    let gray = Color::rgb(0x60, 0x60, 0x60);
    let opts = RenderOptions {
        width: 48,
        height: 32,
        depth: 32,
        background: gray,
        text: vec!["OK".to_string()],
        shapes: true,
        output: path.clone(),
        ..Default::default()
    };

    let img = render(&opts).unwrap();
    save_bmp(&img, &opts.output).unwrap();

    let decoded = image::open(&path).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (48, 32));
    for y in 0..32u32 {
        for x in 0..48u32 {
            let expected = img.get_pixel(x as i32, y as i32).unwrap();
            // channels are equal for every color in this scene
            let px = decoded.get_pixel(x, y).0;
            assert_eq!(px[0], expected.red(), "pixel {},{}", x, y);
            assert_eq!(px, [px[0]; 3], "pixel {},{}", x, y);
        }
    }
}
