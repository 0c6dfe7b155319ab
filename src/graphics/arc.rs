//! Arcs and circles
//!
//! Arcs are sampled parametrically: a full turn of radius `r` is split into
//! `trunc(r * 4π)` steps and each sampled angle is truncated onto the pixel
//! grid. Angles are in radians and grow from the positive x axis toward
//! positive y.

use std::f64::consts::PI;

use crate::graphics::draw::DrawError;
use crate::graphics::image::Image;
use crate::graphics::pixfmt::Color;

const TWO_PI: f64 = PI * 2.0;
const FOUR_PI: f64 = PI * 4.0;

/// Number of samples for a full turn of `radius`.
fn resolution(radius: i32) -> i32 {
    (radius as f64 * FOUR_PI) as i32
}

/// Points sampled for the arc of `radius` around `(x, y)` from `start` to
/// `end`. The angles must already be ordered.
fn arc_points(x: i32, y: i32, radius: i32, start: f64, end: f64) -> impl Iterator<Item = (i32, i32)> {
    let res = resolution(radius);
    let span = end - start;
    let count = if span >= TWO_PI {
        res
    } else {
        (span * res as f64 / TWO_PI) as i32
    };
    let r = radius as f64;

    (0..count.max(0)).map(move |i| {
        let theta = start + i as f64 * TWO_PI / res as f64;
        (x + (r * theta.cos()) as i32, y + (r * theta.sin()) as i32)
    })
}

/// Draw an arc from `start` to `end` radians.
///
/// The angles may be given in either order; equal angles draw nothing.
/// The center must lie on the image, sampled points that do not are
/// skipped.
pub fn draw_arc(
    image: &mut Image<'_>,
    x: i32,
    y: i32,
    radius: i32,
    start: f64,
    end: f64,
    color: Color,
) -> Result<(), DrawError> {
    if start == end {
        return Ok(());
    }
    let (start, end) = if start > end { (end, start) } else { (start, end) };

    let layout = image.layout();
    if !layout.contains(x, y) {
        log::warn!(
            "Point out of range : {},{} : {}x{}",
            x,
            y,
            layout.width,
            layout.height
        );
        return Err(DrawError::OutOfRange {
            x,
            y,
            width: layout.width,
            height: layout.height,
        });
    }

    let mut sink = image.sink(color)?;
    for (px, py) in arc_points(x, y, radius, start, end) {
        if layout.contains(px, py) {
            sink.plot(px, py, 0)?;
        }
    }
    Ok(())
}

/// Draw a full circle.
pub fn draw_circle(
    image: &mut Image<'_>,
    x: i32,
    y: i32,
    radius: i32,
    color: Color,
) -> Result<(), DrawError> {
    draw_arc(image, x, y, radius, 0.0, TWO_PI, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::draw::DrawPrimitive;
    use rstest::rstest;

    #[test]
    fn test_resolution() {
        assert_eq!(resolution(0), 0);
        assert_eq!(resolution(1), 12);
        assert_eq!(resolution(10), 125);
    }

    #[test]
    fn test_partial_arc_point_count() {
        // a quarter of 125 samples
        assert_eq!(arc_points(0, 0, 10, 0.0, PI / 2.0).count(), 31);
        assert_eq!(arc_points(0, 0, 10, 0.0, TWO_PI).count(), 125);
        assert_eq!(arc_points(0, 0, 10, 0.0, 3.0 * PI).count(), 125);
    }

    #[rstest]
    #[case(1)]
    #[case(24)]
    #[case(32)]
    fn test_circle_plots_angle_zero(#[case] bits: u16) {
        let mut img = Image::new(32, 32, bits).unwrap();
        img.draw_circle(16, 16, 10, Color::WHITE).unwrap();
        assert_eq!(img.get_pixel(26, 16).unwrap(), Color::WHITE);
        assert_eq!(img.get_pixel(16, 16).unwrap(), Color::BLACK);
    }

    #[test]
    fn test_circle_points_lie_on_radius() {
        let mut img = Image::new(40, 40, 24).unwrap();
        img.draw_circle(20, 20, 12, Color::WHITE).unwrap();
        let mut lit = 0;
        for y in 0..40 {
            for x in 0..40 {
                if img.get_pixel(x, y).unwrap() == Color::WHITE {
                    let (dx, dy) = ((x - 20) as f64, (y - 20) as f64);
                    let d = (dx * dx + dy * dy).sqrt();
                    assert!((d - 12.0).abs() < 1.5, "pixel {},{} at distance {}", x, y, d);
                    lit += 1;
                }
            }
        }
        assert!(lit > 40);
    }

    #[test]
    fn test_equal_angles_draw_nothing() {
        let mut calls = 0;
        {
            let mut img = Image::detached(10, 10, 24).unwrap();
            img.set_pixel_callback(|_: i32, _: i32, _: Color, _: u8| {
                calls += 1;
                true
            });
            // checked before the anchor, so even an off-image center succeeds
            img.draw_arc(-5, -5, 3, 1.0, 1.0, Color::WHITE).unwrap();
            img.draw_arc(5, 5, 3, 1.0, 1.0, Color::WHITE).unwrap();
        }
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_swapped_angles_match() {
        let mut a = Image::new(20, 20, 32).unwrap();
        let mut b = Image::new(20, 20, 32).unwrap();
        a.draw_arc(10, 10, 6, 0.5, 2.0, Color::WHITE).unwrap();
        b.draw_arc(10, 10, 6, 2.0, 0.5, Color::WHITE).unwrap();
        assert_eq!(a.pixels(), b.pixels());
    }

    #[test]
    fn test_anchor_out_of_range() {
        let mut img = Image::new(10, 10, 24).unwrap();
        assert!(matches!(
            img.draw_circle(10, 5, 3, Color::WHITE),
            Err(DrawError::OutOfRange { x: 10, y: 5, .. })
        ));
    }

    #[test]
    fn test_clipped_circle_callback_sees_only_inside_points() {
        let mut points = Vec::new();
        {
            let mut img = Image::detached(8, 8, 24).unwrap();
            img.set_pixel_callback(|x: i32, y: i32, _: Color, _: u8| {
                points.push((x, y));
                true
            });
            img.draw_circle(1, 1, 5, Color::WHITE).unwrap();
        }
        assert!(!points.is_empty());
        assert!(points
            .iter()
            .all(|&(x, y)| (0..8).contains(&x) && (0..8).contains(&y)));
    }
}
