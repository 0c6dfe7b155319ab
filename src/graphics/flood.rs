//! Boundary flood fill
//!
//! Four-connected fill without recursion or a coordinate stack. One byte per
//! pixel records the walk:
//!
//! - low nibble: next direction to try (0 = not painted yet, 4 = exhausted)
//! - high nibble: direction taken to arrive here plus one (0 = seed)
//!
//! Directions are tried in the order up (`y + 1`), right, down, left.
//! When a cell runs out of directions the walk steps back along its arrival
//! direction, and it ends once the seed is exhausted.
//!
//! Only direct buffer access is supported. Pixel callbacks are ignored, and
//! 1-bit images are rejected.

use crate::graphics::draw::DrawError;
use crate::graphics::image::Image;
use crate::graphics::pixfmt::{BitDepth, Color, Pen};

/// Neighbor offsets in the order they are tried.
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

const EXHAUSTED: u8 = DIRECTIONS.len() as u8;

/// Fill the region around `(x, y)` with `color`.
///
/// A neighbor is entered only when it holds neither `color` nor `boundary`.
/// The seed itself is always painted.
pub fn flood_fill(
    image: &mut Image<'_>,
    x: i32,
    y: i32,
    boundary: Color,
    color: Color,
) -> Result<(), DrawError> {
    if cfg!(feature = "no-alloc") {
        return Err(DrawError::Unsupported("flood fill requires allocation"));
    }
    if image.bit_depth() == BitDepth::Mono {
        return Err(DrawError::Unsupported("flood fill on 1-bit images"));
    }

    let threshold = image.color_threshold();
    let (data, layout) = image.buffer_mut()?;
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

    let (w, h) = (layout.width, layout.height);
    let mut map: Vec<u8> = Vec::new();
    map.try_reserve_exact(w * h)
        .map_err(|_| DrawError::AllocationFailed)?;
    map.resize(w * h, 0);

    let pen = Pen::new(layout.depth, color, threshold);
    let stop = Pen::new(layout.depth, boundary, threshold);

    let (mut cx, mut cy) = (x as usize, y as usize);
    loop {
        let i = cy * w + cx;
        let next = map[i] & 0x0f;

        if next == 0 {
            pen.put(data, &layout, cx, cy);
        }

        if next < EXHAUSTED {
            map[i] = (map[i] & 0xf0) | (next + 1);
            let (dx, dy) = DIRECTIONS[next as usize];
            let (nx, ny) = (cx as i32 + dx, cy as i32 + dy);
            if layout.contains(nx, ny) {
                let (nx, ny) = (nx as usize, ny as usize);
                if !pen.matches(data, &layout, nx, ny) && !stop.matches(data, &layout, nx, ny) {
                    map[ny * w + nx] = (next + 1) << 4;
                    cx = nx;
                    cy = ny;
                }
            }
            continue;
        }

        // exhausted: step back the way we came
        let arrived = map[i] >> 4;
        if arrived == 0 {
            break;
        }
        let (dx, dy) = DIRECTIONS[(arrived - 1) as usize];
        cx = (cx as i32 - dx) as usize;
        cy = (cy as i32 - dy) as usize;
    }

    log::trace!("flood fill from {},{} done", x, y);
    Ok(())
}
