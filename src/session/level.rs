//! Level-progression board sizing.
//!
//! Clearing a level grows the board: width and height take turns
//! growing by one, odd transitions widening and even transitions
//! heightening. A growth that leaves an odd cell count is compensated
//! by one extra column (tiles only exist in pairs), and each dimension
//! is clamped to its configured cap.

/// Dimensions for the level after `cleared_level`.
///
/// `cleared_level` is the 1-based level just finished on a
/// `width × height` board. The returned area is always even.
#[must_use]
pub fn next_dimensions(
    cleared_level: u32,
    width: u16,
    height: u16,
    max_width: u16,
    max_height: u16,
) -> (u16, u16) {
    let mut w = width;
    let mut h = height;

    if cleared_level % 2 == 1 {
        w += 1;
    } else {
        h += 1;
    }
    if (u32::from(w) * u32::from(h)) % 2 == 1 {
        w += 1;
    }
    w = w.min(max_width);
    h = h.min(max_height);

    // Odd caps can pin both sides odd; step width back to keep the
    // pair invariant, or height when the width cap is already 1.
    if (u32::from(w) * u32::from(h)) % 2 == 1 {
        if w > 1 {
            w -= 1;
        } else {
            h -= 1;
        }
    }

    (w, h)
}
