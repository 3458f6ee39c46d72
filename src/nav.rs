//! Selection navigation
//!
//! Pure function turning one directional input sample into a new cursor
//! position over an ordered list of selectable items. Mutating highlights is
//! the caller's job; this module never touches visuals.

use crate::types::Vec2;

/// Compute the new cursor for a directional input.
///
/// The dominant axis wins: strictly `|x| > |y|` moves horizontally, anything
/// else (ties included) moves vertically. On the vertical axis, screen-space
/// "down" (`y < 0`) moves the cursor forward; this mapping is deliberate.
/// The result is clamped to `[0, len - 1]` with no wraparound. An empty list
/// returns `cursor` unchanged.
pub fn navigate(cursor: usize, len: usize, input: Vec2) -> usize {
    if len == 0 {
        return cursor;
    }

    let direction: isize = if input.x.abs() > input.y.abs() {
        if input.x > 0.0 { 1 } else { -1 }
    } else if input.y < 0.0 {
        1
    } else {
        -1
    };

    let moved = cursor as isize + direction;
    moved.clamp(0, len as isize - 1) as usize
}
