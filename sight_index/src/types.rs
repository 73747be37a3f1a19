// Copyright 2025 the Sight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry helpers with edge-inclusive semantics.
//!
//! Kurbo's [`Rect::contains`] is half-open. Everything in this crate treats all
//! four edges of a rectangle as inside, so the helpers here are used instead.

use kurbo::{Point, Rect};

/// Whether `point` lies inside `rect` or exactly on one of its edges.
#[inline]
pub fn contains_inclusive(rect: &Rect, point: Point) -> bool {
    rect.x0 <= point.x && point.x <= rect.x1 && rect.y0 <= point.y && point.y <= rect.y1
}

/// Whether two rectangles share at least one point, edges included.
#[inline]
pub fn overlaps_inclusive(a: &Rect, b: &Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// The four equal quadrants of `rect`.
///
/// Ordered lower-left, lower-right, upper-left, upper-right, matching the
/// indices returned by [`quadrant_of`].
pub fn quadrants(rect: &Rect) -> [Rect; 4] {
    let c = rect.center();
    [
        Rect::new(rect.x0, rect.y0, c.x, c.y),
        Rect::new(c.x, rect.y0, rect.x1, c.y),
        Rect::new(rect.x0, c.y, c.x, rect.y1),
        Rect::new(c.x, c.y, rect.x1, rect.y1),
    ]
}

/// Index into [`quadrants`] that `point` belongs to.
///
/// Points on a split line go to the lower/left side so that each position maps
/// to exactly one quadrant. Points outside `rect` land in the nearest edge
/// quadrant by the same comparison.
#[inline]
pub fn quadrant_of(rect: &Rect, point: Point) -> usize {
    let c = rect.center();
    let right = usize::from(point.x > c.x);
    let upper = usize::from(point.y > c.y);
    (upper << 1) | right
}

/// Whether `rect` may be divided into [`quadrants`].
///
/// Both sides must exceed `min_cell_size`, and the center must fall strictly
/// inside `rect` on both axes. Near the float spacing of the coordinates the
/// center rounds onto an edge, and a quadrant would equal its parent.
#[inline]
pub(crate) fn can_split(rect: &Rect, min_cell_size: f64) -> bool {
    let c = rect.center();
    rect.width() > min_cell_size
        && rect.height() > min_cell_size
        && rect.x0 < c.x
        && c.x < rect.x1
        && rect.y0 < c.y
        && c.y < rect.y1
}

/// Grow `rect` to cover `point`.
#[inline]
pub(crate) fn grow_to(rect: Rect, point: Point) -> Rect {
    Rect::new(
        rect.x0.min(point.x),
        rect.y0.min(point.y),
        rect.x1.max(point.x),
        rect.y1.max(point.y),
    )
}
