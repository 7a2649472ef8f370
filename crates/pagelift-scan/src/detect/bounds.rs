// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bounds reporting — convert a working-space point set into an axis-aligned
// rectangle in original-image coordinates.

use imageproc::point::Point;
use pagelift_core::Rect;

/// Axis-aligned bounding rectangle of a working-space point set, scaled back
/// into original-image coordinates.
///
/// Coordinates are multiplied by the scale ratio and truncated to integers,
/// then clamped into the original extent so the containment invariant holds
/// even when truncation lands on the far edge.
pub fn bounding_rect(
    points: &[Point<i32>],
    ratio: f32,
    original_width: u32,
    original_height: u32,
) -> Rect {
    if points.is_empty() {
        return Rect::full_extent(original_width, original_height);
    }

    let mut min_x = i32::MAX;
    let mut min_y = i32::MAX;
    let mut max_x = i32::MIN;
    let mut max_y = i32::MIN;
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    let x = (min_x.max(0) as f32 * ratio) as u32;
    let y = (min_y.max(0) as f32 * ratio) as u32;
    let width = ((max_x - min_x.max(0) + 1) as f32 * ratio) as u32;
    let height = ((max_y - min_y.max(0) + 1) as f32 * ratio) as u32;

    Rect {
        x,
        y,
        width,
        height,
    }
    .clamped(original_width, original_height)
}
