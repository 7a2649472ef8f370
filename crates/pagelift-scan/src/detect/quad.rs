// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Quadrilateral selection — scan ranked contours for one that simplifies to
// exactly four corners.

use imageproc::geometry::{approximate_polygon_dp, arc_length};
use imageproc::point::Point;
use tracing::debug;

/// Scan the ranked candidates, largest first, and return the first whose
/// simplified polygon has exactly 4 vertices.
///
/// Each contour is simplified with a tolerance proportional to its own
/// perimeter, collapsing near-collinear runs of edge pixels into straight
/// sides. The scan is greedy with early exit: once a 4-vertex candidate is
/// found, later contours are never considered, even if they look more
/// document-like.
///
/// Returns `None` when no candidate qualifies; the two request flows apply
/// different fallback policies to that outcome.
pub fn select_quadrilateral(
    candidates: &[Vec<Point<i32>>],
    tolerance: f64,
) -> Option<[Point<i32>; 4]> {
    for (rank, points) in candidates.iter().enumerate() {
        // Fewer than 4 boundary pixels can never simplify to 4 corners, and
        // a zero perimeter would make the tolerance degenerate.
        if points.len() < 4 {
            continue;
        }
        let perimeter = arc_length(points, true);
        let approx = approximate_polygon_dp(points, tolerance * perimeter, true);
        debug!(rank, vertices = approx.len(), "Candidate simplified");

        if let [a, b, c, d] = approx[..] {
            debug!(rank, "Quadrilateral selected");
            return Some([a, b, c, d]);
        }
    }
    None
}
