// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Contour extraction — trace closed boundary curves in an edge map and rank
// them by enclosed area.

use image::GrayImage;
use imageproc::contours::find_contours;
use imageproc::point::Point;
use tracing::debug;

/// Trace closed contours in the edge map and return the `max_candidates`
/// largest, ordered by enclosed area descending.
///
/// The document boundary is expected to be among the largest contours in a
/// photo dominated by the page, so capping the candidate set bounds the cost
/// of the quadrilateral scan that follows. An empty result is a valid
/// outcome (blank or edge-free images), handled by the selector's fallback
/// policy.
pub fn ranked_contours(edges: &GrayImage, max_candidates: usize) -> Vec<Vec<Point<i32>>> {
    let mut contours: Vec<Vec<Point<i32>>> = find_contours::<i32>(edges)
        .into_iter()
        .map(|c| c.points)
        .collect();

    contours.sort_by(|a, b| contour_area(b).total_cmp(&contour_area(a)));
    contours.truncate(max_candidates);

    debug!(candidates = contours.len(), "Contours ranked by area");
    contours
}

/// Enclosed area of a closed contour via the shoelace formula.
pub(crate) fn contour_area(points: &[Point<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut area = 0.0f64;
    for i in 0..points.len() {
        let j = (i + 1) % points.len();
        area += points[i].x as f64 * points[j].y as f64;
        area -= points[j].x as f64 * points[i].y as f64;
    }
    area.abs() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    /// Draw a 1-pixel-wide rectangle outline, the shape Canny hands us.
    fn rectangle_outline(img: &mut GrayImage, x0: u32, y0: u32, x1: u32, y1: u32) {
        for x in x0..=x1 {
            img.put_pixel(x, y0, Luma([255u8]));
            img.put_pixel(x, y1, Luma([255u8]));
        }
        for y in y0..=y1 {
            img.put_pixel(x0, y, Luma([255u8]));
            img.put_pixel(x1, y, Luma([255u8]));
        }
    }

    #[test]
    fn empty_edge_map_yields_no_contours() {
        let edges = GrayImage::new(100, 100);
        assert!(ranked_contours(&edges, 5).is_empty());
    }

    #[test]
    fn largest_contour_ranks_first() {
        let mut edges = GrayImage::new(200, 200);
        rectangle_outline(&mut edges, 10, 10, 180, 180);
        rectangle_outline(&mut edges, 20, 20, 40, 40);

        let ranked = ranked_contours(&edges, 5);
        assert!(!ranked.is_empty());

        let first = contour_area(&ranked[0]);
        for contour in &ranked[1..] {
            assert!(contour_area(contour) <= first);
        }
        // The big outline encloses roughly 170*170 in working pixels.
        assert!(first > 20_000.0, "largest area was {}", first);
    }

    #[test]
    fn candidate_cap_is_respected() {
        let mut edges = GrayImage::new(300, 300);
        // Eight disjoint small boxes.
        for i in 0..8u32 {
            let x = 10 + (i % 4) * 70;
            let y = 10 + (i / 4) * 70;
            rectangle_outline(&mut edges, x, y, x + 30, y + 30);
        }
        let ranked = ranked_contours(&edges, 5);
        assert!(ranked.len() <= 5);
    }

    #[test]
    fn shoelace_area_of_unit_square() {
        let square = vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
        ];
        assert!((contour_area(&square) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_contours_have_zero_area() {
        assert_eq!(contour_area(&[Point::new(3, 4)]), 0.0);
        assert_eq!(contour_area(&[Point::new(0, 0), Point::new(5, 5)]), 0.0);
    }
}
