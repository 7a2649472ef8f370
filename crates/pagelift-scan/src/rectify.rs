// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Perspective rectification — resample the region bounded by a document
// quadrilateral into a flat, top-down rectangular raster.

use image::{DynamicImage, Rgb, RgbImage};
use imageproc::geometric_transformations::{Interpolation, Projection, warp_into};
use pagelift_core::Quad;
use pagelift_core::error::{PageliftError, Result};
use tracing::debug;

/// Warp the quadrilateral region of `original` onto an axis-aligned
/// rectangle.
///
/// `quad` must already be in original-image coordinates and canonical
/// corner order. The destination size comes from [`Quad::rectified_size`]
/// (larger of each opposing edge pair). Resampling is bilinear and fully
/// deterministic.
///
/// Fails with [`PageliftError::Rectification`] on degenerate geometry: a
/// zero-size destination or corner sets that admit no invertible projective
/// mapping.
pub fn four_point_warp(original: &DynamicImage, quad: &Quad) -> Result<RgbImage> {
    let (dest_width, dest_height) = quad.rectified_size();
    if dest_width == 0 || dest_height == 0 {
        return Err(PageliftError::Rectification(format!(
            "degenerate destination size {}x{}",
            dest_width, dest_height
        )));
    }

    let [tl, tr, br, bl] = quad.corners();
    let src: [(f32, f32); 4] = [(tl.x, tl.y), (tr.x, tr.y), (br.x, br.y), (bl.x, bl.y)];
    let dest: [(f32, f32); 4] = [
        (0.0, 0.0),
        (dest_width as f32 - 1.0, 0.0),
        (dest_width as f32 - 1.0, dest_height as f32 - 1.0),
        (0.0, dest_height as f32 - 1.0),
    ];

    let projection = Projection::from_control_points(src, dest).ok_or_else(|| {
        PageliftError::Rectification("no projective mapping for detected corners".into())
    })?;

    let rgb = original.to_rgb8();
    let mut output = RgbImage::new(dest_width, dest_height);
    warp_into(
        &rgb,
        &projection,
        Interpolation::Bilinear,
        Rgb([255u8, 255, 255]),
        &mut output,
    );

    debug!(dest_width, dest_height, "Perspective warp applied");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagelift_core::Point;

    fn checker_source() -> DynamicImage {
        let mut img = RgbImage::from_pixel(400, 400, Rgb([20u8, 20, 20]));
        // Bright region occupying (100,100)..(300,300).
        for y in 100..300 {
            for x in 100..300 {
                img.put_pixel(x, y, Rgb([240u8, 240, 240]));
            }
        }
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn output_dimensions_match_rectified_size() {
        let quad = Quad::from_unordered([
            Point::new(100.0, 100.0),
            Point::new(300.0, 100.0),
            Point::new(300.0, 300.0),
            Point::new(100.0, 300.0),
        ]);
        let out = four_point_warp(&checker_source(), &quad).unwrap();
        let (w, h) = quad.rectified_size();
        assert_eq!((out.width(), out.height()), (w, h));
    }

    #[test]
    fn axis_aligned_warp_copies_the_region() {
        let quad = Quad::from_unordered([
            Point::new(100.0, 100.0),
            Point::new(300.0, 100.0),
            Point::new(300.0, 300.0),
            Point::new(100.0, 300.0),
        ]);
        let out = four_point_warp(&checker_source(), &quad).unwrap();
        // Interior of the warped output is the bright region.
        let centre = out.get_pixel(out.width() / 2, out.height() / 2);
        assert!(centre.0[0] > 200, "centre pixel was {:?}", centre);
    }

    #[test]
    fn tilted_quad_is_straightened() {
        // A parallelogram leaning right: the warp must still produce the
        // computed destination size and sample from inside the source.
        let quad = Quad::from_unordered([
            Point::new(120.0, 100.0),
            Point::new(320.0, 120.0),
            Point::new(300.0, 320.0),
            Point::new(100.0, 300.0),
        ]);
        let out = four_point_warp(&checker_source(), &quad).unwrap();
        let (w, h) = quad.rectified_size();
        assert_eq!((out.width(), out.height()), (w, h));
    }

    #[test]
    fn zero_area_quad_is_rejected() {
        let quad = Quad::from_unordered([
            Point::new(50.0, 50.0),
            Point::new(50.0, 50.0),
            Point::new(50.0, 50.0),
            Point::new(50.0, 50.0),
        ]);
        let err = four_point_warp(&checker_source(), &quad).unwrap_err();
        assert!(matches!(err, PageliftError::Rectification(_)));
    }

    #[test]
    fn warp_is_deterministic() {
        let quad = Quad::from_unordered([
            Point::new(120.0, 100.0),
            Point::new(320.0, 120.0),
            Point::new(300.0, 320.0),
            Point::new(100.0, 300.0),
        ]);
        let a = four_point_warp(&checker_source(), &quad).unwrap();
        let b = four_point_warp(&checker_source(), &quad).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }
}
