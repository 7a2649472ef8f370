// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Preprocessing — reduce an input raster to a fixed-height grayscale edge
// map. All detection geometry happens in this reduced "working space"; the
// returned ratio maps results back to original-image coordinates.

use image::{DynamicImage, GrayImage};
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;
use pagelift_core::ScanConfig;
use tracing::debug;

/// A working-space edge map plus the scale factor back to original space.
pub struct EdgeMap {
    /// Binary-ish edge intensity image, `working_height` pixels tall.
    pub edges: GrayImage,
    /// originalHeight / workingHeight. Multiply working-space coordinates
    /// by this to recover original-image coordinates.
    pub ratio: f32,
}

/// Downscale, grayscale, blur, and edge-detect an input raster.
///
/// The working copy is resized to a fixed height so detection cost is a
/// constant regardless of input resolution. Gaussian smoothing suppresses
/// sensor noise before Canny; the fixed thresholds are tuned for printed
/// documents on varied backgrounds.
pub fn edge_map(image: &DynamicImage, config: &ScanConfig) -> EdgeMap {
    let ratio = image.height() as f32 / config.working_height as f32;
    let working_width = ((image.width() as f32 / ratio).round() as u32).max(1);

    let working = image.resize_exact(
        working_width,
        config.working_height,
        image::imageops::FilterType::Lanczos3,
    );
    debug!(
        working_width,
        working_height = config.working_height,
        ratio,
        "Downscaled to working space"
    );

    let gray = working.to_luma8();
    let blurred = gaussian_blur_f32(&gray, config.blur_sigma);
    let edges = canny(&blurred, config.canny_low, config.canny_high);
    debug!("Edge map computed");

    EdgeMap { edges, ratio }
}
