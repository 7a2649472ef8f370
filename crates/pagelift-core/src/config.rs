// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scanner tuning parameters.

use serde::{Deserialize, Serialize};

/// Tuning parameters for the detection and rectification pipeline.
///
/// Every constant that shapes the pipeline's behaviour lives here as a named
/// field; there are no hidden magic numbers downstream. The defaults are
/// tuned for printed documents photographed on varied backgrounds and are
/// what the two top-level operations use unless a caller overrides them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Height of the reduced working raster used for detection, in pixels.
    ///
    /// Detection cost is bounded by this constant regardless of the input
    /// resolution: a 4000x3000 photo and a 1000x750 photo cost the same.
    pub working_height: u32,
    /// Sigma of the Gaussian blur applied before edge detection. The default
    /// corresponds to a 5x5 smoothing kernel.
    pub blur_sigma: f32,
    /// Low threshold for Canny edge detection.
    pub canny_low: f32,
    /// High threshold for Canny edge detection.
    pub canny_high: f32,
    /// Polygon simplification tolerance, as a fraction of contour perimeter.
    pub approx_tolerance: f64,
    /// How many of the largest contours are considered as document
    /// candidates. Caps the cost of the quadrilateral scan.
    pub max_candidates: usize,
    /// JPEG quality (1-100) for re-encoding the rectified image.
    pub jpeg_quality: u8,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            working_height: 500,
            blur_sigma: 1.1,
            canny_low: 75.0,
            canny_high: 200.0,
            approx_tolerance: 0.02,
            max_candidates: 5,
            jpeg_quality: 90,
        }
    }
}
