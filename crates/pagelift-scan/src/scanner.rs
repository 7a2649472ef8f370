// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document scanner — the two top-level request flows, composing the codec,
// detection, and rectification stages.

use pagelift_core::error::Result;
use pagelift_core::{Point, Quad, Rect, ScanConfig};
use tracing::{info, instrument, warn};

use crate::codec;
use crate::detect::{bounds, contour, preprocess, quad};
use crate::rectify;

/// Stateless document scanning service.
///
/// Holds nothing but tuning parameters, so a single instance can serve any
/// number of concurrent requests; every call owns its intermediate rasters
/// and drops them on return.
pub struct DocumentScanner {
    config: ScanConfig,
}

impl DocumentScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// The active tuning parameters.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Locate the document in a photograph and report its axis-aligned
    /// bounding rectangle in original-image coordinates.
    ///
    /// Never fails for "no document found": if no candidate simplifies to a
    /// quadrilateral the largest contour is used as-is, and if there are no
    /// contours at all the full image extent is reported. The only error is
    /// [`PageliftError::Decode`](pagelift_core::PageliftError::Decode) for
    /// undecodable bytes.
    #[instrument(skip_all, fields(data_len = data.len()))]
    pub fn detect_bounds(&self, data: &[u8]) -> Result<Rect> {
        let image = codec::decode_image(data)?;
        let pre = preprocess::edge_map(&image, &self.config);
        let candidates = contour::ranked_contours(&pre.edges, self.config.max_candidates);

        let selected = match quad::select_quadrilateral(&candidates, self.config.approx_tolerance)
        {
            Some(corners) => Some(corners.to_vec()),
            None => {
                // Bounds reporting tolerates non-quadrilateral documents:
                // fall back to the largest contour as-is.
                if !candidates.is_empty() {
                    warn!("No quadrilateral among candidates; using largest contour");
                }
                candidates.into_iter().next()
            }
        };

        let rect = match selected {
            Some(points) => {
                bounds::bounding_rect(&points, pre.ratio, image.width(), image.height())
            }
            None => {
                warn!("No contours found; reporting full image extent");
                Rect::full_extent(image.width(), image.height())
            }
        };

        info!(
            x = rect.x,
            y = rect.y,
            width = rect.width,
            height = rect.height,
            "Document bounds detected"
        );
        Ok(rect)
    }

    /// Crop the document out of a photograph and return it as a flat,
    /// top-down JPEG.
    ///
    /// When no candidate simplifies to a quadrilateral the input bytes are
    /// returned unchanged; callers detect that case by comparing output to
    /// input. Fails on undecodable bytes, degenerate detected geometry, or
    /// encode failure.
    #[instrument(skip_all, fields(data_len = data.len()))]
    pub fn auto_crop(&self, data: &[u8]) -> Result<Vec<u8>> {
        let image = codec::decode_image(data)?;
        let pre = preprocess::edge_map(&image, &self.config);
        let candidates = contour::ranked_contours(&pre.edges, self.config.max_candidates);

        let Some(corners) =
            quad::select_quadrilateral(&candidates, self.config.approx_tolerance)
        else {
            warn!("No quadrilateral found; returning input unchanged");
            return Ok(data.to_vec());
        };

        // Canonicalize in working space, then map into original coordinates.
        // Corner labels are preserved under uniform positive scaling.
        let page_quad = Quad::from_unordered(
            corners.map(|p| Point::new(p.x as f32, p.y as f32)),
        )
        .scaled(pre.ratio);

        let warped = rectify::four_point_warp(&image, &page_quad)?;
        let bytes = codec::encode_jpeg(&warped, self.config.jpeg_quality)?;

        info!(
            out_width = warped.width(),
            out_height = warped.height(),
            out_bytes = bytes.len(),
            "Document cropped"
        );
        Ok(bytes)
    }
}

impl Default for DocumentScanner {
    fn default() -> Self {
        Self::new(ScanConfig::default())
    }
}

/// Detect document bounds with default tuning parameters.
pub fn detect_bounds(data: &[u8]) -> Result<Rect> {
    DocumentScanner::default().detect_bounds(data)
}

/// Auto-crop a document with default tuning parameters.
pub fn auto_crop(data: &[u8]) -> Result<Vec<u8>> {
    DocumentScanner::default().auto_crop(data)
}
