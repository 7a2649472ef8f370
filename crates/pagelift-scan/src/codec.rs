// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image codec — decoding opaque byte buffers into in-memory rasters and
// re-encoding rasters for transport. The only part of the pipeline that
// touches an on-the-wire format.

use image::{DynamicImage, RgbImage};
use pagelift_core::error::{PageliftError, Result};
use tracing::debug;

/// Decode raw image bytes (JPEG, PNG, etc.) into an in-memory raster.
///
/// Fails with [`PageliftError::Decode`] if the bytes are not a decodable
/// image. Zero-dimension images are rejected here so downstream geometry
/// never has to reason about empty rasters.
pub fn decode_image(data: &[u8]) -> Result<DynamicImage> {
    let img = image::load_from_memory(data)
        .map_err(|err| PageliftError::Decode(format!("failed to decode image: {}", err)))?;

    if img.width() == 0 || img.height() == 0 {
        return Err(PageliftError::Decode("image has zero dimensions".into()));
    }

    debug!(
        width = img.width(),
        height = img.height(),
        "Image decoded from bytes"
    );
    Ok(img)
}

/// Encode a raster as JPEG bytes with the given quality (1-100).
pub fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality);
    image
        .write_with_encoder(encoder)
        .map_err(|err| PageliftError::Encode(format!("JPEG encoding failed: {}", err)))?;

    debug!(bytes = buffer.len(), quality, "Raster encoded to JPEG");
    Ok(buffer)
}
