// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Pagelift.

use thiserror::Error;

/// Top-level error type for all Pagelift operations.
///
/// Geometric "nothing found" conditions are deliberately absent: a missing
/// document quadrilateral is a control-flow outcome with a defined fallback,
/// not an error. Only decode, rectification, and encode failures cross the
/// core's boundary.
#[derive(Debug, Error)]
pub enum PageliftError {
    /// The input bytes could not be decoded into an image (corrupt header,
    /// zero dimensions, unsupported encoding).
    #[error("image decoding failed: {0}")]
    Decode(String),

    /// The detected quadrilateral was degenerate (zero-area destination or
    /// non-invertible projection). Should not occur for 4 distinct corners.
    #[error("perspective rectification failed: {0}")]
    Rectification(String),

    /// Re-encoding the output raster failed.
    #[error("image encoding failed: {0}")]
    Encode(String),

    /// File I/O error. Only reachable from CLI paths; the core itself never
    /// touches disk.
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PageliftError>;
