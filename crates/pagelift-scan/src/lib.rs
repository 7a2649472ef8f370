// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pagelift-scan — Document boundary detection and perspective rectification.
//
// Given a photograph of a worksheet, locates the quadrilateral region the
// document occupies and either reports its bounding rectangle or resamples
// it into a flat, top-down image. Detection runs in a fixed-height working
// space so cost is independent of input resolution.

pub mod codec;
pub mod detect;
pub mod rectify;
pub mod scanner;

pub use scanner::{DocumentScanner, auto_crop, detect_bounds};
