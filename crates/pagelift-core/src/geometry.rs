// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Geometric primitives for document detection: points, canonically ordered
// quadrilaterals, and axis-aligned rectangles in image coordinates.

use serde::{Deserialize, Serialize};

/// A 2D point in image coordinates (pixels, origin at the top-left).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A document quadrilateral with canonically ordered corners:
/// top-left, top-right, bottom-right, bottom-left.
///
/// The ordering is established once at construction and is invariant to the
/// traversal direction and starting point of the contour the corners came
/// from, so downstream consumers can index corners positionally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    corners: [Point; 4],
}

impl Quad {
    /// Canonicalize four arbitrary corner points.
    ///
    /// The top-left corner has the smallest coordinate sum and the
    /// bottom-right the largest; of the remaining diagonal, the top-right
    /// corner has the smallest (y - x) difference and the bottom-left the
    /// largest.
    pub fn from_unordered(points: [Point; 4]) -> Self {
        let sum = |p: &Point| p.x + p.y;
        let diff = |p: &Point| p.y - p.x;

        let top_left = *points
            .iter()
            .min_by(|a, b| sum(a).total_cmp(&sum(b)))
            .expect("array is non-empty");
        let bottom_right = *points
            .iter()
            .max_by(|a, b| sum(a).total_cmp(&sum(b)))
            .expect("array is non-empty");
        let top_right = *points
            .iter()
            .min_by(|a, b| diff(a).total_cmp(&diff(b)))
            .expect("array is non-empty");
        let bottom_left = *points
            .iter()
            .max_by(|a, b| diff(a).total_cmp(&diff(b)))
            .expect("array is non-empty");

        Self {
            corners: [top_left, top_right, bottom_right, bottom_left],
        }
    }

    pub fn top_left(&self) -> Point {
        self.corners[0]
    }

    pub fn top_right(&self) -> Point {
        self.corners[1]
    }

    pub fn bottom_right(&self) -> Point {
        self.corners[2]
    }

    pub fn bottom_left(&self) -> Point {
        self.corners[3]
    }

    /// Corners in canonical order.
    pub fn corners(&self) -> [Point; 4] {
        self.corners
    }

    /// Scale every corner by a uniform factor, preserving the ordering.
    ///
    /// Used to map working-space detections back into original-image
    /// coordinates.
    pub fn scaled(&self, ratio: f32) -> Self {
        Self {
            corners: self
                .corners
                .map(|p| Point::new(p.x * ratio, p.y * ratio)),
        }
    }

    /// Dimensions of the axis-aligned rectangle this quadrilateral maps onto
    /// when rectified.
    ///
    /// Width is the larger of the top and bottom edge lengths, height the
    /// larger of the left and right edge lengths. Taking the larger of the
    /// two opposing-edge estimates compensates for perspective distortion
    /// asymmetry. Lengths are truncated to whole pixels.
    pub fn rectified_size(&self) -> (u32, u32) {
        let [tl, tr, br, bl] = self.corners;

        let width_bottom = br.distance(&bl);
        let width_top = tr.distance(&tl);
        let width = width_bottom.max(width_top) as u32;

        let height_right = tr.distance(&br);
        let height_left = tl.distance(&bl);
        let height = height_right.max(height_left) as u32;

        (width, height)
    }
}

/// An axis-aligned rectangle in original-image coordinates.
///
/// Invariant: `x + width` and `y + height` never exceed the dimensions of
/// the image the rectangle was detected in (see [`Rect::clamped`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// The full extent of a `width` x `height` image.
    pub fn full_extent(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// Clamp this rectangle into a `image_width` x `image_height` extent.
    ///
    /// Integer truncation when scaling detections back up can overshoot the
    /// far edge by a pixel; clamping restores the containment invariant.
    pub fn clamped(self, image_width: u32, image_height: u32) -> Self {
        let x = self.x.min(image_width);
        let y = self.y.min(image_height);
        Self {
            x,
            y,
            width: self.width.min(image_width - x),
            height: self.height.min(image_height - y),
        }
    }
}

// -- Tests --------------------------------------------------------------------
