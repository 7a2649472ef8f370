// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the hosting layer's user-facing
// responses. Every technical error is mapped to plain English with a clear
// suggestion.

use crate::error::PageliftError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Might succeed on retry without any change.
    Transient,
    /// The user must supply a different input.
    ActionRequired,
    /// Cannot be fixed by retrying or user action.
    Permanent,
}

/// A human-readable error with a plain English message and an actionable
/// suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Whether the caller should auto-retry.
    pub retriable: bool,
    /// Severity level (drives presentation).
    pub severity: Severity,
}

/// Convert a `PageliftError` into a `HumanError` suitable for showing to
/// whoever photographed the document.
pub fn humanize_error(err: &PageliftError) -> HumanError {
    match err {
        PageliftError::Decode(_) => HumanError {
            message: "We couldn't read that image.".into(),
            suggestion: "Make sure the upload is a photo in JPEG or PNG format and try again.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        PageliftError::Rectification(_) => HumanError {
            message: "We couldn't straighten the document in this photo.".into(),
            suggestion: "Retake the photo with the whole sheet visible and try again.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        PageliftError::Encode(_) => HumanError {
            message: "Something went wrong while saving the cropped image.".into(),
            suggestion: "Please try again in a moment.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        PageliftError::Io(_) => HumanError {
            message: "We couldn't read or write that file.".into(),
            suggestion: "Check the file path and permissions, then try again.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },
    }
}
