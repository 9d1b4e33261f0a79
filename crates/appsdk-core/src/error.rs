// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for the App SDK.

use thiserror::Error;

/// Top-level error type for all App SDK operations.
#[derive(Debug, Error)]
pub enum AppSdkError {
    // -- Platform reads --
    /// A native read failed. The payload is the platform's own failure
    /// text, rendered verbatim so it can be embedded in response messages.
    #[error("{0}")]
    Platform(String),

    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,

    // -- Wire format --
    #[error("malformed method call: {0}")]
    MalformedCall(String),

    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),

    // -- Configuration --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, AppSdkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_error_displays_cause_verbatim() {
        let err = AppSdkError::Platform("permission denied".into());
        assert_eq!(err.to_string(), "permission denied");
    }

    #[test]
    fn unavailable_has_fixed_text() {
        assert_eq!(
            AppSdkError::PlatformUnavailable.to_string(),
            "feature not available on this platform"
        );
    }
}
