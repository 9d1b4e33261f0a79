// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// App SDK: native platform context.
//
// Defines the `PlatformContext` trait the dispatcher reads device information
// through, plus the per-target implementations: JNI on Android, a stub
// everywhere else so desktop and CI builds link.

pub mod traits;

#[cfg(target_os = "android")]
pub mod android;

#[cfg(not(target_os = "android"))]
pub mod stub;

use std::sync::Arc;

pub use traits::PlatformContext;

/// Returns the platform context for the target operating system.
///
/// On Android this wraps the `Context` published by the NDK glue and fails
/// with `AppSdkError::Bridge` if no activity has been initialised yet.
pub fn platform_context() -> appsdk_core::error::Result<Arc<dyn PlatformContext>> {
    #[cfg(target_os = "android")]
    {
        // Android: `jni` calls into ART through the NDK-provided JavaVM.
        Ok(Arc::new(android::AndroidContext::from_ndk_context()?))
    }
    #[cfg(not(target_os = "android"))]
    {
        // DESKTOP/CI: every read reports PlatformUnavailable.
        Ok(Arc::new(stub::StubContext))
    }
}

#[cfg(all(test, not(target_os = "android")))]
mod tests {
    use super::*;

    #[test]
    fn desktop_gets_stub_context() {
        let ctx = platform_context().unwrap();
        assert_eq!(ctx.platform_name(), "Desktop (stub)");
    }
}
