// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub context for desktop/CI builds where native mobile APIs are unavailable.
//
// Every read returns `PlatformUnavailable`. The real implementation lives in
// the `android` module.

use appsdk_core::error::{AppSdkError, Result};
use appsdk_core::{DeviceModel, OsVersion};

use crate::traits::PlatformContext;

/// No-op context returned on non-mobile platforms.
pub struct StubContext;

impl PlatformContext for StubContext {
    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }

    fn device_id(&self) -> Result<Option<String>> {
        tracing::warn!("PlatformContext::device_id called on stub context");
        Err(AppSdkError::PlatformUnavailable)
    }

    fn device_model(&self) -> Result<DeviceModel> {
        tracing::warn!("PlatformContext::device_model called on stub context");
        Err(AppSdkError::PlatformUnavailable)
    }

    fn os_version(&self) -> Result<OsVersion> {
        tracing::warn!("PlatformContext::os_version called on stub context");
        Err(AppSdkError::PlatformUnavailable)
    }

    fn package_name(&self) -> Result<String> {
        Err(AppSdkError::PlatformUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_name() {
        assert_eq!(StubContext.platform_name(), "Desktop (stub)");
    }

    #[test]
    fn every_read_is_unavailable() {
        let ctx = StubContext;
        assert!(matches!(ctx.device_id(), Err(AppSdkError::PlatformUnavailable)));
        assert!(matches!(ctx.device_model(), Err(AppSdkError::PlatformUnavailable)));
        assert!(matches!(ctx.os_version(), Err(AppSdkError::PlatformUnavailable)));
        assert!(matches!(ctx.package_name(), Err(AppSdkError::PlatformUnavailable)));
    }
}
