// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait for the device information the plugin exposes.

use appsdk_core::error::Result;
use appsdk_core::{DeviceModel, OsVersion};

/// Host-provided handle giving access to platform-level information.
///
/// Each method performs exactly one native read. Failures carry the
/// platform's own message as `AppSdkError::Platform`.
pub trait PlatformContext: Send + Sync {
    /// Platform name used in OS version strings (e.g. "Android").
    fn platform_name(&self) -> &str;

    /// Platform-assigned secure identifier. `None` when the platform has
    /// no identifier to report.
    fn device_id(&self) -> Result<Option<String>>;

    fn device_model(&self) -> Result<DeviceModel>;

    fn os_version(&self) -> Result<OsVersion>;

    /// Package / bundle identifier of the hosting application.
    fn package_name(&self) -> Result<String>;
}
