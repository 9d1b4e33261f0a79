// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the App SDK method channel.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the channel the plugin answers on.
pub const CHANNEL_NAME: &str = "app_sdk/methods";

/// A single request issued by the host shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    /// Argument payload. Ignored by every handler.
    #[serde(rename = "args", default)]
    pub arguments: Value,
}

impl MethodCall {
    /// Build a call with no arguments.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: Value::Null,
        }
    }

    pub fn with_arguments(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }
}

/// The methods this plugin knows how to answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodName {
    DeviceId,
    DeviceModel,
    OsVersion,
    PackageName,
}

impl MethodName {
    pub const ALL: [MethodName; 4] = [
        MethodName::DeviceId,
        MethodName::DeviceModel,
        MethodName::OsVersion,
        MethodName::PackageName,
    ];

    /// Look up a method by its wire name. Unknown names return `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "getDeviceId" => Some(Self::DeviceId),
            "getDeviceModel" => Some(Self::DeviceModel),
            "getOSVersion" => Some(Self::OsVersion),
            "getPackageName" => Some(Self::PackageName),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DeviceId => "getDeviceId",
            Self::DeviceModel => "getDeviceModel",
            Self::OsVersion => "getOSVersion",
            Self::PackageName => "getPackageName",
        }
    }

    /// Error code reported when the read behind this method fails.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::DeviceId => ErrorCode::DeviceIdError,
            Self::DeviceModel => ErrorCode::DeviceModelError,
            Self::OsVersion => ErrorCode::OsVersionError,
            Self::PackageName => ErrorCode::PackageNameError,
        }
    }
}

impl std::fmt::Display for MethodName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error codes placed in the `code` slot of an error response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// No platform context is bound. Checked before any method lookup.
    ContextError,
    DeviceIdError,
    DeviceModelError,
    OsVersionError,
    PackageNameError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContextError => "CONTEXT_ERROR",
            Self::DeviceIdError => "DEVICE_ID_ERROR",
            Self::DeviceModelError => "DEVICE_MODEL_ERROR",
            Self::OsVersionError => "OS_VERSION_ERROR",
            Self::PackageNameError => "PACKAGE_NAME_ERROR",
        }
    }

    /// Leading text of the message for a failed read.
    fn failure_prefix(&self) -> &'static str {
        match self {
            Self::ContextError => "Context is not available",
            Self::DeviceIdError => "Failed to get device ID",
            Self::DeviceModelError => "Failed to get device model",
            Self::OsVersionError => "Failed to get OS version",
            Self::PackageNameError => "Failed to get package name",
        }
    }

    /// Render the human-readable message for this code wrapping `cause`.
    pub fn message(&self, cause: &dyn std::fmt::Display) -> String {
        match self {
            Self::ContextError => self.failure_prefix().to_string(),
            _ => format!("{}: {cause}", self.failure_prefix()),
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one method call. Exactly one is produced per request.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodResponse {
    Success(Value),
    Error {
        code: String,
        message: String,
        details: Option<Value>,
    },
    /// The method is not handled by this plugin.
    NotImplemented,
}

impl MethodResponse {
    pub fn success(value: impl Into<Value>) -> Self {
        Self::Success(value.into())
    }

    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Error {
            code: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn context_unavailable() -> Self {
        let code = ErrorCode::ContextError;
        Self::error(code, code.failure_prefix())
    }

    /// The error code, if this is an error response.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::Error { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// Device manufacturer and model as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceModel {
    pub manufacturer: String,
    pub model: String,
}

impl std::fmt::Display for DeviceModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.manufacturer, self.model)
    }
}

/// Operating system release and API level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsVersion {
    /// Platform name, e.g. "Android".
    pub platform: String,
    pub release: String,
    pub sdk_level: i32,
}

impl std::fmt::Display for OsVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} (SDK {})", self.platform, self.release, self.sdk_level)
    }
}
