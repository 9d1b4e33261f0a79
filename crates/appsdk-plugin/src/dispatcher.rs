// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Method dispatcher: one call in, one platform read, one response out.

use std::sync::Arc;

use serde_json::Value;

use appsdk_bridge::PlatformContext;
use appsdk_core::codec;
use appsdk_core::error::AppSdkError;
use appsdk_core::{MethodCall, MethodName, MethodResponse};

use crate::channel::MethodCallHandler;

/// Code returned when an incoming message cannot be decoded.
pub const CODEC_ERROR: &str = "CODEC_ERROR";

/// Encoded `CODEC_ERROR` envelope describing `err`.
pub fn codec_error_reply(err: &AppSdkError) -> Option<Vec<u8>> {
    tracing::warn!(error = %err, "rejecting undecodable channel message");
    let response = MethodResponse::Error {
        code: CODEC_ERROR.to_string(),
        message: err.to_string(),
        details: None,
    };
    codec::encode_response(&response).ok().flatten()
}

/// Routes calls by method name to the matching platform read.
///
/// The context is injected at construction. Without one, every call is
/// answered with `CONTEXT_ERROR` before the method name is looked at.
pub struct MethodDispatcher {
    context: Option<Arc<dyn PlatformContext>>,
}

impl MethodDispatcher {
    pub fn new(context: Option<Arc<dyn PlatformContext>>) -> Self {
        Self { context }
    }

    pub fn has_context(&self) -> bool {
        self.context.is_some()
    }

    pub fn handle(&self, call: &MethodCall) -> MethodResponse {
        let Some(ctx) = self.context.as_deref() else {
            tracing::debug!(method = %call.method, "rejecting call: no context bound");
            return MethodResponse::context_unavailable();
        };

        let Some(method) = MethodName::parse(&call.method) else {
            tracing::debug!(method = %call.method, "method not implemented");
            return MethodResponse::NotImplemented;
        };

        let outcome = match method {
            MethodName::DeviceId => ctx.device_id().map(Value::from),
            MethodName::DeviceModel => ctx.device_model().map(|m| Value::String(m.to_string())),
            MethodName::OsVersion => ctx.os_version().map(|v| Value::String(v.to_string())),
            MethodName::PackageName => ctx.package_name().map(Value::String),
        };

        match outcome {
            Ok(value) => {
                tracing::debug!(%method, "method call succeeded");
                MethodResponse::Success(value)
            }
            Err(e) => {
                let code = method.error_code();
                tracing::warn!(%method, %code, error = %e, "platform read failed");
                MethodResponse::error(code, code.message(&e))
            }
        }
    }
}

impl MethodDispatcher {
    /// Answer a raw channel message with an encoded reply.
    ///
    /// `None` is the empty reply for a method that is not implemented.
    /// Messages that fail to decode get a `CODEC_ERROR` envelope.
    pub fn reply_to(&self, message: &[u8]) -> Option<Vec<u8>> {
        let encoded = codec::decode_method_call(message)
            .and_then(|call| codec::encode_response(&self.handle(&call)));
        encoded.unwrap_or_else(|e| codec_error_reply(&e))
    }
}

impl MethodCallHandler for MethodDispatcher {
    fn on_method_call(&self, call: &MethodCall) -> MethodResponse {
        self.handle(call)
    }
}
