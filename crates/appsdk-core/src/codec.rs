// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// JSON method codec.
//
// Calls travel as `{"method": "...", "args": ...}`. Replies are envelopes:
//
//   success          -> [value]
//   error            -> [code, message, details]
//   not implemented  -> empty reply (no bytes at all)

use serde_json::{Value, json};

use crate::error::{AppSdkError, Result};
use crate::types::{MethodCall, MethodResponse};

/// Decode a method call sent by the host.
pub fn decode_method_call(bytes: &[u8]) -> Result<MethodCall> {
    let value: Value = serde_json::from_slice(bytes)?;
    let Value::Object(map) = value else {
        return Err(AppSdkError::MalformedCall(
            "method call must be a JSON object".into(),
        ));
    };
    let method = match map.get("method") {
        Some(Value::String(method)) => method.clone(),
        Some(_) => {
            return Err(AppSdkError::MalformedCall(
                "`method` must be a string".into(),
            ));
        }
        None => return Err(AppSdkError::MalformedCall("missing `method`".into())),
    };
    let arguments = map.get("args").cloned().unwrap_or(Value::Null);
    Ok(MethodCall { method, arguments })
}

pub fn encode_method_call(call: &MethodCall) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(call)?)
}

/// Encode a reply envelope. `None` means "send an empty reply".
pub fn encode_response(response: &MethodResponse) -> Result<Option<Vec<u8>>> {
    let envelope = match response {
        MethodResponse::Success(value) => json!([value]),
        MethodResponse::Error {
            code,
            message,
            details,
        } => json!([code, message, details.clone().unwrap_or(Value::Null)]),
        MethodResponse::NotImplemented => return Ok(None),
    };
    Ok(Some(serde_json::to_vec(&envelope)?))
}

/// Decode a reply envelope as the host would.
pub fn decode_response(bytes: Option<&[u8]>) -> Result<MethodResponse> {
    let Some(bytes) = bytes.filter(|b| !b.is_empty()) else {
        return Ok(MethodResponse::NotImplemented);
    };
    let value: Value = serde_json::from_slice(bytes)?;
    let Value::Array(mut items) = value else {
        return Err(AppSdkError::MalformedCall(
            "reply envelope must be a JSON array".into(),
        ));
    };
    match items.len() {
        1 => Ok(MethodResponse::Success(items.remove(0))),
        3 => {
            let details = items.pop().filter(|d| !d.is_null());
            let message = items.pop().and_then(|m| m.as_str().map(str::to_owned));
            let code = items.pop().and_then(|c| c.as_str().map(str::to_owned));
            match (code, message) {
                (Some(code), Some(message)) => Ok(MethodResponse::Error {
                    code,
                    message,
                    details,
                }),
                _ => Err(AppSdkError::MalformedCall(
                    "error envelope needs string code and message".into(),
                )),
            }
        }
        n => Err(AppSdkError::MalformedCall(format!(
            "reply envelope has {n} elements"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorCode;

    #[test]
    fn decodes_call_without_args() {
        let call = decode_method_call(br#"{"method":"getDeviceId"}"#).unwrap();
        assert_eq!(call, MethodCall::new("getDeviceId"));
    }

    #[test]
    fn decodes_call_with_args() {
        let call = decode_method_call(br#"{"method":"getOSVersion","args":{"x":1}}"#).unwrap();
        assert_eq!(call.method, "getOSVersion");
        assert_eq!(call.arguments, json!({"x": 1}));
    }

    #[test]
    fn rejects_call_without_method() {
        let err = decode_method_call(br#"{"args":null}"#).unwrap_err();
        assert!(matches!(err, AppSdkError::MalformedCall(_)));
        let err = decode_method_call(br#"{"method":7}"#).unwrap_err();
        assert!(matches!(err, AppSdkError::MalformedCall(_)));
        let err = decode_method_call(b"[]").unwrap_err();
        assert!(matches!(err, AppSdkError::MalformedCall(_)));
    }

    #[test]
    fn rejects_invalid_json() {
        let err = decode_method_call(b"{method").unwrap_err();
        assert!(matches!(err, AppSdkError::Codec(_)));
    }

    #[test]
    fn success_envelope_wraps_value() {
        let bytes = encode_response(&MethodResponse::success("com.example.app"))
            .unwrap()
            .unwrap();
        assert_eq!(bytes, br#"["com.example.app"]"#);
    }

    #[test]
    fn error_envelope_has_null_details() {
        let response = MethodResponse::error(
            ErrorCode::DeviceIdError,
            "Failed to get device ID: permission denied",
        );
        let bytes = encode_response(&response).unwrap().unwrap();
        assert_eq!(
            bytes,
            br#"["DEVICE_ID_ERROR","Failed to get device ID: permission denied",null]"#
        );
        assert_eq!(decode_response(Some(bytes.as_slice())).unwrap(), response);
    }

    #[test]
    fn not_implemented_is_empty_reply() {
        assert_eq!(encode_response(&MethodResponse::NotImplemented).unwrap(), None);
        assert_eq!(decode_response(None).unwrap(), MethodResponse::NotImplemented);
        assert_eq!(
            decode_response(Some(&b""[..])).unwrap(),
            MethodResponse::NotImplemented
        );
    }

    #[test]
    fn rejects_odd_sized_envelope() {
        assert!(decode_response(Some(&b"[1,2]"[..])).is_err());
        assert!(decode_response(Some(&br#"{"a":1}"#[..])).is_err());
    }
}
