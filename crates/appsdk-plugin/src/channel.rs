// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-process host messenger: named channels routed to method-call handlers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use appsdk_core::codec;
use appsdk_core::error::Result;
use appsdk_core::{MethodCall, MethodResponse};

/// Anything that can answer calls arriving on a channel.
pub trait MethodCallHandler: Send + Sync {
    fn on_method_call(&self, call: &MethodCall) -> MethodResponse;
}

/// Registry of channel handlers, shared between the host and its plugins.
#[derive(Default)]
pub struct ChannelRegistry {
    handlers: Mutex<HashMap<String, Arc<dyn MethodCallHandler>>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `handler` on `channel`, or remove the current one with `None`.
    pub fn set_handler(&self, channel: &str, handler: Option<Arc<dyn MethodCallHandler>>) {
        let mut handlers = self.handlers.lock().expect("channel map lock poisoned");
        match handler {
            Some(handler) => {
                if handlers.insert(channel.to_string(), handler).is_some() {
                    tracing::debug!(channel, "replaced existing channel handler");
                }
            }
            None => {
                handlers.remove(channel);
            }
        }
    }

    pub fn has_handler(&self, channel: &str) -> bool {
        self.handlers
            .lock()
            .expect("channel map lock poisoned")
            .contains_key(channel)
    }

    /// Deliver a call. Returns `None` when nothing listens on `channel`.
    pub fn invoke(&self, channel: &str, call: &MethodCall) -> Option<MethodResponse> {
        let handler = self
            .handlers
            .lock()
            .expect("channel map lock poisoned")
            .get(channel)
            .cloned();
        match handler {
            Some(handler) => Some(handler.on_method_call(call)),
            None => {
                tracing::debug!(channel, method = %call.method, "no handler on channel");
                None
            }
        }
    }

    /// Deliver an encoded call and return the encoded reply.
    ///
    /// An unregistered channel and a not-implemented method both produce an
    /// empty reply (`Ok(None)`).
    pub fn send(&self, channel: &str, message: &[u8]) -> Result<Option<Vec<u8>>> {
        let call = codec::decode_method_call(message)?;
        match self.invoke(channel, &call) {
            Some(response) => codec::encode_response(&response),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Echo {
        calls: AtomicUsize,
    }

    impl MethodCallHandler for Echo {
        fn on_method_call(&self, call: &MethodCall) -> MethodResponse {
            self.calls.fetch_add(1, Ordering::SeqCst);
            MethodResponse::success(call.method.clone())
        }
    }

    fn echo() -> Arc<Echo> {
        Arc::new(Echo {
            calls: AtomicUsize::new(0),
        })
    }

    #[test]
    fn routes_to_registered_handler() {
        let registry = ChannelRegistry::new();
        let handler = echo();
        registry.set_handler("test/echo", Some(handler.clone()));

        let response = registry.invoke("test/echo", &MethodCall::new("ping"));
        assert_eq!(response, Some(MethodResponse::success("ping")));
        assert_eq!(handler.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unregistered_channel_gets_no_reply() {
        let registry = ChannelRegistry::new();
        assert_eq!(registry.invoke("test/none", &MethodCall::new("ping")), None);
    }

    #[test]
    fn removing_handler_stops_routing() {
        let registry = ChannelRegistry::new();
        registry.set_handler("test/echo", Some(echo()));
        assert!(registry.has_handler("test/echo"));

        registry.set_handler("test/echo", None);
        assert!(!registry.has_handler("test/echo"));
        assert_eq!(registry.invoke("test/echo", &MethodCall::new("ping")), None);
    }

    #[test]
    fn send_encodes_reply() {
        let registry = ChannelRegistry::new();
        registry.set_handler("test/echo", Some(echo()));

        let reply = registry
            .send("test/echo", br#"{"method":"ping","args":null}"#)
            .unwrap();
        assert_eq!(reply.as_deref(), Some(&br#"["ping"]"#[..]));
    }

    #[test]
    fn send_rejects_malformed_message() {
        let registry = ChannelRegistry::new();
        registry.set_handler("test/echo", Some(echo()));
        assert!(registry.send("test/echo", b"not json").is_err());
    }
}
