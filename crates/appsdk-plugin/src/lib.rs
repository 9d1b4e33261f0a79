// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// App SDK plugin. Answers device-information requests on the
// "app_sdk/methods" channel. `AppSdkPlugin` owns the attach/detach lifecycle,
// `MethodDispatcher` routes each call to a single platform read, and
// `ChannelRegistry` is the in-process host messenger they register with.

pub mod channel;
pub mod dispatcher;
pub mod logging;
pub mod plugin;

#[cfg(target_os = "android")]
pub mod android_ffi;

pub use channel::{ChannelRegistry, MethodCallHandler};
pub use dispatcher::MethodDispatcher;
pub use plugin::{AppSdkPlugin, PluginBinding};
