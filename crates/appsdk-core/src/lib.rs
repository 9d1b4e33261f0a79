// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// App SDK: core types, error definitions, and the wire codec shared by the
// bridge and plugin crates.

pub mod codec;
pub mod config;
pub mod error;
pub mod types;

pub use config::PluginConfig;
pub use error::AppSdkError;
pub use types::*;
