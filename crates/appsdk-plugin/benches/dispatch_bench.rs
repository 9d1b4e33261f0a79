// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the channel path: decode a call, dispatch it
// against a fixed context, and encode the reply envelope.

use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use appsdk_bridge::PlatformContext;
use appsdk_core::error::Result;
use appsdk_core::{DeviceModel, MethodCall, OsVersion, codec};
use appsdk_plugin::{AppSdkPlugin, ChannelRegistry, MethodDispatcher, PluginBinding};

/// Context that answers instantly with constant values.
struct FixedContext;

impl PlatformContext for FixedContext {
    fn platform_name(&self) -> &str {
        "Android"
    }

    fn device_id(&self) -> Result<Option<String>> {
        Ok(Some("a1b2c3d4e5f60718".into()))
    }

    fn device_model(&self) -> Result<DeviceModel> {
        Ok(DeviceModel {
            manufacturer: "Google".into(),
            model: "Pixel 8".into(),
        })
    }

    fn os_version(&self) -> Result<OsVersion> {
        Ok(OsVersion {
            platform: "Android".into(),
            release: "14".into(),
            sdk_level: 34,
        })
    }

    fn package_name(&self) -> Result<String> {
        Ok("com.example.app".into())
    }
}

fn fixed_context() -> Option<Arc<dyn PlatformContext>> {
    Some(Arc::new(FixedContext))
}

fn bench_dispatch(c: &mut Criterion) {
    let dispatcher = MethodDispatcher::new(fixed_context());
    let call = MethodCall::new("getOSVersion");
    c.bench_function("dispatch_os_version", |b| {
        b.iter(|| dispatcher.handle(black_box(&call)))
    });

    let unknown = MethodCall::new("getBatteryLevel");
    c.bench_function("dispatch_not_implemented", |b| {
        b.iter(|| dispatcher.handle(black_box(&unknown)))
    });
}

fn bench_channel_roundtrip(c: &mut Criterion) {
    let binding = PluginBinding::new(Arc::new(ChannelRegistry::new()), fixed_context());
    let mut plugin = AppSdkPlugin::default();
    plugin.attach(&binding);

    let message = codec::encode_method_call(&MethodCall::new("getDeviceModel"))
        .expect("encode benchmark call");
    c.bench_function("channel_send_device_model", |b| {
        b.iter(|| binding.messenger.send("app_sdk/methods", black_box(&message)))
    });
}

criterion_group!(benches, bench_dispatch, bench_channel_roundtrip);
criterion_main!(benches);
