// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// JNI entry points for the Kotlin plugin shell.
//
// The shell registers a handler on "app_sdk/methods" and forwards every raw
// message here together with its application `Context` (null once the
// engine has detached). The reply is the encoded envelope, or `null` to tell
// the host the method is not implemented.

#![cfg(target_os = "android")]

use std::ffi::c_void;
use std::sync::Arc;

use jni::objects::{JByteArray, JClass, JObject};
use jni::sys::{JNI_VERSION_1_6, jbyteArray, jint};
use jni::{JNIEnv, JavaVM};

use appsdk_bridge::PlatformContext;
use appsdk_bridge::android::AndroidContext;
use appsdk_core::PluginConfig;
use appsdk_core::error::AppSdkError;

use crate::dispatcher::{MethodDispatcher, codec_error_reply};
use crate::logging;

/// Called by ART when the shared library is loaded.
#[unsafe(no_mangle)]
pub extern "system" fn JNI_OnLoad(_vm: JavaVM, _reserved: *mut c_void) -> jint {
    logging::init(&PluginConfig::default());
    tracing::info!("App SDK native library loaded");
    JNI_VERSION_1_6
}

/// `AppSdkPlugin.nativeOnMethodCall(context: Context?, message: ByteArray): ByteArray?`
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_ha_app_1sdk_AppSdkPlugin_nativeOnMethodCall<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    context: JObject<'local>,
    message: JByteArray<'local>,
) -> jbyteArray {
    let reply = match env.convert_byte_array(&message) {
        Ok(bytes) => dispatcher_for(&mut env, &context).reply_to(&bytes),
        Err(e) => codec_error_reply(&AppSdkError::Bridge(format!("convert_byte_array: {e}"))),
    };

    match reply {
        Some(bytes) => match env.byte_array_from_slice(&bytes) {
            Ok(array) => array.into_raw(),
            Err(e) => {
                tracing::error!(error = %e, "failed to allocate reply byte[]");
                std::ptr::null_mut()
            }
        },
        None => std::ptr::null_mut(),
    }
}

/// Dispatcher bound to the shell's `Context`, or to none if it is null.
fn dispatcher_for(env: &mut JNIEnv<'_>, context: &JObject<'_>) -> MethodDispatcher {
    let context = match AndroidContext::from_jni(env, context) {
        Ok(ctx) => ctx.map(|c| Arc::new(c) as Arc<dyn PlatformContext>),
        Err(e) => {
            tracing::warn!(error = %e, "could not bind Android context");
            None
        }
    };
    MethodDispatcher::new(context)
}
