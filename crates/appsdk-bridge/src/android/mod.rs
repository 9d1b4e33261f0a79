// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Android platform context via JNI.
//
// Requires the Android NDK and targets `aarch64-linux-android` or
// `armv7-linux-androideabi`. Each read is a single synchronous JNI call into
// the ART runtime: a static field on `android.os.Build`, a call on the
// application `Context`, or `Settings.Secure.getString`.
//
// ## Failure text
//
// A Java exception thrown by a read is cleared before returning and its
// `getMessage()` becomes the failure cause. An exception without a message
// reports the literal text "null", matching what the Kotlin shell shows.

#![cfg(target_os = "android")]

use jni::objects::{GlobalRef, JObject, JString, JValue};
use jni::{JNIEnv, JavaVM};

use appsdk_core::error::{AppSdkError, Result};
use appsdk_core::{DeviceModel, OsVersion};

use crate::traits::PlatformContext;

const BUILD_CLASS: &str = "android/os/Build";
const BUILD_VERSION_CLASS: &str = "android/os/Build$VERSION";
const SETTINGS_SECURE_CLASS: &str = "android/provider/Settings$Secure";

/// `Settings.Secure.ANDROID_ID`.
const ANDROID_ID: &str = "android_id";

const STRING_SIG: &str = "Ljava/lang/String;";

// ---------------------------------------------------------------------------
// JNI helpers
// ---------------------------------------------------------------------------

/// Convert a possibly-null `java.lang.String` into a Rust string.
fn java_string(env: &mut JNIEnv<'_>, obj: JObject<'_>) -> jni::errors::Result<Option<String>> {
    if obj.is_null() {
        return Ok(None);
    }
    let s: String = env.get_string(&JString::from(obj))?.into();
    Ok(Some(s))
}

/// Read a static `String` field, rendering `null` the way Kotlin templates do.
fn static_string(env: &mut JNIEnv<'_>, class: &str, field: &str) -> jni::errors::Result<String> {
    let obj = env.get_static_field(class, field, STRING_SIG)?.l()?;
    Ok(java_string(env, obj)?.unwrap_or_else(|| "null".to_string()))
}

/// Map a failed read into an `AppSdkError`, clearing any pending exception.
fn read_failure(env: &mut JNIEnv<'_>, e: jni::errors::Error) -> AppSdkError {
    if !matches!(e, jni::errors::Error::JavaException) {
        return AppSdkError::Bridge(e.to_string());
    }

    let throwable = match env.exception_occurred() {
        Ok(throwable) => throwable,
        Err(err) => return AppSdkError::Bridge(format!("exception_occurred: {err}")),
    };
    let _ = env.exception_clear();

    let message = env
        .call_method(&throwable, "getMessage", "()Ljava/lang/String;", &[])
        .and_then(|v| v.l());
    match message.and_then(|obj| java_string(env, obj)) {
        Ok(Some(text)) => AppSdkError::Platform(text),
        Ok(None) => AppSdkError::Platform("null".to_string()),
        Err(err) => {
            let _ = env.exception_clear();
            AppSdkError::Bridge(format!("Throwable.getMessage: {err}"))
        }
    }
}

// ---------------------------------------------------------------------------
// Context struct
// ---------------------------------------------------------------------------

/// Android implementation of [`PlatformContext`].
///
/// Holds the `JavaVM` and a global reference to the application `Context`.
/// The global reference is released when this value is dropped.
pub struct AndroidContext {
    vm: JavaVM,
    context: GlobalRef,
}

impl AndroidContext {
    /// Wrap a `Context` handed to native code by the Kotlin shell.
    ///
    /// Returns `Ok(None)` when `context` is a null reference.
    pub fn from_jni(env: &mut JNIEnv<'_>, context: &JObject<'_>) -> Result<Option<Self>> {
        if context.is_null() {
            return Ok(None);
        }
        let vm = env
            .get_java_vm()
            .map_err(|e| AppSdkError::Bridge(format!("failed to obtain JavaVM: {e}")))?;
        let context = env
            .new_global_ref(context)
            .map_err(|e| AppSdkError::Bridge(format!("failed to pin Context: {e}")))?;
        Ok(Some(Self { vm, context }))
    }

    /// Wrap the `Context` published by the NDK glue (`ndk_context`).
    ///
    /// Used when the plugin is embedded in a `NativeActivity` rather than
    /// driven from a Kotlin shell.
    pub fn from_ndk_context() -> Result<Self> {
        let ctx = ndk_context::android_context();
        // SAFETY: `ctx.vm()` returns the `JavaVM*` set by the NDK glue code.
        // The pointer is guaranteed valid for the lifetime of the process.
        let vm = unsafe { JavaVM::from_raw(ctx.vm().cast()) }
            .map_err(|e| AppSdkError::Bridge(format!("failed to obtain JavaVM: {e}")))?;

        let ptr = ctx.context();
        if ptr.is_null() {
            return Err(AppSdkError::Bridge(
                "Android context is null; native activity not initialised".into(),
            ));
        }

        let context = {
            let mut env = vm
                .attach_current_thread()
                .map_err(|e| AppSdkError::Bridge(format!("failed to attach JNI thread: {e}")))?;
            // SAFETY: the NDK guarantees this pointer is a valid global jobject
            // for the hosting Activity.
            let obj = unsafe { JObject::from_raw(ptr.cast()) };
            env.new_global_ref(&obj)
                .map_err(|e| AppSdkError::Bridge(format!("failed to pin Context: {e}")))?
        };
        Ok(Self { vm, context })
    }

    /// Run one read on an attached JNI thread.
    fn read<T>(
        &self,
        what: &str,
        read: impl FnOnce(&mut JNIEnv<'_>) -> jni::errors::Result<T>,
    ) -> Result<T> {
        let mut guard = self
            .vm
            .attach_current_thread()
            .map_err(|e| AppSdkError::Bridge(format!("failed to attach JNI thread: {e}")))?;
        let env: &mut JNIEnv<'_> = &mut guard;
        read(&mut *env).map_err(|e| {
            let err = read_failure(env, e);
            tracing::warn!(read = what, error = %err, "Android: platform read failed");
            err
        })
    }
}

impl PlatformContext for AndroidContext {
    fn platform_name(&self) -> &str {
        "Android"
    }

    /// `Settings.Secure.getString(contentResolver, ANDROID_ID)`.
    fn device_id(&self) -> Result<Option<String>> {
        self.read("device_id", |env| {
            let resolver = env
                .call_method(
                    &self.context,
                    "getContentResolver",
                    "()Landroid/content/ContentResolver;",
                    &[],
                )?
                .l()?;
            let key = env.new_string(ANDROID_ID)?;
            let value = env
                .call_static_method(
                    SETTINGS_SECURE_CLASS,
                    "getString",
                    "(Landroid/content/ContentResolver;Ljava/lang/String;)Ljava/lang/String;",
                    &[JValue::Object(&resolver), JValue::Object(&key)],
                )?
                .l()?;
            java_string(env, value)
        })
    }

    /// `Build.MANUFACTURER` and `Build.MODEL`.
    fn device_model(&self) -> Result<DeviceModel> {
        self.read("device_model", |env| {
            let manufacturer = static_string(env, BUILD_CLASS, "MANUFACTURER")?;
            let model = static_string(env, BUILD_CLASS, "MODEL")?;
            Ok(DeviceModel {
                manufacturer,
                model,
            })
        })
    }

    /// `Build.VERSION.RELEASE` and `Build.VERSION.SDK_INT`.
    fn os_version(&self) -> Result<OsVersion> {
        self.read("os_version", |env| {
            let release = static_string(env, BUILD_VERSION_CLASS, "RELEASE")?;
            let sdk_level = env.get_static_field(BUILD_VERSION_CLASS, "SDK_INT", "I")?.i()?;
            Ok(OsVersion {
                platform: self.platform_name().to_string(),
                release,
                sdk_level,
            })
        })
    }

    /// `Context.getPackageName()`.
    fn package_name(&self) -> Result<String> {
        self.read("package_name", |env| {
            let obj = env
                .call_method(&self.context, "getPackageName", "()Ljava/lang/String;", &[])?
                .l()?;
            Ok(java_string(env, obj)?.unwrap_or_else(|| "null".to_string()))
        })
    }
}
