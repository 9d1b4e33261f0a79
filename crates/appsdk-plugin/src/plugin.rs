// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Plugin lifecycle: attach to a host messenger, detach, release the context.

use std::sync::Arc;

use appsdk_bridge::PlatformContext;
use appsdk_core::PluginConfig;
use appsdk_core::error::Result;

use crate::channel::{ChannelRegistry, MethodCallHandler};
use crate::dispatcher::MethodDispatcher;
use crate::logging;

/// What the host hands the plugin when it attaches or detaches.
#[derive(Clone)]
pub struct PluginBinding {
    pub messenger: Arc<ChannelRegistry>,
    /// Application context, if the host has one to offer.
    pub application_context: Option<Arc<dyn PlatformContext>>,
}

impl PluginBinding {
    pub fn new(
        messenger: Arc<ChannelRegistry>,
        application_context: Option<Arc<dyn PlatformContext>>,
    ) -> Self {
        Self {
            messenger,
            application_context,
        }
    }

    /// Binding whose context is the native one for the compile target
    /// (`appsdk_bridge::platform_context`).
    pub fn with_platform_context(messenger: Arc<ChannelRegistry>) -> Result<Self> {
        let context = appsdk_bridge::platform_context()?;
        Ok(Self::new(messenger, Some(context)))
    }
}

/// A live registration: where the dispatcher was installed.
struct Registration {
    messenger: Arc<ChannelRegistry>,
    dispatcher: Arc<MethodDispatcher>,
}

/// The App SDK plugin as seen by the host engine.
pub struct AppSdkPlugin {
    config: PluginConfig,
    registration: Option<Registration>,
}

impl Default for AppSdkPlugin {
    fn default() -> Self {
        Self::new(PluginConfig::default())
    }
}

impl AppSdkPlugin {
    pub fn new(config: PluginConfig) -> Self {
        Self {
            config,
            registration: None,
        }
    }

    pub fn channel_name(&self) -> &str {
        &self.config.channel_name
    }

    pub fn is_attached(&self) -> bool {
        self.registration.is_some()
    }

    /// Host entry point for native embeddings.
    ///
    /// Installs logging from the plugin config, binds the target's platform
    /// context, and attaches on `messenger`. The returned binding is the one
    /// to hand back to [`AppSdkPlugin::detach`].
    pub fn attach_to_platform(&mut self, messenger: Arc<ChannelRegistry>) -> Result<PluginBinding> {
        logging::init(&self.config);
        let binding = PluginBinding::with_platform_context(messenger)?;
        self.attach(&binding);
        Ok(binding)
    }

    /// Register on the binding's messenger and capture its context.
    ///
    /// Attaching again without detaching first removes the earlier
    /// registration from the messenger it was made on.
    pub fn attach(&mut self, binding: &PluginBinding) {
        if self.registration.is_some() {
            tracing::warn!(
                channel = %self.config.channel_name,
                "plugin attached twice without detaching; replacing registration"
            );
            self.unregister();
        }

        let dispatcher = Arc::new(MethodDispatcher::new(binding.application_context.clone()));
        let handler: Arc<dyn MethodCallHandler> = dispatcher.clone();
        binding
            .messenger
            .set_handler(&self.config.channel_name, Some(handler));
        self.registration = Some(Registration {
            messenger: binding.messenger.clone(),
            dispatcher,
        });

        tracing::info!(
            channel = %self.config.channel_name,
            has_context = binding.application_context.is_some(),
            "App SDK plugin attached"
        );
    }

    /// Unregister from the messenger used at attach and release the context.
    pub fn detach(&mut self, binding: &PluginBinding) {
        let attached_here = self
            .registration
            .as_ref()
            .is_some_and(|r| Arc::ptr_eq(&r.messenger, &binding.messenger));
        if self.registration.is_some() && !attached_here {
            tracing::warn!(
                channel = %self.config.channel_name,
                "detach binding differs from attach binding; unregistering original messenger"
            );
        }
        self.unregister();
        tracing::info!(channel = %self.config.channel_name, "App SDK plugin detached");
    }

    fn unregister(&mut self) {
        if let Some(registration) = self.registration.take() {
            registration
                .messenger
                .set_handler(&self.config.channel_name, None);
            tracing::debug!(
                channel = %self.config.channel_name,
                had_context = registration.dispatcher.has_context(),
                "channel handler removed"
            );
        }
    }
}
