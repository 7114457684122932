//! Open Graph plugin: integrates the meta resolver with the plugin system.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use validator::Validate;

use ogmeta_core::config::OpenGraphConfig;
use ogmeta_core::result::AppResult;
use ogmeta_core::traits::HostServices;
use ogmeta_plugin::hooks::definitions::HookPoint;
use ogmeta_plugin::hooks::registry::HookHandler;
use ogmeta_plugin::registry::{Plugin, PluginInfo};

use crate::error::OpenGraphError;
use crate::handlers::MetaResolver;
use crate::hooks::{PLUGIN_ID, PageMetaHook};

/// Open Graph meta plugin.
#[derive(Debug)]
pub struct OpenGraphPlugin {
    /// Plugin configuration
    config: Arc<OpenGraphConfig>,
    /// Shared resolver behind every hook handler
    resolver: Arc<MetaResolver>,
}

impl OpenGraphPlugin {
    /// Create the plugin against a host.
    pub fn new(config: OpenGraphConfig, host: HostServices) -> Self {
        let config = Arc::new(config);
        let resolver = Arc::new(MetaResolver::new(config.clone(), host));
        Self { config, resolver }
    }

    /// Handlers to register, one per hook point.
    ///
    /// Empty when the plugin is disabled.
    pub fn handlers(&self) -> Vec<(HookPoint, Arc<dyn HookHandler>)> {
        if !self.config.enabled {
            return Vec::new();
        }
        HookPoint::ALL
            .into_iter()
            .map(|point| {
                let handler: Arc<dyn HookHandler> =
                    Arc::new(PageMetaHook::new(point.clone(), self.resolver.clone()));
                (point, handler)
            })
            .collect()
    }
}

#[async_trait]
impl Plugin for OpenGraphPlugin {
    fn info(&self) -> PluginInfo {
        PluginInfo {
            id: PLUGIN_ID.to_string(),
            name: "Open Graph Metas".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "Adds Open Graph meta tags to forum page headers".to_string(),
            author: "Open Graph Metas Team".to_string(),
            hooks: self.registered_hooks(),
            enabled: self.config.enabled,
            priority: 100,
        }
    }

    async fn on_load(&self) -> AppResult<()> {
        self.config.validate().map_err(OpenGraphError::from)?;
        info!(
            max_description = self.config.description_max_length,
            threaded_attachment = ?self.config.thread_threaded.attachment,
            linear_attachment = ?self.config.thread_linear.attachment,
            "Open Graph plugin configuration validated"
        );
        Ok(())
    }

    async fn on_start(&self) -> AppResult<()> {
        info!("Open Graph plugin started");
        Ok(())
    }

    async fn on_stop(&self) -> AppResult<()> {
        info!("Open Graph plugin stopping");
        Ok(())
    }

    async fn on_unload(&self) -> AppResult<()> {
        info!("Open Graph plugin unloaded");
        Ok(())
    }

    fn registered_hooks(&self) -> Vec<HookPoint> {
        HookPoint::ALL.to_vec()
    }
}
