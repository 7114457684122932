//! Plays the host's part in a page render.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use ogmeta_core::config::OpenGraphConfig;
use ogmeta_core::models::PageRequest;
use ogmeta_core::result::AppResult;
use ogmeta_core::traits::HostServices;
use ogmeta_plugin::hooks::definitions::HookPoint;
use ogmeta_plugin::manager::PluginManager;
use ogmeta_plugin::registry::PluginInfo;
use plugin_open_graph::{OpenGraphPlugin, hooks_for, page_payload};

/// What one hook contributed to the page header.
#[derive(Debug, Clone, Serialize)]
pub struct HookReport {
    /// Hook point fired.
    pub hook: HookPoint,
    /// Number of handlers that ran.
    pub handlers: usize,
    /// Whether a handler halted the chain.
    pub halted: bool,
    /// Header text produced at this hook.
    pub header_include: String,
}

/// Result of rendering one page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageRender {
    /// Everything appended to the page header, in firing order.
    pub header_include: String,
    /// Per-hook breakdown.
    pub hooks: Vec<HookReport>,
}

/// A plugin manager with the Open Graph plugin loaded.
#[derive(Debug)]
pub struct Harness {
    manager: PluginManager,
}

impl Harness {
    /// Loads and starts the plugin against `host`.
    pub async fn start(config: OpenGraphConfig, host: HostServices) -> AppResult<Self> {
        let manager = PluginManager::new();
        let plugin = Arc::new(OpenGraphPlugin::new(config, host));
        let handlers = plugin.handlers();
        manager.load_plugin(plugin, handlers).await?;
        Ok(Self { manager })
    }

    /// Fires the hooks a host fires for this page.
    pub async fn render(&self, request: &PageRequest) -> AppResult<PageRender> {
        self.fire_all(&hooks_for(request.page.kind()), request).await
    }

    /// Fires `hooks` in order with the same request.
    pub async fn fire_all(
        &self,
        hooks: &[HookPoint],
        request: &PageRequest,
    ) -> AppResult<PageRender> {
        let mut render = PageRender::default();
        for hook in hooks {
            let report = self.fire(hook.clone(), request).await?;
            render.header_include.push_str(&report.header_include);
            render.hooks.push(report);
        }
        info!(
            page = %request.page.kind(),
            hooks = render.hooks.len(),
            bytes = render.header_include.len(),
            "Page rendered"
        );
        Ok(render)
    }

    /// Fires a single hook.
    pub async fn fire(&self, hook: HookPoint, request: &PageRequest) -> AppResult<HookReport> {
        let payload = page_payload(hook.clone(), request)?;
        let result = self.manager.fire(&payload).await;
        debug!(hook = %hook, handlers = result.results.len(), halted = result.halted, "Hook fired");
        Ok(HookReport {
            header_include: result.header_include(),
            handlers: result.results.len(),
            halted: result.halted,
            hook,
        })
    }

    /// Loaded plugins.
    pub async fn plugins(&self) -> Vec<PluginInfo> {
        self.manager.list_plugins().await
    }

    /// Unloads every plugin.
    pub async fn shutdown(&self) {
        self.manager.unload_all().await;
    }
}
