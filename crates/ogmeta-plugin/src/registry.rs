//! Plugin registry: stores loaded plugin instances and metadata.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use ogmeta_core::error::AppError;
use ogmeta_core::result::AppResult;

use crate::hooks::definitions::HookPoint;

/// Metadata about a loaded plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Unique plugin identifier.
    pub id: String,
    /// Human-readable plugin name.
    pub name: String,
    /// Plugin version string.
    pub version: String,
    /// Plugin description.
    pub description: String,
    /// Author or maintainer.
    pub author: String,
    /// Hook points this plugin registers for.
    pub hooks: Vec<HookPoint>,
    /// Whether the plugin is currently enabled.
    pub enabled: bool,
    /// Load priority (lower = listed first).
    pub priority: i32,
}

/// Trait that all plugins must implement.
#[async_trait::async_trait]
pub trait Plugin: Send + Sync + std::fmt::Debug {
    /// Returns plugin metadata.
    fn info(&self) -> PluginInfo;

    /// Called once when the plugin is loaded. An error aborts the load.
    async fn on_load(&self) -> AppResult<()>;

    /// Called after the plugin's hooks are registered.
    async fn on_start(&self) -> AppResult<()>;

    /// Called before the plugin's hooks are removed.
    async fn on_stop(&self) -> AppResult<()>;

    /// Called when the plugin is unloaded.
    async fn on_unload(&self) -> AppResult<()>;

    /// Returns the hook points this plugin wants to register for.
    fn registered_hooks(&self) -> Vec<HookPoint>;
}

/// Registry of all loaded plugins.
#[derive(Debug)]
pub struct PluginRegistry {
    /// Plugin ID → plugin instance.
    plugins: RwLock<HashMap<String, Arc<dyn Plugin>>>,
    /// Plugin ID → metadata.
    metadata: RwLock<HashMap<String, PluginInfo>>,
}

impl PluginRegistry {
    /// Creates a new empty plugin registry.
    pub fn new() -> Self {
        Self {
            plugins: RwLock::new(HashMap::new()),
            metadata: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a plugin.
    pub async fn register(&self, plugin: Arc<dyn Plugin>) -> AppResult<()> {
        let info = plugin.info();
        let id = info.id.clone();

        let mut plugins = self.plugins.write().await;
        let mut metadata = self.metadata.write().await;

        if plugins.contains_key(&id) {
            return Err(AppError::plugin(format!(
                "Plugin '{}' is already registered",
                id
            )));
        }

        info!(plugin_id = %id, name = %info.name, version = %info.version, "Registering plugin");

        plugins.insert(id.clone(), plugin);
        metadata.insert(id, info);

        Ok(())
    }

    /// Unregisters a plugin by ID.
    pub async fn unregister(&self, plugin_id: &str) -> AppResult<Arc<dyn Plugin>> {
        let mut plugins = self.plugins.write().await;
        let mut metadata = self.metadata.write().await;

        let plugin = plugins
            .remove(plugin_id)
            .ok_or_else(|| AppError::not_found(format!("Plugin '{}' not found", plugin_id)))?;

        metadata.remove(plugin_id);

        info!(plugin_id = %plugin_id, "Plugin unregistered");

        Ok(plugin)
    }

    /// Gets a plugin by ID.
    pub async fn get(&self, plugin_id: &str) -> Option<Arc<dyn Plugin>> {
        let plugins = self.plugins.read().await;
        plugins.get(plugin_id).cloned()
    }

    /// Lists all registered plugin metadata, by priority then id.
    pub async fn list(&self) -> Vec<PluginInfo> {
        let metadata = self.metadata.read().await;
        let mut infos: Vec<PluginInfo> = metadata.values().cloned().collect();
        infos.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.id.cmp(&b.id)));
        infos
    }

    /// Checks whether a plugin is registered.
    pub async fn contains(&self, plugin_id: &str) -> bool {
        let plugins = self.plugins.read().await;
        plugins.contains_key(plugin_id)
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Debug)]
    struct Named {
        id: &'static str,
        priority: i32,
    }

    #[async_trait]
    impl Plugin for Named {
        fn info(&self) -> PluginInfo {
            PluginInfo {
                id: self.id.to_string(),
                name: self.id.to_string(),
                version: "1.0.0".to_string(),
                description: String::new(),
                author: String::new(),
                hooks: Vec::new(),
                enabled: true,
                priority: self.priority,
            }
        }

        async fn on_load(&self) -> AppResult<()> {
            Ok(())
        }

        async fn on_start(&self) -> AppResult<()> {
            Ok(())
        }

        async fn on_stop(&self) -> AppResult<()> {
            Ok(())
        }

        async fn on_unload(&self) -> AppResult<()> {
            Ok(())
        }

        fn registered_hooks(&self) -> Vec<HookPoint> {
            Vec::new()
        }
    }

    #[tokio::test]
    async fn test_list_orders_by_priority_then_id() {
        let registry = PluginRegistry::new();
        for (id, priority) in [("zeta", 10), ("beta", 50), ("alpha", 50)] {
            registry
                .register(Arc::new(Named { id, priority }))
                .await
                .expect("register");
        }
        let ids: Vec<String> = registry.list().await.into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["zeta", "alpha", "beta"]);
    }

    #[tokio::test]
    async fn test_unregister_unknown_is_not_found() {
        let registry = PluginRegistry::new();
        registry
            .register(Arc::new(Named { id: "one", priority: 1 }))
            .await
            .expect("register");
        assert!(registry.contains("one").await);

        registry.unregister("one").await.expect("unregister");
        assert!(!registry.contains("one").await);
        let err = registry.unregister("one").await.expect_err("gone");
        assert_eq!(err.kind, ogmeta_core::error::ErrorKind::NotFound);
    }
}
