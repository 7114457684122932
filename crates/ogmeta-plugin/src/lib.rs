//! # ogmeta-plugin
//!
//! Plugin framework for the forum host's page-render extension points.
//! Provides:
//!
//! - Plugin lifecycle management (load, start, stop, unload)
//! - Hook registry with priority-ordered registration
//! - Hook dispatcher with Continue/Halt semantics
//! - Collection of header fragments produced by handlers

pub mod hooks;
pub mod manager;
pub mod registry;

pub use hooks::definitions::{HookAction, HookPayload, HookPoint, HookResult};
pub use hooks::dispatcher::{DispatchResult, HookDispatcher};
pub use hooks::registry::{HookHandler, HookRegistry};
pub use manager::PluginManager;
pub use registry::{Plugin, PluginInfo, PluginRegistry};
