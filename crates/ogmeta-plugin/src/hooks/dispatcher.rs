//! Hook dispatcher: fires hooks and aggregates results.
//!
//! Handlers are called in priority order. A handler returning `Halt`
//! stops the chain for that hook point; the page itself still renders.
//! A handler exceeding the timeout is treated as having continued with
//! no output.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info};

use super::definitions::{HookAction, HookPayload, HookResult};
use super::registry::HookRegistry;

/// Default per-handler time budget.
const DEFAULT_HANDLER_TIMEOUT: Duration = Duration::from_secs(5);

/// Aggregated result of dispatching a hook to all handlers.
#[derive(Debug, Clone, Default)]
pub struct DispatchResult {
    /// Whether execution was halted.
    pub halted: bool,
    /// Halt reason (if halted).
    pub halt_reason: Option<String>,
    /// Plugin that halted (if halted).
    pub halted_by: Option<String>,
    /// All individual handler results, in execution order.
    pub results: Vec<HookResult>,
}

impl DispatchResult {
    /// Concatenated header fragments in execution order.
    ///
    /// The host appends this to its page header buffer.
    pub fn header_include(&self) -> String {
        self.results
            .iter()
            .filter_map(HookResult::header_fragment)
            .collect()
    }
}

/// Dispatches hooks to all registered handlers.
#[derive(Debug)]
pub struct HookDispatcher {
    /// Hook registry.
    registry: Arc<HookRegistry>,
    /// Time budget for a single handler.
    handler_timeout: Duration,
}

impl HookDispatcher {
    /// Creates a new hook dispatcher.
    pub fn new(registry: Arc<HookRegistry>) -> Self {
        Self {
            registry,
            handler_timeout: DEFAULT_HANDLER_TIMEOUT,
        }
    }

    /// Overrides the per-handler time budget.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.handler_timeout = timeout;
        self
    }

    /// Dispatches a hook to all registered handlers.
    pub async fn dispatch(&self, payload: &HookPayload) -> DispatchResult {
        let handlers = self.registry.get_handlers(&payload.hook).await;

        if handlers.is_empty() {
            return DispatchResult::default();
        }

        debug!(
            hook = %payload.hook,
            handler_count = handlers.len(),
            "Dispatching hook"
        );

        let mut dispatch = DispatchResult::default();

        for handler in &handlers {
            let result =
                match tokio::time::timeout(self.handler_timeout, handler.handle(payload)).await {
                    Ok(r) => r,
                    Err(_) => {
                        error!(
                            hook = %payload.hook,
                            plugin_id = %handler.plugin_id(),
                            timeout_ms = self.handler_timeout.as_millis() as u64,
                            "Hook handler timed out"
                        );
                        HookResult::continue_execution(handler.plugin_id())
                    }
                };

            match &result.action {
                HookAction::Continue => {
                    debug!(
                        hook = %payload.hook,
                        plugin_id = %result.plugin_id,
                        has_output = result.output.is_some(),
                        "Handler returned Continue"
                    );
                    dispatch.results.push(result);
                }
                HookAction::Halt { reason } => {
                    info!(
                        hook = %payload.hook,
                        plugin_id = %result.plugin_id,
                        reason = %reason,
                        "Handler halted hook chain"
                    );
                    dispatch.halted = true;
                    dispatch.halt_reason = Some(reason.clone());
                    dispatch.halted_by = Some(result.plugin_id.clone());
                    dispatch.results.push(result);
                    break;
                }
            }
        }

        dispatch
    }

    /// Returns a reference to the hook registry.
    pub fn registry(&self) -> &Arc<HookRegistry> {
        &self.registry
    }
}
