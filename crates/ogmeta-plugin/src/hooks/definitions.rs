//! Hook point definitions with typed payloads.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use ogmeta_core::error::AppError;

/// Output key under which handlers return text for the page header.
pub const HEADER_INCLUDE_KEY: &str = "headerinclude";

/// Enumeration of the page-render hook points.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookPoint {
    /// Fired at the end of global page setup, on every page.
    GlobalEnd,
    /// Fired when a forum listing has been built.
    ForumDisplayEnd,
    /// Fired when a thread is shown in threaded view.
    ShowThreadThreaded,
    /// Fired when a thread is shown in linear view.
    ShowThreadLinear,
    /// Fired when a member profile has been built.
    MemberProfileEnd,
}

impl HookPoint {
    /// Every hook point, in host firing order for a page.
    pub const ALL: [HookPoint; 5] = [
        Self::GlobalEnd,
        Self::ForumDisplayEnd,
        Self::ShowThreadThreaded,
        Self::ShowThreadLinear,
        Self::MemberProfileEnd,
    ];

    /// Returns the string name of this hook point.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GlobalEnd => "global_end",
            Self::ForumDisplayEnd => "forumdisplay_end",
            Self::ShowThreadThreaded => "showthread_threaded",
            Self::ShowThreadLinear => "showthread_linear",
            Self::MemberProfileEnd => "member_profile_end",
        }
    }
}

impl std::fmt::Display for HookPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payload passed to hook handlers, a flexible key-value map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookPayload {
    /// The hook point being fired.
    pub hook: HookPoint,
    /// Arbitrary data keyed by string.
    pub data: HashMap<String, serde_json::Value>,
}

impl HookPayload {
    /// Creates a new hook payload.
    pub fn new(hook: HookPoint) -> Self {
        Self {
            hook,
            data: HashMap::new(),
        }
    }

    /// Inserts a raw data value.
    pub fn with_data(mut self, key: &str, value: serde_json::Value) -> Self {
        self.data.insert(key.to_string(), value);
        self
    }

    /// Inserts a string value.
    pub fn with_string(self, key: &str, value: &str) -> Self {
        self.with_data(key, serde_json::json!(value))
    }

    /// Serializes `value` and inserts it.
    pub fn with_typed<T: Serialize>(self, key: &str, value: &T) -> Result<Self, AppError> {
        let value = serde_json::to_value(value)?;
        Ok(self.with_data(key, value))
    }

    /// Deserializes the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent.
    pub fn get_typed<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, AppError> {
        match self.data.get(key) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }
}

/// Action returned by a hook handler telling the dispatcher what to do next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HookAction {
    /// Continue to the next handler.
    Continue,
    /// Halt execution. No further handlers run for this hook point.
    Halt {
        /// Reason for halting.
        reason: String,
    },
}

/// Result returned from a hook handler invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookResult {
    /// The action the handler wants the dispatcher to take.
    pub action: HookAction,
    /// Optional output data from the handler.
    pub output: Option<serde_json::Value>,
    /// Plugin ID that produced this result.
    pub plugin_id: String,
}

impl HookResult {
    /// Creates a continue result.
    pub fn continue_execution(plugin_id: &str) -> Self {
        Self {
            action: HookAction::Continue,
            output: None,
            plugin_id: plugin_id.to_string(),
        }
    }

    /// Creates a halt result.
    pub fn halt(plugin_id: &str, reason: &str) -> Self {
        Self {
            action: HookAction::Halt {
                reason: reason.to_string(),
            },
            output: None,
            plugin_id: plugin_id.to_string(),
        }
    }

    /// Creates a continue result with output data.
    pub fn continue_with_output(plugin_id: &str, output: serde_json::Value) -> Self {
        Self {
            action: HookAction::Continue,
            output: Some(output),
            plugin_id: plugin_id.to_string(),
        }
    }

    /// Creates a continue result carrying text for the page header.
    pub fn with_header(plugin_id: &str, fragment: String) -> Self {
        let mut output = serde_json::Map::new();
        output.insert(
            HEADER_INCLUDE_KEY.to_string(),
            serde_json::Value::String(fragment),
        );
        Self::continue_with_output(plugin_id, serde_json::Value::Object(output))
    }

    /// The header text carried by this result, if any.
    pub fn header_fragment(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|o| o.get(HEADER_INCLUDE_KEY))
            .and_then(|v| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        page: u32,
    }

    #[test]
    fn test_typed_roundtrip_through_payload() {
        let sample = Sample {
            name: "General".to_string(),
            page: 2,
        };
        let payload = HookPayload::new(HookPoint::ForumDisplayEnd)
            .with_typed("request", &sample)
            .expect("serialize");

        let back: Option<Sample> = payload.get_typed("request").expect("deserialize");
        assert_eq!(back, Some(sample));
        let missing: Option<Sample> = payload.get_typed("other").expect("absent is ok");
        assert!(missing.is_none());
    }

    #[test]
    fn test_get_typed_reports_shape_errors() {
        let payload = HookPayload::new(HookPoint::GlobalEnd).with_string("request", "oops");
        assert!(payload.get_typed::<Sample>("request").is_err());
    }

    #[test]
    fn test_payload_serializes_hook_and_data_only() {
        let payload = HookPayload::new(HookPoint::GlobalEnd).with_string("request", "x");
        let json = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"hook": "global_end", "data": {"request": "x"}})
        );
    }

    #[test]
    fn test_header_fragment() {
        let result = HookResult::with_header("og", "<meta />".to_string());
        assert_eq!(result.header_fragment(), Some("<meta />"));
        assert_eq!(HookResult::continue_execution("og").header_fragment(), None);
    }

    #[test]
    fn test_hook_names() {
        let names: Vec<&str> = HookPoint::ALL.iter().map(|h| h.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "global_end",
                "forumdisplay_end",
                "showthread_threaded",
                "showthread_linear",
                "member_profile_end"
            ]
        );
    }
}
