//! Core facade
//!
//! Script-level assertions. The boundary is crossed only when the condition
//! is false; the native assert handler never hears about passing asserts.
//! What happens on failure (abort, break, log) is the native layer's call.

use crate::descriptor::{DefaultValue, NodeDescriptor, NodeRegistry, ParamDescriptor};
use crate::error::Result;
use crate::interop::NativeCalls;

/// Facade over core engine services
pub struct CoreApi<'a> {
    calls: &'a dyn NativeCalls,
}

impl<'a> CoreApi<'a> {
    pub fn new(calls: &'a dyn NativeCalls) -> Self {
        Self { calls }
    }

    /// Invoke the native assert handler if `condition` is false
    pub fn assert(&self, condition: bool, message: &str) {
        if !condition {
            self.calls.core_assert(condition, message);
        }
    }
}

/// Publish the core surface to the editor reflector
pub(crate) fn register_nodes(registry: &mut NodeRegistry) -> Result<()> {
    registry.register(
        NodeDescriptor::new("core.assert")
            .with_display_name("Assert")
            .with_category("Core")
            .with_keywords("check precondition ensure")
            .with_param(ParamDescriptor::new("condition").with_display_name("Condition"))
            .with_param(
                ParamDescriptor::new("message")
                    .with_display_name("Message")
                    .with_default(DefaultValue::Str(String::new())),
            ),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{HeadlessEngine, RecordedCall};

    #[test]
    fn test_failed_assert_reaches_handler_once() {
        let engine = HeadlessEngine::new();
        let core = CoreApi::new(&engine);

        core.assert(false, "x must be positive");

        assert_eq!(
            engine.recorded_calls(),
            vec![RecordedCall::Assert {
                condition: false,
                message: "x must be positive".to_string(),
            }]
        );
    }

    #[test]
    fn test_passing_assert_never_crosses() {
        let engine = HeadlessEngine::new();
        let core = CoreApi::new(&engine);

        core.assert(true, "never reported");

        assert!(engine.recorded_calls().is_empty());
    }

    #[test]
    fn test_message_default_is_empty_string() {
        let mut registry = NodeRegistry::new();
        register_nodes(&mut registry).unwrap();
        assert_eq!(
            registry
                .get("core.assert")
                .unwrap()
                .param("message")
                .unwrap()
                .default,
            Some(DefaultValue::Str(String::new()))
        );
    }
}
