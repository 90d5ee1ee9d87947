//! Log facade
//!
//! Forwards script messages to the engine's log sinks. Fire-and-forget:
//! nothing is returned and nothing can fail from this side.

use crate::descriptor::{NodeDescriptor, NodeRegistry, ParamDescriptor};
use crate::error::Result;
use crate::interop::NativeCalls;

/// Facade over the engine logger
pub struct LogApi<'a> {
    calls: &'a dyn NativeCalls,
}

impl<'a> LogApi<'a> {
    pub fn new(calls: &'a dyn NativeCalls) -> Self {
        Self { calls }
    }

    pub fn trace(&self, message: &str) {
        self.calls.log_trace(message);
    }

    pub fn info(&self, message: &str) {
        self.calls.log_info(message);
    }

    pub fn warn(&self, message: &str) {
        self.calls.log_warn(message);
    }

    pub fn error(&self, message: &str) {
        self.calls.log_error(message);
    }

    pub fn critical(&self, message: &str) {
        self.calls.log_critical(message);
    }
}

/// Publish the log surface to the editor reflector
pub(crate) fn register_nodes(registry: &mut NodeRegistry) -> Result<()> {
    for (method, display) in [
        ("log.trace", "Log Trace"),
        ("log.info", "Log Info"),
        ("log.warn", "Log Warn"),
        ("log.error", "Log Error"),
        ("log.critical", "Log Critical"),
    ] {
        registry.register(
            NodeDescriptor::new(method)
                .with_display_name(display)
                .with_category("Log")
                .with_keywords("print console output")
                .with_param(ParamDescriptor::new("message").with_display_name("Message")),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{HeadlessEngine, LogLevel, RecordedCall};

    #[test]
    fn test_each_level_forwards_exactly_once() {
        let engine = HeadlessEngine::new();
        let log = LogApi::new(&engine);

        log.trace("t");
        log.info("i");
        log.warn("w");
        log.error("e");
        log.critical("c");

        let expected: Vec<RecordedCall> = [
            (LogLevel::Trace, "t"),
            (LogLevel::Info, "i"),
            (LogLevel::Warn, "w"),
            (LogLevel::Error, "e"),
            (LogLevel::Critical, "c"),
        ]
        .into_iter()
        .map(|(level, message)| RecordedCall::Log {
            level,
            message: message.to_string(),
        })
        .collect();
        assert_eq!(engine.recorded_calls(), expected);
    }

    #[test]
    fn test_all_levels_registered() {
        let mut registry = NodeRegistry::new();
        register_nodes(&mut registry).unwrap();
        assert_eq!(registry.len(), 5);
        assert!(registry.contains("log.critical"));
    }
}
