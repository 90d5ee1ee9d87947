//! Node descriptor schema and registry
//!
//! Declarative metadata describing how each callable is presented to the
//! external visual-scripting reflector: display names, pin labels, palette
//! category, search keywords, purity and display-shape hints, and default
//! values for omitted arguments.
//!
//! # Architecture
//!
//! - **NodeDescriptor / ParamDescriptor**: per-method and per-parameter
//!   records, built once at startup through builders
//! - **NodeRegistry**: insertion-ordered mapping from method identifier to
//!   descriptor, serialized to JSON for the reflector
//!
//! This is pure metadata: registering (or not registering) a descriptor has
//! zero effect on the call path. Presence in the registry is the
//! "callable-from-editor" marker: a method without a descriptor stays fully
//! invocable but is invisible to the reflector.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use glam::{Vec2, Vec3};

use crate::error::{Result, SurfaceError};

/// Default value a reflector supplies for an omitted optional argument
///
/// An omitted optional argument means "the declared default", never "an
/// absent pin".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum DefaultValue {
    Bool(bool),
    Int(i64),
    Float(f32),
    Str(String),
    Vec2(Vec2),
    Vec3(Vec3),
}

/// Metadata for one input or output pin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamDescriptor {
    /// Stable internal identifier of the parameter
    pub name: String,
    /// Label shown on the pin instead of the internal identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Hint to the renderer to omit this pin's textual label
    #[serde(default)]
    pub no_pin_label: bool,
    /// Declared default, usable when the caller supplies a shorter argument list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
}

impl ParamDescriptor {
    /// Create a parameter descriptor with the given internal identifier
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            no_pin_label: false,
            default: None,
        }
    }

    /// Set the display name shown on the pin
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Suppress this pin's textual label
    pub fn without_pin_label(mut self) -> Self {
        self.no_pin_label = true;
        self
    }

    /// Declare the default supplied when the argument is omitted
    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }
}

/// Metadata for one editor-callable method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    /// Stable method identifier, e.g. `"input.is_key_down"`
    pub method: String,
    /// Name shown in the editor instead of the method identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Palette section the node is grouped under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Free-text search tokens for the palette
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    /// Declares the call has no observable side effect (declared only, never
    /// enforced or exploited by this layer)
    #[serde(default)]
    pub pure: bool,
    /// Marks the call as an implicit type-conversion candidate
    #[serde(default)]
    pub conversion: bool,
    /// Hint to render the node in a condensed visual form
    #[serde(default)]
    pub compact: bool,
    /// Hint to omit textual labels on all pins
    #[serde(default)]
    pub no_pin_labels: bool,
    /// Parameter metadata, in declaration order
    #[serde(default)]
    pub params: Vec<ParamDescriptor>,
}

impl NodeDescriptor {
    /// Create a descriptor for the given method identifier
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            display_name: None,
            category: None,
            keywords: None,
            pure: false,
            conversion: false,
            compact: false,
            no_pin_labels: false,
            params: Vec::new(),
        }
    }

    /// Set the name shown in the editor
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Set the palette category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the free-text search keywords
    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    /// Declare the call side-effect free
    pub fn pure(mut self) -> Self {
        self.pure = true;
        self
    }

    /// Mark the call as a conversion candidate
    pub fn conversion(mut self) -> Self {
        self.conversion = true;
        self
    }

    /// Request the condensed visual form
    pub fn compact(mut self) -> Self {
        self.compact = true;
        self
    }

    /// Suppress textual labels on all pins
    pub fn without_pin_labels(mut self) -> Self {
        self.no_pin_labels = true;
        self
    }

    /// Append a parameter descriptor
    pub fn with_param(mut self, param: ParamDescriptor) -> Self {
        self.params.push(param);
        self
    }

    /// Look up a parameter by its internal identifier
    pub fn param(&self, name: &str) -> Option<&ParamDescriptor> {
        self.params.iter().find(|p| p.name == name)
    }
}

/// Registry of every method published to the external reflector
///
/// Built once at startup by the facade modules (see `api::editor_registry`).
/// Registration order is preserved so the exported palette is stable.
#[derive(Debug, Default)]
pub struct NodeRegistry {
    /// Descriptors in registration order
    nodes: Vec<NodeDescriptor>,
    /// Map of method identifier to position in `nodes`
    index: HashMap<String, usize>,
}

impl NodeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor
    ///
    /// # Errors
    /// Returns `SurfaceError::DuplicateNode` if the method identifier is
    /// already registered.
    pub fn register(&mut self, descriptor: NodeDescriptor) -> Result<()> {
        if self.index.contains_key(&descriptor.method) {
            return Err(SurfaceError::DuplicateNode(descriptor.method));
        }
        self.index
            .insert(descriptor.method.clone(), self.nodes.len());
        self.nodes.push(descriptor);
        Ok(())
    }

    /// Get a descriptor by method identifier
    pub fn get(&self, method: &str) -> Option<&NodeDescriptor> {
        self.index.get(method).map(|&i| &self.nodes[i])
    }

    /// Whether the method is published to the reflector
    pub fn contains(&self, method: &str) -> bool {
        self.index.contains_key(method)
    }

    /// Iterate descriptors in registration order
    pub fn iter(&self) -> impl Iterator<Item = &NodeDescriptor> {
        self.nodes.iter()
    }

    /// Number of registered nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Serialize the palette for the external reflector
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.nodes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_node() -> NodeDescriptor {
        NodeDescriptor::new("debug.draw_line")
            .with_display_name("Draw Debug Line")
            .with_category("Debug")
            .with_keywords("line gizmo draw")
            .with_param(ParamDescriptor::new("start").with_display_name("Start"))
            .with_param(ParamDescriptor::new("end").with_display_name("End"))
            .with_param(
                ParamDescriptor::new("duration")
                    .with_display_name("Duration")
                    .with_default(DefaultValue::Float(0.0)),
            )
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = NodeRegistry::new();
        registry.register(sample_node()).unwrap();

        assert!(registry.contains("debug.draw_line"));
        let node = registry.get("debug.draw_line").unwrap();
        assert_eq!(node.display_name.as_deref(), Some("Draw Debug Line"));
        assert_eq!(
            node.param("duration").unwrap().default,
            Some(DefaultValue::Float(0.0))
        );
        assert!(registry.get("debug.draw_circle").is_none());
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = NodeRegistry::new();
        registry.register(sample_node()).unwrap();
        let err = registry.register(sample_node()).unwrap_err();
        assert!(matches!(err, SurfaceError::DuplicateNode(m) if m == "debug.draw_line"));
    }

    #[test]
    fn test_registration_order_preserved() {
        let mut registry = NodeRegistry::new();
        registry.register(NodeDescriptor::new("b.second")).unwrap();
        registry.register(NodeDescriptor::new("a.first")).unwrap();

        let methods: Vec<&str> = registry.iter().map(|n| n.method.as_str()).collect();
        assert_eq!(methods, vec!["b.second", "a.first"]);
    }

    #[test]
    fn test_palette_serialization_round_trip() {
        let mut registry = NodeRegistry::new();
        registry.register(sample_node()).unwrap();

        let json = registry.to_json().unwrap();
        let parsed: Vec<NodeDescriptor> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0], sample_node());
    }

    #[test]
    fn test_default_value_serialization() {
        let json = serde_json::to_string(&DefaultValue::Vec3(glam::Vec3::new(1.0, 2.0, 3.0)))
            .unwrap();
        let parsed: DefaultValue = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, DefaultValue::Vec3(glam::Vec3::new(1.0, 2.0, 3.0)));
    }
}
