//! Facade modules
//!
//! One facade per engine domain, each a thin pass-through over the
//! `NativeCalls` boundary. The facades also publish their editor-callable
//! methods to the node registry; `editor_registry` aggregates every module's
//! contribution. Animation and the component property accessors register
//! nothing; they stay invocable but invisible to the reflector.

pub mod animation;
pub mod components;
pub mod core;
pub mod debug_draw;
pub mod input;
pub mod log;
pub mod physics;
pub mod scene;

pub use animation::{AnimationApi, Pose};
pub use components::{Rigidbody2DComponent, TagComponent, TransformComponent};
pub use self::core::CoreApi;
pub use debug_draw::DebugDrawApi;
pub use input::InputApi;
pub use log::LogApi;
pub use physics::{PhysicsApi, RaycastHit};
pub use scene::{Entity, SceneApi};

use crate::descriptor::NodeRegistry;
use crate::error::Result;

/// Build the registry of every method published to the editor reflector
pub fn editor_registry() -> Result<NodeRegistry> {
    let mut registry = NodeRegistry::new();
    input::register_nodes(&mut registry)?;
    physics::register_nodes(&mut registry)?;
    debug_draw::register_nodes(&mut registry)?;
    log::register_nodes(&mut registry)?;
    self::core::register_nodes(&mut registry)?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_registry_builds() {
        let registry = editor_registry().unwrap();
        // 12 input + 2 physics + 4 debug + 5 log + 1 core
        assert_eq!(registry.len(), 24);
    }

    #[test]
    fn test_animation_is_not_reflected() {
        let registry = editor_registry().unwrap();
        assert!(!registry.iter().any(|n| n.method.starts_with("animation.")));
    }

    #[test]
    fn test_component_accessors_are_not_reflected() {
        let registry = editor_registry().unwrap();
        assert!(!registry.iter().any(|n| n.method.starts_with("tag.")));
        assert!(!registry.iter().any(|n| n.method.starts_with("transform.")));
        assert!(!registry.iter().any(|n| n.method.starts_with("rigidbody")));
    }

    #[test]
    fn test_palette_export() {
        let registry = editor_registry().unwrap();
        let json = registry.to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), registry.len());
    }
}
