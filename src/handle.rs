//! Opaque handle types shared by every facade
//!
//! Handles are plain 64-bit identifiers referencing native-side state. The
//! managed side never interprets a non-zero value: equality and the sentinel
//! check are the only operations performed here. Lifetime is owned entirely
//! by the native layer: handles are received and forwarded, never freed.

use serde::{Deserialize, Serialize};

/// Identifier of a live object in the native scene graph
///
/// `0` is the reserved "no entity" sentinel. Every other value is assumed
/// valid; the native layer is the sole authority on entity lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl EntityId {
    /// The reserved "absent/invalid" sentinel
    pub const NONE: EntityId = EntityId(0);

    /// Whether this is the sentinel value
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Whether this refers to an entity (non-sentinel)
    pub fn is_some(self) -> bool {
        self.0 != 0
    }

    /// The raw 64-bit value as it crosses the boundary
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Handle to a transient native-side computed pose
///
/// Produced by one animation call and consumed by a later one in the same
/// call chain. There is no release call and no sentinel convention: any value
/// returned by the native layer is valid for immediate consumption by the
/// paired call, and only until the frame's animation evaluation applies the
/// result. Passing a stale or fabricated handle is native-defined behavior;
/// this layer cannot detect it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoseHandle(pub u64);

impl PoseHandle {
    /// The raw 64-bit value as it crosses the boundary
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Opaque reference into the native script-object table
///
/// Returned by the get-script-instance call. Never dereferenced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScriptInstanceRef(pub u64);

/// Component type identifier passed by value across the boundary
///
/// Components are typed views over an entity; the kind code plus the owning
/// entity id is the whole identity of a component (no ownership, no local
/// storage).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum ComponentKind {
    Tag = 0,
    Transform = 1,
    Rigidbody2D = 2,
}

impl ComponentKind {
    /// The integer code as it crosses the boundary
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Get the human-readable name of this component kind
    pub fn name(&self) -> &'static str {
        match self {
            ComponentKind::Tag => "Tag",
            ComponentKind::Transform => "Transform",
            ComponentKind::Rigidbody2D => "Rigidbody2D",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_sentinel() {
        assert!(EntityId::NONE.is_none());
        assert!(!EntityId::NONE.is_some());
        assert!(EntityId(42).is_some());
        assert_eq!(EntityId(42).raw(), 42);
    }

    #[test]
    fn test_component_kind_codes() {
        assert_eq!(ComponentKind::Tag.code(), 0);
        assert_eq!(ComponentKind::Transform.code(), 1);
        assert_eq!(ComponentKind::Rigidbody2D.code(), 2);
    }
}
