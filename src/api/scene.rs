//! Scene facade: entities and component lookup
//!
//! Entities are thin, reconstructable views over an entity handle; they own
//! nothing and are never validated locally. The sentinel handle (`0`) never
//! becomes an `Entity`: every wrapping point goes through
//! `Entity::from_raw`, which maps it to `None`.

use crate::api::components::{Rigidbody2DComponent, TagComponent, TransformComponent};
use crate::handle::{ComponentKind, EntityId, ScriptInstanceRef};
use crate::interop::NativeCalls;

/// A live object in the native scene graph
///
/// Wraps a non-sentinel entity handle. Copyable and meaningless on its own:
/// all state lives natively and is reached through the facades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    id: EntityId,
}

impl Entity {
    /// Wrap a raw handle, mapping the sentinel to `None`
    ///
    /// This is the only way an `Entity` comes into existence, so a
    /// zero-valued `Entity` cannot be constructed.
    pub fn from_raw(id: EntityId) -> Option<Entity> {
        if id.is_none() { None } else { Some(Entity { id }) }
    }

    /// The underlying handle
    pub fn id(self) -> EntityId {
        self.id
    }
}

/// Facade over entity lookup and component access
///
/// Thin pass-through: every operation issues exactly one boundary call, with
/// no caching and no local validity checks.
pub struct SceneApi<'a> {
    calls: &'a dyn NativeCalls,
}

impl<'a> SceneApi<'a> {
    pub fn new(calls: &'a dyn NativeCalls) -> Self {
        Self { calls }
    }

    /// Look up a live entity by name
    ///
    /// Returns `None` when no entity carries the name (the native layer
    /// reports the sentinel handle).
    pub fn find_entity_by_name(&self, name: &str) -> Option<Entity> {
        Entity::from_raw(self.calls.entity_find_by_name(name))
    }

    /// Whether the entity currently has a component of the given kind
    pub fn has_component(&self, entity: Entity, kind: ComponentKind) -> bool {
        self.calls.entity_has_component(entity.id(), kind)
    }

    /// Opaque reference to the script object bound to the entity
    pub fn script_instance(&self, entity: Entity) -> ScriptInstanceRef {
        self.calls.entity_get_script_instance(entity.id())
    }

    /// Tag component view bound to the entity
    pub fn tag(&self, entity: Entity) -> TagComponent<'a> {
        TagComponent::new(self.calls, entity)
    }

    /// Transform component view bound to the entity
    pub fn transform(&self, entity: Entity) -> TransformComponent<'a> {
        TransformComponent::new(self.calls, entity)
    }

    /// Rigidbody2D component view bound to the entity
    pub fn rigidbody_2d(&self, entity: Entity) -> Rigidbody2DComponent<'a> {
        Rigidbody2DComponent::new(self.calls, entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::HeadlessEngine;

    #[test]
    fn test_sentinel_never_becomes_entity() {
        assert!(Entity::from_raw(EntityId::NONE).is_none());
        assert_eq!(
            Entity::from_raw(EntityId(7)).map(Entity::id),
            Some(EntityId(7))
        );
    }

    #[test]
    fn test_find_entity_by_name_absent_is_none() {
        let engine = HeadlessEngine::new().with_entity("Player", EntityId(7));
        let scene = SceneApi::new(&engine);

        assert!(scene.find_entity_by_name("Ghost").is_none());
        let player = scene.find_entity_by_name("Player").unwrap();
        assert_eq!(player.id(), EntityId(7));
    }

    #[test]
    fn test_has_component() {
        let engine = HeadlessEngine::new()
            .with_entity("Crate", EntityId(3))
            .with_component(EntityId(3), ComponentKind::Rigidbody2D);
        let scene = SceneApi::new(&engine);
        let entity = scene.find_entity_by_name("Crate").unwrap();

        assert!(scene.has_component(entity, ComponentKind::Tag));
        assert!(scene.has_component(entity, ComponentKind::Transform));
        assert!(scene.has_component(entity, ComponentKind::Rigidbody2D));
    }

    #[test]
    fn test_script_instance_is_forwarded() {
        let engine = HeadlessEngine::new().with_entity("Player", EntityId(7));
        let scene = SceneApi::new(&engine);
        let entity = scene.find_entity_by_name("Player").unwrap();

        assert_eq!(scene.script_instance(entity), ScriptInstanceRef(7));
    }
}
