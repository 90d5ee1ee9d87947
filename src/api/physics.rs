//! Physics facade
//!
//! Raycasts in two forms: origin + direction + distance, and start/end
//! points. The facade's only job beyond forwarding is rewrapping the raw
//! entity id that accompanies the hit record: a miss always yields an absent
//! entity, whatever raw handle the native layer left in the out-parameter.

use glam::Vec3;

use crate::api::scene::Entity;
use crate::descriptor::{NodeDescriptor, NodeRegistry, ParamDescriptor};
use crate::error::Result;
use crate::handle::EntityId;
use crate::interop::{NativeCalls, RawRaycastHit};

/// Result of a raycast
///
/// Produced once per call and not mutated afterwards. On a miss
/// (`hit == false`) the entity is `None` and distance/position/normal carry
/// native-defined values that must not be interpreted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    pub hit: bool,
    pub entity: Option<Entity>,
    pub distance: f32,
    pub position: Vec3,
    pub normal: Vec3,
}

/// Facade over native physics queries
pub struct PhysicsApi<'a> {
    calls: &'a dyn NativeCalls,
}

impl<'a> PhysicsApi<'a> {
    pub fn new(calls: &'a dyn NativeCalls) -> Self {
        Self { calls }
    }

    /// Cast a ray from an origin along a direction, up to a distance
    pub fn raycast(&self, origin: Vec3, direction: Vec3, distance: f32) -> RaycastHit {
        let mut entity = EntityId::NONE;
        let mut raw = RawRaycastHit::default();
        self.calls
            .physics_raycast(&origin, &direction, distance, &mut entity, &mut raw);
        Self::wrap(entity, raw)
    }

    /// Cast a ray between two points
    pub fn raycast_points(&self, start: Vec3, end: Vec3) -> RaycastHit {
        let mut entity = EntityId::NONE;
        let mut raw = RawRaycastHit::default();
        self.calls
            .physics_raycast_points(&start, &end, &mut entity, &mut raw);
        Self::wrap(entity, raw)
    }

    fn wrap(entity: EntityId, raw: RawRaycastHit) -> RaycastHit {
        // A miss never carries an entity, whatever the raw id says
        let entity = if raw.hit { Entity::from_raw(entity) } else { None };
        RaycastHit {
            hit: raw.hit,
            entity,
            distance: raw.distance,
            position: raw.position,
            normal: raw.normal,
        }
    }
}

/// Publish the physics surface to the editor reflector
pub(crate) fn register_nodes(registry: &mut NodeRegistry) -> Result<()> {
    registry.register(
        NodeDescriptor::new("physics.raycast")
            .with_display_name("Raycast")
            .with_category("Physics")
            .with_keywords("ray trace hit collision")
            .with_param(ParamDescriptor::new("origin").with_display_name("Origin"))
            .with_param(ParamDescriptor::new("direction").with_display_name("Direction"))
            .with_param(ParamDescriptor::new("distance").with_display_name("Distance")),
    )?;
    registry.register(
        NodeDescriptor::new("physics.raycast_points")
            .with_display_name("Raycast")
            .with_category("Physics")
            .with_keywords("ray trace hit collision segment")
            .with_param(ParamDescriptor::new("start").with_display_name("Start"))
            .with_param(ParamDescriptor::new("end").with_display_name("End")),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::HeadlessEngine;

    #[test]
    fn test_raycast_hit_wraps_entity() {
        let engine = HeadlessEngine::new().with_raycast_result(
            EntityId(9),
            RawRaycastHit {
                hit: true,
                distance: 4.5,
                position: Vec3::new(0.0, 0.0, -4.5),
                normal: Vec3::Z,
            },
        );
        let physics = PhysicsApi::new(&engine);

        let hit = physics.raycast(Vec3::ZERO, Vec3::NEG_Z, 10.0);
        assert!(hit.hit);
        assert_eq!(hit.entity.map(Entity::id), Some(EntityId(9)));
        assert_eq!(hit.distance, 4.5);
        assert_eq!(hit.normal, Vec3::Z);
    }

    #[test]
    fn test_raycast_miss_yields_no_entity() {
        let engine = HeadlessEngine::new();
        let physics = PhysicsApi::new(&engine);

        let hit = physics.raycast(Vec3::ZERO, Vec3::NEG_Z, 10.0);
        assert!(!hit.hit);
        assert!(hit.entity.is_none());
    }

    #[test]
    fn test_miss_with_stray_raw_entity_still_absent() {
        // The native layer may leave garbage in the entity out-parameter on a
        // miss; the facade must not surface it.
        let engine = HeadlessEngine::new().with_raycast_result(
            EntityId(42),
            RawRaycastHit {
                hit: false,
                ..RawRaycastHit::default()
            },
        );
        let physics = PhysicsApi::new(&engine);

        let hit = physics.raycast_points(Vec3::ZERO, Vec3::X);
        assert!(!hit.hit);
        assert!(hit.entity.is_none());
    }

    #[test]
    fn test_both_forms_are_registered() {
        let mut registry = NodeRegistry::new();
        register_nodes(&mut registry).unwrap();
        assert!(registry.contains("physics.raycast"));
        assert!(registry.contains("physics.raycast_points"));
    }
}
