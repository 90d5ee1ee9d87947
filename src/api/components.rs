//! Typed component views
//!
//! Each component binds a boundary call to its owning entity: the entity
//! handle is the implicit first argument of every access, each property
//! getter or setter issues exactly one boundary call, and nothing is cached
//! locally. No component checks handle validity; an unbound or stale entity
//! produces native-defined behavior.

use glam::{Vec2, Vec3};

use crate::api::scene::Entity;
use crate::interop::NativeCalls;

/// View over an entity's tag (its scene-graph display name)
pub struct TagComponent<'a> {
    calls: &'a dyn NativeCalls,
    entity: Entity,
}

impl<'a> TagComponent<'a> {
    pub(crate) fn new(calls: &'a dyn NativeCalls, entity: Entity) -> Self {
        Self { calls, entity }
    }

    /// Fetch the tag from the native layer
    pub fn tag(&self) -> String {
        let mut tag = String::new();
        self.calls.tag_get(self.entity.id(), &mut tag);
        tag
    }

    /// Push a new tag to the native layer
    pub fn set_tag(&self, tag: &str) {
        self.calls.tag_set(self.entity.id(), tag);
    }
}

/// View over an entity's world transform
pub struct TransformComponent<'a> {
    calls: &'a dyn NativeCalls,
    entity: Entity,
}

impl<'a> TransformComponent<'a> {
    pub(crate) fn new(calls: &'a dyn NativeCalls, entity: Entity) -> Self {
        Self { calls, entity }
    }

    /// Fetch the translation from the native layer
    pub fn translation(&self) -> Vec3 {
        let mut translation = Vec3::ZERO;
        self.calls
            .transform_get_translation(self.entity.id(), &mut translation);
        translation
    }

    /// Push a new translation to the native layer
    pub fn set_translation(&self, translation: Vec3) {
        self.calls
            .transform_set_translation(self.entity.id(), &translation);
    }
}

/// View over an entity's 2D rigid body
pub struct Rigidbody2DComponent<'a> {
    calls: &'a dyn NativeCalls,
    entity: Entity,
}

impl<'a> Rigidbody2DComponent<'a> {
    pub(crate) fn new(calls: &'a dyn NativeCalls, entity: Entity) -> Self {
        Self { calls, entity }
    }

    /// Apply a linear impulse at a world position
    pub fn apply_linear_impulse(&self, impulse: Vec2, world_position: Vec2, wake: bool) {
        self.calls.rigidbody2d_apply_linear_impulse(
            self.entity.id(),
            &impulse,
            &world_position,
            wake,
        );
    }

    /// Apply a linear impulse to the body's center of mass
    pub fn apply_linear_impulse_to_center(&self, impulse: Vec2, wake: bool) {
        self.calls
            .rigidbody2d_apply_linear_impulse_to_center(self.entity.id(), &impulse, wake);
    }
}
