//! Native boundary contract
//!
//! One trait method per native entry point. Facades in `api` never talk to
//! the engine any other way, and backends in `adapters` implement this trait
//! (real engine over the C ABI, or the in-memory headless double for tests).
//!
//! # Marshaling
//!
//! The signature shape of every method IS the passing convention:
//!
//! - scalars, code enums and handles travel by value in both directions
//!   (enums as their `#[repr(i32)]` code, handles as `u64` newtypes);
//! - vectors and aggregates travel by reference inbound (`&Vec2`, `&Vec3`)
//!   and through `&mut` out-parameters outbound, never as direct returns, so
//!   the native layer writes into caller-provided storage;
//! - strings travel as `&str` inbound and `&mut String` out-parameters
//!   outbound; the native layer owns the backing storage at the point of the
//!   call and copies into the caller's buffer;
//! - a handle is a direct return only when it is the call's sole output
//!   (find-by-name, pose calls); when it accompanies another output (raycast)
//!   it uses its own out-parameter.
//!
//! Every call is synchronous and blocking; nothing is retried, buffered or
//! cancelled here. A failed native operation is communicated only through the
//! call's own return contract (a `bool`, a sentinel handle, an untouched
//! out-parameter); this layer never raises.

use glam::{Vec2, Vec3};

use crate::codes::{GamepadAxisCode, GamepadButtonCode, GamepadSensorCode, KeyCode, MouseCode};
use crate::handle::{ComponentKind, EntityId, PoseHandle, ScriptInstanceRef};

/// Wire-shaped raycast record filled by the native layer
///
/// The entity id accompanying a raycast travels in its own out-parameter; the
/// Physics facade rewraps it. On a miss (`hit == false`) the remaining fields
/// are native-defined and must not be interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawRaycastHit {
    pub hit: bool,
    pub distance: f32,
    pub position: Vec3,
    pub normal: Vec3,
}

/// Trait that all native backends must implement
///
/// Implementations hold whatever state the engine needs; this layer holds
/// none. No method performs validity checks on incoming handles; a stale or
/// fabricated handle produces native-defined behavior.
///
/// Note: methods take `&self` because the call model is single-threaded and
/// synchronous; backends needing mutation use interior mutability.
pub trait NativeCalls {
    // --- Entity ---

    /// Whether the entity currently has a component of the given kind
    fn entity_has_component(&self, entity: EntityId, kind: ComponentKind) -> bool;

    /// Look up a live entity by name; the sentinel means "not found"
    fn entity_find_by_name(&self, name: &str) -> EntityId;

    /// Opaque reference to the script object bound to the entity
    fn entity_get_script_instance(&self, entity: EntityId) -> ScriptInstanceRef;

    // --- Tag component ---

    fn tag_get(&self, entity: EntityId, out_tag: &mut String);
    fn tag_set(&self, entity: EntityId, tag: &str);

    // --- Transform component ---

    fn transform_get_translation(&self, entity: EntityId, out_translation: &mut Vec3);
    fn transform_set_translation(&self, entity: EntityId, translation: &Vec3);

    // --- Rigidbody2D component ---

    fn rigidbody2d_apply_linear_impulse(
        &self,
        entity: EntityId,
        impulse: &Vec2,
        world_position: &Vec2,
        wake: bool,
    );
    fn rigidbody2d_apply_linear_impulse_to_center(
        &self,
        entity: EntityId,
        impulse: &Vec2,
        wake: bool,
    );

    // --- Input ---

    fn input_is_key_down(&self, key: KeyCode) -> bool;
    fn input_is_mouse_button_pressed(&self, button: MouseCode) -> bool;
    fn input_get_mouse_position(&self, out_position: &mut Vec2);
    fn input_get_mouse_x(&self) -> f32;
    fn input_get_mouse_y(&self) -> f32;
    fn input_is_gamepad_connected(&self, gamepad: i32) -> bool;
    fn input_get_gamepad_name(&self, gamepad: i32, out_name: &mut String);
    fn input_is_gamepad_button_pressed(&self, gamepad: i32, button: GamepadButtonCode) -> bool;
    fn input_get_gamepad_axis(&self, gamepad: i32, axis: GamepadAxisCode) -> f32;
    fn input_get_gamepad_sensor(&self, gamepad: i32, sensor: GamepadSensorCode, out_value: &mut Vec3);

    /// Returns false when the gamepad is absent or does not support rumble
    fn input_set_gamepad_rumble(&self, gamepad: i32, left: f32, right: f32, duration: f32) -> bool;

    /// Returns false when the gamepad is absent or does not support an LED
    fn input_set_gamepad_led(&self, gamepad: i32, color: &Vec3) -> bool;

    // --- Physics ---

    fn physics_raycast(
        &self,
        origin: &Vec3,
        direction: &Vec3,
        distance: f32,
        out_entity: &mut EntityId,
        out_hit: &mut RawRaycastHit,
    );
    fn physics_raycast_points(
        &self,
        start: &Vec3,
        end: &Vec3,
        out_entity: &mut EntityId,
        out_hit: &mut RawRaycastHit,
    );

    // --- Debug drawing (fire-and-forget) ---

    fn debug_draw_line(&self, start: &Vec3, end: &Vec3, color: &Vec3, duration: f32);
    fn debug_draw_cube(&self, position: &Vec3, size: &Vec3, color: &Vec3, duration: f32);
    fn debug_draw_sphere(&self, center: &Vec3, radius: f32, color: &Vec3, duration: f32);
    fn debug_clear(&self);

    // --- Logging (fire-and-forget) ---

    fn log_trace(&self, message: &str);
    fn log_info(&self, message: &str);
    fn log_warn(&self, message: &str);
    fn log_error(&self, message: &str);
    fn log_critical(&self, message: &str);

    // --- Core ---

    /// Invoke the native assert handler. Only ever called with a false
    /// condition; the facade filters the passing case.
    fn core_assert(&self, condition: bool, message: &str);

    // --- Animation ---

    fn animation_get_pose(&self, animation: &str, time: f32) -> PoseHandle;
    fn animation_blend_poses(&self, base: PoseHandle, blend: PoseHandle, weight: f32) -> PoseHandle;
}
