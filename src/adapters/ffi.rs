//! C ABI backend
//!
//! Forwards every boundary call to the engine's exported entry points. One
//! `extern "C"` symbol per call; vectors cross as `repr(C)` pointers, strings
//! out through caller-provided UTF-8 buffers (the engine copies out of its own
//! storage and returns the byte length written).
//!
//! Enabled by the `ffi` cargo feature and requires linking against the native
//! engine; without it the symbols do not resolve.

use glam::{Vec2, Vec3};

use crate::codes::{GamepadAxisCode, GamepadButtonCode, GamepadSensorCode, KeyCode, MouseCode};
use crate::handle::{ComponentKind, EntityId, PoseHandle, ScriptInstanceRef};
use crate::interop::{NativeCalls, RawRaycastHit};

/// Wire layout of a raycast record on the C ABI
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
struct FfiRaycastHit {
    hit: bool,
    distance: f32,
    position: Vec3,
    normal: Vec3,
}

/// Upper bound on strings copied out of the engine (tags, gamepad names)
const STRING_OUT_CAP: usize = 256;

unsafe extern "C" {
    fn vexel_entity_has_component(entity: u64, kind: i32) -> bool;
    fn vexel_entity_find_by_name(name: *const u8, name_len: usize) -> u64;
    fn vexel_entity_get_script_instance(entity: u64) -> u64;

    fn vexel_tag_get(entity: u64, buf: *mut u8, cap: usize) -> usize;
    fn vexel_tag_set(entity: u64, tag: *const u8, tag_len: usize);

    fn vexel_transform_get_translation(entity: u64, out_translation: *mut Vec3);
    fn vexel_transform_set_translation(entity: u64, translation: *const Vec3);

    fn vexel_rigidbody2d_apply_linear_impulse(
        entity: u64,
        impulse: *const Vec2,
        world_position: *const Vec2,
        wake: bool,
    );
    fn vexel_rigidbody2d_apply_linear_impulse_to_center(
        entity: u64,
        impulse: *const Vec2,
        wake: bool,
    );

    fn vexel_input_is_key_down(key: i32) -> bool;
    fn vexel_input_is_mouse_button_pressed(button: i32) -> bool;
    fn vexel_input_get_mouse_position(out_position: *mut Vec2);
    fn vexel_input_get_mouse_x() -> f32;
    fn vexel_input_get_mouse_y() -> f32;
    fn vexel_input_is_gamepad_connected(gamepad: i32) -> bool;
    fn vexel_input_get_gamepad_name(gamepad: i32, buf: *mut u8, cap: usize) -> usize;
    fn vexel_input_is_gamepad_button_pressed(gamepad: i32, button: i32) -> bool;
    fn vexel_input_get_gamepad_axis(gamepad: i32, axis: i32) -> f32;
    fn vexel_input_get_gamepad_sensor(gamepad: i32, sensor: i32, out_value: *mut Vec3);
    fn vexel_input_set_gamepad_rumble(gamepad: i32, left: f32, right: f32, duration: f32) -> bool;
    fn vexel_input_set_gamepad_led(gamepad: i32, color: *const Vec3) -> bool;

    fn vexel_physics_raycast(
        origin: *const Vec3,
        direction: *const Vec3,
        distance: f32,
        out_entity: *mut u64,
        out_hit: *mut FfiRaycastHit,
    );
    fn vexel_physics_raycast_points(
        start: *const Vec3,
        end: *const Vec3,
        out_entity: *mut u64,
        out_hit: *mut FfiRaycastHit,
    );

    fn vexel_debug_draw_line(start: *const Vec3, end: *const Vec3, color: *const Vec3, duration: f32);
    fn vexel_debug_draw_cube(
        position: *const Vec3,
        size: *const Vec3,
        color: *const Vec3,
        duration: f32,
    );
    fn vexel_debug_draw_sphere(center: *const Vec3, radius: f32, color: *const Vec3, duration: f32);
    fn vexel_debug_clear();

    fn vexel_log_write(level: i32, message: *const u8, message_len: usize);

    fn vexel_core_assert(condition: bool, message: *const u8, message_len: usize);

    fn vexel_animation_get_pose(animation: *const u8, animation_len: usize, time: f32) -> u64;
    fn vexel_animation_blend_poses(base: u64, blend: u64, weight: f32) -> u64;
}

/// Copy a string out of the engine through a caller-provided buffer
fn read_string_out(out: &mut String, fill: impl FnOnce(*mut u8, usize) -> usize) {
    let mut buf = vec![0u8; STRING_OUT_CAP];
    let len = fill(buf.as_mut_ptr(), buf.len()).min(buf.len());
    buf.truncate(len);
    out.clear();
    out.push_str(&String::from_utf8_lossy(&buf));
}

/// Backend forwarding every call to the engine's C ABI
#[derive(Debug, Default)]
pub struct FfiEngine;

impl FfiEngine {
    pub fn new() -> Self {
        Self
    }
}

impl NativeCalls for FfiEngine {
    fn entity_has_component(&self, entity: EntityId, kind: ComponentKind) -> bool {
        unsafe { vexel_entity_has_component(entity.raw(), kind.code()) }
    }

    fn entity_find_by_name(&self, name: &str) -> EntityId {
        EntityId(unsafe { vexel_entity_find_by_name(name.as_ptr(), name.len()) })
    }

    fn entity_get_script_instance(&self, entity: EntityId) -> ScriptInstanceRef {
        ScriptInstanceRef(unsafe { vexel_entity_get_script_instance(entity.raw()) })
    }

    fn tag_get(&self, entity: EntityId, out_tag: &mut String) {
        read_string_out(out_tag, |buf, cap| unsafe {
            vexel_tag_get(entity.raw(), buf, cap)
        });
    }

    fn tag_set(&self, entity: EntityId, tag: &str) {
        unsafe { vexel_tag_set(entity.raw(), tag.as_ptr(), tag.len()) }
    }

    fn transform_get_translation(&self, entity: EntityId, out_translation: &mut Vec3) {
        unsafe { vexel_transform_get_translation(entity.raw(), out_translation) }
    }

    fn transform_set_translation(&self, entity: EntityId, translation: &Vec3) {
        unsafe { vexel_transform_set_translation(entity.raw(), translation) }
    }

    fn rigidbody2d_apply_linear_impulse(
        &self,
        entity: EntityId,
        impulse: &Vec2,
        world_position: &Vec2,
        wake: bool,
    ) {
        unsafe { vexel_rigidbody2d_apply_linear_impulse(entity.raw(), impulse, world_position, wake) }
    }

    fn rigidbody2d_apply_linear_impulse_to_center(
        &self,
        entity: EntityId,
        impulse: &Vec2,
        wake: bool,
    ) {
        unsafe { vexel_rigidbody2d_apply_linear_impulse_to_center(entity.raw(), impulse, wake) }
    }

    fn input_is_key_down(&self, key: KeyCode) -> bool {
        unsafe { vexel_input_is_key_down(key.code()) }
    }

    fn input_is_mouse_button_pressed(&self, button: MouseCode) -> bool {
        unsafe { vexel_input_is_mouse_button_pressed(button.code()) }
    }

    fn input_get_mouse_position(&self, out_position: &mut Vec2) {
        unsafe { vexel_input_get_mouse_position(out_position) }
    }

    fn input_get_mouse_x(&self) -> f32 {
        unsafe { vexel_input_get_mouse_x() }
    }

    fn input_get_mouse_y(&self) -> f32 {
        unsafe { vexel_input_get_mouse_y() }
    }

    fn input_is_gamepad_connected(&self, gamepad: i32) -> bool {
        unsafe { vexel_input_is_gamepad_connected(gamepad) }
    }

    fn input_get_gamepad_name(&self, gamepad: i32, out_name: &mut String) {
        read_string_out(out_name, |buf, cap| unsafe {
            vexel_input_get_gamepad_name(gamepad, buf, cap)
        });
    }

    fn input_is_gamepad_button_pressed(&self, gamepad: i32, button: GamepadButtonCode) -> bool {
        unsafe { vexel_input_is_gamepad_button_pressed(gamepad, button.code()) }
    }

    fn input_get_gamepad_axis(&self, gamepad: i32, axis: GamepadAxisCode) -> f32 {
        unsafe { vexel_input_get_gamepad_axis(gamepad, axis.code()) }
    }

    fn input_get_gamepad_sensor(
        &self,
        gamepad: i32,
        sensor: GamepadSensorCode,
        out_value: &mut Vec3,
    ) {
        unsafe { vexel_input_get_gamepad_sensor(gamepad, sensor.code(), out_value) }
    }

    fn input_set_gamepad_rumble(&self, gamepad: i32, left: f32, right: f32, duration: f32) -> bool {
        unsafe { vexel_input_set_gamepad_rumble(gamepad, left, right, duration) }
    }

    fn input_set_gamepad_led(&self, gamepad: i32, color: &Vec3) -> bool {
        unsafe { vexel_input_set_gamepad_led(gamepad, color) }
    }

    fn physics_raycast(
        &self,
        origin: &Vec3,
        direction: &Vec3,
        distance: f32,
        out_entity: &mut EntityId,
        out_hit: &mut RawRaycastHit,
    ) {
        let mut raw = FfiRaycastHit::default();
        unsafe { vexel_physics_raycast(origin, direction, distance, &mut out_entity.0, &mut raw) }
        *out_hit = RawRaycastHit {
            hit: raw.hit,
            distance: raw.distance,
            position: raw.position,
            normal: raw.normal,
        };
    }

    fn physics_raycast_points(
        &self,
        start: &Vec3,
        end: &Vec3,
        out_entity: &mut EntityId,
        out_hit: &mut RawRaycastHit,
    ) {
        let mut raw = FfiRaycastHit::default();
        unsafe { vexel_physics_raycast_points(start, end, &mut out_entity.0, &mut raw) }
        *out_hit = RawRaycastHit {
            hit: raw.hit,
            distance: raw.distance,
            position: raw.position,
            normal: raw.normal,
        };
    }

    fn debug_draw_line(&self, start: &Vec3, end: &Vec3, color: &Vec3, duration: f32) {
        unsafe { vexel_debug_draw_line(start, end, color, duration) }
    }

    fn debug_draw_cube(&self, position: &Vec3, size: &Vec3, color: &Vec3, duration: f32) {
        unsafe { vexel_debug_draw_cube(position, size, color, duration) }
    }

    fn debug_draw_sphere(&self, center: &Vec3, radius: f32, color: &Vec3, duration: f32) {
        unsafe { vexel_debug_draw_sphere(center, radius, color, duration) }
    }

    fn debug_clear(&self) {
        unsafe { vexel_debug_clear() }
    }

    fn log_trace(&self, message: &str) {
        unsafe { vexel_log_write(0, message.as_ptr(), message.len()) }
    }

    fn log_info(&self, message: &str) {
        unsafe { vexel_log_write(1, message.as_ptr(), message.len()) }
    }

    fn log_warn(&self, message: &str) {
        unsafe { vexel_log_write(2, message.as_ptr(), message.len()) }
    }

    fn log_error(&self, message: &str) {
        unsafe { vexel_log_write(3, message.as_ptr(), message.len()) }
    }

    fn log_critical(&self, message: &str) {
        unsafe { vexel_log_write(4, message.as_ptr(), message.len()) }
    }

    fn core_assert(&self, condition: bool, message: &str) {
        unsafe { vexel_core_assert(condition, message.as_ptr(), message.len()) }
    }

    fn animation_get_pose(&self, animation: &str, time: f32) -> PoseHandle {
        PoseHandle(unsafe { vexel_animation_get_pose(animation.as_ptr(), animation.len(), time) })
    }

    fn animation_blend_poses(&self, base: PoseHandle, blend: PoseHandle, weight: f32) -> PoseHandle {
        PoseHandle(unsafe { vexel_animation_blend_poses(base.raw(), blend.raw(), weight) })
    }
}
