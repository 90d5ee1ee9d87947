//! In-memory engine double
//!
//! Implements the whole `NativeCalls` boundary against plain in-memory state
//! so the facade layer can be exercised without a live engine. Scene state
//! (names, tags, translations), input state and canned raycast results are
//! configured through `with_*` builders; fire-and-forget calls (impulses,
//! debug draws, logs, asserts) are recorded for inspection. Script log calls
//! are additionally bridged to `tracing`, mirroring how the real engine feeds
//! its log sinks.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use glam::{Vec2, Vec3};
use tracing::{debug, error, info, trace, warn};

use crate::codes::{GamepadAxisCode, GamepadButtonCode, GamepadSensorCode, KeyCode, MouseCode};
use crate::handle::{ComponentKind, EntityId, PoseHandle, ScriptInstanceRef};
use crate::interop::{NativeCalls, RawRaycastHit};

/// Severity of a recorded script log call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Info,
    Warn,
    Error,
    Critical,
}

/// One recorded fire-and-forget boundary call
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    ApplyLinearImpulse {
        entity: EntityId,
        impulse: Vec2,
        /// `None` for the to-center form
        world_position: Option<Vec2>,
        wake: bool,
    },
    DrawLine {
        start: Vec3,
        end: Vec3,
        color: Vec3,
        duration: f32,
    },
    DrawCube {
        position: Vec3,
        size: Vec3,
        color: Vec3,
        duration: f32,
    },
    DrawSphere {
        center: Vec3,
        radius: f32,
        color: Vec3,
        duration: f32,
    },
    ClearDebugDrawing,
    Log {
        level: LogLevel,
        message: String,
    },
    Assert {
        condition: bool,
        message: String,
    },
    SetGamepadRumble {
        gamepad: i32,
        left: f32,
        right: f32,
        duration: f32,
    },
    SetGamepadLed {
        gamepad: i32,
        color: Vec3,
    },
    GetAnimationPose {
        animation: String,
        time: f32,
    },
    BlendPoses {
        base: PoseHandle,
        blend: PoseHandle,
        weight: f32,
    },
}

/// Connected gamepad state
#[derive(Debug, Clone, Default)]
struct GamepadState {
    name: String,
    buttons_down: HashSet<i32>,
    axes: HashMap<i32, f32>,
    sensors: HashMap<i32, Vec3>,
}

#[derive(Debug, Default)]
struct EngineState {
    entities_by_name: HashMap<String, EntityId>,
    components: HashMap<u64, HashSet<ComponentKind>>,
    tags: HashMap<u64, String>,
    translations: HashMap<u64, Vec3>,
    keys_down: HashSet<i32>,
    mouse_buttons_down: HashSet<i32>,
    mouse_position: Vec2,
    gamepads: HashMap<i32, GamepadState>,
    /// Written verbatim into the raycast out-parameters
    raycast_result: Option<(EntityId, RawRaycastHit)>,
    next_pose: u64,
    calls: Vec<RecordedCall>,
}

/// In-memory implementation of the native boundary
///
/// Interior mutability behind `&self` because the boundary trait models a
/// single-threaded synchronous call surface.
#[derive(Debug, Default)]
pub struct HeadlessEngine {
    state: RwLock<EngineState>,
}

impl HeadlessEngine {
    /// Create an empty headless engine
    pub fn new() -> Self {
        Self {
            state: RwLock::new(EngineState {
                next_pose: 1,
                ..EngineState::default()
            }),
        }
    }

    /// Add a named entity with Tag and Transform components
    ///
    /// The tag starts as the entity's name and the translation as zero.
    pub fn with_entity(self, name: impl Into<String>, id: EntityId) -> Self {
        {
            let mut state = self.state.write().unwrap();
            let name = name.into();
            state.entities_by_name.insert(name.clone(), id);
            state
                .components
                .entry(id.raw())
                .or_default()
                .extend([ComponentKind::Tag, ComponentKind::Transform]);
            state.tags.insert(id.raw(), name);
            state.translations.insert(id.raw(), Vec3::ZERO);
        }
        self
    }

    /// Grant an entity an additional component kind
    pub fn with_component(self, id: EntityId, kind: ComponentKind) -> Self {
        self.state
            .write()
            .unwrap()
            .components
            .entry(id.raw())
            .or_default()
            .insert(kind);
        self
    }

    /// Mark a key as held down
    pub fn with_key_down(self, key: KeyCode) -> Self {
        self.state.write().unwrap().keys_down.insert(key.code());
        self
    }

    /// Mark a mouse button as pressed
    pub fn with_mouse_button_down(self, button: MouseCode) -> Self {
        self.state
            .write()
            .unwrap()
            .mouse_buttons_down
            .insert(button.code());
        self
    }

    /// Set the cursor position
    pub fn with_mouse_position(self, position: Vec2) -> Self {
        self.state.write().unwrap().mouse_position = position;
        self
    }

    /// Connect a gamepad at the given index
    pub fn with_gamepad(self, gamepad: i32, name: impl Into<String>) -> Self {
        self.state.write().unwrap().gamepads.insert(
            gamepad,
            GamepadState {
                name: name.into(),
                ..GamepadState::default()
            },
        );
        self
    }

    /// Mark a gamepad button as pressed (the gamepad must be connected)
    pub fn with_gamepad_button_down(self, gamepad: i32, button: GamepadButtonCode) -> Self {
        {
            let mut state = self.state.write().unwrap();
            if let Some(pad) = state.gamepads.get_mut(&gamepad) {
                pad.buttons_down.insert(button.code());
            }
        }
        self
    }

    /// Set a gamepad axis value (the gamepad must be connected)
    pub fn with_gamepad_axis(self, gamepad: i32, axis: GamepadAxisCode, value: f32) -> Self {
        {
            let mut state = self.state.write().unwrap();
            if let Some(pad) = state.gamepads.get_mut(&gamepad) {
                pad.axes.insert(axis.code(), value);
            }
        }
        self
    }

    /// Set a gamepad sensor reading (the gamepad must be connected)
    pub fn with_gamepad_sensor(
        self,
        gamepad: i32,
        sensor: GamepadSensorCode,
        value: Vec3,
    ) -> Self {
        {
            let mut state = self.state.write().unwrap();
            if let Some(pad) = state.gamepads.get_mut(&gamepad) {
                pad.sensors.insert(sensor.code(), value);
            }
        }
        self
    }

    /// Set what the next raycast calls write into their out-parameters
    ///
    /// Both values are written verbatim; a miss may carry a non-zero raw
    /// entity id, which the facade must still map to an absent entity.
    pub fn with_raycast_result(self, entity: EntityId, hit: RawRaycastHit) -> Self {
        self.state.write().unwrap().raycast_result = Some((entity, hit));
        self
    }

    /// All fire-and-forget calls recorded so far, in call order
    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.state.read().unwrap().calls.clone()
    }

    /// Current tag of an entity, if any (test inspection)
    pub fn tag_of(&self, id: EntityId) -> Option<String> {
        self.state.read().unwrap().tags.get(&id.raw()).cloned()
    }

    /// Current translation of an entity, if any (test inspection)
    pub fn translation_of(&self, id: EntityId) -> Option<Vec3> {
        self.state
            .read()
            .unwrap()
            .translations
            .get(&id.raw())
            .copied()
    }

    fn record(&self, call: RecordedCall) {
        self.state.write().unwrap().calls.push(call);
    }
}

impl NativeCalls for HeadlessEngine {
    fn entity_has_component(&self, entity: EntityId, kind: ComponentKind) -> bool {
        self.state
            .read()
            .unwrap()
            .components
            .get(&entity.raw())
            .is_some_and(|kinds| kinds.contains(&kind))
    }

    fn entity_find_by_name(&self, name: &str) -> EntityId {
        self.state
            .read()
            .unwrap()
            .entities_by_name
            .get(name)
            .copied()
            .unwrap_or(EntityId::NONE)
    }

    fn entity_get_script_instance(&self, entity: EntityId) -> ScriptInstanceRef {
        // Script instances are keyed by entity id in the double
        ScriptInstanceRef(entity.raw())
    }

    fn tag_get(&self, entity: EntityId, out_tag: &mut String) {
        // Out-parameter is left untouched when the entity has no tag
        if let Some(tag) = self.state.read().unwrap().tags.get(&entity.raw()) {
            out_tag.clear();
            out_tag.push_str(tag);
        }
    }

    fn tag_set(&self, entity: EntityId, tag: &str) {
        self.state
            .write()
            .unwrap()
            .tags
            .insert(entity.raw(), tag.to_string());
    }

    fn transform_get_translation(&self, entity: EntityId, out_translation: &mut Vec3) {
        if let Some(translation) = self.state.read().unwrap().translations.get(&entity.raw()) {
            *out_translation = *translation;
        }
    }

    fn transform_set_translation(&self, entity: EntityId, translation: &Vec3) {
        self.state
            .write()
            .unwrap()
            .translations
            .insert(entity.raw(), *translation);
    }

    fn rigidbody2d_apply_linear_impulse(
        &self,
        entity: EntityId,
        impulse: &Vec2,
        world_position: &Vec2,
        wake: bool,
    ) {
        self.record(RecordedCall::ApplyLinearImpulse {
            entity,
            impulse: *impulse,
            world_position: Some(*world_position),
            wake,
        });
    }

    fn rigidbody2d_apply_linear_impulse_to_center(
        &self,
        entity: EntityId,
        impulse: &Vec2,
        wake: bool,
    ) {
        self.record(RecordedCall::ApplyLinearImpulse {
            entity,
            impulse: *impulse,
            world_position: None,
            wake,
        });
    }

    fn input_is_key_down(&self, key: KeyCode) -> bool {
        self.state.read().unwrap().keys_down.contains(&key.code())
    }

    fn input_is_mouse_button_pressed(&self, button: MouseCode) -> bool {
        self.state
            .read()
            .unwrap()
            .mouse_buttons_down
            .contains(&button.code())
    }

    fn input_get_mouse_position(&self, out_position: &mut Vec2) {
        *out_position = self.state.read().unwrap().mouse_position;
    }

    fn input_get_mouse_x(&self) -> f32 {
        self.state.read().unwrap().mouse_position.x
    }

    fn input_get_mouse_y(&self) -> f32 {
        self.state.read().unwrap().mouse_position.y
    }

    fn input_is_gamepad_connected(&self, gamepad: i32) -> bool {
        self.state.read().unwrap().gamepads.contains_key(&gamepad)
    }

    fn input_get_gamepad_name(&self, gamepad: i32, out_name: &mut String) {
        if let Some(pad) = self.state.read().unwrap().gamepads.get(&gamepad) {
            out_name.clear();
            out_name.push_str(&pad.name);
        }
    }

    fn input_is_gamepad_button_pressed(&self, gamepad: i32, button: GamepadButtonCode) -> bool {
        self.state
            .read()
            .unwrap()
            .gamepads
            .get(&gamepad)
            .is_some_and(|pad| pad.buttons_down.contains(&button.code()))
    }

    fn input_get_gamepad_axis(&self, gamepad: i32, axis: GamepadAxisCode) -> f32 {
        self.state
            .read()
            .unwrap()
            .gamepads
            .get(&gamepad)
            .and_then(|pad| pad.axes.get(&axis.code()).copied())
            .unwrap_or(0.0)
    }

    fn input_get_gamepad_sensor(
        &self,
        gamepad: i32,
        sensor: GamepadSensorCode,
        out_value: &mut Vec3,
    ) {
        if let Some(value) = self
            .state
            .read()
            .unwrap()
            .gamepads
            .get(&gamepad)
            .and_then(|pad| pad.sensors.get(&sensor.code()).copied())
        {
            *out_value = value;
        }
    }

    fn input_set_gamepad_rumble(&self, gamepad: i32, left: f32, right: f32, duration: f32) -> bool {
        let connected = self.state.read().unwrap().gamepads.contains_key(&gamepad);
        self.record(RecordedCall::SetGamepadRumble {
            gamepad,
            left,
            right,
            duration,
        });
        connected
    }

    fn input_set_gamepad_led(&self, gamepad: i32, color: &Vec3) -> bool {
        let connected = self.state.read().unwrap().gamepads.contains_key(&gamepad);
        self.record(RecordedCall::SetGamepadLed {
            gamepad,
            color: *color,
        });
        connected
    }

    fn physics_raycast(
        &self,
        _origin: &Vec3,
        _direction: &Vec3,
        _distance: f32,
        out_entity: &mut EntityId,
        out_hit: &mut RawRaycastHit,
    ) {
        self.write_raycast(out_entity, out_hit);
    }

    fn physics_raycast_points(
        &self,
        _start: &Vec3,
        _end: &Vec3,
        out_entity: &mut EntityId,
        out_hit: &mut RawRaycastHit,
    ) {
        self.write_raycast(out_entity, out_hit);
    }

    fn debug_draw_line(&self, start: &Vec3, end: &Vec3, color: &Vec3, duration: f32) {
        self.record(RecordedCall::DrawLine {
            start: *start,
            end: *end,
            color: *color,
            duration,
        });
    }

    fn debug_draw_cube(&self, position: &Vec3, size: &Vec3, color: &Vec3, duration: f32) {
        self.record(RecordedCall::DrawCube {
            position: *position,
            size: *size,
            color: *color,
            duration,
        });
    }

    fn debug_draw_sphere(&self, center: &Vec3, radius: f32, color: &Vec3, duration: f32) {
        self.record(RecordedCall::DrawSphere {
            center: *center,
            radius,
            color: *color,
            duration,
        });
    }

    fn debug_clear(&self) {
        self.record(RecordedCall::ClearDebugDrawing);
    }

    fn log_trace(&self, message: &str) {
        trace!(facade = "log", "{}", message);
        self.record(RecordedCall::Log {
            level: LogLevel::Trace,
            message: message.to_string(),
        });
    }

    fn log_info(&self, message: &str) {
        info!(facade = "log", "{}", message);
        self.record(RecordedCall::Log {
            level: LogLevel::Info,
            message: message.to_string(),
        });
    }

    fn log_warn(&self, message: &str) {
        warn!(facade = "log", "{}", message);
        self.record(RecordedCall::Log {
            level: LogLevel::Warn,
            message: message.to_string(),
        });
    }

    fn log_error(&self, message: &str) {
        error!(facade = "log", "{}", message);
        self.record(RecordedCall::Log {
            level: LogLevel::Error,
            message: message.to_string(),
        });
    }

    fn log_critical(&self, message: &str) {
        error!(facade = "log", critical = true, "{}", message);
        self.record(RecordedCall::Log {
            level: LogLevel::Critical,
            message: message.to_string(),
        });
    }

    fn core_assert(&self, condition: bool, message: &str) {
        error!(facade = "core", "assertion failed: {}", message);
        self.record(RecordedCall::Assert {
            condition,
            message: message.to_string(),
        });
    }

    fn animation_get_pose(&self, animation: &str, time: f32) -> PoseHandle {
        self.record(RecordedCall::GetAnimationPose {
            animation: animation.to_string(),
            time,
        });
        self.issue_pose()
    }

    fn animation_blend_poses(&self, base: PoseHandle, blend: PoseHandle, weight: f32) -> PoseHandle {
        self.record(RecordedCall::BlendPoses { base, blend, weight });
        self.issue_pose()
    }
}

impl HeadlessEngine {
    fn write_raycast(&self, out_entity: &mut EntityId, out_hit: &mut RawRaycastHit) {
        if let Some((entity, hit)) = self.state.read().unwrap().raycast_result {
            *out_entity = entity;
            *out_hit = hit;
        } else {
            *out_entity = EntityId::NONE;
            *out_hit = RawRaycastHit::default();
        }
    }

    fn issue_pose(&self) -> PoseHandle {
        let mut state = self.state.write().unwrap();
        let handle = PoseHandle(state.next_pose);
        state.next_pose += 1;
        handle
    }

    /// Ambient debug output for hosts poking at the double directly
    pub fn dump_state(&self) {
        let state = self.state.read().unwrap();
        debug!(
            entities = state.entities_by_name.len(),
            gamepads = state.gamepads.len(),
            recorded = state.calls.len(),
            "headless engine state"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_entity_by_name() {
        let engine = HeadlessEngine::new().with_entity("Player", EntityId(7));
        assert_eq!(engine.entity_find_by_name("Player"), EntityId(7));
        assert_eq!(engine.entity_find_by_name("Ghost"), EntityId::NONE);
    }

    #[test]
    fn test_tag_round_trip() {
        let engine = HeadlessEngine::new().with_entity("Player", EntityId(7));
        engine.tag_set(EntityId(7), "Hero");

        let mut tag = String::new();
        engine.tag_get(EntityId(7), &mut tag);
        assert_eq!(tag, "Hero");
    }

    #[test]
    fn test_missing_tag_leaves_out_param_untouched() {
        let engine = HeadlessEngine::new();
        let mut tag = String::from("unchanged");
        engine.tag_get(EntityId(99), &mut tag);
        assert_eq!(tag, "unchanged");
    }

    #[test]
    fn test_pose_handles_are_sequential() {
        let engine = HeadlessEngine::new();
        let a = engine.animation_get_pose("Run", 0.0);
        let b = engine.animation_get_pose("Idle", 0.5);
        assert_ne!(a, b);
        assert_eq!(b.raw(), a.raw() + 1);
    }

    #[test]
    fn test_rumble_reports_connection() {
        let engine = HeadlessEngine::new().with_gamepad(0, "Pad");
        assert!(engine.input_set_gamepad_rumble(0, 1.0, 1.0, 0.2));
        assert!(!engine.input_set_gamepad_rumble(3, 1.0, 1.0, 0.2));
    }
}
