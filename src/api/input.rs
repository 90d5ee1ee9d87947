//! Input facade
//!
//! Keyboard, mouse and gamepad queries plus gamepad rumble/LED control. All
//! queries are reads of native input state; the setters report success as a
//! plain bool (false covers "not connected" and "not supported" alike).

use glam::{Vec2, Vec3};

use crate::codes::{GamepadAxisCode, GamepadButtonCode, GamepadSensorCode, KeyCode, MouseCode};
use crate::descriptor::{NodeDescriptor, NodeRegistry, ParamDescriptor};
use crate::error::Result;
use crate::interop::NativeCalls;

/// Facade over native input polling
pub struct InputApi<'a> {
    calls: &'a dyn NativeCalls,
}

impl<'a> InputApi<'a> {
    pub fn new(calls: &'a dyn NativeCalls) -> Self {
        Self { calls }
    }

    /// Whether the key is currently held down
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.calls.input_is_key_down(key)
    }

    /// Whether the mouse button is currently pressed
    pub fn is_mouse_button_pressed(&self, button: MouseCode) -> bool {
        self.calls.input_is_mouse_button_pressed(button)
    }

    /// Current cursor position
    pub fn mouse_position(&self) -> Vec2 {
        let mut position = Vec2::ZERO;
        self.calls.input_get_mouse_position(&mut position);
        position
    }

    /// Current cursor x coordinate
    pub fn mouse_x(&self) -> f32 {
        self.calls.input_get_mouse_x()
    }

    /// Current cursor y coordinate
    pub fn mouse_y(&self) -> f32 {
        self.calls.input_get_mouse_y()
    }

    /// Whether a gamepad is connected at the given index
    pub fn is_gamepad_connected(&self, gamepad: i32) -> bool {
        self.calls.input_is_gamepad_connected(gamepad)
    }

    /// Device name of the gamepad at the given index
    pub fn gamepad_name(&self, gamepad: i32) -> String {
        let mut name = String::new();
        self.calls.input_get_gamepad_name(gamepad, &mut name);
        name
    }

    /// Whether the gamepad button is currently pressed
    pub fn is_gamepad_button_pressed(&self, gamepad: i32, button: GamepadButtonCode) -> bool {
        self.calls.input_is_gamepad_button_pressed(gamepad, button)
    }

    /// Current value of the gamepad axis
    pub fn gamepad_axis(&self, gamepad: i32, axis: GamepadAxisCode) -> f32 {
        self.calls.input_get_gamepad_axis(gamepad, axis)
    }

    /// Current reading of the gamepad sensor
    pub fn gamepad_sensor(&self, gamepad: i32, sensor: GamepadSensorCode) -> Vec3 {
        let mut value = Vec3::ZERO;
        self.calls
            .input_get_gamepad_sensor(gamepad, sensor, &mut value);
        value
    }

    /// Start rumble on the gamepad; false when absent or unsupported
    pub fn set_gamepad_rumble(&self, gamepad: i32, left: f32, right: f32, duration: f32) -> bool {
        self.calls
            .input_set_gamepad_rumble(gamepad, left, right, duration)
    }

    /// Set the gamepad LED color; false when absent or unsupported
    pub fn set_gamepad_led(&self, gamepad: i32, color: Vec3) -> bool {
        self.calls.input_set_gamepad_led(gamepad, &color)
    }
}

/// Publish the input surface to the editor reflector
pub(crate) fn register_nodes(registry: &mut NodeRegistry) -> Result<()> {
    registry.register(
        NodeDescriptor::new("input.is_key_down")
            .with_display_name("Is Key Down")
            .with_category("Input")
            .with_keywords("keyboard key press")
            .pure()
            .with_param(ParamDescriptor::new("key_code").with_display_name("Key Code")),
    )?;
    registry.register(
        NodeDescriptor::new("input.is_mouse_button_pressed")
            .with_display_name("Is Mouse Button Pressed")
            .with_category("Input")
            .with_keywords("mouse click button")
            .pure()
            .with_param(ParamDescriptor::new("mouse_code").with_display_name("Mouse Code")),
    )?;
    registry.register(
        NodeDescriptor::new("input.mouse_position")
            .with_display_name("Get Mouse Position")
            .with_category("Input")
            .pure(),
    )?;
    registry.register(
        NodeDescriptor::new("input.mouse_x")
            .with_display_name("Get Mouse X")
            .with_category("Input")
            .pure()
            .compact(),
    )?;
    registry.register(
        NodeDescriptor::new("input.mouse_y")
            .with_display_name("Get Mouse Y")
            .with_category("Input")
            .pure()
            .compact(),
    )?;
    registry.register(
        NodeDescriptor::new("input.is_gamepad_connected")
            .with_display_name("Is Gamepad Connected")
            .with_category("Input")
            .with_keywords("gamepad controller joystick")
            .pure()
            .with_param(ParamDescriptor::new("gamepad_index").with_display_name("Gamepad Index")),
    )?;
    registry.register(
        NodeDescriptor::new("input.gamepad_name")
            .with_display_name("Get Gamepad Name")
            .with_category("Input")
            .pure()
            .with_param(ParamDescriptor::new("gamepad_index").with_display_name("Gamepad Index")),
    )?;
    registry.register(
        NodeDescriptor::new("input.is_gamepad_button_pressed")
            .with_display_name("Is Gamepad Button Pressed")
            .with_category("Input")
            .pure()
            .with_param(ParamDescriptor::new("gamepad_index").with_display_name("Gamepad Index"))
            .with_param(
                ParamDescriptor::new("gamepad_button").with_display_name("Gamepad Button Code"),
            ),
    )?;
    registry.register(
        NodeDescriptor::new("input.gamepad_axis")
            .with_display_name("Get Gamepad Axis")
            .with_category("Input")
            .pure()
            .with_param(ParamDescriptor::new("gamepad_index").with_display_name("Gamepad Index"))
            .with_param(ParamDescriptor::new("gamepad_axis").with_display_name("Gamepad Axis Code")),
    )?;
    registry.register(
        NodeDescriptor::new("input.gamepad_sensor")
            .with_display_name("Get Gamepad Sensor")
            .with_category("Input")
            .with_keywords("accelerometer gyroscope motion")
            .pure()
            .with_param(ParamDescriptor::new("gamepad_index").with_display_name("Gamepad Index"))
            .with_param(
                ParamDescriptor::new("gamepad_sensor").with_display_name("Gamepad Sensor Code"),
            ),
    )?;
    registry.register(
        NodeDescriptor::new("input.set_gamepad_rumble")
            .with_display_name("Set Gamepad Rumble")
            .with_category("Input")
            .with_keywords("vibration haptic")
            .with_param(ParamDescriptor::new("gamepad_index").with_display_name("Gamepad Index"))
            .with_param(ParamDescriptor::new("left").with_display_name("Left"))
            .with_param(ParamDescriptor::new("right").with_display_name("Right"))
            .with_param(ParamDescriptor::new("duration").with_display_name("Duration")),
    )?;
    registry.register(
        NodeDescriptor::new("input.set_gamepad_led")
            .with_display_name("Set Gamepad LED")
            .with_category("Input")
            .with_param(ParamDescriptor::new("gamepad_index").with_display_name("Gamepad Index"))
            .with_param(ParamDescriptor::new("color").with_display_name("Color")),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::HeadlessEngine;

    #[test]
    fn test_key_and_mouse_queries() {
        let engine = HeadlessEngine::new()
            .with_key_down(KeyCode::Space)
            .with_mouse_button_down(MouseCode::LEFT)
            .with_mouse_position(Vec2::new(320.0, 240.0));
        let input = InputApi::new(&engine);

        assert!(input.is_key_down(KeyCode::Space));
        assert!(!input.is_key_down(KeyCode::Enter));
        assert!(input.is_mouse_button_pressed(MouseCode::LEFT));
        assert!(!input.is_mouse_button_pressed(MouseCode::RIGHT));
        assert_eq!(input.mouse_position(), Vec2::new(320.0, 240.0));
        assert_eq!(input.mouse_x(), 320.0);
        assert_eq!(input.mouse_y(), 240.0);
    }

    #[test]
    fn test_gamepad_queries() {
        let engine = HeadlessEngine::new()
            .with_gamepad(0, "Test Pad")
            .with_gamepad_button_down(0, GamepadButtonCode::A)
            .with_gamepad_axis(0, GamepadAxisCode::RightTrigger, 0.75)
            .with_gamepad_sensor(0, GamepadSensorCode::Gyroscope, Vec3::new(0.1, 0.2, 0.3));
        let input = InputApi::new(&engine);

        assert!(input.is_gamepad_connected(0));
        assert!(!input.is_gamepad_connected(1));
        assert_eq!(input.gamepad_name(0), "Test Pad");
        assert!(input.is_gamepad_button_pressed(0, GamepadButtonCode::A));
        assert!(!input.is_gamepad_button_pressed(0, GamepadButtonCode::B));
        assert_eq!(input.gamepad_axis(0, GamepadAxisCode::RightTrigger), 0.75);
        assert_eq!(input.gamepad_axis(0, GamepadAxisCode::LeftX), 0.0);
        assert_eq!(
            input.gamepad_sensor(0, GamepadSensorCode::Gyroscope),
            Vec3::new(0.1, 0.2, 0.3)
        );
    }

    #[test]
    fn test_disconnected_gamepad_reports_false() {
        let engine = HeadlessEngine::new();
        let input = InputApi::new(&engine);

        assert!(!input.set_gamepad_rumble(0, 1.0, 1.0, 0.5));
        assert!(!input.set_gamepad_led(0, Vec3::new(1.0, 0.0, 0.0)));
        assert_eq!(input.gamepad_name(0), "");
    }

    #[test]
    fn test_registered_nodes_are_pure_queries() {
        let mut registry = NodeRegistry::new();
        register_nodes(&mut registry).unwrap();

        assert!(registry.get("input.is_key_down").unwrap().pure);
        assert!(!registry.get("input.set_gamepad_rumble").unwrap().pure);
        assert_eq!(
            registry
                .get("input.is_key_down")
                .unwrap()
                .param("key_code")
                .unwrap()
                .display_name
                .as_deref(),
            Some("Key Code")
        );
    }
}
