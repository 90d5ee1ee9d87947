//! Gamepad button, axis and sensor codes
//!
//! Buttons and axes are sourced from glfw3.h; sensors from
//! SDL_gamecontroller.h. The two libraries number their codes independently;
//! keep the tables separate and re-verify against the source header before
//! touching any value.

/// Gamepad button code passed by value across the boundary as its integer code
///
/// From glfw3.h. PlayStation-style aliases (Cross/Circle/Square/Triangle) are
/// associated constants over the same codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum GamepadButtonCode {
    Invalid = -1,

    A = 0,
    B = 1,
    X = 2,
    Y = 3,
    LeftBumper = 4,
    RightBumper = 5,
    Back = 6,
    Start = 7,
    Guide = 8,
    LeftThumb = 9,
    RightThumb = 10,
    DPadUp = 11,
    DPadRight = 12,
    DPadDown = 13,
    DPadLeft = 14,
}

impl GamepadButtonCode {
    pub const CROSS: GamepadButtonCode = GamepadButtonCode::A;
    pub const CIRCLE: GamepadButtonCode = GamepadButtonCode::B;
    pub const SQUARE: GamepadButtonCode = GamepadButtonCode::X;
    pub const TRIANGLE: GamepadButtonCode = GamepadButtonCode::Y;

    /// The integer code as it crosses the boundary
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Gamepad axis code passed by value across the boundary as its integer code
///
/// From glfw3.h.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum GamepadAxisCode {
    Invalid = -1,

    LeftX = 0,
    LeftY = 1,
    RightX = 2,
    RightY = 3,
    LeftTrigger = 4,
    RightTrigger = 5,
}

impl GamepadAxisCode {
    /// The integer code as it crosses the boundary
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Gamepad sensor code passed by value across the boundary as its integer code
///
/// From SDL_gamecontroller.h, a different native library than the button and
/// axis tables. The Left/Right variants cover split controllers (Joy-Con).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum GamepadSensorCode {
    Invalid = -1,
    Unknown = 0,

    Accelerometer = 1,
    Gyroscope = 2,

    AccelerometerLeft = 3,
    GyroscopeLeft = 4,
    AccelerometerRight = 5,
    GyroscopeRight = 6,
}

impl GamepadSensorCode {
    /// The integer code as it crosses the boundary
    pub fn code(self) -> i32 {
        self as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_codes_match_glfw() {
        assert_eq!(GamepadButtonCode::A.code(), 0);
        assert_eq!(GamepadButtonCode::Y.code(), 3);
        assert_eq!(GamepadButtonCode::DPadUp.code(), 11);
        assert_eq!(GamepadButtonCode::DPadLeft.code(), 14);
        assert_eq!(GamepadButtonCode::Invalid.code(), -1);
    }

    #[test]
    fn test_playstation_aliases() {
        assert_eq!(GamepadButtonCode::CROSS, GamepadButtonCode::A);
        assert_eq!(GamepadButtonCode::CIRCLE, GamepadButtonCode::B);
        assert_eq!(GamepadButtonCode::SQUARE, GamepadButtonCode::X);
        assert_eq!(GamepadButtonCode::TRIANGLE, GamepadButtonCode::Y);
    }

    #[test]
    fn test_axis_codes_match_glfw() {
        assert_eq!(GamepadAxisCode::LeftX.code(), 0);
        assert_eq!(GamepadAxisCode::LeftTrigger.code(), 4);
        assert_eq!(GamepadAxisCode::RightTrigger.code(), 5);
    }

    #[test]
    fn test_sensor_codes_match_sdl() {
        assert_eq!(GamepadSensorCode::Unknown.code(), 0);
        assert_eq!(GamepadSensorCode::Accelerometer.code(), 1);
        assert_eq!(GamepadSensorCode::Gyroscope.code(), 2);
        assert_eq!(GamepadSensorCode::GyroscopeRight.code(), 6);
    }

    #[test]
    fn test_tables_are_injective() {
        let buttons = [
            GamepadButtonCode::Invalid,
            GamepadButtonCode::A,
            GamepadButtonCode::B,
            GamepadButtonCode::X,
            GamepadButtonCode::Y,
            GamepadButtonCode::LeftBumper,
            GamepadButtonCode::RightBumper,
            GamepadButtonCode::Back,
            GamepadButtonCode::Start,
            GamepadButtonCode::Guide,
            GamepadButtonCode::LeftThumb,
            GamepadButtonCode::RightThumb,
            GamepadButtonCode::DPadUp,
            GamepadButtonCode::DPadRight,
            GamepadButtonCode::DPadDown,
            GamepadButtonCode::DPadLeft,
        ];
        let mut codes: Vec<i32> = buttons.iter().map(|b| b.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), buttons.len());

        let sensors = [
            GamepadSensorCode::Invalid,
            GamepadSensorCode::Unknown,
            GamepadSensorCode::Accelerometer,
            GamepadSensorCode::Gyroscope,
            GamepadSensorCode::AccelerometerLeft,
            GamepadSensorCode::GyroscopeLeft,
            GamepadSensorCode::AccelerometerRight,
            GamepadSensorCode::GyroscopeRight,
        ];
        let mut codes: Vec<i32> = sensors.iter().map(|s| s.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), sensors.len());
    }
}
