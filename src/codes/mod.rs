//! Input code tables
//!
//! Integer mappings for every enum-valued parameter crossing the native
//! boundary. Each table is kept byte-identical to the native input library it
//! was sourced from: keyboard, mouse, gamepad buttons and axes follow
//! `glfw3.h`; gamepad sensors follow `SDL_gamecontroller.h`. The two sources
//! use unrelated numbering, so the tables stay in separate modules and must
//! not be unified. A mismatch here is a silent behavioral bug, not a crash.

pub mod gamepad;
pub mod keyboard;
pub mod mouse;

pub use gamepad::{GamepadAxisCode, GamepadButtonCode, GamepadSensorCode};
pub use keyboard::KeyCode;
pub use mouse::MouseCode;
