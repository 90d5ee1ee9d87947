//! Mouse button codes
//!
//! Sourced from glfw3.h. Buttons 0..7, with the usual Left/Right/Middle
//! aliases provided as associated constants (Rust enums cannot repeat
//! discriminants).

/// Mouse button code passed by value across the boundary as its integer code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum MouseCode {
    Button0 = 0,
    Button1 = 1,
    Button2 = 2,
    Button3 = 3,
    Button4 = 4,
    Button5 = 5,
    Button6 = 6,
    Button7 = 7,
}

impl MouseCode {
    pub const LAST: MouseCode = MouseCode::Button7;
    pub const LEFT: MouseCode = MouseCode::Button0;
    pub const RIGHT: MouseCode = MouseCode::Button1;
    pub const MIDDLE: MouseCode = MouseCode::Button2;

    /// The integer code as it crosses the boundary
    pub fn code(self) -> i32 {
        self as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_aliases() {
        assert_eq!(MouseCode::LEFT, MouseCode::Button0);
        assert_eq!(MouseCode::RIGHT, MouseCode::Button1);
        assert_eq!(MouseCode::MIDDLE, MouseCode::Button2);
        assert_eq!(MouseCode::LAST.code(), 7);
    }
}
