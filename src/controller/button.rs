//! Canonical button and axis identifiers for the virtual controller
//!
//! Every input source (keyboard, gamepad, touch) and every consumer goes
//! through this closed set. Each identifier has a stable index into the
//! fixed-size state array, and the enumeration order of [`GameButton::ALL`]
//! is the order in which change events are scanned and fired.

use thiserror::Error;

/// One named element of the controller surface: either a discrete button
/// (values 0.0 / 1.0) or an analog axis (values in -1.0..=1.0).
///
/// Face buttons are named positionally (south is the bottom one), so the
/// mapping from physical gamepads is layout-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum GameButton {
    DpadLeft,
    DpadRight,
    DpadUp,
    DpadDown,
    South,
    East,
    West,
    North,
    Select,
    Start,
    System,
    L1,
    R1,
    L2,
    R2,
    L3,
    R3,
    LeftX,
    LeftY,
    RightX,
    RightY,
}

/// Error returned when converting an out-of-range index to a [`GameButton`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("button index {0} out of range (0..{count})", count = GameButton::COUNT)]
pub struct ButtonIndexError(pub usize);

impl GameButton {
    /// Number of buttons in the fixed set (the state array length).
    pub const COUNT: usize = 21;

    /// All buttons in scan order.
    pub const ALL: [GameButton; GameButton::COUNT] = [
        GameButton::DpadLeft,
        GameButton::DpadRight,
        GameButton::DpadUp,
        GameButton::DpadDown,
        GameButton::South,
        GameButton::East,
        GameButton::West,
        GameButton::North,
        GameButton::Select,
        GameButton::Start,
        GameButton::System,
        GameButton::L1,
        GameButton::R1,
        GameButton::L2,
        GameButton::R2,
        GameButton::L3,
        GameButton::R3,
        GameButton::LeftX,
        GameButton::LeftY,
        GameButton::RightX,
        GameButton::RightY,
    ];

    /// Stable index into the state array.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// True for the four stick axes (`LeftX`/`LeftY`/`RightX`/`RightY`).
    pub const fn is_stick_axis(self) -> bool {
        matches!(
            self,
            GameButton::LeftX | GameButton::LeftY | GameButton::RightX | GameButton::RightY
        )
    }
}

impl TryFrom<usize> for GameButton {
    type Error = ButtonIndexError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        GameButton::ALL
            .get(index)
            .copied()
            .ok_or(ButtonIndexError(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_stable_and_dense() {
        for (position, button) in GameButton::ALL.iter().enumerate() {
            assert_eq!(button.index(), position);
        }
    }

    #[test]
    fn test_try_from_round_trip() {
        for button in GameButton::ALL {
            assert_eq!(GameButton::try_from(button.index()), Ok(button));
        }
    }

    #[test]
    fn test_try_from_out_of_range_fails() {
        assert_eq!(
            GameButton::try_from(GameButton::COUNT),
            Err(ButtonIndexError(GameButton::COUNT))
        );
    }

    #[test]
    fn test_stick_axis_classification() {
        assert!(GameButton::LeftX.is_stick_axis());
        assert!(GameButton::RightY.is_stick_axis());
        assert!(!GameButton::South.is_stick_axis());
        assert!(!GameButton::L2.is_stick_axis());
    }
}
