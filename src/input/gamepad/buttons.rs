//! Mapping from gilrs buttons and axes to [`GameButton`]
//!
//! Face buttons map positionally: gilrs reports physical positions
//! (South, East, North, West) and the controller's button set is also
//! positional, so no layout relabeling is needed.
//!
//! Stick Y axes are inverted on ingest. gilrs reports up as positive,
//! while every other input source here works in screen coordinates where
//! down is positive; negating at this single seam keeps keyboard, touch,
//! and gamepad agreeing on the same convention.

use gilrs::{Axis, Button};

use crate::controller::GameButton;

/// Map a gilrs button to its controller counterpart.
///
/// Returns `None` for buttons outside the fixed set (vendor extras,
/// unknown codes).
pub fn map_button(button: Button) -> Option<GameButton> {
    match button {
        Button::South => Some(GameButton::South),
        Button::East => Some(GameButton::East),
        Button::North => Some(GameButton::North),
        Button::West => Some(GameButton::West),

        Button::LeftTrigger => Some(GameButton::L1),
        Button::RightTrigger => Some(GameButton::R1),
        Button::LeftTrigger2 => Some(GameButton::L2),
        Button::RightTrigger2 => Some(GameButton::R2),

        Button::Select => Some(GameButton::Select),
        Button::Start => Some(GameButton::Start),
        Button::Mode => Some(GameButton::System),

        Button::LeftThumb => Some(GameButton::L3),
        Button::RightThumb => Some(GameButton::R3),

        Button::DPadUp => Some(GameButton::DpadUp),
        Button::DPadDown => Some(GameButton::DpadDown),
        Button::DPadLeft => Some(GameButton::DpadLeft),
        Button::DPadRight => Some(GameButton::DpadRight),

        _ => None,
    }
}

/// Map a gilrs axis to its controller counterpart, with the sign flip to
/// apply on ingest.
pub fn map_axis(axis: Axis) -> Option<(GameButton, bool)> {
    match axis {
        Axis::LeftStickX => Some((GameButton::LeftX, false)),
        Axis::LeftStickY => Some((GameButton::LeftY, true)),
        Axis::RightStickX => Some((GameButton::RightX, false)),
        Axis::RightStickY => Some((GameButton::RightY, true)),
        // Trigger axes on pads that report them as analog
        Axis::LeftZ => Some((GameButton::L2, false)),
        Axis::RightZ => Some((GameButton::R2, false)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_buttons_map_positionally() {
        assert_eq!(map_button(Button::South), Some(GameButton::South));
        assert_eq!(map_button(Button::East), Some(GameButton::East));
        assert_eq!(map_button(Button::North), Some(GameButton::North));
        assert_eq!(map_button(Button::West), Some(GameButton::West));
    }

    #[test]
    fn test_dpad_and_menu_buttons() {
        assert_eq!(map_button(Button::DPadLeft), Some(GameButton::DpadLeft));
        assert_eq!(map_button(Button::DPadUp), Some(GameButton::DpadUp));
        assert_eq!(map_button(Button::Select), Some(GameButton::Select));
        assert_eq!(map_button(Button::Mode), Some(GameButton::System));
    }

    #[test]
    fn test_unknown_button_is_ignored() {
        assert_eq!(map_button(Button::Unknown), None);
    }

    #[test]
    fn test_stick_y_axes_invert() {
        assert_eq!(map_axis(Axis::LeftStickX), Some((GameButton::LeftX, false)));
        assert_eq!(map_axis(Axis::LeftStickY), Some((GameButton::LeftY, true)));
        assert_eq!(map_axis(Axis::RightStickY), Some((GameButton::RightY, true)));
        assert_eq!(map_axis(Axis::LeftZ), Some((GameButton::L2, false)));
    }
}
