//! Gamepad bridge: snapshot diffing into the controller state
//!
//! Pure forwarding with de-duplication. Each incoming snapshot is compared
//! button by button against the last-seen gamepad values; only differing
//! buttons are written into the store, and their bound visuals are updated
//! inline rather than waiting for the next fixed tick. That keeps physical
//! gamepad input on the low-latency path.

use crate::controller::{ControllerState, GameButton, VirtualController};
use crate::overlay::VirtualOverlay;

/// Applies gamepad snapshots into the shared controller state.
pub struct GamepadBridge {
    last_seen: ControllerState,
}

impl GamepadBridge {
    pub fn new() -> Self {
        Self {
            last_seen: ControllerState::new(),
        }
    }

    /// Apply one snapshot: write every button whose value differs from the
    /// last-seen gamepad value and refresh the visuals bound to it.
    pub fn apply(
        &mut self,
        snapshot: &ControllerState,
        controller: &mut VirtualController,
        overlay: &mut VirtualOverlay,
    ) {
        for button in GameButton::ALL {
            let value = snapshot.get(button);
            if value != self.last_seen.get(button) {
                controller.set(button, value);
                overlay.reflect_button(controller, button);
            }
        }
        self.last_seen = *snapshot;
    }
}

impl Default for GamepadBridge {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{VirtualButtonConfig, VirtualStickConfig};

    fn overlay() -> VirtualOverlay {
        VirtualOverlay::new(
            92.0,
            1.25,
            vec![VirtualStickConfig::main()],
            vec![VirtualButtonConfig::south()],
        )
    }

    #[test]
    fn test_changed_values_are_forwarded() {
        let mut bridge = GamepadBridge::new();
        let mut controller = VirtualController::new();
        let mut overlay = overlay();

        let mut snapshot = ControllerState::new();
        snapshot.set(GameButton::LeftX, 0.5);
        snapshot.set(GameButton::South, 1.0);
        bridge.apply(&snapshot, &mut controller, &mut overlay);

        assert_eq!(controller.get(GameButton::LeftX), 0.5);
        assert_eq!(controller.get(GameButton::South), 1.0);
        // Visuals bound to the changed buttons moved inline
        assert_eq!(overlay.sticks[0].knob().x, 0.5);
        assert!(overlay.buttons[0].pressed());
    }

    #[test]
    fn test_unchanged_values_are_not_rewritten() {
        let mut bridge = GamepadBridge::new();
        let mut controller = VirtualController::new();
        let mut overlay = overlay();

        let mut snapshot = ControllerState::new();
        snapshot.set(GameButton::LeftX, 0.5);
        bridge.apply(&snapshot, &mut controller, &mut overlay);

        // Another source takes over the axis between snapshots
        controller.set(GameButton::LeftX, -0.9);

        // Same gamepad values again: the bridge must not clobber the axis
        bridge.apply(&snapshot, &mut controller, &mut overlay);
        assert_eq!(controller.get(GameButton::LeftX), -0.9);
    }

    #[test]
    fn test_release_is_forwarded_once() {
        let mut bridge = GamepadBridge::new();
        let mut controller = VirtualController::new();
        let mut overlay = overlay();

        let mut pressed = ControllerState::new();
        pressed.set(GameButton::South, 1.0);
        bridge.apply(&pressed, &mut controller, &mut overlay);

        let released = ControllerState::new();
        bridge.apply(&released, &mut controller, &mut overlay);
        assert_eq!(controller.get(GameButton::South), 0.0);
        assert!(!overlay.buttons[0].pressed());
    }
}
