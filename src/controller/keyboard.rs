//! Keyboard-to-controller mappers
//!
//! Translate live key state into controller values once per fixed tick.
//! Keys are polled, not event-driven, so a mapper only ever sees the state
//! at tick time. Each mapper tracks a `used_keyboard` flag that arbitrates
//! ownership of its buttons: while the flag is set the mapper writes into
//! the store, otherwise it stays silent so touch and gamepad values are
//! left alone.
//!
//! The stick mapper smooths key presses into analog-like values: held keys
//! step the accumulator by [`KEY_STEP`] per tick, released axes halve
//! toward zero each tick and snap to exactly 0.0 once below
//! [`ALMOST_ZERO`]. The flag clears only after the decay has fully
//! settled, so residual motion is not discarded on key release.

use egui::Key;

use super::button::GameButton;
use super::layout::{VirtualButtonConfig, VirtualStickConfig};
use super::virtual_controller::VirtualController;

/// Accumulator change per tick while a direction key is held.
pub const KEY_STEP: f32 = 0.125;

/// Values at or below this magnitude snap to exactly zero, so the halving
/// decay terminates instead of approaching zero asymptotically.
pub const ALMOST_ZERO: f32 = 1e-7;

/// Live boolean key state, polled at tick time.
///
/// The client implements this over `egui::InputState`; tests use a set of
/// held keys.
pub trait KeySource {
    fn is_down(&self, key: Key) -> bool;
}

impl KeySource for egui::InputState {
    fn is_down(&self, key: Key) -> bool {
        self.key_down(key)
    }
}

fn normalize_almost_zero(value: f32) -> f32 {
    if value.abs() <= ALMOST_ZERO {
        0.0
    } else {
        value
    }
}

/// Maps four direction keys onto a stick's two axes with smoothing.
pub struct KeyboardStickController {
    config: VirtualStickConfig,
    x: f32,
    y: f32,
    used_keyboard: bool,
}

impl KeyboardStickController {
    pub fn new(config: VirtualStickConfig) -> Self {
        Self {
            config,
            x: 0.0,
            y: 0.0,
            used_keyboard: false,
        }
    }

    pub fn config(&self) -> &VirtualStickConfig {
        &self.config
    }

    /// Smoothed x accumulator, -1.0..=1.0.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Smoothed y accumulator, -1.0..=1.0 (positive is screen-down).
    pub fn y(&self) -> f32 {
        self.y
    }

    /// True while the keyboard owns this stick's buttons.
    pub fn used_keyboard(&self) -> bool {
        self.used_keyboard
    }

    /// Advance one tick: step or decay the accumulators from the polled
    /// key state, then write both axes into the store while the keyboard
    /// is the active source.
    ///
    /// Returns true if the axes were written this tick, so the caller can
    /// refresh the stick visual. The final write of a decay (the one that
    /// lands on zero) still returns true even though ownership is
    /// released afterwards.
    pub fn update(&mut self, keys: &dyn KeySource, controller: &mut VirtualController) -> bool {
        let key_pressed = keys.is_down(self.config.left)
            || keys.is_down(self.config.right)
            || keys.is_down(self.config.up)
            || keys.is_down(self.config.down);
        if key_pressed {
            self.used_keyboard = true;
        }

        if keys.is_down(self.config.left) {
            self.x -= KEY_STEP;
        } else if keys.is_down(self.config.right) {
            self.x += KEY_STEP;
        } else {
            self.x /= 2.0;
        }

        if keys.is_down(self.config.up) {
            self.y -= KEY_STEP;
        } else if keys.is_down(self.config.down) {
            self.y += KEY_STEP;
        } else {
            self.y /= 2.0;
        }

        self.x = normalize_almost_zero(self.x.clamp(-1.0, 1.0));
        self.y = normalize_almost_zero(self.y.clamp(-1.0, 1.0));

        let wrote = self.used_keyboard;
        if self.used_keyboard {
            controller.set(self.config.x_button, self.x);
            controller.set(self.config.y_button, self.y);
        }
        // Hand control back only once fully decayed
        if self.used_keyboard && self.x == 0.0 && self.y == 0.0 && !key_pressed {
            self.used_keyboard = false;
        }
        wrote
    }
}

/// Maps one key onto a discrete button.
pub struct KeyboardButtonController {
    config: VirtualButtonConfig,
    pressed: bool,
    used_keyboard: bool,
}

impl KeyboardButtonController {
    pub fn new(config: VirtualButtonConfig) -> Self {
        Self {
            config,
            pressed: false,
            used_keyboard: false,
        }
    }

    pub fn config(&self) -> &VirtualButtonConfig {
        &self.config
    }

    /// Key state seen at the last tick.
    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// True while the keyboard owns this button.
    pub fn used_keyboard(&self) -> bool {
        self.used_keyboard
    }

    /// Advance one tick: write 1.0 while the key is held and 0.0 on the
    /// tick it is released, then release ownership.
    ///
    /// Returns true if the button was written this tick, so the caller
    /// can refresh its visual. The release tick itself still writes.
    pub fn update(&mut self, keys: &dyn KeySource, controller: &mut VirtualController) -> bool {
        self.pressed = keys.is_down(self.config.key);
        if self.pressed {
            self.used_keyboard = true;
        }
        let wrote = self.used_keyboard;
        if self.used_keyboard {
            controller.set(self.config.button, if self.pressed { 1.0 } else { 0.0 });
        }
        if !self.pressed {
            self.used_keyboard = false;
        }
        wrote
    }
}
