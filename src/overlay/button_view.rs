//! Virtual button visual and its press gesture handling

use egui::{Color32, Painter, Pos2, Rect, Sense, Ui, Vec2};

use crate::controller::{VirtualButtonConfig, VirtualController};

/// On-screen button: a circle that brightens while pressed. Pressing the
/// hit area writes 1.0 into the store; releasing anywhere writes 0.0.
pub struct VirtualButtonView {
    config: VirtualButtonConfig,
    radius: f32,
    pos: Pos2,
    pressed: bool,
    touch_held: bool,
}

impl VirtualButtonView {
    pub fn new(config: VirtualButtonConfig, radius: f32) -> Self {
        Self {
            config,
            radius,
            pos: Pos2::ZERO,
            pressed: false,
            touch_held: false,
        }
    }

    pub fn config(&self) -> &VirtualButtonConfig {
        &self.config
    }

    pub fn pos(&self) -> Pos2 {
        self.pos
    }

    pub fn set_pos(&mut self, pos: Pos2) {
        self.pos = pos;
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// Reflect an externally written value (keyboard or gamepad) in the
    /// visual. Does not write into the store.
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Process pointer/touch gestures over this button for the current
    /// frame. Only edges write into the store.
    pub fn interact(&mut self, ui: &Ui, controller: &mut VirtualController) {
        let hit = Rect::from_center_size(self.pos, Vec2::splat(self.radius * 2.0));
        let id = ui.id().with(("virtual-button", self.config.button.index()));
        let response = ui.interact(hit, id, Sense::drag());

        let held = response.is_pointer_button_down_on() || response.dragged();
        if held != self.touch_held {
            self.touch_held = held;
            self.apply_press(held, controller);
        }
    }

    /// Write a press or release into the store and update the visual.
    pub fn apply_press(&mut self, pressed: bool, controller: &mut VirtualController) {
        self.pressed = pressed;
        controller.set(self.config.button, if pressed { 1.0 } else { 0.0 });
    }

    pub fn draw(&self, painter: &Painter) {
        let alpha = if self.pressed { 255 } else { 204 };
        painter.circle_filled(
            self.pos,
            self.radius,
            Color32::from_rgba_unmultiplied(235, 235, 235, alpha),
        );
    }
}
