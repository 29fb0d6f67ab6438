//! Virtual stick visual and its drag gesture handling

use egui::{Color32, Painter, Pos2, Rect, Sense, Stroke, Ui, Vec2};

use crate::controller::{VirtualController, VirtualStickConfig};

/// Clamp a vector to the unit circle, preserving direction.
pub fn clamp_to_unit_circle(v: Vec2) -> Vec2 {
    let magnitude = v.length();
    if magnitude > 1.0 {
        v / magnitude
    } else {
        v
    }
}

/// On-screen stick: an outer ring plus a knob that tracks the current
/// axis values. Dragging anywhere on the hit area drives both axes;
/// releasing snaps them straight back to (0, 0) with no decay, unlike the
/// keyboard path.
pub struct VirtualStickView {
    config: VirtualStickConfig,
    radius: f32,
    pos: Pos2,
    knob: Vec2,
    drag_start: Option<Pos2>,
}

impl VirtualStickView {
    pub fn new(config: VirtualStickConfig, radius: f32) -> Self {
        Self {
            config,
            radius,
            pos: Pos2::ZERO,
            knob: Vec2::ZERO,
            drag_start: None,
        }
    }

    pub fn config(&self) -> &VirtualStickConfig {
        &self.config
    }

    pub fn pos(&self) -> Pos2 {
        self.pos
    }

    pub fn set_pos(&mut self, pos: Pos2) {
        self.pos = pos;
    }

    /// Knob offset in unit coordinates (clamped to the unit circle).
    pub fn knob(&self) -> Vec2 {
        self.knob
    }

    /// Move the knob to reflect externally written axis values
    /// (keyboard or gamepad). Does not write into the store.
    pub fn set_axes(&mut self, x: f32, y: f32) {
        self.knob = clamp_to_unit_circle(Vec2::new(x, y));
    }

    /// Process pointer/touch gestures over this stick for the current
    /// frame, writing axis values into the store while a drag is active.
    pub fn interact(&mut self, ui: &Ui, controller: &mut VirtualController) {
        let hit = Rect::from_center_size(self.pos, Vec2::splat(self.radius * 3.0));
        let id = ui.id().with(("virtual-stick", self.config.x_button.index()));
        let response = ui.interact(hit, id, Sense::drag());

        if response.is_pointer_button_down_on() || response.dragged() {
            if let Some(pointer) = response.interact_pointer_pos() {
                let start = *self.drag_start.get_or_insert(pointer);
                self.apply_drag(pointer - start, controller);
            }
        } else if self.drag_start.is_some() {
            self.drag_end(controller);
        }
    }

    /// Convert a drag delta from the gesture start into axis values:
    /// direction is kept, magnitude is scaled by the stick radius and
    /// clamped to the unit circle.
    pub fn apply_drag(&mut self, delta: Vec2, controller: &mut VirtualController) {
        let scaled = clamp_to_unit_circle(delta / self.radius);
        self.knob = scaled;
        controller.set(self.config.x_button, scaled.x);
        controller.set(self.config.y_button, scaled.y);
    }

    /// End the gesture: both axes snap to zero in the same tick.
    pub fn drag_end(&mut self, controller: &mut VirtualController) {
        self.drag_start = None;
        self.apply_drag(Vec2::ZERO, controller);
    }

    pub fn draw(&self, painter: &Painter) {
        let outer_radius = self.radius * 1.5;
        painter.circle_filled(
            self.pos,
            outer_radius,
            Color32::from_rgba_unmultiplied(220, 220, 220, 128),
        );
        painter.circle_stroke(
            self.pos,
            outer_radius,
            Stroke::new(1.0, Color32::from_gray(100)),
        );

        let knob_pos = self.pos + self.knob * self.radius;
        painter.circle_filled(
            knob_pos,
            self.radius,
            Color32::from_rgba_unmultiplied(235, 235, 235, 191),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::GameButton;
    use egui::vec2;

    fn stick() -> VirtualStickView {
        VirtualStickView::new(VirtualStickConfig::main(), 100.0)
    }

    #[test]
    fn test_clamp_keeps_interior_points() {
        let v = vec2(0.3, -0.4);
        assert_eq!(clamp_to_unit_circle(v), v);
    }

    #[test]
    fn test_clamp_projects_onto_circle() {
        let clamped = clamp_to_unit_circle(vec2(3.0, 4.0));
        assert!((clamped.length() - 1.0).abs() < 1e-6);
        // Direction preserved
        assert!((clamped.x - 0.6).abs() < 1e-6);
        assert!((clamped.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_drag_writes_scaled_axes() {
        let mut view = stick();
        let mut controller = VirtualController::new();

        view.apply_drag(vec2(50.0, -25.0), &mut controller);
        assert_eq!(controller.get(GameButton::LeftX), 0.5);
        assert_eq!(controller.get(GameButton::LeftY), -0.25);
        assert_eq!(view.knob(), vec2(0.5, -0.25));
    }

    #[test]
    fn test_long_drag_clamps_to_unit_circle() {
        let mut view = stick();
        let mut controller = VirtualController::new();

        view.apply_drag(vec2(300.0, 400.0), &mut controller);
        let x = controller.get(GameButton::LeftX);
        let y = controller.get(GameButton::LeftY);
        assert!(((x * x + y * y).sqrt() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_drag_end_snaps_to_zero_immediately() {
        let mut view = stick();
        let mut controller = VirtualController::new();

        view.apply_drag(vec2(80.0, 0.0), &mut controller);
        view.drag_end(&mut controller);

        assert_eq!(controller.get(GameButton::LeftX), 0.0);
        assert_eq!(controller.get(GameButton::LeftY), 0.0);
        assert_eq!(view.knob(), Vec2::ZERO);
    }

    #[test]
    fn test_set_axes_updates_visual_only() {
        let mut view = stick();
        let controller = VirtualController::new();

        view.set_axes(0.25, 0.75);
        assert_eq!(view.knob(), vec2(0.25, 0.75));
        // Reflecting a value must not write back into the store
        assert_eq!(controller.get(GameButton::LeftX), 0.0);
    }
}
