//! On-screen virtual controller overlay
//!
//! The view layer: positions and redraws the stick/button visuals from
//! the current controller values, and routes pointer/touch gestures into
//! the store. It holds no state the core depends on; everything here can
//! be discarded and rebuilt from a controller and its configs.

pub mod button_view;
pub mod stick;

use egui::{Painter, Rect, Ui};

pub use button_view::VirtualButtonView;
pub use stick::VirtualStickView;

use crate::controller::{
    GameButton, OverlayLayout, VirtualButtonConfig, VirtualController, VirtualStickConfig,
};

/// The complete overlay: one view per configured stick and button.
pub struct VirtualOverlay {
    pub sticks: Vec<VirtualStickView>,
    pub buttons: Vec<VirtualButtonView>,
    bounds_inset: f32,
}

impl VirtualOverlay {
    /// Build views for the given configs. The layout bounds are the
    /// container inset by `button_radius * bounds_radius_scale` on every
    /// side, so visuals anchored to corners stay fully on screen.
    pub fn new(
        button_radius: f32,
        bounds_radius_scale: f32,
        sticks: Vec<VirtualStickConfig>,
        buttons: Vec<VirtualButtonConfig>,
    ) -> Self {
        Self {
            sticks: sticks
                .into_iter()
                .map(|config| VirtualStickView::new(config, button_radius))
                .collect(),
            buttons: buttons
                .into_iter()
                .map(|config| VirtualButtonView::new(config, button_radius))
                .collect(),
            bounds_inset: button_radius * bounds_radius_scale,
        }
    }

    /// Re-resolve every view's anchored position against the current
    /// container bounds. Run after each tick so the overlay tracks
    /// window resizes.
    pub fn layout(&mut self, container: Rect) {
        let bounds = container.shrink(self.bounds_inset);
        for view in &mut self.sticks {
            let pos = view.config().compute_pos(bounds);
            view.set_pos(pos);
        }
        for view in &mut self.buttons {
            let pos = view.config().compute_pos(bounds);
            view.set_pos(pos);
        }
    }

    /// Route this frame's pointer/touch gestures into the store.
    pub fn interact(&mut self, ui: &Ui, controller: &mut VirtualController) {
        for view in &mut self.sticks {
            view.interact(ui, controller);
        }
        for view in &mut self.buttons {
            view.interact(ui, controller);
        }
    }

    /// Refresh the visuals bound to `button` from the current controller
    /// values. Used by the gamepad bridge's inline update path.
    pub fn reflect_button(&mut self, controller: &VirtualController, button: GameButton) {
        for view in &mut self.sticks {
            if view.config().x_button == button || view.config().y_button == button {
                let x = controller.get(view.config().x_button);
                let y = controller.get(view.config().y_button);
                view.set_axes(x, y);
            }
        }
        for view in &mut self.buttons {
            if view.config().button == button {
                view.set_pressed(controller.get(button) != 0.0);
            }
        }
    }

    pub fn draw(&self, painter: &Painter) {
        for view in &self.sticks {
            view.draw(painter);
        }
        for view in &self.buttons {
            view.draw(painter);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn overlay() -> VirtualOverlay {
        VirtualOverlay::new(
            92.0,
            1.25,
            vec![VirtualStickConfig::main()],
            vec![VirtualButtonConfig::south()],
        )
    }

    #[test]
    fn test_layout_anchors_within_inset_bounds() {
        let mut overlay = overlay();
        let container = Rect::from_min_max(pos2(0.0, 0.0), pos2(800.0, 600.0));
        overlay.layout(container);

        let inset = 92.0 * 1.25;
        // Default stick: bottom-left; default button: bottom-right
        assert_eq!(overlay.sticks[0].pos(), pos2(inset, 600.0 - inset));
        assert_eq!(overlay.buttons[0].pos(), pos2(800.0 - inset, 600.0 - inset));
    }

    #[test]
    fn test_layout_tracks_resizes() {
        let mut overlay = overlay();
        overlay.layout(Rect::from_min_max(pos2(0.0, 0.0), pos2(800.0, 600.0)));
        let before = overlay.buttons[0].pos();

        overlay.layout(Rect::from_min_max(pos2(0.0, 0.0), pos2(1200.0, 600.0)));
        let after = overlay.buttons[0].pos();
        assert_eq!(after.x - before.x, 400.0);
        assert_eq!(after.y, before.y);
    }

    #[test]
    fn test_reflect_updates_only_bound_views() {
        let mut overlay = overlay();
        let mut controller = VirtualController::new();

        controller.set(GameButton::LeftX, 0.5);
        controller.set(GameButton::LeftY, -0.5);
        overlay.reflect_button(&controller, GameButton::LeftX);
        assert_eq!(overlay.sticks[0].knob(), vec2(0.5, -0.5));
        assert!(!overlay.buttons[0].pressed());

        controller.set(GameButton::South, 1.0);
        overlay.reflect_button(&controller, GameButton::South);
        assert!(overlay.buttons[0].pressed());
    }
}
