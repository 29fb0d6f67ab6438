//! Overlay placement: anchors and stick/button configurations
//!
//! Sticks and buttons are positioned relative to the window by a named
//! anchor point plus a pixel offset, so the overlay stays correctly placed
//! when the window is resized. Both config shapes share the anchoring
//! behavior through [`OverlayLayout`].

use egui::{Key, Pos2, Rect, Vec2};

use super::button::GameButton;

/// Named reference point within a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Anchor {
    /// Resolve the anchor against a rectangle.
    pub fn anchored_point(self, rect: Rect) -> Pos2 {
        let x = match self {
            Anchor::TopLeft | Anchor::CenterLeft | Anchor::BottomLeft => rect.left(),
            Anchor::TopCenter | Anchor::Center | Anchor::BottomCenter => rect.center().x,
            Anchor::TopRight | Anchor::CenterRight | Anchor::BottomRight => rect.right(),
        };
        let y = match self {
            Anchor::TopLeft | Anchor::TopCenter | Anchor::TopRight => rect.top(),
            Anchor::CenterLeft | Anchor::Center | Anchor::CenterRight => rect.center().y,
            Anchor::BottomLeft | Anchor::BottomCenter | Anchor::BottomRight => rect.bottom(),
        };
        Pos2::new(x, y)
    }
}

/// Anchored placement shared by stick and button configurations.
pub trait OverlayLayout {
    fn anchor(&self) -> Anchor;
    fn offset(&self) -> Vec2;

    /// Screen position within the given container bounds.
    fn compute_pos(&self, bounds: Rect) -> Pos2 {
        self.anchor().anchored_point(bounds) + self.offset()
    }
}

/// A virtual stick: four direction keys and the two axes it drives.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualStickConfig {
    pub left: Key,
    pub right: Key,
    pub up: Key,
    pub down: Key,
    pub x_button: GameButton,
    pub y_button: GameButton,
    pub anchor: Anchor,
    pub offset: Vec2,
}

impl VirtualStickConfig {
    /// The default left-analog stick: arrow keys, bottom-left corner.
    pub fn main() -> Self {
        Self {
            left: Key::ArrowLeft,
            right: Key::ArrowRight,
            up: Key::ArrowUp,
            down: Key::ArrowDown,
            x_button: GameButton::LeftX,
            y_button: GameButton::LeftY,
            anchor: Anchor::BottomLeft,
            offset: Vec2::ZERO,
        }
    }
}

impl OverlayLayout for VirtualStickConfig {
    fn anchor(&self) -> Anchor {
        self.anchor
    }

    fn offset(&self) -> Vec2 {
        self.offset
    }
}

/// A virtual button: one key and the button it drives.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualButtonConfig {
    pub key: Key,
    pub button: GameButton,
    pub anchor: Anchor,
    pub offset: Vec2,
}

impl VirtualButtonConfig {
    /// The default action button: space bar, bottom-right corner.
    pub fn south() -> Self {
        Self {
            key: Key::Space,
            button: GameButton::South,
            anchor: Anchor::BottomRight,
            offset: Vec2::ZERO,
        }
    }
}

impl OverlayLayout for VirtualButtonConfig {
    fn anchor(&self) -> Anchor {
        self.anchor
    }

    fn offset(&self) -> Vec2 {
        self.offset
    }
}
