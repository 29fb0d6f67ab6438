//! Virtual controller core
//!
//! Unifies keyboard, gamepad, and touch input into one polled button/axis
//! model with edge-triggered change events. The pieces:
//!
//! - [`button`]: the closed [`GameButton`] set with stable indices
//! - [`state`]: the raw value store all sources write into
//! - [`virtual_controller`]: per-tick change scan and listener registry
//! - [`keyboard`]: tick-driven key-to-axis/button mappers with decay
//! - [`layout`]: anchored placement of the on-screen visuals
//!
//! This module is pure logic with no rendering or host dependencies
//! beyond egui's key and geometry types.

pub mod button;
pub mod keyboard;
pub mod layout;
pub mod state;
pub mod virtual_controller;

pub use button::{ButtonIndexError, GameButton};
pub use keyboard::{KeySource, KeyboardButtonController, KeyboardStickController};
pub use layout::{Anchor, OverlayLayout, VirtualButtonConfig, VirtualStickConfig};
pub use state::ControllerState;
pub use virtual_controller::{ChangedEvent, ListenerId, VirtualController};
