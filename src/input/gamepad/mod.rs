//! Gamepad input support using gilrs
//!
//! A dedicated polling thread folds raw gilrs events into snapshots of
//! the fixed button set ([`provider`]); the UI thread diffs and applies
//! them ([`bridge`]); [`buttons`] holds the vocabulary mapping.

pub mod bridge;
pub mod buttons;
pub mod provider;

pub use bridge::GamepadBridge;
pub use provider::GilrsProvider;
