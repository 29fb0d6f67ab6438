//! VirtualController - unified button/axis state with change notification
//!
//! All input sources (keyboard mappers, gamepad bridge, touch handlers)
//! write into the same [`ControllerState`]. Once per fixed tick,
//! [`VirtualController::update`] diffs the current values against the
//! previous-tick snapshot and fires one change event per differing button,
//! in [`GameButton::ALL`] scan order, before copying current into the
//! snapshot for the next comparison.

use super::button::GameButton;
use super::state::ControllerState;

/// Transient change notification: the button and its old/new raw values.
///
/// One record per controller is reused across firings; listeners receive a
/// shared borrow and must copy out anything they want to retain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangedEvent {
    pub button: GameButton,
    pub old: f32,
    pub new: f32,
}

impl ChangedEvent {
    /// Boolean view of the old value (nonzero means pressed).
    pub fn old_bool(&self) -> bool {
        self.old != 0.0
    }

    /// Boolean view of the new value (nonzero means pressed).
    pub fn new_bool(&self) -> bool {
        self.new != 0.0
    }
}

/// Handle returned by listener registration, used to deregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(usize);

struct Listener {
    id: ListenerId,
    button: GameButton,
    callback: Box<dyn FnMut(&ChangedEvent)>,
}

/// Unified controller state plus edge-triggered change notification.
///
/// Single-threaded by design: every write and the change scan run on the
/// one logical thread that drives the client, so no locking is needed.
pub struct VirtualController {
    current: ControllerState,
    previous: ControllerState,
    changed_event: ChangedEvent,
    listeners: Vec<Listener>,
    next_listener_id: usize,
}

impl VirtualController {
    pub fn new() -> Self {
        Self {
            current: ControllerState::new(),
            previous: ControllerState::new(),
            changed_event: ChangedEvent {
                button: GameButton::LeftX,
                old: 0.0,
                new: 0.0,
            },
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// Current raw value for a button.
    pub fn get(&self, button: GameButton) -> f32 {
        self.current.get(button)
    }

    /// Write a raw value. Visible immediately; the last writer before the
    /// tick scan wins.
    pub fn set(&mut self, button: GameButton, value: f32) {
        self.current.set(button, value);
    }

    pub fn lx(&self) -> f32 {
        self.get(GameButton::LeftX)
    }

    pub fn ly(&self) -> f32 {
        self.get(GameButton::LeftY)
    }

    pub fn rx(&self) -> f32 {
        self.get(GameButton::RightX)
    }

    pub fn ry(&self) -> f32 {
        self.get(GameButton::RightY)
    }

    /// Register a listener for any value change of `button`.
    pub fn changed<F>(&mut self, button: GameButton, callback: F) -> ListenerId
    where
        F: FnMut(&ChangedEvent) + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push(Listener {
            id,
            button,
            callback: Box::new(callback),
        });
        id
    }

    /// Register a listener fired when `button` transitions from released
    /// to pressed (old == 0, new != 0).
    pub fn down<F>(&mut self, button: GameButton, mut callback: F) -> ListenerId
    where
        F: FnMut() + 'static,
    {
        self.changed(button, move |event| {
            if !event.old_bool() && event.new_bool() {
                callback();
            }
        })
    }

    /// Register a listener fired when `button` transitions from pressed
    /// to released (old != 0, new == 0).
    pub fn up<F>(&mut self, button: GameButton, mut callback: F) -> ListenerId
    where
        F: FnMut() + 'static,
    {
        self.changed(button, move |event| {
            if event.old_bool() && !event.new_bool() {
                callback();
            }
        })
    }

    /// Deregister a listener. Returns false if the id was already removed.
    ///
    /// Part of the disposal contract: callers that outlive their interest
    /// in a button must remove their listeners instead of leaving stale
    /// callbacks behind.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|listener| listener.id != id);
        self.listeners.len() != before
    }

    /// Run the per-tick change scan.
    ///
    /// For every button whose value differs from the previous-tick
    /// snapshot, all matching listeners are invoked synchronously before
    /// the scan moves to the next button. Afterwards the current state
    /// becomes the new snapshot, so calling this again with no writes in
    /// between fires nothing.
    pub fn update(&mut self) {
        for button in GameButton::ALL {
            let old = self.previous.get(button);
            let new = self.current.get(button);
            if old != new {
                self.changed_event = ChangedEvent { button, old, new };
                for listener in self.listeners.iter_mut() {
                    if listener.button == button {
                        (listener.callback)(&self.changed_event);
                    }
                }
            }
        }
        self.previous = self.current;
    }
}

impl Default for VirtualController {
    fn default() -> Self {
        Self::new()
    }
}
