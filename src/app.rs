//! Client application: scene, fixed input tick, and wiring
//!
//! The window repaints at whatever rate the host gives us, but input is
//! sampled on a fixed tick (60 Hz by default). Each frame: gamepad
//! snapshots are drained and applied immediately (the low-latency path),
//! pointer/touch gestures are routed into the store, then every tick that
//! came due runs the keyboard mappers, the change scan, and the overlay
//! re-layout.

use std::time::{Duration, Instant};

use tracing::info;

use crate::config::AppConfig;
use crate::controller::{
    KeyboardButtonController, KeyboardStickController, VirtualButtonConfig, VirtualController,
    VirtualStickConfig,
};
use crate::input::gamepad::{GamepadBridge, GilrsProvider};
use crate::overlay::VirtualOverlay;
use crate::shared;

/// At most this many catch-up ticks run in one frame, so a long stall
/// cannot queue an unbounded tick burst.
const MAX_CATCH_UP_TICKS: u32 = 4;

/// Fixed-rate scheduler decoupled from the render callback.
pub struct FixedTicker {
    period: Duration,
    next: Option<Instant>,
}

impl FixedTicker {
    pub fn new(hz: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / hz.max(1),
            next: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of ticks due at `now`, capped at [`MAX_CATCH_UP_TICKS`].
    /// Backlog beyond the cap is dropped, not deferred.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let next = self.next.get_or_insert(now);
        let mut ticks = 0;
        while *next <= now && ticks < MAX_CATCH_UP_TICKS {
            *next += self.period;
            ticks += 1;
        }
        if *next <= now {
            *next = now + self.period;
        }
        ticks
    }
}

/// The client app: shared text plus the virtual controller overlay.
pub struct VpadApp {
    controller: VirtualController,
    overlay: VirtualOverlay,
    key_sticks: Vec<KeyboardStickController>,
    key_buttons: Vec<KeyboardButtonController>,
    provider: Option<GilrsProvider>,
    bridge: GamepadBridge,
    ticker: FixedTicker,
}

impl VpadApp {
    /// Default layout: one left-analog stick and one south button.
    pub fn new(config: &AppConfig) -> Self {
        Self::with_layout(
            config,
            vec![VirtualStickConfig::main()],
            vec![VirtualButtonConfig::south()],
        )
    }

    /// Build the app with an explicit set of sticks and buttons.
    pub fn with_layout(
        config: &AppConfig,
        sticks: Vec<VirtualStickConfig>,
        buttons: Vec<VirtualButtonConfig>,
    ) -> Self {
        let key_sticks = sticks
            .iter()
            .cloned()
            .map(KeyboardStickController::new)
            .collect();
        let key_buttons = buttons
            .iter()
            .cloned()
            .map(KeyboardButtonController::new)
            .collect();

        let overlay = VirtualOverlay::new(
            config.overlay.button_radius,
            config.overlay.bounds_radius_scale,
            sticks,
            buttons,
        );

        let provider = if config.gamepad.enabled {
            Some(GilrsProvider::start())
        } else {
            info!("gamepad input disabled by configuration");
            None
        };

        Self {
            controller: VirtualController::new(),
            overlay,
            key_sticks,
            key_buttons,
            provider,
            bridge: GamepadBridge::new(),
            ticker: FixedTicker::new(config.tick_hz),
        }
    }

    pub fn controller(&self) -> &VirtualController {
        &self.controller
    }

    /// Mutable access for listener registration (`changed`/`down`/`up`).
    pub fn controller_mut(&mut self) -> &mut VirtualController {
        &mut self.controller
    }

    /// Run one fixed tick: keyboard mappers, change scan, overlay layout.
    fn run_tick(&mut self, ctx: &egui::Context, bounds: egui::Rect) {
        ctx.input(|input| {
            for (mapper, view) in self.key_sticks.iter_mut().zip(self.overlay.sticks.iter_mut()) {
                if mapper.update(input, &mut self.controller) {
                    view.set_axes(mapper.x(), mapper.y());
                }
            }
            for (mapper, view) in self
                .key_buttons
                .iter_mut()
                .zip(self.overlay.buttons.iter_mut())
            {
                if mapper.update(input, &mut self.controller) {
                    view.set_pressed(mapper.pressed());
                }
            }
        });

        self.controller.update();
        self.overlay.layout(bounds);
    }
}

impl eframe::App for VpadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let bounds = ui.max_rect();
            // First frame: views need a position before they can be hit
            self.overlay.layout(bounds);

            // Gamepad snapshots apply outside the fixed tick
            if let Some(provider) = &self.provider {
                while let Some(snapshot) = provider.try_recv() {
                    self.bridge
                        .apply(&snapshot, &mut self.controller, &mut self.overlay);
                }
            }

            // Pointer/touch gestures, interleaved between ticks
            self.overlay.interact(ui, &mut self.controller);

            let due = self.ticker.due_ticks(Instant::now());
            for _ in 0..due {
                self.run_tick(ctx, bounds);
            }

            ui.heading(format!("Text: {}", shared::SHARED_MESSAGE));
            self.overlay.draw(ui.painter());
        });

        ctx.request_repaint();
    }
}

/// Run the client window. Blocks until it is closed.
pub fn run(config: AppConfig) -> anyhow::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("vpad")
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "vpad",
        native_options,
        Box::new(move |_cc| Ok(Box::new(VpadApp::new(&config)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run client: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_call_yields_one_tick() {
        let mut ticker = FixedTicker::new(60);
        let now = Instant::now();
        assert_eq!(ticker.due_ticks(now), 1);
        assert_eq!(ticker.due_ticks(now), 0);
    }

    #[test]
    fn test_ticks_accumulate_with_elapsed_time() {
        let mut ticker = FixedTicker::new(60);
        let start = Instant::now();
        ticker.due_ticks(start);

        let period = ticker.period();
        assert_eq!(ticker.due_ticks(start + period), 1);
        assert_eq!(ticker.due_ticks(start + period * 3), 2);
    }

    #[test]
    fn test_catch_up_is_capped() {
        let mut ticker = FixedTicker::new(60);
        let start = Instant::now();
        ticker.due_ticks(start);

        // A long stall yields at most the cap, and the backlog is dropped
        let late = start + ticker.period() * 100;
        assert_eq!(ticker.due_ticks(late), MAX_CATCH_UP_TICKS);
        assert_eq!(ticker.due_ticks(late), 0);
    }
}
