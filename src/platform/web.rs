//! Browser bindings
//!
//! JavaScript owns the canvas, audio context and input listeners. It feeds
//! frame times and thrust state in and draws the JSON snapshot that comes out.

use wasm_bindgen::prelude::*;

use super::FixedStep;
use crate::settings::Settings;
use crate::sim::{FrameSnapshot, Simulation, autopilot};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Already initialised by an earlier module instance
        return;
    }
    log::info!("Neon Jet core loaded");
}

/// One game instance bound to a canvas
#[wasm_bindgen]
pub struct WebGame {
    sim: Simulation,
    clock: FixedStep,
    thrust: bool,
    autopilot: bool,
}

#[wasm_bindgen]
impl WebGame {
    /// New game seeded from the wall clock
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> WebGame {
        Self::seeded(width, height, js_sys::Date::now() as u64)
    }

    /// New game with a fixed seed (replays, daily challenges)
    pub fn with_seed(width: f32, height: f32, seed: u32) -> WebGame {
        Self::seeded(width, height, u64::from(seed))
    }

    /// Start or restart; false while a run is in progress
    pub fn start(&mut self) -> bool {
        self.clock.reset();
        self.sim.start()
    }

    pub fn reset(&mut self) {
        self.sim.reset();
    }

    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        self.sim.resize(width, height)
    }

    /// Held state of the thrust input (key, mouse or touch)
    pub fn set_thrust(&mut self, active: bool) {
        self.thrust = active;
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        log::info!("Autopilot {}", if enabled { "on" } else { "off" });
        self.autopilot = enabled;
    }

    /// Advance by `dt` seconds of wall time and return the frame as JSON.
    ///
    /// Events from every tick run this frame are merged into the snapshot.
    pub fn frame(&mut self, dt: f32) -> String {
        let steps = self.clock.advance(dt);
        let mut events = Vec::new();
        for _ in 0..steps {
            let snapshot = self.step();
            events.extend(snapshot.events);
        }
        FrameSnapshot::capture(&self.sim, events).to_json()
    }

    /// Advance exactly one tick with `thrust` held, ignoring wall time
    pub fn tick(&mut self, thrust: bool) -> String {
        self.thrust = thrust;
        self.step().to_json()
    }

    pub fn summary_json(&self) -> String {
        serde_json::to_string(&self.sim.summary()).unwrap_or_default()
    }

    pub fn settings_json(&self) -> String {
        self.sim.settings().to_json()
    }

    pub fn set_settings_json(&mut self, json: &str) -> Result<(), JsValue> {
        let settings = Settings::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Settings updated: quality {}", settings.quality.as_str());
        self.sim.set_settings(settings);
        Ok(())
    }
}

impl WebGame {
    fn seeded(width: f32, height: f32, seed: u64) -> WebGame {
        let sim = Simulation::new(width, height, seed);
        let clock = FixedStep::new(sim.tuning().frame_rate);
        WebGame {
            sim,
            clock,
            thrust: false,
            autopilot: false,
        }
    }

    fn step(&mut self) -> FrameSnapshot {
        let thrust = if self.autopilot {
            autopilot::decide(&self.sim)
        } else {
            self.thrust
        };
        self.sim.tick(thrust)
    }
}
