//! Neon Jet entry point
//!
//! The browser build is driven from JavaScript through `platform::web`.
//! Natively this runs a headless autopilot flight and prints the run summary,
//! which is handy for checking tuning changes and seed determinism.
//!
//! Usage: `neon-jet [seed] [tuning.json] [low|medium|high]`

#[cfg(not(target_arch = "wasm32"))]
use neon_jet::sim::{GameEvent, GamePhase, Playfield, Simulation, autopilot};
#[cfg(not(target_arch = "wasm32"))]
use neon_jet::{QualityPreset, Settings, Tuning};

/// Give up after this many ticks (ten minutes at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const MAX_TICKS: u64 = 60 * 60 * 10;

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_SEED: u64 = 12345;

#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: &str) -> Tuning {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Could not read tuning file {}: {}, using defaults", path, e);
            return Tuning::default();
        }
    };
    match Tuning::from_json(&json) {
        Ok(tuning) => {
            log::info!("Loaded tuning from {}", path);
            tuning
        }
        Err(e) => {
            log::warn!("Bad tuning file {}: {}, using defaults", path, e);
            Tuning::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Neon Jet (native, headless) starting...");

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            log::warn!("Seed {:?} is not a number, using {}", arg, DEFAULT_SEED);
            DEFAULT_SEED
        }),
        None => DEFAULT_SEED,
    };
    let tuning = args.next().map(|path| load_tuning(&path)).unwrap_or_default();
    let quality = match args.next() {
        Some(arg) => QualityPreset::parse(&arg).unwrap_or_else(|| {
            log::warn!("Unknown quality {:?}, using Medium", arg);
            QualityPreset::Medium
        }),
        None => QualityPreset::default(),
    };
    log::info!("Quality preset: {}", quality.as_str());

    let settings = Settings::from_preset(quality);
    let mut sim = Simulation::with_config(Playfield::default(), tuning, settings, seed);
    sim.start();

    let mut ticks = 0;
    while sim.phase() == GamePhase::Playing && ticks < MAX_TICKS {
        let thrust = autopilot::decide(&sim);
        let snapshot = sim.tick(thrust);
        ticks += 1;

        for event in &snapshot.events {
            match event {
                GameEvent::Beat { .. } => {}
                GameEvent::SpeedUp { speed } => log::info!("Speed up to {:.1}", speed),
                other => log::debug!("tick {}: {:?}", ticks, other),
            }
        }
    }
    if ticks >= MAX_TICKS {
        log::info!("Stopped after {} ticks without crashing", MAX_TICKS);
    }

    match serde_json::to_string_pretty(&sim.summary()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
