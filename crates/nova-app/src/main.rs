//! NOVA demo binary — runs the headless scene on a scripted flight.

mod game_loop;
mod script;

use nova_sim::{SimConfig, SimulationEngine};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);

    let engine = match SimulationEngine::new(SimConfig { seed }) {
        Ok(engine) => engine,
        Err(err) => {
            log::error!("scene composition failed: {err}");
            std::process::exit(1);
        }
    };

    log::info!("scene composed (seed {seed}); starting frame loop");
    game_loop::run(engine, script::demo_flight());
}
