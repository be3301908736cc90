//! Skydrift headless entry point
//!
//! There is no native renderer; this binary runs a scripted session
//! against the recording surface and logs the outcome. It doubles as a
//! smoke test for the full frame loop.

use skydrift::driver::{Clock, FrameDriver, InputEvent};
use skydrift::render::DrawList;
use skydrift::sim::GamePhase;

/// Fixed 60 Hz clock so the session is reproducible
struct FixedClock {
    now_ms: f64,
}

impl Clock for FixedClock {
    fn now_ms(&mut self) -> f64 {
        self.now_ms += 1000.0 / 60.0;
        self.now_ms
    }
}

fn main() {
    env_logger::init();

    let seed = 0xD81F7;
    let mut driver = FrameDriver::new(FixedClock { now_ms: 0.0 }, seed);
    let mut surface = DrawList::default();

    log::info!("running scripted session at 60 Hz");

    // Tap to launch, then flap on a fixed cadence until the run ends
    driver.handle_event(InputEvent::Activate);
    let mut frames = 0u32;
    while driver.state().phase != GamePhase::Over && frames < 36_000 {
        if frames % 28 == 0 {
            driver.handle_event(InputEvent::Activate);
        }
        if frames % 28 == 14 {
            driver.handle_event(InputEvent::Deactivate);
        }
        surface.clear();
        driver.frame(&mut surface);
        frames += 1;
    }

    let state = driver.state();
    log::info!(
        "session over: {} frames, score {}, {} active pillars, {} draw calls on the last frame",
        frames,
        state.score,
        state.pipes.pipes.len(),
        surface.cmds.len()
    );

    match serde_json::to_string_pretty(state) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("state snapshot failed: {e}"),
    }
}
