//! Gravity Bounce entry point
//!
//! Native builds run a headless bounce. In the browser the library's
//! `startSimulator` export is the entry point.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Gravity Bounce (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to see the canvas");

    let path = std::env::args().nth(1).map(std::path::PathBuf::from);
    if let Err(e) = headless::run(path.as_deref()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is gravity_bounce::web_app::start_simulator
}

/// Drop one ball on a 400x400 canvas and log its bounce cycle
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::Path;

    use glam::Vec2;
    use gravity_bounce::platform::{CanvasGeometry, ManualTimer};
    use gravity_bounce::renderer::RecordingSurface;
    use gravity_bounce::{Direction, Result, Settings, Simulator};

    /// Simulated wall-clock time to run
    const RUN_MS: f64 = 10_000.0;

    pub fn run(settings_path: Option<&Path>) -> Result<()> {
        let settings = Settings::load_from(settings_path)?;
        let mut sim = Simulator::new(settings, CanvasGeometry::unscaled(400.0, 400.0), 0)?;
        let mut surface = RecordingSurface::new();
        let mut timer = ManualTimer::new();

        sim.apply_background(&mut surface);
        sim.pointer_down(Vec2::new(100.0, 100.0), 0.0);
        sim.pointer_up(0.0);
        sim.start(&mut timer)?;

        let Some(handle) = sim.timer_handle() else {
            return Ok(());
        };
        let ticks = timer.fires_within(handle, RUN_MS);
        log::info!(
            "Running {} ticks ({} px/tick velocity step)",
            ticks,
            sim.settings().velocity_step()
        );

        let mut last = sim.shapes()[0].direction;
        for _ in 0..ticks {
            sim.tick(&mut surface);
            let shape = &sim.shapes()[0];
            if shape.direction != last {
                match shape.direction {
                    Direction::Up => {
                        log::info!("tick {}: hit the floor at y={}", sim.tick_count(), shape.pos.y)
                    }
                    Direction::Down => {
                        log::info!("tick {}: back at apex y={}", sim.tick_count(), shape.pos.y)
                    }
                }
                last = shape.direction;
            }
        }

        sim.stop(&mut timer);
        let shape = &sim.shapes()[0];
        println!(
            "{} ticks, {} frames drawn; ball r={} at ({}, {}) moving {:?}",
            sim.tick_count(),
            surface.frame_count(),
            shape.r,
            shape.pos.x,
            shape.pos.y,
            shape.direction
        );
        Ok(())
    }
}
