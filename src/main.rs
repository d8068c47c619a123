//! Headless garden run
//!
//! Opens the door and steps the garden at a fixed rate until the reservoir
//! has drained and every particle has landed.
//!
//! Usage: `reservoir-garden [config.toml]`

use anyhow::{Context, Result};
use reservoir_garden::renderer::{decode, GeometryBuffer};
use reservoir_garden::time::{FixedClock, FrameClock};
use reservoir_garden::{FrameOutcome, Garden, GardenConfig};

/// Give up after this many simulated seconds
const MAX_SIMULATED_SECONDS: f64 = 600.0;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => GardenConfig::load(&path)
            .with_context(|| format!("Failed to load configuration {path}"))?,
        None => GardenConfig::default(),
    };

    for (name, path) in [("wood", &config.textures.wood), ("soil", &config.textures.soil)] {
        if let Some(path) = path {
            let image = decode(path)
                .with_context(|| format!("Failed to load {name} texture"))?;
            log::info!("Loaded {name} texture {}x{}", image.width, image.height);
        }
    }

    let mut clock = FixedClock::new(config.frame.fixed_step);
    let mut garden = Garden::new(config).context("Failed to build garden")?;
    let mut buffer = GeometryBuffer::new();
    garden.open_door();

    let mut next_report = 1.0;
    let mut last = FrameOutcome::default();
    while !garden.is_finished() && clock.total_seconds() < MAX_SIMULATED_SECONDS {
        buffer.clear();
        last = garden.frame(clock.elapsed_seconds(), &mut buffer);

        if clock.total_seconds() >= next_report {
            let water = garden.water();
            log::info!(
                "t={:.0}s reservoir {:.3} basin {:.3} in flight {} plant {} segments {} leaves",
                clock.total_seconds(),
                water.reservoir_level(),
                water.basin_level(),
                water.active_count(),
                last.growth.segments,
                last.growth.leaves
            );
            next_report += 1.0;
        }
    }

    if !garden.is_finished() {
        log::warn!("Stopped after {MAX_SIMULATED_SECONDS} simulated seconds");
    }
    let water = garden.water();
    log::info!(
        "Finished after {:.2}s: reservoir {:.4}, basin {:.4}, total {:.4}",
        clock.total_seconds(),
        water.reservoir_level(),
        water.basin_level(),
        water.total_volume()
    );
    log::info!(
        "Plant at height {:.2}: {} segments, {} leaves, depth {}",
        garden.growth_height(),
        last.growth.segments,
        last.growth.leaves,
        last.growth.max_depth
    );
    log::info!(
        "Last frame: {} lines, {} triangles, {} points",
        buffer.lines.len(),
        buffer.triangles.len(),
        buffer.points.len()
    );
    Ok(())
}
