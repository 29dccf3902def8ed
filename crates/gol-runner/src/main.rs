//! Headless host: steps a universe and writes frames to stdout.

mod telemetry;

use anyhow::{Context, Result};
use gol_core::RunnerConfig;
use gol_world::Universe;
use std::io::{self, BufWriter, Write};
use tracing::info;

fn main() -> Result<()> {
    telemetry::init_telemetry()?;

    let config = load_config()?;
    info!(
        generations = config.generations,
        print_every = config.print_every,
        width = config.universe.width,
        height = config.universe.height,
        seed = config.universe.seed.kind(),
        rule = %config.universe.rule,
        "Configuration loaded"
    );

    let mut universe = Universe::with_config(&config.universe)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(&mut universe, &config, &mut out)?;
    out.flush()?;

    info!(
        generation = universe.generation(),
        population = universe.live_count(),
        "Run complete"
    );

    Ok(())
}

/// Config path comes from the first argument, then `GOL_CONFIG`; defaults otherwise.
fn load_config() -> Result<RunnerConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("GOL_CONFIG").ok());

    match path {
        Some(path) => RunnerConfig::from_json_file(&path)
            .with_context(|| format!("failed to load config from {}", path)),
        None => {
            info!("No config given, using defaults");
            Ok(RunnerConfig::default())
        }
    }
}

/// Emit generation 0, then every `print_every`-th generation, and always the last one.
fn run(universe: &mut Universe, config: &RunnerConfig, out: &mut impl Write) -> Result<()> {
    write_frame(universe, out)?;

    for _ in 0..config.generations {
        universe.tick();

        let generation = universe.generation();
        let due = config.print_every != 0 && generation % config.print_every == 0;
        if due || generation == config.generations {
            write_frame(universe, out)?;
        }
    }

    Ok(())
}

fn write_frame(universe: &Universe, out: &mut impl Write) -> Result<()> {
    writeln!(out, "generation {}", universe.generation())?;
    out.write_all(universe.render().as_bytes())?;
    writeln!(out)?;
    Ok(())
}
