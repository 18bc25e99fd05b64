//! LiftPlan - Strength Program Planning Core
//!
//! CLI entry point: load a program config, generate the full cycle, and
//! print it as JSON for an external renderer.

use std::path::Path;

use anyhow::Context;
use liftplan::config::ProgramConfig;
use liftplan::cycle::CycleGenerator;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting LiftPlan v{}", env!("CARGO_PKG_VERSION"));

    let path = std::env::args()
        .nth(1)
        .context("usage: liftplan <program-config.toml|json>")?;

    let config = ProgramConfig::load(Path::new(&path))?;
    let program = config.normalize();

    for warning in program.validate() {
        tracing::warn!("{warning}");
    }

    let generator = CycleGenerator::new(program);
    let cycle = generator.generate_cycle();

    let json = serde_json::to_string_pretty(&cycle).context("serializing cycle")?;
    println!("{json}");

    Ok(())
}
