mod generator;
mod logging;
mod plan;
mod report;

use std::time::Duration;

use clap::Parser;
use tracing::info;

use crate::generator::TrafficGenerator;
use crate::plan::Level;

/// Drives simulated player traffic against a running roulette server.
#[derive(Debug, Parser)]
#[command(name = "traffic", version, about)]
struct Cli {
    /// Server base URL
    #[arg(long, env = "ROULETTE_URL", default_value = "http://localhost:5000")]
    url: String,

    /// Traffic intensity
    #[arg(long, env = "TRAFFIC_LEVEL", value_enum, default_value_t = Level::Medium)]
    level: Level,

    /// Test duration in seconds
    #[arg(long, env = "TRAFFIC_DURATION", default_value_t = 60)]
    duration: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    logging::setup();

    let cli = Cli::parse();
    info!("🎰 Roulette traffic generator");
    info!("🎯 Target: {}", cli.url);

    let generator = TrafficGenerator::new(&cli.url)?;
    let report = generator.run(cli.level, Duration::from_secs(cli.duration)).await;

    println!("{}", report);
    Ok(())
}
