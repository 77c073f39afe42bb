use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use hello_spring::{telemetry, Config, GreetingService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Uptime is measured from here, before config parsing or binding.
    let started = Instant::now();
    let started_at = chrono::Utc::now();

    let config = Config::parse();
    telemetry::init_tracing(config.log_level.as_deref());

    let service = GreetingService::new(started, started_at, config.absent_profile.clone());

    hello_spring::serve(&config, service)
        .await
        .context("hello-spring server failed")
}
