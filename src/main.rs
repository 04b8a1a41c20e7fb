//! statusd - Simulated service-health daemon
//!
//! Serves a small JSON API with deterministic, time-bucketed fake metrics
//! for demo dashboards. Every simulation knob is an environment variable
//! (or flag) validated once at startup.

use clap::Parser;
use status_daemon::api::rest::state::AppState;
use status_daemon::config::{Environment, SimConfig};
use status_daemon::revision::GitRevisionProvider;
use status_daemon::server::Server;
use std::net::SocketAddr;

/// statusd CLI
#[derive(Debug, Parser)]
#[command(name = "statusd", version, about = "Simulated service-health daemon")]
struct Cli {
    /// Socket address to bind, e.g. 127.0.0.1:8080
    #[arg(long, env = "STATUSD_LISTEN", default_value = "127.0.0.1:8080")]
    listen: SocketAddr,

    /// Width of the deterministic metric window in seconds
    #[arg(long, env = "SIM_BUCKET_SECONDS", default_value_t = 30)]
    bucket_seconds: u64,

    /// Minimum simulated CPU percentage
    #[arg(long, env = "SIM_CPU_MIN", default_value_t = 10)]
    cpu_min: u32,

    /// Maximum simulated CPU percentage
    #[arg(long, env = "SIM_CPU_MAX", default_value_t = 70)]
    cpu_max: u32,

    /// Minimum simulated memory percentage
    #[arg(long, env = "SIM_MEM_MIN", default_value_t = 20)]
    mem_min: u32,

    /// Maximum simulated memory percentage
    #[arg(long, env = "SIM_MEM_MAX", default_value_t = 80)]
    mem_max: u32,

    /// Probability per bucket of reporting offline
    #[arg(long, env = "SIM_OFFLINE_RATE", default_value_t = 0.02)]
    offline_rate: f64,

    /// Probability per bucket of reporting degraded
    #[arg(long, env = "SIM_DEGRADED_RATE", default_value_t = 0.12)]
    degraded_rate: f64,

    /// Probability per status request of an artificial delay
    #[arg(long, env = "SIM_LATENCY_CHANCE", default_value_t = 0.1)]
    latency_chance: f64,

    /// Injected delay duration in milliseconds
    #[arg(long, env = "SIM_LATENCY_MS", default_value_t = 500)]
    latency_millis: u64,

    /// Uptime below this many seconds reports cold_start
    #[arg(long, env = "COLD_START_SECONDS", default_value_t = 60)]
    cold_start_seconds: i64,

    /// Reported application version
    #[arg(long, env = "APP_VERSION", default_value = "1.0.0")]
    app_version: String,

    /// Reported build timestamp (APP_BUILD_TIME takes precedence)
    #[arg(long, env = "BUILD_TIME", default_value = "unknown")]
    build_time: String,

    /// Allowed CORS origins: "*" or a comma-separated list
    #[arg(long, env = "CORS_ORIGINS", default_value = "*")]
    cors_origins: String,

    /// Display-only debug flag reflected by /api/config
    #[arg(long, env = "CONFIG_DEBUG_MODE", default_value_t = false, action = clap::ArgAction::Set)]
    debug_mode: bool,

    /// Display-only traffic level reflected by /api/config
    #[arg(long, env = "CONFIG_TRAFFIC_LEVEL", default_value = "low")]
    traffic_level: String,

    /// Display-only simulation mode reflected by /api/config
    #[arg(long, env = "CONFIG_SIM_MODE", default_value = "standard")]
    sim_mode: String,
}

impl Cli {
    fn into_config(self) -> SimConfig {
        // APP_BUILD_TIME wins over BUILD_TIME when both are set.
        let build_time = std::env::var("APP_BUILD_TIME")
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or(self.build_time);

        SimConfig {
            bucket_seconds: self.bucket_seconds,
            cpu_min: self.cpu_min,
            cpu_max: self.cpu_max,
            mem_min: self.mem_min,
            mem_max: self.mem_max,
            offline_rate: self.offline_rate,
            degraded_rate: self.degraded_rate,
            latency_chance: self.latency_chance,
            latency_millis: self.latency_millis,
            cold_start_seconds: self.cold_start_seconds,
            app_version: self.app_version,
            build_time,
            environment: Environment::detect(),
            cors_origins: self.cors_origins,
            debug_mode: self.debug_mode,
            traffic_level: self.traffic_level,
            sim_mode: self.sim_mode,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "status_daemon=info,info".to_string()),
        )
        .init();

    let cli = Cli::parse();
    let listen = cli.listen;
    let config = cli.into_config().validated()?;

    tracing::info!("CORS configured for: {}", config.cors_origins);
    tracing::info!(
        bucket_seconds = config.bucket_seconds,
        offline_rate = config.offline_rate,
        degraded_rate = config.degraded_rate,
        latency_chance = config.latency_chance,
        environment = config.environment.as_str(),
        "Simulation parameters loaded"
    );

    let state = AppState::new(config, &GitRevisionProvider);
    Server::new(listen, state).run().await?;

    Ok(())
}
