//! Configuration for statusd

use crate::error::{DaemonError, DaemonResult};
use serde::Serialize;

/// Deployment environment tag, reported by `/api/meta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    Development,
}

impl Environment {
    /// Detect the environment from the hosting platform marker variable.
    pub fn detect() -> Self {
        if std::env::var_os("RENDER").is_some() {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Development => "development",
        }
    }
}

/// Simulation parameters, fixed at startup.
///
/// Constructed once from the environment, validated once, then shared
/// read-only by every request. Request-time code never re-validates.
#[derive(Debug, Clone, Serialize)]
pub struct SimConfig {
    /// Width of the deterministic metric window in seconds.
    pub bucket_seconds: u64,

    /// Inclusive CPU percentage range drawn per bucket.
    pub cpu_min: u32,
    pub cpu_max: u32,

    /// Inclusive memory percentage range drawn per bucket.
    pub mem_min: u32,
    pub mem_max: u32,

    /// Probability in [0,1] that a bucket reports offline.
    pub offline_rate: f64,

    /// Probability in [0,1] that a bucket reports degraded.
    pub degraded_rate: f64,

    /// Per-request probability in [0,1] of an artificial delay.
    pub latency_chance: f64,

    /// Injected delay duration in milliseconds.
    pub latency_millis: u64,

    /// Uptime below this many seconds reports `cold_start: true`.
    pub cold_start_seconds: i64,

    /// Reported application version.
    pub app_version: String,

    /// Reported build timestamp, or "unknown".
    pub build_time: String,

    /// Deployment environment tag.
    pub environment: Environment,

    /// Allowed CORS origins: "*" or a comma-separated list.
    pub cors_origins: String,

    /// Display-only flags reflected by `/api/config`.
    pub debug_mode: bool,
    pub traffic_level: String,
    pub sim_mode: String,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            bucket_seconds: 30,
            cpu_min: 10,
            cpu_max: 70,
            mem_min: 20,
            mem_max: 80,
            offline_rate: 0.02,
            degraded_rate: 0.12,
            latency_chance: 0.1,
            latency_millis: 500,
            cold_start_seconds: 60,
            app_version: "1.0.0".to_string(),
            build_time: "unknown".to_string(),
            environment: Environment::Development,
            cors_origins: "*".to_string(),
            debug_mode: false,
            traffic_level: "low".to_string(),
            sim_mode: "standard".to_string(),
        }
    }
}

impl SimConfig {
    /// Validate the configuration, normalizing where the contract allows.
    ///
    /// A zero bucket width is clamped to one second; everything else
    /// inconsistent is a fatal startup error.
    pub fn validated(mut self) -> DaemonResult<Self> {
        if self.bucket_seconds == 0 {
            self.bucket_seconds = 1;
        }

        if self.cpu_min > self.cpu_max {
            return Err(DaemonError::Config(format!(
                "SIM_CPU_MIN ({}) exceeds SIM_CPU_MAX ({})",
                self.cpu_min, self.cpu_max
            )));
        }
        if self.mem_min > self.mem_max {
            return Err(DaemonError::Config(format!(
                "SIM_MEM_MIN ({}) exceeds SIM_MEM_MAX ({})",
                self.mem_min, self.mem_max
            )));
        }

        for (name, rate) in [
            ("SIM_OFFLINE_RATE", self.offline_rate),
            ("SIM_DEGRADED_RATE", self.degraded_rate),
            ("SIM_LATENCY_CHANCE", self.latency_chance),
        ] {
            if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
                return Err(DaemonError::Config(format!(
                    "{} must be within [0, 1], got {}",
                    name, rate
                )));
            }
        }

        if self.offline_rate + self.degraded_rate > 1.0 {
            return Err(DaemonError::Config(format!(
                "SIM_OFFLINE_RATE + SIM_DEGRADED_RATE must not exceed 1.0, got {}",
                self.offline_rate + self.degraded_rate
            )));
        }

        if self.cold_start_seconds < 0 {
            return Err(DaemonError::Config(format!(
                "COLD_START_SECONDS must be non-negative, got {}",
                self.cold_start_seconds
            )));
        }

        Ok(self)
    }
}
