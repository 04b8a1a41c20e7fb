//! Deterministic metric simulation.
//!
//! Metrics are pseudo-random but stable for the width of one time bucket:
//! the generator is reseeded from the bucket id on every request, so repeated
//! polls inside a window see identical values and nothing is cached between
//! requests.

use crate::config::SimConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Simulated service status for one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
    Offline,
}

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Healthy => "healthy",
            ServiceStatus::Degraded => "degraded",
            ServiceStatus::Offline => "offline",
        }
    }
}

/// One simulated metrics result, built fresh per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub status: ServiceStatus,
    pub cpu: u32,
    pub memory: u32,
    pub uptime_seconds: i64,
}

/// Identify the fixed-width window containing `now_unix`.
///
/// Euclidean division keeps pre-epoch timestamps in consistent windows
/// instead of rounding toward zero.
pub fn bucket_for(now_unix: i64, bucket_seconds: u64) -> i64 {
    now_unix.div_euclid(bucket_seconds.max(1) as i64)
}

/// Generator whose entire output sequence is a function of the bucket alone.
pub fn bucket_rng(bucket: i64) -> StdRng {
    StdRng::seed_from_u64(bucket as u64)
}

/// Partition a uniform [0,1) roll into a status. Both comparisons are
/// strict: a roll exactly at a threshold falls into the next band up.
fn classify(offline_rate: f64, degraded_rate: f64, roll: f64) -> ServiceStatus {
    if roll < offline_rate {
        ServiceStatus::Offline
    } else if roll < offline_rate + degraded_rate {
        ServiceStatus::Degraded
    } else {
        ServiceStatus::Healthy
    }
}

/// Compute the snapshot for `now_unix`.
///
/// Draw order is the compatibility contract: cpu, then memory, then the
/// status roll. The range draws happen even when the roll ends up offline,
/// where the drawn values are discarded and both metrics report zero.
pub fn snapshot_at(config: &SimConfig, now_unix: i64, uptime_seconds: i64) -> Snapshot {
    let bucket = bucket_for(now_unix, config.bucket_seconds);
    let mut rng = bucket_rng(bucket);

    let cpu = rng.gen_range(config.cpu_min..=config.cpu_max);
    let memory = rng.gen_range(config.mem_min..=config.mem_max);
    let roll: f64 = rng.gen();

    let status = classify(config.offline_rate, config.degraded_rate, roll);
    let (cpu, memory) = match status {
        ServiceStatus::Offline => (0, 0),
        _ => (cpu, memory),
    };

    Snapshot {
        status,
        cpu,
        memory,
        uptime_seconds,
    }
}

/// Decide whether this request gets an artificial delay.
///
/// Draws from the ambient thread RNG, never the bucketed generator, so
/// latency injection cannot perturb the deterministic draw sequence.
pub fn should_inject_latency(config: &SimConfig) -> bool {
    config.latency_chance > 0.0 && rand::thread_rng().gen::<f64>() < config.latency_chance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_bucket_same_snapshot() {
        let config = SimConfig::default();
        // 30s window: 1000 and 1019 share bucket 33.
        let a = snapshot_at(&config, 1000, 500);
        let b = snapshot_at(&config, 1019, 500);
        assert_eq!(a, b);
    }

    #[test]
    fn test_bucket_boundary_rolls_over() {
        assert_eq!(bucket_for(1019, 30), 33);
        assert_eq!(bucket_for(1020, 30), 34);
        assert_eq!(bucket_for(0, 30), 0);
        assert_eq!(bucket_for(-1, 30), -1);
    }

    #[test]
    fn test_zero_width_bucket_clamped() {
        assert_eq!(bucket_for(1234, 0), 1234);
    }

    #[test]
    fn test_snapshots_vary_across_buckets() {
        let config = SimConfig {
            offline_rate: 0.0,
            degraded_rate: 0.0,
            ..Default::default()
        };
        let first = snapshot_at(&config, 0, 0);
        let varied = (1..100)
            .map(|b| snapshot_at(&config, b * 30, 0))
            .any(|s| s != first);
        assert!(varied, "100 consecutive buckets produced identical metrics");
    }

    #[test]
    fn test_bucket_rng_is_reproducible() {
        let mut a = bucket_rng(42);
        let mut b = bucket_rng(42);
        for _ in 0..16 {
            assert_eq!(a.gen::<u64>(), b.gen::<u64>());
        }
    }

    #[test]
    fn test_offline_overrides_metrics_to_zero() {
        let config = SimConfig {
            offline_rate: 1.0,
            degraded_rate: 0.0,
            ..Default::default()
        };
        for bucket in 0..50 {
            let snap = snapshot_at(&config, bucket * 30, 0);
            assert_eq!(snap.status, ServiceStatus::Offline);
            assert_eq!(snap.cpu, 0);
            assert_eq!(snap.memory, 0);
        }
    }

    #[test]
    fn test_degraded_keeps_drawn_ranges() {
        let config = SimConfig {
            offline_rate: 0.0,
            degraded_rate: 1.0,
            ..Default::default()
        };
        for bucket in 0..50 {
            let snap = snapshot_at(&config, bucket * 30, 0);
            assert_eq!(snap.status, ServiceStatus::Degraded);
            assert!((config.cpu_min..=config.cpu_max).contains(&snap.cpu));
            assert!((config.mem_min..=config.mem_max).contains(&snap.memory));
        }
    }

    #[test]
    fn test_healthy_keeps_drawn_ranges() {
        let config = SimConfig {
            offline_rate: 0.0,
            degraded_rate: 0.0,
            ..Default::default()
        };
        for bucket in 0..50 {
            let snap = snapshot_at(&config, bucket * 30, 0);
            assert_eq!(snap.status, ServiceStatus::Healthy);
            assert!((config.cpu_min..=config.cpu_max).contains(&snap.cpu));
            assert!((config.mem_min..=config.mem_max).contains(&snap.memory));
        }
    }

    #[test]
    fn test_classification_thresholds_are_strict() {
        assert_eq!(classify(0.02, 0.12, 0.01), ServiceStatus::Offline);
        // Exactly at offline_rate: not offline.
        assert_eq!(classify(0.02, 0.12, 0.02), ServiceStatus::Degraded);
        assert_eq!(classify(0.02, 0.12, 0.10), ServiceStatus::Degraded);
        // Exactly at offline_rate + degraded_rate: not degraded.
        assert_eq!(classify(0.02, 0.12, 0.02 + 0.12), ServiceStatus::Healthy);
        assert_eq!(classify(0.02, 0.12, 0.50), ServiceStatus::Healthy);
    }

    #[test]
    fn test_uptime_passes_through() {
        let config = SimConfig::default();
        assert_eq!(snapshot_at(&config, 1000, 0).uptime_seconds, 0);
        assert_eq!(snapshot_at(&config, 1000, 7200).uptime_seconds, 7200);
    }

    #[test]
    fn test_degenerate_ranges_pin_values() {
        let config = SimConfig {
            cpu_min: 42,
            cpu_max: 42,
            mem_min: 7,
            mem_max: 7,
            offline_rate: 0.0,
            degraded_rate: 0.0,
            ..Default::default()
        };
        let snap = snapshot_at(&config, 12345, 0);
        assert_eq!(snap.cpu, 42);
        assert_eq!(snap.memory, 7);
    }

    #[test]
    fn test_latency_never_fires_at_zero_chance() {
        let config = SimConfig {
            latency_chance: 0.0,
            ..Default::default()
        };
        for _ in 0..1000 {
            assert!(!should_inject_latency(&config));
        }
    }

    #[test]
    fn test_latency_always_fires_at_full_chance() {
        let config = SimConfig {
            latency_chance: 1.0,
            ..Default::default()
        };
        // gen::<f64>() is [0,1), so a chance of 1.0 always triggers.
        for _ in 0..1000 {
            assert!(should_inject_latency(&config));
        }
    }
}
