//! Application state for API handlers

use crate::config::SimConfig;
use crate::revision::{resolve_revision, RevisionProvider};
use std::sync::Arc;

/// Shared application state.
///
/// Everything here is fixed at startup: handlers only read, so no locks are
/// needed and requests stay side-effect-free.
#[derive(Clone)]
pub struct AppState {
    /// Validated simulation parameters
    pub config: Arc<SimConfig>,

    /// Daemon start time, captured exactly once
    pub started_at: chrono::DateTime<chrono::Utc>,

    /// Short git revision, "unknown" when unresolvable
    pub commit: String,
}

impl AppState {
    /// Create new application state, resolving the revision once.
    pub fn new(config: SimConfig, revision: &dyn RevisionProvider) -> Self {
        Self {
            config: Arc::new(config),
            started_at: chrono::Utc::now(),
            commit: resolve_revision(revision),
        }
    }

    /// Seconds since process start, clamped to zero so a small backward
    /// clock step cannot report a negative uptime.
    pub fn uptime_seconds(&self) -> i64 {
        (chrono::Utc::now() - self.started_at).num_seconds().max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::revision::UNKNOWN_REVISION;

    struct NoRevision;

    impl RevisionProvider for NoRevision {
        fn short_revision(&self) -> Option<String> {
            None
        }
    }

    #[test]
    fn test_uptime_counts_from_start() {
        let state = AppState {
            config: Arc::new(SimConfig::default()),
            started_at: chrono::Utc::now() - chrono::Duration::seconds(100),
            commit: UNKNOWN_REVISION.to_string(),
        };
        let first = state.uptime_seconds();
        assert!(first >= 100);
        assert!(state.uptime_seconds() >= first);
    }

    #[test]
    fn test_uptime_clamped_at_zero() {
        let state = AppState {
            config: Arc::new(SimConfig::default()),
            started_at: chrono::Utc::now() + chrono::Duration::seconds(30),
            commit: UNKNOWN_REVISION.to_string(),
        };
        assert_eq!(state.uptime_seconds(), 0);
    }

    #[test]
    fn test_new_state_substitutes_sentinel() {
        let state = AppState::new(SimConfig::default(), &NoRevision);
        assert_eq!(state.commit, UNKNOWN_REVISION);
        assert!(state.uptime_seconds() >= 0);
    }
}
