//! Source-control revision lookup for `/api/meta`.

use std::process::Command;

/// Sentinel reported when the revision cannot be determined.
pub const UNKNOWN_REVISION: &str = "unknown";

/// Capability for resolving the running build's short revision id.
///
/// Lookup is best-effort: a failure is recovered locally with the sentinel
/// and never surfaces as a request error.
pub trait RevisionProvider: Send + Sync {
    /// `None` when the revision cannot be determined.
    fn short_revision(&self) -> Option<String>;
}

/// Resolves the revision by asking the local `git` binary.
pub struct GitRevisionProvider;

impl RevisionProvider for GitRevisionProvider {
    fn short_revision(&self) -> Option<String> {
        let output = Command::new("git")
            .args(["rev-parse", "--short", "HEAD"])
            .output()
            .ok()?;
        if !output.status.success() {
            return None;
        }
        let hash = String::from_utf8(output.stdout).ok()?;
        let hash = hash.trim();
        if hash.is_empty() {
            None
        } else {
            Some(hash.to_string())
        }
    }
}

/// Resolve the revision once, substituting the sentinel on failure.
pub fn resolve_revision(provider: &dyn RevisionProvider) -> String {
    match provider.short_revision() {
        Some(revision) => revision,
        None => {
            tracing::warn!(
                "Failed to resolve git revision, reporting \"{}\"",
                UNKNOWN_REVISION
            );
            UNKNOWN_REVISION.to_string()
        }
    }
}
