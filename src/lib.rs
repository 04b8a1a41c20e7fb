//! statusd library
//!
//! A small HTTP daemon reporting simulated operational health of a
//! fictitious service for demo dashboards. The core is a deterministic,
//! time-bucketed metric simulation ([`sim`]); the rest is thin plumbing:
//! - [`config`] — validated, immutable simulation parameters
//! - [`revision`] — best-effort git revision lookup
//! - [`api`] — REST handlers, router, and shared state
//! - [`server`] — listener and graceful-shutdown lifecycle
//!
//! No real CPU or memory telemetry is ever read.

pub mod api;
pub mod config;
pub mod error;
pub mod revision;
pub mod server;
pub mod sim;

pub use api::create_router;
pub use config::{Environment, SimConfig};
pub use error::{ApiError, DaemonError};
pub use server::Server;
