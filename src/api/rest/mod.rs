//! REST API: router, shared state, and request handlers

pub mod handlers;
pub mod router;
pub mod state;
