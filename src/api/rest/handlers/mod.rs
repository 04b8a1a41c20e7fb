//! API request handlers

mod config;
mod health;
mod meta;
mod status;

pub use config::*;
pub use health::*;
pub use meta::*;
pub use status::*;
