//! Zonefeed: blocklist to resolver-zone publisher
//!
//! A library for periodically downloading a plain-text domain blocklist
//! and atomically publishing it as unbound `local-zone` directives.

pub mod config;
pub mod fetch;
pub mod pipeline;
pub mod publish;
pub mod telemetry;
pub mod time;
pub mod transform;
