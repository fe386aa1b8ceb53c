//! Application layer services implementing business logic.
//!
//! Services own their state and expose a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::registry::Registry`] - Short code minting, resolution, and click accounting
pub mod services;
