//! # tinylink
//!
//! A small URL shortening service built with Axum, backed by an in-memory
//! registry.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Core business entities
//! - **Application Layer** ([`application`]) - The short code [`Registry`](application::services::Registry)
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random 6-character alphanumeric codes with transparent collision retry
//! - Idempotent submission: the same normalized URL always maps to the same code
//! - Exact click counting under concurrent redirects
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="127.0.0.1:3000"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::Registry;
    pub use crate::domain::entities::{Entry, Submission};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};
}
