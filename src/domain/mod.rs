//! Domain layer containing business entities.
//!
//! - [`entities`] - Core business data structures
//!
//! The domain layer has no dependencies on the HTTP or application layers.

pub mod entities;
