//! Utility functions for code generation, URL processing, and request handling.
//!
//! - [`code_generator`] - Short code generation
//! - [`url_normalizer`] - Normalization and validation of submitted URLs
//! - [`short_url`] - Public short URL construction from request headers

pub mod code_generator;
pub mod short_url;
pub mod url_normalizer;
