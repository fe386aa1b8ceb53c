//! Core domain entities.
//!
//! Entities are plain data structures without business logic. The registry
//! keeps its own internal representation and hands these out as snapshots.

pub mod entry;

pub use entry::{Entry, Submission};
