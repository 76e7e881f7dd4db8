//! Core components shared across the crate.
//!
//! This module contains the foundational building blocks of the library:
//! - The primary [`PulseError`] type.
//! - Shared data models ([`Article`], [`Page`]) used by the store, the
//!   briefing aggregator and the ingestion boundary.

/// The primary error type (`PulseError`) for the crate.
pub mod error;
/// Shared data models used across multiple modules.
pub mod models;

// convenient re-exports so most code can just `use crate::core::Article`
pub use error::PulseError;
pub use models::{Article, Page};
