//! Shared test infrastructure.

/// Fluent instruction encoders.
pub mod builder;
