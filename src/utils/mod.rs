//! Utils module - Shared utilities and helpers

/// Logger setup and verbose console output
pub mod logging;

/// Text formatting for terminal output
pub mod text;

/// Input validation for CLI arguments
pub mod validation;
