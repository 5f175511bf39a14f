//! Storage layer for eagle-cli
//!
//! Handles the TOML configuration file holding connection profiles.

use crate::error::StorageError;

pub mod config;

type Result<T> = std::result::Result<T, StorageError>;
