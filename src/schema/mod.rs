//! Response shapes for the Eagle API and the validation entry point.
//!
//! Every payload the server can return is declared here as a serde type.
//! Required fields are plain fields, optional ones are `Option<_>`, closed
//! token sets are enums and opaque structures are `serde_json::Value`.
//! Validation is deserialization: a body that does not fit its declared
//! shape is rejected with a [`ValidationError`], never coerced.

pub mod application;
pub mod envelope;
pub mod enums;
pub mod folder;
pub mod item;
pub mod library;

pub use application::ApplicationInfo;
pub use envelope::{Acknowledged, ErrorEnvelope, ErrorStatus, Success, SuccessSchema, SuccessStatus};
pub use enums::{Color, Order};
pub use folder::{
    ChildFolder, CreatedFolder, FolderStyles, FolderSummary, RecentFolder, RenamedFolder,
    UpdatedFolder,
};
pub use item::{Item, Palette};
pub use library::{
    LibraryChildFolder, LibraryFolder, LibraryInfo, LibraryLocation, QuickAccess, SmartFolder,
    SmartFolderCondition, SmartFolderRule, TagsGroup,
};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// A payload that did not conform to its declared shape.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{reason}")]
pub struct ValidationError {
    reason: String,
}

impl ValidationError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Parse `body` as JSON and validate it against the shape `T`.
///
/// Nesting depth is not limited: folder trees can be arbitrarily deep, so
/// parsing grows the stack on demand instead of enforcing a recursion limit.
pub fn validate<T: DeserializeOwned>(body: &str) -> Result<T, ValidationError> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    deserializer.disable_recursion_limit();
    let value = serde_json::Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
        .and_then(|value| deserializer.end().map(|()| value))
        .map_err(|e| ValidationError::new(format!("body is not valid JSON: {}", e)))?;
    validate_value(value)
}

/// Validate an already decoded JSON value against the shape `T`.
pub fn validate_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ValidationError> {
    T::deserialize(serde_stacker::Deserializer::new(value))
        .map_err(|e| ValidationError::new(e.to_string()))
}
