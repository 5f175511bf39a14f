pub use error::AppError;

/// Main architecture layers (dependency flow: CLI → Core → API → Schema)
pub mod cli; // Command-line interface
pub mod core; // Multi-call workflows
pub mod storage; // Configuration profiles

/// Support modules (used across layers)
pub mod api; // Eagle API client
pub mod display; // Output formatting
pub mod error; // Error handling
pub mod schema; // Response shapes and validation
pub mod utils; // Shared utilities and helpers

pub use api::{ClientConfig, EagleClient};

pub type Result<T> = std::result::Result<T, AppError>;
