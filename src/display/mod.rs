//! Terminal rendering for command output.

pub mod table;

pub use table::TableDisplay;
