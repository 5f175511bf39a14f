//! Business logic layered on top of the API client.

pub mod services;
