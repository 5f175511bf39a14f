//! Eagle API client: transport seam, endpoint table, request executor and
//! the typed operations built on it.

pub mod client;
pub mod endpoints;
pub mod models;
pub mod operations;
pub mod query;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{ClientConfig, DEFAULT_HOST, DEFAULT_PORT, EagleClient};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};
