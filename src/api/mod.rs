// Remote user directory API module.
// Provides the HTTP client and wire types for the user listing endpoint.

pub mod client;
pub mod types;

pub use client::ApiClient;
pub use types::{Address, Company, Geo, User};
