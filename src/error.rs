// Error types for the roster application.
// Every fetch-side failure collapses to the loader's Failed state; these
// variants exist so diagnostics can record the underlying cause.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;
