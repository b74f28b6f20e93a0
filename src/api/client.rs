// HTTP client for the user directory endpoint.
// One GET against a fixed URL; no retry and no timeout beyond the transport
// default. The caller converts any failure into the loader's Failed state.

use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{Result, RosterError};

use super::types::User;

const USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Client for the remote user directory.
pub struct ApiClient {
    client: Client,
    users_url: String,
}

impl ApiClient {
    /// Create a client pointed at the fixed directory endpoint.
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("roster-tui"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(RosterError::Http)?;

        Ok(Self {
            client,
            users_url: USERS_URL.to_string(),
        })
    }

    /// Fetch the full user listing. Expects a JSON array of user records;
    /// a malformed payload fails the whole load.
    pub async fn fetch_users(&self) -> Result<Vec<User>> {
        let response = self
            .client
            .get(&self.users_url)
            .send()
            .await
            .map_err(RosterError::Http)?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await.map_err(RosterError::Http)?;
                let users: Vec<User> = serde_json::from_str(&body)?;
                Ok(users)
            }
            status => Err(RosterError::Status {
                status: status.as_u16(),
                url: self.users_url.clone(),
            }),
        }
    }
}
