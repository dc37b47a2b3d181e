use crate::telemetry::state::SystemState;
use log::debug;
use reqwest::blocking::Client;
use std::time::Duration;

/// Why a single poll cycle produced no new state.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("malformed system state: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of system state snapshots.
///
/// Implementations are called from the poller's worker thread, never from the
/// UI loop, so a blocking call is fine here.
pub trait SystemStateService: Send + 'static {
    fn get_system_state(&self) -> Result<SystemState, FetchError>;
}

/// Fetches the system state with a plain `GET` against a JSON endpoint.
pub struct HttpService {
    client: Client,
    url: String,
    token: Option<String>,
}

impl HttpService {
    pub fn new(url: String, token: Option<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url, token })
    }
}

impl SystemStateService for HttpService {
    fn get_system_state(&self) -> Result<SystemState, FetchError> {
        let mut request = self.client.get(&self.url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text()?;
        debug!("Received {} bytes from {}", body.len(), self.url);
        Ok(serde_json::from_str(&body)?)
    }
}
