use log::info;

pub trait Session {
    /// Ends the session. Fire-and-forget: there is nothing to report back.
    fn logout(&mut self);
}

/// Session identified by the bearer token handed to the telemetry endpoint.
#[derive(Debug, Default)]
pub struct TokenSession {
    token: Option<String>,
}

impl TokenSession {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl Session for TokenSession {
    fn logout(&mut self) {
        if self.token.take().is_some() {
            info!("Logged out, token discarded");
        } else {
            info!("Logout requested without an active token");
        }
    }
}
