use thiserror::Error;

/// Why a single request/response round trip failed.
#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("Error encoding JSON: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Error creating request: {0}")]
    Request(String),

    #[error("Request error: {0}")]
    Network(String),

    #[error("Error: {}", status_line(*status, reason))]
    Status {
        status: u16,
        reason: String,
        body: String,
    },

    #[error("Error decoding response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("No choices in response")]
    EmptyChoices,
}

fn status_line(status: u16, reason: &str) -> String {
    if reason.is_empty() {
        status.to_string()
    } else {
        format!("{status} {reason}")
    }
}

impl ExchangeError {
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn is_empty_choices(&self) -> bool {
        matches!(self, Self::EmptyChoices)
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
