//! Transport failures of a single rate request.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    /// The request did not complete within the configured timeout.
    #[error("Timeout occurred while trying to reach {url}")]
    Timeout { url: String },

    /// Upstream answered with anything but 200 OK.
    #[error("Error status: {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Connection refused, DNS failure, reset and other network errors.
    #[error("An error occurred while requesting {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Body of a 200 response is not JSON.
    #[error("Invalid JSON body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Can't build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl FetchError {
    pub fn from_request(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Transport {
                url: url.to_string(),
                source: err,
            }
        }
    }
}
