use std::time::Duration;

use log::{debug, error};
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::error::FetchError;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of raw exchange-rate documents. `None` means nothing usable came back.
pub trait RateSource {
    async fn fetch(&self, url: &str) -> Option<Value>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::from_client(client))
    }

    pub fn from_client(client: Client) -> Self {
        HttpFetcher { client }
    }

    pub async fn try_fetch(&self, url: &str) -> Result<Value, FetchError> {
        debug!("GET {}", url);

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| FetchError::from_request(url, err))?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = resp
            .bytes()
            .await
            .map_err(|err| FetchError::from_request(url, err))?;

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

impl RateSource for HttpFetcher {
    async fn fetch(&self, url: &str) -> Option<Value> {
        match self.try_fetch(url).await {
            Ok(value) => Some(value),
            Err(err) => {
                error!("{}", err);
                None
            }
        }
    }
}
