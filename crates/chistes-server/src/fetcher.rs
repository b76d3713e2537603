//! Client for the two upstream joke providers.
//!
//! Each call is a single GET with no retry and no timeout beyond reqwest's
//! defaults. Any failure (transport, non-2xx status, unexpected body) is a
//! [`FetchError`].

use chistes_core::Provider;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{provider} request failed: {source}")]
    Request {
        provider: Provider,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} returned status {status}")]
    Status {
        provider: Provider,
        status: reqwest::StatusCode,
    },

    #[error("{provider} response parse failed: {source}")]
    Parse {
        provider: Provider,
        #[source]
        source: serde_json::Error,
    },

    #[error("{provider} response has no joke text")]
    MissingJoke { provider: Provider },

    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct ChuckResponse {
    value: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DadResponse {
    joke: Option<String>,
}

/// Fetches jokes from the Chuck Norris and dad joke APIs.
#[derive(Debug, Clone)]
pub struct JokeFetcher {
    client: reqwest::Client,
    chuck_url: String,
    dad_url: String,
}

impl JokeFetcher {
    /// Builds a fetcher with one shared HTTP client.
    pub fn new(chuck_url: impl Into<String>, dad_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("chistes-server/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(JokeFetcher {
            client,
            chuck_url: chuck_url.into(),
            dad_url: dad_url.into(),
        })
    }

    /// Fetches one joke from `provider`.
    pub async fn fetch(&self, provider: Provider) -> Result<String, FetchError> {
        let request = match provider {
            Provider::Chuck => self.client.get(&self.chuck_url),
            Provider::Dad => self
                .client
                .get(&self.dad_url)
                .header(ACCEPT, "application/json"),
        };

        let response = request
            .send()
            .await
            .map_err(|source| FetchError::Request { provider, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { provider, status });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Request { provider, source })?;

        let joke = match provider {
            Provider::Chuck => serde_json::from_str::<ChuckResponse>(&body).map(|r| r.value),
            Provider::Dad => serde_json::from_str::<DadResponse>(&body).map(|r| r.joke),
        }
        .map_err(|source| FetchError::Parse { provider, source })?;

        let joke = joke
            .filter(|s| !s.is_empty())
            .ok_or(FetchError::MissingJoke { provider })?;

        tracing::debug!(%provider, "fetched upstream joke");
        Ok(joke)
    }
}
