//! Network-only fetch policy.
//!
//! Mirrors the embedded service worker (`sw.js`): nothing is cached, every
//! request goes to the network, and a failed fetch turns into a synthetic
//! `503 Network error`. The preview server answers every request through
//! [`NetworkOnly`], so it behaves like the deployed worker.

use crate::utils::mime;
use std::io;
use thiserror::Error;

/// Body of the synthetic response for a failed fetch.
pub const NETWORK_ERROR_BODY: &str = "Network error";

/// Status of the synthetic response for a failed fetch.
pub const NETWORK_ERROR_STATUS: u16 = 503;

/// `Cache-Control` value sent with every response.
pub const NO_STORE: &str = "no-store";

/// A fetch that never produced a response.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network request for `{0}` failed")]
    Network(String, #[source] io::Error),

    #[error("request for `{0}` timed out")]
    Timeout(String),
}

/// A response as seen by the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl WorkerResponse {
    pub fn new(status: u16, content_type: &'static str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type,
            body: body.into(),
        }
    }

    pub fn network_error() -> Self {
        Self::new(NETWORK_ERROR_STATUS, mime::types::PLAIN, NETWORK_ERROR_BODY)
    }

    /// Response headers, including the no-store directive.
    pub fn headers(&self) -> [(&'static str, &'static str); 2] {
        [("Content-Type", self.content_type), ("Cache-Control", NO_STORE)]
    }
}

/// Something that can answer a request over the "network".
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<WorkerResponse, FetchError>;
}

/// Network-only strategy over a [`Fetch`] implementation.
#[derive(Debug, Clone)]
pub struct NetworkOnly<F> {
    inner: F,
}

impl<F: Fetch> NetworkOnly<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }

    /// Fetch `url`, mapping any failure to the synthetic 503.
    pub fn respond(&self, url: &str) -> WorkerResponse {
        match self.inner.fetch(url) {
            Ok(response) => response,
            Err(err) => {
                crate::debug!("worker"; "{}", err);
                WorkerResponse::network_error()
            }
        }
    }
}
