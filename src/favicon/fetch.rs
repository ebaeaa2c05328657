//! Favicon download transport
//!
//! `Fetcher` is the seam between the orchestrator and the network; the
//! production implementation is a blocking `ureq` agent.

use crate::error::{FavcacheError, FavcacheResult};
use tracing::debug;
use ureq::Agent;

/// Blocking transport for a single candidate URL
pub trait Fetcher {
    /// Fetch one URL; `Ok` only for a 200 response with a readable body.
    fn get_bytes(&self, url: &str) -> FavcacheResult<Vec<u8>>;
}

/// HTTPS fetcher backed by a shared `ureq` agent
pub struct HttpFetcher {
    agent: Agent,
}

impl HttpFetcher {
    pub fn new() -> Self {
        // Non-2xx responses are inspected, not surfaced as transport
        // errors: only an exact 200 accepts a candidate.
        let agent: Agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for HttpFetcher {
    fn get_bytes(&self, url: &str) -> FavcacheResult<Vec<u8>> {
        let mut response = self.agent.get(url).call()?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(FavcacheError::UnexpectedStatus {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.body_mut().read_to_vec()?)
    }
}

/// Walk the candidate list in order, returning the first payload.
///
/// Transport errors and non-200 statuses both just advance to the next
/// candidate; no candidate is retried.
pub fn download_first(fetcher: &dyn Fetcher, candidates: &[String]) -> Option<Vec<u8>> {
    for url in candidates {
        match fetcher.get_bytes(url) {
            Ok(bytes) => {
                debug!("fetched {} ({} bytes)", url, bytes.len());
                return Some(bytes);
            }
            Err(e) => debug!("candidate {} failed: {}", url, e),
        }
    }

    None
}
