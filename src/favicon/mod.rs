//! Favicon resolution: candidate URL generation and download transport

pub mod candidates;
pub mod fetch;

pub use candidates::candidate_urls;
pub use fetch::{download_first, Fetcher, HttpFetcher};
