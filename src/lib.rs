//! Favcache - Local favicon cache for password-manager launchers
//!
//! Resolves remote favicons for launcher entries through a fallback URL
//! chain, caching both the image bytes and a status record so lookups on
//! the interactive path never touch the network.

pub mod batch;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod favicon;
pub mod index;
pub mod layout;

pub use error::{FavcacheError, FavcacheResult};
