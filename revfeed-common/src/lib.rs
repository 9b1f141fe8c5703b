//! # RevFeed Common Library
//!
//! Shared code for the RevFeed review feedback service:
//! - Error types
//! - Configuration loading
//! - Timestamp utilities

pub mod config;
pub mod error;
pub mod time;

pub use error::{Error, Result};
