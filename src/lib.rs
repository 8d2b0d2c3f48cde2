//! Krystal Cloud API CLI
//!
//! A command-line client for the Krystal Cloud DeFi data API:
//! - Query chains, protocols, balances, pools, positions, and strategies
//! - Persistent API-key and base-URL configuration
//! - Pretty or JSON output for terminal and scripting use
//!
//! Every API operation is a single HTTP GET. Public endpoints use an
//! unauthenticated client; the rest attach the stored API key via the
//! `KC-APIKey` header.

pub mod client;
pub mod commands;
pub mod config;
pub mod output;

mod error;

// Re-export commonly used types
pub use client::{Params, RequestClient};
pub use config::{ConfigStore, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use output::{OutputFormat, Printer};
