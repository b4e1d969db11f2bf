//! Transit Card Balance
//!
//! Fetches a transit card's balance page from a web portal that has no API and
//! reads the card's details out of the returned HTML.

pub mod balance;
pub mod cli;
pub mod client;
pub mod error;
pub mod pipeline;

// Re-exports for convenience
pub use balance::{CardBalanceRecord, CardPageExtractor, PortalFetcher, YesNo};
pub use client::{PortalClient, PortalConfig};
pub use error::{BalanceError, NetworkError};
pub use pipeline::{Extractor, Fetcher, Pipeline};

/// The pipeline wired to the real portal
pub type BalancePipeline = Pipeline<PortalFetcher, CardPageExtractor>;
