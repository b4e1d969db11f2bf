//! Fetch-then-extract pipeline abstractions
//!
//! This module provides the two stage traits ([`Fetcher`], [`Extractor`]) and the
//! [`Pipeline`] that sequences them for a single card lookup.

mod extract;
mod fetch;
mod runner;

pub use extract::Extractor;
pub use fetch::Fetcher;
pub use runner::{Pipeline, mask_card_number};
