//! Card balance page domain.
//!
//! - [`PortalFetcher`] submits the balance form and returns the raw page
//! - [`CardPageExtractor`] reads the page into a [`CardBalanceRecord`]
//! - [`Markup`] is the selector + index query layer both rely on

mod fetcher;
mod markup;
mod page;
mod record;

pub use fetcher::PortalFetcher;
pub use markup::Markup;
pub use page::{CardPageExtractor, StoredValueFragments, parse_card_page};
pub use record::{CardBalanceRecord, YesNo};
