//! Pipeline orchestration for card balance lookups

use super::{Extractor, Fetcher};
use crate::error::Result;
use owo_colors::OwoColorize;

/// Pipeline that sequences a [`Fetcher`] and an [`Extractor`]
///
/// Each call to [`Pipeline::get_card_details`] walks
/// `Idle -> Fetching -> Parsing -> Done`, or stops in `Failed` at the stage that
/// went wrong. Nothing is kept between calls, so one pipeline can serve many
/// concurrent lookups.
///
/// # Type Parameters
/// - `F`: Fetcher type
/// - `X`: Extractor type
///
/// # Example
/// ```no_run
/// use transit_card_balance::balance::{CardPageExtractor, PortalFetcher};
/// use transit_card_balance::client::{PortalClient, PortalConfig};
/// use transit_card_balance::Pipeline;
/// use url::Url;
///
/// # async fn example() -> eyre::Result<()> {
/// let config = PortalConfig::new(
///     Url::parse("https://portal.example.com/balance")?,
///     "https://portal.example.com/",
/// );
/// let pipeline = Pipeline::new(
///     PortalFetcher::new(PortalClient::try_new(config)?),
///     CardPageExtractor::try_new()?,
/// );
///
/// let record = pipeline.get_card_details("01640000000000000000").await?;
/// println!("{}", record.stored_value);
/// # Ok(())
/// # }
/// ```
pub struct Pipeline<F, X> {
    fetcher: F,
    extractor: X,
}

impl<F, X> Pipeline<F, X>
where
    F: Fetcher,
    X: Extractor,
{
    /// Create a new pipeline
    pub fn new(fetcher: F, extractor: X) -> Self {
        Self { fetcher, extractor }
    }

    /// Fetch the balance page for `card_number` and extract its fields
    ///
    /// A fetch failure is returned as-is and the extractor is not invoked.
    ///
    /// # Errors
    /// Returns [`crate::BalanceError::Network`] from the fetch stage or
    /// [`crate::BalanceError::Parse`] from the extract stage.
    pub async fn get_card_details(&self, card_number: &str) -> Result<X::Output> {
        let masked = mask_card_number(card_number);
        log::info!("Looking up balance for card {}", masked.bright_black());

        log::debug!("Fetching balance page...");
        let markup = match self.fetcher.fetch(card_number).await {
            Ok(markup) => markup,
            Err(e) => {
                log::error!("Failed to fetch card details for card {}: {}", masked, e);
                return Err(e);
            }
        };
        log::trace!("Fetched {} bytes of markup", markup.len());

        log::debug!("Parsing balance page...");
        match self.extractor.extract(&markup) {
            Ok(details) => {
                log::info!("Retrieved card details for card {}", masked.bright_black());
                Ok(details)
            }
            Err(e) => {
                log::error!("Failed to parse card details for card {}: {}", masked, e);
                Err(e)
            }
        }
    }

    /// Borrow the fetch stage
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Borrow the extract stage
    pub fn extractor(&self) -> &X {
        &self.extractor
    }
}

/// Hide all but the last four characters of a card number for logging.
///
/// Numbers of four characters or fewer are masked completely.
pub fn mask_card_number(card_number: &str) -> String {
    let count = card_number.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = card_number.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), tail)
}
