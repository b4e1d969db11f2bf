//! Balance page fetcher
//!
//! Submits the portal's balance form via POST, the same way the submit button
//! on the portal's own page does.

use crate::client::PortalClient;
use crate::error::{NetworkError, Result};
use crate::pipeline::Fetcher;

/// Form field carrying the card number
const CARD_NUMBER_FIELD: &str = "cardnumber";

/// Click coordinates the portal's image submit button reports
const SUBMIT_X: (&str, &str) = ("submitButton.x", "41");
const SUBMIT_Y: (&str, &str) = ("submitButton.y", "4");

/// Fetcher for the card balance page
///
/// # Example
/// ```no_run
/// use transit_card_balance::balance::PortalFetcher;
/// use transit_card_balance::client::{PortalClient, PortalConfig};
/// use transit_card_balance::pipeline::Fetcher;
/// use url::Url;
///
/// # async fn example() -> eyre::Result<()> {
/// let config = PortalConfig::new(
///     Url::parse("https://portal.example.com/balance")?,
///     "https://portal.example.com/",
/// );
/// let fetcher = PortalFetcher::new(PortalClient::try_new(config)?);
///
/// let html = fetcher.fetch("01640000000000000000").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct PortalFetcher {
    client: PortalClient,
}

impl PortalFetcher {
    /// Create a new balance page fetcher
    ///
    /// # Arguments
    /// * `client` - Portal HTTP client
    pub fn new(client: PortalClient) -> Self {
        Self { client }
    }

    /// The underlying portal client
    pub fn client(&self) -> &PortalClient {
        &self.client
    }

    /// The form fields submitted for `card_number`
    fn form_fields(card_number: &str) -> [(&str, &str); 3] {
        [(CARD_NUMBER_FIELD, card_number), SUBMIT_X, SUBMIT_Y]
    }
}

impl Fetcher for PortalFetcher {
    async fn fetch(&self, card_number: &str) -> Result<String> {
        log::debug!("Submitting balance form to {}", self.client);

        let response = self
            .client
            .post_form(&Self::form_fields(card_number))
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::debug!("Balance endpoint answered {}", status);
            return Err(NetworkError::Status(status).into());
        }

        let body = response.text().await?;
        log::trace!("Received {} bytes from balance endpoint", body.len());

        Ok(body)
    }
}
