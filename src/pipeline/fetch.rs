//! Fetcher trait for retrieving raw markup for a card

use crate::error::Result;

/// Fetcher trait for obtaining the raw balance page for a card number
///
/// Implementors perform exactly one outbound call per invocation and keep no
/// state between invocations. The card number is passed through untouched.
///
/// # Example
/// ```no_run
/// use transit_card_balance::pipeline::Fetcher;
/// use transit_card_balance::error::Result;
///
/// struct CannedPage(String);
///
/// impl Fetcher for CannedPage {
///     async fn fetch(&self, _card_number: &str) -> Result<String> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
pub trait Fetcher: Send + Sync {
    /// Fetch the raw markup for `card_number`
    ///
    /// # Errors
    /// Returns [`crate::BalanceError::Network`] on transport failure, timeout,
    /// or a non-success response status.
    fn fetch(&self, card_number: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}
