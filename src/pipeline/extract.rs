//! Extractor trait for turning markup into a record

use crate::error::Result;

/// Extractor trait for parsing raw markup into a structured value
///
/// Extraction is synchronous and a pure function of the markup text.
///
/// # Example
/// ```no_run
/// use transit_card_balance::pipeline::Extractor;
/// use transit_card_balance::error::Result;
///
/// struct TitleLength;
///
/// impl Extractor for TitleLength {
///     type Output = usize;
///
///     fn extract(&self, markup: &str) -> Result<Self::Output> {
///         Ok(markup.len())
///     }
/// }
/// ```
pub trait Extractor: Send + Sync {
    /// Value produced from the markup
    type Output: Send;

    /// Extract a value from `markup`
    ///
    /// # Errors
    /// Returns [`crate::BalanceError::Parse`] only when the markup cannot be
    /// queried at all. Missing fields must degrade, not fail.
    fn extract(&self, markup: &str) -> Result<Self::Output>;
}
