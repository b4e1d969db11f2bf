//! Balance page extractor
//!
//! Reads a [`CardBalanceRecord`] out of the portal's balance page. The page has
//! no ids and no stable structure beyond which CSS class a cell carries and in
//! what order the cells appear, so every field is addressed as
//! "the n-th element matching this selector".

use super::{CardBalanceRecord, Markup, YesNo};
use crate::error::{BalanceError, Result};
use crate::pipeline::Extractor;
use scraper::Selector;

const BALANCE_NOT_PROTECTED: &str = "Is your card Balance Protected ? : No";
const NOT_HOTLISTED: &str = "Hotlisted Status : No";
const EXPIRATION_PREFIX: &str = "Your card will expire on : ";

const BOLD_CELL: &str = "td.Content_bold";
const PRODUCT_CELL: &str = "td.Content_normal_black";
const BOLD_ROW: &str = "tr.Content_bold";
const ANY_CELL: &str = "td";

/// The two raw pieces that are glued together into `stored_value`.
///
/// Exposed separately because the stored value lookup is the weakest guess on
/// the page: when the portal shifts a row, these show which half went wrong.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoredValueFragments {
    /// Text of the fourth bold row
    pub label: String,
    /// Text of the second table cell on the page
    pub amount: String,
}

impl StoredValueFragments {
    /// `label` immediately followed by `amount`
    pub fn joined(&self) -> String {
        format!("{}{}", self.label, self.amount)
    }
}

/// Extractor for the card balance page
///
/// # Example
/// ```
/// use transit_card_balance::balance::{CardPageExtractor, YesNo};
/// use transit_card_balance::pipeline::Extractor;
///
/// let html = r#"<table><tr>
///     <td class="Content_bold">Is your card Balance Protected ? : No</td>
///     <td class="Content_bold">Your card will expire on : 12/31/2030</td>
/// </tr></table>"#;
///
/// let record = CardPageExtractor::try_new()?.extract(html)?;
/// assert_eq!(record.balance_protected, YesNo::No);
/// assert_eq!(record.card_expiration_date, "12/31/2030");
/// # Ok::<(), transit_card_balance::BalanceError>(())
/// ```
#[derive(Debug)]
pub struct CardPageExtractor {
    bold_cell: Selector,
    product_cell: Selector,
    bold_row: Selector,
    any_cell: Selector,
}

impl CardPageExtractor {
    /// Compile the field selectors
    ///
    /// # Errors
    /// Returns [`BalanceError::Parse`] if a selector does not compile
    pub fn try_new() -> Result<Self> {
        Ok(Self {
            bold_cell: compile(BOLD_CELL)?,
            product_cell: compile(PRODUCT_CELL)?,
            bold_row: compile(BOLD_ROW)?,
            any_cell: compile(ANY_CELL)?,
        })
    }

    /// Read every field of the record from an already parsed page
    pub fn read(&self, markup: &Markup) -> CardBalanceRecord {
        // Both flags are stated in the first bold cell
        let flags = markup.text(&self.bold_cell, 0);

        let expiration = markup.text(&self.bold_cell, 1);
        let card_expiration_date = expiration.replacen(EXPIRATION_PREFIX, "", 1);

        let fragments = self.stored_value_fragments(markup);
        log::debug!(
            "Stored value fragments: label={:?} amount={:?}",
            fragments.label,
            fragments.amount
        );

        CardBalanceRecord {
            balance_protected: YesNo::unless(flags.contains(BALANCE_NOT_PROTECTED)),
            hotlisted_status: YesNo::unless(flags.contains(NOT_HOTLISTED)),
            card_expiration_date,
            product_name: markup.text(&self.product_cell, 0),
            product_expire_date: markup.text(&self.product_cell, 1),
            remaining_rides: markup.text(&self.product_cell, 2),
            stored_value: fragments.joined(),
        }
    }

    /// The raw pieces behind `stored_value`
    pub fn stored_value_fragments(&self, markup: &Markup) -> StoredValueFragments {
        StoredValueFragments {
            label: markup.text(&self.bold_row, 3),
            amount: markup.text(&self.any_cell, 1),
        }
    }
}

impl Extractor for CardPageExtractor {
    type Output = CardBalanceRecord;

    fn extract(&self, markup: &str) -> Result<Self::Output> {
        let markup = Markup::parse(markup);
        Ok(self.read(&markup))
    }
}

/// Parse a balance page in one call.
///
/// Convenience for callers that look up a single page; reuse a
/// [`CardPageExtractor`] when parsing many.
pub fn parse_card_page(html: &str) -> Result<CardBalanceRecord> {
    CardPageExtractor::try_new()?.extract(html)
}

fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| BalanceError::Parse(format!("selector '{}': {}", css, e)))
}
