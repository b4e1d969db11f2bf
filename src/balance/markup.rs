//! Positional text lookup over a parsed page

use scraper::{Html, Selector};

/// A parsed HTML page queried by selector and position.
///
/// Parsing follows the HTML5 algorithm, so unclosed tags, stray end tags and
/// missing `<html>`/`<body>` wrappers are repaired the way a browser would
/// repair them. Parsing never fails.
///
/// # Example
/// ```
/// use transit_card_balance::balance::Markup;
/// use scraper::Selector;
///
/// let markup = Markup::parse("<p class='a'> one </p><p class='a'>two</p>");
/// let selector = Selector::parse("p.a").unwrap();
///
/// assert_eq!(markup.text(&selector, 0), "one");
/// assert_eq!(markup.text(&selector, 1), "two");
/// assert_eq!(markup.text(&selector, 2), "");
/// ```
pub struct Markup {
    document: Html,
}

impl Markup {
    /// Parse a whole document
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);
        if !document.errors.is_empty() {
            log::trace!("Repaired {} markup error(s)", document.errors.len());
        }
        Self { document }
    }

    /// Trimmed text of the `index`-th element matching `selector`, in document order.
    ///
    /// The text is every descendant text node concatenated. Returns an empty
    /// string when fewer than `index + 1` elements match.
    pub fn text(&self, selector: &Selector, index: usize) -> String {
        self.document
            .select(selector)
            .nth(index)
            .map(|element| element.text().collect::<String>().trim().to_string())
            .unwrap_or_default()
    }

    /// Number of elements matching `selector`
    pub fn count(&self, selector: &Selector) -> usize {
        self.document.select(selector).count()
    }
}
