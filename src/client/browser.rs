use eyre::{Context, Result};
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, REFERER,
    UPGRADE_INSECURE_REQUESTS, USER_AGENT,
};

/// User agent sent when none is configured
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:124.0) Gecko/20100101 Firefox/124.0";

const ACCEPT_HTML: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";
const ACCEPT_LANGUAGE_EN_US: &str = "en-US,en;q=0.5";
const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Build the headers a browser sends when a user clicks the portal's submit button.
///
/// The portal answers programmatic-looking requests differently, so every
/// request carries the navigation hints, the referring page, and a desktop
/// user agent.
///
/// # Errors
/// Returns an error if `referrer` or `user_agent` is not a valid header value
pub fn browser_headers(referrer: &str, user_agent: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_EN_US));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_URLENCODED));
    headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    headers.insert(
        HeaderName::from_static("sec-fetch-dest"),
        HeaderValue::from_static("document"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-mode"),
        HeaderValue::from_static("navigate"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-site"),
        HeaderValue::from_static("same-origin"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-user"),
        HeaderValue::from_static("?1"),
    );
    headers.insert(
        REFERER,
        referrer
            .parse()
            .with_context(|| format!("Invalid referrer header value: {}", referrer))?,
    );
    headers.insert(
        USER_AGENT,
        user_agent
            .parse()
            .with_context(|| format!("Invalid user agent header value: {}", user_agent))?,
    );
    Ok(headers)
}
