//! Balance portal client module
//!
//! Provides `PortalClient` for submitting the balance form to the card portal.
//! The portal has no API; it only serves HTML in response to a form post.

use super::{DEFAULT_USER_AGENT, browser_headers};
use eyre::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Total time allowed for one balance request when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the balance portal
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortalConfig {
    /// Form action URL of the balance page
    pub endpoint: Url,
    /// Page the form is normally submitted from, sent as the `Referer` header
    pub referrer: String,
    /// Upper bound on one request, connect through body
    pub timeout: Duration,
    pub user_agent: String,
}

impl PortalConfig {
    /// Create a config with the default timeout and user agent
    pub fn new(endpoint: Url, referrer: impl Into<String>) -> Self {
        Self {
            endpoint,
            referrer: referrer.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Portal client for submitting the balance form.
///
/// Every request carries the browser headers from [`browser_headers`] and is
/// bounded by the configured timeout. The client holds no per-request state and
/// is cheap to clone; clones share one connection pool.
///
/// # Example
/// ```no_run
/// use transit_card_balance::client::{PortalClient, PortalConfig};
/// use url::Url;
///
/// # async fn example() -> eyre::Result<()> {
/// let config = PortalConfig::new(
///     Url::parse("https://portal.example.com/balance")?,
///     "https://portal.example.com/",
/// );
/// let client = PortalClient::try_new(config)?;
///
/// let response = client
///     .post_form(&[("cardnumber", "01640000000000000000")])
///     .await?;
/// println!("{}", response.status());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct PortalClient {
    client: Client,
    endpoint: Url,
}

impl PortalClient {
    /// Create a new PortalClient from a config.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The referrer or user agent is not a valid header value
    /// - The HTTP client cannot be built
    pub fn try_new(config: PortalConfig) -> Result<Self> {
        let headers = browser_headers(&config.referrer, &config.user_agent)?;
        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        log::debug!(
            "Portal client ready for {} (timeout {:?})",
            config.endpoint,
            config.timeout
        );

        Ok(Self {
            client,
            endpoint: config.endpoint,
        })
    }

    /// Get the form action URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST `fields` to the endpoint as an `application/x-www-form-urlencoded` body.
    ///
    /// The response is returned whatever its status; callers decide what counts
    /// as success.
    pub async fn post_form(&self, fields: &[(&str, &str)]) -> reqwest::Result<reqwest::Response> {
        log::debug!("POST {}", self.endpoint);
        self.client
            .post(self.endpoint.clone())
            .form(fields)
            .send()
            .await
    }
}

impl std::fmt::Display for PortalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.endpoint)
    }
}
