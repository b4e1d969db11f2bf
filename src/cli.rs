//! CLI helper functions

use crate::{
    BalancePipeline,
    balance::{CardBalanceRecord, CardPageExtractor, PortalFetcher},
    client::{PortalClient, PortalConfig},
    pipeline::{Extractor, Pipeline},
};
use eyre::{Context, Result};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// What callers are told when a lookup fails; details only go to the log
pub const GENERIC_FAILURE: &str = "An error occurred while fetching the balance.";

/// Load portal settings from environment variables
///
/// Expected environment variables:
/// - BALANCE_ENDPOINT_URL: Form action URL of the balance page (required)
/// - BALANCE_ENDPOINT_REFERRER: Referer header value (required)
/// - BALANCE_REQUEST_TIMEOUT_SECS: Request timeout in seconds (optional, defaults to 30)
/// - BALANCE_USER_AGENT: User-Agent header value (optional)
pub fn load_portal_config() -> Result<PortalConfig> {
    let url_str = std::env::var("BALANCE_ENDPOINT_URL")
        .context("BALANCE_ENDPOINT_URL environment variable not set")?;
    let url = Url::parse(&url_str)
        .with_context(|| format!("Invalid BALANCE_ENDPOINT_URL: {}", url_str))?;

    let referrer = std::env::var("BALANCE_ENDPOINT_REFERRER")
        .context("BALANCE_ENDPOINT_REFERRER environment variable not set")?;

    let mut config = PortalConfig::new(url, referrer);

    if let Ok(secs) = std::env::var("BALANCE_REQUEST_TIMEOUT_SECS") {
        let secs: u64 = secs
            .trim()
            .parse()
            .with_context(|| format!("Invalid BALANCE_REQUEST_TIMEOUT_SECS: {}", secs))?;
        if secs == 0 {
            eyre::bail!("Invalid BALANCE_REQUEST_TIMEOUT_SECS: must be greater than zero");
        }
        config = config.with_timeout(Duration::from_secs(secs));
    }

    if let Ok(user_agent) = std::env::var("BALANCE_USER_AGENT") {
        config = config.with_user_agent(user_agent);
    }

    Ok(config)
}

/// Build the balance pipeline from environment variables
///
/// Fails before any lookup is attempted if the configuration is missing or invalid.
pub fn load_balance_pipeline() -> Result<BalancePipeline> {
    let config = load_portal_config()?;
    let client = PortalClient::try_new(config).context("Failed to create portal client")?;
    let extractor = CardPageExtractor::try_new().context("Failed to prepare page extractor")?;
    Ok(Pipeline::new(PortalFetcher::new(client), extractor))
}

/// Look up one card and render the record as JSON
///
/// Pipeline: PortalFetcher → CardPageExtractor → JSON
pub async fn lookup_card(
    pipeline: &BalancePipeline,
    card_number: &str,
    compact: bool,
) -> Result<String> {
    let record = pipeline.get_card_details(card_number).await?;
    render_record(&record, compact)
}

/// Parse a saved balance page from disk
///
/// Useful for checking a captured page against the extractor without
/// touching the portal.
pub fn parse_page_file(path: impl AsRef<Path>) -> Result<CardBalanceRecord> {
    let path = path.as_ref();
    log::info!("Parsing saved page {}", path.display());

    let html = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read page: {}", path.display()))?;

    let extractor = CardPageExtractor::try_new()?;
    let record = extractor.extract(&html)?;
    Ok(record)
}

/// Render a record as JSON, pretty-printed unless `compact`
pub fn render_record(record: &CardBalanceRecord, compact: bool) -> Result<String> {
    let json = match compact {
        true => serde_json::to_string(record)?,
        false => serde_json::to_string_pretty(record)?,
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::YesNo;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn clear_env() {
        unsafe {
            std::env::remove_var("BALANCE_ENDPOINT_URL");
            std::env::remove_var("BALANCE_ENDPOINT_REFERRER");
            std::env::remove_var("BALANCE_REQUEST_TIMEOUT_SECS");
            std::env::remove_var("BALANCE_USER_AGENT");
        }
    }

    #[test]
    #[serial_test::serial]
    fn test_load_portal_config_no_url() {
        clear_env();

        let result = load_portal_config();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("BALANCE_ENDPOINT_URL")
        );
    }

    #[test]
    #[serial_test::serial]
    fn test_load_portal_config_no_referrer() {
        clear_env();
        unsafe {
            std::env::set_var("BALANCE_ENDPOINT_URL", "https://portal.example.com/balance");
        }

        let result = load_portal_config();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("BALANCE_ENDPOINT_REFERRER")
        );

        clear_env();
    }

    #[test]
    #[serial_test::serial]
    fn test_load_portal_config_invalid_url() {
        clear_env();
        unsafe {
            std::env::set_var("BALANCE_ENDPOINT_URL", "not-a-valid-url");
            std::env::set_var("BALANCE_ENDPOINT_REFERRER", "https://portal.example.com/");
        }

        let result = load_portal_config();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Invalid BALANCE_ENDPOINT_URL")
        );

        clear_env();
    }

    #[test]
    #[serial_test::serial]
    fn test_load_portal_config_with_overrides() {
        clear_env();
        unsafe {
            std::env::set_var("BALANCE_ENDPOINT_URL", "https://portal.example.com/balance");
            std::env::set_var("BALANCE_ENDPOINT_REFERRER", "https://portal.example.com/");
            std::env::set_var("BALANCE_REQUEST_TIMEOUT_SECS", "5");
            std::env::set_var("BALANCE_USER_AGENT", "test-agent");
        }

        let config = load_portal_config().unwrap();
        assert_eq!(config.endpoint.as_str(), "https://portal.example.com/balance");
        assert_eq!(config.referrer, "https://portal.example.com/");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test-agent");

        assert!(load_balance_pipeline().is_ok());

        clear_env();
    }

    #[test]
    #[serial_test::serial]
    fn test_load_portal_config_bad_timeout() {
        clear_env();
        unsafe {
            std::env::set_var("BALANCE_ENDPOINT_URL", "https://portal.example.com/balance");
            std::env::set_var("BALANCE_ENDPOINT_REFERRER", "https://portal.example.com/");
            std::env::set_var("BALANCE_REQUEST_TIMEOUT_SECS", "soon");
        }
        assert!(load_portal_config().is_err());

        unsafe {
            std::env::set_var("BALANCE_REQUEST_TIMEOUT_SECS", "0");
        }
        let result = load_portal_config();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("greater than zero")
        );

        clear_env();
    }

    #[test]
    fn test_parse_page_file() {
        let mut page = NamedTempFile::new().unwrap();
        write!(
            page,
            r#"<table><tr>
                <td class="Content_bold">Hotlisted Status : No</td>
                <td class="Content_bold">Your card will expire on : 06/30/2029</td>
            </tr></table>"#
        )
        .unwrap();

        let record = parse_page_file(page.path()).unwrap();
        assert_eq!(record.balance_protected, YesNo::Yes);
        assert_eq!(record.hotlisted_status, YesNo::No);
        assert_eq!(record.card_expiration_date, "06/30/2029");
    }

    #[test]
    fn test_parse_page_file_missing() {
        let result = parse_page_file("/nonexistent/balance.html");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read page"));
    }

    #[test]
    fn test_render_record_compact() {
        let record = crate::balance::parse_card_page("").unwrap();
        let json = render_record(&record, true).unwrap();
        assert_eq!(
            json,
            r#"{"balanceProtected":"Yes","hotlistedStatus":"Yes","cardExpirationDate":"","productName":"","productExpireDate":"","remainingRides":"","storedValue":""}"#
        );
    }
}
