//! Balance portal HTTP client and browser header mimicry.
//!
//! This module provides the [`PortalClient`] that talks to the card balance
//! web portal, its [`PortalConfig`], and the headers ([`browser_headers`]) that
//! make each request look like a form submitted from a browser.

mod browser;
mod portal;

pub use browser::{DEFAULT_USER_AGENT, browser_headers};
pub use portal::{DEFAULT_TIMEOUT, PortalClient, PortalConfig};
