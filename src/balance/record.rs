//! Card balance record returned to callers

use serde::{Deserialize, Serialize};

/// A yes/no flag as the portal reports it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// `No` when `negative` holds, `Yes` otherwise
    pub fn unless(negative: bool) -> Self {
        if negative { Self::No } else { Self::Yes }
    }
}

impl std::fmt::Display for YesNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yes => write!(f, "Yes"),
            Self::No => write!(f, "No"),
        }
    }
}

/// Everything the balance page says about one card.
///
/// Text fields hold whatever the page rendered, trimmed, and are empty when the
/// page did not have the corresponding cell. Nothing here is validated or
/// converted; `remaining_rides` and `stored_value` in particular are not
/// guaranteed to be numeric.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardBalanceRecord {
    pub balance_protected: YesNo,
    pub hotlisted_status: YesNo,
    pub card_expiration_date: String,
    pub product_name: String,
    pub product_expire_date: String,
    pub remaining_rides: String,
    /// Label fragment followed directly by value fragment
    pub stored_value: String,
}
