//! Account models and related types

use serde::{Deserialize, Serialize};

/// Account record as held by a repository
///
/// One account exists per user; saving a second account for the same
/// `user_id` replaces the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountEntity {
    /// Owner of the account, used as the storage key
    pub user_id: String,
    /// Decimal rendering of a 64-bit draw taken at creation time
    pub account_number: String,
    /// Currency label (e.g., "EUR"), not validated against ISO-4217
    pub currency: String,
}

impl AccountEntity {
    /// Create a new account entity
    pub fn new(
        user_id: impl Into<String>,
        account_number: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            account_number: account_number.into(),
            currency: currency.into(),
        }
    }
}
