//! Repository for account data

use async_trait::async_trait;
use common::error::Result;
use common::model::account::AccountEntity;
use dashmap::DashMap;
use tracing::debug;

/// Account repository trait defining the interface for account data storage
///
/// Callers validate `user_id` before reaching the repository; implementations
/// do not check it again.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert or overwrite the account stored under `entity.user_id`
    async fn save(&self, entity: AccountEntity) -> Result<AccountEntity>;

    /// Get the most recently saved account for a user
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<AccountEntity>>;
}

/// In-memory repository for account data
///
/// Entries live for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    /// Accounts by user ID
    accounts: DashMap<String, AccountEntity>,
}

impl InMemoryAccountRepository {
    /// Create a new in-memory account repository
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }

    /// Number of stored accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether no account has been stored yet
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn save(&self, entity: AccountEntity) -> Result<AccountEntity> {
        debug!("Saving account {} for user {}", entity.account_number, entity.user_id);

        self.accounts.insert(entity.user_id.clone(), entity.clone());
        Ok(entity)
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<AccountEntity>> {
        Ok(self.accounts.get(user_id).map(|a| a.clone()))
    }
}
