//! Account service implementation

use std::sync::Arc;

use common::error::{Error, Result};
use common::model::account::AccountEntity;
use tracing::{debug, error, info};

use crate::account_number::{AccountNumberGenerator, RandomAccountNumbers};
use crate::repository::{AccountRepository, InMemoryAccountRepository};

/// Account service for creating and looking up accounts by user
pub struct AccountService {
    /// Repository for account data
    repo: Arc<dyn AccountRepository>,
    /// Source of new account numbers
    numbers: Arc<dyn AccountNumberGenerator>,
}

/// Repository Type
pub enum RepositoryType {
    /// In-memory repository
    InMemory,
}

impl Default for AccountService {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountService {
    /// Create a new account service backed by an in-memory repository
    pub fn new() -> Self {
        Self::from_repository(Arc::new(InMemoryAccountRepository::new()))
    }

    /// Create a new account service with a specific repository type
    pub fn with_repository(repo_type: RepositoryType) -> Self {
        let repo: Arc<dyn AccountRepository> = match repo_type {
            RepositoryType::InMemory => Arc::new(InMemoryAccountRepository::new()),
        };

        Self::from_repository(repo)
    }

    /// Create a new account service on top of an existing repository
    pub fn from_repository(repo: Arc<dyn AccountRepository>) -> Self {
        Self {
            repo,
            numbers: Arc::new(RandomAccountNumbers),
        }
    }

    /// Replace the account number source
    pub fn with_generator(mut self, numbers: Arc<dyn AccountNumberGenerator>) -> Self {
        self.numbers = numbers;
        self
    }

    /// Create an account for a user, replacing any previous one
    ///
    /// `user_id` is checked before `currency`; neither failure touches the
    /// repository. The returned entity is the one the repository reports as
    /// stored.
    pub async fn create_account(&self, user_id: &str, currency: &str) -> Result<AccountEntity> {
        if user_id.is_empty() {
            return Err(Error::InvalidUserId);
        }
        if currency.is_empty() {
            return Err(Error::InvalidCurrency);
        }

        let entity = AccountEntity::new(user_id, self.numbers.next_account_number(), currency);
        info!("Creating {} account for user {}", entity.currency, entity.user_id);

        let stored = self.repo.save(entity).await.map_err(|e| {
            error!("Failed to save account for user {}: {}", user_id, e);
            Error::RepositoryError
        })?;

        debug!("Stored account {} for user {}", stored.account_number, stored.user_id);
        Ok(stored)
    }

    /// Get the account of a user
    ///
    /// A user without an account yields `Ok(None)`.
    pub async fn get_account(&self, user_id: &str) -> Result<Option<AccountEntity>> {
        if user_id.is_empty() {
            return Err(Error::InvalidUserId);
        }

        self.repo.find_by_user_id(user_id).await.map_err(|e| {
            error!("Failed to load account for user {}: {}", user_id, e);
            Error::RepositoryError
        })
    }
}
