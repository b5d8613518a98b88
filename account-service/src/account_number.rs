//! Account number generation

use rand::Rng;

/// Source of account numbers for newly created accounts
pub trait AccountNumberGenerator: Send + Sync {
    /// Produce the account number for the next account
    fn next_account_number(&self) -> String;
}

/// Draws account numbers from the thread-local pseudo-random generator.
///
/// Numbers are the unsigned decimal rendering of a `u64`. Collisions are
/// possible and are not detected.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomAccountNumbers;

impl AccountNumberGenerator for RandomAccountNumbers {
    fn next_account_number(&self) -> String {
        let draw: u64 = rand::thread_rng().gen();
        draw.to_string()
    }
}
