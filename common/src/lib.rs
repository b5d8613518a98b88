//! Common types and utilities for the accounts service
//!
//! This library contains the shared error taxonomy and the domain models
//! used by the account service and its tests.

pub mod error;
pub mod model;

/// Re-export important types
pub use error::{Error, Result, IntoError};
pub use model::account::AccountEntity;
