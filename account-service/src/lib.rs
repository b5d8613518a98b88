//! Account service for creating and looking up bank accounts by user

pub mod account_number;
pub mod config;
pub mod grpc;
pub mod repository;
pub mod server;
pub mod service;

pub use account_number::{AccountNumberGenerator, RandomAccountNumbers};
pub use config::AccountServiceConfig;
pub use grpc::AccountsGrpcService;
pub use repository::{AccountRepository, InMemoryAccountRepository};
pub use service::AccountService;
pub use service::RepositoryType;
