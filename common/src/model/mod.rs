//! Domain models for the accounts service

pub mod account;
