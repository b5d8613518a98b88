// This is a metapackage for end-to-end tests
// Re-export workspace crates so tests can reach them through one path

pub use account_service;
pub use common;
