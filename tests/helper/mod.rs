//! Shared integration test utilities

pub mod fixture;

pub use fixture::{VersionDir, properties};
