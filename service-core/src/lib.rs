//! service-core: Shared infrastructure for the content backend services.
pub mod config;
pub mod error;
pub mod observability;
