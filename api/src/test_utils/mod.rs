//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - mockall has lifetime issues with traits containing `&str` parameters
//! - Manual mocks are more explicit and easier to debug
//! - We control exactly what they return without macro magic
//!
//! Note: the 401/403 behavior of the protected routes lives in the auth
//! middleware wiring; AppState is concrete over the Postgres adapters,
//! so coverage of the permission and CRUD semantics sits at the service
//! layer against these in-memory repositories.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
