//! Repository layer for member persistence.
//!
//! # Responsibility
//! - Define the data access contract presentation code relies on.
//! - Keep SQLite query details inside the core persistence boundary.
//!
//! # Invariants
//! - Each call commits on its own; no transaction spans calls.
//! - Lookups of unknown ids return `Ok(None)`, not an error.

pub mod member_repo;
