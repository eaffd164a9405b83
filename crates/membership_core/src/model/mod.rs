//! Member domain model.
//!
//! # Responsibility
//! - Define the member record and the reduced projections listing views use.
//! - Own field-level validation rules shared by every write path.
//!
//! # Invariants
//! - A persisted member is identified by a store-assigned `MemberId`.
//! - There is no deletion state; records only change by full replacement.

pub mod member;
pub mod validation;
