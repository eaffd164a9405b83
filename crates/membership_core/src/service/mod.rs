//! Core use-case services.
//!
//! # Responsibility
//! - Turn repository calls into the value-returning API presentation code
//!   consumes.
//! - Keep UI layers decoupled from storage details.

pub mod member_service;
