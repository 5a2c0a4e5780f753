//! Common error handling utilities for UserHub Engine
//!
//! This module provides the standardized error taxonomy shared by all
//! UserHub Engine crates. Every service-level failure is one of a small
//! set of variants so the HTTP boundary can map errors to transport
//! statuses without inspecting collaborator-specific types.
//!
//! # Error Categories
//!
//! - **Conflict**: a uniqueness constraint was violated (duplicate email)
//! - **NotFound**: an email, account id, address id, or phone id did not resolve
//! - **Unauthorized**: authentication failed; all credential failures collapse
//!   into one variant so callers cannot tell which component was wrong
//! - **InvalidFormat**: input failed format validation (malformed postal code)
//! - **Database / External / Internal**: collaborator failures, surfaced
//!   unmodified with their cause preserved

pub mod codes;
pub mod types;

pub use codes::*;
pub use types::*;
