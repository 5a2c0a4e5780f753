//! Identity management and account authentication for UserHub Engine
//!
//! This crate provides the identity core:
//! - Account registration with email-uniqueness enforcement
//! - Credential authentication issuing bearer JWTs
//! - Token-to-identity resolution for owner-scoped operations
//! - Profile updates driven by the authenticated caller's token
//!
//! All collaborators (repository, password encoder, token codec) are
//! injected through the constructor; there are no process-wide singletons.

pub mod config;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod token;

pub use config::IdentityConfig;
pub use models::*;
pub use password::{Argon2Encoder, PasswordEncoder};
pub use repository::{AccountRepository, InMemoryAccountRepository, PostgresAccountRepository};
pub use service::IdentityService;
pub use token::{JwtCodec, TokenCodec, BEARER_PREFIX};
