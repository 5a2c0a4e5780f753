//! Owner-scoped address and phone records for UserHub Engine
//!
//! Dependent records belong to an account but are independently addressable
//! by id. Creation is owner-scoped: the target account is derived from the
//! authenticated caller's bearer token, never from caller-supplied fields.
//! Updates go directly by record id.

pub mod models;
pub mod owner;
pub mod repository;
pub mod service;

pub use models::*;
pub use owner::OwnerResolver;
pub use repository::{
    AddressRepository, InMemoryAddressRepository, InMemoryPhoneRepository, PhoneRepository,
    PostgresAddressRepository, PostgresPhoneRepository,
};
pub use service::ContactService;
