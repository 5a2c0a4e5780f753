//! Postal code normalization and directory lookup for UserHub Engine
//!
//! A pure validation gate in front of an external postal directory: input is
//! stripped of spaces and hyphens and must then be exactly 8 ASCII digits;
//! the lookup itself is delegated to the injected [`DirectoryClient`].

pub mod client;
pub mod service;

pub use client::{DirectoryClient, DirectoryEntry, HttpDirectoryClient};
pub use service::{normalize, PostalService};
