//! `gatepass-auth` — principal identity and the organizer-only check.
//!
//! This crate is intentionally decoupled from transport and storage.

pub mod authorize;
pub mod principal;

pub use authorize::{AuthzError, ensure_organizer};
pub use principal::PrincipalId;
