//! Types shared by the store, domain, client and API crates.

pub mod types;

pub use types::{InstitutionId, ParseInstitutionIdError};
