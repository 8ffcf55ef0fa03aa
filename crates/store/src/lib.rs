//! Persistence store for institution records.
//!
//! Provides the [`InstitutionStore`] trait with two backends:
//! - [`InMemoryInstitutionStore`] for tests and single-process runs
//! - [`PostgresInstitutionStore`] backed by a `sqlx` connection pool

pub mod error;
pub mod memory;
pub mod postgres;
pub mod record;
pub mod store;

pub use common::InstitutionId;
pub use error::{Result, StoreError};
pub use memory::InMemoryInstitutionStore;
pub use postgres::PostgresInstitutionStore;
pub use record::{InstitutionDocument, InstitutionRecord, StateTotal};
pub use store::{InstitutionStore, InstitutionStoreExt};
