//! Domain layer for the institutions registry.
//!
//! This crate provides:
//! - Value objects enforcing the field rules (`Nome`, `Uf`, `QtdAlunos`)
//! - `InstitutionFields` for create/update input and its validation
//! - `InstitutionService`, the operations exposed over HTTP

pub mod error;
pub mod institution;

pub use error::DomainError;
pub use institution::{
    Institution, InstitutionError, InstitutionFields, InstitutionService, NewInstitution, Nome,
    QTD_ALUNOS_MAX, QtdAlunos, Uf,
};
pub use institution_store::StateTotal;
