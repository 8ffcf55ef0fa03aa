//! Institution entity, field rules and service.

mod model;
mod service;
mod value_objects;

pub use model::{Institution, InstitutionFields, NewInstitution};
pub use service::InstitutionService;
pub use value_objects::{NOME_MAX_LEN, NOME_MIN_LEN, Nome, QTD_ALUNOS_MAX, QtdAlunos, Uf};

use thiserror::Error;

/// Reasons a set of institution fields is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstitutionError {
    /// A required field was not supplied.
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// Name shorter than the minimum after trimming.
    #[error("Name must have at least 3 characters, got {len}")]
    NomeTooShort { len: usize },

    /// Name longer than the maximum.
    #[error("Name must have at most 150 characters, got {len}")]
    NomeTooLong { len: usize },

    /// State code is not two letters.
    #[error("Invalid state code: {value:?} (must be exactly 2 letters)")]
    InvalidUf { value: String },

    /// Student count below zero.
    #[error("Invalid student count: {value} (must not be negative)")]
    NegativeQtdAlunos { value: i64 },

    /// Student count above the largest accepted value.
    #[error("Invalid student count: {value} (must be at most 99999999999)")]
    QtdAlunosTooLarge { value: i64 },
}
