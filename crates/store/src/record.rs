//! Plain record types exchanged with the store.
//!
//! The store does not validate field contents; callers hand it documents that
//! the domain layer has already normalized.

use serde::{Deserialize, Serialize};

use crate::InstitutionId;

/// The writable fields of an institution, without its ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionDocument {
    pub nome: String,
    pub uf: String,
    pub qtd_alunos: i64,
}

impl InstitutionDocument {
    /// Creates a new document.
    pub fn new(nome: impl Into<String>, uf: impl Into<String>, qtd_alunos: i64) -> Self {
        Self {
            nome: nome.into(),
            uf: uf.into(),
            qtd_alunos,
        }
    }

    /// Attaches an ID, producing a full record.
    pub fn with_id(self, id: InstitutionId) -> InstitutionRecord {
        InstitutionRecord {
            id,
            nome: self.nome,
            uf: self.uf,
            qtd_alunos: self.qtd_alunos,
        }
    }
}

/// A persisted institution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionRecord {
    pub id: InstitutionId,
    pub nome: String,
    pub uf: String,
    pub qtd_alunos: i64,
}

/// Sum of student counts for one state code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateTotal {
    pub uf: String,
    pub total_alunos: i64,
}

impl StateTotal {
    pub fn new(uf: impl Into<String>, total_alunos: i64) -> Self {
        Self {
            uf: uf.into(),
            total_alunos,
        }
    }
}
