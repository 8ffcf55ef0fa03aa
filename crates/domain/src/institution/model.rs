use common::InstitutionId;
use institution_store::{InstitutionDocument, InstitutionRecord};
use serde::{Deserialize, Serialize};

use super::{InstitutionError, Nome, QtdAlunos, Uf};

/// A persisted institution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Institution {
    pub id: InstitutionId,
    pub nome: Nome,
    pub uf: Uf,
    pub qtd_alunos: QtdAlunos,
}

impl Institution {
    /// Wraps a record read back from the store.
    ///
    /// Store contents were validated on the way in, so they are taken as-is.
    pub fn from_record(record: InstitutionRecord) -> Self {
        Self {
            id: record.id,
            nome: Nome::from_stored(record.nome),
            uf: Uf::from_stored(record.uf),
            qtd_alunos: QtdAlunos::from_stored(record.qtd_alunos),
        }
    }
}

/// A validated set of fields ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInstitution {
    pub nome: Nome,
    pub uf: Uf,
    pub qtd_alunos: QtdAlunos,
}

impl NewInstitution {
    /// Converts to the store's document type.
    pub fn into_document(self) -> InstitutionDocument {
        InstitutionDocument::new(
            self.nome.as_str(),
            self.uf.as_str(),
            self.qtd_alunos.value(),
        )
    }
}

/// Raw, possibly partial, institution fields as submitted by a caller.
///
/// A create requires every field; an update overlays the fields that are
/// present onto the stored institution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstitutionFields {
    pub nome: Option<String>,
    pub uf: Option<String>,
    pub qtd_alunos: Option<i64>,
}

impl InstitutionFields {
    /// Creates a complete set of fields.
    pub fn new(nome: impl Into<String>, uf: impl Into<String>, qtd_alunos: i64) -> Self {
        Self {
            nome: Some(nome.into()),
            uf: Some(uf.into()),
            qtd_alunos: Some(qtd_alunos),
        }
    }

    /// Sets the name.
    pub fn nome(mut self, nome: impl Into<String>) -> Self {
        self.nome = Some(nome.into());
        self
    }

    /// Sets the state code.
    pub fn uf(mut self, uf: impl Into<String>) -> Self {
        self.uf = Some(uf.into());
        self
    }

    /// Sets the student count.
    pub fn qtd_alunos(mut self, qtd_alunos: i64) -> Self {
        self.qtd_alunos = Some(qtd_alunos);
        self
    }

    /// Validates a complete set of fields for a create.
    pub fn validate(&self) -> Result<NewInstitution, InstitutionError> {
        let nome = self
            .nome
            .as_deref()
            .ok_or(InstitutionError::MissingField { field: "nome" })?;
        let uf = self
            .uf
            .as_deref()
            .ok_or(InstitutionError::MissingField { field: "uf" })?;
        let qtd_alunos = self
            .qtd_alunos
            .ok_or(InstitutionError::MissingField { field: "qtdAlunos" })?;

        Ok(NewInstitution {
            nome: Nome::parse(nome)?,
            uf: Uf::parse(uf)?,
            qtd_alunos: QtdAlunos::new(qtd_alunos)?,
        })
    }

    /// Overlays these fields onto an existing institution and validates the result.
    pub fn merge_onto(&self, current: &Institution) -> Result<NewInstitution, InstitutionError> {
        let nome = match &self.nome {
            Some(raw) => Nome::parse(raw)?,
            None => current.nome.clone(),
        };
        let uf = match &self.uf {
            Some(raw) => Uf::parse(raw)?,
            None => current.uf.clone(),
        };
        let qtd_alunos = match self.qtd_alunos {
            Some(value) => QtdAlunos::new(value)?,
            None => current.qtd_alunos,
        };

        Ok(NewInstitution {
            nome,
            uf,
            qtd_alunos,
        })
    }
}
