//! Wire types shared with the `/instituicoes` endpoints.

use common::InstitutionId;
use serde::{Deserialize, Serialize};

/// Snapshot of an institution as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Institution {
    #[serde(rename = "_id")]
    pub id: InstitutionId,
    pub nome: String,
    pub uf: String,
    #[serde(rename = "qtdAlunos")]
    pub qtd_alunos: i64,
}

/// Body sent on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionPayload {
    pub nome: String,
    pub uf: String,
    #[serde(rename = "qtdAlunos")]
    pub qtd_alunos: i64,
}

/// One row of the per-state aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateTotal {
    #[serde(rename = "_id")]
    pub uf: String,
    #[serde(rename = "totalAlunos")]
    pub total_alunos: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExistsResponse {
    pub exists: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeleteResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: String,
}
