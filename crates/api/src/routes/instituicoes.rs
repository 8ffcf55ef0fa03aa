//! Institution CRUD, per-state totals and the existence check.

use std::str::FromStr;
use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use common::InstitutionId;
use domain::{Institution, InstitutionFields, InstitutionService, StateTotal};
use institution_store::InstitutionStore;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Operation};

/// Message returned after a successful delete.
pub const DELETED_MESSAGE: &str = "Instituição excluída com sucesso";

/// Message returned when the existence check is missing a parameter.
pub const INVALID_PARAMS_MESSAGE: &str = "Parâmetros inválidos.";

/// Shared application state accessible from all handlers.
pub struct AppState<S: InstitutionStore> {
    pub service: InstitutionService<S>,
}

// -- Request types --

/// Create/update body. Every field is optional so that an update can carry
/// only the fields it changes; unknown keys such as `_id` are ignored.
#[derive(Debug, Deserialize)]
pub struct InstitutionRequest {
    pub nome: Option<String>,
    pub uf: Option<String>,
    #[serde(rename = "qtdAlunos")]
    pub qtd_alunos: Option<i64>,
}

impl From<InstitutionRequest> for InstitutionFields {
    fn from(req: InstitutionRequest) -> Self {
        Self {
            nome: req.nome,
            uf: req.uf,
            qtd_alunos: req.qtd_alunos,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ExistsQuery {
    pub nome: Option<String>,
    pub uf: Option<String>,
}

// -- Response types --

#[derive(Debug, Serialize)]
pub struct InstitutionResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub nome: String,
    pub uf: String,
    #[serde(rename = "qtdAlunos")]
    pub qtd_alunos: i64,
}

impl From<Institution> for InstitutionResponse {
    fn from(institution: Institution) -> Self {
        Self {
            id: institution.id.to_string(),
            nome: institution.nome.as_str().to_string(),
            uf: institution.uf.as_str().to_string(),
            qtd_alunos: institution.qtd_alunos.value(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StateTotalResponse {
    #[serde(rename = "_id")]
    pub uf: String,
    #[serde(rename = "totalAlunos")]
    pub total_alunos: i64,
}

impl From<StateTotal> for StateTotalResponse {
    fn from(total: StateTotal) -> Self {
        Self {
            uf: total.uf,
            total_alunos: total.total_alunos,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExistsResponse {
    pub exists: bool,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
}

// -- Handlers --

/// GET /instituicoes: every institution, ordered by state code.
#[tracing::instrument(skip(state))]
pub async fn list<S: InstitutionStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<InstitutionResponse>>, ApiError> {
    let institutions = state
        .service
        .list()
        .await
        .map_err(|e| Operation::List.error(e))?;

    Ok(Json(
        institutions
            .into_iter()
            .map(InstitutionResponse::from)
            .collect(),
    ))
}

/// POST /instituicoes: create an institution.
#[tracing::instrument(skip(state, body))]
pub async fn create<S: InstitutionStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    body: Result<Json<InstitutionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<InstitutionResponse>), ApiError> {
    let Json(req) = body.map_err(|e| reject_body(Operation::Create, &e))?;

    let created = state
        .service
        .create(req.into())
        .await
        .map_err(|e| Operation::Create.error(e))?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// PUT /instituicoes/{id}: overlay the submitted fields onto an institution.
#[tracing::instrument(skip(state, body))]
pub async fn update<S: InstitutionStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    body: Result<Json<InstitutionRequest>, JsonRejection>,
) -> Result<Json<InstitutionResponse>, ApiError> {
    let id = parse_id(&id, Operation::Update)?;
    let Json(req) = body.map_err(|e| reject_body(Operation::Update, &e))?;

    let updated = state
        .service
        .update(id, req.into())
        .await
        .map_err(|e| Operation::Update.error(e))?;

    Ok(Json(updated.into()))
}

/// DELETE /instituicoes/{id}: remove an institution.
#[tracing::instrument(skip(state))]
pub async fn delete<S: InstitutionStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let id = parse_id(&id, Operation::Delete)?;

    state
        .service
        .delete(id)
        .await
        .map_err(|e| Operation::Delete.error(e))?;

    Ok(Json(DeletedResponse {
        message: DELETED_MESSAGE,
    }))
}

/// GET /instituicoes/uf-alunos: student totals per state, ascending.
#[tracing::instrument(skip(state))]
pub async fn totals_by_state<S: InstitutionStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<StateTotalResponse>>, ApiError> {
    let totals = state
        .service
        .totals_by_state()
        .await
        .map_err(|e| Operation::Totals.error(e))?;

    Ok(Json(
        totals.into_iter().map(StateTotalResponse::from).collect(),
    ))
}

/// GET /instituicoes/exists?nome=&uf=: advisory duplicate check.
#[tracing::instrument(skip(state, query))]
pub async fn exists<S: InstitutionStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    query: Result<Query<ExistsQuery>, QueryRejection>,
) -> Result<Json<ExistsResponse>, ApiError> {
    let Query(query) = query.map_err(|e| {
        tracing::debug!(error = %e, "malformed query string");
        invalid_params()
    })?;
    let (Some(nome), Some(uf)) = (non_blank(query.nome), non_blank(query.uf)) else {
        return Err(invalid_params());
    };

    let exists = state
        .service
        .exists_by_name_and_state(&nome, &uf)
        .await
        .map_err(|e| Operation::Exists.error(e))?;

    Ok(Json(ExistsResponse { exists }))
}

fn invalid_params() -> ApiError {
    ApiError::BadRequest(INVALID_PARAMS_MESSAGE.to_string())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_id(id: &str, operation: Operation) -> Result<InstitutionId, ApiError> {
    InstitutionId::from_str(id).map_err(|e| {
        tracing::debug!(error = %e, "malformed institution id");
        operation.bad_request()
    })
}

fn reject_body(operation: Operation, rejection: &JsonRejection) -> ApiError {
    tracing::debug!(error = %rejection, "malformed request body");
    operation.bad_request()
}
