//! Transport seam between the client state and the REST backend.

use async_trait::async_trait;
use common::InstitutionId;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::model::{
    DeleteResponse, ErrorResponse, ExistsResponse, Institution, InstitutionPayload, StateTotal,
};

/// Operations the client performs against the backend.
#[async_trait]
pub trait InstitutionsApi: Send + Sync {
    /// Probes backend liveness.
    async fn health(&self) -> Result<()>;

    /// Fetches every institution, in the server's order.
    async fn list(&self) -> Result<Vec<Institution>>;

    /// Creates an institution and returns the stored record.
    async fn create(&self, payload: &InstitutionPayload) -> Result<Institution>;

    /// Replaces the fields of an institution and returns the stored record.
    async fn update(&self, id: InstitutionId, payload: &InstitutionPayload)
    -> Result<Institution>;

    /// Deletes an institution, returning the server's confirmation message.
    async fn delete(&self, id: InstitutionId) -> Result<String>;

    /// Advisory check for an institution with the same name and state.
    async fn exists(&self, nome: &str, uf: &str) -> Result<bool>;

    /// Fetches the per-state student totals.
    async fn totals_by_state(&self) -> Result<Vec<StateTotal>>;
}

/// [`InstitutionsApi`] over HTTP using `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpInstitutionsApi {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpInstitutionsApi {
    /// Creates a transport for the configured backend.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config: config.clone(),
        }
    }

    fn institutions_url(&self, suffix: &str) -> String {
        format!("{}{suffix}", self.config.institutions_url())
    }
}

/// Decodes a 2xx body, or turns any other status into [`ClientError::Status`].
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|e| e.error)
        .unwrap_or_else(|_| fallback_reason(status));

    tracing::warn!(status = status.as_u16(), %message, "request failed");
    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

fn fallback_reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("unexpected status")
        .to_string()
}

#[async_trait]
impl InstitutionsApi for HttpInstitutionsApi {
    #[tracing::instrument(skip(self))]
    async fn health(&self) -> Result<()> {
        let url = format!("{}/health", self.config.backend_url);
        let response = self.client.get(url).send().await?;
        decode::<serde_json::Value>(response).await.map(|_| ())
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Institution>> {
        let response = self.client.get(self.institutions_url("")).send().await?;
        decode(response).await
    }

    #[tracing::instrument(skip(self))]
    async fn create(&self, payload: &InstitutionPayload) -> Result<Institution> {
        let response = self
            .client
            .post(self.institutions_url(""))
            .json(payload)
            .send()
            .await?;
        decode(response).await
    }

    #[tracing::instrument(skip(self))]
    async fn update(
        &self,
        id: InstitutionId,
        payload: &InstitutionPayload,
    ) -> Result<Institution> {
        let response = self
            .client
            .put(self.institutions_url(&format!("/{id}")))
            .json(payload)
            .send()
            .await?;
        decode(response).await
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: InstitutionId) -> Result<String> {
        let response = self
            .client
            .delete(self.institutions_url(&format!("/{id}")))
            .send()
            .await?;
        decode::<DeleteResponse>(response).await.map(|r| r.message)
    }

    #[tracing::instrument(skip(self))]
    async fn exists(&self, nome: &str, uf: &str) -> Result<bool> {
        let response = self
            .client
            .get(self.institutions_url("/exists"))
            .query(&[("nome", nome), ("uf", uf)])
            .send()
            .await?;
        decode::<ExistsResponse>(response).await.map(|r| r.exists)
    }

    #[tracing::instrument(skip(self))]
    async fn totals_by_state(&self) -> Result<Vec<StateTotal>> {
        let response = self
            .client
            .get(self.institutions_url("/uf-alunos"))
            .send()
            .await?;
        decode(response).await
    }
}
