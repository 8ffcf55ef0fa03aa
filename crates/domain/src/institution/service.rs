//! Institution service exposing the registry operations.

use common::InstitutionId;
use institution_store::{InstitutionStore, InstitutionStoreExt, StateTotal};

use crate::error::DomainError;

use super::{Institution, InstitutionFields, Nome, Uf};

/// Service for managing institutions.
///
/// Each method is one stateless request against the store. Nothing is cached
/// between calls; in particular the per-state totals are recomputed every time.
pub struct InstitutionService<S: InstitutionStore> {
    store: S,
}

impl<S: InstitutionStore> InstitutionService<S> {
    /// Creates a new institution service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Lists all institutions ordered by state code.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Institution>, DomainError> {
        let records = self.store.list_by_uf().await?;
        Ok(records.into_iter().map(Institution::from_record).collect())
    }

    /// Validates and persists a new institution.
    ///
    /// Does not check for an existing (nome, uf) pair; callers that care use
    /// [`Self::exists_by_name_and_state`] first, accepting that two concurrent
    /// creates can both pass that check.
    #[tracing::instrument(skip(self))]
    pub async fn create(&self, fields: InstitutionFields) -> Result<Institution, DomainError> {
        let new = fields.validate().inspect_err(record_validation_failure)?;

        let record = self.store.insert(new.into_document()).await?;
        metrics::counter!("institutions_created_total").increment(1);
        tracing::info!(id = %record.id, uf = %record.uf, "institution created");

        Ok(Institution::from_record(record))
    }

    /// Applies the given fields to an existing institution.
    ///
    /// Fields left as None keep their stored value.
    #[tracing::instrument(skip(self))]
    pub async fn update(
        &self,
        id: InstitutionId,
        fields: InstitutionFields,
    ) -> Result<Institution, DomainError> {
        let current = self
            .store
            .find_by_id(id)
            .await?
            .map(Institution::from_record)
            .ok_or(DomainError::NotFound { id })?;

        let merged = fields
            .merge_onto(&current)
            .inspect_err(record_validation_failure)?;

        // The record can vanish between the read and the write.
        let record = self
            .store
            .replace(id, merged.into_document())
            .await?
            .ok_or(DomainError::NotFound { id })?;
        metrics::counter!("institutions_updated_total").increment(1);
        tracing::info!(%id, "institution updated");

        Ok(Institution::from_record(record))
    }

    /// Removes an institution, returning what was removed.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: InstitutionId) -> Result<Institution, DomainError> {
        let record = self
            .store
            .delete(id)
            .await?
            .ok_or(DomainError::NotFound { id })?;
        metrics::counter!("institutions_deleted_total").increment(1);
        tracing::info!(%id, "institution deleted");

        Ok(Institution::from_record(record))
    }

    /// Total student count per state code, ascending by total.
    #[tracing::instrument(skip(self))]
    pub async fn totals_by_state(&self) -> Result<Vec<StateTotal>, DomainError> {
        Ok(self.store.totals_by_uf().await?)
    }

    /// Advisory check for an institution with this name and state code.
    ///
    /// Inputs are normalized the same way stored records are.
    #[tracing::instrument(skip(self))]
    pub async fn exists_by_name_and_state(
        &self,
        nome: &str,
        uf: &str,
    ) -> Result<bool, DomainError> {
        let nome = Nome::normalize(nome);
        let uf = Uf::normalize(uf);
        Ok(self.store.exists_by_nome_and_uf(&nome, &uf).await?)
    }
}

fn record_validation_failure(err: &super::InstitutionError) {
    metrics::counter!("institution_validation_failures_total").increment(1);
    tracing::debug!(error = %err, "institution fields rejected");
}
