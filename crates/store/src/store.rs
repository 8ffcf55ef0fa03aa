use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::{
    InstitutionDocument, InstitutionId, InstitutionRecord, Result, StateTotal, StoreError,
};

/// Core trait for institution store implementations.
///
/// Every operation is a single request against the backend; the store gives
/// per-record atomicity and nothing more. All implementations must be
/// thread-safe (Send + Sync).
#[async_trait]
pub trait InstitutionStore: Send + Sync {
    /// Persists a new institution and returns it with the ID the store assigned.
    async fn insert(&self, document: InstitutionDocument) -> Result<InstitutionRecord>;

    /// Returns every institution ordered by `uf` ascending.
    ///
    /// Records sharing a `uf` keep their insertion order.
    async fn list_by_uf(&self) -> Result<Vec<InstitutionRecord>>;

    /// Retrieves a single institution.
    ///
    /// Returns None if no record has this ID.
    async fn find_by_id(&self, id: InstitutionId) -> Result<Option<InstitutionRecord>>;

    /// Retrieves the first institution with exactly this name and state code.
    async fn find_by_nome_and_uf(&self, nome: &str, uf: &str)
    -> Result<Option<InstitutionRecord>>;

    /// Overwrites the fields of an existing institution.
    ///
    /// Returns the updated record, or None if the ID does not exist.
    async fn replace(
        &self,
        id: InstitutionId,
        document: InstitutionDocument,
    ) -> Result<Option<InstitutionRecord>>;

    /// Removes an institution.
    ///
    /// Returns the removed record, or None if the ID does not exist.
    async fn delete(&self, id: InstitutionId) -> Result<Option<InstitutionRecord>>;

    /// Groups all institutions by `uf` and sums their student counts.
    ///
    /// Results are ordered by total ascending, ties by `uf` ascending.
    /// Computed from the full record set on every call.
    async fn totals_by_uf(&self) -> Result<Vec<StateTotal>>;
}

/// Extension trait providing convenience methods for institution stores.
#[async_trait]
pub trait InstitutionStoreExt: InstitutionStore {
    /// Checks whether an institution with this name and state code exists.
    async fn exists_by_nome_and_uf(&self, nome: &str, uf: &str) -> Result<bool> {
        Ok(self.find_by_nome_and_uf(nome, uf).await?.is_some())
    }

    /// Checks whether an institution with this ID exists.
    async fn exists(&self, id: InstitutionId) -> Result<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

// Blanket implementation for all InstitutionStore implementations
impl<T: InstitutionStore + ?Sized> InstitutionStoreExt for T {}

/// Group-by-sum over a set of records, ordered the way [`InstitutionStore::totals_by_uf`] requires.
///
/// Fails with [`StoreError::TotalOverflow`] if a state's sum exceeds `i64`.
pub fn aggregate_totals<'a>(
    records: impl IntoIterator<Item = &'a InstitutionRecord>,
) -> Result<Vec<StateTotal>> {
    let mut groups: BTreeMap<&str, i64> = BTreeMap::new();
    for record in records {
        let total = groups.entry(record.uf.as_str()).or_insert(0);
        *total = total
            .checked_add(record.qtd_alunos)
            .ok_or_else(|| StoreError::TotalOverflow {
                uf: record.uf.clone(),
            })?;
    }

    let mut totals: Vec<StateTotal> = groups
        .into_iter()
        .map(|(uf, total)| StateTotal::new(uf, total))
        .collect();
    // BTreeMap already yields uf order, so a stable sort keeps it for equal totals
    totals.sort_by_key(|t| t.total_alunos);
    Ok(totals)
}
