use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    InstitutionDocument, InstitutionId, InstitutionRecord, Result, StateTotal, StoreError,
    store::{InstitutionStore, aggregate_totals},
};

/// In-memory institution store.
///
/// Records are kept in insertion order, which is what gives `list_by_uf` its
/// tie order. Clones share the same underlying data.
#[derive(Clone, Default)]
pub struct InMemoryInstitutionStore {
    records: Arc<RwLock<Vec<InstitutionRecord>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryInstitutionStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of records stored.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns true if no records are stored.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Makes every subsequent operation fail with [`StoreError::Unavailable`]
    /// until switched back.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "in-memory store switched off".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl InstitutionStore for InMemoryInstitutionStore {
    async fn insert(&self, document: InstitutionDocument) -> Result<InstitutionRecord> {
        self.check_available()?;

        let record = document.with_id(InstitutionId::new());
        self.records.write().await.push(record.clone());

        tracing::debug!(id = %record.id, "institution inserted");
        Ok(record)
    }

    async fn list_by_uf(&self) -> Result<Vec<InstitutionRecord>> {
        self.check_available()?;

        let mut records = self.records.read().await.clone();
        // stable: equal ufs stay in insertion order
        records.sort_by(|a, b| a.uf.cmp(&b.uf));
        Ok(records)
    }

    async fn find_by_id(&self, id: InstitutionId) -> Result<Option<InstitutionRecord>> {
        self.check_available()?;

        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_nome_and_uf(
        &self,
        nome: &str,
        uf: &str,
    ) -> Result<Option<InstitutionRecord>> {
        self.check_available()?;

        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|r| r.nome == nome && r.uf == uf)
            .cloned())
    }

    async fn replace(
        &self,
        id: InstitutionId,
        document: InstitutionDocument,
    ) -> Result<Option<InstitutionRecord>> {
        self.check_available()?;

        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id == id) {
            Some(slot) => {
                *slot = document.with_id(id);
                Ok(Some(slot.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: InstitutionId) -> Result<Option<InstitutionRecord>> {
        self.check_available()?;

        let mut records = self.records.write().await;
        let removed = records
            .iter()
            .position(|r| r.id == id)
            .map(|index| records.remove(index));
        Ok(removed)
    }

    async fn totals_by_uf(&self) -> Result<Vec<StateTotal>> {
        self.check_available()?;

        let records = self.records.read().await;
        aggregate_totals(records.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InstitutionStoreExt;

    fn doc(nome: &str, uf: &str, qtd_alunos: i64) -> InstitutionDocument {
        InstitutionDocument::new(nome, uf, qtd_alunos)
    }

    #[tokio::test]
    async fn insert_assigns_distinct_ids() {
        let store = InMemoryInstitutionStore::new();

        let a = store.insert(doc("ESCOLA A", "SP", 10)).await.unwrap();
        let b = store.insert(doc("ESCOLA A", "SP", 10)).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn list_is_sorted_by_uf_and_stable() {
        let store = InMemoryInstitutionStore::new();
        store.insert(doc("PRIMEIRA", "SP", 1)).await.unwrap();
        store.insert(doc("SEGUNDA", "AM", 2)).await.unwrap();
        store.insert(doc("TERCEIRA", "SP", 3)).await.unwrap();

        let list = store.list_by_uf().await.unwrap();
        let names: Vec<_> = list.iter().map(|r| r.nome.as_str()).collect();
        assert_eq!(names, vec!["SEGUNDA", "PRIMEIRA", "TERCEIRA"]);
    }

    #[tokio::test]
    async fn replace_keeps_id_and_position() {
        let store = InMemoryInstitutionStore::new();
        let first = store.insert(doc("ESCOLA A", "SP", 10)).await.unwrap();
        store.insert(doc("ESCOLA B", "RJ", 20)).await.unwrap();

        let updated = store
            .replace(first.id, doc("ESCOLA C", "MG", 30))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, first.id);
        assert_eq!(updated.nome, "ESCOLA C");
        assert_eq!(store.find_by_id(first.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn replace_missing_returns_none() {
        let store = InMemoryInstitutionStore::new();
        let result = store
            .replace(InstitutionId::new(), doc("ESCOLA", "SP", 1))
            .await
            .unwrap();
        assert!(result.is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let store = InMemoryInstitutionStore::new();
        let record = store.insert(doc("ESCOLA A", "SP", 10)).await.unwrap();

        let removed = store.delete(record.id).await.unwrap();
        assert_eq!(removed, Some(record.clone()));
        assert!(!store.exists(record.id).await.unwrap());

        let again = store.delete(record.id).await.unwrap();
        assert!(again.is_none());
    }

    #[tokio::test]
    async fn exists_by_nome_and_uf_matches_exactly() {
        let store = InMemoryInstitutionStore::new();
        store.insert(doc("ESCOLA A", "SP", 10)).await.unwrap();

        assert!(store.exists_by_nome_and_uf("ESCOLA A", "SP").await.unwrap());
        assert!(!store.exists_by_nome_and_uf("ESCOLA A", "RJ").await.unwrap());
        assert!(!store.exists_by_nome_and_uf("ESCOLA B", "SP").await.unwrap());
    }

    #[tokio::test]
    async fn totals_follow_current_records() {
        let store = InMemoryInstitutionStore::new();
        store.insert(doc("A", "SP", 10)).await.unwrap();
        let b = store.insert(doc("B", "SP", 5)).await.unwrap();
        store.insert(doc("C", "RJ", 20)).await.unwrap();

        assert_eq!(
            store.totals_by_uf().await.unwrap(),
            vec![StateTotal::new("SP", 15), StateTotal::new("RJ", 20)]
        );

        store.delete(b.id).await.unwrap();
        assert_eq!(
            store.totals_by_uf().await.unwrap(),
            vec![StateTotal::new("SP", 10), StateTotal::new("RJ", 20)]
        );
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_operation() {
        let store = InMemoryInstitutionStore::new();
        store.set_unavailable(true);

        assert!(matches!(
            store.list_by_uf().await,
            Err(StoreError::Unavailable(_))
        ));
        assert!(matches!(
            store.insert(doc("ESCOLA", "SP", 1)).await,
            Err(StoreError::Unavailable(_))
        ));

        store.set_unavailable(false);
        assert!(store.list_by_uf().await.unwrap().is_empty());
    }
}
