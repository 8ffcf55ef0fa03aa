//! PostgreSQL integration tests
//!
//! These tests share one PostgreSQL container and need a Docker daemon, so
//! they are ignored by default. Run with:
//!
//! ```bash
//! cargo test -p institution-store --test postgres_integration -- --ignored
//! ```

use std::sync::Arc;

use institution_store::{
    InstitutionDocument, InstitutionId, InstitutionStore, InstitutionStoreExt,
    PostgresInstitutionStore, StateTotal,
};
use serial_test::serial;
use sqlx::PgPool;
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

/// Shared container info - container stays alive for all tests
struct ContainerInfo {
    #[allow(dead_code)] // Container must stay alive for tests
    container: ContainerAsync<Postgres>,
    connection_string: String,
}

/// Global shared container
static CONTAINER: OnceCell<Arc<ContainerInfo>> = OnceCell::const_new();

async fn get_container_info() -> Arc<ContainerInfo> {
    CONTAINER
        .get_or_init(|| async {
            let container = Postgres::default().start().await.unwrap();

            let host = container.get_host().await.unwrap();
            let port = container.get_host_port_ipv4(5432).await.unwrap();

            let connection_string =
                format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

            let temp_pool = PgPool::connect(&connection_string).await.unwrap();
            PostgresInstitutionStore::new(temp_pool.clone())
                .run_migrations()
                .await
                .unwrap();
            temp_pool.close().await;

            Arc::new(ContainerInfo {
                container,
                connection_string,
            })
        })
        .await
        .clone()
}

/// Get a fresh store with its own pool and an empty table
async fn get_test_store() -> PostgresInstitutionStore {
    let info = get_container_info().await;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&info.connection_string)
        .await
        .unwrap();

    sqlx::query("TRUNCATE TABLE instituicoes")
        .execute(&pool)
        .await
        .unwrap();

    PostgresInstitutionStore::new(pool)
}

fn doc(nome: &str, uf: &str, qtd_alunos: i64) -> InstitutionDocument {
    InstitutionDocument::new(nome, uf, qtd_alunos)
}

#[tokio::test]
#[ignore = "requires Docker"]
#[serial]
async fn insert_and_find_by_id() {
    let store = get_test_store().await;

    let created = store.insert(doc("ESCOLA A", "SP", 10)).await.unwrap();
    assert_eq!(created.nome, "ESCOLA A");
    assert_eq!(created.uf, "SP");
    assert_eq!(created.qtd_alunos, 10);

    let found = store.find_by_id(created.id).await.unwrap();
    assert_eq!(found, Some(created));
}

#[tokio::test]
#[ignore = "requires Docker"]
#[serial]
async fn list_orders_by_uf_then_insertion() {
    let store = get_test_store().await;
    store.insert(doc("PRIMEIRA", "SP", 1)).await.unwrap();
    store.insert(doc("SEGUNDA", "AM", 2)).await.unwrap();
    store.insert(doc("TERCEIRA", "SP", 3)).await.unwrap();

    let list = store.list_by_uf().await.unwrap();
    let names: Vec<_> = list.iter().map(|r| r.nome.as_str()).collect();
    assert_eq!(names, vec!["SEGUNDA", "PRIMEIRA", "TERCEIRA"]);
}

#[tokio::test]
#[ignore = "requires Docker"]
#[serial]
async fn replace_and_delete() {
    let store = get_test_store().await;
    let created = store.insert(doc("ESCOLA A", "SP", 10)).await.unwrap();

    let updated = store
        .replace(created.id, doc("ESCOLA B", "RJ", 40))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.uf, "RJ");
    assert_eq!(updated.qtd_alunos, 40);

    let removed = store.delete(created.id).await.unwrap();
    assert_eq!(removed, Some(updated));
    assert!(!store.exists(created.id).await.unwrap());
}

#[tokio::test]
#[ignore = "requires Docker"]
#[serial]
async fn missing_ids_yield_none() {
    let store = get_test_store().await;
    let id = InstitutionId::new();

    assert!(store.find_by_id(id).await.unwrap().is_none());
    assert!(
        store
            .replace(id, doc("ESCOLA", "SP", 1))
            .await
            .unwrap()
            .is_none()
    );
    assert!(store.delete(id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
#[serial]
async fn totals_are_grouped_and_sorted() {
    let store = get_test_store().await;
    store.insert(doc("A", "SP", 10)).await.unwrap();
    store.insert(doc("B", "SP", 5)).await.unwrap();
    store.insert(doc("C", "RJ", 20)).await.unwrap();

    let totals = store.totals_by_uf().await.unwrap();
    assert_eq!(
        totals,
        vec![StateTotal::new("SP", 15), StateTotal::new("RJ", 20)]
    );
}

#[tokio::test]
#[ignore = "requires Docker"]
#[serial]
async fn exists_by_nome_and_uf() {
    let store = get_test_store().await;
    store.insert(doc("ESCOLA A", "SP", 10)).await.unwrap();

    assert!(store.exists_by_nome_and_uf("ESCOLA A", "SP").await.unwrap());
    assert!(!store.exists_by_nome_and_uf("ESCOLA A", "MG").await.unwrap());
}

#[tokio::test]
#[ignore = "requires Docker"]
#[serial]
async fn negative_student_count_is_rejected_by_the_table() {
    let store = get_test_store().await;
    let result = store.insert(doc("ESCOLA A", "SP", -1)).await;
    assert!(matches!(
        result,
        Err(institution_store::StoreError::Database(_))
    ));
}
