use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgPoolOptions, postgres::PgRow};
use uuid::Uuid;

use crate::{
    InstitutionDocument, InstitutionId, InstitutionRecord, Result, StateTotal,
    store::InstitutionStore,
};

/// PostgreSQL-backed institution store.
#[derive(Clone)]
pub struct PostgresInstitutionStore {
    pool: PgPool,
}

impl PostgresInstitutionStore {
    /// Creates a new PostgreSQL institution store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool to `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        tracing::info!(max_connections, "connected to PostgreSQL");
        Ok(Self::new(pool))
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }

    fn row_to_record(row: PgRow) -> Result<InstitutionRecord> {
        Ok(InstitutionRecord {
            id: InstitutionId::from_uuid(row.try_get::<Uuid, _>("id")?),
            nome: row.try_get("nome")?,
            uf: row.try_get("uf")?,
            qtd_alunos: row.try_get("qtd_alunos")?,
        })
    }
}

#[async_trait]
impl InstitutionStore for PostgresInstitutionStore {
    async fn insert(&self, document: InstitutionDocument) -> Result<InstitutionRecord> {
        let row = sqlx::query(
            r#"
            INSERT INTO instituicoes (id, nome, uf, qtd_alunos)
            VALUES ($1, $2, $3, $4)
            RETURNING id, nome, uf, qtd_alunos
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&document.nome)
        .bind(&document.uf)
        .bind(document.qtd_alunos)
        .fetch_one(&self.pool)
        .await?;

        Self::row_to_record(row)
    }

    async fn list_by_uf(&self) -> Result<Vec<InstitutionRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, nome, uf, qtd_alunos
            FROM instituicoes
            ORDER BY uf ASC, seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_record).collect()
    }

    async fn find_by_id(&self, id: InstitutionId) -> Result<Option<InstitutionRecord>> {
        let row = sqlx::query(
            r#"
            SELECT id, nome, uf, qtd_alunos
            FROM instituicoes
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_record).transpose()
    }

    async fn find_by_nome_and_uf(
        &self,
        nome: &str,
        uf: &str,
    ) -> Result<Option<InstitutionRecord>> {
        let row = sqlx::query(
            r#"
            SELECT id, nome, uf, qtd_alunos
            FROM instituicoes
            WHERE nome = $1 AND uf = $2
            ORDER BY seq ASC
            LIMIT 1
            "#,
        )
        .bind(nome)
        .bind(uf)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_record).transpose()
    }

    async fn replace(
        &self,
        id: InstitutionId,
        document: InstitutionDocument,
    ) -> Result<Option<InstitutionRecord>> {
        let row = sqlx::query(
            r#"
            UPDATE instituicoes
            SET nome = $2, uf = $3, qtd_alunos = $4
            WHERE id = $1
            RETURNING id, nome, uf, qtd_alunos
            "#,
        )
        .bind(id.as_uuid())
        .bind(&document.nome)
        .bind(&document.uf)
        .bind(document.qtd_alunos)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_record).transpose()
    }

    async fn delete(&self, id: InstitutionId) -> Result<Option<InstitutionRecord>> {
        let row = sqlx::query(
            r#"
            DELETE FROM instituicoes
            WHERE id = $1
            RETURNING id, nome, uf, qtd_alunos
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_record).transpose()
    }

    async fn totals_by_uf(&self) -> Result<Vec<StateTotal>> {
        // SUM over BIGINT yields NUMERIC in PostgreSQL
        let rows = sqlx::query(
            r#"
            SELECT uf, SUM(qtd_alunos)::BIGINT AS total_alunos
            FROM instituicoes
            GROUP BY uf
            ORDER BY total_alunos ASC, uf ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| -> Result<StateTotal> {
                Ok(StateTotal {
                    uf: row.try_get("uf")?,
                    total_alunos: row.try_get("total_alunos")?,
                })
            })
            .collect()
    }
}
