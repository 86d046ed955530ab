//! SQLite document store implementation

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};

use crate::domain::error::DomainError;
use crate::domain::store::DocumentStore;
use crate::domain::{BankingDomain, KnowledgeDocument, QueryLogEntry};

/// SQLite implementation of [`DocumentStore`]
#[derive(Debug, Clone)]
pub struct SqliteDocumentStore {
    pool: SqlitePool,
}

impl SqliteDocumentStore {
    /// Create a new store with the given connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (and create if missing) a database file
    pub async fn open(path: &str) -> Result<Self, DomainError> {
        let options = SqliteConnectOptions::from_str(&format!("sqlite://{}", path))
            .map_err(|e| DomainError::storage(format!("Invalid database path: {}", e)))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to open database: {}", e)))?;

        let store = Self::new(pool);
        store.migrate().await?;

        Ok(store)
    }

    /// Open an ephemeral in-memory database
    pub async fn in_memory() -> Result<Self, DomainError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| DomainError::storage(format!("Failed to open database: {}", e)))?;

        let store = Self::new(pool);
        store.migrate().await?;

        Ok(store)
    }

    /// Create tables if they do not exist
    pub async fn migrate(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                domain TEXT NOT NULL,
                source TEXT NOT NULL,
                uploaded_at TEXT NOT NULL,
                metadata TEXT NOT NULL DEFAULT '{}'
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create documents table: {}", e)))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS query_logs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL,
                query TEXT NOT NULL,
                response TEXT NOT NULL,
                domains_consulted TEXT NOT NULL,
                confidence REAL NOT NULL,
                timestamp TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create query_logs table: {}", e)))?;

        Ok(())
    }
}

fn row_to_document(row: &sqlx::sqlite::SqliteRow) -> Result<KnowledgeDocument, DomainError> {
    let id: String = row.get("id");
    let title: String = row.get("title");
    let content: String = row.get("content");
    let domain_str: String = row.get("domain");
    let source: String = row.get("source");
    let uploaded_at: String = row.get("uploaded_at");
    let metadata_json: String = row.get("metadata");

    let domain = BankingDomain::from_str(&domain_str)?;

    let uploaded_at = DateTime::parse_from_rfc3339(&uploaded_at)
        .map_err(|e| DomainError::storage(format!("Invalid timestamp in row: {}", e)))?
        .with_timezone(&Utc);

    let metadata = serde_json::from_str(&metadata_json)
        .map_err(|e| DomainError::storage(format!("Invalid metadata in row: {}", e)))?;

    Ok(KnowledgeDocument::new(title, content, domain, source)
        .with_id(id)
        .with_uploaded_at(uploaded_at)
        .with_metadata(metadata))
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn save_document(&self, document: &KnowledgeDocument) -> Result<(), DomainError> {
        let metadata_json = serde_json::to_string(document.metadata())
            .map_err(|e| DomainError::storage(format!("Failed to serialize metadata: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO documents (id, title, content, domain, source, uploaded_at, metadata)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(document.id())
        .bind(document.title())
        .bind(document.content())
        .bind(document.domain().as_str())
        .bind(document.source())
        .bind(document.uploaded_at().to_rfc3339())
        .bind(metadata_json)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("UNIQUE constraint") {
                DomainError::conflict(format!("Document '{}' already exists", document.id()))
            } else {
                DomainError::storage(format!("Failed to save document: {}", e))
            }
        })?;

        Ok(())
    }

    async fn load_all_documents(&self) -> Result<Vec<KnowledgeDocument>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, content, domain, source, uploaded_at, metadata
            FROM documents
            ORDER BY uploaded_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to load documents: {}", e)))?;

        rows.iter().map(row_to_document).collect()
    }

    async fn count_documents(&self, domain: Option<BankingDomain>) -> Result<u64, DomainError> {
        let count: i64 = match domain {
            Some(domain) => {
                sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE domain = $1")
                    .bind(domain.as_str())
                    .fetch_one(&self.pool)
                    .await
            }
            None => {
                sqlx::query_scalar("SELECT COUNT(*) FROM documents")
                    .fetch_one(&self.pool)
                    .await
            }
        }
        .map_err(|e| DomainError::storage(format!("Failed to count documents: {}", e)))?;

        Ok(count as u64)
    }

    async fn append_query_log(&self, entry: &QueryLogEntry) -> Result<(), DomainError> {
        let domains_json = serde_json::to_string(&entry.domains_consulted)
            .map_err(|e| DomainError::storage(format!("Failed to serialize domains: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO query_logs (user_id, query, response, domains_consulted, confidence, timestamp)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&entry.user_id)
        .bind(&entry.query)
        .bind(&entry.response)
        .bind(domains_json)
        .bind(entry.confidence)
        .bind(entry.timestamp.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to append query log: {}", e)))?;

        Ok(())
    }

    async fn query_log_count(&self) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM query_logs")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count query logs: {}", e)))?;

        Ok(count as u64)
    }
}
