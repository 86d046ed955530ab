//! SME Gateway
//!
//! A retrieval-augmented question answering service for banking knowledge
//! domains. Documents are partitioned by domain, queries fan out to the
//! relevant domain experts, and a synthesis pass merges their answers.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::AppState;
use config::{IndexBackend, StorageBackend};
use domain::embedding::EmbeddingProvider;
use domain::llm::LlmProvider;
use domain::retrieval::VectorIndex;
use domain::store::DocumentStore;
use infrastructure::embedding::OpenAiEmbeddingProvider;
use infrastructure::llm::{GroqProvider, HttpClient};
use infrastructure::retrieval::{DomainIndexRegistry, EmbeddingVectorIndex, InMemoryVectorIndex};
use infrastructure::services::ExpertService;
use infrastructure::storage::{InMemoryDocumentStore, SqliteDocumentStore};

/// Create the application state with all services initialized
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let store: Arc<dyn DocumentStore> = match config.storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory document store");
            Arc::new(InMemoryDocumentStore::new())
        }
        StorageBackend::Sqlite => {
            info!(path = %config.storage.path, "Using SQLite document store");
            Arc::new(SqliteDocumentStore::open(&config.storage.path).await?)
        }
    };

    let registry = Arc::new(create_index_registry(config)?);

    let api_key = config
        .llm
        .api_key
        .clone()
        .ok_or_else(|| anyhow::anyhow!("GROQ_API_KEY environment variable is required"))?;

    let llm: Arc<dyn LlmProvider> = Arc::new(GroqProvider::with_base_url(
        HttpClient::new(),
        api_key,
        &config.llm.base_url,
    ));

    let expert_service = Arc::new(ExpertService::new(
        Arc::clone(&store),
        Arc::clone(&registry),
        llm,
        &config.llm.model,
        config.llm.temperature,
        config.retrieval.top_k,
    ));

    let indexed = expert_service.warm_from_store().await?;
    info!(indexed, "Application state initialized");

    Ok(AppState::new(expert_service, store))
}

fn create_index_registry(config: &AppConfig) -> anyhow::Result<DomainIndexRegistry> {
    match config.retrieval.index {
        IndexBackend::Memory => Ok(DomainIndexRegistry::new(|| {
            Arc::new(InMemoryVectorIndex::new()) as Arc<dyn VectorIndex>
        })),
        IndexBackend::Embedding => {
            let api_key = config.retrieval.embedding_api_key.clone().ok_or_else(|| {
                anyhow::anyhow!(
                    "OPENAI_API_KEY environment variable is required for the embedding index"
                )
            })?;

            let provider: Arc<dyn EmbeddingProvider> =
                Arc::new(OpenAiEmbeddingProvider::with_base_url(
                    HttpClient::new(),
                    api_key,
                    &config.retrieval.embedding_model,
                    &config.retrieval.embedding_base_url,
                ));

            Ok(DomainIndexRegistry::new(move || {
                Arc::new(EmbeddingVectorIndex::new(Arc::clone(&provider))) as Arc<dyn VectorIndex>
            }))
        }
    }
}
