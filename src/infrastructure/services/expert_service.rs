//! Query orchestration across the per-domain experts

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use futures::future::join_all;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::llm::{CompletionRequest, LlmProvider};
use crate::domain::prompt;
use crate::domain::query::{GENERATION_FAILED_ANSWER, confidence_score};
use crate::domain::retrieval::RetrievalHit;
use crate::domain::store::DocumentStore;
use crate::domain::{BankingDomain, DomainError, KnowledgeDocument, QueryLogEntry, QueryResponse};
use crate::infrastructure::retrieval::DomainIndexRegistry;

/// Knowledge-base statistics for the stats endpoint
#[derive(Debug, Serialize)]
pub struct KnowledgeBaseStats {
    pub total_documents: u64,
    pub domains: BTreeMap<String, u64>,
    pub total_queries: u64,
    pub vector_stores_initialized: usize,
}

/// Orchestrates retrieval, per-domain generation, and synthesis.
///
/// One instance serves all requests; every method takes `&self` and all
/// state lives behind the store, registry, and provider seams.
#[derive(Debug)]
pub struct ExpertService {
    store: Arc<dyn DocumentStore>,
    registry: Arc<DomainIndexRegistry>,
    llm: Arc<dyn LlmProvider>,
    model: String,
    temperature: f32,
    top_k: usize,
}

impl ExpertService {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        registry: Arc<DomainIndexRegistry>,
        llm: Arc<dyn LlmProvider>,
        model: impl Into<String>,
        temperature: f32,
        top_k: usize,
    ) -> Self {
        Self {
            store,
            registry,
            llm,
            model: model.into(),
            temperature,
            top_k,
        }
    }

    /// Answer a query by consulting the selected domain experts.
    ///
    /// An empty `preferred_domains` slice consults every registered domain.
    /// Individual domain failures degrade the response; only storage
    /// failures on the ingestion path surface as errors to callers.
    pub async fn answer_query(
        &self,
        query: &str,
        user_id: &str,
        preferred_domains: &[BankingDomain],
    ) -> Result<QueryResponse, DomainError> {
        let domains: Vec<BankingDomain> = if preferred_domains.is_empty() {
            BankingDomain::all().to_vec()
        } else {
            preferred_domains.to_vec()
        };

        debug!(domains = domains.len(), "Dispatching query to domain experts");

        let retrievals = join_all(domains.iter().map(|&domain| async move {
            // Partitions are created by ingestion and warm-up only; a
            // domain with no documents yet has nothing to search
            let Some(index) = self.registry.existing_partition(domain).await else {
                return (domain, Vec::new());
            };

            match index.search(query, self.top_k).await {
                Ok(hits) => (domain, hits),
                Err(e) => {
                    warn!(domain = %domain, error = %e, "Retrieval failed for domain");
                    (domain, Vec::new())
                }
            }
        }))
        .await;

        let with_hits: Vec<(BankingDomain, Vec<RetrievalHit>)> = retrievals
            .into_iter()
            .filter(|(_, hits)| !hits.is_empty())
            .collect();

        let total_hits: usize = with_hits.iter().map(|(_, hits)| hits.len()).sum();

        if total_hits == 0 {
            debug!("No retrieval hits in any domain");
            let response = QueryResponse::no_knowledge();
            self.log_query(user_id, query, &response).await;
            return Ok(response);
        }

        let generations = join_all(with_hits.iter().map(|(domain, hits)| async move {
            let context = prompt::build_context(hits);
            let text = prompt::build_expert_prompt(*domain, &context, query);

            let request = CompletionRequest::builder()
                .user(text)
                .temperature(self.temperature)
                .build();

            match self.llm.complete(&self.model, request).await {
                Ok(completion) => Some((*domain, completion.content().to_string())),
                Err(e) => {
                    warn!(domain = %domain, error = %e, "Generation failed for domain");
                    None
                }
            }
        }))
        .await;

        let answers: Vec<(BankingDomain, String)> = generations.into_iter().flatten().collect();

        let answer = self.synthesize(&answers, query).await;

        // A domain counts as consulted once it contributed a hit, even if
        // its generation later failed
        let domains_consulted: Vec<BankingDomain> =
            with_hits.iter().map(|(domain, _)| *domain).collect();

        // Hit titles in retrieval order; duplicate titles are preserved
        let sources: Vec<String> = with_hits
            .iter()
            .flat_map(|(_, hits)| hits.iter().map(|hit| hit.title.clone()))
            .collect();

        let confidence = confidence_score(total_hits, domains_consulted.len());

        let response = QueryResponse {
            answer,
            sources,
            confidence,
            domains_consulted,
            timestamp: Utc::now(),
        };

        self.log_query(user_id, query, &response).await;

        Ok(response)
    }

    /// Merge per-domain answers into one.
    ///
    /// A single answer is returned verbatim without a synthesis call. When
    /// the synthesis completion fails, the answers are concatenated.
    async fn synthesize(&self, answers: &[(BankingDomain, String)], query: &str) -> String {
        match answers {
            [] => GENERATION_FAILED_ANSWER.to_string(),
            [(_, only)] => only.clone(),
            _ => {
                let text = prompt::build_synthesis_prompt(answers, query);

                let request = CompletionRequest::builder()
                    .user(text)
                    .temperature(self.temperature)
                    .build();

                match self.llm.complete(&self.model, request).await {
                    Ok(completion) => completion.content().to_string(),
                    Err(e) => {
                        warn!(error = %e, "Synthesis failed, concatenating domain answers");
                        answers
                            .iter()
                            .map(|(_, answer)| answer.as_str())
                            .collect::<Vec<_>>()
                            .join("\n\n")
                    }
                }
            }
        }
    }

    /// Best-effort audit logging; a storage failure never fails the query
    async fn log_query(&self, user_id: &str, query: &str, response: &QueryResponse) {
        let entry = QueryLogEntry::from_response(user_id, query, response);

        if let Err(e) = self.store.append_query_log(&entry).await {
            warn!(error = %e, "Failed to append query audit log");
        }
    }

    /// Persist a document and index it into its domain partition.
    ///
    /// The two side effects are not atomic: if indexing fails after the
    /// save, the document stays durable and becomes searchable again after
    /// the next startup warm-up.
    pub async fn add_document(&self, document: &KnowledgeDocument) -> Result<(), DomainError> {
        if !document.is_retrievable() {
            return Err(DomainError::validation("Document content must not be empty"));
        }

        self.store.save_document(document).await?;

        let index = self.registry.partition(document.domain()).await;
        index.add(document).await?;

        info!(
            document_id = document.id(),
            domain = %document.domain(),
            "Document ingested"
        );

        Ok(())
    }

    /// Load every persisted document into its domain partition
    pub async fn warm_from_store(&self) -> Result<usize, DomainError> {
        let documents = self.store.load_all_documents().await?;

        let mut indexed = 0;
        for document in &documents {
            if !document.is_retrievable() {
                continue;
            }

            let index = self.registry.partition(document.domain()).await;
            index.add(document).await?;
            indexed += 1;
        }

        info!(indexed, "Warmed retrieval partitions from store");

        Ok(indexed)
    }

    pub async fn stats(&self) -> Result<KnowledgeBaseStats, DomainError> {
        let total_documents = self.store.count_documents(None).await?;

        let mut domains = BTreeMap::new();
        for &domain in BankingDomain::all() {
            let count = self.store.count_documents(Some(domain)).await?;
            domains.insert(domain.as_str().to_string(), count);
        }

        Ok(KnowledgeBaseStats {
            total_documents,
            domains,
            total_queries: self.store.query_log_count().await?,
            vector_stores_initialized: self.registry.initialized_count().await,
        })
    }
}
