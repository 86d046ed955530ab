//! Lazy per-domain index registry

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::BankingDomain;
use crate::domain::retrieval::VectorIndex;

/// Builds a fresh index partition for one domain
pub type IndexFactory = dyn Fn() -> Arc<dyn VectorIndex> + Send + Sync;

/// Holds one index partition per banking domain, created on first use.
///
/// Partitions are strictly isolated: a document indexed under one domain is
/// never visible to searches against another.
pub struct DomainIndexRegistry {
    factory: Box<IndexFactory>,
    partitions: RwLock<HashMap<BankingDomain, Arc<dyn VectorIndex>>>,
}

impl fmt::Debug for DomainIndexRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainIndexRegistry").finish_non_exhaustive()
    }
}

impl DomainIndexRegistry {
    pub fn new(factory: impl Fn() -> Arc<dyn VectorIndex> + Send + Sync + 'static) -> Self {
        Self {
            factory: Box::new(factory),
            partitions: RwLock::new(HashMap::new()),
        }
    }

    /// Get the partition for a domain, creating it on first access
    pub async fn partition(&self, domain: BankingDomain) -> Arc<dyn VectorIndex> {
        if let Some(index) = self.partitions.read().await.get(&domain) {
            return Arc::clone(index);
        }

        let mut partitions = self.partitions.write().await;

        // Another task may have won the race between lock acquisitions
        Arc::clone(
            partitions
                .entry(domain)
                .or_insert_with(|| (self.factory)()),
        )
    }

    /// Partition for a domain if it has already been created
    pub async fn existing_partition(&self, domain: BankingDomain) -> Option<Arc<dyn VectorIndex>> {
        self.partitions.read().await.get(&domain).map(Arc::clone)
    }

    /// Number of partitions created so far
    pub async fn initialized_count(&self) -> usize {
        self.partitions.read().await.len()
    }
}
