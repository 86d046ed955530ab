//! Domain entities, value types, and provider seams

pub mod banking;
pub mod document;
pub mod embedding;
pub mod error;
pub mod llm;
pub mod prompt;
pub mod query;
pub mod retrieval;
pub mod store;

pub use banking::BankingDomain;
pub use document::KnowledgeDocument;
pub use error::DomainError;
pub use query::{QueryLogEntry, QueryResponse};
