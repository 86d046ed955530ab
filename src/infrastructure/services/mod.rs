//! Application services

pub mod expert_service;

pub use expert_service::{ExpertService, KnowledgeBaseStats};
