//! Infrastructure layer - external service implementations

pub mod embedding;
pub mod llm;
pub mod logging;
pub mod retrieval;
pub mod services;
pub mod storage;
