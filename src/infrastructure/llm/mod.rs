//! LLM provider implementations

pub mod groq;
pub mod http_client;

pub use groq::GroqProvider;
pub use http_client::{HttpClient, HttpClientTrait};
