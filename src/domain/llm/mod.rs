//! LLM completion types and provider seam

mod message;
mod provider;
mod request;
mod response;

pub use message::{Message, MessageRole};
pub use provider::LlmProvider;
pub use request::{CompletionRequest, CompletionRequestBuilder};
pub use response::{CompletionResponse, FinishReason, Usage};

#[cfg(test)]
pub use provider::mock::MockLlmProvider;
