use std::fmt::Debug;

use async_trait::async_trait;

use super::{CompletionRequest, CompletionResponse};
use crate::domain::DomainError;

/// Trait for LLM completion providers
#[async_trait]
pub trait LlmProvider: Send + Sync + Debug {
    /// Send a completion request
    async fn complete(
        &self,
        model: &str,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::domain::llm::Message;

    /// One scripted outcome for a completion call
    #[derive(Debug, Clone)]
    enum ScriptedCall {
        Answer(String),
        Failure(String),
    }

    /// Mock provider driven by a FIFO script of outcomes.
    ///
    /// Calls beyond the script return a default canned answer. The call
    /// counter lets tests assert whether the synthesis pass ran.
    #[derive(Debug, Default)]
    pub struct MockLlmProvider {
        script: Mutex<VecDeque<ScriptedCall>>,
        call_count: AtomicUsize,
        fail_all: Mutex<bool>,
    }

    impl MockLlmProvider {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn push_answer(&self, answer: impl Into<String>) {
            self.script
                .lock()
                .unwrap()
                .push_back(ScriptedCall::Answer(answer.into()));
        }

        pub fn push_failure(&self, reason: impl Into<String>) {
            self.script
                .lock()
                .unwrap()
                .push_back(ScriptedCall::Failure(reason.into()));
        }

        pub fn set_fail_all(&self, fail: bool) {
            *self.fail_all.lock().unwrap() = fail;
        }

        pub fn call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmProvider for MockLlmProvider {
        async fn complete(
            &self,
            model: &str,
            _request: CompletionRequest,
        ) -> Result<CompletionResponse, DomainError> {
            self.call_count.fetch_add(1, Ordering::SeqCst);

            if *self.fail_all.lock().unwrap() {
                return Err(DomainError::provider("mock", "scripted failure"));
            }

            match self.script.lock().unwrap().pop_front() {
                Some(ScriptedCall::Answer(answer)) => Ok(CompletionResponse::new(
                    format!("mock-{}", self.call_count()),
                    model.to_string(),
                    Message::assistant(answer),
                )),
                Some(ScriptedCall::Failure(reason)) => {
                    Err(DomainError::provider("mock", reason))
                }
                None => Ok(CompletionResponse::new(
                    format!("mock-{}", self.call_count()),
                    model.to_string(),
                    Message::assistant("mock answer"),
                )),
            }
        }

        fn provider_name(&self) -> &'static str {
            "mock"
        }
    }
}
