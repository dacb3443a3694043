//! 测试用的假后端

#![allow(dead_code)]

use async_trait::async_trait;
use code_translator::domain::error::TranslatorError;
use code_translator::domain::traits::LlmGateway;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Returns a canned reply (or a backend error) and records every prompt.
pub struct FakeGateway {
    reply: Option<String>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl FakeGateway {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LlmGateway for FakeGateway {
    async fn generate(&self, prompt: &str) -> Result<String, TranslatorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(TranslatorError::Backend {
                status: 500,
                body: "model not loaded".to_string(),
            }),
        }
    }

    fn model(&self) -> &str {
        "fake-model"
    }
}
