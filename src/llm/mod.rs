//! Text generation backends.
//!
//! The recommendation engine only needs "prompt in, text out", so that is all
//! [`TextGenerator`] exposes. [`GeminiClient`] is the production implementation.

use anyhow::Result;
use async_trait::async_trait;

mod error;
mod gemini;
mod retry;

pub use error::LlmError;
pub use gemini::GeminiClient;
pub use retry::RetryConfig;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a single-turn prompt and return the model's text
    async fn generate(&self, prompt: &str) -> Result<String>;
}
