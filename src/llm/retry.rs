use anyhow::Result;
use std::time::Duration;
use tokio::time::sleep;

/// Retry configuration with exponential backoff
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Total attempts, including the first one. Zero behaves like one.
    pub max_retries: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
    pub backoff_factor: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 100,
            max_delay_ms: 5000,
            backoff_factor: 2.0,
        }
    }
}

impl RetryConfig {
    /// Execute a function with retries and exponential backoff
    pub async fn execute<F, Fut, T>(&self, func: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        self.execute_if(func, |_| true).await
    }

    /// Like [`RetryConfig::execute`], but gives up at once on errors
    /// `should_retry` rejects
    pub async fn execute_if<F, Fut, T, P>(&self, mut func: F, should_retry: P) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
        P: Fn(&anyhow::Error) -> bool,
    {
        let max_attempts = self.max_retries.max(1);
        let mut attempt = 0;
        let mut delay_ms = self.initial_delay_ms;

        loop {
            match func().await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    attempt += 1;

                    if !should_retry(&e) {
                        tracing::debug!("Attempt {} failed permanently: {:#}", attempt, e);
                        return Err(e);
                    }

                    if attempt >= max_attempts {
                        tracing::warn!("Max attempts ({}) exceeded: {:#}", max_attempts, e);
                        return Err(e);
                    }

                    tracing::debug!(
                        "Attempt {} failed, retrying in {}ms: {:#}",
                        attempt,
                        delay_ms,
                        e
                    );

                    sleep(Duration::from_millis(delay_ms)).await;

                    // Exponential backoff with cap
                    delay_ms =
                        ((delay_ms as f64 * self.backoff_factor) as u64).min(self.max_delay_ms);
                }
            }
        }
    }
}
