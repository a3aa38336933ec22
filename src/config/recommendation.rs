use anyhow::Result;
use std::env;

use super::app::parse_flag;
use crate::llm::RetryConfig;

/// Knobs for the recommendation round trip
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationConfig {
    /// Generate-and-parse attempts before giving up on the model
    pub max_attempts: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
    /// Rank with the rule-based scorer when the model cannot be used
    pub fallback_enabled: bool,
    /// Upper bound on catalog entries embedded in the prompt
    pub max_prompt_workouts: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff_ms: 500,
            max_backoff_ms: 5000,
            fallback_enabled: true,
            max_prompt_workouts: 100,
        }
    }
}

impl RecommendationConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let max_attempts = env::var("RECOMMENDATION_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_attempts);
        let initial_backoff_ms = env::var("RECOMMENDATION_INITIAL_BACKOFF_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.initial_backoff_ms);
        let max_backoff_ms = env::var("RECOMMENDATION_MAX_BACKOFF_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_backoff_ms);
        let fallback_enabled = env::var("RECOMMENDATION_FALLBACK_ENABLED")
            .map(|v| parse_flag(&v))
            .unwrap_or(defaults.fallback_enabled);
        let max_prompt_workouts = env::var("RECOMMENDATION_MAX_PROMPT_WORKOUTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_prompt_workouts);

        Ok(Self {
            max_attempts: max_attempts.max(1),
            initial_backoff_ms,
            max_backoff_ms,
            fallback_enabled,
            max_prompt_workouts: max_prompt_workouts.max(1),
        })
    }

    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig {
            max_retries: self.max_attempts,
            initial_delay_ms: self.initial_backoff_ms,
            max_delay_ms: self.max_backoff_ms,
            backoff_factor: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_env_clamps_zero_values() {
        env::set_var("RECOMMENDATION_MAX_ATTEMPTS", "0");
        env::set_var("RECOMMENDATION_MAX_PROMPT_WORKOUTS", "0");
        env::set_var("RECOMMENDATION_FALLBACK_ENABLED", "false");

        let config = RecommendationConfig::from_env().unwrap();
        assert_eq!(config.max_attempts, 1);
        assert_eq!(config.max_prompt_workouts, 1);
        assert!(!config.fallback_enabled);

        env::remove_var("RECOMMENDATION_MAX_ATTEMPTS");
        env::remove_var("RECOMMENDATION_MAX_PROMPT_WORKOUTS");
        env::remove_var("RECOMMENDATION_FALLBACK_ENABLED");
    }

    #[test]
    fn test_retry_config_mirrors_settings() {
        let config = RecommendationConfig::default();
        let retry = config.retry_config();
        assert_eq!(retry.max_retries, 3);
        assert_eq!(retry.initial_delay_ms, 500);
        assert_eq!(retry.max_delay_ms, 5000);
    }
}
