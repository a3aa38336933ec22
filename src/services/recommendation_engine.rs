use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use super::fallback_ranking::{fallback_recommendations, preselect};
use super::recommendation_parser::{parse_recommendations, ParseError};
use super::recommendation_prompt::build_recommendation_prompt;
use crate::config::RecommendationConfig;
use crate::errors::{AppError, AppResult};
use crate::llm::{LlmError, TextGenerator};
use crate::models::{CheckInState, RecommendationOutput, Workout, RECOMMENDATION_COUNT};

/// Asks the model for a ranked recommendation set, retrying bad answers and
/// falling back to rule-based ranking when it keeps failing.
#[derive(Clone)]
pub struct RecommendationEngine {
    generator: Arc<dyn TextGenerator>,
    config: RecommendationConfig,
}

impl RecommendationEngine {
    pub fn new(generator: Arc<dyn TextGenerator>, config: RecommendationConfig) -> Self {
        Self { generator, config }
    }

    #[instrument(skip_all, fields(user_id = %state.user_id, catalog_size = catalog.len()))]
    pub async fn recommend(
        &self,
        state: &CheckInState,
        catalog: &[Workout],
    ) -> AppResult<RecommendationOutput> {
        if catalog.is_empty() {
            return Err(AppError::Recommendation(
                "Workout catalog is empty".to_string(),
            ));
        }

        let candidates = preselect(state, catalog, self.config.max_prompt_workouts);
        let expected = RECOMMENDATION_COUNT.min(candidates.len());
        let prompt = build_recommendation_prompt(state, &candidates, expected)?;

        let generator = self.generator.as_ref();
        let prompt = prompt.as_str();
        let candidates = candidates.as_slice();

        let attempt = self
            .config
            .retry_config()
            .execute_if(
                move || async move {
                    let text = generator.generate(prompt).await?;
                    parse_recommendations(&text, candidates, expected).map_err(|e| {
                        warn!("Discarding model response: {}", e);
                        anyhow::Error::from(e)
                    })
                },
                is_retryable,
            )
            .await;

        if let Err(e) = &attempt {
            if !is_retryable(e) {
                error!("Gemini request cannot succeed without operator action: {:#}", e);
            }
        }

        match attempt {
            Ok(output) => Ok(output),
            Err(e) if self.config.fallback_enabled => {
                warn!("Model recommendations unavailable, using rule-based ranking: {:#}", e);
                let output = fallback_recommendations(state, candidates, expected);
                info!(count = output.recommendations.len(), "Fallback recommendations ready");
                Ok(output)
            }
            Err(e) if e.downcast_ref::<ParseError>().is_some() => {
                Err(AppError::Recommendation("Invalid response from AI".to_string()))
            }
            Err(e) => Err(AppError::Internal(e)),
        }
    }
}

/// Configuration problems on the API side are not worth another attempt
fn is_retryable(err: &anyhow::Error) -> bool {
    err.downcast_ref::<LlmError>()
        .map_or(true, LlmError::is_retryable)
}
