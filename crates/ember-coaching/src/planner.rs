//! CoachingPlanner — daily plan orchestration with local fallback.

use chrono::Duration;

use ember_analytics::AnalyticsAggregator;
use ember_core::config::CoachingConfig;
use ember_core::errors::EmberResult;
use ember_core::models::{
    CoachingPlan, CravingPrediction, GenerationOptions, Provenance, WeeklySummary,
};
use ember_core::traits::{Clock, IEventStore, ITextGenerator};

use crate::{fallback, prompts};

/// Builds the daily coaching plan from the trailing week of analytics.
///
/// The generator is consulted first; any unusable outcome is replaced by
/// the deterministic template, marked `Provenance::Fallback`. Only store
/// failures reach the caller as errors.
pub struct CoachingPlanner<S: IEventStore, G, C> {
    analytics: AnalyticsAggregator<S>,
    generator: G,
    clock: C,
    config: CoachingConfig,
}

impl<S, G, C> CoachingPlanner<S, G, C>
where
    S: IEventStore,
    G: ITextGenerator,
    C: Clock,
{
    pub fn new(store: S, generator: G, clock: C, config: CoachingConfig) -> Self {
        Self {
            analytics: AnalyticsAggregator::new(store),
            generator,
            clock,
            config,
        }
    }

    /// Today's plan over the 7 days ending today, optionally informed by
    /// a current craving prediction.
    pub fn daily_plan(
        &self,
        user_id: &str,
        prediction: Option<&CravingPrediction>,
    ) -> EmberResult<CoachingPlan> {
        let today = self.clock.today();
        let summary = self.analytics.weekly(user_id, today - Duration::days(6))?;

        let (content, provenance) = self.generate(user_id, &summary, prediction);
        Ok(CoachingPlan {
            user_id: user_id.to_string(),
            generated_at: self.clock.now(),
            content,
            provenance,
        })
    }

    fn generate(
        &self,
        user_id: &str,
        summary: &WeeklySummary,
        prediction: Option<&CravingPrediction>,
    ) -> (String, Provenance) {
        let options = GenerationOptions {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };
        let user_prompt = prompts::user_prompt(summary, prediction);
        let outcome = self
            .generator
            .generate(prompts::SYSTEM_PROMPT, &user_prompt, &options);

        match outcome.content.filter(|c| outcome.success && !c.trim().is_empty()) {
            Some(content) => (content, Provenance::Ai),
            None => {
                tracing::warn!(
                    user_id,
                    error = outcome.error.as_deref().unwrap_or("empty completion"),
                    "text generation unusable, rendering local plan"
                );
                (fallback::render(summary, prediction), Provenance::Fallback)
            }
        }
    }
}
