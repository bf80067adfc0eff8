use crate::models::{GenerationOptions, GenerationOutcome};

/// Opaque external text-generation service.
///
/// Implementations must bound latency (request timeout) and report every
/// failure through `GenerationOutcome::failed` so callers can substitute
/// their deterministic fallback.
pub trait ITextGenerator: Send + Sync {
    fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        options: &GenerationOptions,
    ) -> GenerationOutcome;
}
