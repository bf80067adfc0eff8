use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a coaching plan's prose came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Produced by the external text-generation service.
    Ai,
    /// Produced by the deterministic local template.
    Fallback,
}

/// A generated (or locally rendered) coaching plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachingPlan {
    pub user_id: String,
    pub generated_at: DateTime<Utc>,
    pub content: String,
    pub provenance: Provenance,
}

/// Tuning knobs for a text-generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// Outcome of a text-generation call. Transport failures and timeouts
/// surface as `success = false`, never as a panic or caller-facing error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOutcome {
    pub success: bool,
    pub content: Option<String>,
    pub error: Option<String>,
}

impl GenerationOutcome {
    pub fn ok(content: String) -> Self {
        Self {
            success: true,
            content: Some(content),
            error: None,
        }
    }

    pub fn failed(error: String) -> Self {
        Self {
            success: false,
            content: None,
            error: Some(error),
        }
    }
}
