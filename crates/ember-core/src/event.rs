//! The intake event: one logged occurrence, immutable once created.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{MOOD_MAX, MOOD_MIN, PUFFS_MAX, PUFFS_MIN};
use crate::errors::ValidationError;

/// How strong the intake felt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [Intensity::Low, Intensity::Medium, Intensity::High];

    /// Stable storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
        }
    }

    /// Position in per-intensity bucket arrays.
    pub fn index(self) -> usize {
        match self {
            Intensity::Low => 0,
            Intensity::Medium => 1,
            Intensity::High => 2,
        }
    }
}

impl FromStr for Intensity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Intensity::Low),
            "medium" => Ok(Intensity::Medium),
            "high" => Ok(Intensity::High),
            other => Err(ValidationError::UnknownIntensity {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What triggered the intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntakeContext {
    Stress,
    Bored,
    Habit,
    Social,
    Other,
}

impl IntakeContext {
    pub const ALL: [IntakeContext; 5] = [
        IntakeContext::Stress,
        IntakeContext::Bored,
        IntakeContext::Habit,
        IntakeContext::Social,
        IntakeContext::Other,
    ];

    /// Stable storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            IntakeContext::Stress => "stress",
            IntakeContext::Bored => "bored",
            IntakeContext::Habit => "habit",
            IntakeContext::Social => "social",
            IntakeContext::Other => "other",
        }
    }

    /// Position in per-context bucket arrays.
    pub fn index(self) -> usize {
        match self {
            IntakeContext::Stress => 0,
            IntakeContext::Bored => 1,
            IntakeContext::Habit => 2,
            IntakeContext::Social => 3,
            IntakeContext::Other => 4,
        }
    }
}

impl FromStr for IntakeContext {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stress" => Ok(IntakeContext::Stress),
            "bored" => Ok(IntakeContext::Bored),
            "habit" => Ok(IntakeContext::Habit),
            "social" => Ok(IntakeContext::Social),
            "other" => Ok(IntakeContext::Other),
            unknown => Err(ValidationError::UnknownContext {
                value: unknown.to_string(),
            }),
        }
    }
}

impl fmt::Display for IntakeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single logged intake occurrence.
///
/// Immutable once created: deleted only by explicit user action, never
/// mutated. Construct through [`IntakeEvent::create`], which validates
/// the draft and stamps ids/timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeEvent {
    pub id: String,
    pub user_id: String,
    pub puffs: u32,
    pub intensity: Intensity,
    pub context: IntakeContext,
    pub occurred_at: DateTime<Utc>,
    pub mood: Option<u8>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Unvalidated input for a new event.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub user_id: String,
    pub puffs: u32,
    pub intensity: Intensity,
    pub context: IntakeContext,
    /// Defaults to the creation instant when absent.
    pub occurred_at: Option<DateTime<Utc>>,
    pub mood: Option<u8>,
    pub note: Option<String>,
}

impl EventDraft {
    pub fn new(user_id: &str, puffs: u32, intensity: Intensity, context: IntakeContext) -> Self {
        Self {
            user_id: user_id.to_string(),
            puffs,
            intensity,
            context,
            occurred_at: None,
            mood: None,
            note: None,
        }
    }

    pub fn occurred_at(mut self, at: DateTime<Utc>) -> Self {
        self.occurred_at = Some(at);
        self
    }

    pub fn mood(mut self, mood: u8) -> Self {
        self.mood = Some(mood);
        self
    }

    pub fn note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }
}

impl IntakeEvent {
    /// Validate a draft and mint the event. `now` is the injected creation
    /// instant, used both as `created_at` and as the `occurred_at` default.
    pub fn create(draft: EventDraft, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        if draft.user_id.is_empty() {
            return Err(ValidationError::EmptyUserId);
        }
        if !(PUFFS_MIN..=PUFFS_MAX).contains(&draft.puffs) {
            return Err(ValidationError::PuffsOutOfRange {
                value: draft.puffs,
                min: PUFFS_MIN,
                max: PUFFS_MAX,
            });
        }
        if let Some(mood) = draft.mood {
            if !(MOOD_MIN..=MOOD_MAX).contains(&mood) {
                return Err(ValidationError::MoodOutOfRange {
                    value: mood,
                    min: MOOD_MIN,
                    max: MOOD_MAX,
                });
            }
        }

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: draft.user_id,
            puffs: draft.puffs,
            intensity: draft.intensity,
            context: draft.context,
            occurred_at: draft.occurred_at.unwrap_or(now),
            mood: draft.mood,
            note: draft.note,
            created_at: now,
        })
    }
}
