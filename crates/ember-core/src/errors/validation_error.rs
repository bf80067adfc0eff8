/// Input validation errors. Malformed input is rejected before it
/// reaches the analytical core.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("puffs out of range: {value} (allowed {min}\u{2013}{max})")]
    PuffsOutOfRange { value: u32, min: u32, max: u32 },

    #[error("mood out of range: {value} (allowed {min}\u{2013}{max})")]
    MoodOutOfRange { value: u8, min: u8, max: u8 },

    #[error("unknown intensity: {value}")]
    UnknownIntensity { value: String },

    #[error("unknown context: {value}")]
    UnknownContext { value: String },

    #[error("user id must not be empty")]
    EmptyUserId,

    #[error("invalid calendar month: {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },
}
