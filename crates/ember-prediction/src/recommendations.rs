//! Fixed, risk-level-keyed coping actions.

use ember_core::models::RiskLevel;

/// Recommended coping actions for a risk level.
pub fn for_risk(risk: RiskLevel) -> &'static [&'static str] {
    match risk {
        RiskLevel::High => &[
            "Step away from your usual spot for ten minutes.",
            "Try a 4-7-8 breathing cycle before reaching for the device.",
            "Drink a glass of water and set a 15-minute delay timer.",
            "Message someone from your support circle.",
        ],
        RiskLevel::Moderate => &[
            "Keep your hands busy — a short walk or a quick chore helps.",
            "Note what you're feeling right now; cravings pass in minutes.",
            "Move your device somewhere out of immediate reach.",
        ],
        RiskLevel::Low => &[
            "You're in a calm window — a good moment to plan tomorrow.",
            "Log how you feel to sharpen future predictions.",
        ],
    }
}
