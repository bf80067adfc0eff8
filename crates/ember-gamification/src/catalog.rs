//! The fixed, process-wide achievement catalog.
//!
//! Ids are immutable strings; entries may be appended but never renamed
//! or removed, so stored unlock records stay valid across versions.
//! Unlocks are reported in the order defined here.

use ember_core::models::{AchievementCategory, AchievementDef, UnlockCondition};

pub const CATALOG: &[AchievementDef] = &[
    AchievementDef {
        id: "first_step",
        title: "First Step",
        description: "Log your first intake",
        xp_reward: 50,
        category: AchievementCategory::Milestone,
        condition: UnlockCondition::TotalLogsAtLeast(1),
    },
    AchievementDef {
        id: "three_day_streak",
        title: "Three in a Row",
        description: "Log on 3 consecutive days",
        xp_reward: 75,
        category: AchievementCategory::Streak,
        condition: UnlockCondition::CurrentStreakAtLeast(3),
    },
    AchievementDef {
        id: "week_warrior",
        title: "Week Warrior",
        description: "Log on 7 consecutive days",
        xp_reward: 150,
        category: AchievementCategory::Streak,
        condition: UnlockCondition::CurrentStreakAtLeast(7),
    },
    AchievementDef {
        id: "fortnight_focus",
        title: "Fortnight Focus",
        description: "Log on 14 consecutive days",
        xp_reward: 250,
        category: AchievementCategory::Streak,
        condition: UnlockCondition::CurrentStreakAtLeast(14),
    },
    AchievementDef {
        id: "monthly_master",
        title: "Monthly Master",
        description: "Log on 30 consecutive days",
        xp_reward: 500,
        category: AchievementCategory::Streak,
        condition: UnlockCondition::CurrentStreakAtLeast(30),
    },
    AchievementDef {
        id: "getting_started",
        title: "Getting Started",
        description: "Record 10 intake logs",
        xp_reward: 100,
        category: AchievementCategory::Logging,
        condition: UnlockCondition::TotalLogsAtLeast(10),
    },
    AchievementDef {
        id: "dedicated_logger",
        title: "Dedicated Logger",
        description: "Record 50 intake logs",
        xp_reward: 200,
        category: AchievementCategory::Logging,
        condition: UnlockCondition::TotalLogsAtLeast(50),
    },
    AchievementDef {
        id: "century_club",
        title: "Century Club",
        description: "Record 100 intake logs",
        xp_reward: 300,
        category: AchievementCategory::Logging,
        condition: UnlockCondition::TotalLogsAtLeast(100),
    },
    AchievementDef {
        id: "data_devotee",
        title: "Data Devotee",
        description: "Record 500 intake logs",
        xp_reward: 500,
        category: AchievementCategory::Logging,
        condition: UnlockCondition::TotalLogsAtLeast(500),
    },
    AchievementDef {
        id: "pocket_change",
        title: "Pocket Change",
        description: "Save 10 in pack money",
        xp_reward: 100,
        category: AchievementCategory::Savings,
        condition: UnlockCondition::MoneySavedAtLeast(10.0),
    },
    AchievementDef {
        id: "smart_saver",
        title: "Smart Saver",
        description: "Save 50 in pack money",
        xp_reward: 250,
        category: AchievementCategory::Savings,
        condition: UnlockCondition::MoneySavedAtLeast(50.0),
    },
    AchievementDef {
        id: "big_saver",
        title: "Big Saver",
        description: "Save 100 in pack money",
        xp_reward: 500,
        category: AchievementCategory::Savings,
        condition: UnlockCondition::MoneySavedAtLeast(100.0),
    },
];

/// The full catalog in definition order.
pub fn all() -> &'static [AchievementDef] {
    CATALOG
}

/// Look up a definition by its immutable id.
pub fn by_id(id: &str) -> Option<&'static AchievementDef> {
    CATALOG.iter().find(|def| def.id == id)
}
