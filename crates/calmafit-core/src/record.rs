//! User record value types.
//!
//! A single [`UserRecord`] per installation holds everything the app
//! persists: the onboarding profile, the engagement streak, completed
//! practices/trails/missions, and the mood history. The record is created
//! when onboarding completes (profile becomes non-`None`) and only destroyed
//! by an explicit wipe.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The user's main concern, chosen during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MainConcern {
    Anxiety,
    Sleep,
    Focus,
    Stress,
    Other,
}

impl MainConcern {
    /// Wire/display name of the concern.
    pub fn as_str(&self) -> &'static str {
        match self {
            MainConcern::Anxiety => "anxiety",
            MainConcern::Sleep => "sleep",
            MainConcern::Focus => "focus",
            MainConcern::Stress => "stress",
            MainConcern::Other => "other",
        }
    }

    /// The derived goal string shown throughout the app.
    pub fn goal(&self) -> &'static str {
        match self {
            MainConcern::Anxiety => "reduce anxiety attacks",
            MainConcern::Sleep => "sleep better",
            MainConcern::Focus => "improve focus",
            MainConcern::Stress => "reduce stress",
            MainConcern::Other => "feel better every day",
        }
    }
}

/// How often the user experiences anxiety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnxietyFrequency {
    Daily,
    SeveralWeekly,
    Sometimes,
    Rarely,
}

/// Current physical activity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhysicalActivity {
    Regular,
    Sometimes,
    None,
}

/// Onboarding profile. `goal` is derived from `main_concern`, not asked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub main_concern: MainConcern,
    pub anxiety_frequency: AnxietyFrequency,
    pub physical_activity: PhysicalActivity,
    pub goal: String,
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        main_concern: MainConcern,
        anxiety_frequency: AnxietyFrequency,
        physical_activity: PhysicalActivity,
    ) -> Self {
        Self {
            name: name.into(),
            main_concern,
            anxiety_frequency,
            physical_activity,
            goal: main_concern.goal().to_string(),
        }
    }
}

/// A logged mood value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Great,
    Good,
    Ok,
    Bad,
    Terrible,
}

impl Mood {
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Great => "Great",
            Mood::Good => "Good",
            Mood::Ok => "Okay",
            Mood::Bad => "Bad",
            Mood::Terrible => "Terrible",
        }
    }
}

/// One entry in the mood history. At most one per calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: DateTime<Utc>,
    pub mood: Mood,
}

impl MoodEntry {
    pub fn new(date: DateTime<Utc>, mood: Mood) -> Self {
        Self { date, mood }
    }
}

/// The single persisted record for one installation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// `None` until onboarding completes.
    #[serde(default)]
    pub profile: Option<Profile>,
    /// Consecutive calendar days with at least one app open.
    #[serde(default)]
    pub streak: u32,
    /// Monotonically incremented practice counter.
    #[serde(default)]
    pub practices_completed: u32,
    /// Last time the streak was evaluated.
    #[serde(default = "Utc::now")]
    pub last_access_date: DateTime<Utc>,
    /// Completed trail ids. Uniqueness required, order irrelevant.
    #[serde(default)]
    pub completed_trails: BTreeSet<String>,
    /// Completed mission ids.
    #[serde(default)]
    pub completed_missions: BTreeSet<String>,
    /// Mood entries in insertion order.
    #[serde(default)]
    pub mood_history: Vec<MoodEntry>,
}

impl Default for UserRecord {
    fn default() -> Self {
        Self {
            profile: None,
            streak: 0,
            practices_completed: 0,
            last_access_date: Utc::now(),
            completed_trails: BTreeSet::new(),
            completed_missions: BTreeSet::new(),
            mood_history: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_derives_from_concern() {
        let p = Profile::new(
            "Ana",
            MainConcern::Sleep,
            AnxietyFrequency::Sometimes,
            PhysicalActivity::None,
        );
        assert_eq!(p.goal, "sleep better");
    }

    #[test]
    fn record_roundtrips_through_json() {
        let mut record = UserRecord::default();
        record.profile = Some(Profile::new(
            "Ana",
            MainConcern::Anxiety,
            AnxietyFrequency::Daily,
            PhysicalActivity::Regular,
        ));
        record.streak = 3;
        record.completed_trails.insert("anxiety-7".to_string());
        record
            .mood_history
            .push(MoodEntry::new(Utc::now(), Mood::Good));

        let json = serde_json::to_string(&record).unwrap();
        let parsed: UserRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn enums_use_wire_names() {
        assert_eq!(
            serde_json::to_string(&AnxietyFrequency::SeveralWeekly).unwrap(),
            "\"several-weekly\""
        );
        assert_eq!(serde_json::to_string(&Mood::Ok).unwrap(), "\"ok\"");
        assert_eq!(
            serde_json::to_string(&PhysicalActivity::None).unwrap(),
            "\"none\""
        );
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: UserRecord = serde_json::from_str("{}").unwrap();
        assert!(parsed.profile.is_none());
        assert_eq!(parsed.streak, 0);
        assert!(parsed.mood_history.is_empty());
    }
}
