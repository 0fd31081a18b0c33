//! Trail catalog.
//!
//! A trail is a multi-day sequence of guided practices; some trails are
//! premium-gated. The catalog is static content; completion state lives in
//! the user record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailCategory {
    Anxiety,
    Sleep,
    Focus,
}

#[derive(Debug, Clone, Serialize)]
pub struct Trail {
    pub id: &'static str,
    pub title: &'static str,
    pub category: TrailCategory,
    pub days: u32,
    pub description: &'static str,
    pub premium: bool,
    /// One guided practice per day, in order.
    pub practices: &'static [&'static str],
}

/// All available trails.
pub fn catalog() -> Vec<Trail> {
    vec![
        Trail {
            id: "anxiety-7",
            title: "7 days less anxious",
            category: TrailCategory::Anxiety,
            days: 7,
            description: "Daily techniques to reduce anxiety and regain control",
            premium: false,
            practices: &[
                "Day 1: 4-7-8 breathing (5 min)",
                "Day 2: Guided meditation (10 min)",
                "Day 3: 5-4-3-2-1 grounding",
                "Day 4: Mindful stretching",
                "Day 5: Gratitude journaling",
                "Day 6: Mindful walk",
                "Day 7: Review and celebrate",
            ],
        },
        Trail {
            id: "sleep-10",
            title: "10 days of better sleep",
            category: TrailCategory::Sleep,
            days: 10,
            description: "A nightly routine to improve your sleep quality",
            premium: false,
            practices: &[
                "Day 1: Sleep hygiene",
                "Day 2: Muscle relaxation",
                "Day 3: Sleep meditation",
                "Day 4: Night routine",
                "Day 5: Breathing for sleep",
                "Day 6: Guided visualization",
                "Day 7: Nature sounds",
                "Day 8: Body scan",
                "Day 9: Restorative yoga",
                "Day 10: Consolidation",
            ],
        },
        Trail {
            id: "focus-5",
            title: "Focus and productivity",
            category: TrailCategory::Focus,
            days: 5,
            description: "Techniques to improve concentration and productivity",
            premium: true,
            practices: &[
                "Day 1: Pomodoro technique",
                "Day 2: Focus meditation",
                "Day 3: Mental decluttering",
                "Day 4: Energy and movement",
                "Day 5: Flow state",
            ],
        },
        Trail {
            id: "exam-anxiety",
            title: "Exam anxiety",
            category: TrailCategory::Anxiety,
            days: 5,
            description: "Strategies for dealing with performance anxiety",
            premium: true,
            practices: &[
                "Day 1: Pre-exam breathing",
                "Day 2: Visualizing success",
                "Day 3: Relaxation techniques",
                "Day 4: Positive mindset",
                "Day 5: Rehearsal and confidence",
            ],
        },
    ]
}

/// Look up a trail by id.
pub fn find(id: &str) -> Option<Trail> {
    catalog().into_iter().find(|t| t.id == id)
}

/// Trails in a category.
pub fn by_category(category: TrailCategory) -> Vec<Trail> {
    catalog()
        .into_iter()
        .filter(|t| t.category == category)
        .collect()
}

/// Whole-number completion percentage for `done` days out of `total`.
pub fn progress_pct(done: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (done as f64 / total as f64 * 100.0).round() as u32
}

/// How many catalog trails appear in the completed-id set.
pub fn completed_count(completed_ids: &BTreeSet<String>) -> usize {
    catalog()
        .iter()
        .filter(|t| completed_ids.contains(t.id))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_shape() {
        let trails = catalog();
        assert_eq!(trails.len(), 4);
        for trail in &trails {
            assert_eq!(trail.practices.len() as u32, trail.days);
        }
    }

    #[test]
    fn premium_gating() {
        assert!(!find("anxiety-7").unwrap().premium);
        assert!(find("focus-5").unwrap().premium);
        assert!(find("nope").is_none());
    }

    #[test]
    fn category_filter() {
        let anxiety = by_category(TrailCategory::Anxiety);
        assert_eq!(anxiety.len(), 2);
    }

    #[test]
    fn progress_rounding() {
        assert_eq!(progress_pct(0, 7), 0);
        assert_eq!(progress_pct(3, 7), 43);
        assert_eq!(progress_pct(7, 7), 100);
        assert_eq!(progress_pct(1, 0), 0);
    }

    #[test]
    fn completed_count_ignores_unknown_ids() {
        let mut ids = BTreeSet::new();
        ids.insert("anxiety-7".to_string());
        ids.insert("made-up".to_string());
        assert_eq!(completed_count(&ids), 1);
    }
}
