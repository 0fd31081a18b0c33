//! Mission catalog.
//!
//! A mission is a single standalone guided exercise with a point reward.
//! Completion state lives in the user record; points are derived from the
//! completed-id set.

use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Serialize)]
pub struct Mission {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub benefit: &'static str,
    pub points: u32,
}

/// All available missions.
pub fn catalog() -> Vec<Mission> {
    vec![
        Mission {
            id: "walk-5",
            title: "Walk for 5 minutes",
            description: "Put on your favorite music and walk for 5 minutes",
            duration: "5 min",
            benefit: "Releases endorphins and lowers cortisol",
            points: 10,
        },
        Mission {
            id: "stretch-3",
            title: "Stretch for 3 minutes",
            description: "Gentle stretches to relax the body",
            duration: "3 min",
            benefit: "Relieves muscle tension caused by anxiety",
            points: 10,
        },
        Mission {
            id: "dance-song",
            title: "Dance to one song",
            description: "Pick a favorite song and dance freely",
            duration: "3-4 min",
            benefit: "Movement releases built-up energy and lifts mood",
            points: 15,
        },
        Mission {
            id: "breathe-box",
            title: "Box breathing",
            description: "Inhale 4 seconds, hold 4, exhale 4, hold 4",
            duration: "2 min",
            benefit: "Activates the parasympathetic nervous system",
            points: 10,
        },
        Mission {
            id: "yoga-sun",
            title: "Sun salutation",
            description: "A yoga sequence to energize the body",
            duration: "5 min",
            benefit: "Combines movement and breath to reduce anxiety",
            points: 20,
        },
        Mission {
            id: "walk-nature",
            title: "Walk in nature",
            description: "10 minutes outdoors, taking in the surroundings",
            duration: "10 min",
            benefit: "Time in nature measurably reduces anxiety",
            points: 25,
        },
    ]
}

/// Look up a mission by id.
pub fn find(id: &str) -> Option<Mission> {
    catalog().into_iter().find(|m| m.id == id)
}

/// Total points earned for the completed-id set. Unknown ids score nothing.
pub fn total_points(completed_ids: &BTreeSet<String>) -> u32 {
    catalog()
        .iter()
        .filter(|m| completed_ids.contains(m.id))
        .map(|m| m.points)
        .sum()
}
