//! Merge-on-save profile store plus the streak and mood-log operations
//! layered on top of it.
//!
//! The store owns a single serialized [`UserRecord`] blob. `save` reads the
//! current record (or a default), shallow-merges the patch over it at the
//! top level, and writes the result back. Absent or unparseable blobs are
//! treated as "no data", never as errors.
//!
//! Calendar-day comparisons (streak roll, mood dedup) use the local day
//! boundary, matching the shipped behavior. No timezone normalization is
//! performed.

use chrono::{DateTime, Local, NaiveDate, Utc};
use std::collections::BTreeSet;

use super::blob::StorageBlob;
use crate::record::{Mood, MoodEntry, Profile, UserRecord};

/// Shallow top-level patch over [`UserRecord`].
///
/// `None` fields leave the stored value untouched; `Some` fields replace the
/// stored value wholesale (object fields are not deep-merged).
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    pub profile: Option<Profile>,
    pub streak: Option<u32>,
    pub practices_completed: Option<u32>,
    pub last_access_date: Option<DateTime<Utc>>,
    pub completed_trails: Option<BTreeSet<String>>,
    pub completed_missions: Option<BTreeSet<String>>,
    pub mood_history: Option<Vec<MoodEntry>>,
}

impl RecordPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn streak(mut self, streak: u32) -> Self {
        self.streak = Some(streak);
        self
    }

    pub fn practices_completed(mut self, count: u32) -> Self {
        self.practices_completed = Some(count);
        self
    }

    pub fn last_access_date(mut self, at: DateTime<Utc>) -> Self {
        self.last_access_date = Some(at);
        self
    }

    pub fn completed_trails(mut self, ids: BTreeSet<String>) -> Self {
        self.completed_trails = Some(ids);
        self
    }

    pub fn completed_missions(mut self, ids: BTreeSet<String>) -> Self {
        self.completed_missions = Some(ids);
        self
    }

    pub fn mood_history(mut self, history: Vec<MoodEntry>) -> Self {
        self.mood_history = Some(history);
        self
    }

    /// Apply this patch over `record`, top-level keys only.
    pub fn apply(self, record: &mut UserRecord) {
        if let Some(v) = self.profile {
            record.profile = Some(v);
        }
        if let Some(v) = self.streak {
            record.streak = v;
        }
        if let Some(v) = self.practices_completed {
            record.practices_completed = v;
        }
        if let Some(v) = self.last_access_date {
            record.last_access_date = v;
        }
        if let Some(v) = self.completed_trails {
            record.completed_trails = v;
        }
        if let Some(v) = self.completed_missions {
            record.completed_missions = v;
        }
        if let Some(v) = self.mood_history {
            record.mood_history = v;
        }
    }
}

/// User-record persistence over an injected storage backend.
pub struct ProfileStore {
    blob: Box<dyn StorageBlob>,
}

impl ProfileStore {
    /// Store over the default on-disk blob.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created.
    pub fn open() -> Result<Self, crate::error::StoreError> {
        Ok(Self::with_blob(Box::new(super::blob::FileBlob::open()?)))
    }

    /// Store over an explicit backend (fakes, disconnected environments).
    pub fn with_blob(blob: Box<dyn StorageBlob>) -> Self {
        Self { blob }
    }

    /// Deserialized record, or `None` if absent or unparseable.
    pub fn load(&self) -> Option<UserRecord> {
        let raw = self.blob.read()?;
        serde_json::from_str(&raw).ok()
    }

    /// Shallow-merge `patch` over the stored record (or a default) and
    /// write the result back. Never fails; backends without durable
    /// storage drop the write silently.
    pub fn save(&mut self, patch: RecordPatch) {
        let mut record = self.load().unwrap_or_default();
        patch.apply(&mut record);
        if let Ok(serialized) = serde_json::to_string(&record) {
            self.blob.write(&serialized);
        }
    }

    /// Delete the record entirely.
    pub fn clear(&mut self) {
        self.blob.remove();
    }

    // ── Streak ───────────────────────────────────────────────────────

    /// Evaluate the consecutive-day streak. Call once per app launch.
    ///
    /// No-op without a record or when today was already counted.
    pub fn update_streak(&mut self) {
        self.update_streak_on(Local::now().date_naive());
    }

    /// Streak evaluation against an explicit "today" (tests use fixed dates).
    pub fn update_streak_on(&mut self, today: NaiveDate) {
        let Some(record) = self.load() else {
            return;
        };
        let last_day = record.last_access_date.with_timezone(&Local).date_naive();
        if let Some(streak) = streak::roll(record.streak, last_day, today) {
            self.save(
                RecordPatch::new()
                    .streak(streak)
                    .last_access_date(Utc::now()),
            );
        }
    }

    // ── Mood log ─────────────────────────────────────────────────────

    /// Log today's mood, replacing any entry already logged today.
    ///
    /// No-op without a record.
    pub fn add_mood_entry(&mut self, mood: Mood) {
        self.add_mood_entry_on(mood, Local::now().date_naive());
    }

    /// Mood logging against an explicit "today".
    pub fn add_mood_entry_on(&mut self, mood: Mood, today: NaiveDate) {
        let Some(record) = self.load() else {
            return;
        };
        let history = moodlog::upsert(
            record.mood_history,
            MoodEntry::new(Utc::now(), mood),
            today,
        );
        self.save(RecordPatch::new().mood_history(history));
    }

    // ── Progress ─────────────────────────────────────────────────────

    /// Increment the completed-practices counter.
    pub fn complete_practice(&mut self) {
        let record = self.load().unwrap_or_default();
        self.save(RecordPatch::new().practices_completed(record.practices_completed + 1));
    }

    /// Mark a trail as completed. Idempotent.
    pub fn complete_trail(&mut self, id: &str) {
        let mut record = self.load().unwrap_or_default();
        record.completed_trails.insert(id.to_string());
        self.save(RecordPatch::new().completed_trails(record.completed_trails));
    }

    /// Mark a mission as completed. Idempotent.
    pub fn complete_mission(&mut self, id: &str) {
        let mut record = self.load().unwrap_or_default();
        record.completed_missions.insert(id.to_string());
        self.save(RecordPatch::new().completed_missions(record.completed_missions));
    }
}

/// Pure streak arithmetic over calendar days.
pub mod streak {
    use super::NaiveDate;

    /// New streak value, or `None` when today was already counted.
    ///
    /// Exactly-yesterday extends the streak; any other gap (including a
    /// clock that moved backward) resets it to 1.
    pub fn roll(streak: u32, last_day: NaiveDate, today: NaiveDate) -> Option<u32> {
        if last_day == today {
            return None;
        }
        if last_day.succ_opt() == Some(today) {
            Some(streak + 1)
        } else {
            Some(1)
        }
    }
}

/// Pure mood-history editing.
pub mod moodlog {
    use super::{Local, MoodEntry, NaiveDate};

    /// Drop any entry logged on `today` (local day), then append `entry`.
    ///
    /// Today's entry always lands at the end of the sequence; historical
    /// entries keep their insertion order.
    pub fn upsert(history: Vec<MoodEntry>, entry: MoodEntry, today: NaiveDate) -> Vec<MoodEntry> {
        let mut filtered: Vec<MoodEntry> = history
            .into_iter()
            .filter(|e| e.date.with_timezone(&Local).date_naive() != today)
            .collect();
        filtered.push(entry);
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{AnxietyFrequency, MainConcern, PhysicalActivity};
    use crate::storage::MemoryBlob;
    use chrono::Duration;

    fn memory_store() -> ProfileStore {
        ProfileStore::with_blob(Box::new(MemoryBlob::new()))
    }

    fn seeded_store() -> ProfileStore {
        let mut store = memory_store();
        store.save(RecordPatch::new().profile(Profile::new(
            "Ana",
            MainConcern::Anxiety,
            AnxietyFrequency::Daily,
            PhysicalActivity::Sometimes,
        )));
        store
    }

    #[test]
    fn save_then_load_reflects_merged_fields() {
        let mut store = seeded_store();
        store.save(RecordPatch::new().streak(5));

        let record = store.load().unwrap();
        assert_eq!(record.streak, 5);
        // Previously unmentioned fields are unchanged.
        assert_eq!(record.profile.unwrap().name, "Ana");
    }

    #[test]
    fn load_returns_none_for_absent_or_garbage_blob() {
        let store = memory_store();
        assert!(store.load().is_none());

        let mut blob = MemoryBlob::new();
        blob.write("not json {{");
        let store = ProfileStore::with_blob(Box::new(blob));
        assert!(store.load().is_none());
    }

    #[test]
    fn clear_then_load_returns_none() {
        let mut store = seeded_store();
        assert!(store.load().is_some());
        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn save_is_silent_without_durable_storage() {
        let mut store = ProfileStore::with_blob(Box::new(MemoryBlob::disconnected()));
        store.save(RecordPatch::new().streak(9));
        assert!(store.load().is_none());
    }

    #[test]
    fn streak_increments_after_yesterday_access() {
        let mut store = seeded_store();
        store.save(
            RecordPatch::new()
                .streak(5)
                .last_access_date(Utc::now() - Duration::days(1)),
        );

        store.update_streak();

        let record = store.load().unwrap();
        assert_eq!(record.streak, 6);
        let today = Local::now().date_naive();
        assert_eq!(
            record.last_access_date.with_timezone(&Local).date_naive(),
            today
        );
    }

    #[test]
    fn streak_resets_after_gap() {
        let mut store = seeded_store();
        store.save(
            RecordPatch::new()
                .streak(5)
                .last_access_date(Utc::now() - Duration::days(3)),
        );

        store.update_streak();
        assert_eq!(store.load().unwrap().streak, 1);
    }

    #[test]
    fn streak_is_idempotent_within_the_same_day() {
        let mut store = seeded_store();
        store.save(RecordPatch::new().streak(5).last_access_date(Utc::now()));
        let before = store.load().unwrap();

        store.update_streak();
        assert_eq!(store.load().unwrap(), before);
    }

    #[test]
    fn streak_without_record_is_a_noop() {
        let mut store = memory_store();
        store.update_streak();
        assert!(store.load().is_none());
    }

    #[test]
    fn streak_roll_pure_cases() {
        let d = |s: &str| s.parse::<NaiveDate>().unwrap();
        assert_eq!(streak::roll(5, d("2026-08-24"), d("2026-08-25")), Some(6));
        assert_eq!(streak::roll(5, d("2026-08-22"), d("2026-08-25")), Some(1));
        assert_eq!(streak::roll(5, d("2026-08-25"), d("2026-08-25")), None);
        // Clock moved backward: reset, not extend.
        assert_eq!(streak::roll(5, d("2026-08-26"), d("2026-08-25")), Some(1));
    }

    #[test]
    fn mood_logged_twice_keeps_second_value() {
        let mut store = seeded_store();
        store.add_mood_entry(Mood::Bad);
        store.add_mood_entry(Mood::Good);

        let record = store.load().unwrap();
        assert_eq!(record.mood_history.len(), 1);
        assert_eq!(record.mood_history[0].mood, Mood::Good);
    }

    #[test]
    fn mood_upsert_preserves_older_entries() {
        let today = Local::now().date_naive();
        let history = vec![
            MoodEntry::new(Utc::now() - Duration::days(2), Mood::Terrible),
            MoodEntry::new(Utc::now() - Duration::days(1), Mood::Bad),
            MoodEntry::new(Utc::now(), Mood::Ok),
        ];
        let updated = moodlog::upsert(history, MoodEntry::new(Utc::now(), Mood::Great), today);

        assert_eq!(updated.len(), 3);
        assert_eq!(updated[0].mood, Mood::Terrible);
        assert_eq!(updated[1].mood, Mood::Bad);
        assert_eq!(updated[2].mood, Mood::Great);
    }

    #[test]
    fn completions_are_idempotent_sets() {
        let mut store = seeded_store();
        store.complete_trail("anxiety-7");
        store.complete_trail("anxiety-7");
        store.complete_mission("walk-5");

        let record = store.load().unwrap();
        assert_eq!(record.completed_trails.len(), 1);
        assert!(record.completed_missions.contains("walk-5"));
    }

    #[test]
    fn practice_counter_is_monotonic() {
        let mut store = seeded_store();
        store.complete_practice();
        store.complete_practice();
        assert_eq!(store.load().unwrap().practices_completed, 2);
    }
}
