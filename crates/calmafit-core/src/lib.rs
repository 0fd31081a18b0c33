//! # CalmaFit Core Library
//!
//! This library provides the core logic for the CalmaFit mental-wellness
//! companion. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary, with any GUI being a thin layer
//! over the same core library.
//!
//! ## Architecture
//!
//! - **Profile Store**: merge-on-save persistence of a single user record
//!   (profile, streak, completed practices, mood history) behind an injected
//!   storage backend
//! - **Breathing Timer**: a tick-driven state machine cycling through
//!   inhale/hold/exhale phases; the caller owns the 1 Hz clock
//! - **SOS Flow / Onboarding**: explicit tagged-state wizards
//! - **Chat**: thin client for a hosted chat-completion endpoint
//! - **Reminders**: daily local-time reminder scheduling
//!
//! ## Key Components
//!
//! - [`ProfileStore`]: user-record persistence, streak and mood tracking
//! - [`BreathingSession`]: crisis breathing state machine
//! - [`ChatClient`]: chat-completion proxy with fixed prompt and fallback
//! - [`Config`]: application configuration management

pub mod analytics;
pub mod breathing;
pub mod chat;
pub mod emergency;
pub mod error;
pub mod missions;
pub mod onboarding;
pub mod record;
pub mod reminder;
pub mod sos;
pub mod storage;
pub mod trails;
pub mod validation;

pub use breathing::{BreathPhase, BreathingSession, REQUIRED_CYCLES};
pub use chat::{ChatClient, ChatMessage, Role, FALLBACK_REPLY};
pub use error::{ChatError, ConfigError, CoreError, StoreError, ValidationError};
pub use record::{AnxietyFrequency, MainConcern, Mood, MoodEntry, PhysicalActivity, Profile, UserRecord};
pub use storage::{Config, FileBlob, MemoryBlob, ProfileStore, RecordPatch, StorageBlob};
