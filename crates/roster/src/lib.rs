//! Guild roster tracking on top of `score-core`.
//!
//! Decodes stat feed records into snapshots, scores them, and keeps each
//! character's item level and combat score history in a repository.
pub mod config;
pub mod error;
pub mod feed;
pub mod model;
pub mod repository;
pub mod service;

pub use config::{RosterConfig, ScoreConfigLoader};
pub use error::{Result, RosterError};
pub use feed::{Feed, decode_item_level, decode_snapshot, load_feed};
pub use model::{Character, HistoryEntry, HistoryRetention, ScoreStatus};
pub use repository::{FileRosterRepository, InMemoryRosterRepository, Roster, RosterRepository};
pub use service::{RescoreSummary, RosterService};
