//! Player URLs - Keeps FantasyData profile links in player data up to date
//!
//! Player records are seeded with either a curated profile URL or a
//! placeholder search URL (`.../search?q=<name>`). This crate resolves those
//! placeholders against the curated mapping table, inventories the ones that
//! are still unresolved, and reads/writes the player data file.

pub mod config;
pub mod discovery;
pub mod error;
pub mod extractor;
pub mod mapping;
pub mod reconciler;
pub mod seeding;
pub mod store;
pub mod types;

pub use config::ScriptConfig;
pub use error::{PlayerUrlsError, Result};
pub use mapping::{MappingTable, PLAYER_URL_MAPPING};
pub use reconciler::{reconcile, remaining_placeholders, update_player_urls};
pub use types::{PlayerRecord, ReconcileOutcome, ReconcileReport, SeedSummary, UpdateRecord};
