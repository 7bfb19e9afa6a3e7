use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON key holding a player's display name
pub const NAME_FIELD: &str = "name";

/// JSON key holding a player's FantasyData profile URL
pub const FANTASY_DATA_URL_FIELD: &str = "fantasyDataUrl";

/// A single entry of the player data file
///
/// Only `name` and `fantasyDataUrl` are interpreted. Every other field is
/// carried through untouched, in its original key order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerRecord {
    fields: Map<String, Value>,
}

impl PlayerRecord {
    /// Create a record with just a name and a URL
    pub fn new(name: &str, fantasy_data_url: &str) -> Self {
        let mut fields = Map::new();
        fields.insert(NAME_FIELD.to_string(), Value::String(name.to_string()));
        fields.insert(FANTASY_DATA_URL_FIELD.to_string(), Value::String(fantasy_data_url.to_string()));
        Self { fields }
    }

    /// Player display name, if present and a string
    pub fn name(&self) -> Option<&str> {
        self.fields.get(NAME_FIELD).and_then(Value::as_str)
    }

    /// Name used in progress output
    pub fn display_name(&self) -> &str {
        self.name().unwrap_or("<unnamed>")
    }

    /// Current FantasyData URL, if present and a string
    pub fn fantasy_data_url(&self) -> Option<&str> {
        self.fields.get(FANTASY_DATA_URL_FIELD).and_then(Value::as_str)
    }

    /// Overwrite the FantasyData URL, keeping its position among the fields
    pub fn set_fantasy_data_url(&mut self, url: impl Into<String>) {
        self.fields.insert(FANTASY_DATA_URL_FIELD.to_string(), Value::String(url.into()));
    }
}

/// A player still carrying a placeholder URL, written out for manual curation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRecord {
    /// Display name from the record
    pub name: String,
    /// Name decoded from the placeholder URL
    pub search_name: String,
    /// The placeholder URL itself
    pub current_url: String,
}

/// What reconciliation did with one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Placeholder replaced with the mapped URL
    Updated { search_name: String, url: String },

    /// Placeholder decoded but no mapping entry exists
    Unmapped { search_name: String },

    /// Placeholder present but the name could not be decoded
    Undecodable,

    /// URL is already canonical
    NotPlaceholder,

    /// No string `fantasyDataUrl` field
    MissingUrl,
}

/// Per-record outcomes of a reconciliation pass, in record order
#[derive(Debug, Clone, Default)]
pub struct ReconcileReport {
    pub outcomes: Vec<ReconcileOutcome>,
}

impl ReconcileReport {
    /// Number of records whose URL was replaced
    pub fn updated(&self) -> usize {
        self.outcomes.iter().filter(|o| matches!(o, ReconcileOutcome::Updated { .. })).count()
    }

    /// Number of records left with a placeholder URL
    pub(crate) fn unresolved(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ReconcileOutcome::Unmapped { .. } | ReconcileOutcome::Undecodable))
            .count()
    }
}

/// Counts produced by seeding URLs into player data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Players given a curated profile URL
    pub direct: usize,
    /// Players given a placeholder search URL
    pub search: usize,
}

impl SeedSummary {
    pub fn total(&self) -> usize {
        self.direct + self.search
    }
}
