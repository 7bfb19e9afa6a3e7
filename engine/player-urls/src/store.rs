//! Reading and writing the player data and discovery files

use crate::error::{PlayerUrlsError, Result};
use crate::types::{PlayerRecord, UpdateRecord};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Load the full player data array
pub fn load_players<P: AsRef<Path>>(path: P) -> Result<Vec<PlayerRecord>> {
    let path = path.as_ref();
    info!("Loading player data from: {:?}", path);

    let json_content = fs::read_to_string(path).map_err(|e| PlayerUrlsError::io(path, e))?;
    let players: Vec<PlayerRecord> =
        serde_json::from_str(&json_content).map_err(|e| PlayerUrlsError::json(path, e))?;

    info!("Loaded {} players from file", players.len());
    Ok(players)
}

/// Overwrite the player data file with the given records
///
/// The file is truncated and rewritten in place; an interrupted write can
/// leave it corrupt.
pub fn save_players<P: AsRef<Path>>(path: P, players: &[PlayerRecord]) -> Result<()> {
    write_pretty_json(path.as_ref(), players)?;
    info!("Saved {} players to {:?}", players.len(), path.as_ref());
    Ok(())
}

/// Save the player data only when reconciliation changed something
///
/// Returns whether the file was written.
pub fn save_if_updated<P: AsRef<Path>>(path: P, players: &[PlayerRecord], updates: usize) -> Result<bool> {
    if updates == 0 {
        info!("No updates made, leaving {:?} untouched", path.as_ref());
        return Ok(false);
    }
    save_players(path, players)?;
    Ok(true)
}

/// Write the discovery list for manual URL collection
pub fn save_players_to_update<P: AsRef<Path>>(path: P, updates: &[UpdateRecord]) -> Result<()> {
    write_pretty_json(path.as_ref(), updates)?;
    info!("Wrote {} players needing updates to {:?}", updates.len(), path.as_ref());
    Ok(())
}

fn write_pretty_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json_content = serde_json::to_string_pretty(value).map_err(|e| PlayerUrlsError::json(path, e))?;
    fs::write(path, json_content).map_err(|e| PlayerUrlsError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::players_needing_update;
    use crate::mapping::MappingTable;
    use crate::reconciler::update_player_urls;
    use serde_json::Value;
    use tempfile::TempDir;

    const PLAYERS_JSON: &str = r#"[
  {"name": "Bo Nix", "team": "DEN", "fantasyDataUrl": "https://example.com/search?q=Bo%20Nix"},
  {"name": "Unknown Player", "fantasyDataUrl": "https://example.com/search?q=Unknown%20Player", "rank": 312},
  {"name": "Josh Allen", "fantasyDataUrl": "https://fantasydata.com/nfl/josh-allen-fantasy/19801"}
]"#;

    fn write_players(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("players.json");
        fs::write(&path, PLAYERS_JSON).unwrap();
        path
    }

    #[test]
    fn test_load_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_players(&temp_dir);

        let players = load_players(&path).unwrap();

        let names: Vec<_> = players.iter().map(|p| p.display_name()).collect();
        assert_eq!(names, vec!["Bo Nix", "Unknown Player", "Josh Allen"]);
    }

    #[test]
    fn test_round_trip_without_updates() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_players(&temp_dir);

        let mut players = load_players(&path).unwrap();
        assert_eq!(update_player_urls(&mut players, &MappingTable::default()), 0);
        save_players(&path, &players).unwrap();

        let original: Value = serde_json::from_str(PLAYERS_JSON).unwrap();
        let saved: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved, original);
    }

    #[test]
    fn test_saved_file_is_two_space_indented() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("players.json");

        save_players(&path, &[PlayerRecord::new("Bo Nix", "u")]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n  {\n    \"name\": \"Bo Nix\""));
    }

    #[test]
    fn test_update_and_save() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_players(&temp_dir);
        let mapping =
            MappingTable::from_entries([("Bo Nix", "https://fantasydata.com/nfl/bo-nix-fantasy/25069")]);

        let mut players = load_players(&path).unwrap();
        assert_eq!(update_player_urls(&mut players, &mapping), 1);
        save_players(&path, &players).unwrap();

        let reloaded = load_players(&path).unwrap();
        assert_eq!(reloaded, players);
        assert_eq!(
            reloaded[0].fantasy_data_url(),
            Some("https://fantasydata.com/nfl/bo-nix-fantasy/25069")
        );
        assert_eq!(serde_json::to_value(&reloaded[0]).unwrap()["team"], Value::from("DEN"));
    }

    #[test]
    fn test_save_if_updated_skips_unchanged_data() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_players(&temp_dir);

        let mut players = load_players(&path).unwrap();
        let updates = update_player_urls(&mut players, &MappingTable::default());

        assert!(!save_if_updated(&path, &players, updates).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), PLAYERS_JSON);
    }

    #[test]
    fn test_save_if_updated_writes_changes() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_players(&temp_dir);
        let mapping =
            MappingTable::from_entries([("Bo Nix", "https://fantasydata.com/nfl/bo-nix-fantasy/25069")]);

        let mut players = load_players(&path).unwrap();
        let updates = update_player_urls(&mut players, &mapping);

        assert!(save_if_updated(&path, &players, updates).unwrap());
        assert_eq!(load_players(&path).unwrap(), players);
        assert_ne!(fs::read_to_string(&path).unwrap(), PLAYERS_JSON);
    }

    #[test]
    fn test_wide_numbers_survive_save() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("players.json");
        fs::write(
            &path,
            r#"[{"name":"Bo Nix","id":123456789012345678901234,"adp":12.345678901234567890123,"fantasyDataUrl":"https://example.com/search?q=Bo%20Nix"}]"#,
        )
        .unwrap();
        let mapping =
            MappingTable::from_entries([("Bo Nix", "https://fantasydata.com/nfl/bo-nix-fantasy/25069")]);

        let mut players = load_players(&path).unwrap();
        assert_eq!(update_player_urls(&mut players, &mapping), 1);
        save_players(&path, &players).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"id\": 123456789012345678901234"));
        assert!(content.contains("\"adp\": 12.345678901234567890123"));
    }

    #[test]
    fn test_discovery_file_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_players(&temp_dir);
        let out = temp_dir.path().join("players_to_update.json");

        let players = load_players(&path).unwrap();
        save_players_to_update(&out, &players_needing_update(&players)).unwrap();

        let written: Vec<UpdateRecord> = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(written[1].search_name, "Unknown Player");

        let raw: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert!(raw[0].get("current_url").is_some());
        assert_eq!(fs::read_to_string(&path).unwrap(), PLAYERS_JSON);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();

        let err = load_players(temp_dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, PlayerUrlsError::Io { .. }));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("players.json");
        fs::write(&path, "[{\"name\": ").unwrap();

        let err = load_players(&path).unwrap_err();
        assert!(matches!(err, PlayerUrlsError::Json { .. }));
    }
}
