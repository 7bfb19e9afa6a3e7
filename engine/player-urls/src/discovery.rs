//! Inventory of players whose URLs still need manual curation

use crate::extractor::{extract_player_name, is_placeholder};
use crate::types::{PlayerRecord, UpdateRecord};

/// Collect every record with a decodable placeholder URL, in record order
pub fn players_needing_update(records: &[PlayerRecord]) -> Vec<UpdateRecord> {
    records
        .iter()
        .filter_map(|record| {
            let url = record.fantasy_data_url().filter(|url| is_placeholder(url))?;
            let search_name = extract_player_name(url)?;
            Some(UpdateRecord {
                name: record.display_name().to_string(),
                search_name,
                current_url: url.to_string(),
            })
        })
        .collect()
}

/// Format the first `limit` entries the way the discovery report prints them
pub fn preview_lines(updates: &[UpdateRecord], limit: usize) -> Vec<String> {
    updates
        .iter()
        .take(limit)
        .map(|update| format!("  - {} (search: {})", update.name, update.search_name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_placeholders_in_order() {
        let records = vec![
            PlayerRecord::new("Zay Flowers", "https://fantasydata.com/nfl/search?q=Zay%20Flowers"),
            PlayerRecord::new("Josh Allen", "https://fantasydata.com/nfl/josh-allen-fantasy/19801"),
            PlayerRecord::new("Adam Thielen", "https://fantasydata.com/nfl/search?q=Adam%20Thielen"),
            PlayerRecord::new("Broken", "https://fantasydata.com/nfl/search?q="),
        ];

        let updates = players_needing_update(&records);

        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].name, "Zay Flowers");
        assert_eq!(updates[0].search_name, "Zay Flowers");
        assert_eq!(updates[0].current_url, "https://fantasydata.com/nfl/search?q=Zay%20Flowers");
        assert_eq!(updates[1].name, "Adam Thielen");
    }

    #[test]
    fn test_does_not_mutate_records() {
        let records = vec![PlayerRecord::new("Bo Nix", "https://x.com/search?q=Bo%20Nix")];
        let before = records.clone();

        players_needing_update(&records);

        assert_eq!(records, before);
    }

    #[test]
    fn test_preview_is_limited() {
        let records: Vec<PlayerRecord> = (0..15)
            .map(|i| {
                let name = format!("Player {i}");
                PlayerRecord::new(&name, &crate::extractor::search_url(&name))
            })
            .collect();

        let updates = players_needing_update(&records);
        let lines = preview_lines(&updates, 10);

        assert_eq!(updates.len(), 15);
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  - Player 0 (search: Player 0)");
        assert_eq!(lines[9], "  - Player 9 (search: Player 9)");
    }
}
