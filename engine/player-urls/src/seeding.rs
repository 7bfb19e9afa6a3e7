//! Initial assignment of FantasyData URLs to player data

use crate::extractor::search_url;
use crate::mapping::MappingTable;
use crate::types::{PlayerRecord, SeedSummary};
use tracing::info;

/// Give every named record a URL: the curated one when known, a search
/// placeholder otherwise. Existing URLs are overwritten.
pub fn assign_player_urls(records: &mut [PlayerRecord], mapping: &MappingTable) -> SeedSummary {
    let mut summary = SeedSummary::default();

    for record in records.iter_mut() {
        let Some(name) = record.name() else {
            continue;
        };

        let url = match mapping.get(name) {
            Some(mapped) => {
                summary.direct += 1;
                mapped.to_string()
            }
            None => {
                summary.search += 1;
                search_url(name)
            }
        };
        record.set_fantasy_data_url(url);
    }

    info!("Seeded {} players ({} direct, {} search)", summary.total(), summary.direct, summary.search);
    summary
}
