//! Replaces placeholder search URLs with curated profile URLs

use crate::extractor::{extract_player_name, is_placeholder};
use crate::mapping::MappingTable;
use crate::types::{PlayerRecord, ReconcileOutcome, ReconcileReport};
use tracing::{debug, info};

/// Classify a single record and apply the mapping if one exists
fn reconcile_record(record: &mut PlayerRecord, mapping: &MappingTable) -> ReconcileOutcome {
    let Some(url) = record.fantasy_data_url() else {
        return ReconcileOutcome::MissingUrl;
    };

    if !is_placeholder(url) {
        return ReconcileOutcome::NotPlaceholder;
    }

    let Some(search_name) = extract_player_name(url) else {
        debug!("Could not decode search name for {}: {}", record.display_name(), url);
        return ReconcileOutcome::Undecodable;
    };

    match mapping.get(&search_name) {
        Some(mapped) => {
            let url = mapped.to_string();
            record.set_fantasy_data_url(url.clone());
            ReconcileOutcome::Updated { search_name, url }
        }
        None => {
            debug!("No mapping for {}", search_name);
            ReconcileOutcome::Unmapped { search_name }
        }
    }
}

/// Reconcile every record in place and report what happened to each
pub fn reconcile(records: &mut [PlayerRecord], mapping: &MappingTable) -> ReconcileReport {
    let outcomes: Vec<ReconcileOutcome> =
        records.iter_mut().map(|record| reconcile_record(record, mapping)).collect();

    let report = ReconcileReport { outcomes };
    info!(
        "Reconciled {} records: {} updated, {} unresolved",
        records.len(),
        report.updated(),
        report.unresolved()
    );
    report
}

/// Reconcile every record, printing one line per replaced URL
///
/// Returns the number of records updated.
pub fn update_player_urls(records: &mut [PlayerRecord], mapping: &MappingTable) -> usize {
    let report = reconcile(records, mapping);

    for (record, outcome) in records.iter().zip(&report.outcomes) {
        if let ReconcileOutcome::Updated { url, .. } = outcome {
            println!("Updated {}: {}", record.display_name(), url);
        }
    }

    report.updated()
}

/// Count records that still carry a placeholder URL
pub fn remaining_placeholders(records: &[PlayerRecord]) -> usize {
    records.iter().filter_map(PlayerRecord::fantasy_data_url).filter(|url| is_placeholder(url)).count()
}
