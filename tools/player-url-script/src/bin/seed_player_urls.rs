use anyhow::{Context, Result};
use player_urls::seeding::assign_player_urls;
use player_urls::store::{load_players, save_players};
use player_urls::{ScriptConfig, PLAYER_URL_MAPPING};
use tracing::info;

fn main() -> Result<()> {
    // Initialize logging on stderr; stdout carries the report
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = ScriptConfig::from_env().context("Failed to load configuration")?;
    info!("Loaded configuration: {:?}", config);

    let mut players = load_players(&config.players_path).context("Failed to load player data")?;

    let summary = assign_player_urls(&mut players, &PLAYER_URL_MAPPING);

    save_players(&config.players_path, &players).context("Failed to save player data")?;
    println!("Updated {} with {} players", config.players_path.display(), players.len());

    println!("\nSuccessfully added fantasyDataUrl to all players");
    println!("Total players updated: {}", summary.total());
    println!("Players with direct URLs: {}", summary.direct);
    println!("Players with search URLs: {}", summary.search);

    Ok(())
}
