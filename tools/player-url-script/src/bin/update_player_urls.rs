use anyhow::{Context, Result};
use player_urls::store::{load_players, save_if_updated};
use player_urls::{remaining_placeholders, update_player_urls, ScriptConfig, PLAYER_URL_MAPPING};
use tracing::info;

fn main() -> Result<()> {
    // Initialize logging on stderr; stdout carries the report
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = ScriptConfig::from_env().context("Failed to load configuration")?;
    info!("Loaded configuration: {:?}", config);

    println!("Loading player data...");
    let mut players = load_players(&config.players_path).context("Failed to load player data")?;

    println!("Updating URLs for {} players...", PLAYER_URL_MAPPING.len());
    let updates = update_player_urls(&mut players, &PLAYER_URL_MAPPING);

    if save_if_updated(&config.players_path, &players, updates).context("Failed to save player data")? {
        println!("\nSuccessfully updated {} player URLs", updates);
    } else {
        println!("\nNo updates were made");
    }

    println!("Remaining players with search URLs: {}", remaining_placeholders(&players));

    Ok(())
}
