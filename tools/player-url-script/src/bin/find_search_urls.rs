use anyhow::{Context, Result};
use player_urls::discovery::{players_needing_update, preview_lines};
use player_urls::store::{load_players, save_players_to_update};
use player_urls::ScriptConfig;
use tracing::info;

fn main() -> Result<()> {
    // Initialize logging on stderr; stdout carries the report
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = ScriptConfig::from_env().context("Failed to load configuration")?;
    info!("Loaded configuration: {:?}", config);

    println!("Loading player data...");
    let players = load_players(&config.players_path).context("Failed to load player data")?;

    let players_to_update = players_needing_update(&players);
    println!("Found {} players with search URLs that need updating", players_to_update.len());

    println!("\nFirst {} players that need URL updates:", config.preview_limit);
    for line in preview_lines(&players_to_update, config.preview_limit) {
        println!("{}", line);
    }

    println!("\nTotal players to update: {}", players_to_update.len());

    save_players_to_update(&config.discovery_path, &players_to_update)
        .context("Failed to write discovery file")?;
    println!(
        "\nCreated {} with all players needing URL updates",
        config.discovery_path.display()
    );

    Ok(())
}
