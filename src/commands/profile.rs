//! Player registration commands

use crate::game::{House, Player};
use crate::output::print_profile;
use crate::storage::FileStore;
use anyhow::{Context, Result};
use colored::Colorize;

/// Register (or replace) the player on this machine
///
/// # Errors
///
/// Returns an error for an empty name or if the profile cannot be saved.
pub fn run_register(store: &FileStore, name: &str, house: House) -> Result<Player> {
    let player = Player::new(name, house)?;
    if let Some(previous) = store.load_profile()
        && previous != player
    {
        tracing::info!(previous = %previous, player = %player, "replacing registered player");
    }

    store
        .save_profile(&player)
        .context("failed to save the profile")?;
    println!("{} {}", "Registered".green().bold(), player.to_string().bright_white());
    Ok(player)
}

/// Show the registered player
pub fn run_profile(store: &FileStore) {
    match store.load_profile() {
        Some(player) => print_profile(&player),
        None => println!("{}", "No player registered.".bright_black()),
    }
}

/// Forget the registered player; saved games stay on disk
///
/// # Errors
///
/// Returns an error if the profile file cannot be removed.
pub fn run_logout(store: &FileStore) -> Result<()> {
    if store.clear_profile()? {
        println!("{}", "Logged out.".green());
    } else {
        println!("{}", "No player registered.".bright_black());
    }
    Ok(())
}

/// The registered player, or an error telling how to register
///
/// # Errors
///
/// Returns an error when no player is registered.
pub fn require_player(store: &FileStore) -> Result<Player> {
    store.load_profile().context(
        "no player registered; run `hauspokal_wordle register --name <NAME> --house <HOUSE>` first",
    )
}
