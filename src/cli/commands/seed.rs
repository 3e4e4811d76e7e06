//! Seed command handlers for reference rows
//!
//! Directors and genres have no creation endpoint; movie rows reference them
//! by id, so they are seeded from the command line.

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_seed_director(config: &Config, name: &str) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let id = store.add_director(name).await?;

    println!("✓ Added director: {} (ID: {})", name, id);
    Ok(())
}

pub async fn cmd_seed_genre(config: &Config, name: &str) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let id = store.add_genre(name).await?;

    println!("✓ Added genre: {} (ID: {})", name, id);
    Ok(())
}
