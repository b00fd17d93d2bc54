//! Search ledger command handler

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_stats(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let stats = store.search_stats().await?;

    if stats.is_empty() {
        println!("No searches recorded yet.");
        return Ok(());
    }

    println!("Searches ({} cities)", stats.len());
    println!("{:-<50}", "");

    let width = stats
        .iter()
        .map(|r| r.city.chars().count())
        .max()
        .unwrap_or(0);

    for record in stats {
        println!("{:<width$}  {:>6}", record.city, record.count);
    }

    Ok(())
}
