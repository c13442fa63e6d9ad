//! Table of the rivers defined in the configuration.

use anyhow::Result;

use crate::config::Config;
use crate::scan::river_root;

pub fn list_rivers(config: &Config) -> Result<()> {
    if config.rivers.is_empty() {
        println!("No rivers configured.");
        return Ok(());
    }

    println!(
        "{:<16} {:<10} {:<12} {:<12} ROOT",
        "RIVER", "EVERY(S)", "INDEX", "TYPE"
    );
    for name in config.rivers.keys() {
        let river = config.river(name)?;
        let root = river_root(&river)?;
        let status = if root.exists() { "" } else { " (missing)" };
        println!(
            "{:<16} {:<10} {:<12} {:<12} {}{}",
            name,
            river.update_rate.unwrap_or_default(),
            river.index_name.as_deref().unwrap_or("-"),
            river.type_name.as_deref().unwrap_or("-"),
            root.display(),
            status
        );
    }

    Ok(())
}
