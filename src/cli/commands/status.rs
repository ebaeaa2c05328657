//! Status command - index and cache directory state

use crate::cache::IconCache;
use crate::config::Config;
use crate::error::FavcacheResult;
use crate::index::CacheStatus;
use crate::layout::CacheLayout;
use console::{style, Emoji};

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "[OK] ");
static CROSS: Emoji<'_, '_> = Emoji("✗ ", "[FAIL] ");
static WAIT: Emoji<'_, '_> = Emoji("… ", "[..] ");

/// Execute the status command
pub fn execute(layout: CacheLayout, config: &Config) -> FavcacheResult<()> {
    println!("{}", style("Favcache Status").bold().cyan());
    println!();

    println!("{}", style("Cache:").bold());
    println!("  Directory: {}", layout.root().display());
    println!("  Provider:  {}", config.provider.origin);

    let cache = IconCache::open(layout, config.provider.clone());
    if !cache.is_enabled() {
        println!();
        println!(
            "  {} {}",
            CROSS,
            style("Cache directory is not usable").red()
        );
        return Ok(());
    }

    let entries = cache.entries();
    let cached = entries
        .iter()
        .filter(|e| e.status == CacheStatus::Exist)
        .count();
    let skipped = entries
        .iter()
        .filter(|e| e.status == CacheStatus::Skip)
        .count();
    let pending = entries
        .iter()
        .filter(|e| e.status == CacheStatus::None && !e.fav_key.is_empty())
        .count();
    let unkeyed = entries.iter().filter(|e| e.fav_key.is_empty()).count();

    println!();
    println!("{}", style("Entries:").bold());
    println!("  Total:   {}", entries.len());
    println!("  {}Cached:  {}", CHECK, style(cached).green());
    println!("  {}Skipped: {}", CROSS, style(skipped).yellow());
    println!("  {}Pending: {}", WAIT, pending);
    println!("  No key:  {}", unkeyed);

    Ok(())
}
