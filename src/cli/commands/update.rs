//! Update command - download icons for all pending entries

use crate::cache::IconCache;
use crate::config::Config;
use crate::error::FavcacheResult;
use crate::favicon::HttpFetcher;
use crate::layout::CacheLayout;
use console::style;

/// Execute the update command
pub fn execute(layout: CacheLayout, config: &Config) -> FavcacheResult<()> {
    let mut cache = IconCache::open(layout, config.provider.clone());
    let fetcher = HttpFetcher::new();

    let outcome = cache.update(&fetcher);

    if outcome.lock_contended {
        println!(
            "{} another update is already running",
            style("[WARN]").yellow()
        );
        return Ok(());
    }

    println!(
        "{} {} pending, {} fetched, {} skipped",
        style("[OK]").green(),
        outcome.pending,
        outcome.fetched,
        outcome.skipped
    );

    Ok(())
}
