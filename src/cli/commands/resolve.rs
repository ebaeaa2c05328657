//! Resolve command - print the cached icon path for an entry

use crate::cache::IconCache;
use crate::cli::args::ResolveArgs;
use crate::config::Config;
use crate::error::{FavcacheError, FavcacheResult};
use crate::layout::CacheLayout;

/// Execute the resolve command
pub fn execute(args: ResolveArgs, layout: CacheLayout, config: &Config) -> FavcacheResult<()> {
    let cache = IconCache::open(layout, config.provider.clone());

    if let Some(path) = cache.resolve(&args.id) {
        println!("{}", path.display());
        return Ok(());
    }

    match args.fallback {
        Some(fallback) => {
            println!("{}", fallback.display());
            Ok(())
        }
        None => Err(FavcacheError::IconNotCached(args.id)),
    }
}
