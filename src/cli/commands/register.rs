//! Register command - attach a favicon key to an entry

use crate::cache::IconCache;
use crate::cli::args::RegisterArgs;
use crate::config::Config;
use crate::error::{FavcacheError, FavcacheResult};
use crate::index::valid_item_id;
use crate::layout::CacheLayout;
use console::style;

/// Execute the register command
pub fn execute(args: RegisterArgs, layout: CacheLayout, config: &Config) -> FavcacheResult<()> {
    if !valid_item_id(&args.id) {
        return Err(FavcacheError::InvalidItemId(args.id));
    }

    let payload = match (&args.fav, &args.payload) {
        (Some(fav), _) => serde_json::json!({ "fav": fav }).to_string(),
        (None, Some(payload)) => payload.clone(),
        (None, None) => unreachable!("clap requires one of --fav/--payload"),
    };

    let mut cache = IconCache::open(layout, config.provider.clone());
    if !cache.is_enabled() {
        println!(
            "{} cache unavailable, nothing registered",
            style("[WARN]").yellow()
        );
        return Ok(());
    }

    cache.register(&args.id, &payload);
    cache.persist();

    println!("{} registered {}", style("[OK]").green(), args.id);
    Ok(())
}
