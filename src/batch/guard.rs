//! Single-instance guard for batch runs
//!
//! An advisory lock file under `images/` keeps two overlapping update runs
//! from interleaving index writes. A lock left behind by a crashed runner
//! is replaced once it is older than `STALE_AFTER`.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

const STALE_AFTER: Duration = Duration::from_secs(60 * 60);

/// Held for the duration of a batch run; removes the lock file on drop.
#[derive(Debug)]
pub struct BatchGuard {
    path: PathBuf,
}

impl BatchGuard {
    /// Try to take the lock. `None` means another run holds it.
    pub fn acquire(path: &Path) -> Option<BatchGuard> {
        match Self::try_create(path) {
            Some(guard) => Some(guard),
            None if Self::is_stale(path) => {
                warn!("removing stale update lock {}", path.display());
                let _ = fs::remove_file(path);
                Self::try_create(path)
            }
            None => None,
        }
    }

    fn try_create(path: &Path) -> Option<BatchGuard> {
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(mut file) => {
                let _ = write!(file, "{}", std::process::id());
                debug!("acquired update lock {}", path.display());
                Some(BatchGuard {
                    path: path.to_path_buf(),
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => None,
            Err(e) => {
                // A lock failure must never abort the batch; run unguarded.
                warn!("could not create update lock {}: {}", path.display(), e);
                Some(BatchGuard {
                    path: path.to_path_buf(),
                })
            }
        }
    }

    fn is_stale(path: &Path) -> bool {
        let Ok(meta) = fs::metadata(path) else {
            return false;
        };
        let Ok(modified) = meta.modified() else {
            return false;
        };
        modified
            .elapsed()
            .map(|age| age > STALE_AFTER)
            .unwrap_or(false)
    }
}

impl Drop for BatchGuard {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
