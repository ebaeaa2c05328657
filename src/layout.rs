//! Cache directory layout
//!
//! All cache state lives under a single root: the `images/` subdirectory
//! holds the downloaded icons and the JSON index describing them.

use crate::config::Config;
use crate::error::{FavcacheError, FavcacheResult};
use std::path::{Path, PathBuf};

/// Fixed extension for cached images, regardless of downloaded content type.
const IMAGE_EXT: &str = "png";

/// Resolved cache directory layout
#[derive(Debug, Clone)]
pub struct CacheLayout {
    root: PathBuf,
}

impl CacheLayout {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Platform default cache root (e.g. `~/.cache/favcache` on Linux)
    pub fn default_root() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("favcache")
    }

    /// Resolve the cache root: CLI override > config override > platform default
    pub fn resolve(cli_dir: Option<&Path>, config: &Config) -> Self {
        let root = cli_dir
            .map(Path::to_path_buf)
            .or_else(|| config.cache.dir.clone())
            .unwrap_or_else(Self::default_root);
        Self::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn images_dir(&self) -> PathBuf {
        self.root.join("images")
    }

    pub fn index_path(&self) -> PathBuf {
        self.images_dir().join("index.json")
    }

    pub fn lock_path(&self) -> PathBuf {
        self.images_dir().join("update.lock")
    }

    /// Path of the cached image file for an entry
    pub fn image_path(&self, item_id: &str) -> PathBuf {
        self.images_dir().join(format!("{}.{}", item_id, IMAGE_EXT))
    }

    /// Ensure the images directory exists with restrictive permissions
    pub fn ensure(&self) -> FavcacheResult<()> {
        let dir = self.images_dir();
        std::fs::create_dir_all(&dir).map_err(|e| FavcacheError::CacheDirCreate {
            path: dir.clone(),
            source: e,
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o700);
            std::fs::set_permissions(&dir, perms)
                .map_err(|e| FavcacheError::io("setting images dir permissions", e))?;
        }

        Ok(())
    }
}
