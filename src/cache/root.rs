//! Cache root directory and per-package paths

use crate::error::{CaurError, CaurResult};
use crate::package::PackageName;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory name used under `~/.cache`
const CACHE_DIR_NAME: &str = "caur";

/// The directory holding cloned recipe checkouts
///
/// Paths are always derived fresh from the root, so nothing has to be
/// reset between operations on different packages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheRoot {
    path: PathBuf,
}

impl CacheRoot {
    /// Cache root for the current user (`$HOME/.cache/caur`)
    pub fn detect() -> CaurResult<Self> {
        let home = dirs::home_dir().ok_or(CaurError::HomeNotFound)?;
        Ok(Self::from_home(&home))
    }

    /// Cache root below an explicit home directory
    pub fn from_home(home: &Path) -> Self {
        Self::with_path(home.join(".cache").join(CACHE_DIR_NAME))
    }

    /// Cache root at an arbitrary location
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Working directory of a package
    pub fn package_dir(&self, name: &PackageName) -> PathBuf {
        self.path.join(name.as_str())
    }

    /// Whether a package has a cache entry
    pub fn contains(&self, name: &PackageName) -> bool {
        self.package_dir(name).exists()
    }

    /// Create the cache root if it does not exist yet
    pub fn ensure(&self) -> CaurResult<()> {
        if self.path.is_dir() {
            return Ok(());
        }

        debug!("Creating cache root {}", self.path.display());
        fs::create_dir_all(&self.path)
            .map_err(|e| CaurError::io(format!("creating directory {}", self.path.display()), e))?;
        restrict_permissions(&self.path)
    }

    /// Create the working directory for a package (mode 0700)
    pub fn create_package_dir(&self, name: &PackageName) -> CaurResult<PathBuf> {
        let dir = self.package_dir(name);
        fs::create_dir(&dir)
            .map_err(|e| CaurError::io(format!("creating directory {}", dir.display()), e))?;
        restrict_permissions(&dir)?;
        Ok(dir)
    }

    /// Remove a package's cache entry
    ///
    /// Fails with [`CaurError::TargetNotFound`] and leaves the cache
    /// untouched when the entry does not exist.
    pub fn remove_package(&self, name: &PackageName) -> CaurResult<()> {
        let dir = self.package_dir(name);
        let metadata = match fs::symlink_metadata(&dir) {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CaurError::TargetNotFound(name.to_string()));
            }
            Err(e) => {
                return Err(CaurError::io(format!("inspecting {}", dir.display()), e));
            }
        };

        debug!("Removing {}", dir.display());
        remove_entry(&dir, metadata.is_dir())
    }

    /// Remove every entry under the cache root, keeping the root itself
    ///
    /// Returns the number of entries removed. A missing root counts as empty.
    pub fn clear_all(&self) -> CaurResult<usize> {
        let entries = match fs::read_dir(&self.path) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => {
                return Err(CaurError::io(
                    format!("reading directory {}", self.path.display()),
                    e,
                ));
            }
        };

        let mut removed = 0;
        for entry in entries {
            let entry = entry.map_err(|e| {
                CaurError::io(format!("reading directory {}", self.path.display()), e)
            })?;
            let is_dir = entry
                .file_type()
                .map(|t| t.is_dir())
                .map_err(|e| CaurError::io(format!("inspecting {}", entry.path().display()), e))?;

            debug!("Removing {}", entry.path().display());
            remove_entry(&entry.path(), is_dir)?;
            removed += 1;
        }

        Ok(removed)
    }
}

fn remove_entry(path: &Path, is_dir: bool) -> CaurResult<()> {
    let result = if is_dir {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    result.map_err(|e| CaurError::io(format!("removing {}", path.display()), e))
}

fn restrict_permissions(path: &Path) -> CaurResult<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = fs::Permissions::from_mode(0o700);
        fs::set_permissions(path, perms)
            .map_err(|e| CaurError::io(format!("setting permissions on {}", path.display()), e))?;
    }
    #[cfg(not(unix))]
    let _ = path;

    Ok(())
}
