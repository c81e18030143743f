//! Configuration schema for caur
//!
//! Configuration is stored at `~/.config/caur/config.toml`. Every field is
//! optional; missing sections fall back to the stock Arch tooling.

use crate::package::PackageName;
use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// AUR endpoint settings
    pub aur: AurConfig,

    /// Recipe review and build settings
    pub build: BuildConfig,

    /// Package removal settings
    pub remove: RemoveConfig,
}

/// AUR endpoint settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AurConfig {
    /// Base URL that hosts `<package>.git` repositories
    pub url: String,
}

impl Default for AurConfig {
    fn default() -> Self {
        Self {
            url: "https://aur.archlinux.org".to_string(),
        }
    }
}

impl AurConfig {
    /// Git URL of a package's recipe repository
    pub fn clone_url(&self, name: &PackageName) -> String {
        format!("{}/{}.git", self.url.trim_end_matches('/'), name)
    }
}

/// Recipe review and build settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Build tool run inside the package directory
    pub command: String,

    /// Arguments passed to the build tool
    pub args: Vec<String>,

    /// Program used to display the recipe for review
    pub pager: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            command: "makepkg".to_string(),
            args: vec!["-si".to_string()],
            pager: "less".to_string(),
        }
    }
}

/// Package removal settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoveConfig {
    /// Package manager invoked for removal
    pub package_manager: String,

    /// Arguments placed before the package name
    pub args: Vec<String>,

    /// Privilege helpers in order of preference; `su` is the implicit fallback
    pub helpers: Vec<String>,
}

impl Default for RemoveConfig {
    fn default() -> Self {
        Self {
            package_manager: "pacman".to_string(),
            args: vec!["-Rncs".to_string()],
            helpers: vec!["sudo".to_string(), "doas".to_string()],
        }
    }
}
