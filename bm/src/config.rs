//! Configuration for dirbookmarks
//!
//! Two layers: [`Config`] is the optional YAML file the binary reads, and
//! [`StoreConfig`] is the environment snapshot (home directory, working
//! directory, separator) handed to the store once at construction.

use eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Path flavor used by the codecs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Windows emulation on Windows targets, Linux everywhere else
    #[default]
    Auto,
    /// `/` separator, no slash conversion
    Linux,
    /// `\` separator, stored paths use `/`
    Windows,
}

impl Platform {
    /// Whether the Windows-emulation codec is active
    pub fn is_windows(self) -> bool {
        match self {
            Platform::Auto => cfg!(windows),
            Platform::Linux => false,
            Platform::Windows => true,
        }
    }
}

/// Settings loaded from `config.yml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Path to the bookmark store file (default: ~/.directory-bookmarks.csv)
    pub store_path: Option<PathBuf>,

    /// Path flavor
    pub platform: Platform,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    pub log_level: Option<String>,
}

impl Config {
    /// Load config from file, or use defaults
    ///
    /// An explicit path must load; the per-user config falls back to
    /// defaults when it is broken.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        if let Some(user_config) = user_config_path()
            && user_config.exists()
        {
            match Self::load_from_file(&user_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {:#}", user_config.display(), e);
                }
            }
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Read only the log level, before logging is initialized
    ///
    /// Errors are swallowed here; the full [`Config::load`] reports them once
    /// logging is up.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let path = match config_path {
            Some(path) => path.clone(),
            None => user_config_path()?,
        };
        Self::load_from_file(&path).ok()?.log_level
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        // An empty file is a valid config with every field defaulted
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::debug!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Location of the store file, with a leading `~` expanded against `home`
    pub fn store_path(&self, home: &Path) -> PathBuf {
        match &self.store_path {
            Some(path) => expand_home(path, home),
            None => home.join(crate::DEFAULT_STORE_NAME),
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(crate::APP_NAME).join("config.yml"))
}

fn expand_home(path: &Path, home: &Path) -> PathBuf {
    match path.strip_prefix(crate::HOME_MARK) {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

/// Environment the codecs and the store work against
///
/// Built once per process (or per test) so no component reads process-wide
/// state after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Home directory, abbreviated to `~` in stored paths; empty disables it
    pub home_dir: String,
    /// Working directory substituted for the `.` key
    pub current_dir: String,
    /// Active path separator (`/` or `\`)
    pub separator: char,
    /// Windows-emulation mode: `\` locally, `/` in the file
    pub windows: bool,
}

impl StoreConfig {
    /// Build a config from explicit values
    pub fn new(home_dir: impl Into<String>, current_dir: impl Into<String>, platform: Platform) -> Self {
        let windows = platform.is_windows();
        Self {
            home_dir: home_dir.into(),
            current_dir: current_dir.into(),
            separator: if windows { '\\' } else { '/' },
            windows,
        }
    }

    /// Capture the home and working directories of this process
    pub fn detect(platform: Platform) -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| eyre!("Unable to determine the home directory"))?;
        let cwd = std::env::current_dir().context("Unable to determine the working directory")?;
        let config = Self::new(home.to_string_lossy(), cwd.to_string_lossy(), platform);
        log::debug!("Detected store config: {:?}", config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.store_path.is_none());
        assert_eq!(config.platform, Platform::Auto);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
store-path: /var/lib/bookmarks.csv
platform: windows
log-level: debug
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.store_path, Some(PathBuf::from("/var/lib/bookmarks.csv")));
        assert_eq!(config.platform, Platform::Windows);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml = "platform: linux\n";

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.platform, Platform::Linux);
        assert!(config.store_path.is_none());
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_load_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "log-level: trace\nplatform: linux\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.platform, Platform::Linux);
        assert_eq!(Config::load_log_level(Some(&path)).as_deref(), Some("trace"));
    }

    #[test]
    fn test_load_empty_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.platform, Platform::Auto);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.yml");

        assert!(Config::load(Some(&path)).is_err());
        assert!(Config::load_log_level(Some(&path)).is_none());
    }

    #[test]
    fn test_store_path_default_and_expansion() {
        let home = Path::new("/home/u");

        let config = Config::default();
        assert_eq!(config.store_path(home), PathBuf::from("/home/u/.directory-bookmarks.csv"));

        let config = Config {
            store_path: Some(PathBuf::from("~/data/marks.csv")),
            ..Default::default()
        };
        assert_eq!(config.store_path(home), PathBuf::from("/home/u/data/marks.csv"));

        let config = Config {
            store_path: Some(PathBuf::from("/srv/marks.csv")),
            ..Default::default()
        };
        assert_eq!(config.store_path(home), PathBuf::from("/srv/marks.csv"));
    }

    #[test]
    fn test_store_config_platforms() {
        let linux = StoreConfig::new("/home/u", "/tmp", Platform::Linux);
        assert_eq!(linux.separator, '/');
        assert!(!linux.windows);

        let windows = StoreConfig::new("C:\\Users\\u", "C:\\tmp", Platform::Windows);
        assert_eq!(windows.separator, '\\');
        assert!(windows.windows);

        assert_eq!(Platform::Auto.is_windows(), cfg!(windows));
    }
}
