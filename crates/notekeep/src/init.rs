//! # Startup
//!
//! [`initialize`] resolves the data directory, loads configuration from it and
//! opens a [`FileStore`] there. Hosts call it once and keep the returned
//! [`NotekeepContext`] for the life of the process.
//!
//! ## Data Directory Resolution
//!
//! 1. An explicit `data_override` wins.
//! 2. Otherwise `NOTEKEEP_DATA`, if set and non-empty.
//! 3. Otherwise the OS data directory for the app (via the `directories` crate),
//!    e.g. `~/.local/share/notekeep` on Linux.
//!
//! The directory does not need to exist yet. It is created on the first write.

use crate::api::NotekeepApi;
use crate::config::NotekeepConfig;
use crate::error::{NotekeepError, Result};
use crate::store::fs::FileStore;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Environment variable overriding the default data directory.
pub const DATA_DIR_ENV: &str = "NOTEKEEP_DATA";

pub struct NotekeepContext {
    pub api: NotekeepApi<FileStore>,
    pub config: NotekeepConfig,
    pub data_dir: PathBuf,
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "notekeep", "notekeep")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            NotekeepError::Store("could not determine a data directory".to_string())
        })
}

/// Load `notekeep.toml` from `data_dir`, falling back to defaults.
///
/// A malformed config file is logged and ignored so that notes stay reachable.
pub fn load_config(data_dir: &Path) -> NotekeepConfig {
    Clapfig::builder()
        .app_name("notekeep")
        .file_name("notekeep.toml")
        .search_paths(vec![SearchPath::Path(data_dir.to_path_buf())])
        .search_mode(SearchMode::Merge)
        .load()
        .unwrap_or_else(|err| {
            warn!("ignoring unreadable config in {}: {}", data_dir.display(), err);
            NotekeepConfig::default()
        })
}

/// Open the store for this process.
///
/// # Examples
///
/// ```ignore
/// // OS default location, or NOTEKEEP_DATA when set
/// let ctx = initialize(None)?;
///
/// // Explicit location
/// let ctx = initialize(Some(PathBuf::from("/tmp/notes")))?;
/// logging::init_logging(&ctx.config.log_level(), &ctx.data_dir.join("logs"))?;
/// ```
pub fn initialize(data_override: Option<PathBuf>) -> Result<NotekeepContext> {
    let data_dir = resolve_data_dir(data_override)?;
    let config = load_config(&data_dir);

    let store = FileStore::new_fs(data_dir.clone())
        .with_pretty_json(config.pretty_json);
    info!("opened notekeep data at {}", data_dir.display());

    Ok(NotekeepContext {
        api: NotekeepApi::new(store),
        config,
        data_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn override_wins() {
        let temp = TempDir::new().unwrap();
        let dir = resolve_data_dir(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(dir, temp.path());
    }

    #[test]
    fn missing_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load_config(temp.path()), NotekeepConfig::default());
    }

    #[test]
    fn config_file_is_read_from_data_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("notekeep.toml"),
            "pretty_json = true\nlog_level = \"debug\"\n",
        )
        .unwrap();

        let config = load_config(temp.path());
        assert!(config.pretty_json);
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn initialize_opens_store_in_override_dir() {
        let temp = TempDir::new().unwrap();
        let mut ctx = initialize(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(ctx.data_dir, temp.path());

        let note = ctx.api.create("Hello", "world").unwrap();
        assert!(temp.path().join("notes_data.json").exists());

        let reopened = initialize(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(reopened.api.get(&note.id).unwrap(), Some(note));
    }

    #[test]
    fn pretty_json_setting_reaches_the_store() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("notekeep.toml"), "pretty_json = true\n").unwrap();

        let mut ctx = initialize(Some(temp.path().to_path_buf())).unwrap();
        ctx.api.create_folder("Work").unwrap();

        let raw = fs::read_to_string(temp.path().join("folders.json")).unwrap();
        assert!(raw.contains('\n'));
    }
}
