//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory when
//! it exists, then applies `BOOKSHELF_LIBRARY_PATH` and `BOOKSHELF_LOG_LEVEL`
//! env overrides. A missing file yields the built-in defaults.

use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::AppError;

/// Library file and session behaviour.
#[derive(Debug, Clone)]
pub struct LibraryConfig {
    /// Backing JSON file (already expanded, no `~`).
    pub path: PathBuf,
    /// Start each session from the five seed books.
    pub seed: bool,
    /// Write to `path` on exit. When `false` the session is kept in memory only.
    pub persist: bool,
    /// Abort the session on malformed input instead of re-prompting.
    pub strict_input: bool,
}

/// Fully-resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub library: LibraryConfig,
    pub log_level: String,
    /// Append logs here instead of stderr.
    pub log_file: Option<PathBuf>,
}

/// Raw TOML shape — `serde` target before resolution.
#[derive(Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    library: RawLibrary,
    #[serde(default)]
    logging: RawLogging,
}

#[derive(Deserialize)]
struct RawLibrary {
    #[serde(default = "default_library_path")]
    path: String,
    #[serde(default = "default_true")]
    seed: bool,
    #[serde(default = "default_true")]
    persist: bool,
    /// Defaults to `false`: bad input is reported and re-prompted.
    #[serde(default = "default_false")]
    strict_input: bool,
}

impl Default for RawLibrary {
    fn default() -> Self {
        Self {
            path: default_library_path(),
            seed: true,
            persist: true,
            strict_input: false,
        }
    }
}

#[derive(Deserialize)]
struct RawLogging {
    #[serde(default = "default_log_level")]
    level: String,
    #[serde(default)]
    file: Option<String>,
}

impl Default for RawLogging {
    fn default() -> Self {
        Self { level: default_log_level(), file: None }
    }
}

fn default_library_path() -> String { "library.json".to_string() }
fn default_log_level() -> String { "warn".to_string() }

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

/// Load config from `config/default.toml`, then apply env-var overrides.
pub fn load() -> Result<Config, AppError> {
    let library_path_override = env::var("BOOKSHELF_LIBRARY_PATH").ok();
    let log_level_override = env::var("BOOKSHELF_LOG_LEVEL").ok();
    load_from(
        Path::new("config/default.toml"),
        library_path_override.as_deref(),
        log_level_override.as_deref(),
    )
}

/// Internal loader — accepts an explicit path and optional overrides.
/// Tests pass overrides directly instead of mutating env vars.
pub fn load_from(
    path: &Path,
    library_path_override: Option<&str>,
    log_level_override: Option<&str>,
) -> Result<Config, AppError> {
    let parsed: RawConfig = match fs::read_to_string(path) {
        Ok(raw) => toml::from_str(&raw)
            .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?,
        Err(e) if e.kind() == ErrorKind::NotFound => RawConfig::default(),
        Err(e) => {
            return Err(AppError::Config(format!("cannot read {}: {e}", path.display())));
        }
    };

    let lib = parsed.library;
    let library_path = expand_home(library_path_override.unwrap_or(&lib.path));
    let log_level = log_level_override.unwrap_or(&parsed.logging.level).to_string();

    Ok(Config {
        library: LibraryConfig {
            path: library_path,
            seed: lib.seed,
            persist: lib.persist,
            strict_input: lib.strict_input,
        },
        log_level,
        log_file: parsed.logging.file.as_deref().map(expand_home),
    })
}

/// Expand a leading `~` to the user's home directory.
/// Absolute or relative paths without `~` are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

// ── test helpers ──────────────────────────────────────────────────────────────

#[cfg(test)]
impl Config {
    /// Seeded, lenient session backed by `path`.
    pub fn test_default(path: &Path) -> Self {
        Self {
            library: LibraryConfig {
                path: path.to_path_buf(),
                seed: true,
                persist: true,
                strict_input: false,
            },
            log_level: "warn".into(),
            log_file: None,
        }
    }
}
