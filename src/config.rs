/// Server configuration.
///
/// Settings come from built-in defaults, then the user's config file
/// (`<config dir>/webkul-lsp/config.toml`), then `.webkul-lsp.toml` in the
/// first workspace folder.  Later sources override earlier ones key by key;
/// importer keywords are merged rather than replaced.
///
/// ```toml
/// [workspace]
/// packages = "packages/Webkul"
///
/// [completion]
/// keywords = { li = "Listeners" }
/// events = true
/// ```
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use etcetera::BaseStrategy;
use serde::Deserialize;

use crate::error::ConfigError;

/// File name looked up in the workspace root.
pub const WORKSPACE_CONFIG_FILE: &str = ".webkul-lsp.toml";

/// Default package root, relative to a workspace folder.
pub const DEFAULT_PACKAGES_DIR: &str = "packages/Webkul";

/// Two-letter importer codes and the directory-name suffix they select.
const DEFAULT_KEYWORDS: &[(&str, &str)] = &[
    ("re", "Repositories"),
    ("mo", "Models"),
    ("co", "Controllers"),
    ("he", "Helpers"),
    ("cn", "Contracts"),
];

/// Codes taken by the other `wk` triggers (`wkcl`, `wkpr`, `wkev`).  They
/// cannot be configured as importer codes.
pub const RESERVED_CODES: &[&str] = &["cl", "pr", "ev"];

/// Effective configuration after all sources are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Package root scanned for completions and used by the scaffolder.
    pub packages_dir: PathBuf,
    /// Importer keyword → directory suffix.
    pub keywords: BTreeMap<String, String>,
    /// Whether the `wkev` event assembler runs.
    pub events: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            packages_dir: PathBuf::from(DEFAULT_PACKAGES_DIR),
            keywords: DEFAULT_KEYWORDS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            events: true,
        }
    }
}

/// On-disk shape of a config file.  Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub workspace: WorkspaceSection,
    pub completion: CompletionSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkspaceSection {
    pub packages: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompletionSection {
    pub keywords: BTreeMap<String, String>,
    pub events: Option<bool>,
}

impl Config {
    /// Overlay the keys present in `file` onto `self`.
    pub fn merge(&mut self, file: ConfigFile) {
        if let Some(packages) = file.workspace.packages {
            self.packages_dir = PathBuf::from(packages);
        }
        for (code, dir) in file.completion.keywords {
            let code = code.to_lowercase();
            if RESERVED_CODES.contains(&code.as_str()) {
                tracing::warn!(code = %code, "importer code is reserved for another trigger; ignored");
                continue;
            }
            self.keywords.insert(code, dir);
        }
        if let Some(events) = file.completion.events {
            self.events = events;
        }
    }

    /// Defaults, then the user config, then the workspace config.
    ///
    /// Missing files are normal.  Files that exist but cannot be read or
    /// parsed are logged and skipped.
    pub fn load(workspace_root: Option<&Path>) -> Self {
        let mut config = Config::default();

        let mut sources = Vec::new();
        if let Some(user) = user_config_path() {
            sources.push(user);
        }
        if let Some(root) = workspace_root {
            sources.push(root.join(WORKSPACE_CONFIG_FILE));
        }

        for path in sources {
            if !path.is_file() {
                continue;
            }
            match read_config_file(&path) {
                Ok(file) => {
                    tracing::debug!(path = %path.display(), "loaded config");
                    config.merge(file);
                }
                Err(e) => tracing::warn!("{e}; using remaining settings"),
            }
        }

        config
    }

    /// The package root inside a given workspace folder.
    pub fn packages_root(&self, workspace_folder: &Path) -> PathBuf {
        workspace_folder.join(&self.packages_dir)
    }

    /// Look up the directory suffix for a two-letter importer code.
    /// Reserved codes never resolve, even if inserted directly.
    pub fn keyword_directory(&self, code: &str) -> Option<&str> {
        let code = code.to_lowercase();
        if RESERVED_CODES.contains(&code.as_str()) {
            return None;
        }
        self.keywords.get(&code).map(String::as_str)
    }
}

/// Parse a single config file.
pub fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// `<config dir>/webkul-lsp/config.toml`, if a home directory is known.
pub fn user_config_path() -> Option<PathBuf> {
    let strategy = etcetera::choose_base_strategy().ok()?;
    Some(strategy.config_dir().join("webkul-lsp").join("config.toml"))
}

// ─── Tests ──────────────────────────────────────────────────────────────────
