//! webkul_lsp: a language server with Bagisto/Webkul snippets.
//!
//! Completion triggers (typed as a word in a PHP file):
//! - `wkre`, `wkmo`, `wkco`, `wkhe`, `wkcn`: `use` statements for classes in
//!   package directories ending with Repositories, Models, Controllers,
//!   Helpers or Contracts
//! - `wkcl`: a class skeleton derived from the file's location
//! - `wkpr` inside a constructor: promoted parameters for imported classes
//! - `wkev`: listener snippets for every event fired in the packages
//!
//! Commands: `extension.generateClassTemplate` and `extension.createModule`.
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;
use tower_lsp::Client;

pub mod commands;
pub mod completion;
pub mod config;
pub mod error;
pub mod host;
pub mod scaffold;
pub mod scanner;
mod server;
pub mod templates;
pub mod types;
pub mod util;
pub mod walker;

pub use config::Config;

/// A document the client has opened.
#[derive(Debug, Clone)]
pub(crate) struct OpenDocument {
    pub text: String,
    /// Language id `php` or a `.php` URI.  Completion only runs for these.
    pub is_php: bool,
}

pub struct Backend {
    name: String,
    version: String,
    pub(crate) open_files: Arc<RwLock<HashMap<String, OpenDocument>>>,
    pub(crate) workspace_folders: Arc<RwLock<Vec<PathBuf>>>,
    pub(crate) config: Arc<RwLock<Config>>,
    client: Option<Client>,
}

impl Backend {
    pub fn new(client: Client) -> Self {
        Self {
            client: Some(client),
            ..Self::new_test()
        }
    }

    /// A backend without a client, for tests.  Notifications and log
    /// messages are dropped.
    pub fn new_test() -> Self {
        Self {
            name: "WebkulLSP".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            open_files: Arc::new(RwLock::new(HashMap::new())),
            workspace_folders: Arc::new(RwLock::new(Vec::new())),
            config: Arc::new(RwLock::new(Config::default())),
            client: None,
        }
    }

    /// A test backend that already knows its workspace folders.
    pub fn new_test_with_workspace(folders: Vec<PathBuf>, config: Config) -> Self {
        let backend = Self::new_test();
        *backend.workspace_folders.write() = folders;
        *backend.config.write() = config;
        backend
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Current workspace folders, in the order the client sent them.
    pub fn workspace_folders(&self) -> Vec<PathBuf> {
        self.workspace_folders.read().clone()
    }

    /// Public helper for tests: the stored text of an open document.
    pub fn document_text(&self, uri: &str) -> Option<String> {
        self.open_files.read().get(uri).map(|d| d.text.clone())
    }

    pub(crate) fn client(&self) -> Option<&Client> {
        self.client.as_ref()
    }

    pub(crate) async fn log(&self, typ: tower_lsp::lsp_types::MessageType, message: String) {
        if let Some(client) = &self.client {
            client.log_message(typ, message).await;
        }
    }
}
