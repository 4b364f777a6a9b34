/// `workspace/executeCommand` handling.
///
/// Two commands are registered:
/// - `extension.generateClassTemplate [uri]`: overwrite the given PHP file
///   with a class skeleton derived from its path
/// - `extension.createModule [name]`: scaffold a module under the first
///   workspace folder
///
/// Command outcomes reach the user only through [`Host::notify`]; the
/// request itself always succeeds.
use std::path::Path;

use serde_json::Value;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;

use crate::Backend;
use crate::error::TemplateError;
use crate::host::{Host, LspHost, NoticeLevel};
use crate::scaffold::{self, ScaffoldOutcome};
use crate::templates;
use crate::types::ClassTemplate;

pub const GENERATE_CLASS_TEMPLATE: &str = "extension.generateClassTemplate";
pub const CREATE_MODULE: &str = "extension.createModule";

/// Every command advertised in `executeCommandProvider`.
pub const COMMANDS: &[&str] = &[GENERATE_CLASS_TEMPLATE, CREATE_MODULE];

/// Render the class template for `file_path` and write it over the file.
pub fn write_class_template(file_path: &Path) -> std::result::Result<ClassTemplate, TemplateError> {
    if file_path.as_os_str().is_empty() {
        return Err(TemplateError::EmptyPath);
    }
    if !file_path.to_string_lossy().ends_with(".php") {
        return Err(TemplateError::NotPhpFile(file_path.to_path_buf()));
    }

    let class = templates::class_template_for_path(file_path)?;
    std::fs::write(file_path, &class.template)?;
    Ok(class)
}

/// The `extension.generateClassTemplate` flow.  `file_path` is the file of
/// the active editor, if there is one.
pub async fn generate_class_template(
    host: &dyn Host,
    file_path: Option<&Path>,
) -> Option<ClassTemplate> {
    let Some(file_path) = file_path else {
        host.notify(NoticeLevel::Error, "No active editor found!".to_string())
            .await;
        return None;
    };

    match write_class_template(file_path) {
        Ok(class) => {
            host.notify(
                NoticeLevel::Info,
                "PHP class template generated successfully!".to_string(),
            )
            .await;
            Some(class)
        }
        Err(e) => {
            host.notify(
                NoticeLevel::Error,
                format!("Failed to generate class template: {}", e),
            )
            .await;
            None
        }
    }
}

/// First command argument as a file path, if it is a `file://` URI or a
/// plain path string.
fn path_argument(arguments: &[Value]) -> Option<std::path::PathBuf> {
    let raw = arguments.first()?.as_str()?;
    match Url::parse(raw) {
        Ok(url) => url.to_file_path().ok(),
        Err(_) => Some(std::path::PathBuf::from(raw)),
    }
}

impl Backend {
    pub(crate) async fn handle_execute_command(
        &self,
        params: ExecuteCommandParams,
    ) -> Result<Option<Value>> {
        match params.command.as_str() {
            GENERATE_CLASS_TEMPLATE => {
                let host = LspHost::new(self.client(), &[]);
                let file_path = path_argument(&params.arguments);
                generate_class_template(&host, file_path.as_deref()).await;
            }
            CREATE_MODULE => {
                let host = LspHost::new(self.client(), &params.arguments);
                let folders = self.workspace_folders();
                let config = self.config.read().clone();
                if let ScaffoldOutcome::Created(layout) =
                    scaffold::create_module(&host, &folders, &config).await
                {
                    self.log(
                        MessageType::INFO,
                        format!("Created module at {}", layout.root.display()),
                    )
                    .await;
                }
            }
            other => {
                tracing::warn!(command = other, "unknown command");
            }
        }

        Ok(None)
    }
}
