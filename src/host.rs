/// The editor-facing capabilities the commands need.
///
/// Completion and command registration are handled by the LSP server
/// itself; what remains host specific is asking the user for text and
/// showing a notification.  [`Host`] captures exactly that so the command
/// logic runs the same under an LSP client, on the terminal, or in tests.
use std::collections::VecDeque;

use parking_lot::Mutex;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tower_lsp::Client;
use tower_lsp::lsp_types::MessageType;

/// A request for one line of text from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRequest {
    pub prompt: String,
    pub placeholder: Option<String>,
}

impl InputRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            placeholder: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[tower_lsp::async_trait]
pub trait Host: Send + Sync {
    /// Ask for a line of input.  `None` means the user cancelled.
    async fn prompt(&self, request: InputRequest) -> Option<String>;

    /// Show a message to the user.
    async fn notify(&self, level: NoticeLevel, message: String);
}

/// Host backed by an LSP client.
///
/// LSP has no input box, so prompt answers are the `executeCommand`
/// arguments, consumed in order.  The client-side extension collects them
/// with its own UI before sending the command; a missing or non-string
/// argument is treated as a cancelled prompt.
pub struct LspHost<'a> {
    client: Option<&'a Client>,
    answers: Mutex<VecDeque<String>>,
}

impl<'a> LspHost<'a> {
    pub fn new(client: Option<&'a Client>, arguments: &[serde_json::Value]) -> Self {
        let answers = arguments
            .iter()
            .map(|v| v.as_str().map(str::to_string).unwrap_or_default())
            .collect();
        Self {
            client,
            answers: Mutex::new(answers),
        }
    }
}

#[tower_lsp::async_trait]
impl Host for LspHost<'_> {
    async fn prompt(&self, request: InputRequest) -> Option<String> {
        let answer = self.answers.lock().pop_front();
        tracing::debug!(prompt = %request.prompt, answered = answer.is_some(), "prompt");
        answer.filter(|a| !a.is_empty())
    }

    async fn notify(&self, level: NoticeLevel, message: String) {
        match level {
            NoticeLevel::Info => tracing::info!("{message}"),
            NoticeLevel::Error => tracing::error!("{message}"),
        }
        if let Some(client) = self.client {
            let typ = match level {
                NoticeLevel::Info => MessageType::INFO,
                NoticeLevel::Error => MessageType::ERROR,
            };
            client.show_message(typ, message).await;
        }
    }
}

/// Host for the command line: prompts on stderr, reads stdin.
#[derive(Debug, Default)]
pub struct TerminalHost;

#[tower_lsp::async_trait]
impl Host for TerminalHost {
    async fn prompt(&self, request: InputRequest) -> Option<String> {
        let mut stderr = tokio::io::stderr();
        let text = match &request.placeholder {
            Some(placeholder) => format!("{} ({}): ", request.prompt, placeholder),
            None => format!("{}: ", request.prompt),
        };
        stderr.write_all(text.as_bytes()).await.ok()?;
        stderr.flush().await.ok()?;

        let mut line = String::new();
        let read = BufReader::new(tokio::io::stdin())
            .read_line(&mut line)
            .await
            .ok()?;
        if read == 0 {
            return None;
        }

        let line = line.trim_end_matches(['\r', '\n']).to_string();
        if line.is_empty() { None } else { Some(line) }
    }

    async fn notify(&self, level: NoticeLevel, message: String) {
        match level {
            NoticeLevel::Info => println!("{message}"),
            NoticeLevel::Error => eprintln!("{message}"),
        }
    }
}
