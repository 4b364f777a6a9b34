use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tower_lsp::{LspService, Server};
use tracing_subscriber::EnvFilter;

use webkul_lsp::Backend;
use webkul_lsp::commands;
use webkul_lsp::config::Config;
use webkul_lsp::host::{Host, InputRequest, NoticeLevel, TerminalHost};
use webkul_lsp::scaffold::{self, ScaffoldOutcome};
use webkul_lsp::templates;

/// Environment variable holding a `tracing` filter, e.g. `webkul_lsp=debug`.
const LOG_ENV: &str = "WEBKUL_LSP_LOG";

#[derive(Parser, Debug)]
#[command(name = "webkul_lsp", version, about, long_about = None)]
struct Cli {
    /// Log level used when WEBKUL_LSP_LOG is not set.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the language server over stdio (the default).
    Serve,
    /// Scaffold a module under <root>/packages/Webkul.
    NewModule {
        /// Module name; prompted for when omitted.
        name: Option<String>,
        /// Workspace root.
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
    /// Print the class template derived from a file's location.
    ClassTemplate {
        file: PathBuf,
        /// Overwrite the file instead of printing.
        #[arg(long)]
        write: bool,
    },
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("webkul_lsp={default_level}")));

    // stdout belongs to the LSP transport.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}

async fn serve() {
    let (service, socket) = LspService::new(Backend::new);
    Server::new(tokio::io::stdin(), tokio::io::stdout(), socket)
        .serve(service)
        .await;
}

/// Answers the scaffolder's prompt from the command line when a name was
/// given, otherwise from stdin.
struct PresetHost {
    name: Option<String>,
    terminal: TerminalHost,
}

#[tower_lsp::async_trait]
impl Host for PresetHost {
    async fn prompt(&self, request: InputRequest) -> Option<String> {
        match &self.name {
            Some(name) => Some(name.clone()),
            None => self.terminal.prompt(request).await,
        }
    }

    async fn notify(&self, level: NoticeLevel, message: String) {
        self.terminal.notify(level, message).await;
    }
}

async fn new_module(name: Option<String>, root: PathBuf) -> ExitCode {
    let config = Config::load(Some(&root));
    let host = PresetHost {
        name,
        terminal: TerminalHost,
    };

    match scaffold::create_module(&host, &[root], &config).await {
        ScaffoldOutcome::Created(_) => ExitCode::SUCCESS,
        ScaffoldOutcome::Cancelled => ExitCode::from(2),
        ScaffoldOutcome::NoWorkspace | ScaffoldOutcome::Failed(_) => ExitCode::FAILURE,
    }
}

async fn class_template(file: PathBuf, write: bool) -> ExitCode {
    if write {
        return match commands::generate_class_template(&TerminalHost, Some(&file)).await {
            Some(_) => ExitCode::SUCCESS,
            None => ExitCode::FAILURE,
        };
    }

    match templates::class_template_for_path(&file) {
        Ok(class) => {
            print!("{}", class.template);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            serve().await;
            ExitCode::SUCCESS
        }
        Command::NewModule { name, root } => new_module(name, root).await,
        Command::ClassTemplate { file, write } => class_template(file, write).await,
    }
}
