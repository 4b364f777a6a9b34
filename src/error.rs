//! Error types for the fallible operations of the server.
//!
//! Scanning and completion never fail (they return empty results instead);
//! only template generation, scaffolding and configuration loading surface
//! errors, and only the command layer turns them into user notifications.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Invalid file path provided")]
    EmptyPath,

    #[error("The current file must be a PHP file!")]
    NotPhpFile(PathBuf),

    #[error("\"packages\" directory not found in the file path")]
    NoPackagesDirectory(PathBuf),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("failed to create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
