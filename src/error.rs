use std::process::ExitStatus;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("non 200 status code returned: {0}")]
    NonOkStatus(StatusCode),
    #[error("malformed file details response: {0}")]
    Deserialize(#[from] serde_json::Error),
    #[error("invalid compressed stream: {0}")]
    Format(std::io::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{name} executable not found, define the environment variable {env_var} or add {name} to your PATH")]
    ExecutableNotFound { name: String, env_var: String },
    #[error("gmad exited with {0}")]
    ExtractFailed(ExitStatus),
    #[error("workshop item {id} has no download (result code {result})")]
    MissingDownload { id: String, result: i32 },
}

pub type Result<T> = std::result::Result<T, Error>;
