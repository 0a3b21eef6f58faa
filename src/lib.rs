pub mod config;
pub mod downloader;
pub mod error;
pub mod gmad;
pub mod steam;
pub mod storage;

mod types;

pub use config::Config;
pub use downloader::Downloader;
pub use error::{Error, Result};
pub use types::*;
