use std::path::PathBuf;

pub const DEFAULT_API_BASE: &str = "https://api.steampowered.com";

/// Settings for a single run, built once by the binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Hand each downloaded addon to gmad.
    pub extract: bool,
    pub output_dir: PathBuf,
    pub api_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extract: true,
            output_dir: PathBuf::from("."),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl Config {
    pub fn with_extract(mut self, extract: bool) -> Self {
        self.extract = extract;
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }
}
