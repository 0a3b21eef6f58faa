use std::path::PathBuf;

use clap::{ArgAction, Parser};
use workshopdl::config::DEFAULT_API_BASE;
use workshopdl::Config;

#[derive(Parser)]
#[command(name = "workshopdl")]
#[command(about = "Downloads an addon from the workshop given an addon id or url", long_about = None)]
pub struct Cli {
    /// Extract downloaded addon with gmad
    #[arg(
        short = 'g',
        value_name = "BOOL",
        default_value_t = true,
        default_missing_value = "true",
        num_args = 0..=1,
        require_equals = true,
        action = ArgAction::Set
    )]
    extract: bool,

    /// Directory the downloaded addons are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Base URL of the Steam Web API
    #[arg(long, env = "WORKSHOPDL_API_URL", default_value = DEFAULT_API_BASE, hide_default_value = true)]
    api_url: String,

    /// Workshop addon ids or workshop page urls
    #[arg(required = true, value_name = "ADDON_ID_OR_URL")]
    pub inputs: Vec<String>,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config::default()
            .with_extract(self.extract)
            .with_output_dir(&self.output_dir)
            .with_api_base(&self.api_url)
    }
}
