use clap::Parser;

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_LOG_FILE};

#[derive(Debug, Parser)]
#[command(name = "deydem-admin", version, about = "Terminal dashboard for driver account administration")]
pub struct CliArgs {
    /// Override the backend base URL
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Override the log file path
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    pub log_file: String,
}
