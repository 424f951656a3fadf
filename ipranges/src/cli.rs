use std::path::PathBuf;

use aws_recon_core::config::DEFAULT_CONFIG_PATH;
use clap::{Parser, ValueHint};

/// Prints the AWS region whose published IP ranges contain the given address,
/// or `Unknown`.
#[derive(Parser, Debug)]
#[command(name = "find-aws-region", version, about, long_about)]
pub struct Args {
    /// IPv4 or IPv6 address to look up
    pub address: String,

    /// Read the ranges from a local copy of ip-ranges.json instead of fetching it
    #[arg(short, long, value_hint = ValueHint::FilePath, conflicts_with = "url")]
    pub file: Option<PathBuf>,

    /// Fetch the ranges from this url instead of the configured one
    #[arg(long, value_hint = ValueHint::Url)]
    pub url: Option<String>,

    /// Config file, defaults apply when it does not exist
    #[arg(short, long, env = "AWS_RECON_CONFIG", default_value = DEFAULT_CONFIG_PATH, value_hint = ValueHint::FilePath)]
    pub config: PathBuf,

    /// Raise the log level, repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn get_args() -> Args {
    Args::parse()
}
