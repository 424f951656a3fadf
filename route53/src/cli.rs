use std::path::PathBuf;

use aws_recon_core::config::DEFAULT_CONFIG_PATH;
use clap::{Parser, ValueHint};

/// Dumps the hostnames of every Route53 hosted zone reachable from the given
/// AWS named profiles, one per line.
///
/// Each profile needs read-only access to Route53.
#[derive(Parser, Debug)]
#[command(name = "route53-subdomain-dump", version, about, long_about)]
pub struct Args {
    /// AWS named profiles to enumerate, e.g. `prod staging`
    #[arg(required = true, num_args = 1..)]
    pub profiles: Vec<String>,

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
