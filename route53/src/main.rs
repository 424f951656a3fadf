use std::io::Write;

use aws_recon_core::{
    AwsReconConfig,
    util::{init_tracing, verbosity_level},
};
use aws_recon_route53::{
    cli,
    connector::Route53Connector,
    dump::{DumpOptions, ProfileOutcome, dump_subdomains},
};
use tracing_subscriber::filter::LevelFilter;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let args = cli::get_args();
    init_tracing(verbosity_level(LevelFilter::INFO, args.verbose));

    let config = AwsReconConfig::try_load(&args.config)?;
    let connector = Route53Connector::new(config.clone());

    let report = dump_subdomains(&connector, &args.profiles, &DumpOptions::from(&config)).await?;

    for outcome in &report.outcomes {
        match outcome {
            ProfileOutcome::Enumerated {
                profile,
                account_id,
                zones,
                record_sets,
                new_names,
            } => tracing::debug!(
                "{} ({}): {} zones, {} record sets, {} new hostnames",
                profile,
                account_id,
                zones,
                record_sets,
                new_names
            ),
            ProfileOutcome::Skipped { profile, .. } => tracing::debug!("{}: skipped", profile),
        }
    }

    let mut stdout = std::io::stdout().lock();
    for subdomain in report.subdomains {
        writeln!(stdout, "{}", subdomain)?;
    }

    Ok(())
}
