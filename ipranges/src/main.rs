use aws_recon_core::{
    AwsReconConfig,
    util::{init_tracing, verbosity_level},
};
use aws_recon_ipranges::{
    cli,
    fetch::{fetch_document, http_client, load_document},
    lookup::{UNKNOWN_REGION, find_prefix, parse_address},
};
use tracing_subscriber::filter::LevelFilter;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let args = cli::get_args();
    init_tracing(verbosity_level(LevelFilter::WARN, args.verbose));

    let config = AwsReconConfig::try_load(&args.config)?;
    let addr = parse_address(&args.address)?;

    let document = match args.file {
        Some(ref path) => load_document(path)?,
        None => {
            let url = args.url.as_deref().unwrap_or(&config.ip_ranges_url);
            fetch_document(&http_client(&config)?, url).await?
        }
    };

    let entries = document.entries()?;
    tracing::debug!(
        "{} prefixes, syncToken {}, created {}",
        entries.len(),
        document.sync_token,
        document.create_date
    );

    match find_prefix(&entries, addr) {
        Some(entry) => {
            tracing::info!(
                "{} is in {} ({}, {})",
                addr,
                entry.network,
                entry.service,
                entry.network_border_group
            );
            println!("{}", entry.region);
        }
        None => println!("{}", UNKNOWN_REGION),
    }

    Ok(())
}
