//! `fxscan`: walk a range of fxhash token IDs and export what can be
//! recovered about each one to CSV.

mod cli;
mod error;
mod export;

use clap::Parser;
use exn::ResultExt;
use futures::StreamExt;
use fxscan_config::Config;
use fxscan_resolve::Resolver;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::error::{ErrorKind, Result};
use crate::export::Exporter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter())))
        .with_writer(std::io::stderr)
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:?}");
            ExitCode::FAILURE
        },
    }
}

async fn run(args: Args) -> Result<()> {
    let ids = args.ids()?;
    let mut config = Config::load(args.config.as_deref()).or_raise(|| ErrorKind::Config)?;
    if let Some(concurrency) = args.concurrency {
        config.scan.concurrency = concurrency;
        config.validate().or_raise(|| ErrorKind::Config)?;
    }
    let resolver = Resolver::from_config(&config).or_raise(|| ErrorKind::Client)?;
    let mut exporter = Exporter::create(&args.output)?;
    tracing::info!(
        start = args.start,
        end = args.end,
        output = %args.output.display(),
        concurrency = config.scan.concurrency,
        "Resolving artworks"
    );

    let mut records = std::pin::pin!(resolver.resolve_range(ids, config.scan.concurrency));
    while let Some(record) = records.next().await {
        exporter.write(&resolver.page_url(record.id), &record)?;
    }

    let (working, not_working) = exporter.counts();
    tracing::info!(working, not_working, output = %args.output.display(), "Export complete");
    Ok(())
}
