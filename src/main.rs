use std::{fs::File, io};

use anyhow::Context as _;
use clap::Parser as _;
use negfin::{error::OutputError, ItemsetSink, ItemsetWriter, TransactionFile};
use tracing_subscriber::{filter as tracing_filter, layer::SubscriberExt as _};

mod cli;

// Configure logger
fn set_tracing_subscriber(log_level: tracing::Level) -> anyhow::Result<()> {
    let targets_filter = tracing_filter::Targets::new().with_targets([("negfin", log_level)]);
    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_line_number(true)
        .with_writer(io::stderr);
    let tracing_subscriber = tracing_subscriber::registry()
        .with(targets_filter)
        .with(stderr_layer);
    tracing::subscriber::set_global_default(tracing_subscriber)
        .context("setting default subscriber failed")
}

fn mine_into<K: ItemsetSink>(config: &cli::Config, sink: K) -> anyhow::Result<()> {
    let source = TransactionFile::new(&config.input);
    let stats = negfin::run(&source, config.min_support, config.options, sink)?;
    tracing::info!(
        "{} transactions, minimum support {}, {} frequent itemsets in {} ms",
        stats.num_transactions,
        stats.min_support,
        stats.itemsets,
        stats.elapsed.as_millis()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = cli.get_config()?;
    set_tracing_subscriber(config.log_level)?;
    match &config.output {
        Some(path) => {
            let file = File::create(path)
                .map_err(OutputError::Io)
                .with_context(|| format!("failed to create `{}`", path.display()))?;
            mine_into(&config, ItemsetWriter::new(file))
        }
        None => mine_into(&config, ItemsetWriter::new(io::stdout().lock())),
    }
}
