use std::path::PathBuf;

use clap::Parser;
use negfin::{MinSupport, MiningOptions};

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Transaction file, one transaction of whitespace-separated item ids per line
    pub input: PathBuf,
    /// Minimum support: a fraction in (0, 1] of the transactions, or an absolute count > 1
    pub min_support: String,
    /// Write frequent itemsets to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Do not report itemsets with more than this many items
    #[arg(long)]
    pub max_len: Option<usize>,
    /// Log level, defaults to [`tracing::Level::INFO`]
    #[arg(default_value_t = tracing::Level::INFO, long)]
    pub log_level: tracing::Level,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub input: PathBuf,
    pub min_support: MinSupport,
    pub options: MiningOptions,
    pub output: Option<PathBuf>,
    pub log_level: tracing::Level,
}

impl Cli {
    pub fn get_config(self) -> anyhow::Result<Config> {
        let min_support: MinSupport = self.min_support.parse()?;
        let options = MiningOptions {
            max_len: self.max_len,
        }
        .validate()?;
        Ok(Config {
            input: self.input,
            min_support,
            options,
            output: self.output,
            log_level: self.log_level,
        })
    }
}
