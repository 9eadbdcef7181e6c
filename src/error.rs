use std::path::PathBuf;

/// The dataset could not be read or contains a malformed transaction.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read transactions from `{}`", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("line {line}: `{token}` is not a non-negative item identifier")]
    Parse { line: usize, token: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid minimum support `{0}`: expected a fraction in (0, 1] or an integer count > 1")]
    InvalidMinSupport(String),
    #[error("maximum itemset length must be at least 1")]
    InvalidMaxLen,
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to write frequent itemsets")]
    Io(#[from] std::io::Error),
}

/// A support count or itemset counter left the range of `u64`.
#[derive(Debug, thiserror::Error)]
pub enum OverflowError {
    #[error("{what} overflowed")]
    Count { what: &'static str },
}

impl OverflowError {
    pub(crate) fn count(what: &'static str) -> Self {
        Self::Count { what }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Output(#[from] OutputError),
    #[error(transparent)]
    Overflow(#[from] OverflowError),
}
