use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use ndarray::ArrayView2;

use crate::error::{Error, InputError};

/// A transaction database that can be scanned from the start any number of
/// times. Each visited transaction is a sorted set of item identifiers.
pub trait TransactionSource {
    fn for_each_transaction(
        &self,
        f: &mut dyn FnMut(&[u64]) -> Result<(), Error>,
    ) -> Result<(), Error>;
}

/// Comment, metadata and blank lines carry no transaction.
fn is_transaction_line(line: &str) -> bool {
    !line.trim().is_empty() && !line.starts_with(['#', '%', '@'])
}

/// Parse one transaction line into `transaction`, which is left sorted and
/// free of repeated identifiers.
fn parse_line(line: &str, line_number: usize, transaction: &mut Vec<u64>) -> Result<(), InputError> {
    transaction.clear();
    for token in line.split_whitespace() {
        let item = token.parse::<u64>().map_err(|_| InputError::Parse {
            line: line_number,
            token: token.to_owned(),
        })?;
        transaction.push(item);
    }
    transaction.sort_unstable();
    transaction.dedup();
    Ok(())
}

/// Transactions stored one per line in a text file, re-read on every pass.
#[derive(Debug, Clone)]
pub struct TransactionFile {
    path: PathBuf,
}

impl TransactionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> InputError {
        InputError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl TransactionSource for TransactionFile {
    fn for_each_transaction(
        &self,
        f: &mut dyn FnMut(&[u64]) -> Result<(), Error>,
    ) -> Result<(), Error> {
        let file = File::open(&self.path).map_err(|err| self.io_error(err))?;
        let mut reader = BufReader::new(file);
        let mut line = String::new();
        let mut transaction = Vec::new();
        let mut line_number = 0;
        loop {
            line.clear();
            let read = reader
                .read_line(&mut line)
                .map_err(|err| self.io_error(err))?;
            if read == 0 {
                break;
            }
            line_number += 1;
            if !is_transaction_line(&line) {
                continue;
            }
            parse_line(&line, line_number, &mut transaction)?;
            f(transaction.as_slice())?;
        }
        Ok(())
    }
}

/// In-memory transaction database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transactions {
    transactions: Vec<Vec<u64>>,
}

impl Transactions {
    pub fn new(transactions: Vec<Vec<u64>>) -> Self {
        let transactions = transactions
            .into_iter()
            .map(|mut transaction| {
                transaction.sort_unstable();
                transaction.dedup();
                transaction
            })
            .collect();
        Self { transactions }
    }

    /// Parse transactions using the same line rules as [`TransactionFile`].
    pub fn parse(text: &str) -> Result<Self, InputError> {
        let mut transactions = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            if !is_transaction_line(line) {
                continue;
            }
            let mut transaction = Vec::new();
            parse_line(line, idx + 1, &mut transaction)?;
            transactions.push(transaction);
        }
        Ok(Self { transactions })
    }

    /// Convert a binary transaction matrix, one row per transaction, where a
    /// non-zero cell in column `j` means item `j` is present.
    pub fn from_dense(matrix: ArrayView2<i32>) -> Self {
        let transactions = matrix
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &cell)| cell != 0)
                    .map(|(item, _)| item as u64)
                    .collect()
            })
            .collect();
        Self { transactions }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u64]> {
        self.transactions.iter().map(Vec::as_slice)
    }
}

impl TransactionSource for Transactions {
    fn for_each_transaction(
        &self,
        f: &mut dyn FnMut(&[u64]) -> Result<(), Error>,
    ) -> Result<(), Error> {
        self.transactions
            .iter()
            .try_for_each(|transaction| f(transaction.as_slice()))
    }
}

impl<S: TransactionSource + ?Sized> TransactionSource for &S {
    fn for_each_transaction(
        &self,
        f: &mut dyn FnMut(&[u64]) -> Result<(), Error>,
    ) -> Result<(), Error> {
        (**self).for_each_transaction(f)
    }
}
