use std::io::{BufWriter, Write};

use crate::error::{Error, OutputError};

/// Receiver of mined itemsets, in discovery order.
pub trait ItemsetSink {
    /// Called once, after the database has been scanned.
    fn begin(&mut self, _num_transactions: u64) -> Result<(), Error> {
        Ok(())
    }

    /// One frequent itemset as original item identifiers.
    fn accept(&mut self, itemset: &[u64], support: u64) -> Result<(), Error>;

    fn finish(&mut self) -> Result<(), Error> {
        Ok(())
    }
}

impl<K: ItemsetSink + ?Sized> ItemsetSink for &mut K {
    fn begin(&mut self, num_transactions: u64) -> Result<(), Error> {
        (**self).begin(num_transactions)
    }

    fn accept(&mut self, itemset: &[u64], support: u64) -> Result<(), Error> {
        (**self).accept(itemset, support)
    }

    fn finish(&mut self) -> Result<(), Error> {
        (**self).finish()
    }
}

/// `support / num_transactions` as a whole percentage, ties rounded to even.
pub fn percentage(support: u64, num_transactions: u64) -> u64 {
    if num_transactions == 0 {
        return 0;
    }
    (support as f64 / num_transactions as f64 * 100.0).round_ties_even() as u64
}

fn write_line(
    out: &mut impl Write,
    itemset: &[u64],
    support: u64,
    num_transactions: u64,
) -> std::io::Result<()> {
    for id in itemset {
        write!(out, "{id} ")?;
    }
    writeln!(
        out,
        "#SUP:{support} %:{}",
        percentage(support, num_transactions)
    )
}

/// Writes one `<id> <id> ... #SUP:<support> %:<percentage>` line per itemset.
pub struct ItemsetWriter<W: Write> {
    out: BufWriter<W>,
    num_transactions: u64,
}

impl<W: Write> ItemsetWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: BufWriter::new(out),
            num_transactions: 0,
        }
    }

    pub fn into_inner(self) -> Result<W, OutputError> {
        self.out
            .into_inner()
            .map_err(|err| OutputError::Io(err.into_error()))
    }
}

impl<W: Write> ItemsetSink for ItemsetWriter<W> {
    fn begin(&mut self, num_transactions: u64) -> Result<(), Error> {
        self.num_transactions = num_transactions;
        Ok(())
    }

    fn accept(&mut self, itemset: &[u64], support: u64) -> Result<(), Error> {
        write_line(&mut self.out, itemset, support, self.num_transactions)
            .map_err(OutputError::Io)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Error> {
        self.out.flush().map_err(OutputError::Io)?;
        Ok(())
    }
}
