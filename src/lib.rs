//! Frequent itemset mining with the negFIN algorithm.
//!
//! The database is scanned twice: once to rank the frequent items, once to
//! build a BMC-tree whose nodes carry a bitmap of their ancestors. A
//! depth-first search over the set-enumeration tree then derives every
//! candidate's support by subtracting the weight of the occurrences that do
//! not contain it.

pub mod error;
pub mod negfin;

pub use error::Error;
pub use negfin::{
    mine, mine_with_options, run, FrequentItemsets, ItemsetSink, ItemsetWriter, MinSupport,
    MiningOptions, MiningStats, TransactionFile, TransactionSource, Transactions,
};

#[cfg(feature = "python")]
mod python {
    use numpy::PyReadonlyArray2;
    use pyo3::{exceptions::PyValueError, prelude::*};

    use crate::negfin::{mine_with_options, MinSupport, MiningOptions, Transactions};

    /// Mine a binary transaction matrix. Returns `(itemset, support)` pairs
    /// where items are column indices.
    #[pyfunction]
    #[pyo3(name = "mine", signature = (transactions, min_support, max_len=None))]
    fn mine_dense(
        py: Python<'_>,
        transactions: PyReadonlyArray2<'_, i32>,
        min_support: f64,
        max_len: Option<usize>,
    ) -> PyResult<Vec<(Vec<u64>, u64)>> {
        let db = Transactions::from_dense(transactions.as_array());
        let options = MiningOptions { max_len };
        let found = py
            .allow_threads(|| mine_with_options(&db, MinSupport::Fraction(min_support), options))
            .map_err(|err| PyValueError::new_err(err.to_string()))?;
        Ok(found
            .iter()
            .map(|(itemset, support)| (itemset.to_vec(), support))
            .collect())
    }

    #[pymodule]
    fn negfin(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(mine_dense, m)?)?;
        Ok(())
    }
}
