pub mod sink;
pub mod storage;

pub use sink::{percentage, ItemsetSink, ItemsetWriter};
pub use storage::FrequentItemsets;
