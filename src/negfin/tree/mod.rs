pub mod bitcode;
pub mod bmc;
pub mod builder;
pub mod nodeset;

pub use bitcode::BitCode;
pub use bmc::{BmcNode, BmcTree, NodeId};
pub use builder::build_bmc_tree;
pub use nodeset::NodesetIndex;
