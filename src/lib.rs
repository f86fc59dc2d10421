pub mod error;
pub mod seq;
pub mod truthy;

pub mod pipe;

pub mod combinatorics;
pub mod groupby;
pub mod seq_ext;
pub mod tee;

// Re-export all items from the seq module at the crate root
pub use seq::*;
pub use combinatorics::{combinations, combinations_with_replacement, permutations, product};
pub use groupby::groupby;
pub use seq_ext::LazySeqExt;
pub use tee::tee;
pub use truthy::Truthy;
