pub mod clusters;
pub use clusters::*;

pub mod indexer;
pub use indexer::*;
