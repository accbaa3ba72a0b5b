//! The unified mutation view: fetch six transaction categories, normalize
//! them into one ordered ledger projection, and filter it after the fact.

pub mod builder;
pub mod filter;
pub mod range;
pub mod source;

pub use builder::{assemble_rows, build_mutations, distinct_creators, BankDirectory, SourceBatches};
pub use filter::MutationFilter;
pub use range::{ClickWindow, DateRange};
pub use source::MutationSource;
