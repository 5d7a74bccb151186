//! Snapshot acquisition for the in-progress operation table.

pub mod parse;
pub mod record;

pub use parse::read_snapshot;
pub use record::OperationRecord;
