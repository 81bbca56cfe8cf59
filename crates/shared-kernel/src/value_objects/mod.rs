// crates/shared-kernel/src/value_objects/mod.rs
pub mod file_handle;
pub mod formatted_date;
pub mod timestamps;

pub use file_handle::FileHandle;
pub use formatted_date::FormattedDate;
pub use timestamps::{TimestampKind, TimestampPair};
