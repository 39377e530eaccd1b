pub mod error;
pub mod output;
pub mod store;

/// Format of every datetime column in the generated files.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Scale of money columns.
pub const DECIMAL_SCALE: u32 = 2;
