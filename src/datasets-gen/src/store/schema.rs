use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use serde::Serializer;

use crate::DATETIME_FORMAT;

/// A generated table: one record type, one output file.
pub trait Table: Serialize {
    const FILE_NAME: &'static str;
    /// Column names in output order. Must match the serialized field order.
    const COLUMNS: &'static [&'static str];

    /// Approximate in-memory size of the record, heap allocations included.
    fn memory_size(&self) -> usize;
}

pub fn table_memory_size<T: Table>(rows: &[T]) -> usize {
    rows.iter().map(|row| row.memory_size()).sum()
}

pub fn serialize_datetime<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&dt.format(DATETIME_FORMAT))
}
