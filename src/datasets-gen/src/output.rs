use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::path::Path;

use csv::Terminator;
use csv::WriterBuilder;

use crate::error::Result;
use crate::store::schema::Table;

pub fn write_csv<T: Table>(path: impl AsRef<Path>, rows: &[T]) -> Result<()> {
    let file = File::create(path)?;
    write(BufWriter::new(file), rows)
}

/// Header row first, then one `\n`-terminated row per record.
pub fn write<W: io::Write, T: Table>(w: W, rows: &[T]) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(w);

    wtr.write_record(T::COLUMNS)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    Ok(())
}
