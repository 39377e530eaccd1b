use tracing::info;

use crate::error::DatasetsGenError;
use crate::error::Result;

/// Builds a table in fixed-size batches and merges them once every batch is done.
pub struct BatchBuilder {
    name: &'static str,
    total: usize,
    batch_size: usize,
}

impl BatchBuilder {
    pub fn try_new(name: &'static str, total: usize, batch_size: usize) -> Result<Self> {
        if batch_size == 0 {
            return Err(DatasetsGenError::General(format!(
                "{name}: batch size should be greater than zero"
            )));
        }

        Ok(Self {
            name,
            total,
            batch_size,
        })
    }

    pub fn batches(&self) -> usize {
        self.total.div_ceil(self.batch_size)
    }

    /// Calls `make` with the 1-based id of each record. The last batch is
    /// shorter when `total` is not a multiple of the batch size.
    pub fn build<T, F>(&self, mut make: F) -> Result<Vec<T>>
    where
        F: FnMut(u64) -> Result<T>,
    {
        let batches = self.batches();
        let mut done: Vec<Vec<T>> = Vec::with_capacity(batches);
        for batch_idx in 0..batches {
            let start = batch_idx * self.batch_size;
            let end = (start + self.batch_size).min(self.total);
            let mut batch = Vec::with_capacity(end - start);
            for idx in start..end {
                batch.push(make(idx as u64 + 1)?);
            }
            info!(
                "{}: batch {}/{} completed",
                self.name,
                batch_idx + 1,
                batches
            );
            done.push(batch);
        }

        let mut result = Vec::with_capacity(self.total);
        for batch in done {
            result.extend(batch);
        }

        Ok(result)
    }
}
