//! Bounded-memory row batching.

/// Accumulates rows up to a capacity, handing back full chunks for writing.
///
/// Purely a memory bound: chunks written mid-run are still only durable at
/// the run's terminal commit.
#[derive(Debug)]
pub struct Batch<T> {
    rows: Vec<T>,
    capacity: usize,
}

impl<T> Batch<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Adds a row. Returns the accumulated chunk once the capacity is
    /// reached, leaving the batch empty.
    #[must_use]
    pub fn push(&mut self, row: T) -> Option<Vec<T>> {
        self.rows.push(row);
        if self.rows.len() >= self.capacity {
            Some(std::mem::replace(
                &mut self.rows,
                Vec::with_capacity(self.capacity),
            ))
        } else {
            None
        }
    }

    /// Hands back whatever remains. The final partial chunk must always be
    /// written.
    pub fn finish(self) -> Vec<T> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
