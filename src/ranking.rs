use std::io::{self, Write};

use itertools::Itertools;
use thiserror::Error as ThisError;

use crate::record::Record;
use crate::store::RecordStore;

#[derive(Debug, ThisError)]
pub enum ReportError {
    #[error("Error. The given database is empty.")]
    EmptyStore,
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Orders the records by descending gold, then silver, then bronze.
///
/// The sort is stable: records with identical tallies keep the order in which they were inserted
/// into the store.
pub fn rank(store: &RecordStore) -> Vec<&Record> {
    store.iter().sorted_by_key(|record| record.ranking_key()).collect()
}

/// Writes one `<name> <gold> <silver> <bronze>` line per record, in the given order.
///
/// Nothing is written when there are no records.
pub fn render<'a, I, W>(records: I, out: &mut W) -> Result<usize, ReportError>
where
    I: IntoIterator<Item = &'a Record>,
    W: Write + ?Sized,
{
    let mut records = records.into_iter().peekable();
    if records.peek().is_none() {
        return Err(ReportError::EmptyStore);
    }

    let mut written = 0;
    for record in records {
        writeln!(out, "{}", record)?;
        written += 1;
    }
    out.flush()?;

    Ok(written)
}

/// Ranks the store and renders it, the same way for a terminal as for a file.
pub fn write_report<W>(store: &RecordStore, out: &mut W) -> Result<usize, ReportError>
where
    W: Write + ?Sized,
{
    render(rank(store), out)
}
