use std::fs::File;
use std::io::{self, BufWriter, Read};
use std::path::{Path, PathBuf};

use itertools::Itertools;
use strum_macros::Display;
use thiserror::Error as ThisError;
use tracing::{debug, warn};

use crate::ranking::{self, ReportError};
use crate::record::MedalDelta;
use crate::store::{RecordStore, StoreError};

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Access {
    #[strum(serialize = "reading")]
    Read,
    #[strum(serialize = "writing")]
    Write,
}

#[derive(Debug, ThisError)]
pub enum PersistenceError {
    #[error("Cannot open file {} for {access}.", .path.display())]
    FileOpen {
        path: PathBuf,
        access: Access,
        #[source]
        source: io::Error,
    },
    #[error("Cannot read file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// A line of a database file that was skipped while loading. Line numbers start at 1.
#[derive(Debug, ThisError, PartialEq)]
pub enum LoadIssue {
    #[error("Error. Invalid line {line}: \"{content}\"")]
    InvalidLine { line: usize, content: String },
    #[error("Line {line} skipped. {source}")]
    Rejected { line: usize, source: StoreError },
}

/// The outcome of a load: every record that could be read, and every line that could not.
#[derive(Debug, Default)]
pub struct Loaded {
    pub store: RecordStore,
    pub issues: Vec<LoadIssue>,
}

/// Builds a fresh store from `<name> <gold> <silver> <bronze>` lines.
///
/// A bad line never aborts the load. Lines with the wrong number of fields or a non-integer
/// count are reported as [`LoadIssue::InvalidLine`], names seen earlier in the file as
/// [`LoadIssue::Rejected`]. Blank lines are skipped silently. Each accepted line is inserted at
/// zero and then adjusted by its counts, so negative counts end up as zero.
pub fn load(text: &str) -> Loaded {
    let mut loaded = Loaded::default();

    for (index, content) in text.lines().enumerate() {
        let line = index + 1;

        if content.trim().is_empty() {
            continue;
        }

        let Some((name, medals)) = parse_line(content) else {
            loaded.issues.push(LoadIssue::InvalidLine {
                line,
                content: content.to_string(),
            });
            continue;
        };

        if let Err(source) = loaded.store.insert(name) {
            loaded.issues.push(LoadIssue::Rejected { line, source });
            continue;
        }

        if let Err(source) = loaded.store.adjust(name, medals) {
            loaded.issues.push(LoadIssue::Rejected { line, source });
        }
    }

    loaded
}

/// Reads everything from `reader` and loads it. Bytes that are not valid UTF-8 are replaced, so
/// the lines they appear on are reported as invalid rather than failing the whole read.
pub fn load_from<R: Read>(mut reader: R) -> io::Result<Loaded> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;

    Ok(load(&String::from_utf8_lossy(&buf)))
}

pub fn load_file(path: impl AsRef<Path>) -> Result<Loaded, PersistenceError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| PersistenceError::FileOpen {
        path: path.to_path_buf(),
        access: Access::Read,
        source,
    })?;

    let loaded = load_from(file).map_err(|source| PersistenceError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        records = loaded.store.size(),
        skipped = loaded.issues.len(),
        "loaded database"
    );
    for issue in &loaded.issues {
        warn!(path = %path.display(), "{}", issue);
    }

    Ok(loaded)
}

/// The text a store is persisted as, which is also what `L` prints.
pub fn save(store: &RecordStore) -> Result<String, ReportError> {
    let mut buf = Vec::new();
    ranking::write_report(store, &mut buf)?;

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Creates or truncates `path` and writes the ranked store to it.
///
/// The file is opened before the store is checked, so an empty store still leaves an empty file
/// behind.
pub fn save_to(store: &RecordStore, path: impl AsRef<Path>) -> Result<usize, PersistenceError> {
    let path = path.as_ref();

    let file = File::create(path).map_err(|source| PersistenceError::FileOpen {
        path: path.to_path_buf(),
        access: Access::Write,
        source,
    })?;

    let mut writer = BufWriter::new(file);
    let written = ranking::write_report(store, &mut writer)?;
    debug!(path = %path.display(), records = written, "saved database");

    Ok(written)
}

fn parse_line(line: &str) -> Option<(&str, MedalDelta)> {
    let (name, gold, silver, bronze) = line.split_whitespace().collect_tuple()?;

    let medals = MedalDelta::new(
        gold.parse().ok()?,
        silver.parse().ok()?,
        bronze.parse().ok()?,
    );

    Some((name, medals))
}
