use std::path::PathBuf;

use tracing::{info, warn};

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::persistence;
use crate::reply::Reply;
use crate::store::RecordStore;
use crate::Error;

/// Replaces the whole store with the records read from a file.
///
/// Lines that cannot be loaded are reported one by one and skipped. If the file cannot be opened
/// the current store is kept as it is.
#[derive(Debug, PartialEq)]
pub struct Open {
    pub path: PathBuf,
}

impl Executable for Open {
    fn exec(self, store: &mut RecordStore) -> Result<Reply, Error> {
        let loaded = match persistence::load_file(&self.path) {
            Ok(loaded) => loaded,
            Err(err) => {
                warn!(path = %self.path.display(), "open failed: {:?}", err);
                return Ok(Reply::Error(err.to_string()));
            }
        };

        info!(
            path = %self.path.display(),
            records = loaded.store.size(),
            "replacing store"
        );
        store.replace_with(loaded.store);

        let warnings = loaded.issues.iter().map(ToString::to_string).collect();
        Ok(Reply::Replaced { warnings })
    }
}

impl TryFrom<&mut CommandParser> for Open {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let path = parser.next_string()?;
        Ok(Self {
            path: PathBuf::from(path),
        })
    }
}
