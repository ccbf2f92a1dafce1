use std::path::PathBuf;

use tracing::warn;

use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::persistence;
use crate::reply::Reply;
use crate::store::RecordStore;
use crate::Error;

/// Writes the ranked listing to a file, creating or truncating it.
#[derive(Debug, PartialEq)]
pub struct Write {
    pub path: PathBuf,
}

impl Executable for Write {
    fn exec(self, store: &mut RecordStore) -> Result<Reply, Error> {
        match persistence::save_to(store, &self.path) {
            Ok(_) => Ok(Reply::Ok),
            Err(err) => {
                warn!(path = %self.path.display(), "write failed: {:?}", err);
                Ok(Reply::Error(err.to_string()))
            }
        }
    }
}

impl TryFrom<&mut CommandParser> for Write {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let path = parser.next_string()?;
        Ok(Self {
            path: PathBuf::from(path),
        })
    }
}
