use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::reply::Reply;
use crate::store::RecordStore;
use crate::Error;

/// Adds a country with no medals. Fails if the name is already in the store.
#[derive(Debug, PartialEq)]
pub struct Add {
    pub name: String,
}

impl Executable for Add {
    fn exec(self, store: &mut RecordStore) -> Result<Reply, Error> {
        match store.insert(&self.name) {
            Ok(_) => Ok(Reply::Ok),
            Err(err) => Ok(Reply::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Add {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let name = parser.next_string()?;
        Ok(Self { name })
    }
}
