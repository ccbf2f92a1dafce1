use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::reply::Reply;
use crate::store::RecordStore;
use crate::Error;

/// Releases every record and asks the interpreter to stop.
#[derive(Debug, PartialEq)]
pub struct Quit;

impl Executable for Quit {
    fn exec(self, store: &mut RecordStore) -> Result<Reply, Error> {
        store.clear();
        Ok(Reply::Quit)
    }
}

impl TryFrom<&mut CommandParser> for Quit {
    type Error = Error;

    fn try_from(_parser: &mut CommandParser) -> Result<Self, Self::Error> {
        Ok(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Command;

    #[test]
    fn clears_store() {
        let mut store = RecordStore::new();
        store.insert("Tonga").unwrap();

        let cmd = Command::try_from("Q").unwrap();
        assert_eq!(cmd, Command::Quit(Quit));

        let result = cmd.exec(&mut store).unwrap();

        assert_eq!(result, Reply::Quit);
        assert!(store.is_empty());
    }
}
