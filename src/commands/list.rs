use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::ranking::{self, ReportError};
use crate::reply::Reply;
use crate::store::RecordStore;
use crate::Error;

/// Shows every country ranked by medals.
#[derive(Debug, PartialEq)]
pub struct List;

impl Executable for List {
    fn exec(self, store: &mut RecordStore) -> Result<Reply, Error> {
        let mut report = Vec::new();

        match ranking::write_report(store, &mut report) {
            Ok(_) => Ok(Reply::Listing(String::from_utf8(report)?)),
            Err(err @ ReportError::EmptyStore) => Ok(Reply::Error(err.to_string())),
            Err(err) => Err(err.into()),
        }
    }
}

impl TryFrom<&mut CommandParser> for List {
    type Error = Error;

    fn try_from(_parser: &mut CommandParser) -> Result<Self, Self::Error> {
        Ok(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Command;
    use crate::record::MedalDelta;

    #[test]
    fn ranked_listing() {
        let mut store = RecordStore::new();
        for (name, gold) in [("Peru", 0), ("Chile", 2), ("Bolivia", 1)] {
            store.insert(name).unwrap();
            store.adjust(name, MedalDelta::new(gold, 0, 0)).unwrap();
        }

        let cmd = Command::try_from("L").unwrap();
        assert_eq!(cmd, Command::List(List));

        let result = cmd.exec(&mut store).unwrap();

        assert_eq!(
            result,
            Reply::Listing(String::from("Chile 2 0 0\nBolivia 1 0 0\nPeru 0 0 0\n"))
        );
    }

    #[test]
    fn empty_store() {
        let mut store = RecordStore::new();

        let result = Command::try_from("L").unwrap().exec(&mut store).unwrap();

        assert_eq!(result, Reply::Error(ReportError::EmptyStore.to_string()));
    }
}
