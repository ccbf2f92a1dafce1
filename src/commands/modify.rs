use crate::commands::executable::Executable;
use crate::commands::CommandParser;
use crate::record::MedalDelta;
use crate::reply::Reply;
use crate::store::RecordStore;
use crate::Error;

/// Adds the given (possibly negative) amounts to a country's medals. No counter drops below zero.
#[derive(Debug, PartialEq)]
pub struct Modify {
    pub name: String,
    pub delta: MedalDelta,
}

impl Executable for Modify {
    fn exec(self, store: &mut RecordStore) -> Result<Reply, Error> {
        match store.adjust(&self.name, self.delta) {
            Ok(_) => Ok(Reply::Ok),
            Err(err) => Ok(Reply::Error(err.to_string())),
        }
    }
}

impl TryFrom<&mut CommandParser> for Modify {
    type Error = Error;

    fn try_from(parser: &mut CommandParser) -> Result<Self, Self::Error> {
        let name = parser.next_string()?;
        let gold = parser.next_integer()?;
        let silver = parser.next_integer()?;
        let bronze = parser.next_integer()?;

        Ok(Self {
            name,
            delta: MedalDelta::new(gold, silver, bronze),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Command;
    use crate::store::StoreError;

    #[test]
    fn existing_name() {
        let mut store = RecordStore::new();
        store.insert("USA").unwrap();

        let cmd = Command::try_from("M USA 3 2 1").unwrap();

        assert_eq!(
            cmd,
            Command::Modify(Modify {
                name: String::from("USA"),
                delta: MedalDelta::new(3, 2, 1),
            })
        );

        let result = cmd.exec(&mut store).unwrap();

        assert_eq!(result, Reply::Ok);
        assert_eq!(store.find("USA").unwrap().to_string(), "USA 3 2 1");
    }

    #[test]
    fn clamps_at_zero() {
        let mut store = RecordStore::new();
        store.insert("USA").unwrap();
        store.adjust("USA", MedalDelta::new(1, 1, 1)).unwrap();

        let cmd = Command::try_from("M USA -4 0 2").unwrap();
        let result = cmd.exec(&mut store).unwrap();

        assert_eq!(result, Reply::Ok);
        assert_eq!(store.find("USA").unwrap().to_string(), "USA 0 1 3");
    }

    #[test]
    fn missing_name() {
        let mut store = RecordStore::new();

        let cmd = Command::try_from("M Norway 1 0 0").unwrap();
        let result = cmd.exec(&mut store).unwrap();

        assert_eq!(
            result,
            Reply::Error(
                StoreError::NotFound {
                    name: String::from("Norway")
                }
                .to_string()
            )
        );
        assert!(store.is_empty());
    }
}
