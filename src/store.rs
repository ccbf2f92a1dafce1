use std::collections::TryReserveError;

use thiserror::Error as ThisError;

use crate::record::{MedalDelta, Record};

/// The RecordStore owns every country record for the lifetime of an interpreter. Records keep
/// their insertion order for iteration, names are unique and compared exactly, and lookups are a
/// linear scan. References handed out never outlive the call that borrowed the store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<Record>,
}

#[derive(Debug, ThisError, PartialEq)]
pub enum StoreError {
    #[error("Nation \"{name}\" is already in the database.")]
    DuplicateName { name: String },
    #[error("Nation \"{name}\" is not in the database.")]
    NotFound { name: String },
    #[error("Invalid nation name \"{name}\"; names must be non-empty and contain no whitespace.")]
    InvalidName { name: String },
    #[error("Error. Memory allocation failed.")]
    AllocationFailure(#[from] TryReserveError),
}

impl RecordStore {
    pub fn new() -> RecordStore {
        RecordStore {
            records: Vec::new(),
        }
    }

    /// Appends a record named `name` with every counter at zero.
    pub fn insert(&mut self, name: &str) -> Result<&mut Record, StoreError> {
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(StoreError::InvalidName {
                name: name.to_string(),
            });
        }

        if self.exists(name) {
            return Err(StoreError::DuplicateName {
                name: name.to_string(),
            });
        }

        self.records.try_reserve(1)?;
        self.records.push(Record::new(name));

        let last = self.records.len() - 1;
        Ok(&mut self.records[last])
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|record| record.name() == name)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Adds `delta` to the medals of `name`. Each counter is clamped at zero on its own.
    pub fn adjust(&mut self, name: &str, delta: MedalDelta) -> Result<&Record, StoreError> {
        let record = self.find_mut(name).ok_or_else(|| StoreError::NotFound {
            name: name.to_string(),
        })?;

        record.apply(delta);

        Ok(&*record)
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Drops every record held and takes over the records of `other`.
    pub fn replace_with(&mut self, other: RecordStore) {
        self.clear();
        self.records = other.records;
    }

    pub fn size(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(Record::name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn insert_starts_at_zero() {
        let mut store = RecordStore::new();

        let record = store.insert("Japan").unwrap();

        assert_eq!(record.to_string(), "Japan 0 0 0");
        assert_eq!(store.size(), 1);
    }

    #[test]
    fn duplicate_insert_leaves_store_untouched() {
        let mut store = RecordStore::new();
        store.insert("Japan").unwrap();
        store.adjust("Japan", MedalDelta::new(1, 2, 3)).unwrap();

        let err = store.insert("Japan").unwrap_err();

        assert_eq!(
            err,
            StoreError::DuplicateName {
                name: String::from("Japan")
            }
        );
        assert_eq!(store.size(), 1);
        assert_eq!(store.find("Japan").unwrap().to_string(), "Japan 1 2 3");
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut store = RecordStore::new();
        store.insert("usa").unwrap();
        store.insert("USA").unwrap();

        assert_eq!(store.names().collect::<Vec<_>>(), vec!["usa", "USA"]);
        assert!(store.find("Usa").is_none());
    }

    #[test]
    fn rejects_names_the_file_format_cannot_hold() {
        let mut store = RecordStore::new();

        assert!(matches!(
            store.insert(""),
            Err(StoreError::InvalidName { .. })
        ));
        assert!(matches!(
            store.insert("South Africa"),
            Err(StoreError::InvalidName { .. })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn adjust_missing_name() {
        let mut store = RecordStore::new();

        let err = store.adjust("Norway", MedalDelta::new(1, 0, 0)).unwrap_err();

        assert_eq!(
            err,
            StoreError::NotFound {
                name: String::from("Norway")
            }
        );
        assert!(store.is_empty());
    }

    #[test]
    fn adjust_clamps_per_counter() {
        let mut store = RecordStore::new();
        store.insert("Peru").unwrap();
        store.adjust("Peru", MedalDelta::new(1, 1, 1)).unwrap();

        let record = store.adjust("Peru", MedalDelta::new(-5, 2, -1)).unwrap();

        assert_eq!(record.to_string(), "Peru 0 3 0");
    }

    #[test]
    fn counters_never_go_negative() {
        let mut rng = rand::thread_rng();
        let mut store = RecordStore::new();
        store.insert("Italy").unwrap();
        let mut model = [0i64; 3];

        for _ in 0..1000 {
            let delta = MedalDelta::new(
                rng.gen_range(-20..=20),
                rng.gen_range(-20..=20),
                rng.gen_range(-20..=20),
            );
            model[0] = (model[0] + delta.gold).max(0);
            model[1] = (model[1] + delta.silver).max(0);
            model[2] = (model[2] + delta.bronze).max(0);

            let record = store.adjust("Italy", delta).unwrap();

            assert_eq!(i64::from(record.gold()), model[0]);
            assert_eq!(i64::from(record.silver()), model[1]);
            assert_eq!(i64::from(record.bronze()), model[2]);
        }
    }

    #[test]
    fn iteration_is_insertion_ordered_and_restartable() {
        let mut store = RecordStore::new();
        for name in ["Ghana", "Fiji", "Cuba"] {
            store.insert(name).unwrap();
        }

        assert_eq!(store.names().collect::<Vec<_>>(), vec!["Ghana", "Fiji", "Cuba"]);
        assert_eq!(store.iter().count(), 3);
        assert_eq!((&store).into_iter().count(), 3);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut store = RecordStore::new();
        store.insert("Chad").unwrap();

        store.clear();
        store.clear();

        assert!(store.is_empty());
        assert!(store.insert("Chad").is_ok());
    }

    #[test]
    fn replace_with_discards_previous_records() {
        let mut store = RecordStore::new();
        store.insert("Mali").unwrap();
        let mut other = RecordStore::new();
        other.insert("Oman").unwrap();

        store.replace_with(other);

        assert_eq!(store.names().collect::<Vec<_>>(), vec!["Oman"]);
    }
}
