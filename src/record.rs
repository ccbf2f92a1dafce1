use std::cmp::Reverse;
use std::fmt;

/// A country and its medal tally. Counters can never go below zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    name: String,
    gold: u32,
    silver: u32,
    bronze: u32,
}

/// Signed change applied to each counter of a [`Record`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MedalDelta {
    pub gold: i64,
    pub silver: i64,
    pub bronze: i64,
}

impl MedalDelta {
    pub fn new(gold: i64, silver: i64, bronze: i64) -> Self {
        Self {
            gold,
            silver,
            bronze,
        }
    }
}

impl Record {
    pub fn new(name: impl Into<String>) -> Record {
        Record {
            name: name.into(),
            gold: 0,
            silver: 0,
            bronze: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn silver(&self) -> u32 {
        self.silver
    }

    pub fn bronze(&self) -> u32 {
        self.bronze
    }

    /// Applies `delta` to each counter independently, clamping every result at zero.
    pub fn apply(&mut self, delta: MedalDelta) {
        self.gold = clamped_add(self.gold, delta.gold);
        self.silver = clamped_add(self.silver, delta.silver);
        self.bronze = clamped_add(self.bronze, delta.bronze);
    }

    /// Key for ranking: more gold first, then more silver, then more bronze.
    pub fn ranking_key(&self) -> (Reverse<u32>, Reverse<u32>, Reverse<u32>) {
        (Reverse(self.gold), Reverse(self.silver), Reverse(self.bronze))
    }
}

/// The persisted and displayed form: `<name> <gold> <silver> <bronze>`.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.name, self.gold, self.silver, self.bronze
        )
    }
}

fn clamped_add(current: u32, delta: i64) -> u32 {
    let next = i64::from(current).saturating_add(delta).max(0);
    u32::try_from(next).unwrap_or(u32::MAX)
}
