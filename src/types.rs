use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use {
    serde::{Deserialize, Serialize},
    tabled::Tabled,
};

/// Players are opaque name tokens; equality and ordering are all the engine
/// needs from them.
pub type Player = String;

/// The two solution concepts the engine computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolutionKind {
    Shapley,
    Banzhaf,
}

impl SolutionKind {
    pub const ALL: [SolutionKind; 2] = [SolutionKind::Shapley, SolutionKind::Banzhaf];
}

impl Display for SolutionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SolutionKind::Shapley => write!(f, "Shapley"),
            SolutionKind::Banzhaf => write!(f, "Banzhaf"),
        }
    }
}

/// Unvalidated coalition-to-value table handed to engine construction.
///
/// Keys may arrive as ordered tuples; the engine normalizes them into
/// unordered coalitions when it is built. The empty coalition may be omitted,
/// in which case construction defines it as worth 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacteristicFunction {
    entries: Vec<(Vec<Player>, f64)>,
}

impl CharacteristicFunction {
    pub fn new() -> Self {
        CharacteristicFunction::default()
    }

    /// Build from a sequence of (coalition, value) pairs
    pub fn from_entries(entries: impl IntoIterator<Item = (Vec<Player>, f64)>) -> Self {
        CharacteristicFunction {
            entries: entries.into_iter().collect(),
        }
    }

    /// Record a coalition's value; the member order is irrelevant
    pub fn insert<I, P>(&mut self, coalition: I, value: f64)
    where
        I: IntoIterator<Item = P>,
        P: Into<Player>,
    {
        self.entries
            .push((coalition.into_iter().map(Into::into).collect(), value));
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Union of every player named by a key, sorted and deduplicated.
    ///
    /// A complete table names every player in at least one key, so this
    /// recovers the player set when the caller only has the table.
    pub fn players(&self) -> Vec<Player> {
        let set: BTreeSet<&Player> = self.entries.iter().flat_map(|(c, _)| c.iter()).collect();
        set.into_iter().cloned().collect()
    }

    pub(crate) fn entries(&self) -> &[(Vec<Player>, f64)] {
        &self.entries
    }
}

/// One report row: a player's allocation under a solution concept, with its
/// share of the column total
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize, Tabled))]
pub struct Allocation {
    pub player: Player,
    pub value: f64,
    #[cfg_attr(feature = "serde", tabled(display = "display_as_percent"))]
    pub share: f64,
}

#[cfg(feature = "serde")]
fn display_as_percent(share: &f64) -> String {
    format!("{:.2}%", share * 100.0)
}

impl Display for Allocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: value {}, share {}", self.player, self.value, self.share)
    }
}

#[cfg(feature = "serde")]
mod csv_support {
    use super::*;
    use crate::error::{GameError, Result};
    use std::io::Read;
    use std::path::Path;

    #[derive(Debug, Deserialize)]
    struct CoalitionRecord {
        #[serde(rename = "Coalition")]
        coalition: String,
        #[serde(rename = "Value")]
        value: f64,
    }

    impl CharacteristicFunction {
        /// Read a characteristic function from a `Coalition,Value` CSV file.
        ///
        /// The coalition cell lists players separated by `;`; an empty cell
        /// denotes the empty coalition.
        pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
            let reader = csv::Reader::from_path(path)
                .map_err(|e| GameError::InvalidInput(e.to_string()))?;
            Self::from_records(reader)
        }

        /// Read a characteristic function from any CSV byte stream
        pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
            Self::from_records(csv::Reader::from_reader(reader))
        }

        fn from_records<R: Read>(mut reader: csv::Reader<R>) -> Result<Self> {
            let mut table = CharacteristicFunction::new();
            for result in reader.deserialize() {
                let record: CoalitionRecord =
                    result.map_err(|e| GameError::InvalidInput(e.to_string()))?;
                let members = record
                    .coalition
                    .split(';')
                    .map(str::trim)
                    .filter(|m| !m.is_empty())
                    .map(Player::from);
                table.insert(members, record.value);
            }
            Ok(table)
        }
    }
}
