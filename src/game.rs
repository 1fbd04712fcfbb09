use crate::coalitions::{self, shapley_weights};
use crate::error::Result;
use crate::types::{Allocation, CharacteristicFunction, Player, SolutionKind};
use crate::validation::{check_players, check_table};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// One column per solution concept, one slot per player, unset until that
/// concept's solver has run.
#[derive(Debug, Clone)]
struct SolutionTable {
    shapley: Vec<Option<f64>>,
    banzhaf: Vec<Option<f64>>,
}

impl SolutionTable {
    fn unset(n_players: usize) -> Self {
        SolutionTable {
            shapley: vec![None; n_players],
            banzhaf: vec![None; n_players],
        }
    }

    fn column(&self, kind: SolutionKind) -> &[Option<f64>] {
        match kind {
            SolutionKind::Shapley => &self.shapley,
            SolutionKind::Banzhaf => &self.banzhaf,
        }
    }

    fn column_mut(&mut self, kind: SolutionKind) -> &mut Vec<Option<f64>> {
        match kind {
            SolutionKind::Shapley => &mut self.shapley,
            SolutionKind::Banzhaf => &mut self.banzhaf,
        }
    }
}

/// Engine for a fully connected cooperative game.
///
/// Owns the player set, the validated characteristic function and the
/// solution table. The player set, value table and sign convention are fixed
/// at construction; only the solution table mutates, through the solvers and
/// [`normalize`](CooperativeGame::normalize).
#[derive(Debug, Clone)]
pub struct CooperativeGame {
    players: Vec<Player>,
    /// Coalition values indexed by player bitmask; length is `2^n`.
    values: Vec<f64>,
    minimize: bool,
    solutions: SolutionTable,
}

impl CooperativeGame {
    /// Validate the inputs and construct an engine.
    ///
    /// The player collection is deduplicated into an ordered set and table
    /// keys are normalized into unordered coalitions. The table must cover
    /// every one of the `2^n` coalitions, except that the empty coalition may
    /// be omitted and then counts as worth 0. `minimize` picks the marginal
    /// sign convention: true for cost games, false for gain games.
    pub fn new<I, P>(players: I, table: &CharacteristicFunction, minimize: bool) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Player>,
    {
        let players = check_players(players)?;
        let values = check_table(&players, table)?;
        let solutions = SolutionTable::unset(players.len());

        Ok(CooperativeGame {
            players,
            values,
            minimize,
            solutions,
        })
    }

    /// Builder with `minimize` defaulted to true
    pub fn builder<I, P>(players: I) -> CooperativeGameBuilder
    where
        I: IntoIterator<Item = P>,
        P: Into<Player>,
    {
        CooperativeGameBuilder::new(players)
    }

    /// Ordered player set
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn n_players(&self) -> usize {
        self.players.len()
    }

    /// Whether marginal contributions follow the cost-minimization convention
    pub fn is_minimize(&self) -> bool {
        self.minimize
    }

    /// Value of the coalition containing every player.
    ///
    /// Validation proved the table complete, so the lookup cannot miss.
    pub fn grand_coalition_value(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Look up the value of an arbitrary coalition
    pub fn coalition_value<I, S>(&self, coalition: I) -> Result<f64>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mask = coalitions::coalition_mask(&self.players, coalition)?;
        Ok(self.values[mask])
    }

    /// Marginal value of `player`'s presence in `coalition`.
    ///
    /// Zero when the player is not a member. For a member, the marginal is
    /// value(C) - value(C \ {p}) under minimization and value(C \ {p}) -
    /// value(C) under maximization.
    pub fn marginal_contribution<I, S>(&self, player: &str, coalition: I) -> Result<f64>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mask = coalitions::coalition_mask(&self.players, coalition)?;
        match self.players.binary_search_by(|p| p.as_str().cmp(player)) {
            Ok(bit) if coalitions::contains(mask, bit) => Ok(self.marginal(bit, mask)),
            _ => Ok(0.0),
        }
    }

    #[inline]
    fn marginal(&self, bit: usize, mask: usize) -> f64 {
        let sans = coalitions::without(mask, bit);
        if self.minimize {
            self.values[mask] - self.values[sans]
        } else {
            self.values[sans] - self.values[mask]
        }
    }

    /// Compute the Shapley value for every player; populate and return the
    /// Shapley column of the solution table.
    ///
    /// Enumerates the coalition lattice once per player, weighting each
    /// marginal contribution by its coalition-size Shapley weight. For a
    /// characteristic function built from a real allocation problem the
    /// values sum to the grand coalition value (efficiency property).
    pub fn shapley(&mut self) -> BTreeMap<Player, f64> {
        let n = self.players.len();
        let n_coalitions = 1usize << n;
        let weights = shapley_weights(n);

        // Each player's accumulation is independent; the fan-out is a pure
        // per-player reduction over the same lattice.
        let totals: Vec<f64> = (0..n)
            .into_par_iter()
            .map(|k| {
                let mut total = 0.0;
                for mask in 1..n_coalitions {
                    if coalitions::contains(mask, k) {
                        total += weights[coalitions::size(mask)] * self.marginal(k, mask);
                    }
                }
                total
            })
            .collect();

        for (slot, total) in self.solutions.shapley.iter_mut().zip(totals) {
            *slot = Some(total);
        }
        self.solution(SolutionKind::Shapley)
    }

    /// Compute the raw Banzhaf index for every player; populate and return
    /// the Banzhaf column of the solution table.
    ///
    /// Every coalition carries the same weight 1/2^(n-1): the index averages
    /// over all coalitions containing the player rather than over join
    /// orderings. With `standardize`, raw indices are rescaled so their total
    /// matches the grand coalition value; a zero raw sum then divides to
    /// non-finite values, which callers must rule out before asking for it.
    pub fn banzhaf(&mut self, standardize: bool) -> BTreeMap<Player, f64> {
        let n = self.players.len();
        let n_coalitions = 1usize << n;
        let coefficient = 1.0 / 2f64.powi(n as i32 - 1);

        let mut indices: Vec<f64> = (0..n)
            .into_par_iter()
            .map(|k| {
                let mut total = 0.0;
                for mask in 1..n_coalitions {
                    if coalitions::contains(mask, k) {
                        total += self.marginal(k, mask);
                    }
                }
                total * coefficient
            })
            .collect();

        if standardize {
            let raw_sum: f64 = indices.iter().sum();
            let scale = self.grand_coalition_value() / raw_sum;
            for index in &mut indices {
                *index *= scale;
            }
        }

        for (slot, index) in self.solutions.banzhaf.iter_mut().zip(indices) {
            *slot = Some(index);
        }
        self.solution(SolutionKind::Banzhaf)
    }

    /// Rescale the requested solution columns in place into shares of 1:
    /// Shapley by the grand coalition value, Banzhaf by the sum of its set
    /// entries. Unset entries are skipped, not divided. Normalizing twice
    /// divides twice; this is not idempotent.
    pub fn normalize(&mut self, kinds: &[SolutionKind]) {
        for &kind in kinds {
            let denominator = match kind {
                SolutionKind::Shapley => self.grand_coalition_value(),
                SolutionKind::Banzhaf => {
                    self.solutions.banzhaf.iter().flatten().copied().sum()
                }
            };
            for slot in self.solutions.column_mut(kind).iter_mut() {
                if let Some(value) = slot {
                    *value /= denominator;
                }
            }
        }
    }

    /// Computed allocations for `kind`; empty until its solver has run
    pub fn solution(&self, kind: SolutionKind) -> BTreeMap<Player, f64> {
        self.players
            .iter()
            .zip(self.solutions.column(kind))
            .filter_map(|(player, value)| value.map(|v| (player.clone(), v)))
            .collect()
    }

    /// Report rows for `kind`: absolute value plus share of the column total
    pub fn allocations(&self, kind: SolutionKind) -> Vec<Allocation> {
        let column = self.solutions.column(kind);
        let total: f64 = column.iter().flatten().copied().sum();

        self.players
            .iter()
            .zip(column)
            .filter_map(|(player, value)| {
                value.map(|value| Allocation {
                    player: player.clone(),
                    value,
                    share: if total != 0.0 { value / total } else { 0.0 },
                })
            })
            .collect()
    }
}

/// Staged construction for [`CooperativeGame`], with `minimize` defaulted to
/// true (cost games)
pub struct CooperativeGameBuilder {
    players: Vec<Player>,
    table: CharacteristicFunction,
    minimize: bool,
}

impl CooperativeGameBuilder {
    pub fn new<I, P>(players: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Player>,
    {
        CooperativeGameBuilder {
            players: players.into_iter().map(Into::into).collect(),
            table: CharacteristicFunction::new(),
            minimize: true,
        }
    }

    /// Record one coalition's value
    pub fn value<I, P>(mut self, coalition: I, value: f64) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Player>,
    {
        self.table.insert(coalition, value);
        self
    }

    /// Replace the accumulated table wholesale
    pub fn table(mut self, table: CharacteristicFunction) -> Self {
        self.table = table;
        self
    }

    pub fn minimize(mut self, minimize: bool) -> Self {
        self.minimize = minimize;
        self
    }

    pub fn build(self) -> Result<CooperativeGame> {
        CooperativeGame::new(self.players, &self.table, self.minimize)
    }
}
