//! Bitmask representation of coalitions.
//!
//! A coalition over `n` players is a `usize` whose bit `k` marks the presence
//! of the player at index `k` in the ordered player list. Mask `0` is the
//! empty coalition and `(1 << n) - 1` the grand coalition, so iterating
//! `0..(1 << n)` enumerates the full coalition lattice.

use crate::error::{GameError, Result};
use crate::types::Player;

/// Hard cap on the player count; the dense value table holds `2^n` entries.
pub(crate) const MAX_PLAYERS: usize = 20;

pub(crate) const FACTORIAL_LIMIT: usize = MAX_PLAYERS + 1;
pub(crate) const FACTORIALS: [u64; FACTORIAL_LIMIT] = {
    let mut facts = [1u64; FACTORIAL_LIMIT];
    let mut i = 1;
    while i < FACTORIAL_LIMIT {
        facts[i] = facts[i - 1] * (i as u64);
        i += 1;
    }
    facts
};

#[inline]
pub(crate) fn factorial(n: usize) -> f64 {
    FACTORIALS[n] as f64
}

#[inline]
pub(crate) fn contains(mask: usize, bit: usize) -> bool {
    mask & (1 << bit) != 0
}

#[inline]
pub(crate) fn without(mask: usize, bit: usize) -> usize {
    mask & !(1 << bit)
}

#[inline]
pub(crate) fn size(mask: usize) -> usize {
    mask.count_ones() as usize
}

/// Fold an ordered coalition key into an unordered mask.
///
/// Repeated members collapse onto the same bit; a member outside the player
/// list fails the lookup. `players` must be sorted.
pub(crate) fn coalition_mask<I, S>(players: &[Player], members: I) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut mask = 0usize;
    for member in members {
        let member = member.as_ref();
        let bit = players
            .binary_search_by(|p| p.as_str().cmp(member))
            .map_err(|_| GameError::UnknownPlayer {
                player: member.to_string(),
            })?;
        mask |= 1 << bit;
    }
    Ok(mask)
}

/// Render a mask as a comma-separated player list for error messages.
pub(crate) fn label(mask: usize, players: &[Player]) -> String {
    players
        .iter()
        .enumerate()
        .filter(|(k, _)| contains(mask, *k))
        .map(|(_, p)| p.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Per-size Shapley weights, indexed by coalition size (slot 0 is unused).
///
/// weight(s) = (s-1)!(n-s)!/n!, the closed form of 1/(C(n, s) * s): every
/// marginal contribution from a coalition of size s carries the same weight,
/// and the per-size weights together average over all join orderings.
pub(crate) fn shapley_weights(n: usize) -> Vec<f64> {
    let fact_n = factorial(n);
    (0..=n)
        .map(|s| {
            if s == 0 {
                0.0
            } else {
                factorial(s - 1) * factorial(n - s) / fact_n
            }
        })
        .collect()
}
