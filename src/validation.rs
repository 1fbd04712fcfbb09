use crate::coalitions::{self, MAX_PLAYERS};
use crate::error::{GameError, Result};
use crate::types::{CharacteristicFunction, Player};
use std::collections::BTreeSet;

/// Deduplicate and order the player collection; enforce the enumeration cap.
pub(crate) fn check_players<I, P>(players: I) -> Result<Vec<Player>>
where
    I: IntoIterator<Item = P>,
    P: Into<Player>,
{
    let set: BTreeSet<Player> = players.into_iter().map(Into::into).collect();
    let players: Vec<Player> = set.into_iter().collect();

    if players.len() > MAX_PLAYERS {
        return Err(GameError::TooManyPlayers {
            count: players.len(),
            limit: MAX_PLAYERS,
        });
    }

    Ok(players)
}

/// Normalize every key into a coalition mask and prove the table covers the
/// full coalition lattice.
///
/// A table one entry short of complete with the empty coalition absent gets
/// the empty coalition inserted at value 0 (the null coalition contributes
/// nothing unless the caller says otherwise). Any other gap, and any key that
/// lands on an already-filled mask, fails validation.
pub(crate) fn check_table(
    players: &[Player],
    table: &CharacteristicFunction,
) -> Result<Vec<f64>> {
    let n = players.len();
    let expected = 1usize << n;
    let mut values: Vec<Option<f64>> = vec![None; expected];

    for (coalition, value) in table.entries() {
        let mask = coalitions::coalition_mask(players, coalition.iter())?;
        if values[mask].is_some() {
            return Err(GameError::DuplicateCoalition {
                coalition: coalitions::label(mask, players),
            });
        }
        values[mask] = Some(*value);
    }

    let found = values.iter().filter(|v| v.is_some()).count();
    if found == expected - 1 && values[0].is_none() {
        values[0] = Some(0.0);
    } else if found != expected {
        return Err(GameError::IncompleteCoalitionTable {
            players: n,
            expected,
            found,
        });
    }

    Ok(values.into_iter().map(|v| v.unwrap_or(0.0)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(names: &[&str]) -> Vec<Player> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_check_players_dedupes_and_sorts() {
        let result = check_players(["B", "A", "B", "C"]).unwrap();
        assert_eq!(result, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_check_players_cap() {
        let names: Vec<String> = (0..21).map(|i| format!("P{i:02}")).collect();
        let result = check_players(names);
        assert!(matches!(
            result,
            Err(GameError::TooManyPlayers { count: 21, limit: 20 })
        ));
    }

    #[test]
    fn test_check_table_complete() {
        let players = players(&["A", "B"]);
        let mut table = CharacteristicFunction::new();
        table.insert(Vec::<String>::new(), 0.0);
        table.insert(["A"], 1.0);
        table.insert(["B"], 2.0);
        table.insert(["A", "B"], 6.0);

        let values = check_table(&players, &table).unwrap();
        assert_eq!(values, vec![0.0, 1.0, 2.0, 6.0]);
    }

    #[test]
    fn test_check_table_defaults_missing_empty_coalition() {
        let players = players(&["A", "B"]);
        let mut table = CharacteristicFunction::new();
        table.insert(["A"], 1.0);
        table.insert(["B"], 2.0);
        table.insert(["A", "B"], 6.0);

        let values = check_table(&players, &table).unwrap();
        assert_eq!(values[0], 0.0);
        assert_eq!(values[3], 6.0);
    }

    #[test]
    fn test_check_table_rejects_incomplete() {
        // 2^n - 1 entries with the empty coalition present means a real
        // coalition is missing; the default-zero rule must not kick in.
        let players = players(&["A", "B"]);
        let mut table = CharacteristicFunction::new();
        table.insert(Vec::<String>::new(), 0.0);
        table.insert(["A"], 1.0);
        table.insert(["A", "B"], 6.0);

        let result = check_table(&players, &table);
        assert!(matches!(
            result,
            Err(GameError::IncompleteCoalitionTable {
                players: 2,
                expected: 4,
                found: 3,
            })
        ));
    }

    #[test]
    fn test_check_table_rejects_duplicate_after_normalization() {
        let players = players(&["A", "B"]);
        let mut table = CharacteristicFunction::new();
        table.insert(["A", "B"], 6.0);
        table.insert(["B", "A"], 7.0);

        let result = check_table(&players, &table);
        assert!(matches!(
            result,
            Err(GameError::DuplicateCoalition { coalition }) if coalition == "A, B"
        ));
    }

    #[test]
    fn test_check_table_rejects_unknown_player() {
        let players = players(&["A", "B"]);
        let mut table = CharacteristicFunction::new();
        table.insert(["A", "Zeta"], 3.0);

        let result = check_table(&players, &table);
        assert!(matches!(
            result,
            Err(GameError::UnknownPlayer { player }) if player == "Zeta"
        ));
    }

    #[test]
    fn test_check_table_empty_game() {
        // n = 0: the lattice is the empty coalition alone, defaulted to 0
        // when the table carries no entries at all.
        let values = check_table(&[], &CharacteristicFunction::new()).unwrap();
        assert_eq!(values, vec![0.0]);
    }
}
