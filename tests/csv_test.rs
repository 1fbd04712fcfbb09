#![cfg(feature = "serde")]

use coop_games::{CharacteristicFunction, CooperativeGame};
use std::fs;
use std::path::PathBuf;

fn write_temp_csv(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("coop_games_{}_{}.csv", name, std::process::id()));
    fs::write(&path, contents).expect("temp CSV should be writable");
    path
}

#[test]
fn test_game_from_csv_file() {
    let path = write_temp_csv(
        "two_player",
        "Coalition,Value\n,0\nA,1\nB,2\nA;B,6\n",
    );

    let table = CharacteristicFunction::from_csv(&path).unwrap();
    fs::remove_file(&path).ok();

    let players = table.players();
    assert_eq!(players, vec!["A", "B"]);

    let mut game = CooperativeGame::new(players, &table, true).unwrap();
    let shapley = game.shapley();
    assert!((shapley["A"] - 2.5).abs() < 1e-9);
    assert!((shapley["B"] - 3.5).abs() < 1e-9);
}

#[test]
fn test_csv_omitted_empty_coalition_defaults() {
    let path = write_temp_csv("no_empty", "Coalition,Value\nA,1\nB,2\nA;B,6\n");

    let table = CharacteristicFunction::from_csv(&path).unwrap();
    fs::remove_file(&path).ok();

    let game = CooperativeGame::new(table.players(), &table, true).unwrap();
    assert_eq!(game.coalition_value(Vec::<String>::new()).unwrap(), 0.0);
}

#[test]
fn test_missing_csv_file_is_invalid_input() {
    let path = std::env::temp_dir().join("coop_games_does_not_exist.csv");
    let result = CharacteristicFunction::from_csv(&path);
    assert!(matches!(
        result,
        Err(coop_games::GameError::InvalidInput(_))
    ));
}
