use coop_games::{CharacteristicFunction, CooperativeGame};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Synthetic superadditive game: each player carries a standalone weight and
/// every coalition earns a quadratic cooperation bonus.
fn generate_game(n_players: usize) -> (Vec<String>, CharacteristicFunction) {
    let players: Vec<String> = (0..n_players).map(|i| format!("P{i:02}")).collect();

    let mut table = CharacteristicFunction::new();
    for mask in 1usize..(1 << n_players) {
        let members: Vec<String> = players
            .iter()
            .enumerate()
            .filter(|(k, _)| mask >> k & 1 == 1)
            .map(|(_, p)| p.clone())
            .collect();
        let base: f64 = (0..n_players)
            .filter(|k| mask >> k & 1 == 1)
            .map(|k| 10.0 + k as f64)
            .sum();
        let size = members.len() as f64;
        table.insert(members, base + size * size);
    }

    (players, table)
}

/// Benchmark both solvers across growing player counts
fn benchmark_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("coalition_solvers");

    let configs = vec![(2, 100), (4, 100), (8, 60), (12, 30), (16, 10)];

    for (n_players, sample_size) in configs {
        group.sample_size(sample_size);

        let (players, table) = generate_game(n_players);
        let game = CooperativeGame::new(players, &table, true)
            .expect("generated table covers the lattice");

        group.bench_with_input(
            BenchmarkId::new("shapley", n_players),
            &n_players,
            |b, _| {
                b.iter(|| {
                    let mut game = black_box(game.clone());
                    game.shapley()
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("banzhaf", n_players),
            &n_players,
            |b, _| {
                b.iter(|| {
                    let mut game = black_box(game.clone());
                    game.banzhaf(true)
                })
            },
        );
    }

    group.finish();
}

/// Benchmark construction; validation walks the full table once
fn benchmark_construction(c: &mut Criterion) {
    let (players, table) = generate_game(12);

    c.bench_function("construct_and_validate", |b| {
        b.iter(|| CooperativeGame::new(black_box(players.clone()), black_box(&table), true))
    });
}

criterion_group!(benches, benchmark_solvers, benchmark_construction);
criterion_main!(benches);
