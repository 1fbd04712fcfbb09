use clap::Parser;
use coop_games::{CharacteristicFunction, CooperativeGame, GameError, Result, SolutionKind};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tabled::Table;

/// Compute Shapley and Banzhaf allocations from a characteristic-function CSV
#[derive(Parser)]
#[command(name = "allocate")]
struct Args {
    /// CSV file with Coalition,Value rows; a coalition cell is a
    /// ;-separated player list, empty for the empty coalition
    table: PathBuf,

    /// Treat the game as value maximization instead of cost minimization
    #[arg(long)]
    maximize: bool,

    /// Rescale Banzhaf indices so they sum to the grand coalition value
    #[arg(long)]
    standardize: bool,

    /// Report normalized shares of 1 instead of absolute allocations
    #[arg(long)]
    shares: bool,

    /// Emit the solution tables as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let table = CharacteristicFunction::from_csv(&args.table)?;
    let players = table.players();
    let mut game = CooperativeGame::new(players, &table, !args.maximize)?;

    game.shapley();
    game.banzhaf(args.standardize);
    if args.shares {
        game.normalize(&SolutionKind::ALL);
    }

    if args.json {
        let report: BTreeMap<String, Vec<_>> = SolutionKind::ALL
            .iter()
            .map(|&kind| (kind.to_string(), game.allocations(kind)))
            .collect();
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| GameError::InvalidInput(e.to_string()))?;
        println!("{rendered}");
    } else {
        for kind in SolutionKind::ALL {
            println!("{kind}");
            println!("{}", Table::new(game.allocations(kind)));
            println!();
        }
    }

    Ok(())
}
