use coop_games::{CooperativeGame, Result, SolutionKind};

fn main() -> Result<()> {
    // Weighted-voting board with weights 3/2/2 and quota 4: a coalition is
    // worth 1 exactly when it carries the vote.
    let mut game = CooperativeGame::builder(["North", "East", "West"])
        .value(["North"], 0.0)
        .value(["East"], 0.0)
        .value(["West"], 0.0)
        .value(["North", "East"], 1.0)
        .value(["North", "West"], 1.0)
        .value(["East", "West"], 1.0)
        .value(["North", "East", "West"], 1.0)
        .build()?;

    game.shapley();
    game.banzhaf(false);
    game.normalize(&[SolutionKind::Banzhaf]);

    let shapley = game.solution(SolutionKind::Shapley);
    let power = game.solution(SolutionKind::Banzhaf);

    println!("{:>8}  {:>10}  {:>14}", "Member", "Shapley", "Banzhaf share");
    for player in game.players() {
        println!(
            "{:>8}  {:>10.4}  {:>14.4}",
            player, shapley[player], power[player]
        );
    }

    Ok(())
}
