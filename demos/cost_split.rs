use coop_games::{CooperativeGame, Result, SolutionKind};

fn main() -> Result<()> {
    // Three towns sharing one water network; entries are standalone and joint
    // construction costs. The empty coalition is omitted and defaults to 0.
    let mut game = CooperativeGame::builder(["Avon", "Barton", "Claremont"])
        .value(["Avon"], 120.0)
        .value(["Barton"], 140.0)
        .value(["Claremont"], 180.0)
        .value(["Avon", "Barton"], 200.0)
        .value(["Avon", "Claremont"], 240.0)
        .value(["Barton", "Claremont"], 260.0)
        .value(["Avon", "Barton", "Claremont"], 300.0)
        .build()?;

    game.shapley();
    game.banzhaf(true);

    let shapley = game.solution(SolutionKind::Shapley);
    let banzhaf = game.solution(SolutionKind::Banzhaf);

    println!("{:>10}  {:>10}  {:>12}", "Town", "Shapley", "Banzhaf*");
    for player in game.players() {
        println!(
            "{:>10}  {:>10.4}  {:>12.4}",
            player, shapley[player], banzhaf[player]
        );
    }
    println!("\n(*standardized to the joint cost of {})", game.grand_coalition_value());

    Ok(())
}
