//! Command-line Simulator
//!
//! Finds the best split for thirteen cards given as tokens.
//!
//! ```text
//! simulate AS AD KH KC 9S 9D 7H 5C 4S 3D 2H JC QS --iterations 20000
//! ```

use anyhow::Context;
use clap::Parser;
use pusoy::api::SimulateResponse;
use pusoy::cards::Card;
use pusoy::simulation::Simulation;

#[derive(Parser)]
#[command(author, version, about = "Best three-row split for a thirteen-card hand", long_about = None)]
struct Args {
    /// Thirteen card tokens, rank then suit, like AH or TD
    #[arg(required = true, num_args = 1..)]
    cards: Vec<String>,
    /// Random opponent deals per candidate split
    #[arg(short, long, default_value_t = pusoy::DEFAULT_ITERATIONS)]
    iterations: usize,
    /// Fix the random source for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if !args.json {
        pusoy::log();
    }
    let cards = Card::parse(&args.cards.join(" "))
        .map_err(anyhow::Error::msg)
        .context("parsing cards")?;
    let simulation = Simulation::new(&cards, args.iterations)?;
    let simulation = match args.seed {
        Some(seed) => simulation.seeded(seed),
        None => simulation,
    };
    let outcome = simulation.run()?;
    match args.json {
        true => println!("{}", serde_json::to_string_pretty(&SimulateResponse::from(outcome))?),
        false => println!("{}", outcome),
    }
    Ok(())
}
