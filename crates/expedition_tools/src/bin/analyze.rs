use clap::Parser;
use expedition_core::config::GameConfig;
use expedition_core::Simulation;
use expedition_data::{GameResult, Seed};
use rayon::prelude::*;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(author, version, about = "Plays many seeds and summarises payouts", long_about = None)]
struct Args {
    /// Number of consecutive seeds to evaluate.
    #[arg(short = 'n', long, default_value_t = 100)]
    seeds: u64,

    /// First seed, as an integer.
    #[arg(short, long, default_value_t = 0)]
    start: u64,

    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    json: bool,
}

#[derive(Debug, Default, PartialEq, Serialize)]
struct Summary {
    games: usize,
    min_payout: u128,
    max_payout: u128,
    mean_payout: u128,
    mean_tiles: f64,
    mean_mushrooms: f64,
    best_seed: Option<Seed>,
}

fn summarise(results: &[(Seed, GameResult)]) -> Summary {
    if results.is_empty() {
        return Summary::default();
    }
    let games = results.len();
    let total: u128 = results.iter().map(|(_, r)| r.payout).sum();
    let tiles: u64 = results.iter().map(|(_, r)| r.tiles_discovered).sum();
    let mushrooms: u64 = results.iter().map(|(_, r)| r.mushrooms_found).sum();
    let best = results.iter().max_by_key(|(_, r)| r.payout);

    Summary {
        games,
        min_payout: results.iter().map(|(_, r)| r.payout).min().unwrap_or(0),
        max_payout: best.map_or(0, |(_, r)| r.payout),
        mean_payout: total / games as u128,
        mean_tiles: tiles as f64 / games as f64,
        mean_mushrooms: mushrooms as f64 / games as f64,
        best_seed: best.map(|(s, _)| *s),
    }
}

fn main() -> anyhow::Result<()> {
    expedition_core::init_logging();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::from_toml(&std::fs::read_to_string(path)?)?,
        None => GameConfig::default(),
    };

    // Each game stays sequential; only independent seeds run in parallel.
    let results = (args.start..args.start.saturating_add(args.seeds))
        .into_par_iter()
        .map(|n| -> anyhow::Result<(Seed, GameResult)> {
            let seed = Seed::from_u64(n);
            let mut sim = Simulation::new(seed, config.clone())?;
            Ok((seed, sim.run_to_completion()?))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let summary = summarise(&results);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Games:          {}", summary.games);
        println!("Payout min:     {}", summary.min_payout);
        println!("Payout mean:    {}", summary.mean_payout);
        println!("Payout max:     {}", summary.max_payout);
        println!("Tiles mean:     {:.1}", summary.mean_tiles);
        println!("Mushrooms mean: {:.1}", summary.mean_mushrooms);
        if let Some(seed) = summary.best_seed {
            println!("Best seed:      {}", seed);
        }
    }
    Ok(())
}
