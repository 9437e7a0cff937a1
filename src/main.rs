use anyhow::Result;
use clap::{Parser, Subcommand};
use expedition_lib::app::{self, RunOptions};
use expedition_lib::model::Seed;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a game, or resume one from a snapshot
    Run(RunArgs),
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    /// 32-byte seed as 64 hex characters, optionally 0x-prefixed
    #[arg(short, long)]
    seed: Seed,

    /// Rounds to play now; defaults to the rest of the game
    #[arg(short, long)]
    rounds: Option<u32>,

    /// Rounds per batch between progress reports
    #[arg(short, long, default_value_t = 10)]
    batch: u32,

    /// Custom rules file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Snapshot to resume from (if present) and to write afterwards
    #[arg(long)]
    save: Option<PathBuf>,

    /// Where to write the result claim
    #[arg(long)]
    claim: Option<PathBuf>,

    /// Print the terrain with agent positions
    #[arg(long)]
    map: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl From<&RunArgs> for RunOptions {
    fn from(args: &RunArgs) -> Self {
        Self {
            seed: args.seed,
            rounds: args.rounds,
            batch: args.batch,
            config_path: args.config.clone(),
            save_path: args.save.clone(),
            claim_path: args.claim.clone(),
        }
    }
}

fn main() -> Result<()> {
    expedition_lib::model::init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Run(args) => {
            let (sim, report) = app::run(&RunOptions::from(&args))?;

            if args.map {
                for row in app::render_map(&sim) {
                    println!("{row}");
                }
            }

            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                if let Some(round) = report.resumed_from {
                    println!("Resumed from round {round}");
                }
                println!("Seed:      {}", report.seed);
                println!(
                    "Round:     {}{}",
                    report.result.rounds,
                    if report.finished { " (finished)" } else { "" }
                );
                println!("Agents:    {}", report.result.agent_count);
                println!("Tiles:     {}", report.result.tiles_discovered);
                println!("Mushrooms: {}", report.result.mushrooms_found);
                println!("Payout:    {}", report.result.payout);
                println!("Digest:    {}", report.state_digest);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "0x000000000000000000000000000000000000000000000000000000000000002a";

    #[test]
    fn test_run_args_defaults() {
        let cli = Cli::parse_from(["expedition", "run", "--seed", SEED]);
        let Command::Run(args) = cli.command;
        assert_eq!(args.seed, Seed::from_u64(42));
        assert_eq!(args.rounds, None);
        assert_eq!(args.batch, 10);
        assert!(!args.map && !args.json);
    }

    #[test]
    fn test_run_args_custom() {
        let cli = Cli::parse_from([
            "expedition", "run", "-s", SEED, "-r", "40", "-b", "5", "--save", "run.json.gz", "--claim",
            "claim.json", "--json",
        ]);
        let Command::Run(args) = cli.command;
        let options = RunOptions::from(&args);
        assert_eq!(options.rounds, Some(40));
        assert_eq!(options.batch, 5);
        assert_eq!(options.save_path, Some(PathBuf::from("run.json.gz")));
        assert!(args.json);
    }

    #[test]
    fn test_bad_seed_is_rejected() {
        assert!(Cli::try_parse_from(["expedition", "run", "--seed", "0x12"]).is_err());
    }
}
