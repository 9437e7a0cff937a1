use clap::Parser;
use expedition_core::config::GameConfig;
use expedition_io::{read_json_file, verify_claim, GameClaim};

#[derive(Parser, Debug)]
#[command(author, version, about = "Re-executes a claimed game and compares the result", long_about = None)]
struct Args {
    #[arg(short, long, default_value = "claim.json")]
    claim: String,

    /// Rule set to verify against; defaults to the canonical rules.
    #[arg(long)]
    config: Option<String>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    expedition_core::init_logging();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::from_toml(&std::fs::read_to_string(path)?)?,
        None => GameConfig::default(),
    };
    let claim: GameClaim = read_json_file(&args.claim)?;
    let report = verify_claim(&claim, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.is_valid() {
        println!("VERIFICATION SUCCESSFUL");
        println!("Seed:    {}", claim.seed);
        println!("Rounds:  {}", claim.rounds);
        println!("Payout:  {}", claim.payout);
        println!("Digest:  {}", claim.state_digest);
    } else {
        println!("VERIFICATION FAILED");
        for m in &report.mismatches {
            println!("  {:<20} claimed {} but re-execution gives {}", m.field, m.claimed, m.actual);
        }
    }

    if !report.is_valid() {
        std::process::exit(1);
    }
    Ok(())
}
