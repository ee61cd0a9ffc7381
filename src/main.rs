use clap::Parser;

use hazard_triage::config::Args;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    hazard_triage::run(args)
}
