//! Plinko Fair CLI
//!
//! Mint commitments, play rounds and verify revealed rounds from the
//! command line. Results go to stdout as JSON, logs to stderr.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use plinko_fair::{
    config::CliConfig, random_token, run_round, verify_round, RoundCommitment, StoredRound,
    VERSION,
};

#[derive(Parser)]
#[command(name = "plinko-fair", version, about = "Provably fair Plinko engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a fresh random hex token
    Token {
        /// Token length in bytes (defaults to PLINKO_SEED_BYTES)
        #[arg(long)]
        bytes: Option<usize>,
    },
    /// Mint a server seed, nonce and commit hash
    Commit {
        /// Server seed length in bytes (defaults to PLINKO_SEED_BYTES)
        #[arg(long)]
        seed_bytes: Option<usize>,
    },
    /// Play a round and print the outcome
    Play(RoundArgs),
    /// Recompute a revealed round and compare it against published values
    Verify {
        #[command(flatten)]
        round: RoundArgs,
        /// Published commit hash
        #[arg(long)]
        commit_hash: Option<String>,
        /// Published combined seed
        #[arg(long)]
        combined_seed: Option<String>,
        /// Published board hash
        #[arg(long)]
        board_hash: Option<String>,
        /// Published bin index
        #[arg(long)]
        bin_index: Option<usize>,
    },
}

#[derive(Args)]
struct RoundArgs {
    /// Revealed server seed
    #[arg(long)]
    server_seed: String,
    /// Player's client seed
    #[arg(long)]
    client_seed: String,
    /// Round nonce
    #[arg(long)]
    nonce: String,
    /// Drop column in [0, 12] (defaults to PLINKO_DROP_COLUMN)
    #[arg(long, allow_hyphen_values = true)]
    drop_column: Option<i32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyOutput<'a> {
    #[serde(flatten)]
    verification: &'a plinko_fair::RoundVerification,
    is_valid: bool,
    mismatches: &'a [plinko_fair::proof::Mismatch],
}

fn main() -> Result<()> {
    let (config, warnings) = CliConfig::from_env();

    // Initialize logging
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    for warning in &warnings {
        warn!("{}", warning);
    }

    let cli = Cli::parse();
    info!("Plinko Fair v{}", VERSION);

    match cli.command {
        Commands::Token { bytes } => {
            let token = random_token(bytes.unwrap_or(config.seed_bytes));
            println!("{}", token);
        }
        Commands::Commit { seed_bytes } => {
            let commitment = RoundCommitment::generate(seed_bytes.unwrap_or(config.seed_bytes));
            info!(commit = %commitment.commit_hash, "Minted commitment");
            print_json(&commitment)?;
        }
        Commands::Play(args) => {
            let column = args.drop_column.unwrap_or(config.default_drop_column);
            let outcome = run_round(&args.server_seed, &args.client_seed, &args.nonce, column)
                .context("Failed to play round")?;
            info!(bin = outcome.bin_index, multiplier = outcome.payout_multiplier, "Round played");
            print_json(&outcome)?;
        }
        Commands::Verify {
            round,
            commit_hash,
            combined_seed,
            board_hash,
            bin_index,
        } => {
            let column = round.drop_column.unwrap_or(config.default_drop_column);
            let verification =
                verify_round(&round.server_seed, &round.client_seed, &round.nonce, column)
                    .context("Failed to verify round")?;

            // Only fields the caller supplied are compared
            let stored = StoredRound {
                commit_hash: commit_hash.unwrap_or_else(|| verification.commit_hash.clone()),
                combined_seed: combined_seed.or_else(|| Some(verification.combined_seed.clone())),
                board_hash: board_hash.or_else(|| Some(verification.board_hash.clone())),
                bin_index: bin_index.or(Some(verification.bin_index)),
            };
            let report = verification.compare(&stored);

            print_json(&VerifyOutput {
                verification: &verification,
                is_valid: report.is_valid(),
                mismatches: &report.mismatches,
            })?;

            if !report.is_valid() {
                error!("Round does NOT verify ({} mismatches)", report.mismatches.len());
                std::process::exit(1);
            }
            info!("Round verified");
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to encode output")?;
    println!("{}", json);
    Ok(())
}
