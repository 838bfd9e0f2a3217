//! collective CLI tool
//!
//! Queries the sponsor tier model and initiative progress math.
//!
//! Usage:
//!   collective tiers
//!   collective rank <tier>
//!   collective info <tier>
//!   collective access <subject_tier> <required_tier>
//!   collective describe <tier>
//!   collective features [tier]
//!   collective progress <current> <goal>
//!   collective goal <goal>

mod commands;
mod config;
mod error;

use commands::Command;
use config::CliConfig;
use error::CliError;

fn print_usage() {
    eprintln!("collective - Query Collective sponsor tiers and initiative progress");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  collective tiers                           List sponsor tiers");
    eprintln!("  collective rank <tier>                     Rank of a tier (unknown = 0)");
    eprintln!("  collective info <tier>                     Tier name, color, price, benefits");
    eprintln!("  collective access <subject> <required>     Check a tier against a requirement");
    eprintln!("  collective describe <tier>                 Badge and status panel data");
    eprintln!("  collective features [tier]                 Premium features and their tiers");
    eprintln!("  collective progress <current> <goal>       Progress toward a participant goal");
    eprintln!("  collective goal <goal>                     Validate a participant goal");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  COLLECTIVE_OUTPUT    text or json (default: text)");
    eprintln!("  COLLECTIVE_HEADLINE  Benefits shown before \"+N more\" (default: 2)");
    eprintln!("  COLLECTIVE_LOG       Log filter, falls back to RUST_LOG (default: warn)");
}

fn main() {
    collective_logging::init("warn");

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() || matches!(args[0].as_str(), "-h" | "--help" | "help") {
        print_usage();
        std::process::exit(if args.is_empty() { 1 } else { 0 });
    }

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = Command::parse(&args).and_then(|cmd| commands::run(&cmd, &config));

    match result {
        Ok(output) => print!("{}", output),
        Err(CliError::Usage(message)) => {
            eprintln!("Error: {}", message);
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
        Err(e) => {
            if let CliError::Tier(collective_tiers::Error::NotFound(_)) = &e {
                tracing::warn!(error = %e, "tier lookup on undeclared tier");
            }
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
