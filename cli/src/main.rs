use anyhow::Result;
use clap::{Parser, Subcommand};
use slot_machine_core::Bet;
use std::time::{SystemTime, UNIX_EPOCH};

mod play;
mod presenter;
mod simulate;
mod store;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play interactively in the terminal
    Play(play::PlayArgs),
    /// Run a batch of rounds and report statistics
    Simulate(simulate::SimulateArgs),
}

/// Accepts the two stakes the machine offers.
fn parse_bet(value: &str) -> Result<Bet, String> {
    value
        .parse()
        .ok()
        .and_then(Bet::from_amount)
        .ok_or_else(|| format!("bet must be 10 or 20, got {:?}", value))
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    match cli.command {
        Command::Play(args) => play::run(args),
        Command::Simulate(args) => simulate::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bet_parser_only_accepts_offered_stakes() {
        assert_eq!(parse_bet("10"), Ok(Bet::Ten));
        assert_eq!(parse_bet("20"), Ok(Bet::Twenty));
        assert!(parse_bet("15").is_err());
        assert!(parse_bet("ten").is_err());
    }

    #[test]
    fn cli_parses_simulate_flags() {
        let cli = Cli::try_parse_from([
            "slot-machine",
            "-v",
            "simulate",
            "--seed",
            "7",
            "--rounds",
            "50",
            "--bet",
            "20",
            "--json",
        ])
        .unwrap();

        let Command::Simulate(args) = cli.command else {
            panic!("expected simulate");
        };
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.rounds, 50);
        assert_eq!(args.bet, Bet::Twenty);
        assert!(args.json);
    }
}
