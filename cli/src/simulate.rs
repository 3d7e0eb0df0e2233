use anyhow::Result;
use clap::Args;
use serde::Serialize;
use slot_machine_core::{
    self as slot, Bet, Coins, GameState, RandomReelSource, ReelSource, SpinStats,
};
use std::io::{self, Write};

#[derive(Args, Debug)]
pub(crate) struct SimulateArgs {
    /// Force a seed instead of using the clock
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Maximum number of rounds to play
    #[arg(short, long, default_value_t = 1_000)]
    pub rounds: u64,

    /// Stake for every round
    #[arg(short, long, default_value = "10", value_parser = crate::parse_bet)]
    pub bet: Bet,

    /// Starting balance
    #[arg(short, long, default_value_t = slot::STARTING_COINS)]
    pub coins: Coins,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    seed: u64,
    bet: Coins,
    starting_coins: Coins,
    #[serde(flatten)]
    stats: SpinStats,
    hit_rate: f64,
    return_ratio: f64,
}

impl Report {
    fn new(seed: u64, bet: Bet, starting_coins: Coins, stats: SpinStats) -> Self {
        Self {
            seed,
            bet: bet.amount(),
            starting_coins,
            hit_rate: stats.hit_rate(),
            return_ratio: stats.return_ratio(),
            stats,
        }
    }

    fn write_text(&self, out: &mut impl Write) -> io::Result<()> {
        let stats = &self.stats;
        writeln!(out, "seed:          {}", self.seed)?;
        writeln!(out, "bet:           {}", self.bet)?;
        writeln!(out, "rounds:        {}", stats.rounds)?;
        writeln!(
            out,
            "wins:          {} ({:.2}%)",
            stats.wins,
            self.hit_rate * 100.0
        )?;
        writeln!(out, "losses:        {}", stats.losses)?;
        writeln!(out, "paid / lost:   {} / {}", stats.paid, stats.lost)?;
        writeln!(out, "return ratio:  {:.3}", self.return_ratio)?;
        writeln!(
            out,
            "coins:         {} -> {} (peak {})",
            self.starting_coins, stats.final_coins, stats.peak_coins
        )?;
        if stats.game_over {
            writeln!(out, "ran out of coins")?;
        }
        Ok(())
    }
}

fn simulate<S: ReelSource>(args: &SimulateArgs, source: &mut S) -> SpinStats {
    let mut state = GameState::new(0).with_coins(args.coins);
    slot::simulate(&mut state, source, args.bet, args.rounds)
}

fn seeded_report(args: &SimulateArgs, seed: u64) -> Report {
    let mut source = RandomReelSource::new(seed);
    let stats = simulate(args, &mut source);
    Report::new(source.seed(), args.bet, args.coins, stats)
}

pub(crate) fn run(args: SimulateArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(crate::clock_seed);
    log::info!("simulating {} rounds with seed {}", args.rounds, seed);

    let report = seeded_report(&args, seed);

    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        report.write_text(&mut out)?;
    }
    Ok(())
}
