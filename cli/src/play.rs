use anyhow::{Result, bail};
use clap::Args;
use slot_machine_core::{
    Bet, GameError, GameState, PersistencePort, PresentationPort, RandomReelSource, ReelSource,
    SlotMachine, Sound,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::presenter::TerminalPresenter;
use crate::store::JsonFileStore;

const HELP: &str = "\
commands:
  spin, s, <enter>   spin the reels
  bet 10|20          choose the stake
  new                start a new game, keeping the high score
  reset              start over and erase the high score
  info               about this game
  quit, q            leave
";

const GAME_OVER: &str = "\
*** GAME OVER ***
Bad luck. You lost all your coins.
Type `new` to play again.
";

#[derive(Args, Debug)]
pub(crate) struct PlayArgs {
    /// Force a seed instead of using the clock
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// File the high score is kept in
    #[arg(long, default_value = "slot-machine.json")]
    pub store: PathBuf,

    /// Don't ring the terminal bell as haptic feedback
    #[arg(long)]
    pub no_bell: bool,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Command {
    Spin,
    Bet(Bet),
    NewGame,
    Reset,
    Info,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command> {
    use Command::*;

    let mut words = line.split_whitespace();
    Ok(match (words.next(), words.next()) {
        (None, _) | (Some("spin" | "s"), None) => Spin,
        (Some("bet" | "b"), Some(amount)) => {
            Bet(crate::parse_bet(amount).map_err(anyhow::Error::msg)?)
        }
        (Some("new"), None) => NewGame,
        (Some("reset"), None) => Reset,
        (Some("info" | "i"), None) => Info,
        (Some("help" | "h" | "?"), None) => Help,
        (Some("quit" | "q" | "exit"), None) => Quit,
        _ => bail!("unknown command {:?}, try `help`", line.trim()),
    })
}

fn render(state: &GameState) -> String {
    let reels = state
        .reels()
        .symbols()
        .iter()
        .map(|symbol| format!("{:^12}", symbol.name()))
        .collect::<Vec<_>>()
        .join("|");
    let bets = Bet::ALL
        .iter()
        .map(|&bet| {
            if state.is_bet_active(bet) {
                format!("[{}]", bet.amount())
            } else {
                format!(" {} ", bet.amount())
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let rule = "-".repeat(reels.len());

    format!(
        "+{rule}+\n|{reels}|\n+{rule}+\ncoins: {}  high score: {}  bet: {}\n",
        state.coins(),
        state.high_score(),
        bets
    )
}

fn about() -> String {
    format!(
        "Slot Machine {}\nLine up three matching symbols to win ten times your bet.\n",
        env!("CARGO_PKG_VERSION")
    )
}

pub(crate) fn run(args: PlayArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(crate::clock_seed);
    log::info!("reel seed: {}", seed);

    let store = JsonFileStore::new(&args.store);
    log::debug!("high score file: {}", store.path().display());

    let presenter = TerminalPresenter::new(io::stdout(), !args.no_bell);
    let mut machine = SlotMachine::new(RandomReelSource::new(seed), presenter, store);

    session(&mut machine, io::stdin().lock(), io::stdout())
}

/// Reads commands line by line until `quit` or end of input.
fn session<R, V, P, I, W>(machine: &mut SlotMachine<R, V, P>, input: I, mut out: W) -> Result<()>
where
    R: ReelSource,
    V: PresentationPort,
    P: PersistencePort,
    I: BufRead,
    W: Write,
{
    machine.presenter_mut().play(Sound::ReelRise);
    write!(out, "{}> ", render(machine.state()))?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => apply(machine, command, &mut out)?,
            Err(err) => writeln!(out, "{}", err)?,
        }
        write!(out, "> ")?;
        out.flush()?;
    }

    writeln!(
        out,
        "\nfinal coins: {}, high score: {}",
        machine.state().coins(),
        machine.state().high_score()
    )?;
    Ok(())
}

fn apply<R, V, P, W>(
    machine: &mut SlotMachine<R, V, P>,
    command: Command,
    out: &mut W,
) -> Result<()>
where
    R: ReelSource,
    V: PresentationPort,
    P: PersistencePort,
    W: Write,
{
    use Command::*;

    match command {
        Spin => match machine.play_round() {
            Ok(outcome) => {
                log::debug!("outcome: {:?}", outcome);
                write!(out, "{}", render(machine.state()))?;
                if machine.state().is_game_over() {
                    write!(out, "{}", GAME_OVER)?;
                }
            }
            Err(GameError::GameOver) => {
                writeln!(out, "Game over. Type `new` for a new game or `reset` to start over.")?
            }
            Err(err) => return Err(err.into()),
        },
        Bet(bet) => {
            machine.select_bet(bet);
            write!(out, "{}", render(machine.state()))?;
        }
        NewGame => {
            machine.new_game();
            write!(out, "{}", render(machine.state()))?;
        }
        Reset => {
            machine.reset();
            write!(out, "{}", render(machine.state()))?;
        }
        Info => write!(out, "{}", about())?,
        Help => write!(out, "{}", HELP)?,
        Quit => {}
    }
    Ok(())
}
