use serde::{Deserialize, Serialize};

use crate::*;

/// Totals gathered over a batch of rounds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpinStats {
    pub rounds: u64,
    pub wins: u64,
    pub losses: u64,
    pub new_high_scores: u64,
    /// Sum of all payouts.
    pub paid: Coins,
    /// Sum of all stakes lost.
    pub lost: Coins,
    pub peak_coins: Coins,
    pub final_coins: Coins,
    pub game_over: bool,
}

impl SpinStats {
    pub fn record(&mut self, outcome: Outcome, coins_after: Coins) {
        self.rounds += 1;
        match outcome {
            Outcome::Win {
                payout,
                new_high_score,
            } => {
                self.wins += 1;
                self.paid += payout;
                if new_high_score {
                    self.new_high_scores += 1;
                }
            }
            Outcome::Loss { stake } => {
                self.losses += 1;
                self.lost += stake;
            }
        }
        self.peak_coins = self.peak_coins.max(coins_after);
        self.final_coins = coins_after;
    }

    pub fn net(&self) -> Coins {
        self.paid - self.lost
    }

    /// Fraction of rounds that paid out.
    pub fn hit_rate(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        self.wins as f64 / self.rounds as f64
    }

    /// Payouts per coin lost.
    pub fn return_ratio(&self) -> f64 {
        if self.lost == 0 {
            return 0.0;
        }
        self.paid as f64 / self.lost as f64
    }
}

/// Plays up to `rounds` rounds at a fixed bet, stopping early on game over.
pub fn simulate<S: ReelSource + ?Sized>(
    state: &mut GameState,
    source: &mut S,
    bet: Bet,
    rounds: u64,
) -> SpinStats {
    state.select_bet(bet);
    state.check_game_over();

    let mut stats = SpinStats {
        peak_coins: state.coins(),
        final_coins: state.coins(),
        ..Default::default()
    };

    for _ in 0..rounds {
        if state.is_game_over() {
            break;
        }
        match state.play_round(source) {
            Ok((outcome, _)) => stats.record(outcome, state.coins()),
            Err(err) => {
                log::debug!("simulation stopped: {}", err);
                break;
            }
        }
    }

    stats.game_over = state.is_game_over();
    log::debug!(
        "simulated {} rounds: {} wins, net {}",
        stats.rounds,
        stats.wins,
        stats.net()
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_at_game_over() {
        let mut state = GameState::default();
        let mut source = ScriptedReelSource::from_indices(&[[0, 1, 2]]).unwrap();

        let stats = simulate(&mut state, &mut source, Bet::Twenty, 100);

        assert_eq!(stats.rounds, 5);
        assert_eq!(stats.losses, 5);
        assert_eq!(stats.lost, 100);
        assert_eq!(stats.final_coins, 0);
        assert_eq!(stats.peak_coins, STARTING_COINS);
        assert!(stats.game_over);
    }

    #[test]
    fn counts_wins_and_high_scores() {
        let mut state = GameState::new(250);
        let mut source =
            ScriptedReelSource::from_indices(&[[1, 1, 1], [1, 1, 2], [3, 3, 3]]).unwrap();

        let stats = simulate(&mut state, &mut source, Bet::Ten, 3);

        assert_eq!(stats.rounds, 3);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.new_high_scores, 1);
        assert_eq!(stats.net(), 190);
        assert_eq!(stats.final_coins, 290);
        assert_eq!(stats.peak_coins, 290);
        assert!(!stats.game_over);
        assert_eq!(state.high_score(), 290);
    }

    #[test]
    fn broke_start_plays_nothing() {
        let mut state = GameState::default().with_coins(0);
        let mut source = ScriptedReelSource::from_indices(&[[5, 5, 5]]).unwrap();

        let stats = simulate(&mut state, &mut source, Bet::Ten, 10);

        assert_eq!(stats.rounds, 0);
        assert_eq!(stats.final_coins, 0);
        assert!(stats.game_over);
        assert_eq!(state.coins(), 0);
    }

    #[test]
    fn ratios_handle_empty_batches() {
        let stats = SpinStats::default();

        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.return_ratio(), 0.0);
    }
}
