use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the next spin.
    Idle,
    /// Reels hold fresh symbols that have not been evaluated yet.
    Spinning,
    /// Win or loss applied, game-over check pending.
    Evaluated,
    GameOver,
}

impl Phase {
    pub const fn is_game_over(self) -> bool {
        matches!(self, Self::GameOver)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Idle
    }
}

/// Coins, bet and score of one play session.
///
/// Every operation is a plain state transition: it never talks to audio, haptics or storage, it returns the
/// [`Effect`]s the caller should dispatch instead. See [`SlotMachine`] for a driver that does the dispatching.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    reels: Reels,
    coins: Coins,
    high_score: Coins,
    bet: Bet,
    phase: Phase,
}

impl GameState {
    /// Fresh session. A negative `high_score` is treated as zero.
    pub fn new(high_score: Coins) -> Self {
        Self {
            reels: Reels::default(),
            coins: STARTING_COINS,
            high_score: high_score.max(0),
            bet: Bet::default(),
            phase: Phase::default(),
        }
    }

    /// Replaces the balance, keeping everything else.
    pub fn with_coins(mut self, coins: Coins) -> Self {
        self.coins = coins;
        self
    }

    pub fn reels(&self) -> Reels {
        self.reels
    }

    pub fn coins(&self) -> Coins {
        self.coins
    }

    pub fn high_score(&self) -> Coins {
        self.high_score
    }

    pub fn bet(&self) -> Bet {
        self.bet
    }

    /// Whether the selector for `bet` is the highlighted one. Exactly one selector is active at any time.
    pub fn is_bet_active(&self, bet: Bet) -> bool {
        self.bet == bet
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase.is_game_over()
    }

    pub fn spin<S: ReelSource + ?Sized>(&mut self, source: &mut S) -> Result<Effects> {
        if self.phase.is_game_over() {
            return Err(GameError::GameOver);
        }

        self.reels = source.draw_reels();
        self.phase = Phase::Spinning;
        log::debug!("spin: {:?}", self.reels.indices());

        Ok(smallvec![Effect::Sound(Sound::Spin), Effect::Haptic])
    }

    pub fn evaluate(&mut self) -> Result<(Outcome, Effects)> {
        if !matches!(self.phase, Phase::Spinning) {
            return Err(GameError::NotSpun);
        }

        let mut effects = Effects::new();
        let outcome = if self.reels.is_jackpot() {
            let payout = self.bet.amount() * PAYOUT_MULTIPLIER;
            self.coins = self.coins.saturating_add(payout);

            let new_high_score = self.coins > self.high_score;
            if new_high_score {
                self.high_score = self.coins;
                effects.push(Effect::SaveHighScore(self.high_score));
                effects.push(Effect::Sound(Sound::HighScore));
            } else {
                effects.push(Effect::Sound(Sound::Win));
            }
            Outcome::Win {
                payout,
                new_high_score,
            }
        } else {
            let stake = self.bet.amount();
            self.coins = self.coins.saturating_sub(stake);
            Outcome::Loss { stake }
        };

        self.phase = Phase::Evaluated;
        log::debug!("evaluate: {:?}, coins: {}", outcome, self.coins);

        Ok((outcome, effects))
    }

    /// Ends the game once the balance is used up. Never clears the flag on its own.
    pub fn check_game_over(&mut self) -> Effects {
        if self.coins <= 0 {
            if self.phase.is_game_over() {
                return Effects::new();
            }
            self.phase = Phase::GameOver;
            log::debug!("game over with {} coins", self.coins);
            return smallvec![Effect::Sound(Sound::GameOver)];
        }

        if matches!(self.phase, Phase::Evaluated) {
            self.phase = Phase::Idle;
        }
        Effects::new()
    }

    pub fn select_bet(&mut self, bet: Bet) -> Effects {
        self.bet = bet;
        log::trace!("bet: {}", bet.amount());
        smallvec![Effect::Sound(Sound::Chips), Effect::Haptic]
    }

    /// Starts over from scratch, wiping the high score as well.
    pub fn reset(&mut self) -> Effects {
        self.high_score = 0;
        let mut effects: Effects = smallvec![Effect::SaveHighScore(0)];
        self.coins = STARTING_COINS;
        effects.extend(self.select_bet(Bet::Ten));
        self.phase = Phase::Idle;
        effects.push(Effect::Sound(Sound::Reset));
        log::debug!("reset");
        effects
    }

    /// Starts another game after running out of coins. Unlike [`GameState::reset`] the high score survives.
    pub fn new_game(&mut self) -> Effects {
        let effects = self.select_bet(Bet::Ten);
        self.coins = STARTING_COINS;
        self.phase = Phase::Idle;
        log::debug!("new game, high score: {}", self.high_score);
        effects
    }

    /// What the spin button does: spin, evaluate, then check for game over.
    pub fn play_round<S: ReelSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<(Outcome, Effects)> {
        let mut effects = self.spin(source)?;
        let (outcome, evaluated) = self.evaluate()?;
        effects.extend(evaluated);
        effects.extend(self.check_game_over());
        Ok((outcome, effects))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(0)
    }
}
