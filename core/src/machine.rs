use crate::*;

/// Drives a [`GameState`] and hands every effect it emits to the presentation and persistence ports.
#[derive(Debug)]
pub struct SlotMachine<R, V, P> {
    state: GameState,
    source: R,
    presenter: V,
    store: P,
}

impl<R, V, P> SlotMachine<R, V, P>
where
    R: ReelSource,
    V: PresentationPort,
    P: PersistencePort,
{
    /// Starts a session with the stored high score, or zero when the store can't provide one.
    pub fn new(source: R, presenter: V, store: P) -> Self {
        let high_score = match store.load_high_score() {
            Ok(score) if score >= 0 => score,
            Ok(score) => {
                log::warn!("stored high score {} is negative, starting from 0", score);
                0
            }
            Err(err) => {
                log::warn!("could not load high score, starting from 0: {}", err);
                0
            }
        };
        log::debug!("loaded high score: {}", high_score);

        Self {
            state: GameState::new(high_score),
            source,
            presenter,
            store,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn presenter(&self) -> &V {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut V {
        &mut self.presenter
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    pub fn spin(&mut self) -> Result<()> {
        let effects = self.state.spin(&mut self.source)?;
        self.dispatch(effects);
        Ok(())
    }

    pub fn evaluate(&mut self) -> Result<Outcome> {
        let (outcome, effects) = self.state.evaluate()?;
        self.dispatch(effects);
        Ok(outcome)
    }

    /// Returns whether the game is over afterwards.
    pub fn check_game_over(&mut self) -> bool {
        let effects = self.state.check_game_over();
        self.dispatch(effects);
        self.state.is_game_over()
    }

    pub fn select_bet(&mut self, bet: Bet) {
        let effects = self.state.select_bet(bet);
        self.dispatch(effects);
    }

    pub fn reset(&mut self) {
        let effects = self.state.reset();
        self.dispatch(effects);
    }

    pub fn new_game(&mut self) {
        let effects = self.state.new_game();
        self.dispatch(effects);
    }

    pub fn play_round(&mut self) -> Result<Outcome> {
        let (outcome, effects) = self.state.play_round(&mut self.source)?;
        self.dispatch(effects);
        Ok(outcome)
    }

    fn dispatch(&mut self, effects: Effects) {
        for effect in effects {
            match effect {
                Effect::Sound(sound) => self.presenter.play(sound),
                Effect::Haptic => self.presenter.pulse(),
                Effect::SaveHighScore(high_score) => {
                    if let Err(err) = self.store.save_high_score(high_score) {
                        log::warn!("could not save high score {}: {}", high_score, err);
                    }
                }
            }
        }
    }
}
