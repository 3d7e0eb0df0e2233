use slot_machine_core::*;

#[derive(Debug, Default)]
struct Cues {
    sounds: Vec<Sound>,
    pulses: usize,
}

impl PresentationPort for Cues {
    fn play(&mut self, sound: Sound) {
        self.sounds.push(sound);
    }

    fn pulse(&mut self) {
        self.pulses += 1;
    }
}

#[test]
fn scripted_session_walks_through_every_state() {
    let source = ScriptedReelSource::from_indices(&[[2, 2, 2], [1, 3, 5]]).unwrap();
    let mut machine = SlotMachine::new(source, Cues::default(), MemoryStore::new());
    assert_eq!(machine.state().phase(), Phase::Idle);

    machine.spin().unwrap();
    assert_eq!(machine.state().phase(), Phase::Spinning);
    assert_eq!(machine.state().reels().indices(), [2, 2, 2]);

    let outcome = machine.evaluate().unwrap();
    assert_eq!(machine.state().phase(), Phase::Evaluated);
    assert_eq!(
        outcome,
        Outcome::Win {
            payout: 100,
            new_high_score: true
        }
    );
    assert_eq!(machine.state().coins(), 200);
    assert_eq!(machine.state().high_score(), 200);
    assert_eq!(machine.store().saved(), Some(200));

    assert!(!machine.check_game_over());
    assert_eq!(machine.state().phase(), Phase::Idle);

    let outcome = machine.play_round().unwrap();
    assert_eq!(outcome.coin_delta(), -10);
    assert_eq!(machine.state().coins(), 190);
    assert_eq!(machine.state().high_score(), 200);

    assert_eq!(
        machine.presenter().sounds,
        [Sound::Spin, Sound::HighScore, Sound::Spin]
    );
    assert_eq!(machine.presenter().pulses, 2);
}

#[test]
fn seeded_sessions_are_reproducible() {
    let play = |seed| {
        let mut state = GameState::new(0).with_coins(1_000_000);
        let mut source = RandomReelSource::new(seed);
        let stats = simulate(&mut state, &mut source, Bet::Twenty, 2_000);
        (stats, state)
    };

    let (a, state_a) = play(1234);
    let (b, state_b) = play(1234);

    assert_eq!(a, b);
    assert_eq!(state_a, state_b);
    assert_eq!(a.rounds, 2_000);
    assert_eq!(a.wins + a.losses, a.rounds);
    assert_eq!(a.final_coins, 1_000_000 + a.net());
}

#[test]
fn long_run_hit_rate_is_about_one_in_thirty_six() {
    let mut state = GameState::new(0).with_coins(Coins::MAX / 2);
    let mut source = RandomReelSource::new(99);

    let stats = simulate(&mut state, &mut source, Bet::Ten, 72_000);

    let expected = 1.0 / 36.0;
    assert!(
        (stats.hit_rate() - expected).abs() < 0.005,
        "hit rate {} too far from {}",
        stats.hit_rate(),
        expected
    );
}
