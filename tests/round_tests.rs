use guess_number::{
    ConfigError, Direction, GameEvent, GuessError, GuessFeedback, HintTier, InputError,
    RoundConfig, RoundEngine, RoundOutcome, RoundResult, RoundStatus, ScriptedPlayer,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn standard() -> RoundConfig {
    RoundConfig::new(1, 100, 10).unwrap()
}

#[test]
fn test_config_rejects_empty_range_and_zero_attempts() {
    assert_eq!(
        RoundConfig::new(5, 5, 3).unwrap_err(),
        ConfigError::EmptyRange { min: 5, max: 5 }
    );
    assert_eq!(
        RoundConfig::new(10, 1, 3).unwrap_err(),
        ConfigError::EmptyRange { min: 10, max: 1 }
    );
    assert_eq!(RoundConfig::new(1, 10, 0).unwrap_err(), ConfigError::NoAttempts);
    assert_eq!(RoundConfig::default(), standard());
}

#[test]
fn test_with_secret_rejects_out_of_range() {
    assert_eq!(
        RoundEngine::with_secret(standard(), 101).err(),
        Some(ConfigError::SecretOutOfRange(101))
    );
    assert!(RoundEngine::with_secret(standard(), 100).is_ok());
}

#[test]
fn test_invalid_tokens_do_not_consume_attempts() {
    let mut engine = RoundEngine::with_secret(standard(), 50).unwrap();
    let mut player = ScriptedPlayer::new(["200", "-5", "abc", "50"]);

    let outcome = engine.play(&mut player).unwrap();

    assert_eq!(
        outcome,
        RoundOutcome::Finished(RoundResult {
            won: true,
            attempts_used: 1
        })
    );
    assert_eq!(engine.status(), RoundStatus::Won);
    assert_eq!(engine.history(), &[50]);

    let rejections: Vec<_> = player
        .events()
        .into_iter()
        .filter_map(|e| match e {
            GameEvent::InvalidGuess(err) => Some(err),
            _ => None,
        })
        .collect();
    assert_eq!(
        rejections,
        vec![
            GuessError::AboveRange { max: 100 },
            GuessError::BelowRange { min: 1 },
            GuessError::NotANumber,
        ]
    );
    assert!(player.events().contains(&GameEvent::Correct {
        secret: 50,
        attempts: 1,
        history: vec![50],
    }));
}

#[test]
fn test_exhausting_attempts_loses() {
    let mut engine = RoundEngine::with_secret(standard(), 7).unwrap();
    let mut player = ScriptedPlayer::new(["1"; 10]);

    let outcome = engine.play(&mut player).unwrap();

    assert_eq!(
        outcome,
        RoundOutcome::Finished(RoundResult {
            won: false,
            attempts_used: 10
        })
    );
    assert_eq!(engine.status(), RoundStatus::Lost);
    assert_eq!(engine.history().len(), 10);

    let events = player.events();
    assert_eq!(events.last(), Some(&GameEvent::RoundLost { secret: 7 }));
    // distance 6 is warm, hinted from the third attempt on
    let hints = events
        .iter()
        .filter(|e| **e == GameEvent::Hint(HintTier::Warm))
        .count();
    assert_eq!(hints, 8);
    let directions = events
        .iter()
        .filter(|e| **e == GameEvent::Direction(Direction::TooLow))
        .count();
    assert_eq!(directions, 10);
}

#[test]
fn test_exit_aborts_without_recording() {
    let mut engine = RoundEngine::with_secret(standard(), 30).unwrap();
    let mut player = ScriptedPlayer::new(["10", "  ExIt "]);

    let outcome = engine.play(&mut player).unwrap();

    assert_eq!(outcome, RoundOutcome::Aborted);
    assert_eq!(engine.status(), RoundStatus::Aborted);
    assert_eq!(engine.history(), &[10]);
    assert_eq!(player.events().last(), Some(&GameEvent::RoundAborted));
}

#[test]
fn test_exit_on_first_prompt() {
    let mut engine = RoundEngine::with_secret(standard(), 30).unwrap();
    let mut player = ScriptedPlayer::new(["EXIT"]);

    assert_eq!(engine.play(&mut player).unwrap(), RoundOutcome::Aborted);
    assert!(engine.history().is_empty());
}

#[test]
fn test_huge_attempt_limit_plays_normally() {
    let config = RoundConfig::new(1, 100, u32::MAX).unwrap();
    let mut engine = RoundEngine::with_secret(config, 5).unwrap();
    let mut player = ScriptedPlayer::new(["5"]);

    assert_eq!(
        engine.play(&mut player).unwrap(),
        RoundOutcome::Finished(RoundResult {
            won: true,
            attempts_used: 1
        })
    );
    assert_eq!(engine.remaining(), u32::MAX - 1);
}

#[test]
fn test_closed_input_propagates() {
    let mut engine = RoundEngine::with_secret(standard(), 30).unwrap();
    let mut player = ScriptedPlayer::new(["10"]);

    let err = engine.play(&mut player).unwrap_err();
    assert!(matches!(err, InputError::Closed));
    assert_eq!(engine.status(), RoundStatus::InProgress);
}

#[test]
fn test_feedback_order_for_a_miss() {
    let mut engine = RoundEngine::with_secret(standard(), 40).unwrap();
    let mut player = ScriptedPlayer::new(["10", "90", "45", "40"]);

    engine.play(&mut player).unwrap();

    let events = player.events();
    let third_attempt = events
        .iter()
        .position(|e| {
            *e == GameEvent::AttemptStarted {
                attempt: 3,
                max_attempts: 10,
            }
        })
        .unwrap();
    assert_eq!(
        &events[third_attempt + 1..third_attempt + 5],
        &[
            GameEvent::Direction(Direction::TooHigh),
            GameEvent::Hint(HintTier::Hot),
            GameEvent::AttemptsRemaining(7),
            GameEvent::PreviousGuesses(vec![10, 90]),
        ]
    );
    // no hint and no history on the first miss
    assert_eq!(
        &events[1..4],
        &[
            GameEvent::AttemptStarted {
                attempt: 1,
                max_attempts: 10
            },
            GameEvent::Direction(Direction::TooLow),
            GameEvent::AttemptsRemaining(9),
        ]
    );
}

#[test]
fn test_last_miss_has_no_remaining_count() {
    let config = RoundConfig::new(1, 10, 1).unwrap();
    let mut engine = RoundEngine::with_secret(config, 3).unwrap();
    let mut player = ScriptedPlayer::new(["9"]);

    engine.play(&mut player).unwrap();

    assert!(!player
        .events()
        .iter()
        .any(|e| matches!(e, GameEvent::AttemptsRemaining(_))));
}

#[test]
fn test_submit_steps_state_machine() {
    let config = RoundConfig::new(1, 100, 3).unwrap();
    let mut engine = RoundEngine::with_secret(config, 60).unwrap();
    assert_eq!(engine.status(), RoundStatus::NotStarted);

    assert_eq!(
        engine.submit(10),
        GuessFeedback::Miss {
            direction: Direction::TooLow,
            hint: None,
            remaining: 2
        }
    );
    assert_eq!(engine.status(), RoundStatus::InProgress);
    engine.submit(90);
    assert_eq!(
        engine.submit(81),
        GuessFeedback::Miss {
            direction: Direction::TooHigh,
            hint: Some(HintTier::Cold),
            remaining: 0
        }
    );
    assert_eq!(engine.status(), RoundStatus::Lost);
    assert_eq!(engine.history(), &[10, 90, 81]);
}

#[test]
fn test_hint_tier_boundaries() {
    assert_eq!(HintTier::from_distance(0), HintTier::Hot);
    assert_eq!(HintTier::from_distance(5), HintTier::Hot);
    assert_eq!(HintTier::from_distance(6), HintTier::Warm);
    assert_eq!(HintTier::from_distance(10), HintTier::Warm);
    assert_eq!(HintTier::from_distance(11), HintTier::Cool);
    assert_eq!(HintTier::from_distance(20), HintTier::Cool);
    assert_eq!(HintTier::from_distance(21), HintTier::Cold);
    assert_eq!(HintTier::between(50, 29), HintTier::Cold);
    assert_eq!(HintTier::between(29, 50), HintTier::Cold);
}

#[test]
fn test_random_secret_stays_in_range() {
    let config = RoundConfig::new(-3, 3, 5).unwrap();
    let mut rng = SmallRng::seed_from_u64(42);
    let mut seen = [false; 7];
    for _ in 0..500 {
        let secret = RoundEngine::new(config, &mut rng).secret();
        assert!(config.contains(secret));
        seen[(secret + 3) as usize] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn test_same_seed_same_secret() {
    let mut rng1 = SmallRng::seed_from_u64(12345);
    let mut rng2 = SmallRng::seed_from_u64(12345);
    for _ in 0..10 {
        assert_eq!(
            RoundEngine::new(standard(), &mut rng1).secret(),
            RoundEngine::new(standard(), &mut rng2).secret()
        );
    }
}
