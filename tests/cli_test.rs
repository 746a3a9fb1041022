use std::io::Cursor;

use guess_number::{
    CliPlayer, InputError, Player, Prompt, RoundConfig, RoundEngine, RoundOutcome, RoundResult,
};

#[test]
fn test_cli_player_reads_trimmed_lines() {
    let mut player = CliPlayer::from_reader(Cursor::new("  42 \r\nexit\n"));
    assert_eq!(player.read_token(Prompt::Guess).unwrap(), "42");
    assert_eq!(player.read_token(Prompt::Guess).unwrap(), "exit");
    assert!(matches!(
        player.read_token(Prompt::Replay),
        Err(InputError::Closed)
    ));
}

#[test]
fn test_cli_player_plays_a_round() {
    let config = RoundConfig::new(1, 100, 10).unwrap();
    let mut engine = RoundEngine::with_secret(config, 42).unwrap();
    let mut player = CliPlayer::from_reader(Cursor::new("abc\n10\n80\n45\n42\n"));

    let outcome = engine.play(&mut player).unwrap();
    assert_eq!(
        outcome,
        RoundOutcome::Finished(RoundResult {
            won: true,
            attempts_used: 4
        })
    );
    assert_eq!(engine.history(), &[10, 80, 45, 42]);
}

#[test]
fn test_cli_player_eof_mid_round() {
    let config = RoundConfig::new(1, 100, 10).unwrap();
    let mut engine = RoundEngine::with_secret(config, 42).unwrap();
    let mut player = CliPlayer::from_reader(Cursor::new("10\n"));

    assert!(matches!(engine.play(&mut player), Err(InputError::Closed)));
}
