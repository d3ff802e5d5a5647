// Integration tests for guess-arena
// These tests verify that the generator, engine, table and CLI work together

use guess_arena::cli::CliInterface;
use guess_arena::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::Cursor;

fn table(settings: GameSettings) -> Table<MemoryStore> {
    Table::new(MemoryStore::default(), settings).unwrap()
}

/// Pick the next number-guess by bisection on the hints received.
fn bisect(low: &mut i64, high: &mut i64, guess: i64, hint: Option<Hint>) {
    match hint {
        Some(Hint::TooLow) => *low = guess + 1,
        Some(Hint::TooHigh) => *high = guess - 1,
        _ => {}
    }
}

#[test]
fn test_number_guess_bisection_always_wins() {
    // 2^7 > 100, so seven lives are always enough for a bisecting player.
    for seed in 0..50 {
        let mut table = table(GameSettings::default());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        table.start(LOCAL_PLAYER, GameMode::NumberGuess, &mut rng).unwrap();

        let (mut low, mut high) = (1, 100);
        loop {
            let guess = (low + high) / 2;
            let report = table
                .play(LOCAL_PLAYER, GameMode::NumberGuess, &guess.to_string())
                .unwrap();
            if report.outcome.is_won() {
                assert_eq!(report.status, SessionStatus::Won);
                assert!(report.attempts <= 7);
                break;
            }
            assert_eq!(report.status, SessionStatus::Active);
            bisect(&mut low, &mut high, guess, report.outcome.hint());
        }
    }
}

#[test]
fn test_bulls_and_cows_round_to_loss() {
    let settings = GameSettings::default().with_lives(GameMode::BullsCows, 3);
    let mut table = table(settings);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let session = table.start(LOCAL_PLAYER, GameMode::BullsCows, &mut rng).unwrap();

    // Secrets never start with 0, so none of these can win.
    let wrong = ["0123", "0456", "0789"];

    let mut last = None;
    for (i, guess) in wrong.iter().enumerate() {
        let report = table.play(LOCAL_PLAYER, GameMode::BullsCows, guess).unwrap();
        let (bulls, cows) = bulls_and_cows(
            Code::parse(&session.secret).unwrap().digits(),
            Code::parse(guess).unwrap().digits(),
        );
        assert!(bulls + cows <= 4);
        assert_eq!(report.attempts as usize, i + 1);
        last = Some(report);
    }

    let last = last.unwrap();
    assert_eq!(last.status, SessionStatus::Lost);
    assert_eq!(last.lives, 0);
    assert!(matches!(last.outcome, GuessOutcome::Lost { ref secret, .. } if *secret == session.secret));

    assert_eq!(
        table.play(LOCAL_PLAYER, GameMode::BullsCows, "1234"),
        Err(GameError::NoActiveSession {
            mode: GameMode::BullsCows
        })
    );
}

#[test]
fn test_seeded_tables_play_identically() {
    let run = || {
        let mut table = table(GameSettings::default());
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        table.start("p", GameMode::BullsCows, &mut rng).unwrap();
        ["1234", "5678", "9012"]
            .iter()
            .map(|g| table.play("p", GameMode::BullsCows, g).unwrap())
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_worked_examples_through_engine() {
    let session = GameSession::new(GameMode::NumberGuess, "42", 5);
    let play = Play::new(GameMode::NumberGuess, &session.secret, "30").unwrap();
    let (next, outcome) = evaluate(&play, &session);
    assert_eq!(outcome, GuessOutcome::Hint(Hint::TooLow));
    assert_eq!((next.lives, next.attempts), (4, 1));

    let session = GameSession::new(GameMode::BullsCows, "1234", 5);
    let play = Play::new(GameMode::BullsCows, &session.secret, "1243").unwrap();
    let (_, outcome) = evaluate(&play, &session);
    assert_eq!(outcome.hint(), Some(Hint::Score { bulls: 2, cows: 2 }));

    let play = Play::new(GameMode::BullsCows, &session.secret, "1234").unwrap();
    let (next, outcome) = evaluate(&play, &session);
    assert!(outcome.is_won());
    assert_eq!(next.status, SessionStatus::Won);

    let session = GameSession::new(GameMode::NumberGuess, "42", 1);
    let play = Play::new(GameMode::NumberGuess, &session.secret, "41").unwrap();
    let (next, outcome) = evaluate(&play, &session);
    assert_eq!(next.lives, 0);
    assert_eq!(next.status, SessionStatus::Lost);
    assert!(matches!(outcome, GuessOutcome::Lost { ref secret, .. } if secret == "42"));
}

#[test]
fn test_cli_game_loop_to_win() {
    // A single-value range makes the secret known in advance.
    let settings = GameSettings::default().with_range(9, 9);
    let mut table = table(settings);
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut interface = CliInterface::new(Cursor::new("3\nabc\n9\n9\nexit\n"));

    game_loop(&mut table, GameMode::NumberGuess, &mut rng, &mut interface).unwrap();

    let session = table.session(LOCAL_PLAYER, GameMode::NumberGuess).unwrap();
    assert_eq!(session.status, SessionStatus::Won);
    assert_eq!(session.attempts, 2);
    assert_eq!(session.lives, 6);
}

#[test]
fn test_cli_game_loop_new_game_resets() {
    let settings = GameSettings::default().with_range(9, 9);
    let mut table = table(settings);
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut interface = CliInterface::new(Cursor::new("9\nnext\n1\n"));

    // Ends on end of input.
    game_loop(&mut table, GameMode::NumberGuess, &mut rng, &mut interface).unwrap();

    let session = table.session(LOCAL_PLAYER, GameMode::NumberGuess).unwrap();
    assert_eq!(session.status, SessionStatus::Active);
    assert_eq!(session.attempts, 1);
    assert_eq!(session.lives, 6);
}

#[test]
fn test_cli_bulls_and_cows_rejects_bad_codes() {
    let mut table = table(GameSettings::default());
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut interface = CliInterface::new(Cursor::new("1123\n12\nx234\n\nexit\n"));

    game_loop(&mut table, GameMode::BullsCows, &mut rng, &mut interface).unwrap();

    let session = table.session(LOCAL_PLAYER, GameMode::BullsCows).unwrap();
    assert_eq!(session.attempts, 0);
    assert_eq!(session.lives, 10);
}

#[test]
fn test_report_serializes_for_transport() {
    let mut table = table(GameSettings::default().with_range(5, 5));
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    table.start("p", GameMode::NumberGuess, &mut rng).unwrap();
    let report = table.play("p", GameMode::NumberGuess, "6").unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["guess"], "6");
    assert_eq!(json["outcome"]["hint"], "too_high");
    assert_eq!(json["mode"], "number_guess");
    assert_eq!(json["lives"], 6);
    assert_eq!(json["status"], "active");

    let restored: TurnReport = serde_json::from_value(json).unwrap();
    assert_eq!(restored, report);
}

#[test]
fn test_report_json_hides_secret_until_lost() {
    let settings = GameSettings::default().with_lives(GameMode::BullsCows, 2);
    let mut table = table(settings);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let secret = table
        .start("p", GameMode::BullsCows, &mut rng)
        .unwrap()
        .secret;

    // Secrets never start with 0, so neither guess can win.
    let report = table.play("p", GameMode::BullsCows, "0123").unwrap();
    assert_eq!(report.status, SessionStatus::Active);
    let json = serde_json::to_string(&report).unwrap();
    assert!(!json.contains(&secret), "active turn leaked the secret: {json}");

    let report = table.play("p", GameMode::BullsCows, "0456").unwrap();
    assert_eq!(report.status, SessionStatus::Lost);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["outcome"]["lost"]["secret"], secret.as_str());
}
