//! Match driver tests: engines playing whole games.

use rust_minimax::core::{PlayerId, Score, SearchConfig, SearchRng};
use rust_minimax::games::stonehenge::{StonehengeGame, StonehengeState};
use rust_minimax::minimax::{IterativeMinimax, RecursiveMinimax, RoughOutcome, UniformRandom};
use rust_minimax::play::{play_match, MatchRecord};
use rust_minimax::rules::{Game, GameState};

fn config() -> SearchConfig {
    SearchConfig::default().with_log_stats(false)
}

/// Exact value of the opening position for the first mover.
fn opening_value(game: &StonehengeGame) -> Score {
    let scored = RecursiveMinimax::new(config()).evaluate(game).unwrap();
    scored.into_iter().map(|(_, s)| s).max().unwrap()
}

fn expected_winner(value: Score, first: PlayerId) -> Option<PlayerId> {
    match value {
        Score::Win => Some(first),
        Score::Lose => Some(first.other()),
        Score::Draw => None,
    }
}

#[test]
fn test_exact_engines_reach_the_game_value() {
    let mut game = StonehengeGame::new(2, true).unwrap();
    let value = opening_value(&game);

    let mut p1 = RecursiveMinimax::new(config());
    let mut p2 = IterativeMinimax::<StonehengeState>::new(config());
    let record = play_match(&mut game, &mut p1, &mut p2).unwrap();

    assert_eq!(record.winner, expected_winner(value, PlayerId::P1));
    assert_eq!(record.first_player, PlayerId::P1);
    assert_eq!(record.strategies, ["minimax-recursive".to_string(), "minimax-iterative".to_string()]);
    assert!(game.is_over(game.current_state()));
}

#[test]
fn test_exact_engine_never_does_worse_than_value() {
    for p1_starts in [true, false] {
        let mut game = StonehengeGame::new(2, p1_starts).unwrap();
        let first = game.current_state().current_player();
        let value = opening_value(&game);

        // Put the engine on the side the opening favours (or first on a draw).
        let engine_side = if value == Score::Lose { first.other() } else { first };
        let mut engine = RecursiveMinimax::new(config());
        let mut rough = RoughOutcome;

        let record = match engine_side {
            PlayerId::P1 => play_match(&mut game, &mut engine, &mut rough),
            PlayerId::P2 => play_match(&mut game, &mut rough, &mut engine),
        }
        .unwrap();

        if value != Score::Draw {
            assert_eq!(record.winner, Some(engine_side));
        } else {
            assert_ne!(record.winner, Some(engine_side.other()));
        }
    }
}

#[test]
fn test_forked_tie_breaks_replay_identically() {
    let play = |seed| {
        let mut rng = SearchRng::new(seed);
        let mut p1 = RecursiveMinimax::new(config()).with_tie_break(UniformRandom::from_rng(rng.fork()));
        let mut p2 = RecursiveMinimax::new(config()).with_tie_break(UniformRandom::from_rng(rng.fork()));
        let mut game = StonehengeGame::new(2, true).unwrap();
        play_match(&mut game, &mut p1, &mut p2).unwrap()
    };

    let first = play(11);
    assert_eq!(play(11), first);
    assert!(first.winner.is_some());
}

#[test]
fn test_plies_alternate() {
    let mut game = StonehengeGame::new(2, false).unwrap();
    let mut p1 = RoughOutcome;
    let mut p2 = RoughOutcome;
    let record = play_match(&mut game, &mut p1, &mut p2).unwrap();

    assert_eq!(record.first_player, PlayerId::P2);
    assert!(!record.plies.is_empty());
    for (i, ply) in record.plies.iter().enumerate() {
        let expected = if i % 2 == 0 { PlayerId::P2 } else { PlayerId::P1 };
        assert_eq!(ply.player, expected);
    }
    assert_eq!(record.winner, record.plies.last().map(|p| p.player));
}

#[test]
fn test_replay_from_record() {
    let mut game = StonehengeGame::new(2, true).unwrap();
    let mut p1 = IterativeMinimax::<StonehengeState>::new(config());
    let mut p2 = RoughOutcome;
    let record = play_match(&mut game, &mut p1, &mut p2).unwrap();

    let mut replay = StonehengeGame::new(2, true).unwrap();
    for ply in &record.plies {
        let mv = replay.parse_move(&ply.mv).unwrap();
        replay.play(&mv).unwrap();
    }
    assert_eq!(replay.current_state(), game.current_state());
}

#[test]
fn test_record_encoding() {
    let mut game = StonehengeGame::new(1, true).unwrap();
    let mut p1 = RoughOutcome;
    let mut p2 = RoughOutcome;
    let record = play_match(&mut game, &mut p1, &mut p2).unwrap();

    let bytes = record.to_bytes().unwrap();
    assert_eq!(MatchRecord::from_bytes(&bytes).unwrap(), record);

    let json = serde_json::to_string(&record).unwrap();
    let back: MatchRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
    assert_eq!(back.plies.len(), 1);
}

#[test]
fn test_config_serializes() {
    let config = SearchConfig::default().with_seed(9).with_tree_capacity(64);
    let json = serde_json::to_string(&config).unwrap();
    let back: SearchConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
