//! Match driver: two strategies alternate on one game until it is over.
//!
//! Records every move so finished matches can be stored and compared.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{GameError, PlayerId, Result};
use crate::minimax::Strategy;
use crate::rules::{Game, GameState};

/// One move of a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ply {
    /// Who moved.
    pub player: PlayerId,
    /// The move, as text.
    pub mv: String,
}

/// Result of a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Strategy names, P1 first.
    pub strategies: [String; 2],
    /// Player to move at the start.
    pub first_player: PlayerId,
    /// Moves in order.
    pub plies: Vec<Ply>,
    /// Declared winner, `None` for a draw.
    pub winner: Option<PlayerId>,
}

impl MatchRecord {
    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a record produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Play `game` to the end, `p1` choosing for P1 and `p2` for P2.
///
/// The game is left in its final position.
pub fn play_match<G: Game>(
    game: &mut G,
    p1: &mut dyn Strategy<G>,
    p2: &mut dyn Strategy<G>,
) -> Result<MatchRecord> {
    let first_player = game.current_state().current_player();
    let mut plies = Vec::new();

    while !game.is_over(game.current_state()) {
        let player = game.current_state().current_player();
        let strategy: &mut dyn Strategy<G> = match player {
            PlayerId::P1 => &mut *p1,
            PlayerId::P2 => &mut *p2,
        };

        let mv = strategy.choose_move(game).ok_or(GameError::NoMove { player })?;
        debug!("{} ({}) plays {}", player, strategy.name(), mv);
        game.play(&mv)?;
        plies.push(Ply {
            player,
            mv: mv.to_string(),
        });
    }

    let winner = game.winner(game.current_state());
    match winner {
        Some(w) => info!("match over after {} plies: {} wins", plies.len(), w),
        None => info!("match over after {} plies: draw", plies.len()),
    }

    Ok(MatchRecord {
        strategies: [p1.name().to_string(), p2.name().to_string()],
        first_player,
        plies,
        winner,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SearchConfig;
    use crate::games::scripted::{Script, ScriptedGame};
    use crate::minimax::{FirstMaximal, RecursiveMinimax, RoughOutcome};

    /// Always gives up.
    struct Resign;

    impl Strategy<ScriptedGame> for Resign {
        fn choose_move(&mut self, _game: &ScriptedGame) -> Option<String> {
            None
        }

        fn name(&self) -> &'static str {
            "resign"
        }
    }

    #[test]
    fn test_match_records_plies() {
        let mut game = ScriptedGame::new(Script::node([
            ("A", Script::node([("C", Script::ends())])),
            ("B", Script::node([("D", Script::draw())])),
        ]));
        let mut p1 = RecursiveMinimax::new(SearchConfig::default()).with_tie_break(FirstMaximal);
        let mut p2 = RoughOutcome;

        let record = play_match(&mut game, &mut p1, &mut p2).unwrap();

        assert_eq!(record.first_player, PlayerId::P1);
        assert_eq!(record.strategies, ["minimax-recursive".to_string(), "rough-outcome".to_string()]);
        assert_eq!(
            record.plies,
            vec![
                Ply { player: PlayerId::P1, mv: "B".to_string() },
                Ply { player: PlayerId::P2, mv: "D".to_string() },
            ]
        );
        assert_eq!(record.winner, None);
        assert!(game.is_over(game.current_state()));
    }

    #[test]
    fn test_strategy_without_move_is_an_error() {
        let mut game = ScriptedGame::new(Script::node([("A", Script::ends())]));
        let result = play_match(&mut game, &mut Resign, &mut RoughOutcome);
        assert!(matches!(result, Err(GameError::NoMove { player: PlayerId::P1 })));
    }

    #[test]
    fn test_boxed_strategies_of_different_types() {
        let game_script = Script::node([(
            "A",
            Script::node([("B", Script::node([("C", Script::draw())]))]),
        )]);
        let mut game = ScriptedGame::new(game_script);
        let mut strategies: Vec<Box<dyn Strategy<ScriptedGame>>> = vec![
            Box::new(RecursiveMinimax::new(SearchConfig::default().with_log_stats(false))),
            Box::new(RoughOutcome),
        ];
        let (first, rest) = strategies.split_at_mut(1);

        let record = play_match(&mut game, first[0].as_mut(), rest[0].as_mut()).unwrap();

        let movers: Vec<PlayerId> = record.plies.iter().map(|p| p.player).collect();
        assert_eq!(movers, vec![PlayerId::P1, PlayerId::P2, PlayerId::P1]);
        assert_eq!(record.strategies, ["minimax-recursive".to_string(), "rough-outcome".to_string()]);
        assert_eq!(record.winner, None);
    }

    #[test]
    fn test_finished_game_plays_nothing() {
        let mut game = ScriptedGame::new(Script::draw());
        let record = play_match(&mut game, &mut Resign, &mut Resign).unwrap();
        assert!(record.plies.is_empty());
        assert_eq!(record.winner, None);
    }

    #[test]
    fn test_record_bytes() {
        let record = MatchRecord {
            strategies: ["a".to_string(), "b".to_string()],
            first_player: PlayerId::P2,
            plies: vec![Ply { player: PlayerId::P2, mv: "C".to_string() }],
            winner: Some(PlayerId::P2),
        };
        let bytes = record.to_bytes().unwrap();
        assert_eq!(MatchRecord::from_bytes(&bytes).unwrap(), record);
        assert!(MatchRecord::from_bytes(&bytes[..2]).is_err());
    }
}
