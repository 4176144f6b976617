//! Game controller: wires the engine, turn rotation, and players.
//!
//! The controller is thin orchestration only. It validates whose turn
//! it is, delegates the move to the rules engine, advances the
//! rotation, and records the notifications a view layer consumes. All
//! the algorithmic weight lives in the components it wires together.
//!
//! Games are configured through `GameBuilder` and played synchronously
//! by one caller; a tournament runs many independent `Game` values.

pub mod event;

pub use event::GameEvent;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::board::{factory, Board, NodeId};
use crate::core::{GameError, GameRng, Player, PlayerId, PlayerKind, Result};
use crate::rules::{MoveEngine, Rules};
use crate::score::ScoreBoard;
use crate::strategy::MoveStrategy;
use crate::turn::TurnRotation;

/// Configures and constructs a `Game`.
///
/// ## Example
///
/// ```
/// use othello_engine::game::GameBuilder;
/// use othello_engine::strategy::{Greedy, TopLeft};
///
/// let mut game = GameBuilder::new()
///     .computer("p1", "Greta", Box::new(Greedy))
///     .computer("p2", "Topsy", Box::new(TopLeft))
///     .build(42);
///
/// game.start();
/// let moved = game.move_auto().unwrap();
/// assert!(!moved.is_empty());
/// ```
#[derive(Default)]
pub struct GameBuilder {
    players: Vec<Player>,
    strategies: FxHashMap<PlayerId, Box<dyn MoveStrategy>>,
    board: Option<Board>,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a human player. Moves are submitted via `Game::move_to`.
    #[must_use]
    pub fn human(mut self, id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        self.players.push(Player::human(id, name));
        self
    }

    /// Add a computer player with its move strategy.
    #[must_use]
    pub fn computer(
        mut self,
        id: impl Into<PlayerId>,
        name: impl Into<String>,
        strategy: Box<dyn MoveStrategy>,
    ) -> Self {
        let player = Player::computer(id, name);
        self.strategies.insert(player.id().clone(), strategy);
        self.players.push(player);
        self
    }

    /// Use a custom board instead of the classic 8×8 layout.
    ///
    /// Required for games with more than two players.
    #[must_use]
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    /// Build the game.
    ///
    /// The seed drives the random starting player. Panics on
    /// malformed configurations: fewer than two players, duplicate
    /// ids, or more than two players without an explicit board.
    #[must_use]
    pub fn build(self, seed: u64) -> Game {
        assert!(self.players.len() >= 2, "A game needs at least 2 players");

        let ids: Vec<PlayerId> = self.players.iter().map(|p| p.id().clone()).collect();
        for (i, id) in ids.iter().enumerate() {
            assert!(
                !ids[i + 1..].contains(id),
                "Duplicate player id `{}`",
                id
            );
        }

        let board = match self.board {
            Some(board) => board,
            None => {
                assert!(
                    self.players.len() == 2,
                    "Games with more than 2 players need an explicit board"
                );
                factory::classic(&ids[0], &ids[1])
            }
        };

        Game {
            engine: MoveEngine::new(board, &ids),
            rotation: TurnRotation::new(ids),
            players: self.players,
            strategies: self.strategies,
            rng: GameRng::new(seed),
            events: Vec::new(),
        }
    }
}

/// One running game: board, rules, scores, history, and turn order.
///
/// Owned and driven synchronously by a single caller; independent
/// games are fully independent values.
pub struct Game {
    engine: MoveEngine,
    rotation: TurnRotation,
    players: Vec<Player>,
    strategies: FxHashMap<PlayerId, Box<dyn MoveStrategy>>,
    rng: GameRng,
    events: Vec<GameEvent>,
}

impl Game {
    /// All players, in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The board being played on.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.engine.board()
    }

    /// The score tracker.
    #[must_use]
    pub fn score(&self) -> &ScoreBoard {
        self.engine.score()
    }

    /// The rules query surface (for strategies and external clients).
    #[must_use]
    pub fn rules(&self) -> &dyn Rules {
        &self.engine
    }

    /// Number of moves committed and not yet undone.
    #[must_use]
    pub fn moves_played(&self) -> usize {
        self.engine.moves_played()
    }

    /// The player in turn, if the game is running.
    #[must_use]
    pub fn player_in_turn(&self) -> Option<&Player> {
        let id = self.rotation.current_player()?;
        self.players.iter().find(|p| p.id() == id)
    }

    /// Whether any player still has a legal move.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.engine.any_can_move(self.rotation.players())
    }

    /// Start the game with a random first player.
    pub fn start(&mut self) {
        let ids = self.rotation.players().to_vec();
        let first = self
            .rng
            .choose(&ids)
            .cloned()
            .expect("a game always has players");
        self.rotation
            .set_first_player(&first)
            .expect("the chosen id comes from the rotation");
        debug!(player = %first, "game started");
    }

    /// Start the game with the given first player.
    pub fn start_with(&mut self, player: &PlayerId) -> Result<()> {
        self.rotation.set_first_player(player)?;
        debug!(player = %player, "game started");
        Ok(())
    }

    /// Commit a move for `player` at `node`.
    ///
    /// Fails with `IllegalState` when no player is in turn, with
    /// `IllegalMove` when it is not `player`'s turn or the move
    /// captures nothing, and with `NodeNotFound` for an unknown node.
    /// On success returns the touched nodes (destination first) and
    /// advances the rotation, skipping players without a legal move.
    pub fn move_to(&mut self, player: &PlayerId, node: NodeId) -> Result<Vec<NodeId>> {
        match self.rotation.current_player() {
            None => {
                return Err(GameError::IllegalState(
                    "game is not started or already finished",
                ))
            }
            Some(current) if current != player => {
                return Err(GameError::IllegalMove {
                    player: player.clone(),
                    node,
                })
            }
            Some(_) => {}
        }

        let outcome = self.engine.commit(player, node)?;

        if !outcome.scores_changed.is_empty() {
            self.events.push(GameEvent::ScoresChanged {
                players: outcome.scores_changed,
            });
        }
        self.events.push(GameEvent::MoveCompleted {
            player: player.clone(),
            touched: outcome.touched.clone(),
        });

        let skipped = self.rotation.advance(&self.engine)?;
        if !skipped.is_empty() {
            self.events.push(GameEvent::TurnsSkipped { players: skipped });
        }

        if self.rotation.current_player().is_none() {
            debug!("game finished");
            self.events.push(GameEvent::GameFinished);
        }

        Ok(outcome.touched)
    }

    /// Let the computer player in turn choose and commit a move.
    ///
    /// Fails with `IllegalState` when no player is in turn or the
    /// player in turn is not a computer.
    pub fn move_auto(&mut self) -> Result<Vec<NodeId>> {
        let player = self
            .rotation
            .current_player()
            .cloned()
            .ok_or(GameError::IllegalState(
                "game is not started or already finished",
            ))?;

        let in_turn = self
            .players
            .iter()
            .find(|p| p.id() == &player)
            .expect("the rotation only holds registered players");
        if in_turn.kind() != PlayerKind::Computer {
            return Err(GameError::IllegalState(
                "the player in turn is not a computer",
            ));
        }

        let chosen = {
            let strategy = self
                .strategies
                .get_mut(&player)
                .ok_or(GameError::IllegalState("computer player has no strategy"))?;
            strategy.choose(&player, &self.engine)
        };
        let node = chosen.ok_or(GameError::IllegalState(
            "the player in turn has no legal move",
        ))?;

        self.move_to(&player, node)
    }

    /// Undo the most recent move.
    ///
    /// Restores board and scores; the turn rotation is left where it
    /// is, matching the caller-driven undo protocol. A no-op returning
    /// `None` when nothing has been played.
    pub fn undo(&mut self) -> Option<Vec<NodeId>> {
        let outcome = self.engine.undo()?;

        if !outcome.scores_changed.is_empty() {
            self.events.push(GameEvent::ScoresChanged {
                players: outcome.scores_changed,
            });
        }

        Some(outcome.touched)
    }

    /// Take all notifications recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Position;
    use crate::strategy::{Greedy, TopLeft};

    fn id(x: i16, y: i16) -> NodeId {
        NodeId::from_position(Position::new(x, y))
    }

    fn two_humans() -> Game {
        GameBuilder::new()
            .human("p1", "Alice")
            .human("p2", "Bob")
            .build(42)
    }

    #[test]
    fn test_builder_defaults_to_classic_board() {
        let game = two_humans();
        assert_eq!(game.board().node_count(), 64);
        assert_eq!(game.score().points_for(&PlayerId::new("p1")), 2);
    }

    #[test]
    #[should_panic(expected = "at least 2 players")]
    fn test_builder_rejects_single_player() {
        let _ = GameBuilder::new().human("p1", "Alice").build(0);
    }

    #[test]
    #[should_panic(expected = "Duplicate player id")]
    fn test_builder_rejects_duplicate_ids() {
        let _ = GameBuilder::new()
            .human("p1", "Alice")
            .human("p1", "Bob")
            .build(0);
    }

    #[test]
    fn test_move_before_start_fails() {
        let mut game = two_humans();
        let err = game.move_to(&PlayerId::new("p1"), id(2, 3)).unwrap_err();
        assert!(matches!(err, GameError::IllegalState(_)));
    }

    #[test]
    fn test_move_out_of_turn_fails() {
        let mut game = two_humans();
        game.start_with(&PlayerId::new("p1")).unwrap();

        let err = game.move_to(&PlayerId::new("p2"), id(2, 2)).unwrap_err();
        assert!(matches!(err, GameError::IllegalMove { .. }));
    }

    #[test]
    fn test_move_advances_turn() {
        let mut game = two_humans();
        let p1 = PlayerId::new("p1");
        let p2 = PlayerId::new("p2");
        game.start_with(&p1).unwrap();

        let touched = game.move_to(&p1, id(2, 3)).unwrap();
        assert_eq!(touched, vec![id(2, 3), id(3, 3)]);
        assert_eq!(game.player_in_turn().unwrap().id(), &p2);
    }

    #[test]
    fn test_move_emits_events() {
        let mut game = two_humans();
        let p1 = PlayerId::new("p1");
        game.start_with(&p1).unwrap();
        game.move_to(&p1, id(2, 3)).unwrap();

        let events = game.drain_events();
        assert!(events.iter().any(|e| matches!(e, GameEvent::ScoresChanged { .. })));
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::MoveCompleted { player, .. } if player == &p1)));
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn test_random_start_uses_a_registered_player() {
        let mut game = two_humans();
        game.start();
        let in_turn = game.player_in_turn().unwrap().id().clone();
        assert!([PlayerId::new("p1"), PlayerId::new("p2")].contains(&in_turn));
    }

    #[test]
    fn test_move_auto_requires_computer() {
        let mut game = two_humans();
        game.start_with(&PlayerId::new("p1")).unwrap();

        let err = game.move_auto().unwrap_err();
        assert!(matches!(err, GameError::IllegalState(_)));
    }

    #[test]
    fn test_computer_game_plays_to_completion() {
        let mut game = GameBuilder::new()
            .computer("p1", "Greta", Box::new(Greedy))
            .computer("p2", "Topsy", Box::new(TopLeft))
            .build(7);
        game.start();

        let mut moves = 0;
        while game.player_in_turn().is_some() {
            game.move_auto().unwrap();
            moves += 1;
            assert!(moves <= 60, "the classic board only has 60 free nodes");
        }

        assert!(!game.is_active());
        assert!(game
            .drain_events()
            .iter()
            .any(|e| matches!(e, GameEvent::GameFinished)));

        let total: u32 = game.score().scores().iter().map(|e| e.points).sum();
        assert_eq!(total as usize, game.board().occupied_count());
    }

    #[test]
    fn test_undo_restores_scores() {
        let mut game = two_humans();
        let p1 = PlayerId::new("p1");
        game.start_with(&p1).unwrap();
        game.move_to(&p1, id(2, 3)).unwrap();
        game.drain_events();

        let restored = game.undo().unwrap();
        assert_eq!(restored, vec![id(3, 3), id(2, 3)]);
        assert_eq!(game.score().points_for(&p1), 2);
        assert!(game
            .drain_events()
            .iter()
            .any(|e| matches!(e, GameEvent::ScoresChanged { .. })));
    }

    #[test]
    fn test_undo_with_no_moves_is_noop() {
        let mut game = two_humans();
        assert_eq!(game.undo(), None);
    }
}
