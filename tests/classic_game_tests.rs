//! End-to-end tests over the classic 8×8 game.
//!
//! These exercise the public surface the way a tournament runner or
//! view layer would: build, start, play, watch events, finish.

use othello_engine::{
    factory, GameBuilder, GameEvent, Greedy, Lowest, MoveEngine, NodeId, PlayerId, Position,
    RandomChoice, Rules, TopLeft,
};

fn id(x: i16, y: i16) -> NodeId {
    NodeId::from_position(Position::new(x, y))
}

fn players() -> (PlayerId, PlayerId) {
    (PlayerId::new("p1"), PlayerId::new("p2"))
}

#[test]
fn test_classic_opening_moves_and_counts() {
    let (p1, p2) = players();
    let engine = MoveEngine::new(factory::classic(&p1, &p2), &[p1.clone(), p2]);

    let moves = engine.legal_moves(&p1);
    assert_eq!(moves, vec![id(2, 3), id(3, 2), id(4, 5), id(5, 4)]);

    for node in moves {
        assert_eq!(engine.capture_count(&p1, node).unwrap(), 1);
    }
}

#[test]
fn test_classic_opening_commit() {
    let (p1, p2) = players();
    let mut engine = MoveEngine::new(factory::classic(&p1, &p2), &[p1.clone(), p2.clone()]);

    let outcome = engine.commit(&p1, id(2, 3)).unwrap();

    assert_eq!(outcome.touched, vec![id(2, 3), id(3, 3)]);
    assert_eq!(engine.score().points_for(&p1), 4);
    assert_eq!(engine.score().points_for(&p2), 1);
}

#[test]
fn test_full_game_between_strategies() {
    let mut game = GameBuilder::new()
        .computer("p1", "Greta", Box::new(Greedy))
        .computer("p2", "Low", Box::new(Lowest))
        .build(1);
    game.start_with(&PlayerId::new("p1")).unwrap();

    let mut moves = 0;
    while game.player_in_turn().is_some() {
        game.move_auto().unwrap();
        moves += 1;
        assert!(moves <= 60, "the classic board has 60 free nodes");

        // Score-sum invariant at every observable point.
        let total: u32 = game.score().scores().iter().map(|e| e.points).sum();
        assert_eq!(total as usize, game.board().occupied_count());
    }

    assert!(!game.is_active());
    let events = game.drain_events();
    assert!(events.iter().any(|e| matches!(e, GameEvent::GameFinished)));
}

#[test]
fn test_random_strategy_games_are_reproducible() {
    let play = || {
        let mut game = GameBuilder::new()
            .computer("p1", "R1", Box::new(RandomChoice::new(11)))
            .computer("p2", "R2", Box::new(RandomChoice::new(22)))
            .build(5);
        game.start_with(&PlayerId::new("p1")).unwrap();
        while game.player_in_turn().is_some() {
            game.move_auto().unwrap();
        }
        game.score().scores()
    };

    assert_eq!(play(), play());
}

#[test]
fn test_turn_skip_is_reported_and_correct() {
    let (p1, p2) = players();
    // A 1×4 strip: p1 p2 _ _. p1 plays (2,0) capturing p2; p2 then has
    // no legal move anywhere, and p1 cannot sandwich its own color, so
    // the game ends right there.
    let mut nodes = Vec::new();
    for x in 0..4 {
        nodes.push(othello_engine::Node::empty(Position::new(x, 0)));
    }
    let mut board = othello_engine::Board::new(nodes);
    board.occupy(id(0, 0), Some(p1.clone())).unwrap();
    board.occupy(id(1, 0), Some(p2.clone())).unwrap();

    let mut game = GameBuilder::new()
        .human("p1", "Alice")
        .human("p2", "Bob")
        .board(board)
        .build(0);
    game.start_with(&p1).unwrap();

    game.move_to(&p1, id(2, 0)).unwrap();

    assert_eq!(game.player_in_turn(), None);
    let events = game.drain_events();
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::TurnsSkipped { players } if players == &[p2.clone()])));
    assert!(events.iter().any(|e| matches!(e, GameEvent::GameFinished)));
}

#[test]
fn test_no_legal_move_scenario() {
    let (p1, p2) = players();
    // p1 entirely surrounded by its own nodes: no sandwich exists.
    let board = factory::square(3);
    let mut engine_board = board;
    for x in 0..3 {
        for y in 0..3 {
            if !(x == 1 && y == 1) {
                engine_board.occupy(id(x, y), Some(p1.clone())).unwrap();
            }
        }
    }
    let engine = MoveEngine::new(engine_board, &[p1.clone(), p2]);

    assert!(engine.legal_moves(&p1).is_empty());
    assert!(!engine.can_move(&p1));
}

#[test]
fn test_four_player_game_on_custom_board() {
    let ids: Vec<PlayerId> = ["a", "b", "c", "d"].iter().map(|s| PlayerId::new(*s)).collect();
    // A 6×6 board with a hand-laid center: each player holds one node
    // of a 2×2 block mirrored so everyone has a move against someone.
    let mut board = factory::square(6);
    board.occupy(id(2, 2), Some(ids[0].clone())).unwrap();
    board.occupy(id(2, 3), Some(ids[1].clone())).unwrap();
    board.occupy(id(3, 2), Some(ids[2].clone())).unwrap();
    board.occupy(id(3, 3), Some(ids[3].clone())).unwrap();

    let mut game = GameBuilder::new()
        .computer("a", "A", Box::new(TopLeft))
        .computer("b", "B", Box::new(TopLeft))
        .computer("c", "C", Box::new(TopLeft))
        .computer("d", "D", Box::new(TopLeft))
        .board(board)
        .build(3);
    game.start_with(&ids[0]).unwrap();

    let mut moves = 0;
    while game.player_in_turn().is_some() && moves < 32 {
        game.move_auto().unwrap();
        moves += 1;

        let total: u32 = game.score().scores().iter().map(|e| e.points).sum();
        assert_eq!(total as usize, game.board().occupied_count());
    }

    assert!(moves > 0);
}
