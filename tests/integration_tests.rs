//! Integration tests for the main game loop pieces: pointer routing, scoring,
//! countdown and restart.

use pretty_assertions::assert_eq;

use word_hunt::core::{Board, GameState, WordList};
use word_hunt::input::PointerEvent;
use word_hunt::term::{GameView, Viewport};
use word_hunt::types::{Coord, GameAction, GuessClass};
use word_hunt::Session;

const VP: Viewport = Viewport {
    width: 60,
    height: 20,
};

fn session() -> Session {
    Session::new(
        GameState::new(Board::default(), WordList::builtin()),
        GameView::default(),
    )
}

/// Screen cell at the middle of a tile (where its letter is drawn).
fn center(session: &Session, row: u8, col: u8) -> (u16, u16) {
    let view = session.view();
    let layout = view.layout(VP);
    let (x, y) = view.tile_origin(&layout, Coord::new(row, col));
    (x + 3, y + 1)
}

fn drag_word(session: &mut Session, tiles: &[(u8, u8)]) -> bool {
    let (x, y) = center(session, tiles[0].0, tiles[0].1);
    session.handle_pointer(PointerEvent::Down { x, y }, VP);
    for &(row, col) in &tiles[1..] {
        let (x, y) = center(session, row, col);
        session.handle_pointer(PointerEvent::Drag { x, y }, VP);
    }
    session.handle_pointer(PointerEvent::Up, VP)
}

#[test]
fn test_drag_spells_and_scores_word() {
    let mut s = session();
    // S-T-O-M-P
    assert!(drag_word(&mut s, &[(1, 1), (2, 2), (1, 2), (2, 1), (3, 2)]));
    assert_eq!(s.state().score(), 800);
    assert_eq!(s.state().word_count(), 1);
    assert_eq!(s.state().found()[0].word, "STOMP");
}

#[test]
fn test_repeat_word_is_yellow_and_unscored() {
    let mut s = session();
    assert!(drag_word(&mut s, &[(0, 2), (1, 2), (2, 3), (2, 2)])); // SORT

    let (x, y) = center(&s, 0, 2);
    s.handle_pointer(PointerEvent::Down { x, y }, VP);
    for (row, col) in [(1, 2), (2, 3), (2, 2)] {
        let (x, y) = center(&s, row, col);
        s.handle_pointer(PointerEvent::Drag { x, y }, VP);
    }
    assert_eq!(s.state().current_guess(), "SORT");
    assert_eq!(s.state().snapshot().guess_class, GuessClass::AlreadyGuessed);

    assert!(!s.handle_pointer(PointerEvent::Up, VP));
    assert_eq!(s.state().score(), 400);
}

#[test]
fn test_drag_through_gap_is_ignored() {
    let mut s = session();
    let (x, y) = center(&s, 0, 0);
    s.handle_pointer(PointerEvent::Down { x, y }, VP);

    // The rim between (0,0) and (0,1) does not count as a tile.
    let layout = s.view().layout(VP);
    let (tx, _) = s.view().tile_origin(&layout, Coord::new(0, 1));
    assert!(!s.handle_pointer(PointerEvent::Drag { x: tx, y }, VP));
    assert!(!s.handle_pointer(PointerEvent::Drag { x: tx - 1, y }, VP));

    let (x, y) = center(&s, 0, 1);
    assert!(s.handle_pointer(PointerEvent::Drag { x, y }, VP));
    assert_eq!(s.state().current_guess(), "PR");
}

#[test]
fn test_press_outside_grid_never_builds_a_word() {
    let mut s = session();
    s.handle_pointer(PointerEvent::Down { x: 0, y: 0 }, VP);
    let (x, y) = center(&s, 3, 0);
    assert!(!s.handle_pointer(PointerEvent::Drag { x, y }, VP));
    assert!(!s.handle_pointer(PointerEvent::Up, VP));
    assert_eq!(s.state().current_guess(), "");
}

#[test]
fn test_round_lifecycle() {
    let mut s = session();
    assert!(drag_word(&mut s, &[(0, 0), (0, 1), (1, 2), (2, 1)])); // PROM
    assert!(s.state().bonus_found());

    // 80 seconds at ~60 FPS.
    let mut ended = false;
    for _ in 0..5000 {
        if s.tick(16) {
            ended = true;
            break;
        }
    }
    assert!(ended);
    assert!(s.state().game_over());
    assert!(s.state().reveal_path().is_some());

    // No more input accepted.
    assert!(!drag_word(&mut s, &[(3, 0), (3, 1), (2, 1)]));
    assert_eq!(s.state().word_count(), 1);

    assert!(s.apply_action(GameAction::Restart));
    assert!(!s.state().game_over());
    assert_eq!(s.state().score(), 0);
    assert!(drag_word(&mut s, &[(3, 0), (3, 1), (2, 1)])); // DAM
}
