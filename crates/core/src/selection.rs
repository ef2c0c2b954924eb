//! Selection module - the drag-selection state machine
//!
//! ```text
//!            press            release / cancel
//!   Idle ───────────▶ Dragging ──────────────────▶ Idle
//!                      │    ▲
//!                      └────┘ drag (adjacent, unvisited tile)
//! ```
//!
//! A press that misses every tile still enters `Dragging`, but with an empty
//! path: there is no previous tile, so no drag can extend it.

use arrayvec::ArrayVec;

use crate::types::{Coord, TILE_COUNT};

/// Tiles traced by one drag, in order. Each tile appears at most once.
pub type Path = ArrayVec<Coord, TILE_COUNT>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Dragging { path: Path },
}

impl Selection {
    pub fn new() -> Self {
        Self::Idle
    }

    /// Begin a new drag. Any previous path is discarded.
    pub fn press(&mut self, at: Option<Coord>) {
        let mut path = Path::new();
        if let Some(coord) = at {
            path.push(coord);
        }
        *self = Selection::Dragging { path };
    }

    /// Extend the path with `coord`.
    ///
    /// Returns true when the tile was added: it must be adjacent to the last
    /// tile and not yet on the path.
    pub fn drag(&mut self, coord: Coord) -> bool {
        let Selection::Dragging { path } = self else {
            return false;
        };
        let Some(&last) = path.last() else {
            return false;
        };
        if !last.is_adjacent(coord) || path.contains(&coord) {
            return false;
        }
        path.try_push(coord).is_ok()
    }

    /// Finish the drag and hand back the traced path.
    ///
    /// Returns `None` if no drag was in progress.
    pub fn release(&mut self) -> Option<Path> {
        match std::mem::take(self) {
            Selection::Dragging { path } => Some(path),
            Selection::Idle => None,
        }
    }

    pub fn cancel(&mut self) {
        *self = Selection::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Selection::Dragging { .. })
    }

    /// Current path; empty while idle.
    pub fn path(&self) -> &[Coord] {
        match self {
            Selection::Dragging { path } => path.as_slice(),
            Selection::Idle => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: u8, col: u8) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn press_on_tile_starts_path() {
        let mut sel = Selection::new();
        assert!(!sel.is_dragging());

        sel.press(Some(c(0, 0)));
        assert!(sel.is_dragging());
        assert_eq!(sel.path(), &[c(0, 0)]);
    }

    #[test]
    fn drag_extends_only_to_neighbours() {
        let mut sel = Selection::new();
        sel.press(Some(c(0, 0)));

        assert!(!sel.drag(c(0, 2)));
        assert!(sel.drag(c(0, 1)));
        assert!(sel.drag(c(1, 2)));
        assert!(!sel.drag(c(3, 3)));
        assert_eq!(sel.path(), &[c(0, 0), c(0, 1), c(1, 2)]);
    }

    #[test]
    fn drag_never_revisits_a_tile() {
        let mut sel = Selection::new();
        sel.press(Some(c(1, 1)));
        assert!(sel.drag(c(1, 2)));
        assert!(!sel.drag(c(1, 1)));
        // Staying on the same tile is a no-op too.
        assert!(!sel.drag(c(1, 2)));
        assert_eq!(sel.path().len(), 2);
    }

    #[test]
    fn press_off_grid_cannot_extend() {
        let mut sel = Selection::new();
        sel.press(None);
        assert!(sel.is_dragging());
        assert!(!sel.drag(c(0, 0)));
        assert_eq!(sel.release(), Some(Path::new()));
    }

    #[test]
    fn drag_while_idle_is_ignored() {
        let mut sel = Selection::new();
        assert!(!sel.drag(c(0, 0)));
        assert_eq!(sel, Selection::Idle);
    }

    #[test]
    fn release_returns_path_and_resets() {
        let mut sel = Selection::new();
        sel.press(Some(c(3, 0)));
        sel.drag(c(3, 1));
        let path = sel.release().unwrap();
        assert_eq!(path.as_slice(), &[c(3, 0), c(3, 1)]);
        assert_eq!(sel, Selection::Idle);
        assert_eq!(sel.release(), None);
    }

    #[test]
    fn new_press_discards_old_path() {
        let mut sel = Selection::new();
        sel.press(Some(c(0, 0)));
        sel.drag(c(1, 1));
        sel.press(Some(c(3, 3)));
        assert_eq!(sel.path(), &[c(3, 3)]);
    }

    #[test]
    fn full_board_snake_fits() {
        let mut sel = Selection::new();
        sel.press(Some(c(0, 0)));
        for row in 0..4u8 {
            let cols: Vec<u8> = if row % 2 == 0 {
                (0..4).collect()
            } else {
                (0..4).rev().collect()
            };
            for col in cols {
                if (row, col) != (0, 0) {
                    assert!(sel.drag(c(row, col)), "({row}, {col})");
                }
            }
        }
        assert_eq!(sel.path().len(), TILE_COUNT);
    }

    #[test]
    fn cancel_drops_the_path() {
        let mut sel = Selection::new();
        sel.press(Some(c(2, 2)));
        sel.cancel();
        assert!(!sel.is_dragging());
        assert!(sel.path().is_empty());
    }
}
