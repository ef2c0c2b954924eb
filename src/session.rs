//! Session: one running game plus the view it is shown through.
//!
//! Pointer events arrive in terminal cells; the view's layout turns them into
//! tiles before they reach the game state.

use tracing::debug;

use crate::core::{GameSnapshot, GameState};
use crate::input::PointerEvent;
use crate::term::{FrameBuffer, GameView, Viewport};
use crate::types::GameAction;

pub struct Session {
    state: GameState,
    view: GameView,
    snap: GameSnapshot,
}

impl Session {
    pub fn new(state: GameState, view: GameView) -> Self {
        Self {
            state,
            view,
            snap: GameSnapshot::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn view(&self) -> &GameView {
        &self.view
    }

    /// Resolve a pointer event against the layout for `viewport` and apply it.
    ///
    /// Drags over anything but a tile's interior are ignored.
    pub fn handle_pointer(&mut self, ev: PointerEvent, viewport: Viewport) -> bool {
        let action = match ev {
            PointerEvent::Down { x, y } => GameAction::Press(self.view.hit_test(viewport, x, y)),
            PointerEvent::Drag { x, y } => match self.view.hit_test(viewport, x, y) {
                Some(coord) => GameAction::Drag(coord),
                None => return false,
            },
            PointerEvent::Up => GameAction::Release,
        };
        self.apply_action(action)
    }

    pub fn apply_action(&mut self, action: GameAction) -> bool {
        let changed = self.state.apply_action(action);
        if changed {
            debug!(action = action.as_str(), guess = %self.state.current_guess(), "applied");
        }
        changed
    }

    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.state.tick(elapsed_ms)
    }

    /// Snapshot the game and draw it into `fb`.
    pub fn render_into(&mut self, viewport: Viewport, fb: &mut FrameBuffer) {
        self.state.snapshot_into(&mut self.snap);
        self.view.render_into(&self.snap, viewport, fb);
    }
}
