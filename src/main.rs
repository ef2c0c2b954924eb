//! Terminal Word Hunt runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and a custom
//! framebuffer-based renderer (no widget library).

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{error, info};

use word_hunt::input::{handle_key_event, map_mouse_event, should_quit};
use word_hunt::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use word_hunt::types::TICK_MS;
use word_hunt::{logging, Config, Session};

fn main() -> Result<()> {
    let config = Config::parse();
    if let Some(path) = &config.log_file {
        logging::init(path, config.debug)?;
    }
    info!(?config, "starting word hunt");

    // Fail on a bad word list before touching the terminal.
    let session = Session::new(config.new_game()?, GameView::default());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!("game loop failed: {e:#}");
    }
    info!("session ended");
    result
}

fn run(term: &mut TerminalRenderer, mut session: Session) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        session.render_into(viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply_action(action);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(pointer) = map_mouse_event(mouse) {
                        session.handle_pointer(pointer, viewport);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick with the real elapsed time so the countdown tracks the wall clock.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            session.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}
