//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize) is a full redraw; later
//! frames only rewrite the runs of cells that changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(EnableMouseCapture)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(DisableMouseCapture)?;
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers keep one `FrameBuffer` and pass it in every frame. Afterwards
    /// `fb` holds a buffer of the same size for the next frame to draw into.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        // No previous frame, or one of another size, means a full redraw.
        let prev = self
            .last
            .take()
            .filter(|p| p.width() == fb.width() && p.height() == fb.height());

        self.buf.clear();
        encode_frame(prev.as_ref(), fb, &mut self.buf)?;
        self.flush_buf()?;

        let mut spare = prev.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
        std::mem::swap(&mut spare, fb);
        self.last = Some(spare);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode `next` into `out` as crossterm commands.
///
/// With a same-sized `prev` only the changed spans of each row are written;
/// otherwise the screen is cleared and every row is written.
pub fn encode_frame(prev: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen { out, style: None };

    match prev {
        Some(prev) if prev.width() == next.width() && prev.height() == next.height() => {
            for y in 0..next.height() {
                let mut from = 0;
                while let Some((start, end)) = changed_span(prev, next, y, from) {
                    pen.span(next, y, start, end)?;
                    from = end;
                }
            }
        }
        _ => {
            pen.out.queue(terminal::Clear(terminal::ClearType::All))?;
            for y in 0..next.height() {
                pen.span(next, y, 0, next.width())?;
            }
        }
    }

    pen.out.queue(ResetColor)?;
    pen.out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// The next run of differing cells in row `y` at or after `from`, as
/// `(start, end)` with `end` exclusive.
fn changed_span(prev: &FrameBuffer, next: &FrameBuffer, y: u16, from: u16) -> Option<(u16, u16)> {
    let w = next.width();
    let differs = |x: u16| prev.get(x, y) != next.get(x, y);
    let start = (from..w).find(|&x| differs(x))?;
    let end = (start + 1..w).find(|&x| !differs(x)).unwrap_or(w);
    Some((start, end))
}

/// Writes cells, only emitting style commands when the style changes.
struct Pen<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl Pen<'_> {
    fn span(&mut self, fb: &FrameBuffer, y: u16, start: u16, end: u16) -> Result<()> {
        self.out.queue(cursor::MoveTo(start, y))?;
        for x in start..end {
            let cell = fb.get(x, y).unwrap_or_default();
            if self.style != Some(cell.style) {
                self.set_style(cell.style)?;
            }
            self.out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn set_style(&mut self, style: CellStyle) -> Result<()> {
        self.out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        self.out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        if style.bold {
            self.out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.out.queue(SetAttribute(Attribute::Dim))?;
        }
        self.style = Some(style);
        Ok(())
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
