//! TerminalRenderer: flushes a framebuffer to the terminal.
//!
//! Owns stdout and the raw-mode lifecycle. Both the full and the diffed
//! draw go through one run painter, so a frame is always a sequence of
//! cursor moves and styled prints.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::term::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    entered: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            entered: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?
            .flush()?;
        self.entered = true;
        Ok(())
    }

    /// Undo `enter`. Safe to call more than once; later calls are no-ops.
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.stdout
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?
            .flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw, e.g. after a resize event.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers keep one `FrameBuffer` and pass it in every frame. After the
    /// diff the buffers are swapped so the caller reuses the old allocation
    /// without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => prev,
            _ => {
                self.full_redraw(fb)?;
                let mut fresh = FrameBuffer::new(fb.width(), fb.height());
                std::mem::swap(&mut fresh, fb);
                self.last = Some(fresh);
                return Ok(());
            }
        };

        self.diff_redraw(fb, &prev)?;
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn full_redraw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        let mut style = None;
        for y in 0..fb.height() {
            self.paint_run(fb, 0, y, fb.width(), &mut style)?;
        }
        self.finish_frame()
    }

    fn diff_redraw(&mut self, next: &FrameBuffer, prev: &FrameBuffer) -> Result<()> {
        let mut style = None;
        next.for_each_changed_run(prev, |x, y, len| {
            self.paint_run(next, x, y, len, &mut style)
        })?;
        self.finish_frame()
    }

    /// One cursor move, then the cells of the run. `style` carries the
    /// last applied style across runs within a frame.
    fn paint_run(
        &mut self,
        fb: &FrameBuffer,
        x: u16,
        y: u16,
        len: u16,
        style: &mut Option<CellStyle>,
    ) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = fb.get(x + dx, y).unwrap_or_default();
            if *style != Some(cell.style) {
                self.apply_style(cell.style)?;
                *style = Some(cell.style);
            }
            self.stdout.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn finish_frame(&mut self) -> Result<()> {
        self.stdout
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .flush()?;
        Ok(())
    }

    /// Attribute reset comes first: it clears colors too, so colors
    /// queued before it would be lost.
    fn apply_style(&mut self, style: CellStyle) -> Result<()> {
        self.stdout
            .queue(SetAttribute(Attribute::Reset))?
            .queue(SetForegroundColor(style.fg.into()))?
            .queue(SetBackgroundColor(style.bg.into()))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.stdout.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_maps_to_truecolor() {
        let fg = Rgb::new(12, 34, 56);
        assert_eq!(
            Color::from(fg),
            Color::Rgb {
                r: 12,
                g: 34,
                b: 56
            }
        );
    }

    #[test]
    fn test_exit_without_enter_is_a_no_op() {
        let mut renderer = TerminalRenderer::new();
        assert!(renderer.exit().is_ok());
    }
}
