#![forbid(unsafe_code)]

//! Frame presentation and terminal state tracking.
//!
//! # Presentation contract
//!
//! - A [`Strip`] becomes one carriage-return-prefixed write with no trailing
//!   newline, so the next strip overdraws it in place.
//! - A [`Grid`] becomes a cursor-home followed by newline-terminated rows.
//!   The cursor is hidden on the first grid present and the screen cleared
//!   once; every later grid frame overwrites from home.
//! - Every present is exactly one `write_all` plus one flush, so a frame is
//!   never interleaved with caller output.
//!
//! # Restore contract
//!
//! [`TermSink::restore`] clears the in-place line, resets SGR state, and
//! re-shows the cursor if this sink hid it. It is idempotent and also runs
//! from `Drop`, covering every exit path including a panicking worker.

use std::io::{self, Write};

use glimmer_render::ansi;
use glimmer_render::cell::Cell;
use glimmer_render::frame::{Frame, Grid, Strip};

/// Fallback dimensions when the terminal size query fails (e.g. output is
/// not a tty).
const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Query the terminal size as `(width, height)` in cells.
#[must_use]
pub fn terminal_size() -> (u16, u16) {
    crossterm::terminal::size().unwrap_or(FALLBACK_SIZE)
}

/// A terminal sink over any writer.
///
/// Production code wraps `io::Stdout`; tests wrap `Vec<u8>` and assert on
/// the exact bytes.
#[derive(Debug)]
pub struct TermSink<W: Write> {
    writer: W,
    scratch: Vec<u8>,
    cursor_hidden: bool,
    screen_prepared: bool,
    last_strip_width: usize,
}

impl<W: Write> TermSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            scratch: Vec::with_capacity(1024),
            cursor_hidden: false,
            screen_prepared: false,
            last_strip_width: 0,
        }
    }

    /// Clear the current line and return the cursor to column one.
    pub fn clear_line(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\r")?;
        self.writer.write_all(ansi::CLEAR_LINE)?;
        self.writer.flush()
    }

    /// Clear the whole screen and home the cursor.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        self.writer.write_all(ansi::CLEAR_SCREEN)?;
        self.writer.write_all(ansi::CURSOR_HOME)?;
        self.writer.flush()
    }

    /// Move the cursor to 1-indexed `(x, y)`.
    pub fn move_cursor(&mut self, x: u16, y: u16) -> io::Result<()> {
        ansi::write_cursor_pos(&mut self.writer, y, x)?;
        self.writer.flush()
    }

    /// Hide the cursor. Tracked so restore knows to show it again.
    pub fn hide_cursor(&mut self) -> io::Result<()> {
        if !self.cursor_hidden {
            self.writer.write_all(ansi::HIDE_CURSOR)?;
            self.writer.flush()?;
            self.cursor_hidden = true;
        }
        Ok(())
    }

    /// Show the cursor.
    pub fn show_cursor(&mut self) -> io::Result<()> {
        if self.cursor_hidden {
            self.writer.write_all(ansi::SHOW_CURSOR)?;
            self.writer.flush()?;
            self.cursor_hidden = false;
        }
        Ok(())
    }

    /// Whether this sink currently has the cursor hidden.
    #[must_use]
    pub const fn cursor_hidden(&self) -> bool {
        self.cursor_hidden
    }

    /// Present one frame as a single buffered write.
    pub fn present(&mut self, frame: &Frame) -> io::Result<()> {
        self.scratch.clear();
        match frame {
            Frame::Strip(strip) => Self::encode_strip(
                &mut self.scratch,
                strip,
                &mut self.last_strip_width,
            ),
            Frame::Grid(grid) => {
                if !self.screen_prepared {
                    // First grid frame: take the cursor and start from a
                    // clean screen. Later frames overwrite from home.
                    self.scratch.extend_from_slice(ansi::HIDE_CURSOR);
                    self.scratch.extend_from_slice(ansi::CLEAR_SCREEN);
                    self.cursor_hidden = true;
                    self.screen_prepared = true;
                }
                Self::encode_grid(&mut self.scratch, grid);
            }
        }
        self.writer.write_all(&self.scratch)?;
        self.writer.flush()
    }

    fn encode_strip(out: &mut Vec<u8>, strip: &Strip, last_width: &mut usize) {
        out.push(b'\r');
        let styled = Self::encode_cells(out, strip.cells());
        if styled {
            out.extend_from_slice(ansi::SGR_RESET);
        }
        // Blank out leftovers when the previous strip was wider.
        let width = strip.display_width();
        if *last_width > width {
            let extra = *last_width - width;
            out.extend(std::iter::repeat_n(b' ', extra));
            out.push(b'\r');
        }
        *last_width = width;
    }

    fn encode_grid(out: &mut Vec<u8>, grid: &Grid) {
        out.extend_from_slice(ansi::CURSOR_HOME);
        for row in grid.rows() {
            let styled = Self::encode_cells(out, row);
            if styled {
                out.extend_from_slice(ansi::SGR_RESET);
            }
            out.push(b'\n');
        }
    }

    /// Encode a run of cells, coalescing adjacent cells that share color and
    /// flags into one SGR prefix. Returns whether any SGR bytes were
    /// emitted.
    fn encode_cells(out: &mut Vec<u8>, cells: &[Cell]) -> bool {
        let mut styled = false;
        let mut active: Option<&Cell> = None;
        let mut glyph_buf = [0u8; 4];
        for cell in cells {
            let start_run = match active {
                Some(prev) => !prev.same_style(cell),
                None => true,
            };
            if start_run {
                if styled {
                    out.extend_from_slice(ansi::SGR_RESET);
                }
                if cell.color.is_some() || !cell.flags.is_empty() {
                    // Writing to a Vec cannot fail.
                    let _ = ansi::write_sgr_prefix(out, cell.color, cell.flags);
                    styled = true;
                } else {
                    styled = false;
                }
                active = Some(cell);
            }
            out.extend_from_slice(cell.glyph.encode_utf8(&mut glyph_buf).as_bytes());
        }
        styled
    }

    /// Restore the terminal: clear the in-place line, reset SGR state, and
    /// re-show the cursor if hidden. Idempotent.
    pub fn restore(&mut self) -> io::Result<()> {
        self.scratch.clear();
        if self.last_strip_width > 0 {
            self.scratch.push(b'\r');
            self.scratch.extend_from_slice(ansi::CLEAR_LINE);
            self.last_strip_width = 0;
        }
        self.scratch.extend_from_slice(ansi::SGR_RESET);
        if self.cursor_hidden {
            self.scratch.extend_from_slice(ansi::SHOW_CURSOR);
            self.cursor_hidden = false;
        }
        self.writer.write_all(&self.scratch)?;
        self.writer.flush()
    }

    /// Access the underlying writer (tests use this to inspect bytes).
    #[must_use]
    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W: Write> Drop for TermSink<W> {
    fn drop(&mut self) {
        if self.cursor_hidden || self.last_strip_width > 0 {
            let _ = self.restore();
        }
    }
}

impl TermSink<io::Stdout> {
    /// A sink over standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}
