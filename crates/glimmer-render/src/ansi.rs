#![forbid(unsafe_code)]

//! ANSI escape sequence generation.
//!
//! Pure byte-generation helpers for the VT100/ANSI subset Glimmer emits.
//! No state tracking, no flushing; the sink decides when bytes hit the
//! terminal.
//!
//! # Sequence Reference
//!
//! | Sequence | Description |
//! |----------|-------------|
//! | `ESC [ 0 m` | SGR reset |
//! | `ESC [ n m` | SGR (color/style) |
//! | `ESC [ 38 ; 5 ; n m` | 256-palette foreground |
//! | `ESC [ 38 ; 2 ; r ; g ; b m` | 24-bit RGB foreground |
//! | `ESC [ 2 K` | Erase entire line |
//! | `ESC [ 2 J` | Erase entire display |
//! | `ESC [ H` | Cursor home |
//! | `ESC [ row ; col H` | Cursor position (1-indexed) |
//! | `ESC [ ? 25 l` / `h` | Hide / show cursor |

use std::io::{self, Write};

use crate::cell::{ColorRef, StyleFlags};

/// SGR reset: `CSI 0 m`.
pub const SGR_RESET: &[u8] = b"\x1b[0m";
/// Erase entire line: `CSI 2 K`.
pub const CLEAR_LINE: &[u8] = b"\x1b[2K";
/// Erase entire display: `CSI 2 J`.
pub const CLEAR_SCREEN: &[u8] = b"\x1b[2J";
/// Cursor home: `CSI H`.
pub const CURSOR_HOME: &[u8] = b"\x1b[H";
/// Hide cursor: `CSI ? 25 l`.
pub const HIDE_CURSOR: &[u8] = b"\x1b[?25l";
/// Show cursor: `CSI ? 25 h`.
pub const SHOW_CURSOR: &[u8] = b"\x1b[?25h";

#[inline]
fn write_u8_dec<W: Write>(w: &mut W, n: u8) -> io::Result<()> {
    let mut buf = [0u8; 3];
    let len = if n >= 100 {
        buf[0] = b'0' + n / 100;
        buf[1] = b'0' + (n / 10) % 10;
        buf[2] = b'0' + n % 10;
        3
    } else if n >= 10 {
        buf[0] = b'0' + n / 10;
        buf[1] = b'0' + n % 10;
        2
    } else {
        buf[0] = b'0' + n;
        1
    };
    w.write_all(&buf[..len])
}

/// Write the SGR foreground sequence for a [`ColorRef`].
///
/// Named colors use the single-code form (`CSI 31 m`), palette colors the
/// `38;5` form, RGB the `38;2` form.
pub fn write_fg<W: Write>(w: &mut W, color: ColorRef) -> io::Result<()> {
    match color {
        ColorRef::Named(named) => {
            w.write_all(b"\x1b[")?;
            write_u8_dec(w, named.sgr_code())?;
            w.write_all(b"m")
        }
        ColorRef::Indexed(n) => {
            w.write_all(b"\x1b[38;5;")?;
            write_u8_dec(w, n)?;
            w.write_all(b"m")
        }
        ColorRef::Rgb(r, g, b) => {
            w.write_all(b"\x1b[38;2;")?;
            write_u8_dec(w, r)?;
            w.write_all(b";")?;
            write_u8_dec(w, g)?;
            w.write_all(b";")?;
            write_u8_dec(w, b)?;
            w.write_all(b"m")
        }
    }
}

/// Write one SGR sequence per set style flag.
pub fn write_flags<W: Write>(w: &mut W, flags: StyleFlags) -> io::Result<()> {
    for flag in flags.iter() {
        if let Some(code) = StyleFlags::sgr_code(flag) {
            w.write_all(b"\x1b[")?;
            write_u8_dec(w, code)?;
            w.write_all(b"m")?;
        }
    }
    Ok(())
}

/// Write the full SGR prefix for an optional color plus style flags.
///
/// The matching suffix is always the single shared [`SGR_RESET`].
pub fn write_sgr_prefix<W: Write>(
    w: &mut W,
    color: Option<ColorRef>,
    flags: StyleFlags,
) -> io::Result<()> {
    if let Some(color) = color {
        write_fg(w, color)?;
    }
    write_flags(w, flags)
}

/// Write the 1-indexed cursor-position sequence `CSI row ; col H`.
pub fn write_cursor_pos<W: Write>(w: &mut W, row: u16, col: u16) -> io::Result<()> {
    write!(w, "\x1b[{row};{col}H")
}
