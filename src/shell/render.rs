//! Drawing screens onto a terminal.

use super::view::{hint, screen_lines, FrameSize, PIXELS_PER_COLUMN};
use crate::config::Config;
use crate::core::Screen;
use std::io::{self, Write};

/// Something that can present the current screen.
pub trait Renderer {
    /// Clear the previous screen and draw `screen`.
    fn render(&mut self, screen: &Screen) -> io::Result<()>;

    /// Show a transient message below the current screen.
    fn notice(&mut self, message: &str) -> io::Result<()>;
}

/// Renders screens as centred text.
#[derive(Debug)]
pub struct TerminalRenderer<W: Write> {
    out: W,
    columns: usize,
    frame: FrameSize,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, config: &Config) -> Self {
        Self {
            out,
            columns: (config.window_width / PIXELS_PER_COLUMN).max(1) as usize,
            frame: FrameSize::from_config(config),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn centred(&mut self, line: &str) -> io::Result<()> {
        let pad = self.columns.saturating_sub(line.chars().count()) / 2;
        writeln!(self.out, "{:pad$}{line}", "")
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, screen: &Screen) -> io::Result<()> {
        if screen.is_final() {
            return self.out.flush();
        }

        writeln!(self.out, "{}", "=".repeat(self.columns))?;
        for line in screen_lines(screen, self.frame) {
            self.centred(&line)?;
        }
        writeln!(self.out)?;
        self.centred(hint(screen))?;
        write!(self.out, "> ")?;
        self.out.flush()
    }

    fn notice(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{message}")?;
        write!(self.out, "> ")?;
        self.out.flush()
    }
}
