//! Terminal rendering for the markdown produced by the display layer.
//!
//! Rich mode styles headers and inline markdown with termimad; plain mode
//! prints the markdown untouched, which keeps output stable for scripts and
//! tests.

use std::io::Write;

use anyhow::{Context, Result};
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Cyan);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();

        if !self.rich_enabled {
            write!(stdout, "{markdown}").context("Failed to write output")?;
            return stdout.flush().context("Failed to flush output");
        }

        for line in markdown.lines() {
            // Keep the hash marks visible so goal ids stay greppable
            let written = if line.starts_with('#') {
                writeln!(stdout, "\x1b[32m{line}\x1b[0m")
            } else {
                writeln!(stdout, "{}", self.skin.inline(line))
            };
            written.context("Failed to write output")?;
        }
        stdout.flush().context("Failed to flush output")
    }

    /// Render anything with a markdown `Display` implementation
    pub fn show(&self, value: &impl std::fmt::Display) -> Result<()> {
        self.render(&value.to_string())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
