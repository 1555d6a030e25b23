//! Terminal rendering for markdown output.
//!
//! Rich mode colors headings itself and hands every other block to termimad,
//! which also lays out the health board table. Plain mode prints the
//! markdown unchanged.

use anyhow::Result;
use termimad::{MadSkin, crossterm::style::Color};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        let mut block = String::new();
        for line in markdown.lines() {
            if line.starts_with('#') {
                self.flush(&mut block);
                println!("\x1b[34m{line}\x1b[0m");
            } else {
                block.push_str(line);
                block.push('\n');
            }
        }
        self.flush(&mut block);
        Ok(())
    }

    fn flush(&self, block: &mut String) {
        if !block.is_empty() {
            self.skin.print_text(block);
            block.clear();
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
