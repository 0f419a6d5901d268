//! Terminal rendering for the wizard's markdown reports.
//!
//! Listing summaries, validation reports, and submission results all come
//! out of `innkeeper-core::display` as markdown; this renderer prints them
//! rich through termimad or verbatim when color is off.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        Self {
            rich_enabled,
            skin: listing_skin(),
        }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{}", markdown);
            return Ok(());
        }
        for line in markdown.lines() {
            if line.starts_with('#') {
                // Listing and room headings keep their hash markers so the
                // aggregate structure stays scannable in scrollback.
                print!("\x1b[36m{line}\x1b[0m");
                println!();
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }
}

/// Skin tuned for the listing reports: cyan section headings, amounts and
/// step names (bold) in green, validation reasons (italic) left plain.
fn listing_skin() -> MadSkin {
    let mut skin = MadSkin::default();
    skin.set_headers_fg(Color::Cyan);
    skin.bold.set_fg(Color::Green);
    skin.inline_code.set_bg(Color::AnsiValue(236));
    skin
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
