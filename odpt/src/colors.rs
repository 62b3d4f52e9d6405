use std::env;
use std::io::stdout;

use colored::{ColoredString, Colorize};
use is_terminal::IsTerminal;

/// When to emit ANSI colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Colour only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(format!(
                "Invalid color mode: '{}'. Valid options: auto, always, never",
                s
            )),
        }
    }
}

/// TTY-aware styling that respects `NO_COLOR`
#[derive(Debug, Clone)]
pub struct ColorHelper {
    enabled: bool,
}

impl ColorHelper {
    pub fn new(mode: ColorMode) -> Self {
        let no_color = env::var("NO_COLOR").is_ok_and(|value| !value.is_empty());
        Self::resolve(mode, stdout().is_terminal(), no_color)
    }

    fn resolve(mode: ColorMode, is_terminal: bool, no_color: bool) -> Self {
        let enabled = !no_color
            && match mode {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => is_terminal,
            };
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> ColoredString {
        if self.enabled { style(text) } else { text.normal() }
    }

    pub fn red(&self, text: &str) -> ColoredString {
        self.paint(text, |t| t.red().bold())
    }

    pub fn green(&self, text: &str) -> ColoredString {
        self.paint(text, |t| t.green())
    }

    pub fn yellow(&self, text: &str) -> ColoredString {
        self.paint(text, |t| t.yellow())
    }

    pub fn cyan(&self, text: &str) -> ColoredString {
        self.paint(text, |t| t.cyan())
    }

    pub fn bold(&self, text: &str) -> ColoredString {
        self.paint(text, |t| t.bold())
    }

    pub fn dimmed(&self, text: &str) -> ColoredString {
        self.paint(text, |t| t.dimmed())
    }

    /// Render `text` in a railway's line colour (`odpt:color`, `#RRGGBB`).
    /// Falls back to bold when the colour is missing or malformed.
    pub fn line(&self, text: &str, color: Option<&str>) -> ColoredString {
        if !self.enabled {
            return text.normal();
        }
        match color.and_then(parse_hex) {
            Some((r, g, b)) => text.truecolor(r, g, b).bold(),
            None => text.bold(),
        }
    }
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
