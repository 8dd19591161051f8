//! Coloured console output for progress and summary lines.
//!
//! Colour is only emitted when stdout is a terminal that supports it, so piped
//! output (for example `shard plan --output json | jq`) stays plain.

use owo_colors::{OwoColorize, Style};

fn paint(text: &str, style: Style) -> String {
    if supports_color::on(supports_color::Stream::Stdout).is_some() {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Styles for the kinds of text the tool prints.
pub trait Colorize {
    /// The final summary of a successful run, in bold green.
    fn success(&self) -> String;
    /// Labels such as `Created:`, in cyan.
    fn info(&self) -> String;
    /// Separators and other secondary text.
    fn dim(&self) -> String;
}

impl<T: AsRef<str> + ?Sized> Colorize for T {
    fn success(&self) -> String {
        paint(self.as_ref(), Style::new().green().bold())
    }

    fn info(&self) -> String {
        paint(self.as_ref(), Style::new().cyan())
    }

    fn dim(&self) -> String {
        paint(self.as_ref(), Style::new().dimmed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styled_text_keeps_its_content() {
        // Captured test output may or may not support colour.
        assert!("Created:".info().contains("Created:"));
        assert!("done".to_string().success().contains("done"));
        assert!("->".dim().contains("->"));
    }
}
