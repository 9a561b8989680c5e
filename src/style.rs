//! Terminal styling for the command line front end.
//!
//! Everything that prints goes through [`Painter`]. It is implemented for any
//! `termcolor::WriteColor`, so a `StandardStream` opened with
//! `ColorChoice::Never` (or a `termcolor::NoColor` buffer) is the plain variant.

use std::io::{self, IsTerminal, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::strength::StrengthReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    Menu,
    Success,
    Highlight,
    Warning,
    Error,
}

impl Tone {
    fn spec(self) -> Option<ColorSpec> {
        let color = match self {
            Tone::Plain     => return None,
            Tone::Heading   => Color::Cyan,
            Tone::Menu      => Color::Magenta,
            Tone::Success   => Color::Green,
            Tone::Highlight => Color::Yellow,
            Tone::Warning   => Color::Yellow,
            Tone::Error     => Color::Red,
        };
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(color));
        Some(spec)
    }

    /// Tone for a strength score: red when weak, yellow in the middle, green when strong.
    pub fn for_score(score: u8) -> Tone {
        match score {
            0 | 1 => Tone::Error,
            2 | 3 => Tone::Warning,
            _ => Tone::Success,
        }
    }
}

pub trait Painter {
    fn paint(&mut self, tone: Tone, text: &str) -> io::Result<()>;

    fn line(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        self.paint(tone, text)?;
        self.paint(Tone::Plain, "\n")
    }
}

impl<W: WriteColor> Painter for W {
    fn paint(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        if let Some(spec) = tone.spec() {
            self.set_color(&spec)?;
            self.write_all(text.as_bytes())?;
            self.reset()?;
        } else {
            self.write_all(text.as_bytes())?;
        }
        self.flush()
    }
}

/// Resolves `auto` against the environment: colors only on a terminal and
/// only when `NO_COLOR` is unset.
pub fn resolve_choice(choice: ColorChoice) -> ColorChoice {
    match choice {
        ColorChoice::Auto => {
            if std::env::var_os("NO_COLOR").is_some() || !io::stdout().is_terminal() {
                ColorChoice::Never
            } else {
                ColorChoice::Auto
            }
        }
        other => other,
    }
}

pub fn stdout(choice: ColorChoice) -> StandardStream {
    StandardStream::stdout(resolve_choice(choice))
}

pub fn strength_bar(score: u8) -> String {
    let filled = usize::from(score.min(5));
    format!("{}{}", "█".repeat(filled), "░".repeat(5 - filled))
}

/// Writes the strength analysis block for `password`.
pub fn display_strength<P: Painter + ?Sized>(
    out: &mut P,
    password: &str,
    report: &StrengthReport,
) -> io::Result<()> {
    out.line(Tone::Plain, "")?;
    out.line(Tone::Heading, "Strength Analysis:")?;
    out.paint(Tone::Plain, "  ")?;
    out.line(
        Tone::for_score(report.score),
        &format!("{} {}", strength_bar(report.score), report.label()),
    )?;
    out.line(
        Tone::Plain,
        &format!("  Length: {} characters", password.chars().count()),
    )?;

    if !report.suggestions.is_empty() {
        out.line(Tone::Plain, "")?;
        out.line(Tone::Warning, "Suggestions:")?;
        for tip in &report.suggestions {
            out.line(Tone::Plain, &format!("  • {}", tip))?;
        }
    }
    Ok(())
}
