//! One-shot command output for `show`, `list` and `play`.
//!
//! Plain output is the text view framed by a heading and the next command
//! to try. JSON output is the bare view model, or the emitted event for
//! `play`.

use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::presentation::view_models::CommandOutput;
use crate::types::OutputFormat;

pub struct ConsoleRenderer<W: Write> {
    out: W,
    format: OutputFormat,
    color: bool,
}

impl ConsoleRenderer<io::Stdout> {
    /// Colors only when stdout is a terminal.
    pub fn stdout(format: OutputFormat) -> Self {
        let out = io::stdout();
        let color = out.is_terminal();
        Self { out, format, color }
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            color: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn render(&mut self, output: &CommandOutput) -> Result<()> {
        if self.format.is_json() {
            let json = match output {
                CommandOutput::Screen(screen) => serde_json::to_string_pretty(screen)?,
                CommandOutput::Catalog(catalog) => serde_json::to_string_pretty(catalog)?,
                CommandOutput::Playback(playback) => serde_json::to_string_pretty(&playback.event)?,
            };
            writeln!(self.out, "{}", json)?;
            self.out.flush()?;
            return Ok(());
        }

        match output {
            CommandOutput::Screen(screen) => {
                self.heading(&format!("Pick {} of {}", screen.index + 1, screen.total))?;
                write!(self.out, "{}", screen)?;
                let next = (screen.index + 1) % screen.total;
                self.next_step("Next pick", &format!("cinelane show --index {}", next))?;
            }
            CommandOutput::Catalog(catalog) => {
                self.heading(&format!("{} recommendations", catalog.entries.len()))?;
                write!(self.out, "{}", catalog)?;
                self.next_step("Browse them", "cinelane browse")?;
            }
            CommandOutput::Playback(playback) => write!(self.out, "{}", playback)?,
        }

        self.out.flush()?;
        Ok(())
    }

    fn heading(&mut self, label: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}\n", label.bold())
        } else {
            writeln!(self.out, "{}\n", label)
        }
    }

    fn next_step(&mut self, label: &str, command: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "\n{}: {}", label.dimmed(), command.cyan())
        } else {
            writeln!(self.out, "\n{}: {}", label, command)
        }
    }
}
