// The real terminal: colored output on stdout, line input from stdin
//
// The typing effect is just a flush and a sleep per character.

use crate::error::Result;
use crate::ui::presenter::Presenter;
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

const DIVIDER_WIDTH: usize = 40;
const BANNER_RULE: char = '═';

pub struct TerminalPresenter {
    color: bool,
    closed: bool,
}

impl TerminalPresenter {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            closed: false,
        }
    }

    /// Boxed welcome text, each line typed out inside a `*` frame
    pub fn show_welcome(&mut self, lines: &[String], per_char_delay_ms: u64) -> Result<()> {
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let border = "*".repeat(width + 6);

        self.write_line("")?;
        self.write_line(&border)?;
        for line in lines {
            let padded = format!("{:<width$}", line, width = width);
            self.write_prompt("*  ")?;
            self.type_out(&padded, per_char_delay_ms, false)?;
            self.write_line("  *")?;
        }
        self.write_line(&border)
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if !self.color {
            return text.to_string();
        }
        match style {
            Style::Plain => text.to_string(),
            Style::Assistant => text.bright_cyan().to_string(),
            Style::Error => text.red().to_string(),
            Style::Banner => text.magenta().to_string(),
            Style::Divider => text.bright_black().to_string(),
            Style::Title => text.white().bold().to_string(),
        }
    }

    fn type_out(&self, text: &str, per_char_delay_ms: u64, newline: bool) -> Result<()> {
        let mut stdout = io::stdout().lock();

        if per_char_delay_ms == 0 {
            write!(stdout, "{}", self.paint(text, Style::Assistant))?;
        } else {
            let delay = Duration::from_millis(per_char_delay_ms);
            for c in text.chars() {
                write!(stdout, "{}", self.paint(&c.to_string(), Style::Assistant))?;
                stdout.flush()?;
                thread::sleep(delay);
            }
        }

        if newline {
            writeln!(stdout)?;
        }
        stdout.flush()?;
        Ok(())
    }
}

#[derive(Clone, Copy)]
enum Style {
    Plain,
    Assistant,
    Error,
    Banner,
    Divider,
    Title,
}

impl Presenter for TerminalPresenter {
    fn write_line(&mut self, text: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", self.paint(text, Style::Plain))?;
        Ok(())
    }

    fn write_typed(&mut self, text: &str, per_char_delay_ms: u64) -> Result<()> {
        self.type_out(text, per_char_delay_ms, true)
    }

    fn write_prompt(&mut self, text: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", self.paint(text, Style::Title))?;
        stdout.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => {
                self.closed = true;
                None
            }
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            // not valid UTF-8 or similar: treat as nothing entered
            Err(_) => None,
        }
    }

    fn show_error(&mut self, text: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", self.paint(text, Style::Error))?;
        Ok(())
    }

    fn show_banner(&mut self, title: &str) -> Result<()> {
        let spaced: String = title
            .to_uppercase()
            .chars()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let width = spaced.chars().count().max(DIVIDER_WIDTH);
        let rule: String = std::iter::repeat(BANNER_RULE).take(width).collect();

        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", self.paint(&rule, Style::Banner))?;
        writeln!(
            stdout,
            "{}",
            self.paint(&format!("{:^width$}", spaced, width = width), Style::Banner)
        )?;
        writeln!(stdout, "{}", self.paint(&rule, Style::Banner))?;
        Ok(())
    }

    fn show_divider(&mut self, title: &str) -> Result<()> {
        let line = "-".repeat(DIVIDER_WIDTH);
        let mut stdout = io::stdout().lock();
        writeln!(stdout)?;
        writeln!(stdout, "{}", self.paint(&line, Style::Divider))?;
        writeln!(stdout, "{}", self.paint(&format!("[ {} ]", title), Style::Title))?;
        writeln!(stdout, "{}", self.paint(&line, Style::Divider))?;
        writeln!(stdout)?;
        Ok(())
    }

    fn input_closed(&self) -> bool {
        self.closed
    }
}
