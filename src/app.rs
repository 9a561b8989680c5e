use std::io::{self, BufRead};

use log::{debug, info, warn};
use thiserror::Error;

use onepass_gen::clipboard::ClipboardWriter;
use onepass_gen::password::DEFAULT_LENGTH;
use onepass_gen::style::{display_strength, Painter, Tone};
use onepass_gen::{
    generate, generate_many, generate_memorable, score, Category, ConfigError, GenerationConfig,
    Password,
};

use crate::command::{clamp_count, clamp_length, clamp_words, GenerateArgs, MemorableArgs, DEFAULT_WORDS};
use crate::input::{ask, ask_hidden, ask_number, ask_yes_no};
use crate::text;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Command line front end. Output, input and clipboard are supplied by `main`.
pub struct App<P, R> {
    out:        P,
    input:      R,
    clipboard:  Option<Box<dyn ClipboardWriter>>,
    hide_input: bool,
}

impl<P: Painter, R: BufRead> App<P, R> {
    pub fn new(out: P, input: R, clipboard: Option<Box<dyn ClipboardWriter>>, hide_input: bool) -> Self {
        App { out, input, clipboard, hide_input }
    }

    pub fn generate(&mut self, args: &GenerateArgs) -> Result<()> {
        let config = args.config();
        let count = args.count();

        if count == 1 {
            let password = generate(&config)?;
            self.out.paint(Tone::Success, "Password: ")?;
            self.out.line(Tone::Highlight, password.as_str())?;
            self.show_strength(password.as_str())?;
            if args.copy {
                self.copy(password.as_str())?;
            }
        } else {
            let passwords = generate_many(count, &config)?;
            self.out.line(Tone::Success, &format!("Generated {} passwords:", count))?;
            self.out.line(Tone::Plain, "")?;
            self.list(&passwords)?;
        }
        Ok(())
    }

    pub fn memorable(&mut self, args: &MemorableArgs) -> Result<()> {
        let phrase = generate_memorable(
            args.word_count(),
            &args.separator,
            !args.no_capitalize,
            !args.no_number,
        );
        self.out.paint(Tone::Success, "Passphrase: ")?;
        self.out.line(Tone::Highlight, phrase.as_str())?;
        self.show_strength(phrase.as_str())?;
        if args.copy {
            self.copy(phrase.as_str())?;
        }
        Ok(())
    }

    pub fn analyze(&mut self, password: &str) -> Result<()> {
        self.out.line(Tone::Heading, text::MSG_ANALYZING)?;
        self.show_strength(password)?;
        Ok(())
    }

    /// Runs the menu until the user quits or input runs out.
    pub fn interactive(&mut self) -> Result<()> {
        self.out.line(Tone::Heading, text::BANNER)?;
        if self.clipboard.is_none() {
            self.out.line(Tone::Warning, text::MSG_NO_CLIPBOARD)?;
            self.out.line(Tone::Plain, "")?;
        }

        loop {
            self.out.line(Tone::Menu, text::MENU_TITLE)?;
            self.out.line(Tone::Plain, "")?;
            self.out.line(Tone::Plain, text::MENU)?;

            let Some(choice) = ask(&mut self.out, &mut self.input, text::PROMPT_CHOICE)? else {
                debug!("input closed, leaving menu");
                return Ok(());
            };

            let outcome = match choice.trim() {
                "1" => self.menu_standard(),
                "2" => self.menu_memorable(),
                "3" => self.menu_multiple(),
                "4" => self.menu_custom(),
                "5" => self.menu_analyze(),
                "6" => {
                    self.out.line(Tone::Plain, "")?;
                    self.out.line(Tone::Success, text::MSG_GOODBYE)?;
                    return Ok(());
                }
                _ => self
                    .out
                    .line(Tone::Error, text::MSG_INVALID_CHOICE)
                    .map_err(AppError::from),
            };

            match outcome {
                Ok(()) => {}
                Err(AppError::Io(err)) => return Err(AppError::Io(err)),
                Err(err) => self.out.line(Tone::Error, &format!("✗ Error: {}", err))?,
            }

            self.out.line(Tone::Plain, "")?;
            ask(&mut self.out, &mut self.input, text::PROMPT_CONTINUE)?;
            self.out.paint(Tone::Plain, "\n\n")?;
        }
    }

    fn menu_standard(&mut self) -> Result<()> {
        let length = ask_number(&mut self.out, &mut self.input, text::PROMPT_LENGTH, DEFAULT_LENGTH as i64)?;
        let password = generate(&GenerationConfig::new(clamp_length(length)))?;
        self.present(text::MSG_PASSWORD, &password)
    }

    fn menu_memorable(&mut self) -> Result<()> {
        let words = ask_number(&mut self.out, &mut self.input, text::PROMPT_WORDS, DEFAULT_WORDS)?;
        let phrase = generate_memorable(clamp_words(words), "-", true, true);
        self.present(text::MSG_PASSPHRASE, &phrase)
    }

    fn menu_multiple(&mut self) -> Result<()> {
        let count = ask_number(&mut self.out, &mut self.input, text::PROMPT_COUNT, text::DEFAULT_COUNT)?;
        let count = clamp_count(count);
        let length = ask_number(
            &mut self.out,
            &mut self.input,
            text::PROMPT_LENGTH_SHORT,
            DEFAULT_LENGTH as i64,
        )?;

        let passwords = generate_many(count, &GenerationConfig::new(clamp_length(length)))?;
        self.out.line(Tone::Plain, "")?;
        self.out.line(Tone::Success, &format!("Generated {} Passwords:", count))?;
        self.list(&passwords)?;
        Ok(())
    }

    fn menu_custom(&mut self) -> Result<()> {
        self.out.line(Tone::Plain, "")?;
        self.out.line(Tone::Heading, text::MSG_CUSTOMIZE)?;

        let length = ask_number(&mut self.out, &mut self.input, text::PROMPT_LENGTH, DEFAULT_LENGTH as i64)?;

        let mut categories = Vec::new();
        for (category, prompt) in [
            (Category::Uppercase, text::PROMPT_UPPER),
            (Category::Lowercase, text::PROMPT_LOWER),
            (Category::Digit,     text::PROMPT_DIGITS),
            (Category::Symbol,    text::PROMPT_SYMBOLS),
        ] {
            if ask_yes_no(&mut self.out, &mut self.input, prompt, true)? {
                categories.push(category);
            }
        }
        let exclude_ambiguous = ask_yes_no(&mut self.out, &mut self.input, text::PROMPT_AMBIGUOUS, true)?;

        let config = GenerationConfig {
            length: clamp_length(length),
            categories,
            exclude_ambiguous,
        };
        let password = generate(&config)?;
        self.present(text::MSG_PASSWORD, &password)
    }

    fn menu_analyze(&mut self) -> Result<()> {
        self.out.line(Tone::Plain, "")?;
        let password = if self.hide_input {
            ask_hidden(text::PROMPT_ANALYZE)?
        } else {
            ask(&mut self.out, &mut self.input, text::PROMPT_ANALYZE)?.unwrap_or_default()
        };
        self.show_strength(&password)?;
        Ok(())
    }

    fn present(&mut self, title: &str, password: &Password) -> Result<()> {
        self.out.line(Tone::Plain, "")?;
        self.out.line(Tone::Success, title)?;
        self.out.line(Tone::Highlight, password.as_str())?;
        self.show_strength(password.as_str())?;

        if self.clipboard.is_some() {
            self.out.line(Tone::Plain, "")?;
            if ask_yes_no(&mut self.out, &mut self.input, text::PROMPT_COPY, false)? {
                self.copy(password.as_str())?;
            }
        }
        Ok(())
    }

    fn list(&mut self, passwords: &[Password]) -> io::Result<()> {
        for (i, password) in passwords.iter().enumerate() {
            self.out.line(Tone::Plain, &format!("{:2}. {}", i + 1, password))?;
        }
        Ok(())
    }

    fn show_strength(&mut self, password: &str) -> io::Result<()> {
        let report = score(password);
        display_strength(&mut self.out, password, &report)
    }

    /// Clipboard failures are reported, not returned.
    fn copy(&mut self, secret: &str) -> io::Result<()> {
        let Some(clipboard) = self.clipboard.as_mut() else {
            return self.out.line(Tone::Warning, text::MSG_NO_CLIPBOARD);
        };
        match clipboard.write(secret) {
            Ok(()) => {
                info!("copied {} characters to clipboard", secret.chars().count());
                self.out.line(Tone::Success, text::MSG_COPIED)
            }
            Err(err) => {
                warn!("{}", err);
                self.out.line(Tone::Error, &format!("✗ {}", err))
            }
        }
    }
}
