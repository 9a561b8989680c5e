use std::io::{self, BufRead};

use onepass_gen::style::{Painter, Tone};

use crate::app::AppError;

/// Prints `msg` and reads one line. `None` once input is exhausted.
pub fn ask<P, R>(out: &mut P, input: &mut R, msg: &str) -> io::Result<Option<String>>
where
    P: Painter + ?Sized,
    R: BufRead + ?Sized,
{
    out.paint(Tone::Heading, msg)?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string()))
}

/// Reads an integer, falling back to `default` on an empty answer.
pub fn ask_number<P, R>(out: &mut P, input: &mut R, msg: &str, default: i64) -> Result<i64, AppError>
where
    P: Painter + ?Sized,
    R: BufRead + ?Sized,
{
    let answer = ask(out, input, msg)?.unwrap_or_default();
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(default);
    }
    answer
        .parse()
        .map_err(|_| AppError::InvalidNumber(answer.to_string()))
}

/// Reads a y/n answer; anything else means `default`.
pub fn ask_yes_no<P, R>(out: &mut P, input: &mut R, msg: &str, default: bool) -> io::Result<bool>
where
    P: Painter + ?Sized,
    R: BufRead + ?Sized,
{
    let answer = ask(out, input, msg)?.unwrap_or_default();
    Ok(match answer.trim().to_lowercase().as_str() {
        "y" => true,
        "n" => false,
        _ => default,
    })
}

/// Reads a secret without echoing it to the terminal.
pub fn ask_hidden(msg: &str) -> io::Result<String> {
    rpassword::prompt_password(msg)
}
