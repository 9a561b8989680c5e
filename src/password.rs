use std::fmt;

use log::debug;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

use crate::category::Category;
use crate::error::{ConfigError, Result};
use crate::words::WORDS;

pub const DEFAULT_LENGTH: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length:            usize,
    pub categories:        Vec<Category>,
    pub exclude_ambiguous: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            length: DEFAULT_LENGTH,
            categories: Category::ALL.to_vec(),
            exclude_ambiguous: true,
        }
    }
}

impl GenerationConfig {
    pub fn new(length: usize) -> Self {
        GenerationConfig { length, ..Default::default() }
    }

    /// Enabled categories in canonical order, each listed once.
    pub fn enabled(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.categories.contains(c))
            .collect()
    }

    /// Length of the produced password: never shorter than one character per category.
    pub fn effective_length(&self) -> usize {
        self.length.max(self.enabled().len())
    }
}

/// A generated password or passphrase.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Keep secrets out of debug output and logs.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password({} chars)", self.char_count())
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub fn generate(config: &GenerationConfig) -> Result<Password> {
    generate_with(&mut OsRng, config)
}

pub fn generate_many(count: usize, config: &GenerationConfig) -> Result<Vec<Password>> {
    generate_many_with(&mut OsRng, count, config)
}

pub fn generate_memorable(
    word_count: usize,
    separator: &str,
    capitalize: bool,
    append_number: bool,
) -> Password {
    generate_memorable_with(&mut OsRng, word_count, separator, capitalize, append_number)
}

pub fn generate_with<R: Rng + CryptoRng>(rng: &mut R, config: &GenerationConfig) -> Result<Password> {
    let sets = effective_sets(config)?;
    Ok(assemble(rng, &sets, config.length))
}

pub fn generate_many_with<R: Rng + CryptoRng>(
    rng: &mut R,
    count: usize,
    config: &GenerationConfig,
) -> Result<Vec<Password>> {
    let sets = effective_sets(config)?;
    let passwords: Vec<Password> = (0..count)
        .map(|_| assemble(&mut *rng, &sets, config.length))
        .collect();
    debug!("generated {} passwords", passwords.len());
    Ok(passwords)
}

pub fn generate_memorable_with<R: Rng + CryptoRng>(
    rng: &mut R,
    word_count: usize,
    separator: &str,
    capitalize: bool,
    append_number: bool,
) -> Password {
    let selected: Vec<String> = (0..word_count)
        .map(|_| {
            let word = WORDS[rng.gen_range(0..WORDS.len())];
            if capitalize {
                capitalized(word)
            } else {
                word.to_string()
            }
        })
        .collect();

    let mut phrase = selected.join(separator);
    if append_number {
        let number: u8 = rng.gen_range(0..100);
        phrase.push_str(&number.to_string());
    }

    debug!("generated passphrase of {} words", word_count);
    Password(phrase)
}

/// Effective character set for every enabled category, computed once per call.
fn effective_sets(config: &GenerationConfig) -> Result<Vec<Vec<char>>> {
    let enabled = config.enabled();
    if enabled.is_empty() {
        return Err(ConfigError::NoCategories);
    }
    enabled
        .into_iter()
        .map(|category| category.effective_set(config.exclude_ambiguous))
        .collect()
}

fn assemble<R: Rng + CryptoRng>(rng: &mut R, sets: &[Vec<char>], length: usize) -> Password {
    let length = length.max(sets.len());
    let mut password: Vec<char> = Vec::with_capacity(length);

    // One character from every category first
    for set in sets {
        password.push(pick(rng, set));
    }

    let all_chars: Vec<char> = sets.concat();

    // Fill the rest of the password
    for _ in sets.len()..length {
        password.push(pick(rng, &all_chars));
    }

    password.shuffle(rng);

    debug!(
        "generated password of {} chars from {} categories",
        password.len(),
        sets.len()
    );
    Password(password.into_iter().collect())
}

fn pick<R: Rng + CryptoRng>(rng: &mut R, set: &[char]) -> char {
    set[rng.gen_range(0..set.len())]
}

fn capitalized(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
