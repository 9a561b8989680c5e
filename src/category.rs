use std::fmt;

use crate::error::ConfigError;

const UPPERCASE: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
const NUMBERS:   &[u8; 10] = b"0123456789";
const SYMBOLS:   &[u8; 32] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Characters that are easy to confuse with one another when read back.
pub const AMBIGUOUS: &[u8; 7] = b"il1Lo0O";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Uppercase,
        Category::Lowercase,
        Category::Digit,
        Category::Symbol,
    ];

    pub fn base_set(self) -> &'static [u8] {
        match self {
            Category::Uppercase => UPPERCASE,
            Category::Lowercase => LOWERCASE,
            Category::Digit     => NUMBERS,
            Category::Symbol    => SYMBOLS,
        }
    }

    /// The category's characters after optional ambiguous-character removal.
    pub fn effective_set(self, exclude_ambiguous: bool) -> Result<Vec<char>, ConfigError> {
        let set = filter_set(self.base_set(), exclude_ambiguous);
        if set.is_empty() {
            return Err(ConfigError::EmptyCategory(self));
        }
        Ok(set)
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.base_set().contains(&(c as u8))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Uppercase => "uppercase",
            Category::Lowercase => "lowercase",
            Category::Digit     => "digit",
            Category::Symbol    => "symbol",
        };
        f.write_str(name)
    }
}

pub fn is_ambiguous(c: char) -> bool {
    c.is_ascii() && AMBIGUOUS.contains(&(c as u8))
}

fn filter_set(base: &[u8], exclude_ambiguous: bool) -> Vec<char> {
    base.iter()
        .copied()
        .filter(|b| !exclude_ambiguous || !AMBIGUOUS.contains(b))
        .map(char::from)
        .collect()
}
