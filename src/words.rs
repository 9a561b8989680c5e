/// Word list for passphrases. Entries are lowercase ASCII.
pub const WORDS: [&str; 42] = [
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot",
    "golf", "hotel", "india", "juliet", "kilo", "lima",
    "mike", "november", "oscar", "papa", "quebec", "romeo",
    "sierra", "tango", "uniform", "victor", "whiskey", "xray",
    "yankee", "zulu", "coffee", "python", "tiger", "ocean",
    "mountain", "river", "forest", "desert", "cloud", "thunder",
    "lightning", "rainbow", "sunset", "sunrise", "winter", "summer",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_lowercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for word in WORDS {
            assert!(!word.is_empty());
            assert!(word.chars().all(|c| c.is_ascii_lowercase()), "{}", word);
            assert!(seen.insert(word), "duplicate word {}", word);
        }
    }
}
