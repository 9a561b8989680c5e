use std::fmt;

pub const MAX_SCORE: u8 = 5;

const MIN_LENGTH:    usize = 8;
const GOOD_LENGTH:   usize = 12;
const STRONG_LENGTH: usize = 16;

pub const SUGGEST_LENGTH:    &str = "increase length to at least 8";
pub const SUGGEST_UPPERCASE: &str = "add uppercase letters";
pub const SUGGEST_LOWERCASE: &str = "add lowercase letters";
pub const SUGGEST_DIGITS:    &str = "add digits";
pub const SUGGEST_SYMBOLS:   &str = "add symbols";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    pub score:       u8,
    pub suggestions: Vec<String>,
}

impl StrengthReport {
    pub fn label(&self) -> Label {
        Label::from_score(self.score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

impl Label {
    /// Scores above the maximum map to `VeryStrong`.
    pub fn from_score(score: u8) -> Label {
        match score {
            0 => Label::VeryWeak,
            1 => Label::Weak,
            2 => Label::Fair,
            3 => Label::Good,
            4 => Label::Strong,
            _ => Label::VeryStrong,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::VeryWeak   => "Very Weak",
            Label::Weak       => "Weak",
            Label::Fair       => "Fair",
            Label::Good       => "Good",
            Label::Strong     => "Strong",
            Label::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scores a password from 0 to 5 and lists what would improve it.
///
/// Each check adds one point when it passes: length of at least 8, 12 and 16
/// characters, and the presence of uppercase, lowercase, digit and symbol
/// characters. The sum is capped at [`MAX_SCORE`].
pub fn score(password: &str) -> StrengthReport {
    let length = password.chars().count();
    let mut raw: u8 = 0;
    let mut suggestions = Vec::new();

    let mut check = |passed: bool, suggestion: Option<&str>| {
        if passed {
            raw += 1;
        } else if let Some(s) = suggestion {
            suggestions.push(s.to_string());
        }
    };

    check(length >= MIN_LENGTH, Some(SUGGEST_LENGTH));
    check(length >= GOOD_LENGTH, None);
    check(length >= STRONG_LENGTH, None);
    check(password.chars().any(char::is_uppercase), Some(SUGGEST_UPPERCASE));
    check(password.chars().any(char::is_lowercase), Some(SUGGEST_LOWERCASE));
    check(password.chars().any(|c| c.is_ascii_digit()), Some(SUGGEST_DIGITS));
    check(password.chars().any(|c| c.is_ascii_punctuation()), Some(SUGGEST_SYMBOLS));

    StrengthReport {
        score: raw.min(MAX_SCORE),
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_only_eight_chars() {
        let report = score("abcdefgh");
        assert_eq!(report.score, 2);
        assert_eq!(
            report.suggestions,
            vec![SUGGEST_UPPERCASE, SUGGEST_DIGITS, SUGGEST_SYMBOLS]
        );
        assert_eq!(report.label(), Label::Fair);
    }

    #[test]
    fn all_classes_twelve_chars_is_capped() {
        let report = score("Ab3!xyz9QQ22");
        assert_eq!(report.score, 5);
        assert!(report.suggestions.is_empty());
        assert_eq!(report.label().to_string(), "Very Strong");
    }

    #[test]
    fn empty_password() {
        let report = score("");
        assert_eq!(report.score, 0);
        assert_eq!(
            report.suggestions,
            vec![
                SUGGEST_LENGTH,
                SUGGEST_UPPERCASE,
                SUGGEST_LOWERCASE,
                SUGGEST_DIGITS,
                SUGGEST_SYMBOLS,
            ]
        );
        assert_eq!(report.label(), Label::VeryWeak);
    }

    #[test]
    fn short_password_gets_length_suggestion() {
        let report = score("Ab1!");
        assert_eq!(report.score, 4);
        assert_eq!(report.suggestions, vec![SUGGEST_LENGTH]);
    }

    #[test]
    fn length_tiers() {
        assert_eq!(score("aaaaaaa").score, 1);
        assert_eq!(score("aaaaaaaa").score, 2);
        assert_eq!(score("aaaaaaaaaaaa").score, 3);
        assert_eq!(score("aaaaaaaaaaaaaaaa").score, 4);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 4 chars, 8 bytes
        let report = score("éééé");
        assert!(report.suggestions.contains(&SUGGEST_LENGTH.to_string()));
    }

    #[test]
    fn whitespace_is_not_a_symbol() {
        let report = score("abc def");
        assert!(report.suggestions.contains(&SUGGEST_SYMBOLS.to_string()));
    }

    #[test]
    fn score_is_deterministic_and_bounded() {
        for pwd in ["", "a", "password", "MyPass123!", "VeryStrongPassword123!@#"] {
            let first = score(pwd);
            assert_eq!(first, score(pwd));
            assert!(first.score <= MAX_SCORE);
        }
    }

    #[test]
    fn labels_for_every_score() {
        let labels: Vec<&str> = (0..=MAX_SCORE).map(|s| Label::from_score(s).as_str()).collect();
        assert_eq!(
            labels,
            vec!["Very Weak", "Weak", "Fair", "Good", "Strong", "Very Strong"]
        );
    }
}
