use clap::{Args, Parser, Subcommand, ValueEnum};
use termcolor::ColorChoice;

use onepass_gen::password::DEFAULT_LENGTH;
use onepass_gen::{Category, GenerationConfig};

pub const MIN_LENGTH:    i64 = 8;
pub const MAX_LENGTH:    i64 = 64;
pub const MIN_COUNT:     i64 = 1;
pub const MAX_COUNT:     i64 = 20;
pub const MIN_WORDS:     i64 = 3;
pub const MAX_WORDS:     i64 = 8;
pub const DEFAULT_WORDS: i64 = 4;

pub fn clamp_length(length: i64) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH) as usize
}

pub fn clamp_count(count: i64) -> usize {
    count.clamp(MIN_COUNT, MAX_COUNT) as usize
}

pub fn clamp_words(words: i64) -> usize {
    words.clamp(MIN_WORDS, MAX_WORDS) as usize
}

#[derive(Parser, Debug)]
#[command(name = "onepass-gen", version)]
#[command(about = "Secure password generator with strength analysis", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Kind>,

    /// Start the interactive menu
    #[arg(short, long)]
    pub interactive: bool,

    /// When to color output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, env = "ONEPASS_COLOR", global = true)]
    pub color: ColorMode,

    /// Never touch the system clipboard
    #[arg(long, global = true)]
    pub no_clipboard: bool,
}

#[derive(Subcommand, Debug)]
pub enum Kind {
    /// Generate one or more random passwords
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Generate a memorable passphrase
    Memorable(MemorableArgs),

    /// Analyze the strength of a password
    Analyze {
        /// Password to analyze
        password: String,
    },

    /// Start the interactive menu
    #[command(alias = "i")]
    Interactive,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Password length (8-64)
    #[arg(short, long, default_value_t = DEFAULT_LENGTH as i64, allow_negative_numbers = true)]
    pub length: i64,

    /// How many passwords to generate (1-20)
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub multiple: i64,

    /// Exclude uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Exclude lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Exclude digits
    #[arg(long)]
    pub no_digits: bool,

    /// Exclude symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Include ambiguous characters (il1Lo0O)
    #[arg(long)]
    pub include_ambiguous: bool,

    /// Copy the result to the clipboard
    #[arg(short, long)]
    pub copy: bool,
}

impl GenerateArgs {
    pub fn config(&self) -> GenerationConfig {
        let flags = [
            (Category::Uppercase, self.no_upper),
            (Category::Lowercase, self.no_lower),
            (Category::Digit,     self.no_digits),
            (Category::Symbol,    self.no_symbols),
        ];
        GenerationConfig {
            length: clamp_length(self.length),
            categories: flags
                .into_iter()
                .filter(|(_, excluded)| !excluded)
                .map(|(category, _)| category)
                .collect(),
            exclude_ambiguous: !self.include_ambiguous,
        }
    }

    pub fn count(&self) -> usize {
        clamp_count(self.multiple)
    }
}

#[derive(Args, Debug, Clone)]
pub struct MemorableArgs {
    /// Number of words (3-8)
    #[arg(short, long, default_value_t = DEFAULT_WORDS, allow_negative_numbers = true)]
    pub words: i64,

    /// Text placed between words
    #[arg(short, long, default_value = "-")]
    pub separator: String,

    /// Keep words lowercase
    #[arg(long)]
    pub no_capitalize: bool,

    /// Do not append a number
    #[arg(long)]
    pub no_number: bool,

    /// Copy the result to the clipboard
    #[arg(short, long)]
    pub copy: bool,
}

impl MemorableArgs {
    pub fn word_count(&self) -> usize {
        clamp_words(self.words)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl From<ColorMode> for ColorChoice {
    fn from(mode: ColorMode) -> ColorChoice {
        match mode {
            ColorMode::Auto   => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never  => ColorChoice::Never,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_defaults() {
        let cli = Cli::try_parse_from(["onepass-gen", "generate"]).unwrap();
        let Some(Kind::Generate(args)) = cli.command else {
            panic!("expected generate");
        };
        let config = args.config();
        assert_eq!(config.length, 16);
        assert_eq!(config.categories, Category::ALL.to_vec());
        assert!(config.exclude_ambiguous);
        assert_eq!(args.count(), 1);
        assert!(!args.copy);
    }

    #[test]
    fn generate_flags_disable_categories() {
        let cli = Cli::try_parse_from([
            "onepass-gen",
            "generate",
            "--no-upper",
            "--no-symbols",
            "--include-ambiguous",
            "-l",
            "20",
            "-m",
            "3",
        ])
        .unwrap();
        let Some(Kind::Generate(args)) = cli.command else {
            panic!("expected generate");
        };
        let config = args.config();
        assert_eq!(config.categories, vec![Category::Lowercase, Category::Digit]);
        assert!(!config.exclude_ambiguous);
        assert_eq!(config.length, 20);
        assert_eq!(args.count(), 3);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let cli = Cli::try_parse_from(["onepass-gen", "gen", "-l", "-5", "-m", "500"]).unwrap();
        let Some(Kind::Generate(args)) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.config().length, 8);
        assert_eq!(args.count(), 20);

        assert_eq!(clamp_length(1000), 64);
        assert_eq!(clamp_count(0), 1);
        assert_eq!(clamp_words(1), 3);
        assert_eq!(clamp_words(12), 8);
    }

    #[test]
    fn memorable_options() {
        let cli = Cli::try_parse_from([
            "onepass-gen",
            "memorable",
            "--words",
            "6",
            "--separator",
            ".",
            "--no-number",
        ])
        .unwrap();
        let Some(Kind::Memorable(args)) = cli.command else {
            panic!("expected memorable");
        };
        assert_eq!(args.word_count(), 6);
        assert_eq!(args.separator, ".");
        assert!(args.no_number);
        assert!(!args.no_capitalize);
    }

    #[test]
    fn color_mode_maps_to_choice() {
        let cli = Cli::try_parse_from(["onepass-gen", "--color", "never", "analyze", "x"]).unwrap();
        assert_eq!(ColorChoice::from(cli.color), ColorChoice::Never);
        assert!(matches!(cli.command, Some(Kind::Analyze { .. })));
    }
}
