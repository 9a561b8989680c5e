pub const BANNER: &str = "
  ╔═══════════════════════════════════╗
  ║  onepass-gen                      ║
  ║  secure password generator        ║
  ╚═══════════════════════════════════╝
";

pub const MSG_NO_CLIPBOARD: &str = "Note: clipboard support is unavailable in this environment";

pub const MENU_TITLE: &str = "=== Password Generator ===";
pub const MENU: &str = "1. Generate Standard Password
2. Generate Memorable Passphrase
3. Generate Multiple Passwords
4. Custom Options
5. Analyze Password Strength
6. Quit
";

pub const PROMPT_CHOICE:       &str = "Choose option: ";
pub const PROMPT_LENGTH:       &str = "Length (8-64, default 16): ";
pub const PROMPT_LENGTH_SHORT: &str = "Length (default 16): ";
pub const PROMPT_WORDS:        &str = "Number of words (3-8, default 4): ";
pub const PROMPT_COUNT:        &str = "How many? (1-20, default 5): ";
pub const PROMPT_ANALYZE:      &str = "Enter password to analyze: ";
pub const PROMPT_COPY:         &str = "Copy to clipboard? (y/n): ";
pub const PROMPT_CONTINUE:     &str = "Press Enter to continue...";

pub const PROMPT_UPPER:     &str = "Uppercase letters? (Y/n): ";
pub const PROMPT_LOWER:     &str = "Lowercase letters? (Y/n): ";
pub const PROMPT_DIGITS:    &str = "Numbers? (Y/n): ";
pub const PROMPT_SYMBOLS:   &str = "Symbols? (Y/n): ";
pub const PROMPT_AMBIGUOUS: &str = "Exclude ambiguous (il1Lo0O)? (Y/n): ";

pub const MSG_CUSTOMIZE:      &str = "Customize your password:";
pub const MSG_PASSWORD:       &str = "Generated Password:";
pub const MSG_PASSPHRASE:     &str = "Generated Passphrase:";
pub const MSG_ANALYZING:      &str = "Analyzing password...";
pub const MSG_COPIED:         &str = "✓ Copied to clipboard";
pub const MSG_INVALID_CHOICE: &str = "✗ Invalid choice";
pub const MSG_GOODBYE:        &str = "Goodbye!";
pub const MSG_INTERRUPTED:    &str = "Interrupted";

pub const DEFAULT_COUNT: i64 = 5;
