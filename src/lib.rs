//! Random password and passphrase generation with a simple strength score.
//!
//! ```rust
//! use onepass_gen::{generate, score, GenerationConfig};
//!
//! let password = generate(&GenerationConfig::new(20)).unwrap();
//! assert_eq!(password.char_count(), 20);
//! assert!(score(password.as_str()).score >= 4);
//! ```

pub mod category;
pub mod clipboard;
pub mod error;
pub mod password;
pub mod strength;
pub mod style;
pub mod words;

pub use category::Category;
pub use error::ConfigError;
pub use password::{
    generate, generate_many, generate_many_with, generate_memorable, generate_memorable_with,
    generate_with, GenerationConfig, Password,
};
pub use strength::{score, Label, StrengthReport};
