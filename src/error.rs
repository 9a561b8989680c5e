use thiserror::Error;

use crate::category::Category;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("at least one character type must be selected")]
    NoCategories,

    #[error("no {0} characters left after excluding ambiguous ones")]
    EmptyCategory(Category),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
