//! Error type shared by the encoders.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 1-4 characters were left over after the last complete word.
    #[error("invalid proquint format: incomplete quintet ({leftover} trailing characters)")]
    IncompleteQuintet { leftover: usize },

    /// A character outside the consonant/vowel table required at its position.
    #[error("invalid proquint character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    #[error("invalid art configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, Error>;
