//! Error types for arbiter

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid move notation {0:?}, expected <file><rank><file><rank> such as \"a2 a4\"")]
    InvalidNotation(String),

    #[error("invalid piece placement: {0}")]
    InvalidPlacement(String),
}

pub type Result<T> = std::result::Result<T, Error>;
