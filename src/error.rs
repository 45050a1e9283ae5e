// src/error.rs
use thiserror::Error;

/// Message shown in place of the catalog when it could not be loaded.
pub const LOAD_ERROR_MESSAGE: &str =
    "Erro ao carregar os dados dos notebooks. Por favor, tente novamente mais tarde.";

/// The catalog source could not be retrieved or parsed.
///
/// The variants only exist for logging; every one of them is presented to the
/// user with the same message.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to fetch catalog: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LoadError {
    pub fn user_message(&self) -> &'static str {
        LOAD_ERROR_MESSAGE
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Você pode comparar no máximo {max} notebooks.")]
    LimitExceeded { max: usize },
}
