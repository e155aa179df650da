use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CuratorError {
    #[error("Lookup failed: {0}")]
    Lookup(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Serialize for CuratorError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type CuratorResult<T> = Result<T, CuratorError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
