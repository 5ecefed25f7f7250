//! Error types.
//!
//! The domain itself cannot fail: numeric edge cases are absorbed where they occur.
//! What remains is configuration validation, color parsing and host I/O.

pub use anyhow::{Result, bail};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
  #[error("color must start with '#': {0:?}")]
  MissingHash(String),
  #[error("expected 6 or 8 hex digits, got {0}")]
  BadLength(usize),
  #[error("invalid hex digits in {0:?}")]
  BadDigit(String),
}

/// Render the whole error chain, one cause per line.
pub fn display(error: &anyhow::Error) -> String {
  let mut msg = "Error:\n".to_string();
  error
    .chain()
    .enumerate()
    .for_each(|(index, error)| msg.push_str(&format!("└> {} - {}\n", index, error)));
  msg
}
