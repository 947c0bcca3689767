/// Which key of a lookup was not recognised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKey {
  Schedule,
  NominalSize,
}

impl std::fmt::Display for LookupKey {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      LookupKey::Schedule => write!(f, "schedule"),
      LookupKey::NominalSize => write!(f, "nominal size"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
  /// The schedule or nominal size is not one of the tabulated keys
  NotFound { key: LookupKey, value: Box<str> },
}

impl LookupError {
  pub fn not_found(key: LookupKey, value: &str) -> Self {
    LookupError::NotFound { key, value: value.into() }
  }
}

impl std::fmt::Display for LookupError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      LookupError::NotFound { key, value } => write!(f, "Unknown {}: '{}'", key, value),
    }
  }
}

impl std::error::Error for LookupError {}

/// Error raised while reading or writing a table file
#[derive(Debug)]
pub struct TableError {
  pub message: String,
  pub context: Option<String>,
}

impl TableError {
  pub fn new(message: impl Into<String>) -> Self {
    Self { message: message.into(), context: None }
  }

  pub fn with_context(mut self, context: impl Into<String>) -> Self {
    self.context = Some(context.into());
    self
  }
}

impl std::fmt::Display for TableError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.message)?;
    if let Some(ctx) = &self.context {
      write!(f, " [{}]", ctx)?;
    }
    Ok(())
  }
}

impl std::error::Error for TableError {}

impl From<std::io::Error> for TableError {
  fn from(err: std::io::Error) -> Self {
    TableError::new(format!("IO error: {}", err))
  }
}

impl From<serde_json::Error> for TableError {
  fn from(err: serde_json::Error) -> Self {
    TableError::new(format!("JSON error: {}", err))
  }
}

impl From<rmp_serde::decode::Error> for TableError {
  fn from(err: rmp_serde::decode::Error) -> Self {
    TableError::new(format!("MessagePack decode error: {}", err))
  }
}

impl From<rmp_serde::encode::Error> for TableError {
  fn from(err: rmp_serde::encode::Error) -> Self {
    TableError::new(format!("MessagePack encode error: {}", err))
  }
}

/// Helper trait for converting Option to Result with the missing key attached
pub trait OptionExt<T> {
  fn ok_or_not_found(self, key: LookupKey, value: &str) -> Result<T, LookupError>;
}

impl<T> OptionExt<T> for Option<T> {
  fn ok_or_not_found(self, key: LookupKey, value: &str) -> Result<T, LookupError> {
    self.ok_or_else(|| LookupError::not_found(key, value))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_not_found_message() {
    let err = LookupError::not_found(LookupKey::Schedule, "cedula_99");
    assert_eq!(err.to_string(), "Unknown schedule: 'cedula_99'");

    let err = LookupError::not_found(LookupKey::NominalSize, "3.0");
    assert_eq!(err.to_string(), "Unknown nominal size: '3.0'");
  }

  #[test]
  fn test_table_error_context() {
    let err = TableError::new("Unsupported file extension: txt").with_context("table.txt");
    assert_eq!(err.to_string(), "Unsupported file extension: txt [table.txt]");
  }

  #[test]
  fn test_option_ext() {
    let missing: Option<u8> = None;
    assert_eq!(
      missing.ok_or_not_found(LookupKey::NominalSize, "3.0"),
      Err(LookupError::not_found(LookupKey::NominalSize, "3.0"))
    );
    assert_eq!(Some(1u8).ok_or_not_found(LookupKey::Schedule, "x"), Ok(1));
  }
}
