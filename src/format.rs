use std::path::Path;

use crate::error::TableError;

/// Interchange format of a table file, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
  Json,
  MessagePack,
}

impl TableFormat {
  pub fn from_path(file: &str) -> Result<Self, TableError> {
    let extension = match Path::new(file).extension().filter(|e| !e.is_empty()) {
      Some(e) => e.to_string_lossy().to_lowercase(),
      None => return Err(TableError::new("Missing file extension, expected .json, .mpk or .msgpack").with_context(file)),
    };

    match extension.as_str() {
      "json" => Ok(TableFormat::Json),
      "mpk" | "msgpack" => Ok(TableFormat::MessagePack),
      _ => Err(TableError::new(format!("Unsupported file extension: '{}'", extension)).with_context(file)),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_path() {
    assert_eq!(TableFormat::from_path("tuberias.json").unwrap(), TableFormat::Json);
    assert_eq!(TableFormat::from_path("out/tuberias.JSON").unwrap(), TableFormat::Json);
    assert_eq!(TableFormat::from_path("tuberias.mpk").unwrap(), TableFormat::MessagePack);
    assert_eq!(TableFormat::from_path("tuberias.msgpack").unwrap(), TableFormat::MessagePack);

    let err = TableFormat::from_path("tuberias.csv").unwrap_err();
    assert_eq!(err.to_string(), "Unsupported file extension: 'csv' [tuberias.csv]");
  }

  #[test]
  fn test_from_path_without_extension() {
    for file in ["tuberias", "out/tuberias", "tuberias."] {
      let err = TableFormat::from_path(file).unwrap_err();
      assert!(err.message.starts_with("Missing file extension"), "{}: {}", file, err);
      assert_eq!(err.context.as_deref(), Some(file));
    }
  }
}
