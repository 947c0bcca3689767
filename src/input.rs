use std::fs::File;
use std::io::BufReader;

use simplelog::debug;

use crate::error::TableError;
use crate::format::TableFormat;
use crate::model::pipe_table::PipeTable;

impl PipeTable {
  /// Read a table from a JSON (.json) or MessagePack (.mpk, .msgpack) file.
  pub fn read_file(file: &str) -> Result<PipeTable, TableError> {
    let format = TableFormat::from_path(file)?;

    let handle = File::open(file)
      .map_err(|e| TableError::new(format!("Failed to open file: {}", e)).with_context(file))?;
    let reader = BufReader::new(handle);

    let pipe_table: PipeTable = match format {
      TableFormat::Json => serde_json::from_reader(reader)
        .map_err(|e| TableError::from(e).with_context(file))?,
      TableFormat::MessagePack => rmp_serde::from_read(reader)
        .map_err(|e| TableError::from(e).with_context(file))?,
    };

    debug!("Read {} pipe sizes from {}", pipe_table.len(), file);
    Ok(pipe_table)
  }

  /// Parse a table from its JSON representation
  pub fn from_json_str(json: &str) -> Result<PipeTable, TableError> {
    Ok(serde_json::from_str(json)?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;

  #[test]
  fn test_from_json_str() {
    let pipe_table = PipeTable::from_json_str(
      r#"{ "cedula_40": { "1.0": { "diametro": 0.0334, "rugosidad": 0.00015 } } }"#,
    )
    .unwrap();
    assert_eq!(pipe_table.len(), 1);
    assert_eq!(pipe_table.lookup("cedula_40", "1.0").unwrap().diameter, 0.0334);
  }

  #[test]
  fn test_from_json_str_rejects_bad_shape() {
    let err = PipeTable::from_json_str(r#"{ "cedula_40": [1, 2] }"#).unwrap_err();
    assert!(err.message.starts_with("JSON error"), "{}", err);

    let err = PipeTable::from_json_str(r#"{ "cedula_40": { "1.0": { "diametro": 0.03 } } }"#).unwrap_err();
    assert!(err.message.contains("rugosidad"), "{}", err);
  }

  #[test]
  fn test_read_file_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tuberias.json");
    let mut file = File::create(&path).unwrap();
    write!(file, r#"{{ "cedula_80": {{ "0.5": {{ "diametro": 0.01524, "rugosidad": 0.00015 }} }} }}"#).unwrap();
    drop(file);

    let pipe_table = PipeTable::read_file(path.to_str().unwrap()).unwrap();
    assert_eq!(pipe_table.lookup("cedula_80", "0.5").unwrap().diameter, 0.01524);
  }

  #[test]
  fn test_read_file_missing() {
    let err = PipeTable::read_file("does/not/exist.json").unwrap_err();
    assert!(err.message.starts_with("Failed to open file"), "{}", err);
    assert_eq!(err.context.as_deref(), Some("does/not/exist.json"));
  }
}
