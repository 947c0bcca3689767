use std::fs::File;
use std::io::{BufWriter, Write};

use rmp_serde::Serializer;
use serde::Serialize;
use simplelog::{debug, warn};

use crate::error::TableError;
use crate::format::TableFormat;
use crate::model::pipe_table::PipeTable;

impl PipeTable {
  /// Write the table as JSON (.json) or MessagePack (.mpk, .msgpack).
  ///
  /// A file left incomplete by a failed write is removed.
  pub fn write_file(&self, file: &str) -> Result<(), TableError> {
    let format = TableFormat::from_path(file)?;

    let handle = File::create(file)
      .map_err(|e| TableError::new(format!("Failed to create output file: {}", e)).with_context(file))?;
    let mut writer = BufWriter::new(handle);

    if let Err(e) = self.write_to(format, &mut writer) {
      drop(writer);
      if let Err(remove_err) = std::fs::remove_file(file) {
        warn!("Failed to remove incomplete output file {}: {}", file, remove_err);
      }
      return Err(e.with_context(file));
    }

    debug!("Wrote {} pipe sizes to {}", self.len(), file);
    Ok(())
  }

  /// Serialize into a buffered writer and flush it, so write errors surface here
  fn write_to<W: Write>(&self, format: TableFormat, writer: &mut BufWriter<W>) -> Result<(), TableError> {
    match format {
      TableFormat::Json => serde_json::to_writer_pretty(&mut *writer, self)?,
      TableFormat::MessagePack => {
        // struct maps keep the "diametro" / "rugosidad" field names in the output
        let mut serializer = Serializer::new(&mut *writer).with_struct_map();
        self.serialize(&mut serializer)?;
      }
    }
    writer.flush()?;
    Ok(())
  }

  pub fn to_json_string(&self) -> Result<String, TableError> {
    Ok(serde_json::to_string_pretty(self)?)
  }
}

/// Write the built-in table to a file
pub fn write_table(file: &str) -> Result<(), TableError> {
  PipeTable::builtin().write_file(file)
}

/// Built-in table as pretty-printed JSON
pub fn to_json_string() -> Result<String, TableError> {
  PipeTable::builtin().to_json_string()
}
