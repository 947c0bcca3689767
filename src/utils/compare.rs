use simplelog::{info, warn, error};

use crate::model::pipe_table::PipeTable;
use crate::table;

/// Maximum number of mismatches reported individually
const MAX_REPORTED: usize = 5;

/// Differences between a table and the built-in table
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Comparison {
  /// Built-in rows absent from the table
  pub missing: usize,
  /// Rows whose dimensions differ
  pub mismatched: usize,
  /// Rows with no built-in counterpart
  pub extra: usize,
}

impl Comparison {
  pub fn is_match(&self) -> bool {
    self.missing == 0 && self.mismatched == 0 && self.extra == 0
  }
}

/// Compare a table against the built-in one, row by row. Dimensions must be
/// equal to full double precision.
pub fn compare_with_builtin(pipe_table: &PipeTable) -> Comparison {
  let mut comparison = Comparison::default();
  let mut reported = 0;

  for (schedule, size, expected) in table::entries() {
    match pipe_table.lookup(schedule.as_str(), size.as_str()) {
      Ok(actual) if actual == expected => {}
      Ok(actual) => {
        if reported < MAX_REPORTED {
          warn!("Dimension mismatch for {} {} (file vs built-in): diameter {} vs {}, roughness {} vs {}",
            schedule, size, actual.diameter, expected.diameter, actual.roughness, expected.roughness);
          reported += 1;
        }
        comparison.mismatched += 1;
      }
      Err(e) => {
        if reported < MAX_REPORTED {
          warn!("Missing {} {}: {}", schedule, size, e);
          reported += 1;
        }
        comparison.missing += 1;
      }
    }
  }

  for rows in pipe_table.schedules() {
    for (label, _) in rows.sizes() {
      if table::lookup(&rows.name, label).is_err() {
        if reported < MAX_REPORTED {
          warn!("Unexpected pipe size {} {}", rows.name, label);
          reported += 1;
        }
        comparison.extra += 1;
      }
    }
  }

  comparison
}

/// Read a table file and check it against the built-in table
pub fn check_table_file(input_file: &str) -> bool {
  info!("Loading pipe table from file: {}", input_file);

  let pipe_table = match PipeTable::read_file(input_file) {
    Ok(t) => t,
    Err(e) => {
      error!("Failed to load pipe table: {}", e);
      return false;
    }
  };

  let comparison = compare_with_builtin(&pipe_table);
  if comparison.is_match() {
    info!("Check <on-green><b> PASSED! </>");
    true
  } else {
    error!("Check <on-red><b> FAILED </> : {} missing, {} mismatched, {} unexpected",
      comparison.missing, comparison.mismatched, comparison.extra);
    false
  }
}
