//! Built-in schedule 40 / schedule 80 dimensions.
//!
//! Diameters are tabulated in millimeters and divided by 1000 when the table
//! is defined, so each stored value is exactly `mm / 1000.0`.

use crate::error::LookupError;
use crate::model::nominal::NominalSize;
use crate::model::pipe::PipeSize;
use crate::model::schedule::Schedule;

/// One schedule's rows, in `NominalSize::ALL` order
pub type ScheduleRows = [(NominalSize, PipeSize); 6];

static CEDULA_40: ScheduleRows = [
  (NominalSize::Half, PipeSize::from_mm(21.34)),
  (NominalSize::ThreeQuarters, PipeSize::from_mm(26.67)),
  (NominalSize::One, PipeSize::from_mm(33.4)),
  (NominalSize::OneAndQuarter, PipeSize::from_mm(42.16)),
  (NominalSize::OneAndHalf, PipeSize::from_mm(48.26)),
  (NominalSize::Two, PipeSize::from_mm(60.33)),
];

static CEDULA_80: ScheduleRows = [
  (NominalSize::Half, PipeSize::from_mm(15.24)),
  (NominalSize::ThreeQuarters, PipeSize::from_mm(20.96)),
  (NominalSize::One, PipeSize::from_mm(26.64)),
  (NominalSize::OneAndQuarter, PipeSize::from_mm(35.05)),
  (NominalSize::OneAndHalf, PipeSize::from_mm(40.89)),
  (NominalSize::Two, PipeSize::from_mm(52.48)),
];

/// Rows of a schedule, smallest nominal size first
pub fn schedule(schedule: Schedule) -> &'static ScheduleRows {
  match schedule {
    Schedule::Cedula40 => &CEDULA_40,
    Schedule::Cedula80 => &CEDULA_80,
  }
}

/// Dimensions of a pipe given typed keys
pub fn get(schedule_key: Schedule, size: NominalSize) -> PipeSize {
  let (row_size, pipe) = schedule(schedule_key)[size.index()];
  debug_assert_eq!(row_size, size);
  pipe
}

/// Look up a pipe by schedule and nominal size labels, e.g. `("cedula_40", "1.0")`.
///
/// Labels must match the tabulated keys exactly. The schedule is checked
/// first, so a call with two unknown keys reports the schedule.
pub fn lookup(schedule_key: &str, nominal_size: &str) -> Result<PipeSize, LookupError> {
  let schedule_key: Schedule = schedule_key.parse()?;
  let size: NominalSize = nominal_size.parse()?;
  Ok(get(schedule_key, size))
}

/// Every row of the table, by schedule then by nominal size
pub fn entries() -> impl Iterator<Item = (Schedule, NominalSize, PipeSize)> {
  Schedule::ALL
    .into_iter()
    .flat_map(|s| schedule(s).iter().map(move |&(size, pipe)| (s, size, pipe)))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::LookupKey;

  #[test]
  fn test_rows_follow_size_order() {
    for s in Schedule::ALL {
      let sizes: Vec<NominalSize> = schedule(s).iter().map(|(size, _)| *size).collect();
      assert_eq!(sizes, NominalSize::ALL.to_vec(), "rows out of order for {}", s);
    }
  }

  #[test]
  fn test_lookup_known_keys() {
    let pipe = lookup("cedula_40", "1.0").unwrap();
    assert_eq!(pipe, PipeSize { diameter: 0.0334, roughness: 0.00015 });

    let pipe = lookup("cedula_80", "1.0").unwrap();
    assert_eq!(pipe, PipeSize { diameter: 0.02664, roughness: 0.00015 });
  }

  #[test]
  fn test_lookup_unknown_keys() {
    assert_eq!(
      lookup("cedula_40", "3.0"),
      Err(LookupError::not_found(LookupKey::NominalSize, "3.0"))
    );
    assert_eq!(
      lookup("cedula_99", "1.0"),
      Err(LookupError::not_found(LookupKey::Schedule, "cedula_99"))
    );
    assert_eq!(
      lookup("cedula_99", "3.0"),
      Err(LookupError::not_found(LookupKey::Schedule, "cedula_99"))
    );
  }

  #[test]
  fn test_entries() {
    let rows: Vec<_> = entries().collect();
    assert_eq!(rows.len(), 12);
    assert_eq!(rows[0], (Schedule::Cedula40, NominalSize::Half, PipeSize::from_mm(21.34)));
    assert_eq!(rows[11], (Schedule::Cedula80, NominalSize::Two, PipeSize::from_mm(52.48)));
    for (s, size, pipe) in rows {
      assert_eq!(get(s, size), pipe);
      assert!(pipe.is_valid());
    }
  }
}
