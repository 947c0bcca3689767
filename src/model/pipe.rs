use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Internal dimensions of one tabulated pipe
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PipeSize {
  /// Internal diameter (m)
  #[serde(rename = "diametro")]
  pub diameter: f64,
  /// Absolute roughness (m)
  #[serde(rename = "rugosidad")]
  pub roughness: f64,
}

impl PipeSize {
  /// Build a steel pipe record from a diameter in millimeters
  pub const fn from_mm(diameter_mm: f64) -> Self {
    Self { diameter: diameter_mm / MM_PER_M, roughness: ROUGHNESS }
  }

  pub fn is_valid(&self) -> bool {
    self.diameter.is_finite() && self.diameter > 0.0
      && self.roughness.is_finite() && self.roughness >= 0.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_mm_keeps_division() {
    let pipe = PipeSize::from_mm(26.67);
    assert_eq!(pipe.diameter, 26.67 / 1000.0);
    assert_eq!(pipe.roughness, 0.00015);
  }

  #[test]
  fn test_serialized_field_names() {
    let json = serde_json::to_value(PipeSize::from_mm(33.4)).unwrap();
    assert_eq!(json["diametro"], serde_json::json!(0.0334));
    assert_eq!(json["rugosidad"], serde_json::json!(0.00015));
  }

  #[test]
  fn test_is_valid() {
    assert!(PipeSize::from_mm(21.34).is_valid());
    assert!(!PipeSize { diameter: 0.0, roughness: ROUGHNESS }.is_valid());
    assert!(!PipeSize { diameter: -0.02, roughness: ROUGHNESS }.is_valid());
    assert!(!PipeSize { diameter: f64::NAN, roughness: ROUGHNESS }.is_valid());
    assert!(!PipeSize { diameter: 0.02, roughness: -1.0 }.is_valid());
  }
}
