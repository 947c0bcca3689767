use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LookupError, LookupKey};

/// Nominal pipe size (inches), ordered from smallest to largest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum NominalSize {
  #[serde(rename = "0.5")]
  Half,
  #[serde(rename = "0.75")]
  ThreeQuarters,
  #[serde(rename = "1.0")]
  One,
  #[serde(rename = "1.25")]
  OneAndQuarter,
  #[serde(rename = "1.5")]
  OneAndHalf,
  #[serde(rename = "2.0")]
  Two,
}

impl NominalSize {
  pub const ALL: [NominalSize; 6] = [
    NominalSize::Half,
    NominalSize::ThreeQuarters,
    NominalSize::One,
    NominalSize::OneAndQuarter,
    NominalSize::OneAndHalf,
    NominalSize::Two,
  ];

  /// Label as tabulated, e.g. "0.5" or "1.0"
  pub const fn as_str(self) -> &'static str {
    match self {
      NominalSize::Half => "0.5",
      NominalSize::ThreeQuarters => "0.75",
      NominalSize::One => "1.0",
      NominalSize::OneAndQuarter => "1.25",
      NominalSize::OneAndHalf => "1.5",
      NominalSize::Two => "2.0",
    }
  }

  /// Nominal size in inches
  pub const fn inches(self) -> f64 {
    match self {
      NominalSize::Half => 0.5,
      NominalSize::ThreeQuarters => 0.75,
      NominalSize::One => 1.0,
      NominalSize::OneAndQuarter => 1.25,
      NominalSize::OneAndHalf => 1.5,
      NominalSize::Two => 2.0,
    }
  }

  /// Position of the size in `ALL` and in every schedule's rows
  pub(crate) const fn index(self) -> usize {
    self as usize
  }
}

impl FromStr for NominalSize {
  type Err = LookupError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "0.5" => Ok(NominalSize::Half),
      "0.75" => Ok(NominalSize::ThreeQuarters),
      "1.0" => Ok(NominalSize::One),
      "1.25" => Ok(NominalSize::OneAndQuarter),
      "1.5" => Ok(NominalSize::OneAndHalf),
      "2.0" => Ok(NominalSize::Two),
      _ => Err(LookupError::not_found(LookupKey::NominalSize, s)),
    }
  }
}

impl std::fmt::Display for NominalSize {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.pad(self.as_str())
  }
}
