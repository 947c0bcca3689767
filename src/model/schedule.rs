use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LookupError, LookupKey};

/// Pipe wall-thickness classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Schedule {
  #[serde(rename = "cedula_40")]
  Cedula40, // Schedule 40 (standard wall)
  #[serde(rename = "cedula_80")]
  Cedula80, // Schedule 80 (extra strong)
}

impl Schedule {
  pub const ALL: [Schedule; 2] = [Schedule::Cedula40, Schedule::Cedula80];

  /// Label used as the schedule key in lookups and table files
  pub const fn as_str(self) -> &'static str {
    match self {
      Schedule::Cedula40 => "cedula_40",
      Schedule::Cedula80 => "cedula_80",
    }
  }
}

/// Labels are matched verbatim
impl FromStr for Schedule {
  type Err = LookupError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "cedula_40" => Ok(Schedule::Cedula40),
      "cedula_80" => Ok(Schedule::Cedula80),
      _ => Err(LookupError::not_found(LookupKey::Schedule, s)),
    }
  }
}

impl std::fmt::Display for Schedule {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.pad(self.as_str())
  }
}
