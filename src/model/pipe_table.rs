use std::fmt;

use hashbrown::HashMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{LookupError, LookupKey, OptionExt};
use crate::model::pipe::PipeSize;
use crate::model::schedule::Schedule;
use crate::table;

/// Owned, read-only pipe table keyed by schedule and nominal size labels.
///
/// Built from the static table or read from a table file. Labels keep the
/// order in which they were added.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipeTable {
  schedules: Vec<ScheduleTable>,
  schedule_map: HashMap<Box<str>, usize>,
}

/// Rows of one schedule
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleTable {
  pub name: Box<str>,
  sizes: Vec<(Box<str>, PipeSize)>,
  size_map: HashMap<Box<str>, usize>,
}

impl ScheduleTable {
  fn new(name: &str) -> Self {
    Self { name: name.into(), sizes: Vec::new(), size_map: HashMap::new() }
  }

  fn add_size(&mut self, label: &str, pipe: PipeSize) -> Result<(), String> {
    if self.size_map.contains_key(label) {
      return Err(format!("Nominal size {} already exists in {}", label, self.name));
    }
    if !pipe.is_valid() {
      return Err(format!(
        "Invalid dimensions for {} {}: diameter {}, roughness {}",
        self.name, label, pipe.diameter, pipe.roughness
      ));
    }
    self.size_map.insert(label.into(), self.sizes.len());
    self.sizes.push((label.into(), pipe));
    Ok(())
  }

  pub fn get(&self, label: &str) -> Option<PipeSize> {
    self.size_map.get(label).map(|&i| self.sizes[i].1)
  }

  /// Nominal size labels and dimensions, in table order
  pub fn sizes(&self) -> impl Iterator<Item = (&str, PipeSize)> {
    self.sizes.iter().map(|(label, pipe)| (label.as_ref(), *pipe))
  }

  pub fn len(&self) -> usize {
    self.sizes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.sizes.is_empty()
  }
}

impl PipeTable {
  /// Owned copy of the built-in table
  pub fn builtin() -> Self {
    let mut pipe_table = PipeTable::default();
    for schedule in Schedule::ALL {
      let mut rows = ScheduleTable::new(schedule.as_str());
      for (size, pipe) in table::schedule(schedule) {
        rows.size_map.insert(size.as_str().into(), rows.sizes.len());
        rows.sizes.push((size.as_str().into(), *pipe));
      }
      pipe_table.schedule_map.insert(rows.name.clone(), pipe_table.schedules.len());
      pipe_table.schedules.push(rows);
    }
    pipe_table
  }

  fn add_schedule(&mut self, rows: ScheduleTable) -> Result<(), String> {
    if self.schedule_map.contains_key(&rows.name) {
      return Err(format!("Schedule {} already exists", rows.name));
    }
    self.schedule_map.insert(rows.name.clone(), self.schedules.len());
    self.schedules.push(rows);
    Ok(())
  }

  pub fn schedule(&self, name: &str) -> Option<&ScheduleTable> {
    self.schedule_map.get(name).map(|&i| &self.schedules[i])
  }

  /// Schedules in table order
  pub fn schedules(&self) -> impl Iterator<Item = &ScheduleTable> {
    self.schedules.iter()
  }

  /// Look up a pipe by schedule and nominal size labels
  pub fn lookup(&self, schedule: &str, nominal_size: &str) -> Result<PipeSize, LookupError> {
    self
      .schedule(schedule)
      .ok_or_not_found(LookupKey::Schedule, schedule)?
      .get(nominal_size)
      .ok_or_not_found(LookupKey::NominalSize, nominal_size)
  }

  /// Number of (schedule, nominal size) rows
  pub fn len(&self) -> usize {
    self.schedules.iter().map(ScheduleTable::len).sum()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

// Tables are written as nested maps: schedule -> nominal size -> dimensions

impl Serialize for ScheduleTable {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(self.sizes.len()))?;
    for (label, pipe) in &self.sizes {
      map.serialize_entry(label, pipe)?;
    }
    map.end()
  }
}

impl Serialize for PipeTable {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(self.schedules.len()))?;
    for rows in &self.schedules {
      map.serialize_entry(&rows.name, rows)?;
    }
    map.end()
  }
}

/// Reads the sizes of one schedule; the schedule name is known only to the outer map
struct SizesVisitor<'a> {
  name: &'a str,
}

impl<'de> de::DeserializeSeed<'de> for SizesVisitor<'_> {
  type Value = ScheduleTable;

  fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
    deserializer.deserialize_map(self)
  }
}

impl<'de> Visitor<'de> for SizesVisitor<'_> {
  type Value = ScheduleTable;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "a map of nominal sizes to pipe dimensions")
  }

  fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
    let mut rows = ScheduleTable::new(self.name);
    while let Some(label) = access.next_key::<Box<str>>()? {
      let pipe: PipeSize = access.next_value()?;
      rows.add_size(&label, pipe).map_err(de::Error::custom)?;
    }
    Ok(rows)
  }
}

struct PipeTableVisitor;

impl<'de> Visitor<'de> for PipeTableVisitor {
  type Value = PipeTable;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "a map of schedules to nominal sizes")
  }

  fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
    let mut pipe_table = PipeTable::default();
    while let Some(name) = access.next_key::<Box<str>>()? {
      let rows = access.next_value_seed(SizesVisitor { name: &name })?;
      pipe_table.add_schedule(rows).map_err(de::Error::custom)?;
    }
    Ok(pipe_table)
  }
}

impl<'de> Deserialize<'de> for PipeTable {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_map(PipeTableVisitor)
  }
}
