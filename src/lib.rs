//! pipe-schedules: standard pipe schedule dimensions for hydraulic calculations

pub mod constants;
pub mod error;
pub mod model;
pub mod table;
pub mod format;
pub mod input;
pub mod output;
pub mod utils;

pub use error::{LookupError, LookupKey, TableError};
pub use model::nominal::NominalSize;
pub use model::pipe::PipeSize;
pub use model::pipe_table::PipeTable;
pub use model::schedule::Schedule;
pub use table::lookup;
