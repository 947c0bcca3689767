pub mod schedule;
pub mod nominal;
pub mod pipe;
pub mod pipe_table;
