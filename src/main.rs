use clap::{Parser, Subcommand};

use simplelog::{info, debug, LevelFilter, TerminalMode, ColorChoice, Config, TermLogger};

use pipe_schedules::model::schedule::Schedule;
use pipe_schedules::output::write_table;
use pipe_schedules::table;
use pipe_schedules::utils::compare::check_table_file;

#[derive(Parser, Debug)]
#[command(
  version = "0.1.0",
  about = "Standard pipe schedule dimensions (internal diameter and roughness)"
)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
  /// Print debug output
  #[arg(short, long, global = true)]
  verbose: bool,
  /// Suppress all output except for errors
  #[arg(short, long, global = true)]
  quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Look up the dimensions of a pipe
  Lookup {
    /// Schedule name (cedula_40, cedula_80)
    schedule: String,
    /// Nominal size label, e.g. 0.5 or 1.0
    nominal_size: String,
  },
  /// List the tabulated pipes
  List {
    /// Only list this schedule
    #[arg(short, long)]
    schedule: Option<String>,
  },
  /// Write the table to a file (.json or .msgpack/.mpk)
  Export {
    output_file: String,
  },
  /// Check a table file against the built-in table
  Check {
    input_file: String,
  },
}

fn main() -> Result<(), String> {
  let cli = Cli::parse();

  let log_level = if cli.quiet { LevelFilter::Error }
    else if cli.verbose { LevelFilter::Debug }
    else { LevelFilter::Info };

  TermLogger::init(
    log_level,
    Config::default(),
    TerminalMode::Mixed,
    ColorChoice::Auto,
  ).map_err(|e| format!("Failed to initialize logger: {}", e))?;

  match cli.command {
    Commands::Lookup { schedule, nominal_size } => lookup_pipe(&schedule, &nominal_size),
    Commands::List { schedule } => list_pipes(schedule.as_deref()),
    Commands::Export { output_file } => export_table(&output_file),
    Commands::Check { input_file } => {
      if check_table_file(&input_file) {
        Ok(())
      } else {
        Err("Check failed".to_string())
      }
    }
  }
}

/// Print the dimensions of a single pipe
fn lookup_pipe(schedule: &str, nominal_size: &str) -> Result<(), String> {
  debug!("Looking up {} {}", schedule, nominal_size);
  let pipe = table::lookup(schedule, nominal_size).map_err(|e| e.to_string())?;

  println!("diametro:  {} m", pipe.diameter);
  println!("rugosidad: {} m", pipe.roughness);
  Ok(())
}

/// Print the table, optionally restricted to one schedule
fn list_pipes(schedule: Option<&str>) -> Result<(), String> {
  let schedules = match schedule {
    Some(name) => vec![name.parse::<Schedule>().map_err(|e| e.to_string())?],
    None => Schedule::ALL.to_vec(),
  };

  println!("{:<10} {:>7} {:>12} {:>10}", "schedule", "size", "diametro", "rugosidad");
  for s in schedules {
    for (size, pipe) in table::schedule(s) {
      println!("{:<10} {:>7} {:>12} {:>10}", s, size.as_str(), pipe.diameter, pipe.roughness);
    }
  }
  Ok(())
}

/// Write the built-in table to a file
fn export_table(output_file: &str) -> Result<(), String> {
  write_table(output_file).map_err(|e| e.to_string())?;
  info!("Pipe table written to {}", output_file);
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_lookup_error_returned_once() {
    // main prints the returned error, so lookup_pipe does not log it as well
    assert_eq!(lookup_pipe("cedula_99", "1.0"), Err("Unknown schedule: 'cedula_99'".to_string()));
    assert_eq!(lookup_pipe("cedula_40", "3.0"), Err("Unknown nominal size: '3.0'".to_string()));
    assert_eq!(lookup_pipe("cedula_40", "1.0"), Ok(()));
  }
}
