use clap::Parser;
use std::path::PathBuf;
use tracker_dashboard::{default_input, Config, FieldSet, DEFAULT_OUTPUT};

/// Converts the projects tracker CSV export into the dashboard's JSON data file.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// (file path) The tracker export. Line 1 is the list schema and is
    /// ignored, line 2 holds the column headers.
    /// Defaults to "~/Downloads/BE Projects Tracker.csv".
    #[arg(short, long, env = "TRACKER_CSV")]
    pub input: Option<PathBuf>,

    /// (file path) Where the dashboard JSON is written.
    #[arg(short, long, env = "TRACKER_JSON", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Only write the core project fields (no descriptions, lists or phase dates).
    #[arg(long)]
    pub basic: bool,

    /// Turn on debug logging (skipped rows, department fallbacks).
    #[arg(long)]
    pub verbose: bool,
}

impl Args {
    pub fn config(&self) -> Config {
        Config {
            input: self.input.clone().unwrap_or_else(default_input),
            output: self.output.clone(),
            field_set: if self.basic {
                FieldSet::Basic
            } else {
                FieldSet::Extended
            },
        }
    }
}
