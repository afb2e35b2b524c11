//! Convert the projects tracker CSV (SharePoint list export) into the JSON
//! document read by the projects dashboard.
//!
//! The pipeline is linear: read the export, map each row onto a [`Project`],
//! aggregate KPIs, status and lifecycle breakdowns and filter lists, then write
//! everything as one pretty-printed JSON file.
//!
//! [`Project`]: types::Project

pub mod error;
pub mod loader;
pub mod normalize;
pub mod output;
pub mod reports;
pub mod types;
pub mod util;

use error::Result;
use log::info;
use std::path::{Path, PathBuf};
use types::DashboardData;

pub use error::TrackerError;

pub const DEFAULT_OUTPUT: &str = "data/dashboard-data.json";
const DEFAULT_INPUT_FILE: &str = "BE Projects Tracker.csv";

/// Which project fields end up in the JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldSet {
    /// Identity, status, stage, manager and progress only.
    Basic,
    /// Also the descriptive fields and phase dates shown in the project modal.
    #[default]
    Extended,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub field_set: FieldSet,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: default_input(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            field_set: FieldSet::default(),
        }
    }
}

/// `~/Downloads/BE Projects Tracker.csv`, where the export lands by default.
pub fn default_input() -> PathBuf {
    let home = std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    home.join("Downloads").join(DEFAULT_INPUT_FILE)
}

#[derive(Debug)]
pub enum RunOutcome {
    Written { path: PathBuf, dashboard: DashboardData },
    /// Nothing usable in the export; the previous output is left untouched.
    NoProjects,
}

pub fn run(config: &Config) -> Result<RunOutcome> {
    let (projects, report) = loader::load_projects(&config.input, config.field_set)?;
    info!(
        "{} data rows: {} projects, {} short rows, {} without a name",
        util::format_int(report.total_rows),
        util::format_int(report.projects),
        util::format_int(report.short_rows),
        util::format_int(report.unnamed_rows)
    );

    let Some(dashboard) = reports::build_dashboard(projects) else {
        return Ok(RunOutcome::NoProjects);
    };
    write_dashboard(&config.output, &dashboard)?;
    Ok(RunOutcome::Written {
        path: config.output.clone(),
        dashboard,
    })
}

pub fn write_dashboard(path: &Path, dashboard: &DashboardData) -> Result<()> {
    output::write_json(path, dashboard)?;
    info!("Wrote dashboard data to {}", path.display());
    Ok(())
}
