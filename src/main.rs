// Entry point and console flow.
//
// Reads the tracker export, writes the dashboard JSON and prints a short
// preview of the donut and lifecycle data. With no projects in the export
// nothing is written, so a previous good file survives a bad export.
mod args;

use args::Args;
use clap::Parser;
use std::process::ExitCode;
use tracker_dashboard::{output, run, RunOutcome};

fn main() -> ExitCode {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&args.config()) {
        Ok(RunOutcome::Written { path, dashboard }) => {
            println!();
            output::preview_table("Project Status Overview (%)", &dashboard.project_status_overview);
            output::preview_table("Projects by Lifecycle Stage", &dashboard.projects_by_lifecycle_stage);
            println!("{}", output::written_message(dashboard.projects.len(), &path));
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::NoProjects) => {
            println!("No projects found");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to convert tracker export: {}", e);
            ExitCode::FAILURE
        }
    }
}
