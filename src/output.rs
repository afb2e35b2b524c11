use crate::error::{Result, TrackerError};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};

/// Write `value` as pretty-printed JSON (two-space indent), creating the
/// parent directory if needed. Non-ASCII text is written as is.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| TrackerError::io(parent, e))?;
    }
    fs::write(path, s).map_err(|e| TrackerError::io(path, e))?;
    Ok(())
}

/// Render rows as a markdown table, or `(no rows)`.
pub fn render_table<T>(rows: &[T]) -> String
where
    T: Tabled + Clone,
{
    if rows.is_empty() {
        return "(no rows)".to_string();
    }
    Table::new(rows.to_vec()).with(Style::markdown()).to_string()
}

/// Closing console line after a successful run.
pub fn written_message(projects: usize, path: &Path) -> String {
    format!("Wrote {} projects to {}", projects, path.display())
}

pub fn preview_table<T>(title: &str, rows: &[T])
where
    T: Tabled + Clone,
{
    println!("{}\n", title);
    println!("{}\n", render_table(rows));
}
