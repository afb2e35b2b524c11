// Value normalization for single cells of the tracker export.
//
// The SharePoint export is inconsistent: multi-choice columns come out as
// JSON-ish arrays (sometimes with doubled quotes), statuses use their own
// vocabulary and list columns mix bullets with newlines. Everything here is
// total: a cell never fails the run, it falls back to a default instead.
use crate::types::Status;
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

pub const OTHER_DEPARTMENT: &str = "Other";

/// Tracker status vocabulary -> dashboard status. The canonical labels map to
/// themselves so already-normalized data passes through unchanged.
static STATUS_MAP: Lazy<HashMap<&'static str, Status>> = Lazy::new(|| {
    HashMap::from([
        ("On Track", Status::OnTrack),
        ("Slightly Delay", Status::SlightlyDelayed),
        ("Major Delay", Status::Delayed),
        ("OnHold", Status::OnHold),
        ("Completed", Status::Closing),
        ("Cancelled", Status::Cancelled),
        ("Not Started", Status::OnTrack),
        ("", Status::OnTrack),
        ("Slightly Delayed", Status::SlightlyDelayed),
        ("Delayed", Status::Delayed),
        ("On Hold", Status::OnHold),
        ("Closing", Status::Closing),
    ])
});

/// (planned, actual) progress shown for each dashboard status.
static PROGRESS_MAP: Lazy<HashMap<&'static str, Progress>> = Lazy::new(|| {
    HashMap::from([
        ("Closing", Progress::new(90, 95)),
        ("On Track", Progress::new(75, 75)),
        ("Slightly Delayed", Progress::new(60, 55)),
        ("Delayed", Progress::new(55, 50)),
        ("On Hold", Progress::new(50, 48)),
        ("Cancelled", Progress::new(25, 25)),
    ])
});

const FALLBACK_PROGRESS: Progress = Progress::new(50, 50);

static BRACKETED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[.*\]").expect("valid regex"));
static BRACKET_INNER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub planned: u8,
    pub actual: u8,
}

impl Progress {
    pub const fn new(planned: u8, actual: u8) -> Self {
        Progress { planned, actual }
    }
}

/// Map a raw tracker status to its dashboard status. Unknown and empty values
/// count as on track: no delay signal is not read as a delay.
pub fn normalize_status(raw: &str) -> Status {
    STATUS_MAP
        .get(raw.trim())
        .copied()
        .unwrap_or(Status::OnTrack)
}

/// Default progress bars for a dashboard status label.
pub fn default_progress(status: &str) -> Progress {
    PROGRESS_MAP
        .get(status)
        .copied()
        .unwrap_or(FALLBACK_PROGRESS)
}

/// Pull the first department out of an `SBU/Function` cell.
///
/// Accepts a plain value (`IT`), a JSON array (`["ALUMINUM","Phosphate"]`),
/// the same array with doubled quotes as written by some exports, or a
/// bracketed list that is not valid JSON at all (`[IT, Finance]`).
pub fn extract_department(raw: &str) -> String {
    let s = raw.trim();
    if s.is_empty() {
        return OTHER_DEPARTMENT.to_string();
    }

    let Some(bracketed) = BRACKETED.find(s) else {
        return s.to_string();
    };

    let unescaped = bracketed.as_str().replace("\"\"", "\"");
    match serde_json::from_str::<Vec<String>>(&unescaped) {
        Ok(choices) => choices
            .into_iter()
            .next()
            .unwrap_or_else(|| OTHER_DEPARTMENT.to_string()),
        Err(e) => {
            warn!("department {:?} is not a JSON array ({}), splitting on commas", s, e);
            match BRACKET_INNER.captures(s).and_then(|c| c.get(1)) {
                Some(inner) => first_or_other(
                    inner
                        .as_str()
                        .split(',')
                        .map(|p| p.trim().trim_matches('"').trim()),
                ),
                None => OTHER_DEPARTMENT.to_string(),
            }
        }
    }
}

fn first_or_other<'a>(mut parts: impl Iterator<Item = &'a str>) -> String {
    parts
        .find(|p| !p.trim().is_empty())
        .map(|p| p.trim().to_string())
        .unwrap_or_else(|| OTHER_DEPARTMENT.to_string())
}

/// Split a free-text cell into list items on newlines and `•` bullets.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.replace('•', "\n")
        .split('\n')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
