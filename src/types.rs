use serde::Serialize;
use tabled::Tabled;

/// Canonical project status shown on the dashboard tabs and donut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
    #[serde(rename = "On Track")]
    OnTrack,
    #[serde(rename = "Slightly Delayed")]
    SlightlyDelayed,
    #[serde(rename = "Delayed")]
    Delayed,
    #[serde(rename = "On Hold")]
    OnHold,
    #[serde(rename = "Closing")]
    Closing,
    #[serde(rename = "Cancelled")]
    Cancelled,
}

impl Status {
    /// Donut order.
    pub const ALL: [Status; 6] = [
        Status::OnTrack,
        Status::SlightlyDelayed,
        Status::Delayed,
        Status::OnHold,
        Status::Closing,
        Status::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::OnTrack => "On Track",
            Status::SlightlyDelayed => "Slightly Delayed",
            Status::Delayed => "Delayed",
            Status::OnHold => "On Hold",
            Status::Closing => "Closing",
            Status::Cancelled => "Cancelled",
        }
    }
}

/// Lifecycle stages in chart order. Stages outside this list are appended.
pub const LIFECYCLE_STAGES: [&str; 5] = [
    "Initiation",
    "Solutioning",
    "Procurement",
    "Execution",
    "Closing",
];

pub const DEFAULT_STAGE: &str = "Execution";
pub const NO_MANAGER: &str = "—";
pub const ALL_FILTER: &str = "All";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: usize,
    pub name: String,
    pub department: String,
    pub portfolio: String,
    pub status: Status,
    pub lifecycle_stage: String,
    pub project_manager: String,
    pub planned_progress: u8,
    pub actual_progress: u8,
    #[serde(flatten)]
    pub details: Option<ProjectDetails>,
}

/// Descriptive fields read by the dashboard's project modal.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetails {
    pub demand_number: String,
    pub business_focal_point: String,
    pub sponsor: String,
    pub milestone: String,
    pub demand_creation_date: String,
    pub go_live_date: String,
    pub modified: String,
    pub demand_description: String,
    pub update: String,
    pub challenges: Vec<String>,
    pub risks: Vec<String>,
    pub planned_activities: Vec<String>,
    pub added_values: Vec<String>,
    pub beneficiary_department: String,
    pub phase_dates: PhaseDates,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PhaseDates {
    pub initiation: PhaseWindow,
    pub procurement: PhaseWindow,
    pub execution: PhaseWindow,
    pub closure: PhaseWindow,
}

/// Raw start/end strings exactly as exported; the front-end parses them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PhaseWindow {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub on_track_rate: u32,
    pub major_delay_rate: u32,
    pub slightly_delay_rate: u32,
    pub total_projects: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct StatusShare {
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Percentage")]
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct StageCount {
    #[tabled(rename = "Stage")]
    pub stage: String,
    #[tabled(rename = "Count")]
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    pub business_units: Vec<String>,
    pub portfolios: Vec<String>,
    pub project_managers: Vec<String>,
    pub project_status: Vec<String>,
    pub lifecycle_stage: Vec<String>,
}

/// The whole document written to `dashboard-data.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub kpis: Kpis,
    pub filters: Filters,
    pub project_status_overview: Vec<StatusShare>,
    pub projects_by_lifecycle_stage: Vec<StageCount>,
    pub projects: Vec<Project>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_as_its_label() {
        for status in Status::ALL {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, status.as_str());
        }
    }
}
