use crate::error::{Result, TrackerError};
use crate::normalize::{default_progress, extract_department, normalize_status, split_list};
use crate::types::{
    PhaseDates, PhaseWindow, Project, ProjectDetails, DEFAULT_STAGE, NO_MANAGER,
};
use crate::FieldSet;
use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Rows shorter than this are export debris and are skipped.
pub const MIN_CELLS: usize = 8;

/// Logical columns of the tracker export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Department,
    Stage,
    Portfolio,
    Status,
    ProjectManager,
    DemandNumber,
    BusinessFocalPoint,
    Sponsor,
    Milestone,
    DemandCreationDate,
    GoLiveDate,
    Modified,
    Summary,
    ProgressSummary,
    Challenges,
    Risks,
    PlannedActivities,
    AddedValues,
    BeneficiaryDepartment,
    InitiationStart,
    InitiationEnd,
    ProcurementStart,
    ProcurementEnd,
    ExecutionStart,
    ExecutionEnd,
    ClosureStart,
    ClosureEnd,
}

impl Field {
    pub const ALL: [Field; 28] = [
        Field::Name,
        Field::Department,
        Field::Stage,
        Field::Portfolio,
        Field::Status,
        Field::ProjectManager,
        Field::DemandNumber,
        Field::BusinessFocalPoint,
        Field::Sponsor,
        Field::Milestone,
        Field::DemandCreationDate,
        Field::GoLiveDate,
        Field::Modified,
        Field::Summary,
        Field::ProgressSummary,
        Field::Challenges,
        Field::Risks,
        Field::PlannedActivities,
        Field::AddedValues,
        Field::BeneficiaryDepartment,
        Field::InitiationStart,
        Field::InitiationEnd,
        Field::ProcurementStart,
        Field::ProcurementEnd,
        Field::ExecutionStart,
        Field::ExecutionEnd,
        Field::ClosureStart,
        Field::ClosureEnd,
    ];

    /// Header names this field goes by, most preferred first. Display names
    /// come from the list view export, internal names from the API export.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Name => &["Project Name", "Title"],
            Field::Department => &["SBU/Function", "BU"],
            Field::Stage => &["Stage"],
            Field::Portfolio => &["Portfolio"],
            Field::Status => &["Status"],
            Field::ProjectManager => &["Project Manager", "AssignedPerson"],
            Field::DemandNumber => &["Demand Number", "DemandName"],
            Field::BusinessFocalPoint => &["Business Focal Point", "BusinessFocalPoint"],
            Field::Sponsor => &["Sponsor", "Sponsor0"],
            Field::Milestone => &["Milestone"],
            Field::DemandCreationDate => &["Demand Creation date", "DemandAssignmentdate"],
            Field::GoLiveDate => &["Go-Live date", "Go_x002d_Livedate"],
            Field::Modified => &["Modified"],
            Field::Summary => &["Summery", "Summary"],
            Field::ProgressSummary => &["ProgressSummery", "Progress Summary"],
            Field::Challenges => &["Challenges"],
            Field::Risks => &["Risks"],
            Field::PlannedActivities => &["Planned Activities", "PlannedActivities"],
            Field::AddedValues => &["Added Values", "AddedValues"],
            Field::BeneficiaryDepartment => &["Beneficiary Department", "BeneficiaryDepartment"],
            Field::InitiationStart => &["Initiation Start Date", "InitiationStartDate"],
            Field::InitiationEnd => &["Initiation End Date"],
            Field::ProcurementStart => &["Procurement Start Date", "ProcurementStart"],
            Field::ProcurementEnd => &["Procurement End Date"],
            Field::ExecutionStart => &["Execution Start Date", "ExecutionStartDate"],
            Field::ExecutionEnd => &["Execution End Date"],
            Field::ClosureStart => &["Closure Start Date", "ClosureStartDate"],
            Field::ClosureEnd => &["Closure End Date"],
        }
    }
}

/// Header row resolved once into column indices per logical field.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    columns: HashMap<Field, Vec<usize>>,
}

impl ColumnMap {
    pub fn from_headers<'a, I>(headers: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        // Exact, case-sensitive match on trimmed names.
        let index: HashMap<&str, usize> = headers
            .into_iter()
            .enumerate()
            .map(|(i, h)| (h.trim(), i))
            .collect();

        let columns = Field::ALL
            .iter()
            .map(|&field| {
                let found: Vec<usize> = field
                    .aliases()
                    .iter()
                    .filter_map(|alias| index.get(alias.trim()).copied())
                    .collect();
                (field, found)
            })
            .collect();
        ColumnMap { columns }
    }

    /// First non-empty trimmed value among the field's columns, or `""`.
    pub fn get<'r>(&self, row: &'r StringRecord, field: Field) -> &'r str {
        self.columns
            .get(&field)
            .into_iter()
            .flatten()
            .filter_map(|&i| row.get(i))
            .map(str::trim)
            .find(|v| !v.is_empty())
            .unwrap_or("")
    }

    pub fn has(&self, field: Field) -> bool {
        self.columns.get(&field).is_some_and(|c| !c.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub total_rows: usize,
    pub short_rows: usize,
    pub unnamed_rows: usize,
    pub projects: usize,
}

pub fn load_projects(path: &Path, field_set: FieldSet) -> Result<(Vec<Project>, LoadReport)> {
    let file = File::open(path).map_err(|e| TrackerError::io(path, e))?;
    info!("Reading tracker export {}", path.display());
    read_projects(BufReader::new(file), field_set)
}

/// Read an export: line 1 is the SharePoint list schema, line 2 the column
/// headers, everything after is data.
pub fn read_projects<R: Read>(reader: R, field_set: FieldSet) -> Result<(Vec<Project>, LoadReport)> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = rdr.records();

    let _schema = records.next().ok_or(TrackerError::MissingHeader)??;
    let headers = records.next().ok_or(TrackerError::MissingHeader)??;
    let columns = ColumnMap::from_headers(headers.iter());
    if !columns.has(Field::Name) {
        debug!("no project name column among headers {:?}", headers);
    }

    let mut report = LoadReport::default();
    let mut projects: Vec<Project> = Vec::new();
    for result in records {
        let row = result?;
        report.total_rows += 1;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        if row.len() < MIN_CELLS {
            debug!("line {}: skipped, only {} cells", line, row.len());
            report.short_rows += 1;
            continue;
        }
        let Some(project) = map_row(&columns, &row, projects.len() + 1, field_set) else {
            debug!("line {}: skipped, no project name", line);
            report.unnamed_rows += 1;
            continue;
        };
        projects.push(project);
    }

    report.projects = projects.len();
    Ok((projects, report))
}

/// Build one project from a data row, or `None` when it has no name.
pub fn map_row(columns: &ColumnMap, row: &StringRecord, id: usize, field_set: FieldSet) -> Option<Project> {
    let get = |field| columns.get(row, field);

    let name = get(Field::Name);
    if name.is_empty() {
        return None;
    }

    let status = normalize_status(get(Field::Status));
    let progress = default_progress(status.as_str());
    let stage = match get(Field::Stage) {
        "" => DEFAULT_STAGE,
        s => s,
    };
    let manager = match get(Field::ProjectManager) {
        "" => NO_MANAGER,
        m => m,
    };

    let details = match field_set {
        FieldSet::Basic => None,
        FieldSet::Extended => Some(map_details(columns, row, id)),
    };

    Some(Project {
        id,
        name: name.to_string(),
        department: extract_department(get(Field::Department)),
        portfolio: get(Field::Portfolio).to_string(),
        status,
        lifecycle_stage: stage.to_string(),
        project_manager: manager.to_string(),
        planned_progress: progress.planned,
        actual_progress: progress.actual,
        details,
    })
}

fn map_details(columns: &ColumnMap, row: &StringRecord, id: usize) -> ProjectDetails {
    let get = |field| columns.get(row, field).to_string();
    let window = |start, end| PhaseWindow {
        start: get(start),
        end: get(end),
    };

    let demand_number = match columns.get(row, Field::DemandNumber) {
        "" => format!("PRJ-2024-{:03}", id),
        n => n.to_string(),
    };

    ProjectDetails {
        demand_number,
        business_focal_point: get(Field::BusinessFocalPoint),
        sponsor: get(Field::Sponsor),
        milestone: get(Field::Milestone),
        demand_creation_date: get(Field::DemandCreationDate),
        go_live_date: get(Field::GoLiveDate),
        modified: get(Field::Modified),
        demand_description: get(Field::Summary),
        update: get(Field::ProgressSummary),
        challenges: split_list(columns.get(row, Field::Challenges)),
        risks: split_list(columns.get(row, Field::Risks)),
        planned_activities: split_list(columns.get(row, Field::PlannedActivities)),
        added_values: split_list(columns.get(row, Field::AddedValues)),
        beneficiary_department: get(Field::BeneficiaryDepartment),
        phase_dates: PhaseDates {
            initiation: window(Field::InitiationStart, Field::InitiationEnd),
            procurement: window(Field::ProcurementStart, Field::ProcurementEnd),
            execution: window(Field::ExecutionStart, Field::ExecutionEnd),
            closure: window(Field::ClosureStart, Field::ClosureEnd),
        },
    }
}
