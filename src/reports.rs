use crate::types::{
    DashboardData, Filters, Kpis, Project, StageCount, Status, StatusShare, ALL_FILTER,
    LIFECYCLE_STAGES, NO_MANAGER,
};
use crate::util::{percent, shares};
use std::collections::BTreeSet;

/// Assemble the dashboard document, or `None` when there are no projects.
pub fn build_dashboard(projects: Vec<Project>) -> Option<DashboardData> {
    if projects.is_empty() {
        return None;
    }
    Some(DashboardData {
        kpis: compute_kpis(&projects),
        filters: build_filters(&projects),
        project_status_overview: status_overview(&projects),
        projects_by_lifecycle_stage: lifecycle_breakdown(&projects),
        projects,
    })
}

pub fn compute_kpis(projects: &[Project]) -> Kpis {
    let total = projects.len();
    let count = |status: Status| projects.iter().filter(|p| p.status == status).count();
    Kpis {
        on_track_rate: percent(count(Status::OnTrack), total),
        major_delay_rate: percent(count(Status::Delayed), total),
        slightly_delay_rate: percent(count(Status::SlightlyDelayed), total),
        total_projects: total,
    }
}

/// Donut data: share of projects per status, canonical statuses first.
/// Statuses without projects are left out.
pub fn status_overview(projects: &[Project]) -> Vec<StatusShare> {
    let canonical: Vec<&str> = Status::ALL.iter().map(|s| s.as_str()).collect();
    let groups: Vec<(String, usize)> =
        ordered_tally(projects.iter().map(|p| p.status.as_str()), &canonical)
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .collect();
    let counts: Vec<usize> = groups.iter().map(|(_, count)| *count).collect();
    let pcts = shares(&counts, projects.len());
    groups
        .into_iter()
        .zip(pcts)
        .map(|((status, _), percentage)| StatusShare { status, percentage })
        .collect()
}

/// Bar chart data: projects per lifecycle stage. Canonical stages are always
/// listed, even when empty.
pub fn lifecycle_breakdown(projects: &[Project]) -> Vec<StageCount> {
    ordered_tally(
        projects.iter().map(|p| p.lifecycle_stage.as_str()),
        &LIFECYCLE_STAGES,
    )
    .into_iter()
    .map(|(stage, count)| StageCount { stage, count })
    .collect()
}

/// Count occurrences of each value. The result lists every `canonical` entry
/// in order (zero counts included), followed by the other values in the order
/// they were first seen.
pub fn ordered_tally<'a, I>(values: I, canonical: &[&str]) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tally: Vec<(String, usize)> = canonical.iter().map(|c| (c.to_string(), 0)).collect();
    for value in values {
        match tally.iter_mut().find(|(seen, _)| seen.as_str() == value) {
            Some(entry) => entry.1 += 1,
            None => tally.push((value.to_string(), 1)),
        }
    }
    tally
}

pub fn build_filters(projects: &[Project]) -> Filters {
    Filters {
        business_units: with_all(projects.iter().map(|p| p.department.as_str())),
        portfolios: with_all(
            projects
                .iter()
                .map(|p| p.portfolio.as_str())
                .filter(|v| !v.is_empty()),
        ),
        project_managers: with_all(
            projects
                .iter()
                .map(|p| p.project_manager.as_str())
                .filter(|v| !v.is_empty() && *v != NO_MANAGER),
        ),
        project_status: with_all(projects.iter().map(|p| p.status.as_str())),
        lifecycle_stage: with_all(
            projects
                .iter()
                .map(|p| p.lifecycle_stage.as_str())
                .filter(|v| !v.is_empty() && *v != ALL_FILTER),
        ),
    }
}

/// Distinct values sorted, behind the "All" option the UI uses for no filter.
fn with_all<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let distinct: BTreeSet<&str> = values.collect();
    std::iter::once(ALL_FILTER)
        .chain(distinct)
        .map(str::to_string)
        .collect()
}
