use serde_json::Value;
use std::fs;
use std::path::Path;
use tracker_dashboard::{run, Config, FieldSet, RunOutcome, TrackerError};

const EXPORT: &str = "\u{feff}ListSchema={\"schemaXml\":\"<List/>\"}
Title,Status,Stage,Portfolio,SBU/Function,Project Manager,Demand Number,Challenges,Risks,Initiation Start Date,Initiation End Date
ERP Upgrade,Major Delay,Procurement,Digital,\"[\"\"IT\"\"]\",Dana,DM-7,\"• Vendor\n• Budget\",Scope,2024-01-01,2024-02-01
Mine Expansion,Slightly Delay,,Capital,\"[\"\"ALUMINUM\"\",\"\"Phosphate\"\"]\",,,,,,
Too,Short,Row
,On Track,Execution,Digital,IT,Sam,,,,,
Data Lake,Completed,Closing,Digital,Finance,Sam,,,,,
Portal,Not Started,Pilot,,,Ali,,,,,
";

fn config(dir: &Path, body: &str, field_set: FieldSet) -> Config {
    let input = dir.join("export.csv");
    fs::write(&input, body).unwrap();
    Config {
        input,
        output: dir.join("data").join("dashboard-data.json"),
        field_set,
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn writes_the_dashboard_document() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), EXPORT, FieldSet::Extended);

    let outcome = run(&config).unwrap();
    assert!(matches!(outcome, RunOutcome::Written { .. }));

    let json = read_json(&config.output);
    let top: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    for key in ["kpis", "filters", "projectStatusOverview", "projectsByLifecycleStage", "projects"] {
        assert!(top.contains(&key), "missing {}", key);
    }

    assert_eq!(json["kpis"]["totalProjects"], 4);
    assert_eq!(json["kpis"]["onTrackRate"], 25);
    assert_eq!(json["kpis"]["majorDelayRate"], 25);
    assert_eq!(json["kpis"]["slightlyDelayRate"], 25);

    let projects = json["projects"].as_array().unwrap();
    let ids: Vec<u64> = projects.iter().map(|p| p["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    let erp = &projects[0];
    assert_eq!(erp["name"], "ERP Upgrade");
    assert_eq!(erp["department"], "IT");
    assert_eq!(erp["status"], "Delayed");
    assert_eq!(erp["lifecycleStage"], "Procurement");
    assert_eq!(erp["plannedProgress"], 55);
    assert_eq!(erp["actualProgress"], 50);
    assert_eq!(erp["demandNumber"], "DM-7");
    assert_eq!(erp["challenges"], serde_json::json!(["Vendor", "Budget"]));
    assert_eq!(erp["risks"], serde_json::json!(["Scope"]));
    assert_eq!(erp["phaseDates"]["initiation"]["start"], "2024-01-01");
    assert_eq!(erp["phaseDates"]["closure"]["end"], "");

    let mine = &projects[1];
    assert_eq!(mine["department"], "ALUMINUM");
    assert_eq!(mine["lifecycleStage"], "Execution");
    assert_eq!(mine["projectManager"], "—");
    assert_eq!(mine["demandNumber"], "PRJ-2024-002");
}

#[test]
fn summaries_follow_canonical_order() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), EXPORT, FieldSet::Extended);
    run(&config).unwrap();
    let json = read_json(&config.output);

    let overview: Vec<(String, u64)> = json["projectStatusOverview"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| (s["status"].as_str().unwrap().to_string(), s["percentage"].as_u64().unwrap()))
        .collect();
    assert_eq!(
        overview,
        vec![
            ("On Track".to_string(), 25),
            ("Slightly Delayed".to_string(), 25),
            ("Delayed".to_string(), 25),
            ("Closing".to_string(), 25),
        ]
    );

    let stages: Vec<(String, u64)> = json["projectsByLifecycleStage"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| (s["stage"].as_str().unwrap().to_string(), s["count"].as_u64().unwrap()))
        .collect();
    assert_eq!(
        stages,
        vec![
            ("Initiation".to_string(), 0),
            ("Solutioning".to_string(), 0),
            ("Procurement".to_string(), 1),
            ("Execution".to_string(), 1),
            ("Closing".to_string(), 1),
            ("Pilot".to_string(), 1),
        ]
    );
}

#[test]
fn filters_are_sorted_behind_all() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), EXPORT, FieldSet::Extended);
    run(&config).unwrap();
    let filters = &read_json(&config.output)["filters"];

    assert_eq!(filters["businessUnits"], serde_json::json!(["All", "ALUMINUM", "Finance", "IT", "Other"]));
    assert_eq!(filters["portfolios"], serde_json::json!(["All", "Capital", "Digital"]));
    assert_eq!(filters["projectManagers"], serde_json::json!(["All", "Ali", "Dana", "Sam"]));
    assert_eq!(
        filters["projectStatus"],
        serde_json::json!(["All", "Closing", "Delayed", "On Track", "Slightly Delayed"])
    );
    assert_eq!(
        filters["lifecycleStage"],
        serde_json::json!(["All", "Closing", "Execution", "Pilot", "Procurement"])
    );
}

#[test]
fn basic_field_set_omits_details() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), EXPORT, FieldSet::Basic);
    run(&config).unwrap();
    let json = read_json(&config.output);
    let erp = json["projects"][0].as_object().unwrap();
    assert!(erp.contains_key("plannedProgress"));
    assert!(!erp.contains_key("phaseDates"));
    assert!(!erp.contains_key("demandNumber"));
}

#[test]
fn no_projects_leaves_previous_output_alone() {
    let dir = tempfile::tempdir().unwrap();
    let body = "schema\nTitle,Status,Stage,Portfolio,BU,Project Manager,A,B\n,On Track,,,,,,\nshort,row\n";
    let config = config(dir.path(), body, FieldSet::Extended);
    fs::create_dir_all(config.output.parent().unwrap()).unwrap();
    fs::write(&config.output, "previous").unwrap();

    let outcome = run(&config).unwrap();
    assert!(matches!(outcome, RunOutcome::NoProjects));
    assert_eq!(fs::read_to_string(&config.output).unwrap(), "previous");
}

#[test]
fn no_projects_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), "schema\nTitle,Status\n", FieldSet::Extended);
    assert!(matches!(run(&config).unwrap(), RunOutcome::NoProjects));
    assert!(!config.output.exists());
}

#[test]
fn missing_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        input: dir.path().join("absent.csv"),
        output: dir.path().join("out.json"),
        field_set: FieldSet::Extended,
    };
    let err = run(&config).unwrap_err();
    assert!(matches!(err, TrackerError::Io { .. }));
    assert!(!config.output.exists());
}
