//! Integration tests for CLI parsing and commands.

use std::fs;

use clap::Parser;
use tempfile::TempDir;

use telehealth_cli::cli::{Cli, Command, DatasetArgs, HistoryCommand, IndexSourceArg};
use telehealth_cli::commands::{
    run_diseases, run_history_list, run_history_stats, run_profile, run_reshape, run_search,
    run_symptoms,
};
use telehealth_model::PresenceSentinel;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("parse cli")
}

fn dataset_args(dir: &TempDir) -> DatasetArgs {
    let data_dir = dir.path().to_str().unwrap();
    parse(&["telehealth", "--data-dir", data_dir, "history", "list"]).dataset
}

fn write_dataset(dir: &TempDir) {
    let root = dir.path();
    let reference = root.join("Disease symptom prediction");
    fs::create_dir_all(&reference).unwrap();
    fs::write(
        root.join("Disease_Symptom_Associations.csv"),
        "diseases,fever,cough,headache,nausea\nflu,1,1,0,0\nmigraine,0,0,1,1\n",
    )
    .unwrap();
    fs::write(
        reference.join("symptom_Description.csv"),
        "Disease,Description\nflu,Seasonal viral infection.\n",
    )
    .unwrap();
    fs::write(
        reference.join("symptom_precaution.csv"),
        "Disease,Precaution_1,Precaution_2\nflu,rest,drink fluids\n",
    )
    .unwrap();
    fs::write(
        reference.join("Symptom-severity.csv"),
        "Symptom,weight\nfever,7\ncough,4\nheadache,3\n",
    )
    .unwrap();
}

#[test]
fn parses_reshape_arguments() {
    let cli = parse(&[
        "telehealth",
        "reshape",
        "wide.csv",
        "--id-column",
        "Disease",
        "--presence",
        "truthy",
        "--dry-run",
    ]);
    let Command::Reshape(args) = cli.command else {
        panic!("expected reshape");
    };
    assert_eq!(args.id_column, "Disease");
    assert_eq!(args.presence, PresenceSentinel::Truthy);
    assert!(args.dry_run);
}

#[test]
fn reshape_defaults() {
    let cli = parse(&["telehealth", "reshape"]);
    let Command::Reshape(args) = cli.command else {
        panic!("expected reshape");
    };
    assert!(args.input.is_none());
    assert_eq!(args.id_column, "diseases");
    assert_eq!(args.presence, PresenceSentinel::Numeric(1));
}

#[test]
fn rejects_bad_sentinel() {
    assert!(Cli::try_parse_from(["telehealth", "reshape", "--presence", "maybe"]).is_err());
}

#[test]
fn diseases_requires_a_symptom() {
    assert!(Cli::try_parse_from(["telehealth", "diseases"]).is_err());
}

#[test]
fn parses_global_dataset_options_after_subcommand() {
    let cli = parse(&[
        "telehealth",
        "history",
        "stats",
        "--data-dir",
        "/srv/data",
        "--index-source",
        "listing",
    ]);
    assert!(matches!(cli.command, Command::History(HistoryCommand::Stats)));
    assert_eq!(cli.dataset.data_dir, std::path::PathBuf::from("/srv/data"));
    assert!(matches!(cli.dataset.index_source, IndexSourceArg::Listing));
}

#[test]
fn reference_dir_moves_only_reference_tables() {
    let cli = parse(&[
        "telehealth",
        "--data-dir",
        "/srv/data",
        "--reference-dir",
        "kaggle",
        "history",
        "list",
    ]);
    let layout = cli.dataset.layout();
    assert_eq!(
        layout.severity_path(),
        std::path::PathBuf::from("/srv/data/kaggle/Symptom-severity.csv")
    );
    assert_eq!(
        layout.associations_path(),
        std::path::PathBuf::from("/srv/data/preprocessed_dataset.csv")
    );
}

#[test]
fn reshape_then_query() {
    let dir = TempDir::new().unwrap();
    write_dataset(&dir);
    let dataset = dataset_args(&dir);

    let Command::Reshape(args) = parse(&["telehealth", "reshape"]).command else {
        panic!("expected reshape");
    };
    let result = run_reshape(&dataset, &args).unwrap();
    assert_eq!(result.pairs, 4);
    assert_eq!(result.diseases, 2);
    assert_eq!(
        result.output.as_deref(),
        Some(dir.path().join("preprocessed_dataset.csv").as_path())
    );

    assert_eq!(run_symptoms(&dataset, "flu").unwrap(), vec!["fever", "cough"]);
    assert!(run_symptoms(&dataset, "scurvy").unwrap().is_empty());

    let diseases = run_diseases(&dataset, &["nausea".to_string(), "fever".to_string()]).unwrap();
    assert_eq!(
        diseases.into_iter().collect::<Vec<_>>(),
        vec!["flu", "migraine"]
    );

    assert_eq!(run_search(&dataset, "MIGR").unwrap(), vec!["migraine"]);
}

#[test]
fn reshape_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    write_dataset(&dir);
    let dataset = dataset_args(&dir);

    let Command::Reshape(args) = parse(&["telehealth", "reshape", "--dry-run"]).command else {
        panic!("expected reshape");
    };
    let result = run_reshape(&dataset, &args).unwrap();
    assert!(result.output.is_none());
    assert!(!dir.path().join("preprocessed_dataset.csv").exists());
}

#[test]
fn reshape_missing_identifier_writes_nothing() {
    let dir = TempDir::new().unwrap();
    write_dataset(&dir);
    let dataset = dataset_args(&dir);

    let Command::Reshape(args) = parse(&["telehealth", "reshape", "--id-column", "Disease"]).command
    else {
        panic!("expected reshape");
    };
    let err = run_reshape(&dataset, &args).unwrap_err();
    assert!(format!("{err:#}").contains("required column 'Disease'"));
    assert!(!dir.path().join("preprocessed_dataset.csv").exists());
}

#[test]
fn profile_save_and_history() {
    let dir = TempDir::new().unwrap();
    write_dataset(&dir);
    let dataset = dataset_args(&dir);
    let Command::Reshape(args) = parse(&["telehealth", "reshape"]).command else {
        panic!("expected reshape");
    };
    run_reshape(&dataset, &args).unwrap();

    let result = run_profile(&dataset, "flu", true).unwrap();
    assert!(result.profile.requires_urgent_care());
    assert_eq!(
        result.profile.description_or_default(),
        "Seasonal viral infection."
    );
    assert_eq!(result.saved_to, Some(dir.path().join("patient_history.csv")));

    run_profile(&dataset, "migraine", true).unwrap();
    run_profile(&dataset, "flu", false).unwrap();
    let unknown = run_profile(&dataset, "scurvy", true).unwrap();
    assert!(unknown.saved_to.is_none());

    let entries = run_history_list(&dataset).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].disease, "flu");
    assert_eq!(entries[0].symptom_count, 2);

    let summary = run_history_stats(&dataset).unwrap();
    assert_eq!(summary.total, 2);
    assert_eq!(summary.count_for("migraine"), 1);
}

#[test]
fn query_without_index_file_fails() {
    let dir = TempDir::new().unwrap();
    let dataset = dataset_args(&dir);
    let err = run_symptoms(&dataset, "flu").unwrap_err();
    assert!(format!("{err:#}").contains("file not found"));
}
