//! Integration tests for problem files, handoff files and reports.
//!
//! Problems are written to temporary files, loaded, handled, and the
//! rendered reports are parsed back to check their content.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use ahp_priority::adapters::problem::FileFormat;
use ahp_priority::adapters::{
    load_handoff, load_ranking_problem, load_weighing_problem, save_handoff, writer_for,
    ProblemFileError,
};
use ahp_priority::application::{RankAlternativesHandler, WeighCriteriaHandler};
use ahp_priority::domain::analysis::WeightProvenance;
use ahp_priority::domain::foundation::{ErrorCode, Scope};
use ahp_priority::ports::ReportFormat;

const WEIGHING_YAML: &str = r#"
criteria: "Price, Comfort, Style"
comparisons:
  - [1, 3, 5]
  - [0, 1, 2]
  - [0, 0, 1]
"#;

const RANKING_YAML: &str = r#"
alternatives: "Car A, Car B, Car C"
comparisons:
  Price:
    - [1, "1/3", 2]
    - [0, 1, 5]
    - [0, 0, 1]
  Comfort:
    - [1, 4, 3]
    - [0, 1, "1/2"]
    - [0, 0, 1]
  Style:
    - [1, 0.5, 0.25]
    - [0, 1, 0.5]
    - [0, 0, 1]
"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn render_ranking(path: &Path, handoff: &Path, format: ReportFormat) -> Vec<u8> {
    let previous = load_handoff(handoff).unwrap();
    let cmd = load_ranking_problem(path, Some(previous)).unwrap();
    let result = RankAlternativesHandler::new().handle(cmd).unwrap();

    let mut buffer = Vec::new();
    writer_for(format, 4)
        .write_ranking(&result, &mut buffer)
        .unwrap();
    buffer
}

#[test]
fn weigh_save_handoff_and_rank_from_files() {
    let dir = TempDir::new().unwrap();
    let weighing = write(&dir, "criteria.yaml", WEIGHING_YAML);
    let ranking = write(&dir, "cars.yaml", RANKING_YAML);
    let handoff = dir.path().join("weights.json");

    let cmd = load_weighing_problem(&weighing).unwrap();
    let result = WeighCriteriaHandler::new().handle(cmd).unwrap();
    save_handoff(&handoff, &result.handoff()).unwrap();

    let restored = load_handoff(&handoff).unwrap();
    assert_eq!(restored.provenance, WeightProvenance::Derived);
    assert_eq!(restored.criteria().len(), 3);

    let report: serde_json::Value =
        serde_json::from_slice(&render_ranking(&ranking, &handoff, ReportFormat::Json)).unwrap();

    assert_eq!(report["ranking"][0]["alternative"], "Car B");
    assert_eq!(report["ranking"][0]["rank"], 1);
    assert_eq!(report["criteria_weights"]["provenance"], "derived");
    assert_eq!(report["criteria"].as_array().map(Vec::len), Some(3));
    assert_eq!(report["criteria"][0]["criterion"], "Price");
}

#[test]
fn yaml_handoff_and_yaml_report() {
    let dir = TempDir::new().unwrap();
    let weighing = write(&dir, "criteria.yml", WEIGHING_YAML);
    let ranking = write(&dir, "cars.yml", RANKING_YAML);
    let handoff = dir.path().join("weights.yaml");

    let result = WeighCriteriaHandler::new()
        .handle(load_weighing_problem(&weighing).unwrap())
        .unwrap();
    save_handoff(&handoff, &result.handoff()).unwrap();

    let report: serde_yaml::Value =
        serde_yaml::from_slice(&render_ranking(&ranking, &handoff, ReportFormat::Yaml)).unwrap();
    let scores: Vec<f64> = report["ranking"]
        .as_sequence()
        .unwrap()
        .iter()
        .filter_map(|row| row["score"].as_f64())
        .collect();

    assert_eq!(scores.len(), 3);
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn weighing_report_from_json_problem() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "criteria.json",
        r#"{"criteria": ["Cost", "Quality"], "comparisons": [[1, "1/4"], [0, 1]]}"#,
    );

    let result = WeighCriteriaHandler::new()
        .handle(load_weighing_problem(&path).unwrap())
        .unwrap();
    let mut buffer = Vec::new();
    writer_for(ReportFormat::Json, 3)
        .write_weighting(&result, &mut buffer)
        .unwrap();
    let report: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

    assert_eq!(report["matrix"]["rows"][1][0], 4.0);
    assert_eq!(report["consistency"]["random_index"], 0.0);
    assert_eq!(report["consistency"]["is_consistent"], true);
}

#[test]
fn ranking_without_weights_fails() {
    let dir = TempDir::new().unwrap();
    let ranking = write(&dir, "cars.yaml", RANKING_YAML);

    assert!(matches!(
        load_ranking_problem(&ranking, None),
        Err(ProblemFileError::MissingCriteriaWeights)
    ));
}

#[test]
fn invalid_labels_carry_scope() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "criteria.yaml",
        "criteria: \"Price, Price\"\ncomparisons: [[1, 2], [0, 1]]\n",
    );

    match load_weighing_problem(&path) {
        Err(ProblemFileError::Invalid(err)) => {
            assert_eq!(err.code(), ErrorCode::InputError);
            assert_eq!(err.scope(), &Scope::CriteriaLabels);
        }
        other => panic!("expected invalid labels, got {other:?}"),
    }
}

#[test]
fn unsupported_extension_and_missing_file() {
    let dir = TempDir::new().unwrap();
    let text = write(&dir, "criteria.txt", WEIGHING_YAML);

    assert!(matches!(
        load_weighing_problem(&text),
        Err(ProblemFileError::UnsupportedFormat(_))
    ));
    assert!(matches!(
        load_weighing_problem(&dir.path().join("absent.yaml")),
        Err(ProblemFileError::Read { .. })
    ));
    assert_eq!(
        FileFormat::from_path(Path::new("weights.yml")).unwrap(),
        FileFormat::Yaml
    );
}
