//! Problem Files - JSON/YAML documents describing one weighting or ranking pass.
//!
//! Labels and weights may be written either as lists or as the
//! comma-separated text a form would collect, and judgments may be numbers
//! or fractions such as `"1/3"`. Everything goes through the text parser
//! before it becomes a command.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::adapters::parsing::{parse_labels, parse_number, parse_weights};
use crate::application::{
    AlternativeComparisons, CriteriaWeightsSource, RankAlternativesCommand, WeighCriteriaCommand,
};
use crate::domain::analysis::CriteriaWeights;
use crate::domain::foundation::{AhpError, Label, Scope};

/// Serialization formats recognized by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    /// Picks the format from a `.json`, `.yaml` or `.yml` extension.
    pub fn from_path(path: &Path) -> Result<Self, ProblemFileError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(FileFormat::Json),
            Some("yaml") | Some("yml") => Ok(FileFormat::Yaml),
            _ => Err(ProblemFileError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Errors that can occur while loading or saving problem files.
#[derive(Debug, Error)]
pub enum ProblemFileError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported file extension for {}; expected .json, .yaml or .yml", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Failed to parse {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("Ranking problem has no criteria weights; supply manual weights or a handoff file")]
    MissingCriteriaWeights,

    #[error(transparent)]
    Invalid(#[from] AhpError),
}

/// Labels as a list or as comma-separated text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LabelsInput {
    List(Vec<String>),
    Text(String),
}

impl LabelsInput {
    fn into_labels(self) -> Result<Vec<Label>, AhpError> {
        match self {
            LabelsInput::List(values) => Label::many(values),
            LabelsInput::Text(text) => parse_labels(&text),
        }
    }
}

/// Weights as a list or as comma-separated text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WeightsInput {
    List(Vec<f64>),
    Text(String),
}

impl WeightsInput {
    fn into_weights(self) -> Result<Vec<f64>, AhpError> {
        match self {
            WeightsInput::List(values) => Ok(values),
            WeightsInput::Text(text) => parse_weights(&text),
        }
    }
}

/// A single judgment: a number or a fraction written as text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EntryInput {
    Number(f64),
    Text(String),
}

fn into_grid(rows: Vec<Vec<EntryInput>>) -> Result<Vec<Vec<f64>>, AhpError> {
    rows.into_iter()
        .map(|row| {
            row.into_iter()
                .map(|entry| match entry {
                    EntryInput::Number(value) => Ok(value),
                    EntryInput::Text(text) => parse_number(&text),
                })
                .collect()
        })
        .collect()
}

/// A criteria weighting problem.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeighingProblem {
    pub criteria: LabelsInput,
    pub comparisons: Vec<Vec<EntryInput>>,
}

impl WeighingProblem {
    pub fn into_command(self) -> Result<WeighCriteriaCommand, AhpError> {
        let criteria = self
            .criteria
            .into_labels()
            .map_err(|e| e.within(Scope::CriteriaLabels))?;
        let comparisons = into_grid(self.comparisons).map_err(|e| e.within(Scope::CriteriaMatrix))?;

        Ok(WeighCriteriaCommand {
            criteria,
            comparisons,
        })
    }
}

/// Manually entered criteria weights.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManualWeightsInput {
    pub criteria: LabelsInput,
    pub weights: WeightsInput,
}

/// One criterion's alternative judgments in list form.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CriterionGridInput {
    pub criterion: String,
    pub matrix: Vec<Vec<EntryInput>>,
}

/// Per-criterion alternative judgments, keyed by criterion or listed.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ComparisonsInput {
    Keyed(BTreeMap<String, Vec<Vec<EntryInput>>>),
    Listed(Vec<CriterionGridInput>),
}

impl ComparisonsInput {
    fn into_comparisons(self) -> Result<Vec<AlternativeComparisons>, AhpError> {
        let grids: Vec<(String, Vec<Vec<EntryInput>>)> = match self {
            ComparisonsInput::Keyed(map) => map.into_iter().collect(),
            ComparisonsInput::Listed(list) => {
                list.into_iter().map(|g| (g.criterion, g.matrix)).collect()
            }
        };

        grids
            .into_iter()
            .map(|(criterion, rows)| {
                let criterion = Label::new(criterion).map_err(|e| e.within(Scope::CriteriaLabels))?;
                let matrix = into_grid(rows).map_err(|e| {
                    e.within(Scope::AlternativesMatrix {
                        criterion: criterion.clone(),
                    })
                })?;
                Ok(AlternativeComparisons { criterion, matrix })
            })
            .collect()
    }
}

/// An alternative ranking problem.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RankingProblem {
    pub alternatives: LabelsInput,
    #[serde(default)]
    pub criteria_weights: Option<ManualWeightsInput>,
    pub comparisons: ComparisonsInput,
}

impl RankingProblem {
    /// Builds the ranking command.
    ///
    /// `previous` weights, when given, take the place of any manual weights
    /// in the file.
    pub fn into_command(
        self,
        previous: Option<CriteriaWeights>,
    ) -> Result<RankAlternativesCommand, ProblemFileError> {
        let alternatives = self
            .alternatives
            .into_labels()
            .map_err(|e| e.within(Scope::AlternativeLabels))?;

        let criteria_weights = match (previous, self.criteria_weights) {
            (Some(previous), _) => CriteriaWeightsSource::Previous(previous),
            (None, Some(manual)) => CriteriaWeightsSource::Manual {
                criteria: manual
                    .criteria
                    .into_labels()
                    .map_err(|e| e.within(Scope::CriteriaLabels))?,
                weights: manual
                    .weights
                    .into_weights()
                    .map_err(|e| e.within(Scope::CriteriaWeights))?,
            },
            (None, None) => return Err(ProblemFileError::MissingCriteriaWeights),
        };

        Ok(RankAlternativesCommand {
            alternatives,
            criteria_weights,
            comparisons: self.comparisons.into_comparisons()?,
        })
    }
}

/// Parses a document from text in the given format.
pub fn parse_document<T: DeserializeOwned>(
    text: &str,
    format: FileFormat,
    path: &Path,
) -> Result<T, ProblemFileError> {
    let parse_error = |reason: String| ProblemFileError::Parse {
        path: path.to_path_buf(),
        reason,
    };

    match format {
        FileFormat::Json => serde_json::from_str(text).map_err(|e| parse_error(e.to_string())),
        FileFormat::Yaml => serde_yaml::from_str(text).map_err(|e| parse_error(e.to_string())),
    }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, ProblemFileError> {
    let format = FileFormat::from_path(path)?;
    let text = std::fs::read_to_string(path).map_err(|source| ProblemFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), ?format, "Read problem document");
    parse_document(&text, format, path)
}

/// Loads a weighting problem and turns it into a command.
pub fn load_weighing_problem(path: &Path) -> Result<WeighCriteriaCommand, ProblemFileError> {
    let problem: WeighingProblem = read_document(path)?;
    Ok(problem.into_command()?)
}

/// Loads a ranking problem and turns it into a command.
pub fn load_ranking_problem(
    path: &Path,
    previous: Option<CriteriaWeights>,
) -> Result<RankAlternativesCommand, ProblemFileError> {
    let problem: RankingProblem = read_document(path)?;
    problem.into_command(previous)
}

/// Loads criteria weights saved by an earlier weighting pass.
pub fn load_handoff(path: &Path) -> Result<CriteriaWeights, ProblemFileError> {
    read_document(path)
}

/// Saves criteria weights for a later ranking pass.
pub fn save_handoff(path: &Path, weights: &CriteriaWeights) -> Result<(), ProblemFileError> {
    let text = match FileFormat::from_path(path)? {
        FileFormat::Json => serde_json::to_string_pretty(weights).map_err(|e| e.to_string()),
        FileFormat::Yaml => serde_yaml::to_string(weights).map_err(|e| e.to_string()),
    }
    .map_err(|reason| ProblemFileError::Parse {
        path: path.to_path_buf(),
        reason,
    })?;

    std::fs::write(path, text).map_err(|source| ProblemFileError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "Saved criteria weights");
    Ok(())
}
