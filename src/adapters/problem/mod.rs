//! Problem Adapters - Loading problems and persisting criteria weights.

mod problem_file;

pub use problem_file::{
    load_handoff, load_ranking_problem, load_weighing_problem, parse_document, save_handoff,
    ComparisonsInput, CriterionGridInput, EntryInput, FileFormat, LabelsInput, ManualWeightsInput,
    ProblemFileError, RankingProblem, WeighingProblem, WeightsInput,
};
