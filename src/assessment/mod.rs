//! Vocational questionnaire scoring: catalog, answers, area aggregation.

pub mod catalog;
pub mod domain;
pub mod engine;
pub mod router;
pub mod summary;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, QuestionCatalog};
pub use domain::{answer_sheet_from_json, answer_sheet_from_slice, Answer, Question, QuestionId};
pub use engine::{calculate_result, AreaScores, ScoreResult, ScoringError, ScoringErrorBody};
pub use router::assessment_router;
pub use summary::{AnswerSheetSummary, AreaStanding, InterestLevel};
