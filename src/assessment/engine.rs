use super::domain::{Answer, Question, QuestionId};
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Area totals in aggregation order: catalog areas first, then ad hoc areas.
pub type AreaScores = IndexMap<String, f64>;

/// Per-area totals and the area with the highest total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    #[serde(serialize_with = "serialize_scores")]
    pub scores: AreaScores,
    pub recommended_area: Option<String>,
}

impl ScoreResult {
    pub fn score_for(&self, area: &str) -> Option<f64> {
        self.scores.get(area).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("Perguntas ou respostas não fornecidas")]
    MissingInput,
}

/// Wire shape of a rejected scoring request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringErrorBody {
    pub error: String,
}

impl From<&ScoringError> for ScoringErrorBody {
    fn from(err: &ScoringError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// Aggregates answer values per area and recommends the top-scoring area.
///
/// Every catalog area starts at zero. An answer is credited to the area of the
/// first question with a matching id; failing that, to its own `area`; failing
/// that, to its question id used as a label. Answers with no usable area are
/// ignored. Ties on the top score go to the area seen first.
///
/// Only a call with neither a catalog nor answers is rejected; a missing side
/// on its own is treated as empty.
pub fn calculate_result(
    questions: Option<&[Question]>,
    answers: Option<&[Option<Answer>]>,
) -> Result<ScoreResult, ScoringError> {
    if questions.is_none() && answers.is_none() {
        return Err(ScoringError::MissingInput);
    }

    let mut scores = AreaScores::new();

    for question in questions.unwrap_or_default() {
        if !question.area.is_empty() {
            scores.entry(question.area.clone()).or_insert(0.0);
        }
    }

    for answer in answers.unwrap_or_default().iter().flatten() {
        let Some(area) = resolve_area(questions, answer) else {
            continue;
        };
        let total = scores.entry(area).or_insert(0.0);
        *total = saturating_add(*total, answer.score_value());
    }

    let recommended_area = top_area(&scores);

    Ok(ScoreResult {
        scores,
        recommended_area,
    })
}

fn resolve_area(questions: Option<&[Question]>, answer: &Answer) -> Option<String> {
    let matched = match (questions, answer.question_id.as_ref()) {
        (Some(questions), Some(id)) => questions.iter().find(|question| &question.id == id),
        _ => None,
    };

    // A matched question decides the area even when its label is empty.
    let area = match matched {
        Some(question) => question.area.clone(),
        None => answer
            .area
            .clone()
            .filter(|area| !area.is_empty())
            .or_else(|| {
                answer
                    .question_id
                    .as_ref()
                    .filter(|id| !id.is_blank())
                    .map(QuestionId::to_string)
            })
            .unwrap_or_default(),
    };

    (!area.is_empty()).then_some(area)
}

// Totals stay finite so they always serialize as JSON numbers.
fn saturating_add(total: f64, value: f64) -> f64 {
    (total + value).clamp(f64::MIN, f64::MAX)
}

fn top_area(scores: &AreaScores) -> Option<String> {
    let mut best: Option<(&String, f64)> = None;

    for (area, &total) in scores {
        match best {
            Some((_, top)) if total <= top => {}
            _ => best = Some((area, total)),
        }
    }

    best.map(|(area, _)| area.clone())
}

fn serialize_scores<S>(scores: &AreaScores, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(scores.len()))?;
    for (area, total) in scores {
        if is_whole(*total) {
            map.serialize_entry(area, &(*total as i64))?;
        } else {
            map.serialize_entry(area, total)?;
        }
    }
    map.end()
}

// Whole totals go out as JSON integers.
fn is_whole(value: f64) -> bool {
    value.fract() == 0.0 && value.abs() < 9.0e15
}
