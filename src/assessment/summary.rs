use super::domain::Answer;
use super::engine::ScoreResult;
use serde::{Deserialize, Serialize};

/// Overall interest band derived from the average answer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestLevel {
    High,
    Moderate,
    Low,
}

impl InterestLevel {
    pub fn from_average(average: f64) -> Self {
        if average >= 4.0 {
            Self::High
        } else if average >= 2.5 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High vocational interest",
            Self::Moderate => "Moderate vocational interest",
            Self::Low => "Low vocational interest",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaStanding {
    pub area: String,
    pub score: f64,
}

/// Read-out of a scored answer sheet for reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerSheetSummary {
    pub answered: usize,
    pub average: Option<f64>,
    pub interest_level: Option<InterestLevel>,
    pub recommended_area: Option<String>,
    /// Highest score first; equal scores keep aggregation order.
    pub ranking: Vec<AreaStanding>,
}

impl AnswerSheetSummary {
    pub fn new(result: &ScoreResult, answers: &[Option<Answer>]) -> Self {
        let values: Vec<f64> = answers.iter().flatten().map(Answer::score_value).collect();
        let answered = values.len();
        let average = (answered > 0).then(|| values.iter().sum::<f64>() / answered as f64);

        let mut ranking: Vec<AreaStanding> = result
            .scores
            .iter()
            .map(|(area, score)| AreaStanding {
                area: area.clone(),
                score: *score,
            })
            .collect();
        ranking.sort_by(|left, right| right.score.total_cmp(&left.score));

        Self {
            answered,
            average,
            interest_level: average.map(InterestLevel::from_average),
            recommended_area: result.recommended_area.clone(),
            ranking,
        }
    }
}
