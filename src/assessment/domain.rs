use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifier of a catalog question. Numeric and textual ids never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionId {
    Number(i64),
    Text(String),
}

impl QuestionId {
    /// Reads an id from free text: integers become numeric ids.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(number) => Self::Number(number),
            Err(_) => Self::Text(trimmed.to_string()),
        }
    }

    /// Reads an id from a submitted JSON value.
    ///
    /// Whole numbers (including `2.0`) are numeric ids and strings are text ids.
    /// Fractional numbers, booleans, arrays and objects identify nothing.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(number) => number.as_i64().map(Self::Number).or_else(|| {
                number
                    .as_f64()
                    .filter(|float| float.fract() == 0.0 && float.abs() < 9.0e15)
                    .map(|float| Self::Number(float as i64))
            }),
            Value::String(text) => Some(Self::Text(text.clone())),
            _ => None,
        }
    }

    /// Zero and the empty string cannot stand in for an area label.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(number) => *number == 0,
            Self::Text(text) => text.is_empty(),
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for QuestionId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for QuestionId {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for QuestionId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Catalog entry tagged with the vocational area it measures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub area: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl Question {
    pub fn new(id: impl Into<QuestionId>, area: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            area: area.into(),
            prompt: None,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }
}

/// One submitted answer. `value` is kept raw and coerced when scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_id: Option<QuestionId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    pub value: Value,
}

impl Answer {
    pub fn for_question(id: impl Into<QuestionId>, value: impl Into<Value>) -> Self {
        Self {
            question_id: Some(id.into()),
            area: None,
            value: value.into(),
        }
    }

    pub fn for_area(area: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            question_id: None,
            area: Some(area.into()),
            value: value.into(),
        }
    }

    /// Reads an answer field by field; a field of the wrong shape is dropped
    /// on its own instead of discarding the whole answer.
    pub fn from_json(value: &Value) -> Option<Self> {
        let fields = value.as_object()?;

        Some(Self {
            question_id: fields.get("questionId").and_then(QuestionId::from_json),
            area: fields
                .get("area")
                .and_then(Value::as_str)
                .map(str::to_string),
            value: fields.get("value").cloned().unwrap_or(Value::Null),
        })
    }

    pub fn score_value(&self) -> f64 {
        coerce_score(&self.value)
    }
}

impl<'de> Deserialize<'de> for Answer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Self::from_json(&raw)
            .ok_or_else(|| serde::de::Error::custom("answer must be a JSON object"))
    }
}

/// Numeric contribution of a raw answer value; anything unusable counts as zero.
pub fn coerce_score(value: &Value) -> f64 {
    let number = match value {
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        Value::String(text) => text.trim().parse::<f64>().unwrap_or(0.0),
        Value::Bool(true) => 1.0,
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => 0.0,
    };

    if number.is_finite() {
        number
    } else {
        0.0
    }
}

/// Reads a submitted answer sheet.
///
/// Anything other than a JSON array is an empty sheet. Array entries that are
/// not objects become `None` and are skipped by scoring.
pub fn answer_sheet_from_json(body: Value) -> Vec<Option<Answer>> {
    match body {
        Value::Array(items) => items.iter().map(Answer::from_json).collect(),
        _ => Vec::new(),
    }
}

/// Same as [`answer_sheet_from_json`] for raw bytes; a blank body is an empty sheet.
pub fn answer_sheet_from_slice(raw: &[u8]) -> Result<Vec<Option<Answer>>, serde_json::Error> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    serde_json::from_slice(raw).map(answer_sheet_from_json)
}
