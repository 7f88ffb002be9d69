use super::domain::{Question, QuestionId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read question catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid question catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("question id {0} appears more than once")]
    DuplicateId(QuestionId),
    #[error("question {0} has no area")]
    MissingArea(QuestionId),
    #[error("question catalog is empty")]
    Empty,
}

/// Immutable questionnaire handed to the scoring engine on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if question.area.trim().is_empty() {
                return Err(CatalogError::MissingArea(question.id.clone()));
            }
            if !seen.insert(&question.id) {
                return Err(CatalogError::DuplicateId(question.id.clone()));
            }
        }

        Ok(Self { questions })
    }

    /// The ten-statement vocational questionnaire shown by the web front end.
    pub fn standard() -> Self {
        let questions = STANDARD_QUESTIONS
            .iter()
            .map(|(id, area, prompt)| Question::new(*id, *area).with_prompt(*prompt))
            .collect();

        Self { questions }
    }

    /// Loads the catalog from `path`, or the standard catalog when none is set.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::standard()),
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Reads `id,area,prompt` rows. Integer ids become numeric ids.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut questions = Vec::new();
        for row in csv_reader.deserialize::<CatalogRow>() {
            let row = row?;
            questions.push(Question {
                id: QuestionId::parse(&row.id),
                area: row.area,
                prompt: row.prompt.filter(|prompt| !prompt.is_empty()),
            });
        }

        Self::new(questions)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| &question.id == id)
    }

    /// Distinct areas in the order they first appear.
    pub fn areas(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.questions
            .iter()
            .map(|question| question.area.as_str())
            .filter(|area| seen.insert(*area))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    area: String,
    #[serde(default)]
    prompt: Option<String>,
}

const STANDARD_QUESTIONS: [(i64, &str, &str); 10] = [
    (
        1,
        "exact-sciences",
        "I enjoy working with numbers and complex mathematical calculations",
    ),
    (
        2,
        "arts",
        "I prefer activities that involve creativity and artistic expression",
    ),
    (
        3,
        "business",
        "I feel comfortable leading groups and making important decisions",
    ),
    (
        4,
        "technology",
        "I am interested in understanding how things work technically",
    ),
    (
        5,
        "humanities",
        "I like helping other people solve their problems",
    ),
    (
        6,
        "health",
        "I am interested in matters related to health and well-being",
    ),
    (
        7,
        "biological-sciences",
        "I prefer work that keeps me in contact with nature",
    ),
    (
        8,
        "business",
        "I find it easy to communicate with and persuade other people",
    ),
    (
        9,
        "exact-sciences",
        "I am motivated by challenges that involve analysis and research",
    ),
    (
        10,
        "technology",
        "I like activities that demand precision and attention to detail",
    ),
];
