use std::path::Path;
use vocational_test::assessment::{AnswerSheetSummary, QuestionCatalog};

pub(crate) fn render_score_report(
    answers_path: &Path,
    catalog: &QuestionCatalog,
    summary: &AnswerSheetSummary,
) {
    println!("Vocational test result");
    println!(
        "Answer sheet: {} ({} answers scored against {} questions)",
        answers_path.display(),
        summary.answered,
        catalog.len()
    );

    match &summary.recommended_area {
        Some(area) => println!("Recommended area: {area}"),
        None => println!("Recommended area: none (no areas scored)"),
    }

    match (summary.interest_level, summary.average) {
        (Some(level), Some(average)) => {
            println!("Overall interest: {} (average {:.2})", level.label(), average)
        }
        _ => println!("Overall interest: no answers"),
    }

    if summary.ranking.is_empty() {
        return;
    }

    println!("\nArea ranking");
    for (position, standing) in summary.ranking.iter().enumerate() {
        println!("{:>2}. {}: {}", position + 1, standing.area, standing.score);
    }
}

pub(crate) fn render_catalog(catalog: &QuestionCatalog) {
    println!(
        "Vocational questionnaire ({} questions, {} areas)",
        catalog.len(),
        catalog.areas().len()
    );

    for question in catalog.questions() {
        let prompt = question.prompt.as_deref().unwrap_or("(no prompt)");
        println!("- [{}] {} | {}", question.id, question.area, prompt);
    }
}
