use serde_json::json;
use vocational_test::assessment::{
    answer_sheet_from_json, calculate_result, AnswerSheetSummary, InterestLevel,
    QuestionCatalog,
};

fn submitted_sheet() -> serde_json::Value {
    json!([
        { "questionId": 1, "value": 5 },
        { "questionId": 2, "value": 2 },
        { "questionId": 3, "value": 4 },
        { "questionId": 4, "value": "3" },
        { "questionId": 5, "value": 1 },
        { "questionId": 6, "value": 2 },
        { "questionId": 7, "value": 1 },
        { "questionId": 8, "value": 5 },
        { "questionId": 9, "value": 4 },
        { "questionId": 10, "value": 3 }
    ])
}

#[test]
fn standard_questionnaire_recommends_top_area() {
    let catalog = QuestionCatalog::standard();
    let sheet = answer_sheet_from_json(submitted_sheet());

    let result = calculate_result(Some(catalog.questions()), Some(sheet.as_slice()))
        .expect("sheet scores");

    assert_eq!(result.scores.len(), catalog.areas().len());
    assert_eq!(result.score_for("exact-sciences"), Some(9.0));
    assert_eq!(result.score_for("business"), Some(9.0));
    assert_eq!(result.score_for("technology"), Some(6.0));
    assert_eq!(
        result.recommended_area.as_deref(),
        Some("exact-sciences"),
        "first catalog area wins the tie with business"
    );

    let summary = AnswerSheetSummary::new(&result, &sheet);
    assert_eq!(summary.answered, 10);
    assert_eq!(summary.average, Some(3.0));
    assert_eq!(summary.interest_level, Some(InterestLevel::Moderate));
    assert_eq!(summary.ranking[0].area, "exact-sciences");
    assert_eq!(summary.ranking[1].area, "business");
}

#[test]
fn csv_catalog_drives_scoring() {
    let csv = "id,area,prompt\n\
1,science,Enjoys experiments\n\
2,arts,Enjoys painting\n\
3,science,Enjoys measuring\n";
    let catalog = QuestionCatalog::from_reader(csv.as_bytes()).expect("catalog parses");
    let sheet = answer_sheet_from_json(json!([
        { "questionId": 2, "value": 4 },
        { "questionId": 3, "value": 2 },
        { "questionId": 1, "value": 1 },
        { "area": "sports", "value": 3 }
    ]));

    let result = calculate_result(Some(catalog.questions()), Some(sheet.as_slice()))
        .expect("sheet scores");

    assert_eq!(
        serde_json::to_value(&result).expect("serializes"),
        json!({
            "scores": { "science": 3, "arts": 4, "sports": 3 },
            "recommendedArea": "arts"
        })
    );
}

#[test]
fn unanswered_sheet_keeps_catalog_areas_at_zero() {
    let catalog = QuestionCatalog::standard();
    let sheet = answer_sheet_from_json(json!("not a list"));

    let result = calculate_result(Some(catalog.questions()), Some(sheet.as_slice()))
        .expect("sheet scores");

    assert!(result.scores.values().all(|total| *total == 0.0));
    assert_eq!(result.recommended_area.as_deref(), Some("exact-sciences"));

    let summary = AnswerSheetSummary::new(&result, &sheet);
    assert!(summary.interest_level.is_none());
}
