use axum::response::Response;
use serde_json::Value;

use crate::decision::{AnalysisResult, Candidate, DecisionEngine, RequirementsInput};

pub(super) fn engine() -> DecisionEngine {
    DecisionEngine::standard()
}

pub(super) fn input(
    app_type: &str,
    data_structure: &str,
    scalability: &str,
    transactions: &str,
    schema_flexibility: &str,
) -> RequirementsInput {
    RequirementsInput::new(
        app_type,
        data_structure,
        scalability,
        transactions,
        schema_flexibility,
    )
}

pub(super) fn analyze(input: &RequirementsInput) -> AnalysisResult {
    engine().analyze(input).expect("analysis succeeds")
}

pub(super) fn totals(result: &AnalysisResult) -> [u8; 3] {
    Candidate::ALL.map(|candidate| {
        result
            .scores
            .total(candidate)
            .expect("every candidate scored")
    })
}

pub(super) fn ranked(result: &AnalysisResult) -> Vec<Candidate> {
    result
        .ranking
        .order
        .iter()
        .map(|entry| entry.candidate)
        .collect()
}

pub(super) fn alternative_ids(result: &AnalysisResult) -> Vec<&'static str> {
    result.alternatives.iter().map(|rule| rule.id).collect()
}

pub(super) fn tradeoff_ids(result: &AnalysisResult) -> Vec<&'static str> {
    result.tradeoffs.iter().map(|rule| rule.id).collect()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}
