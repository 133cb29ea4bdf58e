use db_advisor::batch::{analyze_batch, OutcomeStatus, ScenarioImportError, ScenarioImporter};
use db_advisor::decision::{Candidate, Confidence, DecisionEngine};

#[test]
fn sample_scenarios_import_and_analyze() {
    let data = include_bytes!("../sample_scenarios.csv");

    let scenarios = ScenarioImporter::from_reader(&data[..]).expect("sample file imports");
    assert_eq!(scenarios.len(), 7);
    assert_eq!(scenarios[0].label, "storefront");
    assert_eq!(scenarios[6].label, "row 7");

    let outcomes =
        analyze_batch(&DecisionEngine::standard(), &scenarios).expect("batch completes");
    assert_eq!(outcomes.len(), scenarios.len());

    let rejected: Vec<_> = outcomes
        .iter()
        .filter(|outcome| !outcome.is_recommended())
        .map(|outcome| outcome.label.as_str())
        .collect();
    assert_eq!(rejected, vec!["mobile backend"]);

    match &outcomes[2].status {
        OutcomeStatus::Recommended {
            database,
            confidence,
            totals,
        } => {
            assert_eq!(*database, Candidate::MongoDb);
            assert_eq!(*confidence, Confidence::High);
            assert_eq!(totals.get(&Candidate::MongoDb), Some(&19));
        }
        other => panic!("expected a recommendation, got {other:?}"),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let err = ScenarioImporter::from_path("does/not/exist.csv").expect_err("no such file");

    assert!(matches!(err, ScenarioImportError::Io(_)));
    assert!(err.to_string().starts_with("failed to read scenario file"));
}
