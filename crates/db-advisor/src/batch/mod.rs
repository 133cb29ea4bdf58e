//! CSV scenario import and batch analysis.
//!
//! Each row names one requirement combination. Rows that fail validation are reported
//! alongside successful ones, so a single typo never hides the rest of the batch.

mod parser;

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::decision::{AnalysisError, Candidate, Confidence, DecisionEngine, RequirementsInput};

#[derive(Debug)]
pub enum ScenarioImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ScenarioImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioImportError::Io(err) => write!(f, "failed to read scenario file: {}", err),
            ScenarioImportError::Csv(err) => write!(f, "invalid scenario CSV data: {}", err),
        }
    }
}

impl std::error::Error for ScenarioImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScenarioImportError::Io(err) => Some(err),
            ScenarioImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ScenarioImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ScenarioImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Named requirement set read from one CSV row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub label: String,
    pub input: RequirementsInput,
}

pub struct ScenarioImporter;

impl ScenarioImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, ScenarioImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Scenario>, ScenarioImportError> {
        let scenarios: Vec<Scenario> = parser::parse_records(reader)?
            .into_iter()
            .enumerate()
            .map(|(index, record)| Scenario {
                label: record
                    .label
                    .unwrap_or_else(|| format!("row {}", index + 1)),
                input: record.input,
            })
            .collect();

        info!(scenarios = scenarios.len(), "imported requirement scenarios");
        Ok(scenarios)
    }
}

/// Result of analyzing one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioOutcome {
    pub label: String,
    #[serde(flatten)]
    pub status: OutcomeStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeStatus {
    Recommended {
        database: Candidate,
        confidence: Confidence,
        totals: BTreeMap<Candidate, u8>,
    },
    Rejected {
        error: String,
    },
}

impl ScenarioOutcome {
    pub fn is_recommended(&self) -> bool {
        matches!(self.status, OutcomeStatus::Recommended { .. })
    }

    /// One-line summary for terminal output.
    pub fn summary_line(&self) -> String {
        match &self.status {
            OutcomeStatus::Recommended {
                database,
                confidence,
                totals,
            } => {
                let scores = totals
                    .iter()
                    .map(|(candidate, score)| format!("{candidate} {score}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(
                    "{}: {} ({} confidence) [{}]",
                    self.label,
                    database,
                    confidence.label(),
                    scores
                )
            }
            OutcomeStatus::Rejected { error } => format!("{}: rejected, {}", self.label, error),
        }
    }
}

/// Analyzes every scenario in order. Invalid rows become `Rejected` outcomes; an
/// inconsistent knowledge base aborts the whole batch.
pub fn analyze_batch(
    engine: &DecisionEngine,
    scenarios: &[Scenario],
) -> Result<Vec<ScenarioOutcome>, AnalysisError> {
    let mut outcomes = Vec::with_capacity(scenarios.len());

    for scenario in scenarios {
        let status = match engine.analyze(&scenario.input) {
            Ok(result) => OutcomeStatus::Recommended {
                database: result.recommendation.database,
                confidence: result.recommendation.confidence,
                totals: result.scores.totals,
            },
            Err(err @ AnalysisError::InvalidInput(_)) => {
                warn!(scenario = %scenario.label, "scenario rejected");
                OutcomeStatus::Rejected {
                    error: err.to_string(),
                }
            }
            Err(err) => return Err(err),
        };

        outcomes.push(ScenarioOutcome {
            label: scenario.label.clone(),
            status,
        });
    }

    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parser_trims_cells_and_treats_blanks_as_missing() {
        let records = parser::parse_records(Cursor::new(
            "label,app_type,data_structure,scalability,transactions,schema_flexibility\n\
 checkout , Web ,Structured,  ,High,No\n",
        ))
        .expect("parse");

        let record = &records[0];
        assert_eq!(record.label.as_deref(), Some("checkout"));
        assert_eq!(record.input.app_type.as_deref(), Some("Web"));
        assert!(record.input.scalability.is_none());
    }

    #[test]
    fn label_column_is_optional() {
        let scenarios = ScenarioImporter::from_reader(Cursor::new(
            "app_type,data_structure,scalability,transactions,schema_flexibility\n\
Web,Structured,Medium,High,No\n\
RealTime,Unstructured,High,Low,Yes\n",
        ))
        .expect("import succeeds");

        let labels: Vec<_> = scenarios.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["row 1", "row 2"]);
    }

    #[test]
    fn ragged_rows_fail_the_import() {
        let err = ScenarioImporter::from_reader(Cursor::new(
            "app_type,data_structure,scalability,transactions,schema_flexibility\n\
Web,Structured\n",
        ))
        .expect_err("row has too few fields");

        assert!(matches!(err, ScenarioImportError::Csv(_)));
    }

    #[test]
    fn invalid_rows_are_reported_without_stopping_the_batch() {
        let scenarios = vec![
            Scenario {
                label: "mobile".to_string(),
                input: RequirementsInput::new("Mobile", "Structured", "Low", "Low", "No"),
            },
            Scenario {
                label: "feed".to_string(),
                input: RequirementsInput::new("RealTime", "Unstructured", "High", "Low", "Yes"),
            },
        ];

        let outcomes =
            analyze_batch(&DecisionEngine::standard(), &scenarios).expect("batch completes");

        assert_eq!(outcomes.len(), 2);
        assert!(!outcomes[0].is_recommended());
        assert!(outcomes[0].summary_line().starts_with("mobile: rejected, invalid input"));
        assert_eq!(
            outcomes[1].summary_line(),
            "feed: MongoDB (High confidence) [MySQL 8, PostgreSQL 10, MongoDB 19]"
        );
    }

    #[test]
    fn outcomes_serialize_with_a_status_tag() {
        let outcome = ScenarioOutcome {
            label: "row 1".to_string(),
            status: OutcomeStatus::Rejected {
                error: "invalid input".to_string(),
            },
        };

        let json = serde_json::to_value(&outcome).expect("serializes");

        assert_eq!(
            json,
            serde_json::json!({
                "label": "row 1",
                "status": "rejected",
                "error": "invalid input",
            })
        );
    }
}
