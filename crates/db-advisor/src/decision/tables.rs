use serde::Serialize;

use super::domain::{
    AppType, Candidate, Criterion, CriterionValue, DataStructure, Scalability, SchemaFlexibility,
    Transactions,
};
use super::validation::{AnalysisError, InvalidField};

/// Highest score a single criterion can award a candidate.
pub const MAX_CRITERION_SCORE: u8 = 4;
/// Highest possible total across all criteria.
pub const MAX_TOTAL_SCORE: u8 = MAX_CRITERION_SCORE * Criterion::ALL.len() as u8;

/// Scores awarded to each candidate when a requirement takes a given value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreRow {
    pub value: CriterionValue,
    pub scores: [(Candidate, u8); 3],
}

/// Read-only lookup over the static score rows.
#[derive(Debug, Clone, Copy)]
pub struct ScoreTable {
    rows: &'static [ScoreRow],
}

impl ScoreTable {
    pub const fn new(rows: &'static [ScoreRow]) -> Self {
        Self { rows }
    }

    /// Score for a typed value. A gap in the table is a defect, never a zero.
    pub fn score(&self, value: CriterionValue, candidate: Candidate) -> Result<u8, AnalysisError> {
        let row = self
            .rows
            .iter()
            .find(|row| row.value == value)
            .ok_or_else(|| {
                AnalysisError::InternalInvariantViolation(format!(
                    "score table has no row for {value}"
                ))
            })?;

        let score = row
            .scores
            .iter()
            .find(|(scored, _)| *scored == candidate)
            .map(|(_, score)| *score)
            .ok_or_else(|| {
                AnalysisError::InternalInvariantViolation(format!(
                    "score table row {value} has no entry for {candidate}"
                ))
            })?;

        if score > MAX_CRITERION_SCORE {
            return Err(AnalysisError::InternalInvariantViolation(format!(
                "score {score} for {candidate} at {value} exceeds {MAX_CRITERION_SCORE}"
            )));
        }

        Ok(score)
    }

    /// Score for a raw, caller-supplied value of `criterion`.
    pub fn score_for(
        &self,
        criterion: Criterion,
        raw_value: &str,
        candidate: Candidate,
    ) -> Result<u8, AnalysisError> {
        let value = criterion.parse_value(raw_value).ok_or_else(|| {
            AnalysisError::InvalidInput(vec![InvalidField::new(criterion, Some(raw_value))])
        })?;
        self.score(value, candidate)
    }
}

const fn row(value: CriterionValue, mysql: u8, postgresql: u8, mongodb: u8) -> ScoreRow {
    ScoreRow {
        value,
        scores: [
            (Candidate::MySql, mysql),
            (Candidate::PostgreSql, postgresql),
            (Candidate::MongoDb, mongodb),
        ],
    }
}

/// Standard weights; columns are MySQL, PostgreSQL, MongoDB.
pub static STANDARD_SCORE_ROWS: [ScoreRow; 13] = [
    row(CriterionValue::AppType(AppType::Web), 3, 3, 2),
    row(CriterionValue::AppType(AppType::Analytics), 2, 4, 1),
    row(CriterionValue::AppType(AppType::RealTime), 2, 2, 4),
    row(CriterionValue::DataStructure(DataStructure::Structured), 4, 4, 1),
    row(CriterionValue::DataStructure(DataStructure::SemiStructured), 2, 3, 4),
    row(CriterionValue::DataStructure(DataStructure::Unstructured), 1, 2, 4),
    row(CriterionValue::Scalability(Scalability::Low), 3, 3, 2),
    row(CriterionValue::Scalability(Scalability::Medium), 3, 3, 3),
    row(CriterionValue::Scalability(Scalability::High), 2, 2, 4),
    row(CriterionValue::Transactions(Transactions::Low), 2, 2, 3),
    row(CriterionValue::Transactions(Transactions::High), 4, 4, 2),
    row(CriterionValue::SchemaFlexibility(SchemaFlexibility::Yes), 1, 2, 4),
    row(CriterionValue::SchemaFlexibility(SchemaFlexibility::No), 4, 4, 2),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ScoreTable {
        ScoreTable::new(&STANDARD_SCORE_ROWS)
    }

    #[test]
    fn every_value_has_exactly_one_row_covering_all_candidates() {
        for value in CriterionValue::all() {
            let matching = STANDARD_SCORE_ROWS
                .iter()
                .filter(|row| row.value == value)
                .count();
            assert_eq!(matching, 1, "{value} should have one row");
            for candidate in Candidate::ALL {
                let score = table().score(value, candidate).expect("score present");
                assert!(score <= MAX_CRITERION_SCORE);
            }
        }
        assert_eq!(STANDARD_SCORE_ROWS.len(), CriterionValue::all().len());
    }

    #[test]
    fn score_for_parses_raw_values() {
        let score = table()
            .score_for(Criterion::DataStructure, "semi-structured", Candidate::PostgreSql)
            .expect("known value");
        assert_eq!(score, 3);
    }

    #[test]
    fn score_for_rejects_unknown_value_without_defaulting() {
        let err = table()
            .score_for(Criterion::Scalability, "Extreme", Candidate::MongoDb)
            .expect_err("unknown value");

        match err {
            AnalysisError::InvalidInput(fields) => {
                assert_eq!(fields.len(), 1);
                assert_eq!(fields[0].criterion, Criterion::Scalability);
                assert_eq!(fields[0].value.as_deref(), Some("Extreme"));
            }
            other => panic!("expected invalid input, got {other:?}"),
        }
    }

    #[test]
    fn incomplete_table_is_an_invariant_violation() {
        static PARTIAL: [ScoreRow; 1] = [row(CriterionValue::AppType(AppType::Web), 3, 3, 2)];
        let partial = ScoreTable::new(&PARTIAL);

        let err = partial
            .score(
                CriterionValue::Transactions(Transactions::High),
                Candidate::MySql,
            )
            .expect_err("missing row");

        assert!(matches!(err, AnalysisError::InternalInvariantViolation(_)));
    }

    #[test]
    fn out_of_range_score_is_rejected() {
        static INFLATED: [ScoreRow; 1] = [row(CriterionValue::AppType(AppType::Web), 9, 3, 2)];
        let inflated = ScoreTable::new(&INFLATED);

        let err = inflated
            .score(CriterionValue::AppType(AppType::Web), Candidate::MySql)
            .expect_err("score above maximum");

        assert!(err.to_string().contains("exceeds"));
    }
}
