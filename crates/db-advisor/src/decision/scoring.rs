use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::{Candidate, Criterion, CriterionValue, Requirements};
use super::tables::ScoreTable;
use super::validation::AnalysisError;

/// Discrete contribution of one requirement to one candidate's total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub candidate: Candidate,
    pub criterion: Criterion,
    pub value: CriterionValue,
    pub score: u8,
}

/// Per-candidate totals plus the components they were summed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreCard {
    pub totals: BTreeMap<Candidate, u8>,
    pub components: Vec<ScoreComponent>,
}

impl ScoreCard {
    /// `None` when `candidate` was never scored.
    pub fn total(&self, candidate: Candidate) -> Option<u8> {
        self.totals.get(&candidate).copied()
    }

    pub fn component(&self, candidate: Candidate, criterion: Criterion) -> Option<&ScoreComponent> {
        self.components
            .iter()
            .find(|component| component.candidate == candidate && component.criterion == criterion)
    }

    pub fn breakdown(&self, candidate: Candidate) -> impl Iterator<Item = &ScoreComponent> {
        self.components
            .iter()
            .filter(move |component| component.candidate == candidate)
    }
}

pub(crate) fn score_requirements(
    requirements: &Requirements,
    table: &ScoreTable,
) -> Result<ScoreCard, AnalysisError> {
    let mut totals = BTreeMap::new();
    let mut components = Vec::with_capacity(Candidate::ALL.len() * Criterion::ALL.len());

    for candidate in Candidate::ALL {
        let mut total: u8 = 0;
        for criterion in Criterion::ALL {
            let value = requirements.value(criterion);
            let score = table.score(value, candidate)?;
            components.push(ScoreComponent {
                candidate,
                criterion,
                value,
                score,
            });
            total += score;
        }
        totals.insert(candidate, total);
    }

    Ok(ScoreCard { totals, components })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::domain::{
        AppType, DataStructure, Scalability, SchemaFlexibility, Transactions,
    };
    use crate::decision::tables::STANDARD_SCORE_ROWS;

    #[test]
    fn components_sum_to_totals() {
        let requirements = Requirements {
            app_type: AppType::Analytics,
            data_structure: DataStructure::SemiStructured,
            scalability: Scalability::High,
            transactions: Transactions::High,
            schema_flexibility: SchemaFlexibility::Yes,
        };

        let card = score_requirements(&requirements, &ScoreTable::new(&STANDARD_SCORE_ROWS))
            .expect("scores");

        for candidate in Candidate::ALL {
            let summed: u8 = card.breakdown(candidate).map(|component| component.score).sum();
            assert_eq!(Some(summed), card.total(candidate));
            assert_eq!(card.breakdown(candidate).count(), 5);
        }
        assert_eq!(
            card.component(Candidate::MongoDb, Criterion::SchemaFlexibility)
                .map(|component| component.score),
            Some(4)
        );
    }

    #[test]
    fn unscored_candidate_has_no_total() {
        let mut totals = BTreeMap::new();
        totals.insert(Candidate::MySql, 12);
        let card = ScoreCard {
            totals,
            components: Vec::new(),
        };

        assert_eq!(card.total(Candidate::MySql), Some(12));
        assert_eq!(card.total(Candidate::MongoDb), None);
    }
}
