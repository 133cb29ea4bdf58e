use super::domain::{Candidate, CriterionValue};
use super::profiles::{DatabaseProfile, STANDARD_PROFILES};
use super::reasoning::{ReasoningTemplate, STANDARD_REASONING};
use super::rules::{AlternativeRule, TradeoffRule, STANDARD_ALTERNATIVES, STANDARD_TRADEOFFS};
use super::tables::{ScoreTable, STANDARD_SCORE_ROWS};
use super::validation::AnalysisError;

/// Immutable reference data the engine consults; shared process-wide.
#[derive(Debug)]
pub struct KnowledgeBase {
    pub scores: ScoreTable,
    pub profiles: &'static [DatabaseProfile],
    pub tradeoffs: &'static [TradeoffRule],
    pub alternatives: &'static [AlternativeRule],
    pub reasoning: &'static [ReasoningTemplate],
}

static STANDARD: KnowledgeBase = KnowledgeBase {
    scores: ScoreTable::new(&STANDARD_SCORE_ROWS),
    profiles: &STANDARD_PROFILES,
    tradeoffs: &STANDARD_TRADEOFFS,
    alternatives: &STANDARD_ALTERNATIVES,
    reasoning: &STANDARD_REASONING,
};

impl KnowledgeBase {
    pub fn standard() -> &'static KnowledgeBase {
        &STANDARD
    }

    pub fn profile_for(
        &self,
        candidate: Candidate,
    ) -> Result<&'static DatabaseProfile, AnalysisError> {
        self.profiles
            .iter()
            .find(|profile| profile.candidate == candidate)
            .ok_or_else(|| {
                AnalysisError::InternalInvariantViolation(format!(
                    "no database profile registered for {candidate}"
                ))
            })
    }

    pub fn reasoning_for(
        &self,
        candidate: Candidate,
        value: CriterionValue,
    ) -> Option<&'static ReasoningTemplate> {
        self.reasoning
            .iter()
            .find(|template| template.candidate == candidate && template.value == value)
    }
}
