//! Database recommendation engine.
//!
//! Requirements are validated, scored against static weight tables, ranked with a fixed
//! tie-break order, explained with templated reasoning, and checked against trade-off and
//! alternative rules. Every table lives in `'static` data, so an engine is a cheap handle
//! that can be shared across threads without locking.

pub mod domain;
mod knowledge;
mod profiles;
mod ranking;
mod reasoning;
pub mod report;
pub mod router;
mod rules;
mod scoring;
mod tables;
mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    AppType, Candidate, Criterion, CriterionOption, CriterionValue, DataStructure, Requirements,
    Scalability, SchemaFlexibility, Transactions,
};
pub use knowledge::KnowledgeBase;
pub use profiles::DatabaseProfile;
pub use ranking::{rank, Confidence, RankedCandidate, Ranking};
pub use reasoning::{headline, ReasoningTemplate, Recommendation};
pub use report::render_text_report;
pub use router::decision_router;
pub use rules::{
    detect_alternatives, detect_tradeoffs, AlternativeRule, TradeoffRule, TradeoffSide,
};
pub use scoring::{ScoreCard, ScoreComponent};
pub use tables::{ScoreRow, ScoreTable, MAX_CRITERION_SCORE, MAX_TOTAL_SCORE};
pub use validation::{AnalysisError, InvalidField, RequirementsInput};

use serde::Serialize;
use tracing::{debug, error, warn};

/// Stateless evaluator over a knowledge base.
#[derive(Debug, Clone, Copy)]
pub struct DecisionEngine {
    knowledge: &'static KnowledgeBase,
}

impl DecisionEngine {
    pub fn new(knowledge: &'static KnowledgeBase) -> Self {
        Self { knowledge }
    }

    pub fn standard() -> Self {
        Self::new(KnowledgeBase::standard())
    }

    pub fn knowledge(&self) -> &'static KnowledgeBase {
        self.knowledge
    }

    /// Validates `input` and sums every candidate's per-criterion scores.
    pub fn calculate_scores(&self, input: &RequirementsInput) -> Result<ScoreCard, AnalysisError> {
        let requirements = validate_logged(input)?;
        scoring::score_requirements(&requirements, &self.knowledge.scores)
    }

    /// Full pipeline; fails before scoring when any field is invalid.
    pub fn analyze(&self, input: &RequirementsInput) -> Result<AnalysisResult, AnalysisError> {
        let requirements = validate_logged(input)?;
        self.analyze_requirements(&requirements)
    }

    pub fn analyze_requirements(
        &self,
        requirements: &Requirements,
    ) -> Result<AnalysisResult, AnalysisError> {
        let result = self.run(requirements);
        match &result {
            Ok(analysis) => debug!(
                recommended = %analysis.recommendation.database,
                confidence = analysis.recommendation.confidence.label(),
                margin = analysis.ranking.margin,
                tradeoffs = analysis.tradeoffs.len(),
                alternatives = analysis.alternatives.len(),
                "database analysis complete"
            ),
            Err(err) => error!(error = %err, "database analysis aborted"),
        }
        result
    }

    fn run(&self, requirements: &Requirements) -> Result<AnalysisResult, AnalysisError> {
        let scores = scoring::score_requirements(requirements, &self.knowledge.scores)?;
        let ranking = rank(&scores)?;
        let recommendation = reasoning::explain(self.knowledge, &ranking, &scores, requirements)?;
        let tradeoffs = detect_tradeoffs(self.knowledge.tradeoffs, requirements);
        let alternatives = detect_alternatives(self.knowledge.alternatives, requirements);

        let profiles = ranking
            .order
            .iter()
            .map(|entry| {
                Ok(ScoredProfile {
                    rank: entry.rank,
                    score: entry.score,
                    profile: self.knowledge.profile_for(entry.candidate)?,
                })
            })
            .collect::<Result<Vec<_>, AnalysisError>>()?;

        Ok(AnalysisResult {
            requirements: *requirements,
            scores,
            ranking,
            recommendation,
            profiles,
            tradeoffs,
            alternatives,
        })
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::standard()
    }
}

fn validate_logged(input: &RequirementsInput) -> Result<Requirements, AnalysisError> {
    input.validate().map_err(|err| {
        let fields: Vec<&str> = err.invalid_fields().iter().map(|field| field.field).collect();
        warn!(?fields, "rejected database requirements");
        err
    })
}

/// A profile annotated with its score and position in the ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredProfile {
    pub rank: usize,
    pub score: u8,
    pub profile: &'static DatabaseProfile,
}

/// Everything a presentation layer needs to render one analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub requirements: Requirements,
    pub scores: ScoreCard,
    pub ranking: Ranking,
    pub recommendation: Recommendation,
    pub profiles: Vec<ScoredProfile>,
    pub tradeoffs: Vec<&'static TradeoffRule>,
    pub alternatives: Vec<&'static AlternativeRule>,
}
