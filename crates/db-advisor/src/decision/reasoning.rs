use serde::Serialize;

use super::domain::{
    AppType, Candidate, Criterion, CriterionValue, DataStructure, Requirements, Scalability,
    SchemaFlexibility, Transactions,
};
use super::knowledge::KnowledgeBase;
use super::ranking::{Confidence, Ranking};
use super::scoring::ScoreCard;
use super::validation::AnalysisError;

/// Number of strength sentences cited for the winner.
const MAX_STRENGTHS: usize = 2;

/// Sentence cited when `candidate` wins and the requirements contain `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReasoningTemplate {
    pub candidate: Candidate,
    pub value: CriterionValue,
    pub sentence: &'static str,
}

/// Final recommendation with the narrative that justifies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub database: Candidate,
    pub confidence: Confidence,
    pub reasoning: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caveat: Option<String>,
}

/// How much a criterion separated the winner from the runner-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CriterionImpact {
    pub criterion: Criterion,
    pub advantage: i16,
}

pub(crate) fn explain(
    knowledge: &KnowledgeBase,
    ranking: &Ranking,
    scores: &ScoreCard,
    requirements: &Requirements,
) -> Result<Recommendation, AnalysisError> {
    let top = *ranking.top();
    let runner_up = *ranking.runner_up();

    let mut reasoning = vec![headline(top.candidate).to_string()];

    let strengths: Vec<&'static str> = decisive_criteria(scores, top.candidate, runner_up.candidate)
        .into_iter()
        .filter_map(|impact| {
            knowledge.reasoning_for(top.candidate, requirements.value(impact.criterion))
        })
        .take(MAX_STRENGTHS)
        .map(|template| template.sentence)
        .collect();

    if strengths.is_empty() {
        let profile = knowledge.profile_for(top.candidate)?;
        let fallback = profile.pros.first().ok_or_else(|| {
            AnalysisError::InternalInvariantViolation(format!(
                "profile for {} lists no pros",
                top.candidate
            ))
        })?;
        reasoning.push(format!("{fallback}."));
    } else {
        reasoning.extend(strengths.into_iter().map(str::to_string));
    }

    reasoning.push(confidence_rationale(ranking));

    let caveat = match ranking.confidence {
        Confidence::High => None,
        Confidence::Medium | Confidence::Low => Some(format!(
            "Note: {} scored closely ({} vs {}). Consider evaluating both options based on team expertise.",
            runner_up.candidate, runner_up.score, top.score
        )),
    };
    if let Some(caveat) = &caveat {
        reasoning.push(caveat.clone());
    }

    Ok(Recommendation {
        database: top.candidate,
        confidence: ranking.confidence,
        reasoning,
        caveat,
    })
}

/// Criteria ordered by how far `winner` out-scored `runner_up` on them; ties keep
/// criterion declaration order.
pub(crate) fn decisive_criteria(
    scores: &ScoreCard,
    winner: Candidate,
    runner_up: Candidate,
) -> Vec<CriterionImpact> {
    let score_of = |candidate: Candidate, criterion: Criterion| -> i16 {
        scores
            .component(candidate, criterion)
            .map(|component| i16::from(component.score))
            .unwrap_or_default()
    };

    let mut impacts: Vec<CriterionImpact> = Criterion::ALL
        .iter()
        .map(|&criterion| CriterionImpact {
            criterion,
            advantage: score_of(winner, criterion) - score_of(runner_up, criterion),
        })
        .collect();
    impacts.sort_by(|left, right| right.advantage.cmp(&left.advantage));
    impacts
}

pub fn headline(candidate: Candidate) -> &'static str {
    match candidate {
        Candidate::MySql => {
            "MySQL is recommended as a proven, straightforward relational database for your requirements."
        }
        Candidate::PostgreSql => {
            "PostgreSQL offers the best balance of advanced features for your requirements."
        }
        Candidate::MongoDb => {
            "MongoDB is the best choice for your scalability and flexibility needs."
        }
    }
}

fn confidence_rationale(ranking: &Ranking) -> String {
    let top = ranking.top();
    let runner_up = ranking.runner_up();

    match ranking.confidence {
        Confidence::Low if ranking.is_tie() => format!(
            "{} and {} tied at {} points; {} ranks first by the fixed tie-break order, so confidence is low.",
            top.candidate, runner_up.candidate, top.score, top.candidate
        ),
        Confidence::Low => format!(
            "{} leads {} by only {} point ({} vs {}), so confidence is low.",
            top.candidate, runner_up.candidate, ranking.margin, top.score, runner_up.score
        ),
        Confidence::Medium => format!(
            "{} leads {} by {} points ({} vs {}), a moderate margin that gives medium confidence.",
            top.candidate, runner_up.candidate, ranking.margin, top.score, runner_up.score
        ),
        Confidence::High => format!(
            "{} leads {} by {} points ({} vs {}), a decisive margin that gives high confidence.",
            top.candidate, runner_up.candidate, ranking.margin, top.score, runner_up.score
        ),
    }
}

const fn template(
    candidate: Candidate,
    value: CriterionValue,
    sentence: &'static str,
) -> ReasoningTemplate {
    ReasoningTemplate {
        candidate,
        value,
        sentence,
    }
}

pub static STANDARD_REASONING: [ReasoningTemplate; 19] = [
    template(
        Candidate::MySql,
        CriterionValue::AppType(AppType::Web),
        "Proven track record for web applications with excellent community support.",
    ),
    template(
        Candidate::MySql,
        CriterionValue::DataStructure(DataStructure::Structured),
        "Mature relational storage handles structured data with full ACID compliance.",
    ),
    template(
        Candidate::MySql,
        CriterionValue::Scalability(Scalability::Low),
        "Vertical scaling is sufficient for your scalability needs.",
    ),
    template(
        Candidate::MySql,
        CriterionValue::Scalability(Scalability::Medium),
        "Vertical scaling plus read replicas is sufficient for your scalability needs.",
    ),
    template(
        Candidate::MySql,
        CriterionValue::Transactions(Transactions::High),
        "Strong ACID compliance meets your transaction requirements.",
    ),
    template(
        Candidate::MySql,
        CriterionValue::SchemaFlexibility(SchemaFlexibility::No),
        "A stable schema plays to MySQL's strengths in simplicity and predictable performance.",
    ),
    template(
        Candidate::PostgreSql,
        CriterionValue::AppType(AppType::Analytics),
        "Superior query optimization and window functions support complex analytics workloads.",
    ),
    template(
        Candidate::PostgreSql,
        CriterionValue::AppType(AppType::Web),
        "Rich SQL features and balanced read/write performance suit web application backends.",
    ),
    template(
        Candidate::PostgreSql,
        CriterionValue::DataStructure(DataStructure::Structured),
        "Constraints, foreign keys and strict typing keep structured data correct at the database layer.",
    ),
    template(
        Candidate::PostgreSql,
        CriterionValue::DataStructure(DataStructure::SemiStructured),
        "Excellent JSONB support handles semi-structured data efficiently while maintaining relational integrity.",
    ),
    template(
        Candidate::PostgreSql,
        CriterionValue::Transactions(Transactions::High),
        "Industry-leading ACID compliance and advanced transaction isolation ensures data integrity.",
    ),
    template(
        Candidate::PostgreSql,
        CriterionValue::SchemaFlexibility(SchemaFlexibility::Yes),
        "JSONB and extension support provide flexibility while maintaining SQL capabilities.",
    ),
    template(
        Candidate::PostgreSql,
        CriterionValue::SchemaFlexibility(SchemaFlexibility::No),
        "A well-defined schema lets PostgreSQL enforce integrity rules without application code.",
    ),
    template(
        Candidate::MongoDb,
        CriterionValue::AppType(AppType::RealTime),
        "Optimized for high-throughput real-time applications with low-latency operations.",
    ),
    template(
        Candidate::MongoDb,
        CriterionValue::DataStructure(DataStructure::SemiStructured),
        "Native JSON documents store semi-structured data without an object-relational mapping layer.",
    ),
    template(
        Candidate::MongoDb,
        CriterionValue::DataStructure(DataStructure::Unstructured),
        "Document model naturally fits unstructured and hierarchical data.",
    ),
    template(
        Candidate::MongoDb,
        CriterionValue::Scalability(Scalability::High),
        "Built-in sharding provides excellent horizontal scalability without complex configuration.",
    ),
    template(
        Candidate::MongoDb,
        CriterionValue::Transactions(Transactions::Low),
        "Modest transaction needs let MongoDB favour write throughput over cross-document coordination.",
    ),
    template(
        Candidate::MongoDb,
        CriterionValue::SchemaFlexibility(SchemaFlexibility::Yes),
        "Schema-less design allows rapid iteration and accommodates evolving data models.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_are_unique_per_candidate_and_value() {
        for (index, entry) in STANDARD_REASONING.iter().enumerate() {
            let duplicates = STANDARD_REASONING[index + 1..]
                .iter()
                .filter(|other| other.candidate == entry.candidate && other.value == entry.value)
                .count();
            assert_eq!(duplicates, 0, "{} {} listed twice", entry.candidate, entry.value);
        }
    }

    #[test]
    fn every_candidate_has_templates() {
        for candidate in Candidate::ALL {
            assert!(STANDARD_REASONING
                .iter()
                .any(|entry| entry.candidate == candidate));
        }
    }
}
