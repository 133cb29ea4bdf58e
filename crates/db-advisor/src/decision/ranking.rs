use serde::Serialize;
use tracing::error;

use super::domain::Candidate;
use super::scoring::ScoreCard;
use super::validation::AnalysisError;

/// Qualitative certainty derived from the gap between first and second place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Gap above 3 is High, 2 or 3 is Medium, 1 or less is Low.
    pub const fn classify(gap: u8) -> Self {
        match gap {
            0 | 1 => Confidence::Low,
            2 | 3 => Confidence::Medium,
            _ => Confidence::High,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Confidence::High => "High",
            Confidence::Medium => "Medium",
            Confidence::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedCandidate {
    pub rank: usize,
    pub candidate: Candidate,
    pub score: u8,
}

/// Candidates ordered best-first with the confidence of the winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranking {
    pub order: Vec<RankedCandidate>,
    pub margin: u8,
    pub confidence: Confidence,
}

impl Ranking {
    pub fn top(&self) -> &RankedCandidate {
        &self.order[0]
    }

    pub fn runner_up(&self) -> &RankedCandidate {
        &self.order[1]
    }

    pub fn is_tie(&self) -> bool {
        self.margin == 0
    }
}

/// Orders by total descending; equal totals fall back to [`Candidate::TIE_BREAK_PRIORITY`].
pub fn rank(scores: &ScoreCard) -> Result<Ranking, AnalysisError> {
    if scores.totals.len() < 2 {
        error!(
            candidates = scores.totals.len(),
            "ranking requires at least two scored candidates"
        );
        return Err(AnalysisError::InternalInvariantViolation(format!(
            "ranking requires at least two candidates, got {}",
            scores.totals.len()
        )));
    }

    let mut ordered: Vec<(Candidate, u8)> = scores
        .totals
        .iter()
        .map(|(candidate, score)| (*candidate, *score))
        .collect();
    ordered.sort_by(|(left, left_score), (right, right_score)| {
        right_score
            .cmp(left_score)
            .then_with(|| left.tie_break_rank().cmp(&right.tie_break_rank()))
    });

    let order: Vec<RankedCandidate> = ordered
        .into_iter()
        .enumerate()
        .map(|(index, (candidate, score))| RankedCandidate {
            rank: index + 1,
            candidate,
            score,
        })
        .collect();

    let margin = order[0].score - order[1].score;

    Ok(Ranking {
        confidence: Confidence::classify(margin),
        margin,
        order,
    })
}
