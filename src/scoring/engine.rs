//! Rule evaluation over an indicator snapshot

use crate::models::market::IndicatorSnapshot;
use crate::models::scan::{ScoreReason, StrengthBand};
use crate::scoring::rules::{BASE_SCORE, MAX_SCORE, RULES};

/// Composite score plus the rules that produced it
#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    pub score: u32,
    pub reasons: Vec<ScoreReason>,
}

impl ScoreBreakdown {
    pub fn band(&self) -> StrengthBand {
        StrengthBand::from_score(self.score)
    }
}

pub struct ScoreEngine;

impl ScoreEngine {
    /// Evaluate all rules against one snapshot
    ///
    /// Pure function of the snapshot: base 60, each satisfied rule adds its
    /// weight, the total clamps at 100. Adding a satisfied rule can never
    /// lower the result.
    pub fn evaluate(snapshot: &IndicatorSnapshot) -> ScoreBreakdown {
        let mut score = BASE_SCORE;
        let mut reasons = Vec::new();

        for rule in &RULES {
            if (rule.check)(snapshot) {
                score += rule.weight;
                reasons.push(ScoreReason {
                    label: rule.label.to_string(),
                    weight: rule.weight,
                });
            }
        }

        ScoreBreakdown {
            score: score.min(MAX_SCORE),
            reasons,
        }
    }
}
