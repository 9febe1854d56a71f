use chrono::{DateTime, Utc};
use hoopsense_analysis::timeline::VerdictTimeline;
use hoopsense_engine::{CourtDimensions, TeamId};
use hoopsense_evaluator::{
    action::Action,
    verdict::{RuleId, RuleVerdicts},
};
use serde::Serialize;

/// Compliance report written by `evaluate --output`
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    /// Timestamp when the report was created (ISO 8601 format)
    pub generated_at: DateTime<Utc>,
    /// Path of the frames file that was evaluated
    pub source: String,
    pub court: CourtDimensions,
    pub frame_count: usize,
    /// One summary per rule, in rule order
    pub rules: Vec<RuleSummary>,
    pub timeline: VerdictTimeline,
}

#[derive(Debug, Clone, Serialize)]
pub struct RuleSummary {
    pub rule: RuleId,
    pub label: &'static str,
    pub violations: usize,
    /// Fraction of frames in which the rule holds
    pub compliance_ratio: f64,
}

impl RuleSummary {
    pub fn from_timeline(timeline: &VerdictTimeline) -> Vec<Self> {
        RuleId::ALL
            .into_iter()
            .map(|rule| RuleSummary {
                rule,
                label: rule.label(),
                violations: timeline.violation_count(rule),
                compliance_ratio: timeline.compliance_ratio(rule).unwrap_or(1.0),
            })
            .collect()
    }
}

/// Suggested actions written by `decide --output`
#[derive(Debug, Clone, Serialize)]
pub struct DecisionReport {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub frame_index: usize,
    pub timestamp: f64,
    pub team: TeamId,
    pub verdicts: RuleVerdicts,
    pub actions: Vec<Action>,
}
