//! Per-rule compliance over a whole session.
//!
//! [`VerdictTimeline`] evaluates every frame of a [`GameHistory`] once, in
//! chronological order, and keeps the verdicts next to their timestamps. It is the
//! input for plotting and for compliance summaries.

use hoopsense_engine::GameHistory;
use hoopsense_evaluator::{
    rules_engine::RulesEngine,
    verdict::{RuleId, RuleVerdicts},
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub index: usize,
    pub timestamp: f64,
    pub verdicts: RuleVerdicts,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct VerdictTimeline {
    entries: Vec<TimelineEntry>,
}

impl VerdictTimeline {
    #[must_use]
    pub fn collect(engine: &RulesEngine, history: &GameHistory) -> Self {
        let entries = history
            .frames()
            .map(|frame| TimelineEntry {
                index: frame.index(),
                timestamp: frame.state().timestamp(),
                verdicts: engine.evaluate(frame),
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn timestamps(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|entry| entry.timestamp)
    }

    /// `(timestamp, verdict)` pairs for one rule.
    pub fn series(&self, rule: RuleId) -> impl Iterator<Item = (f64, bool)> + '_ {
        self.entries
            .iter()
            .map(move |entry| (entry.timestamp, entry.verdicts.get(rule)))
    }

    #[must_use]
    pub fn violation_count(&self, rule: RuleId) -> usize {
        self.series(rule).filter(|(_, ok)| !ok).count()
    }

    /// Fraction of frames in which `rule` holds, `None` for an empty timeline.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn compliance_ratio(&self, rule: RuleId) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let passed = self.len() - self.violation_count(rule);
        Some(passed as f64 / self.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use hoopsense_engine::{
        CourtDimensions, GameState, GameStateParams, Player, Point, Position, Possession, TeamId,
    };

    use super::*;

    fn state(timestamp: f64, gap: f64) -> GameState {
        let player = |id, x: f64, y: f64| {
            Player::new(id, TeamId::Team1, Position::around(Point::new(x, y), 0.5), None)
        };
        GameState::new(GameStateParams::new(
            vec![player(1, 20.0, 5.0), player(2, 20.0, 5.0 + gap)],
            Position::around(Point::new(20.0, 5.0), 0.1),
            Possession::Team(TeamId::Team1),
            CourtDimensions::default().default_baskets(),
            timestamp,
        ))
        .unwrap()
    }

    #[test]
    fn test_collect_evaluates_every_frame_in_order() {
        let history = GameHistory::from_states([
            state(0.0, 5.0),
            state(1.0, 2.0),
            state(2.0, 6.0),
            state(6.0, 6.0),
        ])
        .unwrap();
        let timeline = VerdictTimeline::collect(&RulesEngine::default(), &history);

        assert_eq!(timeline.len(), 4);
        assert_eq!(timeline.timestamps().collect::<Vec<_>>(), [0.0, 1.0, 2.0, 6.0]);
        assert_eq!(
            timeline.series(RuleId::Team1Spacing).collect::<Vec<_>>(),
            [(0.0, true), (1.0, false), (2.0, true), (6.0, true)]
        );
        assert_eq!(timeline.violation_count(RuleId::BallPossessionTime), 1);
        assert_eq!(timeline.compliance_ratio(RuleId::Team1Spacing), Some(0.75));
        assert_eq!(timeline.compliance_ratio(RuleId::ZoneRespect), Some(1.0));
        assert_eq!(
            timeline.entries().iter().map(|e| e.index).collect::<Vec<_>>(),
            [0, 1, 2, 3]
        );
    }

    #[test]
    fn test_empty_timeline() {
        let timeline = VerdictTimeline::collect(&RulesEngine::default(), &GameHistory::new());
        assert!(timeline.is_empty());
        assert_eq!(timeline.compliance_ratio(RuleId::Team1Spacing), None);
    }

    #[test]
    fn test_serialized_layout() {
        let history = GameHistory::from_states([state(0.0, 5.0)]).unwrap();
        let timeline = VerdictTimeline::collect(&RulesEngine::default(), &history);
        let json = serde_json::to_value(&timeline).unwrap();
        let entry = &json["entries"][0];
        assert_eq!(entry["timestamp"], 0.0);
        assert_eq!(entry["verdicts"]["team1_spacing"], true);
    }
}
