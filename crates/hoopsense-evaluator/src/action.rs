use hoopsense_engine::{PlayerId, Position};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    #[display("move")]
    Move,
    #[display("pass")]
    Pass,
    #[display("shoot")]
    Shoot,
    #[display("defend")]
    Defend,
}

/// Category of rule violation an action responds to.
///
/// Each category has a fixed priority weight; the action inherits it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    #[display("spacing")]
    Spacing,
    #[display("defensive hole")]
    DefensiveHole,
    #[display("attack position")]
    AttackPosition,
    #[display("defensive position")]
    DefensivePosition,
    #[display("ball possession time")]
    BallPossessionTime,
    #[display("defensive help")]
    DefensiveHelp,
    #[display("zone respect")]
    ZoneRespect,
}

impl ViolationKind {
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            ViolationKind::Spacing => 1.0,
            ViolationKind::DefensiveHole => 0.9,
            ViolationKind::AttackPosition | ViolationKind::DefensivePosition => 0.8,
            ViolationKind::BallPossessionTime => 0.7,
            ViolationKind::DefensiveHelp => 0.6,
            ViolationKind::ZoneRespect => 0.5,
        }
    }
}

/// A corrective action proposed for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub player_id: PlayerId,
    pub kind: ActionKind,
    pub target_position: Option<Position>,
    pub target_player_id: Option<PlayerId>,
    /// Higher is more urgent.
    pub priority: f64,
    pub reason: ViolationKind,
}

impl Action {
    #[must_use]
    pub fn move_to(player_id: PlayerId, target: Position, reason: ViolationKind) -> Self {
        Self {
            player_id,
            kind: ActionKind::Move,
            target_position: Some(target),
            target_player_id: None,
            priority: reason.weight(),
            reason,
        }
    }

    #[must_use]
    pub fn shoot(player_id: PlayerId, reason: ViolationKind) -> Self {
        Self {
            player_id,
            kind: ActionKind::Shoot,
            target_position: None,
            target_player_id: None,
            priority: reason.weight(),
            reason,
        }
    }

    #[must_use]
    pub fn with_target_player(mut self, target_player_id: PlayerId) -> Self {
        self.target_player_id = Some(target_player_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use hoopsense_engine::Point;

    use super::*;

    #[test]
    fn test_priority_follows_violation_weight() {
        let target = Position::around(Point::new(3.0, 4.0), 0.5);
        let action = Action::move_to(7, target, ViolationKind::DefensiveHelp).with_target_player(12);
        assert_eq!(action.kind, ActionKind::Move);
        assert_eq!(action.priority, 0.6);
        assert_eq!(action.target_player_id, Some(12));

        let shot = Action::shoot(3, ViolationKind::BallPossessionTime);
        assert_eq!(shot.priority, 0.7);
        assert!(shot.target_position.is_none());
    }

    #[test]
    fn test_serialized_names() {
        let shot = Action::shoot(3, ViolationKind::BallPossessionTime);
        let json = serde_json::to_value(&shot).unwrap();
        assert_eq!(json["kind"], "shoot");
        assert_eq!(json["reason"], "ball_possession_time");
        assert_eq!(ViolationKind::DefensiveHole.to_string(), "defensive hole");
    }
}
