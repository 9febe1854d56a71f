//! Decision making: turning rule violations into corrective actions.
//!
//! The [`DecisionMaker`] looks at the verdicts of one frame from the point of view of a
//! single team and proposes player movements (or a shot) that would fix the violated
//! rules.
//!
//! # How It Works
//!
//! The branch depends on whether the team currently has the ball:
//!
//! **Offense** (team has the ball)
//!
//! - *Spacing*: for every pair of teammates closer than DMIN, the earlier player of the
//!   pair moves straight away from the other until they are exactly DMIN apart.
//! - *Attack position*: every player not past half court moves 2 m past the half-court
//!   line, keeping its lateral (`y`) coordinate.
//! - *Ball possession time*: the player closest to the basket the team attacks shoots.
//!
//! **Defense** (team lacks the ball, including a loose ball)
//!
//! - *Defensive hole*: for every pair of defenders farther apart than STROU, the earlier
//!   player of the pair moves to the pair's midpoint.
//! - *Defensive help*: for every attacker guarded by a single defender, the defender
//!   closest to that attacker moves to the midpoint between itself and the attacker.
//!
//! Actions are then sorted by descending priority ([`ViolationKind::weight()`]). The sort
//! is stable, so actions of equal priority keep their generation order (roster order).
//!
//! # Design: Heuristic Corrections
//!
//! Each violation is corrected in isolation with a simple geometric move. The help-defense
//! target in particular is a placeholder and not a tactically optimal position. Moves are
//! not checked against each other, so two suggestions may pull a player in different
//! directions.
//!
//! # Usage
//!
//! ```rust,no_run
//! use hoopsense_engine::{GameHistory, TeamId};
//! use hoopsense_evaluator::{decision_maker::DecisionMaker, rules_engine::RulesEngine};
//! # let history: GameHistory = todo!();
//!
//! let rules = RulesEngine::default();
//! let decision_maker = DecisionMaker::new(&rules);
//!
//! let frame = history.frame(0).unwrap();
//! for action in decision_maker.plan_for(frame, TeamId::Team1) {
//!     println!("player {}: {} ({:.2})", action.player_id, action.kind, action.priority);
//! }
//! ```

use hoopsense_engine::{Frame, GameState, Player, Point, Position, TeamId};

use crate::{
    action::{Action, ViolationKind},
    metrics::TacticalMetrics,
    rules_engine::{RulesEngine, attackers, team_pairs},
    verdict::RuleVerdicts,
};

/// Half side of the square box placed around a target point.
const TARGET_HALF_EXTENT: f64 = 0.5;

/// How far past the half-court line an attacker is sent.
const ATTACK_DEPTH: f64 = 2.0;

#[derive(Debug, Clone, Copy)]
pub struct DecisionMaker<'a> {
    rules: &'a RulesEngine,
}

impl<'a> DecisionMaker<'a> {
    #[must_use]
    pub fn new(rules: &'a RulesEngine) -> Self {
        Self { rules }
    }

    fn metrics(&self) -> &'a TacticalMetrics {
        self.rules.metrics()
    }

    /// Evaluates `frame` and proposes actions for `team`.
    #[must_use]
    pub fn plan_for(&self, frame: Frame<'_>, team: TeamId) -> Vec<Action> {
        let verdicts = self.rules.evaluate(frame);
        self.plan(frame, &verdicts, team)
    }

    /// Proposes actions for `team` from verdicts already computed for `frame`.
    ///
    /// The returned list is sorted by descending priority.
    #[must_use]
    pub fn plan(&self, frame: Frame<'_>, verdicts: &RuleVerdicts, team: TeamId) -> Vec<Action> {
        let state = frame.state();
        let mut actions = if state.possession().holds(team) {
            self.offensive_actions(state, verdicts, team)
        } else {
            self.defensive_actions(state, verdicts, team)
        };
        actions.sort_by(|a, b| b.priority.total_cmp(&a.priority));

        for action in &actions {
            log::trace!(
                "team {team}: player {} {} ({}, priority {})",
                action.player_id,
                action.kind,
                action.reason,
                action.priority
            );
        }
        actions
    }

    fn offensive_actions(
        &self,
        state: &GameState,
        verdicts: &RuleVerdicts,
        team: TeamId,
    ) -> Vec<Action> {
        let metrics = self.metrics();
        let mut actions = vec![];

        if !verdicts.spacing(team) {
            for (player, other) in team_pairs(state, team) {
                if player.distance_to(other) < TacticalMetrics::MIN_SPACING {
                    actions.push(Action::move_to(
                        player.id(),
                        spacing_target(player, other),
                        ViolationKind::Spacing,
                    ));
                }
            }
        }

        if !verdicts.attack_positions(team) {
            let target_x = match team {
                TeamId::Team1 => metrics.mid_court_x() + ATTACK_DEPTH,
                TeamId::Team2 => metrics.mid_court_x() - ATTACK_DEPTH,
            };
            for player in state.team_players(team) {
                if !metrics.in_opponent_court(player, team) {
                    let target = Point::new(target_x, player.position().center_y());
                    actions.push(Action::move_to(
                        player.id(),
                        Position::around(target, TARGET_HALF_EXTENT),
                        ViolationKind::AttackPosition,
                    ));
                }
            }
        }

        if !verdicts.ball_possession_time {
            let basket = state.baskets().target(team);
            if let Some(shooter) = closest(state.team_players(team), basket) {
                actions.push(Action::shoot(shooter.id(), ViolationKind::BallPossessionTime));
            }
        }

        actions
    }

    fn defensive_actions(
        &self,
        state: &GameState,
        verdicts: &RuleVerdicts,
        team: TeamId,
    ) -> Vec<Action> {
        let metrics = self.metrics();
        let mut actions = vec![];

        if !verdicts.defensive_holes(team) {
            for (player, other) in team_pairs(state, team) {
                if metrics.is_defensive_hole(player, other) {
                    let target = player.center().midpoint(other.center());
                    actions.push(Action::move_to(
                        player.id(),
                        Position::around(target, TARGET_HALF_EXTENT),
                        ViolationKind::DefensiveHole,
                    ));
                }
            }
        }

        if !verdicts.defensive_help(team) {
            for attacker in attackers(state, team) {
                if !self.rules.is_single_guarded(state, team, attacker) {
                    continue;
                }
                if let Some(helper) = closest(state.team_players(team), attacker.position()) {
                    let target = helper.center().midpoint(attacker.center());
                    actions.push(
                        Action::move_to(
                            helper.id(),
                            Position::around(target, TARGET_HALF_EXTENT),
                            ViolationKind::DefensiveHelp,
                        )
                        .with_target_player(attacker.id()),
                    );
                }
            }
        }

        actions
    }
}

/// Box for `player` moved directly away from `other` so that they end up exactly
/// DMIN apart. Players sharing a center are separated along `+y`.
fn spacing_target(player: &Player, other: &Player) -> Position {
    let from = other.center();
    let current = player.center();
    let distance = from.distance_to(current);
    let (ux, uy) = if distance > 0.0 {
        ((current.x - from.x) / distance, (current.y - from.y) / distance)
    } else {
        (0.0, 1.0)
    };
    let target = Point::new(
        from.x + ux * TacticalMetrics::MIN_SPACING,
        from.y + uy * TacticalMetrics::MIN_SPACING,
    );
    Position::around(target, TARGET_HALF_EXTENT)
}

/// Player nearest to `target`; ties go to the earliest player in roster order.
fn closest<'p>(players: impl Iterator<Item = &'p Player>, target: &Position) -> Option<&'p Player> {
    players.min_by(|a, b| {
        a.position()
            .distance_to(target)
            .total_cmp(&b.position().distance_to(target))
    })
}
