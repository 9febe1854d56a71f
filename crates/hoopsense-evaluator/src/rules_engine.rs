//! Rule evaluation: turning a snapshot into compliance verdicts.
//!
//! The [`RulesEngine`] is stateless. [`RulesEngine::evaluate()`] looks at one
//! [`Frame`] (a snapshot plus its predecessor, which only the possession-time rule
//! reads) and produces a [`RuleVerdicts`] record.
//!
//! # Rules
//!
//! Each rule reports compliance, not applicability: a rule whose precondition does
//! not hold in the snapshot is `true`.
//!
//! | Rule | Violated when |
//! |---|---|
//! | attack positions | team has the ball and one of its players is not past half court |
//! | defensive positions | team lacks the ball and one of its players is in the opponent's half |
//! | spacing | team has the ball and two of its players are closer than DMIN |
//! | ball possession time | same team held the ball in the previous frame and more than 3 s elapsed |
//! | defensive holes | team lacks the ball and two of its players are farther apart than STROU |
//! | defensive help | team lacks the ball and some attacker is guarded by exactly one defender within DSEUIL |
//! | zone respect | any player is outside its assigned zone |
//! | defensive positioning | team lacks the ball and some defender is not closer to its own basket than some attacker |
//!
//! "Lacks the ball" includes a loose ball. Rules that inspect attackers only consider
//! the team in possession, so they hold trivially while the ball is loose.
//!
//! Defensive help is checked for every attacker, so the verdict does not depend on
//! roster order.
//!
//! # Cost
//!
//! Pairwise rules are quadratic in roster size; with ten players this is a few dozen
//! distance computations per frame. Nothing is cached between calls.

use hoopsense_engine::{Frame, GameState, Player, TeamId};

use crate::{metrics::TacticalMetrics, verdict::RuleVerdicts};

#[derive(Debug, Clone, Default)]
pub struct RulesEngine {
    metrics: TacticalMetrics,
}

impl RulesEngine {
    /// Longest time (seconds) a team may keep the ball between two frames.
    pub const MAX_BALL_POSSESSION_TIME: f64 = 3.0;

    #[must_use]
    pub const fn new(metrics: TacticalMetrics) -> Self {
        Self { metrics }
    }

    #[must_use]
    pub fn metrics(&self) -> &TacticalMetrics {
        &self.metrics
    }

    #[must_use]
    pub fn evaluate(&self, frame: Frame<'_>) -> RuleVerdicts {
        let state = frame.state();
        let verdicts = RuleVerdicts {
            team1_attack_positions: self.check_attack_positions(state, TeamId::Team1),
            team2_attack_positions: self.check_attack_positions(state, TeamId::Team2),
            team1_defensive_positions: self.check_defensive_positions(state, TeamId::Team1),
            team2_defensive_positions: self.check_defensive_positions(state, TeamId::Team2),
            team1_spacing: self.check_team_spacing(state, TeamId::Team1),
            team2_spacing: self.check_team_spacing(state, TeamId::Team2),
            ball_possession_time: self.check_ball_possession_time(frame),
            team1_defensive_holes: self.check_defensive_holes(state, TeamId::Team1),
            team2_defensive_holes: self.check_defensive_holes(state, TeamId::Team2),
            team1_defensive_help: self.check_defensive_help(state, TeamId::Team1),
            team2_defensive_help: self.check_defensive_help(state, TeamId::Team2),
            zone_respect: self.check_zone_respect(state),
            team1_defensive_positioning: self.check_defensive_positioning(state, TeamId::Team1),
            team2_defensive_positioning: self.check_defensive_positioning(state, TeamId::Team2),
        };
        log::debug!(
            "frame {} (t={}s): {} violation(s)",
            frame.index(),
            state.timestamp(),
            verdicts.violations().count()
        );
        verdicts
    }

    #[must_use]
    pub fn check_attack_positions(&self, state: &GameState, team: TeamId) -> bool {
        if !state.possession().holds(team) {
            return true;
        }
        state
            .team_players(team)
            .all(|p| self.metrics.in_opponent_court(p, team))
    }

    #[must_use]
    pub fn check_defensive_positions(&self, state: &GameState, team: TeamId) -> bool {
        if state.possession().holds(team) {
            return true;
        }
        !state
            .team_players(team)
            .any(|p| self.metrics.in_opponent_court(p, team))
    }

    #[must_use]
    pub fn check_team_spacing(&self, state: &GameState, team: TeamId) -> bool {
        if !state.possession().holds(team) {
            return true;
        }
        !team_pairs(state, team)
            .into_iter()
            .any(|(a, b)| a.distance_to(b) < TacticalMetrics::MIN_SPACING)
    }

    #[must_use]
    pub fn check_ball_possession_time(&self, frame: Frame<'_>) -> bool {
        let Some(previous) = frame.previous() else {
            return true;
        };
        let state = frame.state();
        if state.possession().is_loose() || state.possession() != previous.possession() {
            return true;
        }
        state.timestamp() - previous.timestamp() <= Self::MAX_BALL_POSSESSION_TIME
    }

    #[must_use]
    pub fn check_defensive_holes(&self, state: &GameState, team: TeamId) -> bool {
        if state.possession().holds(team) {
            return true;
        }
        !team_pairs(state, team)
            .into_iter()
            .any(|(a, b)| self.metrics.is_defensive_hole(a, b))
    }

    #[must_use]
    pub fn check_defensive_help(&self, state: &GameState, team: TeamId) -> bool {
        if state.possession().holds(team) {
            return true;
        }
        !attackers(state, team).any(|attacker| self.is_single_guarded(state, team, attacker))
    }

    #[must_use]
    pub fn check_zone_respect(&self, state: &GameState) -> bool {
        state
            .players()
            .iter()
            .all(|p| self.metrics.in_assigned_zone(p))
    }

    #[must_use]
    pub fn check_defensive_positioning(&self, state: &GameState, team: TeamId) -> bool {
        if state.possession().holds(team) {
            return true;
        }
        let basket = state.baskets().own(team);
        attackers(state, team).all(|attacker| {
            state
                .team_players(team)
                .all(|defender| self.metrics.is_in_defensive_position(defender, attacker, basket))
        })
    }

    /// Whether `attacker` is guarded by exactly one player of `team`.
    #[must_use]
    pub(crate) fn is_single_guarded(
        &self,
        state: &GameState,
        team: TeamId,
        attacker: &Player,
    ) -> bool {
        self.guarding_defenders(state, team, attacker).count() == 1
    }

    fn guarding_defenders<'a>(
        &'a self,
        state: &'a GameState,
        team: TeamId,
        attacker: &'a Player,
    ) -> impl Iterator<Item = &'a Player> + 'a {
        state
            .team_players(team)
            .filter(move |defender| self.metrics.is_within_help_distance(defender, attacker))
    }
}

/// Unordered pairs `(a, b)` of `team` players, `a` before `b` in roster order.
pub(crate) fn team_pairs(state: &GameState, team: TeamId) -> Vec<(&Player, &Player)> {
    let players = state.team_players(team).collect::<Vec<_>>();
    let mut pairs = Vec::with_capacity(players.len() * players.len().saturating_sub(1) / 2);
    for (i, a) in players.iter().enumerate() {
        for b in &players[i + 1..] {
            pairs.push((*a, *b));
        }
    }
    pairs
}

/// Players of the team in possession, when that team is `team`'s opponent.
pub(crate) fn attackers(state: &GameState, team: TeamId) -> impl Iterator<Item = &Player> + '_ {
    let attacking = state
        .possession()
        .team()
        .filter(|holder| *holder == team.opponent());
    state
        .players()
        .iter()
        .filter(move |p| Some(p.team()) == attacking)
}
