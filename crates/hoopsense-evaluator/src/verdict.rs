//! Rule identifiers and the per-snapshot verdict record.
//!
//! Every evaluation produces the same fourteen verdicts. [`RuleVerdicts`] holds one
//! named field per rule; [`RuleId`] enumerates them in a fixed order with the stable
//! string keys used in reports and serialized output.

use std::fmt;

use hoopsense_engine::TeamId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    Team1AttackPositions,
    Team2AttackPositions,
    Team1DefensivePositions,
    Team2DefensivePositions,
    Team1Spacing,
    Team2Spacing,
    BallPossessionTime,
    Team1DefensiveHoles,
    Team2DefensiveHoles,
    Team1DefensiveHelp,
    Team2DefensiveHelp,
    ZoneRespect,
    Team1DefensivePositioning,
    Team2DefensivePositioning,
}

impl RuleId {
    pub const ALL: [RuleId; 14] = [
        RuleId::Team1AttackPositions,
        RuleId::Team2AttackPositions,
        RuleId::Team1DefensivePositions,
        RuleId::Team2DefensivePositions,
        RuleId::Team1Spacing,
        RuleId::Team2Spacing,
        RuleId::BallPossessionTime,
        RuleId::Team1DefensiveHoles,
        RuleId::Team2DefensiveHoles,
        RuleId::Team1DefensiveHelp,
        RuleId::Team2DefensiveHelp,
        RuleId::ZoneRespect,
        RuleId::Team1DefensivePositioning,
        RuleId::Team2DefensivePositioning,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            RuleId::Team1AttackPositions => "team1_attack_positions",
            RuleId::Team2AttackPositions => "team2_attack_positions",
            RuleId::Team1DefensivePositions => "team1_defensive_positions",
            RuleId::Team2DefensivePositions => "team2_defensive_positions",
            RuleId::Team1Spacing => "team1_spacing",
            RuleId::Team2Spacing => "team2_spacing",
            RuleId::BallPossessionTime => "ball_possession_time",
            RuleId::Team1DefensiveHoles => "team1_defensive_holes",
            RuleId::Team2DefensiveHoles => "team2_defensive_holes",
            RuleId::Team1DefensiveHelp => "team1_defensive_help",
            RuleId::Team2DefensiveHelp => "team2_defensive_help",
            RuleId::ZoneRespect => "zone_respect",
            RuleId::Team1DefensivePositioning => "team1_defensive_positioning",
            RuleId::Team2DefensivePositioning => "team2_defensive_positioning",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            RuleId::Team1AttackPositions => "Attack positions, team 1",
            RuleId::Team2AttackPositions => "Attack positions, team 2",
            RuleId::Team1DefensivePositions => "Defensive positions, team 1",
            RuleId::Team2DefensivePositions => "Defensive positions, team 2",
            RuleId::Team1Spacing => "Spacing, team 1",
            RuleId::Team2Spacing => "Spacing, team 2",
            RuleId::BallPossessionTime => "Ball possession time",
            RuleId::Team1DefensiveHoles => "Defensive holes, team 1",
            RuleId::Team2DefensiveHoles => "Defensive holes, team 2",
            RuleId::Team1DefensiveHelp => "Defensive assistance, team 1",
            RuleId::Team2DefensiveHelp => "Defensive assistance, team 2",
            RuleId::ZoneRespect => "Zone affiliation",
            RuleId::Team1DefensivePositioning => "Basket protection, team 1",
            RuleId::Team2DefensivePositioning => "Basket protection, team 2",
        }
    }

    /// The team a rule is about, or `None` for the two global rules.
    #[must_use]
    pub const fn team(self) -> Option<TeamId> {
        match self {
            RuleId::Team1AttackPositions
            | RuleId::Team1DefensivePositions
            | RuleId::Team1Spacing
            | RuleId::Team1DefensiveHoles
            | RuleId::Team1DefensiveHelp
            | RuleId::Team1DefensivePositioning => Some(TeamId::Team1),
            RuleId::Team2AttackPositions
            | RuleId::Team2DefensivePositions
            | RuleId::Team2Spacing
            | RuleId::Team2DefensiveHoles
            | RuleId::Team2DefensiveHelp
            | RuleId::Team2DefensivePositioning => Some(TeamId::Team2),
            RuleId::BallPossessionTime | RuleId::ZoneRespect => None,
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Compliance verdicts for one snapshot. `true` means the rule holds.
///
/// Rules that do not apply to the current situation (for example a possession-only
/// rule for the team without the ball) are reported as `true`.
#[expect(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleVerdicts {
    pub team1_attack_positions: bool,
    pub team2_attack_positions: bool,
    pub team1_defensive_positions: bool,
    pub team2_defensive_positions: bool,
    pub team1_spacing: bool,
    pub team2_spacing: bool,
    pub ball_possession_time: bool,
    pub team1_defensive_holes: bool,
    pub team2_defensive_holes: bool,
    pub team1_defensive_help: bool,
    pub team2_defensive_help: bool,
    pub zone_respect: bool,
    pub team1_defensive_positioning: bool,
    pub team2_defensive_positioning: bool,
}

impl RuleVerdicts {
    /// Verdicts with every rule satisfied.
    pub const ALL_PASSED: Self = Self {
        team1_attack_positions: true,
        team2_attack_positions: true,
        team1_defensive_positions: true,
        team2_defensive_positions: true,
        team1_spacing: true,
        team2_spacing: true,
        ball_possession_time: true,
        team1_defensive_holes: true,
        team2_defensive_holes: true,
        team1_defensive_help: true,
        team2_defensive_help: true,
        zone_respect: true,
        team1_defensive_positioning: true,
        team2_defensive_positioning: true,
    };

    #[must_use]
    pub const fn get(&self, rule: RuleId) -> bool {
        match rule {
            RuleId::Team1AttackPositions => self.team1_attack_positions,
            RuleId::Team2AttackPositions => self.team2_attack_positions,
            RuleId::Team1DefensivePositions => self.team1_defensive_positions,
            RuleId::Team2DefensivePositions => self.team2_defensive_positions,
            RuleId::Team1Spacing => self.team1_spacing,
            RuleId::Team2Spacing => self.team2_spacing,
            RuleId::BallPossessionTime => self.ball_possession_time,
            RuleId::Team1DefensiveHoles => self.team1_defensive_holes,
            RuleId::Team2DefensiveHoles => self.team2_defensive_holes,
            RuleId::Team1DefensiveHelp => self.team1_defensive_help,
            RuleId::Team2DefensiveHelp => self.team2_defensive_help,
            RuleId::ZoneRespect => self.zone_respect,
            RuleId::Team1DefensivePositioning => self.team1_defensive_positioning,
            RuleId::Team2DefensivePositioning => self.team2_defensive_positioning,
        }
    }

    /// All verdicts in [`RuleId::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (RuleId, bool)> + '_ {
        RuleId::ALL.into_iter().map(|rule| (rule, self.get(rule)))
    }

    /// Rules that do not hold.
    pub fn violations(&self) -> impl Iterator<Item = RuleId> + '_ {
        self.iter().filter(|(_, ok)| !ok).map(|(rule, _)| rule)
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.iter().all(|(_, ok)| ok)
    }

    #[must_use]
    pub fn attack_positions(&self, team: TeamId) -> bool {
        by_team(team, self.team1_attack_positions, self.team2_attack_positions)
    }

    #[must_use]
    pub fn defensive_positions(&self, team: TeamId) -> bool {
        by_team(
            team,
            self.team1_defensive_positions,
            self.team2_defensive_positions,
        )
    }

    #[must_use]
    pub fn spacing(&self, team: TeamId) -> bool {
        by_team(team, self.team1_spacing, self.team2_spacing)
    }

    #[must_use]
    pub fn defensive_holes(&self, team: TeamId) -> bool {
        by_team(team, self.team1_defensive_holes, self.team2_defensive_holes)
    }

    #[must_use]
    pub fn defensive_help(&self, team: TeamId) -> bool {
        by_team(team, self.team1_defensive_help, self.team2_defensive_help)
    }

    #[must_use]
    pub fn defensive_positioning(&self, team: TeamId) -> bool {
        by_team(
            team,
            self.team1_defensive_positioning,
            self.team2_defensive_positioning,
        )
    }
}

fn by_team(team: TeamId, team1: bool, team2: bool) -> bool {
    match team {
        TeamId::Team1 => team1,
        TeamId::Team2 => team2,
    }
}
