//! Geometric and tactical predicates over player bounding boxes.
//!
//! [`TacticalMetrics`] is configured once with the court size and answers
//! point questions about a snapshot: how far apart two players are, which half
//! a player stands in, whether a gap between defenders is a hole, and so on.
//! Every measurement uses bounding-box centers.
//!
//! # Thresholds
//!
//! | Constant | Abbrev. | Value | Meaning |
//! |---|---|---|---|
//! | [`DEFENSIVE_HOLE_DISTANCE`](TacticalMetrics::DEFENSIVE_HOLE_DISTANCE) | STROU | 4.0 m | gap between two defenders above which it is a hole |
//! | [`MIN_SPACING`](TacticalMetrics::MIN_SPACING) | DMIN | 4.0 m | minimum distance between attacking teammates |
//! | [`REBOUND_RADIUS`](TacticalMetrics::REBOUND_RADIUS) | DREBOND | 3.0 m | distance to the basket giving a rebound opportunity |
//! | [`HELP_DISTANCE`](TacticalMetrics::HELP_DISTANCE) | DSEUIL | 2.0 m | distance at which a defender is guarding an attacker |
//!
//! All comparisons are strict except zone containment, which is inclusive.

use hoopsense_engine::{CourtDimensions, Player, Position, Possession, TeamId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TacticalMetrics {
    court: CourtDimensions,
}

impl Default for TacticalMetrics {
    fn default() -> Self {
        Self::new(CourtDimensions::default())
    }
}

impl TacticalMetrics {
    /// STROU
    pub const DEFENSIVE_HOLE_DISTANCE: f64 = 4.0;
    /// DMIN
    pub const MIN_SPACING: f64 = 4.0;
    /// DREBOND
    pub const REBOUND_RADIUS: f64 = 3.0;
    /// DSEUIL
    pub const HELP_DISTANCE: f64 = 2.0;

    #[must_use]
    pub const fn new(court: CourtDimensions) -> Self {
        Self { court }
    }

    #[must_use]
    pub fn court(&self) -> &CourtDimensions {
        &self.court
    }

    #[must_use]
    pub fn mid_court_x(&self) -> f64 {
        self.court.mid_court_x()
    }

    /// Euclidean distance between box centers.
    #[must_use]
    pub fn distance(&self, a: &Position, b: &Position) -> f64 {
        a.distance_to(b)
    }

    #[must_use]
    pub fn space_occupation(&self, position: &Position) -> f64 {
        position.area()
    }

    /// Whether `player` stands in the half that `team` attacks.
    ///
    /// A center exactly on the half-court line is in neither team's opponent court.
    #[must_use]
    pub fn in_opponent_court(&self, player: &Player, team: TeamId) -> bool {
        let x = player.position().center_x();
        match team {
            TeamId::Team1 => x > self.mid_court_x(),
            TeamId::Team2 => x < self.mid_court_x(),
        }
    }

    #[must_use]
    pub fn in_team(&self, player: &Player, team: TeamId) -> bool {
        player.team() == team
    }

    /// Whether `player`'s team has the ball and the player is past half court.
    #[must_use]
    pub fn in_attack(&self, player: &Player, possession: Possession) -> bool {
        possession.holds(player.team()) && self.in_opponent_court(player, player.team())
    }

    #[must_use]
    pub fn is_defensive_hole(&self, a: &Player, b: &Player) -> bool {
        a.distance_to(b) > Self::DEFENSIVE_HOLE_DISTANCE
    }

    /// Whether `defender` is strictly closer to `basket` than `attacker` is.
    #[must_use]
    pub fn is_in_defensive_position(
        &self,
        defender: &Player,
        attacker: &Player,
        basket: &Position,
    ) -> bool {
        self.distance(defender.position(), basket) < self.distance(attacker.position(), basket)
    }

    /// Players without an assigned zone are always in it.
    #[must_use]
    pub fn in_assigned_zone(&self, player: &Player) -> bool {
        player
            .zone()
            .is_none_or(|zone| zone.contains(player.center()))
    }

    #[must_use]
    pub fn is_rebound_opportunity(&self, player: &Player, basket: &Position) -> bool {
        self.distance(player.position(), basket) < Self::REBOUND_RADIUS
    }

    /// Whether `a` and `b` are within guarding distance of each other.
    #[must_use]
    pub fn is_within_help_distance(&self, a: &Player, b: &Player) -> bool {
        a.distance_to(b) < Self::HELP_DISTANCE
    }
}
