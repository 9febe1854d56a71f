use serde::{Deserialize, Serialize};

use super::{
    position::{Point, Position},
    team::TeamId,
};

/// Playing surface size in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourtDimensions {
    pub width: f64,
    pub length: f64,
}

impl Default for CourtDimensions {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl CourtDimensions {
    pub const STANDARD: Self = Self {
        width: 15.0,
        length: 28.0,
    };

    #[must_use]
    pub const fn new(width: f64, length: f64) -> Self {
        Self { width, length }
    }

    /// `x` coordinate of the half-court line.
    #[must_use]
    pub fn mid_court_x(&self) -> f64 {
        self.length / 2.0
    }

    /// Baskets at the middle of both baselines.
    #[must_use]
    pub fn default_baskets(&self) -> Baskets {
        const BASKET_HALF_EXTENT: f64 = 0.5;
        let y = self.width / 2.0;
        Baskets {
            team1: Position::around(Point::new(0.0, y), BASKET_HALF_EXTENT),
            team2: Position::around(Point::new(self.length, y), BASKET_HALF_EXTENT),
        }
    }
}

/// Basket positions, indexed by the team that defends them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Baskets {
    pub team1: Position,
    pub team2: Position,
}

impl Baskets {
    #[must_use]
    pub const fn new(team1: Position, team2: Position) -> Self {
        Self { team1, team2 }
    }

    /// The basket `team` defends.
    #[must_use]
    pub fn own(&self, team: TeamId) -> &Position {
        match team {
            TeamId::Team1 => &self.team1,
            TeamId::Team2 => &self.team2,
        }
    }

    /// The basket `team` attacks.
    #[must_use]
    pub fn target(&self, team: TeamId) -> &Position {
        self.own(team.opponent())
    }
}
