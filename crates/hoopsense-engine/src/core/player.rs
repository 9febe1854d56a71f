use serde::{Deserialize, Serialize};

use super::{
    position::{Point, Position, Zone},
    team::TeamId,
};

pub type PlayerId = u32;

/// A tracked player at one moment of the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    team: TeamId,
    position: Position,
    height: f64,
    zone: Option<Zone>,
}

impl Player {
    /// Creates a player. The height is taken from the bounding box.
    #[must_use]
    pub fn new(id: PlayerId, team: TeamId, position: Position, zone: Option<Zone>) -> Self {
        Self {
            id,
            team,
            height: position.height(),
            position,
            zone,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn team(&self) -> TeamId {
        self.team
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.position.center()
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn zone(&self) -> Option<&Zone> {
        self.zone.as_ref()
    }

    #[must_use]
    pub fn distance_to(&self, other: &Player) -> f64 {
        self.position.distance_to(&other.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_follows_bounding_box() {
        let player = Player::new(7, TeamId::Team1, Position::new(1.0, 2.0, 3.0, 5.1), None);
        assert!((player.height() - 2.1).abs() < 1e-12);
        assert_eq!(player.id(), 7);
        assert_eq!(player.team(), TeamId::Team1);
        assert!(player.zone().is_none());
    }
}
