use serde::{Deserialize, Serialize};

use crate::InvalidTeamError;

/// One of the two teams on the court.
///
/// Team 1 defends the basket at `x = 0` and attacks toward increasing `x`;
/// team 2 defends the basket at the far baseline and attacks toward decreasing `x`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum TeamId {
    #[display("1")]
    Team1,
    #[display("2")]
    Team2,
}

impl TeamId {
    pub const ALL: [TeamId; 2] = [TeamId::Team1, TeamId::Team2];

    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            TeamId::Team1 => TeamId::Team2,
            TeamId::Team2 => TeamId::Team1,
        }
    }

    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            TeamId::Team1 => 1,
            TeamId::Team2 => 2,
        }
    }
}

impl TryFrom<u8> for TeamId {
    type Error = InvalidTeamError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(TeamId::Team1),
            2 => Ok(TeamId::Team2),
            _ => Err(InvalidTeamError {
                value: value.into(),
            }),
        }
    }
}

impl TryFrom<i64> for TeamId {
    type Error = InvalidTeamError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| InvalidTeamError { value })
            .and_then(TeamId::try_from)
    }
}

impl From<TeamId> for u8 {
    fn from(team: TeamId) -> Self {
        team.number()
    }
}

/// Which team controls the ball, if any.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(from = "Option<TeamId>", into = "Option<TeamId>")]
pub enum Possession {
    Team(TeamId),
    /// Ball in transit (shot, loose ball, pass in the air).
    #[default]
    Loose,
}

impl Possession {
    #[must_use]
    pub fn team(self) -> Option<TeamId> {
        match self {
            Possession::Team(team) => Some(team),
            Possession::Loose => None,
        }
    }

    #[must_use]
    pub fn holds(self, team: TeamId) -> bool {
        self == Possession::Team(team)
    }
}

impl From<Option<TeamId>> for Possession {
    fn from(team: Option<TeamId>) -> Self {
        team.map_or(Possession::Loose, Possession::Team)
    }
}

impl From<Possession> for Option<TeamId> {
    fn from(possession: Possession) -> Self {
        possession.team()
    }
}
