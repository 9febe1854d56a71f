//! Conversion of serialized frames into a validated [`GameHistory`].
//!
//! [`HistoryBuilder`] turns every [`FrameRecord`] into a [`GameState`] and appends it
//! to a fresh history. Baskets are placed from the configured court dimensions.
//! The first failing frame aborts the build and its index is reported in the error.

use hoopsense_engine::{
    CourtDimensions, GameHistory, GameState, GameStateError, GameStateParams, HistoryError,
    InvalidTeamError, Player, Possession, TeamId,
};

use crate::frame::{FrameCollection, FrameRecord};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum BuildHistoryError {
    #[display("frame collection is empty")]
    NoFrames,
    #[display("frame {index}: {source}")]
    InvalidTeam {
        index: usize,
        source: InvalidTeamError,
    },
    #[display("frame {index}: {source}")]
    InvalidState {
        index: usize,
        source: GameStateError,
    },
    #[display("frame {index}: {source}")]
    OutOfOrder {
        index: usize,
        source: HistoryError,
    },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HistoryBuilder {
    court: CourtDimensions,
}

impl HistoryBuilder {
    #[must_use]
    pub const fn new(court: CourtDimensions) -> Self {
        Self { court }
    }

    #[must_use]
    pub fn court(&self) -> &CourtDimensions {
        &self.court
    }

    pub fn build(&self, collection: &FrameCollection) -> Result<GameHistory, BuildHistoryError> {
        if collection.frames.is_empty() {
            return Err(BuildHistoryError::NoFrames);
        }

        let mut history = GameHistory::new();
        let mut ignored_heights = 0;
        for (index, record) in collection.frames.iter().enumerate() {
            ignored_heights += record.players.iter().filter(|p| p.height.is_some()).count();
            let state = self.build_state(index, record)?;
            history
                .push(state)
                .map_err(|source| BuildHistoryError::OutOfOrder { index, source })?;
        }

        if ignored_heights > 0 {
            log::warn!(
                "ignored {ignored_heights} explicit player height(s); heights are taken from bounding boxes"
            );
        }
        log::debug!("built history of {} frame(s)", history.len());
        Ok(history)
    }

    fn build_state(&self, index: usize, record: &FrameRecord) -> Result<GameState, BuildHistoryError> {
        let team = |value: i64| {
            TeamId::try_from(value)
                .map_err(|source| BuildHistoryError::InvalidTeam { index, source })
        };

        let players = record
            .players
            .iter()
            .map(|p| Ok(Player::new(p.id, team(p.team)?, p.position(), p.zone)))
            .collect::<Result<Vec<_>, BuildHistoryError>>()?;
        let possession = match record.ball_possession {
            Some(value) => Possession::Team(team(value)?),
            None => Possession::Loose,
        };

        let params = GameStateParams::new(
            players,
            record.ball.into(),
            possession,
            self.court.default_baskets(),
            record.timestamp,
        )
        .with_score(record.score.team1, record.score.team2)
        .with_time_remaining(record.time_remaining)
        .with_period(record.period);

        GameState::new(params).map_err(|source| BuildHistoryError::InvalidState { index, source })
    }
}

#[cfg(test)]
mod tests {
    use hoopsense_engine::Point;

    use super::*;

    fn collection(json: &str) -> FrameCollection {
        serde_json::from_str(json).unwrap()
    }

    const TWO_FRAMES: &str = r#"{
        "frames": [
            {
                "timestamp": 10.0,
                "players": [
                    {"id": 1, "team": 1, "x1": 4.5, "x2": 5.5, "y1": 2.5, "y2": 3.5, "height": 2.0},
                    {"id": 6, "team": 2, "x1": 19.5, "x2": 20.5, "y1": 2.5, "y2": 3.5}
                ],
                "ball": {"x1": 5.5, "x2": 6.5, "y1": 4.5, "y2": 5.5},
                "ball_possession": 1,
                "score": {"1": 10, "2": 8},
                "time_remaining": 600.0
            },
            {
                "timestamp": 11.0,
                "players": [
                    {"id": 1, "team": 1, "x1": 5.0, "x2": 6.0, "y1": 3.0, "y2": 4.0},
                    {"id": 6, "team": 2, "x1": 19.5, "x2": 20.5, "y1": 2.5, "y2": 3.5}
                ],
                "ball": {"x1": 19.0, "x2": 19.2, "y1": 3.0, "y2": 3.2},
                "ball_possession": null,
                "time_remaining": 599.0,
                "period": 2
            }
        ]
    }"#;

    #[test]
    fn test_build_history() {
        let history = HistoryBuilder::default()
            .build(&collection(TWO_FRAMES))
            .unwrap();
        assert_eq!(history.len(), 2);

        let first = history.get(0).unwrap();
        assert_eq!(first.possession(), Possession::Team(TeamId::Team1));
        assert_eq!(first.score(TeamId::Team1), 10);
        assert_eq!(first.score(TeamId::Team2), 8);
        assert_eq!(first.time_remaining(), 600.0);
        assert_eq!(first.period(), 1);
        assert_eq!(
            first.player(TeamId::Team1, 1).unwrap().center(),
            Point::new(5.0, 3.0)
        );

        let second = history.frame(1).unwrap();
        assert!(second.state().possession().is_loose());
        assert_eq!(second.state().score(TeamId::Team1), 0);
        assert_eq!(second.state().period(), 2);
        assert_eq!(second.previous().unwrap().timestamp(), 10.0);
    }

    #[test]
    fn test_baskets_follow_court() {
        let builder = HistoryBuilder::new(CourtDimensions::new(15.0, 20.0));
        let history = builder.build(&collection(TWO_FRAMES)).unwrap();
        let baskets = history.get(0).unwrap().baskets();
        assert_eq!(baskets.own(TeamId::Team2).center_x(), 20.0);
        assert_eq!(baskets.own(TeamId::Team1).center_x(), 0.0);
    }

    #[test]
    fn test_empty_collection() {
        let err = HistoryBuilder::default()
            .build(&FrameCollection::default())
            .unwrap_err();
        assert!(matches!(err, BuildHistoryError::NoFrames));
    }

    #[test]
    fn test_invalid_team_reports_frame_index() {
        let json = TWO_FRAMES.replace(r#""ball_possession": null"#, r#""ball_possession": 3"#);
        let err = HistoryBuilder::default()
            .build(&collection(&json))
            .unwrap_err();
        match err {
            BuildHistoryError::InvalidTeam { index, source } => {
                assert_eq!(index, 1);
                assert_eq!(source.value, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_state_reports_frame_index() {
        let json = TWO_FRAMES.replace(r#""id": 6, "team": 2"#, r#""id": 1, "team": 2"#);
        let err = HistoryBuilder::default()
            .build(&collection(&json))
            .unwrap_err();
        assert!(matches!(
            err,
            BuildHistoryError::InvalidState {
                index: 0,
                source: GameStateError::DuplicatePlayerId { id: 1 }
            }
        ));
        assert_eq!(
            err.to_string(),
            "frame 0: player id 1 appears more than once in the snapshot"
        );
    }

    #[test]
    fn test_time_going_backwards() {
        let json = TWO_FRAMES.replace(r#""timestamp": 11.0"#, r#""timestamp": 9.0"#);
        let err = HistoryBuilder::default()
            .build(&collection(&json))
            .unwrap_err();
        assert!(matches!(err, BuildHistoryError::OutOfOrder { index: 1, .. }));
    }
}
