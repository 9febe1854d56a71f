use std::collections::HashSet;

use serde::Serialize;

use crate::{
    GameStateError, PlayerNotFoundError,
    core::{Baskets, Player, PlayerId, Position, Possession, TeamId},
};

/// Everything needed to build a [`GameState`].
///
/// Score, time remaining and period default to `(0, 0)`, `0.0` and `1`.
#[derive(Debug, Clone)]
pub struct GameStateParams {
    pub players: Vec<Player>,
    pub ball: Position,
    pub possession: Possession,
    pub baskets: Baskets,
    pub timestamp: f64,
    pub score: (i64, i64),
    pub time_remaining: f64,
    pub period: u32,
}

impl GameStateParams {
    #[must_use]
    pub fn new(
        players: Vec<Player>,
        ball: Position,
        possession: Possession,
        baskets: Baskets,
        timestamp: f64,
    ) -> Self {
        Self {
            players,
            ball,
            possession,
            baskets,
            timestamp,
            score: (0, 0),
            time_remaining: 0.0,
            period: 1,
        }
    }

    #[must_use]
    pub fn with_score(mut self, team1: i64, team2: i64) -> Self {
        self.score = (team1, team2);
        self
    }

    #[must_use]
    pub fn with_time_remaining(mut self, time_remaining: f64) -> Self {
        self.time_remaining = time_remaining;
        self
    }

    #[must_use]
    pub fn with_period(mut self, period: u32) -> Self {
        self.period = period;
        self
    }
}

/// Immutable snapshot of the court at one instant.
///
/// The roster keeps the order it was given in; every roster traversal
/// (rule checks, action generation, tie-breaks) follows that order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameState {
    players: Vec<Player>,
    ball: Position,
    possession: Possession,
    baskets: Baskets,
    timestamp: f64,
    score: (u64, u64),
    time_remaining: f64,
    period: u32,
}

impl GameState {
    pub fn new(params: GameStateParams) -> Result<Self, GameStateError> {
        let GameStateParams {
            players,
            ball,
            possession,
            baskets,
            timestamp,
            score,
            time_remaining,
            period,
        } = params;

        if players.is_empty() {
            return Err(GameStateError::EmptyRoster);
        }
        let mut seen = HashSet::with_capacity(players.len());
        for player in &players {
            if !seen.insert(player.id()) {
                return Err(GameStateError::DuplicatePlayerId { id: player.id() });
            }
        }

        let score = (
            non_negative_score(TeamId::Team1, score.0)?,
            non_negative_score(TeamId::Team2, score.1)?,
        );
        if timestamp.is_nan() || timestamp < 0.0 {
            return Err(GameStateError::NegativeTimestamp { timestamp });
        }
        if time_remaining.is_nan() || time_remaining < 0.0 {
            return Err(GameStateError::NegativeTimeRemaining { time_remaining });
        }

        Ok(Self {
            players,
            ball,
            possession,
            baskets,
            timestamp,
            score,
            time_remaining,
            period,
        })
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Players of `team`, in roster order.
    pub fn team_players(&self, team: TeamId) -> impl Iterator<Item = &Player> + '_ {
        self.players.iter().filter(move |p| p.team() == team)
    }

    #[must_use]
    pub fn ball(&self) -> &Position {
        &self.ball
    }

    #[must_use]
    pub fn possession(&self) -> Possession {
        self.possession
    }

    #[must_use]
    pub fn baskets(&self) -> &Baskets {
        &self.baskets
    }

    /// Seconds since the start of the game.
    #[must_use]
    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }

    #[must_use]
    pub fn score(&self, team: TeamId) -> u64 {
        match team {
            TeamId::Team1 => self.score.0,
            TeamId::Team2 => self.score.1,
        }
    }

    /// Seconds left in the current period.
    #[must_use]
    pub fn time_remaining(&self) -> f64 {
        self.time_remaining
    }

    #[must_use]
    pub fn period(&self) -> u32 {
        self.period
    }

    pub fn player(&self, team: TeamId, id: PlayerId) -> Result<&Player, PlayerNotFoundError> {
        self.team_players(team)
            .find(|p| p.id() == id)
            .ok_or(PlayerNotFoundError { team, id })
    }

    pub fn distance_to_ball(&self, team: TeamId, id: PlayerId) -> Result<f64, PlayerNotFoundError> {
        let player = self.player(team, id)?;
        Ok(player.position().distance_to(&self.ball))
    }

    /// Distances from player `id` to each of its teammates, in roster order.
    pub fn teammate_distances(
        &self,
        team: TeamId,
        id: PlayerId,
    ) -> Result<Vec<(PlayerId, f64)>, PlayerNotFoundError> {
        let player = self.player(team, id)?;
        Ok(self
            .team_players(team)
            .filter(|other| other.id() != id)
            .map(|other| (other.id(), player.distance_to(other)))
            .collect())
    }
}

fn non_negative_score(team: TeamId, score: i64) -> Result<u64, GameStateError> {
    u64::try_from(score).map_err(|_| GameStateError::NegativeScore { team, score })
}

#[cfg(test)]
mod tests {
    use crate::core::{CourtDimensions, Point};

    use super::*;

    fn player(id: PlayerId, team: TeamId, x: f64, y: f64) -> Player {
        Player::new(id, team, Position::around(Point::new(x, y), 0.5), None)
    }

    fn params(players: Vec<Player>) -> GameStateParams {
        GameStateParams::new(
            players,
            Position::around(Point::new(14.0, 7.5), 0.1),
            Possession::Team(TeamId::Team1),
            CourtDimensions::default().default_baskets(),
            12.0,
        )
    }

    fn sample_state() -> GameState {
        GameState::new(params(vec![
            player(1, TeamId::Team1, 14.0, 3.5),
            player(2, TeamId::Team1, 17.0, 7.5),
            player(3, TeamId::Team2, 20.0, 7.5),
        ]))
        .unwrap()
    }

    #[test]
    fn test_defaults() {
        let state = sample_state();
        assert_eq!(state.score(TeamId::Team1), 0);
        assert_eq!(state.score(TeamId::Team2), 0);
        assert_eq!(state.period(), 1);
        assert_eq!(state.time_remaining(), 0.0);
        assert_eq!(state.timestamp(), 12.0);
    }

    #[test]
    fn test_team_players_keeps_roster_order() {
        let state = sample_state();
        let ids = state
            .team_players(TeamId::Team1)
            .map(Player::id)
            .collect::<Vec<_>>();
        assert_eq!(ids, [1, 2]);
    }

    #[test]
    fn test_player_lookup() {
        let state = sample_state();
        assert_eq!(state.player(TeamId::Team2, 3).unwrap().id(), 3);

        let err = state.player(TeamId::Team2, 1).unwrap_err();
        assert_eq!(err.team, TeamId::Team2);
        assert_eq!(err.id, 1);
        assert_eq!(err.to_string(), "player 1 not found in team 2");
    }

    #[test]
    fn test_distance_queries() {
        let state = sample_state();
        let to_ball = state.distance_to_ball(TeamId::Team1, 1).unwrap();
        assert!((to_ball - 4.0).abs() < 1e-12);

        let distances = state.teammate_distances(TeamId::Team1, 2).unwrap();
        assert_eq!(distances.len(), 1);
        assert_eq!(distances[0].0, 1);
        assert!((distances[0].1 - 5.0).abs() < 1e-12);

        assert!(state.teammate_distances(TeamId::Team1, 9).is_err());
    }

    #[test]
    fn test_rejects_empty_roster() {
        assert!(matches!(
            GameState::new(params(vec![])),
            Err(GameStateError::EmptyRoster)
        ));
    }

    #[test]
    fn test_rejects_duplicate_player_id() {
        let result = GameState::new(params(vec![
            player(4, TeamId::Team1, 1.0, 1.0),
            player(4, TeamId::Team2, 9.0, 9.0),
        ]));
        assert!(matches!(
            result,
            Err(GameStateError::DuplicatePlayerId { id: 4 })
        ));
    }

    #[test]
    fn test_rejects_negative_score() {
        let result = GameState::new(params(vec![player(1, TeamId::Team1, 1.0, 1.0)]).with_score(3, -1));
        assert!(matches!(
            result,
            Err(GameStateError::NegativeScore {
                team: TeamId::Team2,
                score: -1
            })
        ));
    }

    #[test]
    fn test_rejects_negative_times() {
        let mut p = params(vec![player(1, TeamId::Team1, 1.0, 1.0)]);
        p.timestamp = -0.5;
        assert!(matches!(
            GameState::new(p),
            Err(GameStateError::NegativeTimestamp { .. })
        ));

        let p = params(vec![player(1, TeamId::Team1, 1.0, 1.0)]).with_time_remaining(-1.0);
        assert!(matches!(
            GameState::new(p),
            Err(GameStateError::NegativeTimeRemaining { .. })
        ));

        let mut p = params(vec![player(1, TeamId::Team1, 1.0, 1.0)]);
        p.timestamp = f64::NAN;
        assert!(GameState::new(p).is_err());
    }

    #[test]
    fn test_accepts_context() {
        let state = GameState::new(
            params(vec![player(1, TeamId::Team1, 1.0, 1.0)])
                .with_score(10, 8)
                .with_time_remaining(600.0)
                .with_period(2),
        )
        .unwrap();
        assert_eq!(state.score(TeamId::Team1), 10);
        assert_eq!(state.score(TeamId::Team2), 8);
        assert_eq!(state.time_remaining(), 600.0);
        assert_eq!(state.period(), 2);
    }
}
