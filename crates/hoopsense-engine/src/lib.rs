//! Snapshot model for basketball tracking data.
//!
//! - [`core`] - Court geometry and participants: [`Position`], [`Zone`], [`Player`],
//!   [`TeamId`], [`Possession`], [`Baskets`], [`CourtDimensions`]
//! - [`engine`] - [`GameState`] snapshots and the [`GameHistory`] that orders them
//!
//! Snapshots are validated once, at construction, and are immutable afterwards.

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("invalid team {value}, expected 1 or 2")]
pub struct InvalidTeamError {
    pub value: i64,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("player {id} not found in team {team}")]
pub struct PlayerNotFoundError {
    pub team: TeamId,
    pub id: PlayerId,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum GameStateError {
    #[display("snapshot has no players")]
    EmptyRoster,
    #[display("player id {id} appears more than once in the snapshot")]
    DuplicatePlayerId { id: PlayerId },
    #[display("score of team {team} cannot be negative (got {score})")]
    NegativeScore { team: TeamId, score: i64 },
    #[display("timestamp cannot be negative (got {timestamp})")]
    NegativeTimestamp { timestamp: f64 },
    #[display("time remaining cannot be negative (got {time_remaining})")]
    NegativeTimeRemaining { time_remaining: f64 },
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    #[display(
        "snapshot {index} goes back in time ({timestamp}s after {previous}s)"
    )]
    NonMonotonicTimestamp {
        index: usize,
        previous: f64,
        timestamp: f64,
    },
}
