//! Game snapshots and the session history that links them in time.
//!
//! - [`GameState`] - Immutable snapshot of players, ball, possession, baskets and clock
//! - [`GameHistory`] - Append-only buffer of snapshots from one session
//! - [`Frame`] - A snapshot together with its immediate predecessor
//!
//! # Example
//!
//! ```
//! use hoopsense_engine::{
//!     CourtDimensions, GameHistory, GameState, GameStateParams, Player, Point, Position,
//!     Possession, TeamId,
//! };
//!
//! let court = CourtDimensions::default();
//! let snapshot = |timestamp| {
//!     let players = vec![Player::new(
//!         1,
//!         TeamId::Team1,
//!         Position::around(Point::new(18.0, 4.0), 0.5),
//!         None,
//!     )];
//!     GameState::new(GameStateParams::new(
//!         players,
//!         Position::around(Point::new(18.0, 4.0), 0.1),
//!         Possession::Team(TeamId::Team1),
//!         court.default_baskets(),
//!         timestamp,
//!     ))
//! };
//!
//! let mut history = GameHistory::new();
//! history.push(snapshot(10.0)?)?;
//! history.push(snapshot(11.0)?)?;
//!
//! let frame = history.frame(1).unwrap();
//! assert_eq!(frame.previous().unwrap().timestamp(), 10.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{game_state::*, history::*};

mod game_state;
mod history;
