//! Serialized tracking frames.
//!
//! Tracking data arrives as a JSON document holding a list of frames. Each frame is
//! one snapshot of the court: player bounding boxes, the ball, possession and the
//! scoreboard.
//!
//! # Data Structure
//!
//! ```text
//! FrameCollection
//! └─ frames: Vec<FrameRecord>
//!     ├─ timestamp (seconds)
//!     ├─ players: Vec<PlayerRecord>
//!     │   ├─ id, team (1 or 2)
//!     │   ├─ bounding box (x1, x2, y1, y2)
//!     │   └─ optional zone [x1, y1, x2, y2]
//!     ├─ ball bounding box
//!     ├─ ball_possession (1, 2 or null)
//!     └─ optional score, time_remaining, period
//! ```
//!
//! # Serialization
//!
//! ```json
//! {
//!   "frames": [
//!     {
//!       "timestamp": 10.0,
//!       "players": [
//!         {"id": 1, "team": 1, "x1": 4.5, "x2": 5.5, "y1": 2.5, "y2": 3.5},
//!         {"id": 6, "team": 2, "x1": 19.5, "x2": 20.5, "y1": 2.5, "y2": 3.5, "zone": [14.0, 0.0, 28.0, 7.5]}
//!       ],
//!       "ball": {"x1": 5.5, "x2": 6.5, "y1": 4.5, "y2": 5.5},
//!       "ball_possession": 1,
//!       "score": {"1": 10, "2": 8},
//!       "time_remaining": 600.0
//!     }
//!   ]
//! }
//! ```
//!
//! CSV exports are converted into the same records (see [`csv_frame`](crate::csv_frame)).
//!
//! A missing score reads as `0`/`0`, a missing time remaining as `0.0` and a missing
//! period as `1`. Teams are kept as raw integers here and validated when the frames
//! are turned into a history (see [`builder`](crate::builder)).

use hoopsense_engine::{PlayerId, Position, Zone};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FrameCollection {
    pub frames: Vec<FrameRecord>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FrameRecord {
    /// Seconds since the start of the recording
    pub timestamp: f64,
    pub players: Vec<PlayerRecord>,
    pub ball: BoxRecord,
    /// Team number in possession, `None` for a loose ball
    #[serde(default)]
    pub ball_possession: Option<i64>,
    #[serde(default)]
    pub score: ScoreRecord,
    #[serde(default)]
    pub time_remaining: f64,
    #[serde(default = "default_period")]
    pub period: u32,
}

fn default_period() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub team: i64,
    pub x1: f64,
    pub x2: f64,
    pub y1: f64,
    pub y2: f64,
    /// Accepted for compatibility; player height is derived from the bounding box.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<Zone>,
}

impl PlayerRecord {
    #[must_use]
    pub fn position(&self) -> Position {
        Position::new(self.x1, self.x2, self.y1, self.y2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct BoxRecord {
    pub x1: f64,
    pub x2: f64,
    pub y1: f64,
    pub y2: f64,
}

impl From<BoxRecord> for Position {
    fn from(record: BoxRecord) -> Self {
        Position::new(record.x1, record.x2, record.y1, record.y2)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScoreRecord {
    #[serde(rename = "1")]
    pub team1: i64,
    #[serde(rename = "2")]
    pub team2: i64,
}
