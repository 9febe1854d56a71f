//! Tracking frames from CSV exports.
//!
//! Some trackers export one row per object instead of one JSON object per frame.
//! Rows sharing a `timestamp` form one frame; the `type` column tells player rows
//! from the ball row.
//!
//! # Columns
//!
//! | Column | Rows | Required |
//! |---|---|---|
//! | `timestamp`, `type`, `x1`, `x2`, `y1`, `y2` | all | yes |
//! | `id`, `team` | `player` | yes |
//! | `height` | `player` | no (ignored, see [`builder`](crate::builder)) |
//! | `ball_possession`, `score_team1`, `score_team2`, `time_remaining`, `period` | any | no |
//!
//! Frame-level columns are read from the first row of each frame in file order.
//! Missing columns and empty cells take the same defaults as the JSON format:
//! loose ball, `0`/`0` score, `0.0` time remaining, period `1`. Frames are emitted in
//! ascending timestamp order; rows of an unknown `type` are skipped with a warning.

use std::io::Read;

use hoopsense_engine::PlayerId;
use serde::Deserialize;

use crate::frame::{BoxRecord, FrameCollection, FrameRecord, PlayerRecord, ScoreRecord};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum CsvFrameError {
    #[display("row {row}: {source}")]
    Parse { row: usize, source: csv::Error },
    #[display("row {row}: player row without `{field}`")]
    MissingPlayerField { row: usize, field: &'static str },
    #[display("frame at {timestamp}s has no ball row")]
    MissingBall { timestamp: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RowKind {
    Player,
    Ball,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
struct CsvRow {
    timestamp: f64,
    #[serde(rename = "type")]
    kind: RowKind,
    #[serde(default)]
    id: Option<PlayerId>,
    #[serde(default)]
    team: Option<i64>,
    x1: f64,
    x2: f64,
    y1: f64,
    y2: f64,
    #[serde(default)]
    height: Option<f64>,
    #[serde(default)]
    ball_possession: Option<i64>,
    #[serde(default)]
    score_team1: Option<i64>,
    #[serde(default)]
    score_team2: Option<i64>,
    #[serde(default)]
    time_remaining: Option<f64>,
    #[serde(default)]
    period: Option<u32>,
}

impl CsvRow {
    fn bounding_box(&self) -> BoxRecord {
        BoxRecord {
            x1: self.x1,
            x2: self.x2,
            y1: self.y1,
            y2: self.y2,
        }
    }
}

impl FrameCollection {
    /// Reads a CSV export with a header row.
    pub fn from_csv_reader<R>(reader: R) -> Result<Self, CsvFrameError>
    where
        R: Read,
    {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = vec![];
        for (index, result) in reader.deserialize::<CsvRow>().enumerate() {
            let row = index + 1;
            let record = result.map_err(|source| CsvFrameError::Parse { row, source })?;
            if record.kind == RowKind::Other {
                log::warn!("row {row}: skipping row of unknown type");
                continue;
            }
            rows.push((row, record));
        }

        rows.sort_by(|(_, a), (_, b)| a.timestamp.total_cmp(&b.timestamp));
        let frames = rows
            .chunk_by(|(_, a), (_, b)| a.timestamp == b.timestamp)
            .map(frame_from_rows)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { frames })
    }
}

fn frame_from_rows(rows: &[(usize, CsvRow)]) -> Result<FrameRecord, CsvFrameError> {
    let (_, first) = &rows[0];

    let mut players = vec![];
    let mut ball = None;
    for (row, record) in rows {
        match record.kind {
            RowKind::Player => players.push(player_from_row(*row, record)?),
            RowKind::Ball => {
                if ball.is_some() {
                    log::warn!("row {row}: extra ball row at {}s ignored", record.timestamp);
                } else {
                    ball = Some(record.bounding_box());
                }
            }
            RowKind::Other => {}
        }
    }
    let ball = ball.ok_or(CsvFrameError::MissingBall {
        timestamp: first.timestamp,
    })?;

    Ok(FrameRecord {
        timestamp: first.timestamp,
        players,
        ball,
        ball_possession: first.ball_possession,
        score: ScoreRecord {
            team1: first.score_team1.unwrap_or(0),
            team2: first.score_team2.unwrap_or(0),
        },
        time_remaining: first.time_remaining.unwrap_or(0.0),
        period: first.period.unwrap_or(1),
    })
}

fn player_from_row(row: usize, record: &CsvRow) -> Result<PlayerRecord, CsvFrameError> {
    let missing = |field| CsvFrameError::MissingPlayerField { row, field };
    Ok(PlayerRecord {
        id: record.id.ok_or_else(|| missing("id"))?,
        team: record.team.ok_or_else(|| missing("team"))?,
        x1: record.x1,
        x2: record.x2,
        y1: record.y1,
        y2: record.y2,
        height: record.height,
        zone: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(csv: &str) -> Result<FrameCollection, CsvFrameError> {
        FrameCollection::from_csv_reader(csv.as_bytes())
    }

    #[test]
    fn test_rows_grouped_by_timestamp() {
        let csv = "\
timestamp,type,id,team,x1,x2,y1,y2,ball_possession,score_team1,score_team2,time_remaining
11.0,player,1,1,5.0,6.0,3.0,4.0,2,10,8,599.0
10.0,player,1,1,4.5,5.5,2.5,3.5,1,10,8,600.0
10.0,player,6,2,19.5,20.5,2.5,3.5,1,10,8,600.0
10.0,ball,,,5.5,6.5,4.5,5.5,1,10,8,600.0
11.0,ball,,,19.0,19.2,3.0,3.2,2,10,8,599.0
11.0,player,6,2,19.5,20.5,2.5,3.5,2,10,8,599.0
";
        let collection = parse(csv).unwrap();
        assert_eq!(collection.frames.len(), 2);

        let first = &collection.frames[0];
        assert_eq!(first.timestamp, 10.0);
        assert_eq!(
            first.players.iter().map(|p| p.id).collect::<Vec<_>>(),
            [1, 6]
        );
        assert_eq!(first.players[1].team, 2);
        assert_eq!(first.ball.x1, 5.5);
        assert_eq!(first.ball_possession, Some(1));
        assert_eq!(first.score, ScoreRecord { team1: 10, team2: 8 });
        assert_eq!(first.time_remaining, 600.0);

        let second = &collection.frames[1];
        assert_eq!(second.timestamp, 11.0);
        assert_eq!(
            second.players.iter().map(|p| p.id).collect::<Vec<_>>(),
            [1, 6]
        );
        assert_eq!(second.ball_possession, Some(2));
        assert_eq!(second.ball.x2, 19.2);
    }

    #[test]
    fn test_optional_columns_use_defaults() {
        let csv = "\
timestamp,type,id,team,x1,x2,y1,y2
3.5,player,4,2,1.0,2.0,3.0,5.0
3.5,ball,,,0.0,0.2,0.0,0.2
";
        let collection = parse(csv).unwrap();
        let frame = &collection.frames[0];
        assert_eq!(frame.ball_possession, None);
        assert_eq!(frame.score, ScoreRecord::default());
        assert_eq!(frame.time_remaining, 0.0);
        assert_eq!(frame.period, 1);
        assert!(frame.players[0].height.is_none());
    }

    #[test]
    fn test_empty_possession_cell_is_loose_ball() {
        let csv = "\
timestamp,type,id,team,x1,x2,y1,y2,ball_possession
1.0,player,4,2,1.0,2.0,3.0,5.0,
1.0,ball,,,0.0,0.2,0.0,0.2,
";
        let collection = parse(csv).unwrap();
        assert_eq!(collection.frames[0].ball_possession, None);
    }

    #[test]
    fn test_missing_ball_row() {
        let csv = "\
timestamp,type,id,team,x1,x2,y1,y2
1.0,player,1,1,1.0,2.0,3.0,4.0
1.0,ball,,,0.0,0.2,0.0,0.2
2.0,player,1,1,1.0,2.0,3.0,4.0
";
        let err = parse(csv).unwrap_err();
        assert!(matches!(err, CsvFrameError::MissingBall { timestamp } if timestamp == 2.0));
    }

    #[test]
    fn test_player_row_without_team() {
        let csv = "\
timestamp,type,id,team,x1,x2,y1,y2
1.0,ball,,,0.0,0.2,0.0,0.2
1.0,player,7,,1.0,2.0,3.0,4.0
";
        let err = parse(csv).unwrap_err();
        assert!(matches!(
            err,
            CsvFrameError::MissingPlayerField {
                row: 2,
                field: "team"
            }
        ));
    }

    #[test]
    fn test_unknown_row_type_is_skipped() {
        let csv = "\
timestamp,type,id,team,x1,x2,y1,y2
1.0,referee,,,8.0,9.0,3.0,4.0
1.0,player,1,1,1.0,2.0,3.0,4.0
1.0,ball,,,0.0,0.2,0.0,0.2
";
        let collection = parse(csv).unwrap();
        assert_eq!(collection.frames[0].players.len(), 1);
    }

    #[test]
    fn test_malformed_number() {
        let csv = "\
timestamp,type,id,team,x1,x2,y1,y2
1.0,ball,,,zero,0.2,0.0,0.2
";
        assert!(matches!(
            parse(csv).unwrap_err(),
            CsvFrameError::Parse { row: 1, .. }
        ));
    }
}
