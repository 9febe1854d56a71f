use std::path::PathBuf;

use clap::Args;
use hoopsense_engine::{Frame, GameHistory, TeamId};
use hoopsense_evaluator::{
    decision_maker::DecisionMaker, metrics::TacticalMetrics, rules_engine::RulesEngine,
};

use crate::{
    command::CourtArg,
    schema::report::DecisionReport,
    util::{self, Output},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct DecideArg {
    /// Path to the frames file (JSON, or CSV by extension)
    frames: PathBuf,
    /// Team to advise (1 or 2)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
    team: u8,
    /// Frame index to analyze (defaults to the last frame)
    #[arg(long)]
    frame: Option<usize>,
    #[clap(flatten)]
    court: CourtArg,
    /// Print the JSON report instead of the action table
    #[arg(long)]
    json: bool,
    /// Write the JSON report to this file
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &DecideArg) -> anyhow::Result<()> {
    let team = TeamId::try_from(arg.team)?;
    let court = arg.court.dimensions()?;
    let history = util::load_history(&arg.frames, court)?;

    let frame = select_frame(&history, arg.frame)?;
    let index = frame.index();

    let rules = RulesEngine::new(TacticalMetrics::new(court));
    let verdicts = rules.evaluate(frame);
    let actions = DecisionMaker::new(&rules).plan(frame, &verdicts, team);
    log::info!(
        "Frame {index}: {} violation(s), {} action(s) for team {team}",
        verdicts.violations().count(),
        actions.len()
    );

    let report = DecisionReport {
        generated_at: chrono::Utc::now(),
        source: arg.frames.display().to_string(),
        frame_index: index,
        timestamp: frame.state().timestamp(),
        team,
        verdicts,
        actions,
    };

    if !arg.json {
        print_actions(&report);
    }
    if arg.json || arg.output.is_some() {
        Output::save_json(&report, arg.output.as_deref())?;
    }
    Ok(())
}

/// The frame at `index`, or the last frame when no index is given.
fn select_frame(history: &GameHistory, index: Option<usize>) -> anyhow::Result<Frame<'_>> {
    let index = index.unwrap_or(history.len().saturating_sub(1));
    let Some(frame) = history.frame(index) else {
        anyhow::bail!(
            "frame index {index} is out of range ({} frame(s) loaded)",
            history.len()
        );
    };
    Ok(frame)
}

fn print_actions(report: &DecisionReport) {
    println!(
        "Suggested Actions for Team {} (frame #{}, t={:.2}s)",
        report.team, report.frame_index, report.timestamp
    );
    println!("==========================================\n");

    if report.actions.is_empty() {
        println!("  No rule violations for this team.");
        return;
    }

    println!(
        "  {:>6} {:>8} {:>8} {:<22} {:>16} {:>8}",
        "Player", "Action", "Priority", "Reason", "Target", "Helps"
    );
    println!("  {}", "-".repeat(73));
    for action in &report.actions {
        let target = action.target_position.map_or_else(
            || "-".to_string(),
            |position| format!("({:.2}, {:.2})", position.center_x(), position.center_y()),
        );
        let helps = action
            .target_player_id
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        println!(
            "  {:>6} {:>8} {:>8.2} {:<22} {:>16} {:>8}",
            action.player_id,
            action.kind.to_string(),
            action.priority,
            action.reason.to_string(),
            target,
            helps
        );
    }
}

#[cfg(test)]
mod tests {
    use hoopsense_engine::{
        CourtDimensions, GameState, GameStateParams, Player, Point, Position, Possession,
    };

    use super::*;

    fn history(timestamps: &[f64]) -> GameHistory {
        let states = timestamps.iter().map(|&timestamp| {
            let players = vec![Player::new(
                1,
                TeamId::Team1,
                Position::around(Point::new(20.0, 5.0), 0.5),
                None,
            )];
            GameState::new(GameStateParams::new(
                players,
                Position::around(Point::new(20.0, 5.0), 0.1),
                Possession::Team(TeamId::Team1),
                CourtDimensions::default().default_baskets(),
                timestamp,
            ))
            .unwrap()
        });
        GameHistory::from_states(states).unwrap()
    }

    #[test]
    fn test_select_frame_defaults_to_last() {
        let history = history(&[0.0, 1.0, 2.0]);
        let frame = select_frame(&history, None).unwrap();
        assert_eq!(frame.index(), 2);
        assert_eq!(frame.state().timestamp(), 2.0);
        assert_eq!(select_frame(&history, Some(0)).unwrap().index(), 0);
    }

    #[test]
    fn test_select_frame_out_of_range() {
        let history = history(&[0.0, 1.0]);
        let err = select_frame(&history, Some(2)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "frame index 2 is out of range (2 frame(s) loaded)"
        );
    }
}
