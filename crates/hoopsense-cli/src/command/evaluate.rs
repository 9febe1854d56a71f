use std::path::PathBuf;

use clap::Args;
use hoopsense_analysis::timeline::VerdictTimeline;
use hoopsense_evaluator::{metrics::TacticalMetrics, rules_engine::RulesEngine};

use crate::{
    command::CourtArg,
    schema::report::{EvaluationReport, RuleSummary},
    util::{self, Output},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct EvaluateArg {
    /// Path to the frames file (JSON, or CSV by extension)
    frames: PathBuf,
    #[clap(flatten)]
    court: CourtArg,
    /// Print the JSON report instead of the summary table
    #[arg(long)]
    json: bool,
    /// Write the JSON report to this file
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &EvaluateArg) -> anyhow::Result<()> {
    let court = arg.court.dimensions()?;
    let history = util::load_history(&arg.frames, court)?;
    let rules = RulesEngine::new(TacticalMetrics::new(court));

    let timeline = VerdictTimeline::collect(&rules, &history);
    log::info!("Evaluated {} frame(s)", timeline.len());

    let report = EvaluationReport {
        generated_at: chrono::Utc::now(),
        source: arg.frames.display().to_string(),
        court,
        frame_count: timeline.len(),
        rules: RuleSummary::from_timeline(&timeline),
        timeline,
    };

    if !arg.json {
        print_summary(&report);
    }
    if arg.json || arg.output.is_some() {
        Output::save_json(&report, arg.output.as_deref())?;
    }
    Ok(())
}

fn print_summary(report: &EvaluationReport) {
    println!(
        "Rule Compliance Report ({} frames, court {} x {} m)",
        report.frame_count, report.court.length, report.court.width
    );
    println!("==========================================\n");
    println!(
        "  {:<30} {:>10} {:>12}",
        "Rule", "Violations", "Compliance"
    );
    println!("  {}", "-".repeat(54));
    for summary in &report.rules {
        println!(
            "  {:<30} {:>10} {:>11.1}%",
            summary.label,
            summary.violations,
            summary.compliance_ratio * 100.0
        );
    }

    let flagged = report
        .timeline
        .entries()
        .iter()
        .filter(|entry| !entry.verdicts.all_passed())
        .collect::<Vec<_>>();
    println!();
    println!(
        "Frames with violations: {}/{}",
        flagged.len(),
        report.frame_count
    );
    for entry in flagged {
        let rules = entry
            .verdicts
            .violations()
            .map(|rule| rule.key())
            .collect::<Vec<_>>();
        println!(
            "  #{:<5} t={:>8.2}s  {}",
            entry.index,
            entry.timestamp,
            rules.join(", ")
        );
    }
}
