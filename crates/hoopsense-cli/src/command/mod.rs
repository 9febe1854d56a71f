use clap::{Args, Parser, Subcommand};
use hoopsense_engine::CourtDimensions;

use self::{decide::DecideArg, evaluate::EvaluateArg};

mod decide;
mod evaluate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to do with the tracking data
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Check every frame against the tactical rules and report compliance
    Evaluate(#[clap(flatten)] EvaluateArg),
    /// Suggest corrective actions for one team in one frame
    Decide(#[clap(flatten)] DecideArg),
}

/// Court size shared by all subcommands
#[derive(Debug, Clone, Copy, Args)]
pub(crate) struct CourtArg {
    /// Court width in meters
    #[arg(long, default_value_t = CourtDimensions::STANDARD.width)]
    court_width: f64,
    /// Court length in meters
    #[arg(long, default_value_t = CourtDimensions::STANDARD.length)]
    court_length: f64,
}

impl CourtArg {
    pub(crate) fn dimensions(self) -> anyhow::Result<CourtDimensions> {
        let positive = |value: f64| value > 0.0;
        if !positive(self.court_width) || !positive(self.court_length) {
            anyhow::bail!(
                "court dimensions must be positive (got {} x {})",
                self.court_width,
                self.court_length
            );
        }
        Ok(CourtDimensions::new(self.court_width, self.court_length))
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Evaluate(arg) => evaluate::run(&arg)?,
        Mode::Decide(arg) => decide::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn court(court_width: f64, court_length: f64) -> CourtArg {
        CourtArg {
            court_width,
            court_length,
        }
    }

    #[test]
    fn test_court_dimensions_accepted() {
        let dimensions = court(15.0, 28.0).dimensions().unwrap();
        assert_eq!(dimensions, CourtDimensions::STANDARD);
        assert_eq!(court(12.0, 20.0).dimensions().unwrap().mid_court_x(), 10.0);
    }

    #[test]
    fn test_court_dimensions_rejected() {
        assert!(court(0.0, 28.0).dimensions().is_err());
        assert!(court(15.0, -1.0).dimensions().is_err());
        assert!(court(f64::NAN, 28.0).dimensions().is_err());
        assert!(court(15.0, f64::NAN).dimensions().is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory as _;
        CommandArgs::command().debug_assert();
    }
}
