//! Offline analysis of recorded tracking data.
//!
//! This crate turns serialized tracking frames into a validated session history and
//! summarizes rule compliance over time.
//!
//! # Workflow
//!
//! 1. **Load Frames** ([`frame::FrameCollection`]): Deserialize the JSON frame list, or
//!    group a row-per-object CSV export into frames ([`csv_frame`])
//! 2. **Build History** ([`builder::HistoryBuilder`]): Validate each frame and append it
//!    to a [`GameHistory`](hoopsense_engine::GameHistory)
//! 3. **Evaluate** ([`timeline::VerdictTimeline`]): Run the rules engine over every frame
//!    and collect per-rule time series
//!
//! # Example
//!
//! ```no_run
//! use hoopsense_analysis::{
//!     builder::HistoryBuilder, frame::FrameCollection, timeline::VerdictTimeline,
//! };
//! use hoopsense_engine::CourtDimensions;
//! use hoopsense_evaluator::{rules_engine::RulesEngine, verdict::RuleId};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let json = "";
//!
//! let collection: FrameCollection = serde_json::from_str(json)?;
//! let history = HistoryBuilder::new(CourtDimensions::default()).build(&collection)?;
//!
//! let timeline = VerdictTimeline::collect(&RulesEngine::default(), &history);
//! for rule in RuleId::ALL {
//!     if let Some(ratio) = timeline.compliance_ratio(rule) {
//!         println!("{}: {:.1}%", rule.label(), ratio * 100.0);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod csv_frame;
pub mod frame;
pub mod timeline;
