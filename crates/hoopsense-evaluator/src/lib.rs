//! Tactical evaluation of basketball snapshots.
//!
//! This crate implements a three-level evaluation architecture:
//!
//! 1. **Metrics** ([`metrics`]) - Geometric predicates over player bounding boxes
//!    (distances, court halves, holes, guarding distance, zones).
//!
//! 2. **Rules** ([`rules_engine`]) - Combines metrics into fourteen tactical compliance
//!    verdicts ([`verdict`]) for one snapshot.
//!
//! 3. **Decisions** ([`decision_maker`]) - Turns violated rules into prioritized corrective
//!    [`action`]s for one team.
//!
//! # Architecture
//!
//! ```text
//! Decision Making (what should the team do?)
//!     ↓ uses
//! Rule Evaluation (which rules are broken?)
//!     ↓ uses
//! Tactical Metrics (what does the court look like?)
//! ```
//!
//! # Design Principles
//!
//! ## Explicit Configuration
//!
//! Court dimensions live in [`metrics::TacticalMetrics`] and are passed down explicitly.
//! The rule thresholds are associated constants. Nothing is global.
//!
//! ## Stateless Evaluation
//!
//! Evaluation reads a [`Frame`](hoopsense_engine::Frame) (a snapshot and its predecessor)
//! and never mutates it. Evaluating the same frame twice yields identical verdicts.
//!
//! # Example: Evaluating a Snapshot
//!
//! ```rust,no_run
//! use hoopsense_engine::{GameHistory, TeamId};
//! use hoopsense_evaluator::{decision_maker::DecisionMaker, rules_engine::RulesEngine};
//! # let history: GameHistory = todo!();
//!
//! let rules = RulesEngine::default();
//! for frame in history.frames() {
//!     let verdicts = rules.evaluate(frame);
//!     for rule in verdicts.violations() {
//!         println!("{}: {}", frame.state().timestamp(), rule.label());
//!     }
//! }
//!
//! let decision_maker = DecisionMaker::new(&rules);
//! let actions = decision_maker.plan_for(history.last_frame().unwrap(), TeamId::Team2);
//! ```

pub mod action;
pub mod decision_maker;
pub mod metrics;
pub mod rules_engine;
pub mod verdict;

#[cfg(test)]
mod test_util;
