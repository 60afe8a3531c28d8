#![forbid(unsafe_code)]

//! # ordinal-harness
//!
//! Rank a list of opaque items with the fewest possible human judgements.
//!
//! A person can answer "which of these two is greater?" reliably, but every
//! question costs attention, so the engines here optimize for question economy
//! rather than CPU time:
//!
//! - [`binary_insertion_sort`] asks only exact three-way questions, using
//!   binary search to place each item and a memoizing oracle so no ordered
//!   pair is ever asked twice.
//! - [`heuristic_assisted_sort`] first asks for one rough numeric score per
//!   item, places the item by score, then spends a handful of exact questions
//!   to verify and correct the landing spot, recalibrating stored scores so
//!   later placements stay consistent.
//!
//! The human sits behind the [`judge::Judge`] trait; `src/bin/ordinal.rs`
//! wires the engines to a terminal session.

pub mod judge;
pub mod oracle;
pub mod sort;

pub use judge::{ConsoleJudge, Judge, JudgeError, ScriptedJudge};
pub use oracle::{ComparisonOracle, HeuristicOracle, OracleStats};
pub use sort::{binary_insertion_sort, heuristic_assisted_sort, ScoredItem};
