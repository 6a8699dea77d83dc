//! Pipeline stages and orchestration.
//!
//! Stages run in a fixed order: sampling feeds the ranker, keyword
//! extraction and highlight selection always see the full sentence set, and
//! the runner assembles the final result with metrics.

pub mod highlights;
pub mod keywords;
pub mod ranker;
pub mod runner;
pub mod sampler;
pub mod stitcher;
