//! Moth-Flame Optimization (MFO).
//!
//! A population of moths performs an intensity-scaled random walk around
//! the best configuration found so far (the flame). Each moth keeps its
//! own best position (per-slot elitism) and the flame only ever improves.
//!
//! # Key Types
//!
//! - [`Evaluator`]: The objective, scoring a configuration in `[0, 1]`
//! - [`MfoConfig`]: Run parameters (generations, population, alpha/beta/gamma)
//! - [`MfoRunner`]: Executes the search loop
//! - [`MfoResult`]: Best configuration plus run statistics
//!
//! # References
//!
//! - Mirjalili (2015), "Moth-flame optimization algorithm: A novel
//!   nature-inspired heuristic paradigm", *Knowledge-Based Systems* 89
//! - Yang (2009), "Firefly Algorithms for Multimodal Optimization"
//!   (distance-decaying light intensity)

mod config;
mod intensity;
mod movement;
mod report;
mod runner;
mod types;

pub use config::MfoConfig;
pub use intensity::{distance, intensity};
pub use movement::move_moth;
pub use report::TuneReport;
pub use runner::{MfoResult, MfoRunner, RunPhase};
pub use types::Evaluator;
