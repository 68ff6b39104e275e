//! MFO search loop.
//!
//! [`MfoRunner`] drives the run through its phases:
//! initialization → generations (move → clamp → evaluate → replace) → report.
//!
//! # Generation update
//!
//! For every moth `j`, in population order:
//!
//! 1. Move `moth[j]` relative to the *current* flame and clamp it.
//! 2. Evaluate the new candidate.
//! 3. If it beats the flame, it becomes the flame. Later moths in the same
//!    generation already chase the new flame.
//! 4. If it beats `fitness[j]`, it replaces slot `j`.

use super::config::MfoConfig;
use super::movement::move_moth;
use super::report::TuneReport;
use super::types::Evaluator;
use crate::data::SplitData;
use crate::error::{EvaluationError, MfoError};
use crate::space::{Moth, SearchDomain};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Phase of a tuning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Population, fitness and flame are populated.
    Initialized,
    /// Iterating generations.
    Running,
    /// All configured generations executed.
    Completed,
    /// Result packaged.
    Reported,
    /// Aborted on the first error.
    Failed,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RunPhase::Initialized => "initialized",
            RunPhase::Running => "running",
            RunPhase::Completed => "completed",
            RunPhase::Reported => "reported",
            RunPhase::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// The best moth seen so far.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Flame {
    moth: Moth,
    fitness: f64,
}

/// Result of a successful MFO run.
#[derive(Debug, Clone, PartialEq)]
pub struct MfoResult {
    /// The flame as stored (numeric dimensions may be non-integer).
    pub best: Moth,

    /// Fitness of the flame.
    pub best_fitness: f64,

    /// The flame with truncated dimensions.
    pub report: TuneReport,

    /// Number of generations executed.
    pub generations: usize,

    /// Number of evaluator calls, including the initial population.
    pub evaluations: usize,

    /// Number of times a generation replaced the flame.
    pub improvements: usize,

    /// Flame fitness after initialization and after each generation.
    pub fitness_history: Vec<f64>,
}

/// Counts and validates evaluator calls.
struct Objective<'a, E> {
    evaluator: &'a E,
    data: &'a SplitData,
    calls: AtomicUsize,
}

impl<'a, E: Evaluator> Objective<'a, E> {
    fn new(evaluator: &'a E, data: &'a SplitData) -> Self {
        Self {
            evaluator,
            data,
            calls: AtomicUsize::new(0),
        }
    }

    fn score(&self, moth: &Moth) -> Result<f64, EvaluationError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        let score = self.evaluator.evaluate(&moth.params(), self.data)?;
        if !(0.0..=1.0).contains(&score) {
            return Err(EvaluationError::InvalidScore(score));
        }
        Ok(score)
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

/// Population, index-aligned fitness, and the flame.
#[derive(Debug, Clone)]
struct Swarm {
    moths: Vec<Moth>,
    fitness: Vec<f64>,
    flame: Flame,
}

impl Swarm {
    /// Samples `n` moths and evaluates them in order.
    fn initialize<E: Evaluator, R: Rng>(
        domain: &SearchDomain,
        n: usize,
        objective: &Objective<'_, E>,
        rng: &mut R,
    ) -> Result<Self, MfoError> {
        let moths: Vec<Moth> = (0..n).map(|_| domain.sample(rng)).collect();
        let fitness = moths
            .iter()
            .map(|m| objective.score(m))
            .collect::<Result<Vec<f64>, _>>()?;

        let mut best = 0;
        for (i, &f) in fitness.iter().enumerate().skip(1) {
            if f > fitness[best] {
                best = i;
            }
        }
        let flame = Flame {
            moth: moths[best],
            fitness: fitness[best],
        };
        Ok(Self {
            moths,
            fitness,
            flame,
        })
    }

    fn generation<E: Evaluator, R: Rng>(
        &mut self,
        domain: &SearchDomain,
        config: &MfoConfig,
        objective: &Objective<'_, E>,
        rng: &mut R,
        parallel: bool,
    ) -> Result<usize, MfoError> {
        #[cfg(feature = "parallel")]
        {
            if parallel {
                return self.advance_snapshot(domain, config, objective, rng);
            }
        }
        #[cfg(not(feature = "parallel"))]
        debug_assert!(!parallel);
        self.advance(domain, config, objective, rng)
    }

    /// Runs one generation. Returns the number of flame replacements.
    fn advance<E: Evaluator, R: Rng>(
        &mut self,
        domain: &SearchDomain,
        config: &MfoConfig,
        objective: &Objective<'_, E>,
        rng: &mut R,
    ) -> Result<usize, MfoError> {
        let mut improvements = 0;
        for j in 0..self.moths.len() {
            let candidate = domain.clamp(move_moth(&self.moths[j], &self.flame.moth, config, rng));
            let score = objective.score(&candidate)?;
            if self.accept(j, candidate, score) {
                improvements += 1;
            }
        }
        Ok(improvements)
    }

    /// Runs one generation against a fixed flame snapshot, evaluating all
    /// candidates in parallel. Moves are drawn sequentially so a seeded
    /// run stays reproducible.
    #[cfg(feature = "parallel")]
    fn advance_snapshot<E: Evaluator, R: Rng>(
        &mut self,
        domain: &SearchDomain,
        config: &MfoConfig,
        objective: &Objective<'_, E>,
        rng: &mut R,
    ) -> Result<usize, MfoError> {
        let flame = self.flame.moth;
        let candidates: Vec<Moth> = self
            .moths
            .iter()
            .map(|m| domain.clamp(move_moth(m, &flame, config, rng)))
            .collect();
        let scores = candidates
            .par_iter()
            .map(|c| objective.score(c))
            .collect::<Result<Vec<f64>, _>>()?;

        let mut improvements = 0;
        for (j, (candidate, score)) in candidates.into_iter().zip(scores).enumerate() {
            if self.accept(j, candidate, score) {
                improvements += 1;
            }
        }
        Ok(improvements)
    }

    /// Flame update, then per-slot elitist replacement. Returns whether
    /// the flame moved.
    fn accept(&mut self, j: usize, candidate: Moth, score: f64) -> bool {
        let improved = score > self.flame.fitness;
        if improved {
            debug!(
                "mfo: new flame {} (fitness {:.6} -> {:.6})",
                candidate.params(),
                self.flame.fitness,
                score
            );
            self.flame = Flame {
                moth: candidate,
                fitness: score,
            };
        }
        if score > self.fitness[j] {
            self.moths[j] = candidate;
            self.fitness[j] = score;
        }
        improved
    }
}

/// Executes the moth-flame search.
///
/// # Usage
///
/// ```
/// use u_mfo::mfo::{MfoConfig, MfoRunner};
/// use u_mfo::{EvaluationError, HyperParams, SplitData};
///
/// let x = vec![vec![0.0, 1.0], vec![1.0, 0.0], vec![0.0, 0.5], vec![1.0, 0.5]];
/// let y = vec![0, 1, 0, 1];
/// let data = SplitData::new(x.clone(), y.clone(), x, y).unwrap();
///
/// let evaluator = |p: &HyperParams, _: &SplitData| -> Result<f64, EvaluationError> {
///     Ok(1.0 - (p.max_depth as f64 - 6.0).abs() / 20.0)
/// };
///
/// let config = MfoConfig::default().with_iterations(10).with_seed(42);
/// let result = MfoRunner::run(&evaluator, &data, &config).unwrap();
/// assert!(result.report.accuracy > 0.0);
/// ```
pub struct MfoRunner;

impl MfoRunner {
    /// Runs the search with an RNG built from `config.seed`.
    ///
    /// # Errors
    ///
    /// [`MfoError::Config`] for invalid parameters, [`MfoError::Evaluation`]
    /// on the first evaluator failure. No partial result is returned.
    pub fn run<E: Evaluator>(
        evaluator: &E,
        data: &SplitData,
        config: &MfoConfig,
    ) -> Result<MfoResult, MfoError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::run_with_rng(evaluator, data, config, &mut rng)
    }

    /// Runs the search drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored. The same RNG state, data and
    /// configuration reproduce the same result.
    pub fn run_with_rng<E: Evaluator, R: Rng>(
        evaluator: &E,
        data: &SplitData,
        config: &MfoConfig,
        rng: &mut R,
    ) -> Result<MfoResult, MfoError> {
        config.validate()?;

        let objective = Objective::new(evaluator, data);
        let outcome = Self::search(&objective, config, rng);
        if let Err(ref e) = outcome {
            warn!(
                "mfo: {} after {} evaluations: {e}",
                RunPhase::Failed,
                objective.calls()
            );
        }
        outcome
    }

    fn search<E: Evaluator, R: Rng>(
        objective: &Objective<'_, E>,
        config: &MfoConfig,
        rng: &mut R,
    ) -> Result<MfoResult, MfoError> {
        let domain = SearchDomain::default().with_split_clamp(config.split_clamp);
        let parallel = use_parallel(config);

        let mut swarm = Swarm::initialize(&domain, config.n_population, objective, rng)?;
        info!(
            "mfo: {} {} moths, flame fitness {:.6}",
            RunPhase::Initialized,
            config.n_population,
            swarm.flame.fitness
        );

        let mut fitness_history = Vec::with_capacity(config.n_iterations + 1);
        fitness_history.push(swarm.flame.fitness);
        let mut improvements = 0;

        for gen in 0..config.n_iterations {
            improvements += swarm.generation(&domain, config, objective, rng, parallel)?;
            fitness_history.push(swarm.flame.fitness);
            debug!(
                "mfo: {} generation {}/{}, flame fitness {:.6}",
                RunPhase::Running,
                gen + 1,
                config.n_iterations,
                swarm.flame.fitness
            );
        }
        debug!("mfo: {}", RunPhase::Completed);

        let report = TuneReport::from_flame(&swarm.flame.moth, swarm.flame.fitness);
        info!(
            "mfo: {} {} accuracy {:.6} after {} evaluations",
            RunPhase::Reported,
            report.params(),
            report.accuracy,
            objective.calls()
        );

        Ok(MfoResult {
            best: swarm.flame.moth,
            best_fitness: swarm.flame.fitness,
            report,
            generations: config.n_iterations,
            evaluations: objective.calls(),
            improvements,
            fitness_history,
        })
    }
}

#[cfg(feature = "parallel")]
fn use_parallel(config: &MfoConfig) -> bool {
    config.parallel
}

#[cfg(not(feature = "parallel"))]
fn use_parallel(config: &MfoConfig) -> bool {
    if config.parallel {
        warn!("mfo: parallel evaluation requested but the `parallel` feature is disabled; running sequentially");
    }
    false
}

// ============================================================================
// Tests
// ============================================================================
