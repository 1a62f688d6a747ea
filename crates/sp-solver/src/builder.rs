//! Fluent builder for constructing a [`Solver`].

use sp_core::SolveRng;

use crate::{SolveError, SolveResult, Solver, SolverConfig};

/// Fluent builder for [`Solver`].
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                          |
/// |-------------------|----------------------------------|
/// | `.seed(s)`        | Seeded from system entropy       |
/// | `.run_duration(d)`| `config.run_duration`            |
///
/// # Example
///
/// ```rust,ignore
/// let mut solver = SolverBuilder::new(SolverConfig::full())
///     .run_duration(Duration::from_secs(5))
///     .seed(42)
///     .build()?;
/// let solution = solver.solve(&problem)?;
/// ```
pub struct SolverBuilder {
    config: SolverConfig,
    seed:   Option<u64>,
}

impl SolverBuilder {
    pub fn new(config: SolverConfig) -> Self {
        Self { config, seed: None }
    }

    /// Seed the solver's random generator for repeatable runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the wall-clock budget of the chosen profile.
    pub fn run_duration(mut self, duration: std::time::Duration) -> Self {
        self.config.run_duration = duration;
        self
    }

    /// Validate the configuration and return a ready-to-run [`Solver`].
    pub fn build(self) -> SolveResult<Solver> {
        let cfg = &self.config;
        for (what, value) in [
            ("group_count", cfg.group_count as usize),
            ("mutation_count", cfg.mutation_count as usize),
            ("sample_size", cfg.sample_size),
        ] {
            if value == 0 {
                return Err(SolveError::Config(format!("{what} must be at least 1")));
            }
        }

        let rng = match self.seed {
            Some(seed) => SolveRng::new(seed),
            None       => SolveRng::from_entropy(),
        };
        Ok(Solver { config: self.config, rng })
    }
}
