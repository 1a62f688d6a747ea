//! Search parameters and the two tuning profiles.

use std::time::Duration;

use sp_problem::Problem;

/// Whether the search scores with the closeness bonus and pillar blocking.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Closeness {
    /// Follow the problem: active iff it has pillars.
    FromProblem,
    /// Score without extensions during search.  The final score still uses
    /// the problem's own rules.
    Off,
}

impl Closeness {
    pub fn resolve(self, problem: &Problem) -> bool {
        match self {
            Closeness::FromProblem => problem.uses_closeness_extension(),
            Closeness::Off         => false,
        }
    }
}

/// Parameters of one solve.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig {
    /// Wall-clock budget for the group search.
    pub run_duration:           Duration,
    /// Listeners scored by the sampled evaluator.
    pub sample_size:            usize,
    /// Random groups per round.
    pub group_count:            u32,
    /// Relocation trials per group per round.
    pub mutation_count:         u32,
    /// Force passes in the initial seeding; resets use up to half.
    pub max_init_steps:         u32,
    /// Fruitless rounds in a row before a reset.
    pub max_consecutive_no_ops: u32,
    pub closeness:              Closeness,
}

impl SolverConfig {
    /// Thorough profile: one minute, 150 sampled listeners.
    pub fn full() -> Self {
        Self {
            run_duration:           Duration::from_secs(60),
            sample_size:            150,
            group_count:            3,
            mutation_count:         10,
            max_init_steps:         100,
            max_consecutive_no_ops: 5,
            closeness:              Closeness::FromProblem,
        }
    }

    /// Quick profile: twenty seconds, 200 sampled listeners, no extensions.
    pub fn lightning() -> Self {
        Self {
            run_duration: Duration::from_secs(20),
            sample_size:  200,
            closeness:    Closeness::Off,
            ..Self::full()
        }
    }

    /// Look up a profile by name (`"full"` or `"lightning"`).
    pub fn profile(name: &str) -> Option<Self> {
        match name {
            "full"      => Some(Self::full()),
            "lightning" => Some(Self::lightning()),
            _           => None,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::full()
    }
}
