//! Solver tuning parameters

/// Default cap on enumerated candidate keys
pub const DEFAULT_MAX_SOLUTIONS: usize = 1000;

/// Default candidate count at or below which recommendation is exhaustive
pub const DEFAULT_EXHAUSTIVE_THRESHOLD: usize = 100;

/// Work bounds for enumeration and recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Stop enumerating once this many candidates have been collected
    pub max_solutions: usize,
    /// Evaluate every probe when the candidate count is at most this value,
    /// otherwise build one balanced probe
    pub exhaustive_threshold: usize,
}

impl SolverConfig {
    /// Create a config with explicit bounds
    #[must_use]
    pub const fn new(max_solutions: usize, exhaustive_threshold: usize) -> Self {
        Self {
            max_solutions,
            exhaustive_threshold,
        }
    }

    #[must_use]
    pub const fn with_max_solutions(mut self, max_solutions: usize) -> Self {
        self.max_solutions = max_solutions;
        self
    }

    #[must_use]
    pub const fn with_exhaustive_threshold(mut self, exhaustive_threshold: usize) -> Self {
        self.exhaustive_threshold = exhaustive_threshold;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SOLUTIONS, DEFAULT_EXHAUSTIVE_THRESHOLD)
    }
}
