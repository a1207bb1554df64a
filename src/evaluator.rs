//! Configurable entry point for bound and E-value computation.

use crate::bias::BiasSet;
use crate::bound::{multi_bound, ParamValues};
use crate::diagnostics::{DiagnosticSink, NullSink};
use crate::error::Error;
use crate::estimate::Estimate;
use crate::evalue::{evalue_impl, MultiEvalue};
use crate::search::SearchConfig;

/// Configurable evaluator for multi-bias bounds and E-values.
///
/// The free functions [`multi_bound`](crate::multi_bound) and
/// [`multi_evalue`](crate::multi_evalue) use the defaults below; build an
/// `Evaluator` to change the true value, the search budget, or where
/// diagnostics go.
///
/// # Example
///
/// ```ignore
/// use multibias::{Bias, BiasSet, Estimate, Evaluator, StderrSink};
///
/// let set = BiasSet::new(vec![Bias::confounding()])?;
/// let result = Evaluator::new()
///     .true_value(1.5)
///     .sink(Box::new(StderrSink))
///     .evalue(&set, &Estimate::rr_ci(3.1, 2.2, 4.4)?)?;
/// ```
pub struct Evaluator {
    search: SearchConfig,
    true_rr: f64,
    sink: Box<dyn DiagnosticSink>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Evaluator with default search configuration, a true risk ratio of 1
    /// (the null), and silent diagnostics.
    pub fn new() -> Evaluator {
        Evaluator {
            search: SearchConfig::default(),
            true_rr: 1.0,
            sink: Box::new(NullSink),
        }
    }

    /// Relative tolerance of the uniform-strength search.
    pub fn tolerance(mut self, tolerance: f64) -> Evaluator {
        self.search.tolerance = tolerance;
        self
    }

    /// Iteration budget of the uniform-strength search.
    pub fn max_iterations(mut self, max_iterations: usize) -> Evaluator {
        self.search.max_iterations = max_iterations;
        self
    }

    /// Largest bias strength the search bracket may expand to.
    pub fn max_strength(mut self, max_strength: f64) -> Evaluator {
        self.search.max_strength = max_strength;
        self
    }

    /// True risk ratio the E-value is computed against (default: 1).
    pub fn true_value(mut self, true_rr: f64) -> Evaluator {
        self.true_rr = true_rr;
        self
    }

    /// Destination for diagnostic messages.
    pub fn sink(mut self, sink: Box<dyn DiagnosticSink>) -> Evaluator {
        self.sink = sink;
        self
    }

    /// The active search configuration.
    pub fn search_config(&self) -> &SearchConfig {
        &self.search
    }

    /// Evaluate the composed bound at explicit parameter values.
    ///
    /// # Errors
    ///
    /// As [`multi_bound`](crate::multi_bound).
    pub fn bound(&self, set: &BiasSet, values: &ParamValues) -> Result<f64, Error> {
        multi_bound(set, values)
    }

    /// Compute multi-bias E-values for an estimate.
    ///
    /// # Errors
    ///
    /// `InvalidEstimate` for a non-positive true value and
    /// `SearchDidNotConverge` when the search budget is exhausted.
    pub fn evalue(&self, set: &BiasSet, estimate: &Estimate) -> Result<MultiEvalue, Error> {
        evalue_impl(set, estimate, self.true_rr, &self.search, self.sink.as_ref())
    }
}

impl std::fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field("search", &self.search)
            .field("true_rr", &self.true_rr)
            .finish_non_exhaustive()
    }
}
