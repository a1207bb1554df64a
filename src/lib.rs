//! # multibias
//!
//! Multiple-bias sensitivity analysis for observational epidemiologic
//! estimates.
//!
//! This crate quantifies how much unmeasured confounding, selection bias,
//! and/or differential misclassification — singly or jointly — could account
//! for an observed exposure–outcome association, outputting:
//! - The exact sensitivity parameters a declared combination of biases
//!   requires, including ordering effects between selection and
//!   misclassification
//! - A closed-form multiplicative bound on how far biases of specified
//!   magnitudes could shift an observed risk ratio
//! - The multi-bias E-value: the minimum common magnitude all sensitivity
//!   parameters would need to explain the association away
//!
//! ## Quick Start
//!
//! ```ignore
//! use multibias::{
//!     multi_bound, multi_evalue, Bias, BiasSet, Estimate, MisclassificationAxis,
//!     ParamValues, SelectionDirection, SelectionTarget,
//! };
//!
//! // Declare the biases in their assumed order of induction.
//! let set = BiasSet::new(vec![
//!     Bias::confounding(),
//!     Bias::selection(
//!         SelectionTarget::General,
//!         Some(SelectionDirection::IncreasedRisk),
//!         false,
//!     )?,
//!     Bias::misclassification(MisclassificationAxis::Exposure, Some(true), Some(true))?,
//! ])?;
//!
//! // What could biases of these magnitudes do to an observed risk ratio?
//! let bound = multi_bound(
//!     &set,
//!     &ParamValues::new()
//!         .set("RRAUc", 1.5)
//!         .set("RRUcY", 2.0)
//!         .set("RRUsYA1", 2.5)
//!         .set("RRSUsA1", 1.25)
//!         .set("ORYAaS", 1.75),
//! )?;
//!
//! // How strong would they all have to be to explain RR 4 away?
//! let result = multi_evalue(&set, &Estimate::rr_ci(4.0, 2.5, 6.0)?)?;
//! println!("E-value: {:.2}", result.point);
//! ```
//!
//! ## Ordering Matters
//!
//! A [`BiasSet`] is ordered: `selection` before `misclassification` means
//! measurement error happened among the selected (parameters conditional on
//! S = 1), while the reverse order means selection acted on the mismeasured
//! data (parameters in terms of A\* or Y\*). Inspect the derived parameters
//! with [`BiasSet::parameters`] or [`output::terminal::format_parameters`].

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod bias;
mod bound;
mod error;
mod estimate;
mod evaluator;
mod evalue;
mod measure;
mod search;

// Functional modules
pub mod diagnostics;
pub mod output;
pub mod registry;

// Re-exports for public API
pub use bias::{
    Bias, BiasKind, BiasSet, MisclassificationAxis, SelectionDirection, SelectionTarget,
};
pub use bound::{joint_factor, multi_bound, ParamValues};
pub use diagnostics::{DiagnosticSink, MemorySink, NullSink, StderrSink};
pub use error::Error;
pub use estimate::Estimate;
pub use evaluator::Evaluator;
pub use evalue::{multi_evalue, threshold, MultiEvalue};
pub use measure::Measure;
pub use registry::{ParamId, ParamRole, Parameter};
pub use search::SearchConfig;
