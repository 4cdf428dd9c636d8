//! Machine-checks Chvátal's conjecture on a fixed ground set.
//!
//! A family `F` of subsets of `[n]` is a downset if it is closed under taking
//! subsets. The conjecture says that no intersecting subfamily of a downset
//! is larger than the largest star `{A in F | i in A}`. For each `n` we build
//! a constraint system whose solutions are exactly the counterexamples (or
//! whose optimum is the best margin a counterexample could have), and ask a
//! SAT solver about it.
//!
//! ```
//! use chvatal::{check, Config, Variant};
//! let result = check(&Config::new(Variant::InfSat, 3)).unwrap();
//! assert!(result.does_conjecture_hold);
//! ```

/// Module `config` provides the run parameters.
pub mod config;
/// Module `constraint` provides the sinks and the family builder.
pub mod constraint;
/// DIMACS output
#[cfg(feature = "dimacs")]
pub mod export;
/// Module `formulation` provides the six formulations and their pipeline.
pub mod formulation;
/// ground set and power set indexing
pub mod ground;
/// pseudo-Boolean constraints to clauses
pub mod pb;
/// verdicts and result records
pub mod result;
/// Module `solver` provides the solver sessions.
pub mod solver;
/// Module `types` provides the error type and shared value types.
pub mod types;
/// variable allocation
pub mod var;

pub use {
    config::Config,
    formulation::{check, Variant},
    ground::{GroundSet, Subset, SubsetIndex, MAX_GROUND_SET},
    result::{Counterexample, FormulationResult, Verdict, NOT_SOLVED},
    types::{ChvatalError, Result},
};

/// version number
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
