//! Module `types` provides various building blocks, including
//! the error type and the small value types shared by every builder.

/// constraint family selector
pub mod flags;
/// boolean literals in DIMACS numbering
pub mod lit;

pub use self::{flags::*, lit::*};

use std::fmt;

/// The two semantic roles of a per-subset decision variable.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Role {
    /// membership in the downset generator family (`x`)
    Generator,
    /// membership in the intersecting family (`y`)
    Intersecting,
}

impl Role {
    pub fn prefix(&self) -> char {
        match self {
            Role::Generator => 'x',
            Role::Intersecting => 'y',
        }
    }
}

/// Which kind of constraint sink a formulation is built against.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Flavor {
    /// integer variables and linear inequalities
    Smt,
    /// boolean literals and clauses
    Sat,
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Flavor::Smt => write!(f, "SMT"),
            Flavor::Sat => write!(f, "SAT"),
        }
    }
}

/// Errors of a single formulation run. None of them is retried.
#[derive(Debug, thiserror::Error)]
pub enum ChvatalError {
    /// a negative or oversized `n`, or an unknown formulation name
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// a valid formulation asked for something it has no form for
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
    /// the solver could not be opened or returned neither SAT nor UNSAT
    #[error("solver failure: {0}")]
    SolverFailure(String),
    /// the optimization queries returned a combination no objective value explains
    #[error(
        "encoding inconsistency: objective query feasible={zero_feasible}, \
         positive objective feasible={positive_feasible}"
    )]
    EncodingInconsistency {
        zero_feasible: bool,
        positive_feasible: bool,
    },
    /// the pseudo-Boolean encoder rejected a constraint
    #[error("pseudo-Boolean encoding failed: {0}")]
    PbEncoding(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "dimacs")]
    #[error("DIMACS error: {0}")]
    Dimacs(#[from] chvatal_cnf::CnfError),
}

impl ChvatalError {
    /// `true` for mistakes in what the caller asked for, as opposed to
    /// failures while answering it.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ChvatalError::InvalidArgument(_) | ChvatalError::UnsupportedOperation(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ChvatalError>;
