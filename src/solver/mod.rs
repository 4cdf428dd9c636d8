//! Solver sessions: one satisfiability backend, opened per formulation run.
//!
//! A session owns the base constraints of a built formulation and answers
//! `check` queries under extra constraints that hold for that query only.
//! It is released when dropped.

/// integer constraints by order encoding onto the SAT backend
pub mod linear;
/// the SAT backend
pub mod sat;

pub use self::{linear::LinearSession, sat::SatSession};

use crate::{
    constraint::{ConstraintSinkIF, LinearConstraint},
    types::Result,
};

/// API for satisfiability queries over a built constraint set.
pub trait SessionIF {
    type Var: Copy;
    /// `true` if the base constraints plus `assumptions` are satisfiable.
    ///
    /// # Errors
    ///
    /// `ChvatalError::SolverFailure` if the backend gives no definite answer.
    fn check(&mut self, assumptions: &[LinearConstraint<Self::Var>]) -> Result<bool>;
    /// value of `v` in the model found by the last satisfiable `check`.
    fn value(&self, v: Self::Var) -> Option<i64>;
    /// number of `check` calls so far
    fn num_queries(&self) -> usize;
}

/// A constraint set that can open a session on itself.
pub trait SolveIF: ConstraintSinkIF {
    type Session: SessionIF<Var = Self::Var>;
    fn open_session(&self) -> Result<Self::Session>;
}
