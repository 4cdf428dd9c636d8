//! Constraint sinks and the builder emitting the constraint families into them.
//!
//! A formulation is written once against `ConstraintSinkIF` and built either as a
//! `LinearSystem` (integer variables, linear constraints) or a `ClauseSet`
//! (boolean literals, clauses).

/// constraint family emitters
pub mod builder;
/// the boolean sink
pub mod clause;
/// linear expressions and the integer sink
pub mod linear;

pub use self::{
    builder::{build, FamilyCounts},
    clause::ClauseSet,
    linear::{Cmp, LinearConstraint, LinearExpr, LinearSystem},
};

use {
    crate::types::{ChvatalError, Flavor, Result, Role},
    std::{fmt, path::Path},
};

/// API to receive the variables and constraints of a formulation.
///
/// Every method call adds zero or more constraints; `constraint_count` is the
/// number of primitive constraints held, i.e. linear constraints for the
/// integer flavor and clauses for the boolean one.
pub trait ConstraintSinkIF {
    type Var: Copy + fmt::Debug;
    const FLAVOR: Flavor;
    /// a fresh 0/1 variable for `role` at subset index `s`.
    fn new_family_var(&mut self, role: Role, s: usize) -> Self::Var;
    /// a fresh integer variable in `0..=ceiling`, if the flavor has integers.
    fn new_bound_var(&mut self, ceiling: i64) -> Option<Self::Var>;
    /// `lower <= v (<= upper)`
    fn domain(&mut self, v: Self::Var, lower: i64, upper: Option<i64>);
    /// `premise -> conclusion`
    fn implies(&mut self, premise: Self::Var, conclusion: Self::Var);
    /// `a + b <= 1`
    fn at_most_one(&mut self, a: Self::Var, b: Self::Var);
    fn fix(&mut self, v: Self::Var, value: bool);
    /// # Errors
    ///
    /// `ChvatalError::PbEncoding` if a boolean sink cannot lower `c` to clauses.
    fn linear(&mut self, c: LinearConstraint<Self::Var>) -> Result<()>;
    fn constraint_count(&self) -> usize;
    /// write the constraint set to `path` in DIMACS CNF.
    ///
    /// # Errors
    ///
    /// `ChvatalError::UnsupportedOperation` unless the set is a clause set.
    fn export_dimacs(&self, path: &Path) -> Result<()> {
        Err(ChvatalError::UnsupportedOperation(format!(
            "no DIMACS form for a {} constraint set (asked for {})",
            Self::FLAVOR,
            path.display()
        )))
    }
}
