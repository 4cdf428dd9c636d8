//! Clauses over DIMACS literals (the SAT flavor).
use {
    super::{ConstraintSinkIF, LinearConstraint},
    crate::{
        pb,
        types::{i32s, Flavor, Lit, Result, Role},
        var::VarPool,
    },
};

#[cfg(feature = "dimacs")]
use std::path::Path;

/// The SAT-flavored constraint set. Clauses are kept in emission order,
/// duplicates included; auxiliary variables of cardinality constraints are
/// drawn from the same pool as the family variables.
#[derive(Clone, Debug, Default)]
pub struct ClauseSet {
    pool: VarPool,
    clauses: Vec<Vec<i32>>,
}

impl ClauseSet {
    pub fn add_clause(&mut self, lits: &[Lit]) {
        self.clauses.push(i32s(lits));
    }
    pub fn clauses(&self) -> &[Vec<i32>] {
        &self.clauses
    }
    pub fn num_vars(&self) -> u32 {
        self.pool.num_vars()
    }
    pub fn pool(&self) -> &VarPool {
        &self.pool
    }
}

impl ConstraintSinkIF for ClauseSet {
    type Var = Lit;
    const FLAVOR: Flavor = Flavor::Sat;
    fn new_family_var(&mut self, _role: Role, _s: usize) -> Lit {
        self.pool.new_var()
    }
    fn new_bound_var(&mut self, _ceiling: i64) -> Option<Lit> {
        None
    }
    fn domain(&mut self, _v: Lit, _lower: i64, _upper: Option<i64>) {}
    fn implies(&mut self, premise: Lit, conclusion: Lit) {
        self.add_clause(&[conclusion, !premise]);
    }
    fn at_most_one(&mut self, a: Lit, b: Lit) {
        self.add_clause(&[!a, !b]);
    }
    fn fix(&mut self, v: Lit, value: bool) {
        self.add_clause(&[if value { v } else { !v }]);
    }
    fn linear(&mut self, c: LinearConstraint<Lit>) -> Result<()> {
        let encoded = pb::encode(&c, &mut self.pool)?;
        self.clauses.extend(encoded);
        Ok(())
    }
    fn constraint_count(&self) -> usize {
        self.clauses.len()
    }
    #[cfg(feature = "dimacs")]
    fn export_dimacs(&self, path: &Path) -> Result<()> {
        crate::export::save(self, path)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::constraint::LinearExpr};

    #[test]
    fn family_facts_are_clauses() {
        let mut set = ClauseSet::default();
        let x = set.new_family_var(Role::Generator, 0);
        let y = set.new_family_var(Role::Intersecting, 0);
        set.implies(y, x);
        set.at_most_one(x, y);
        set.fix(x, true);
        set.fix(y, false);
        assert_eq!(set.clauses(), &[vec![1, -2], vec![-1, -2], vec![1], vec![-2]]);
    }

    #[test]
    fn unsatisfiable_bound_is_an_empty_clause() {
        let mut set = ClauseSet::default();
        set.linear(LinearExpr::<Lit>::default().ge(1)).unwrap();
        assert_eq!(set.clauses(), &[Vec::<i32>::new()]);
        assert_eq!(set.constraint_count(), 1);
    }

    #[test]
    fn cardinality_draws_auxiliaries_from_the_pool() {
        let mut set = ClauseSet::default();
        let v = (0..4)
            .map(|s| set.new_family_var(Role::Generator, s))
            .collect::<Vec<_>>();
        set.linear(LinearExpr::sum(v).le(2)).unwrap();
        assert!(4 < set.num_vars());
        assert!(set
            .clauses()
            .iter()
            .flatten()
            .all(|l| l.unsigned_abs() <= set.num_vars()));
    }
}
