//! Linear constraints over integer-valued variables (the SMT flavor).
use {
    super::ConstraintSinkIF,
    crate::{
        types::{Flavor, Result, Role},
        var::{IntVar, IntVarDecl},
    },
    std::fmt,
};

/// comparison of a linear constraint
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cmp {
    Le,
    Lt,
    Eq,
    Ge,
    Gt,
}

impl fmt::Display for Cmp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Cmp::Le => "<=",
            Cmp::Lt => "<",
            Cmp::Eq => "=",
            Cmp::Ge => ">=",
            Cmp::Gt => ">",
        };
        write!(f, "{s}")
    }
}

/// `sum(coeff * var) + constant`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LinearExpr<V> {
    pub terms: Vec<(i64, V)>,
    pub constant: i64,
}

impl<V> Default for LinearExpr<V> {
    fn default() -> Self {
        LinearExpr {
            terms: Vec::new(),
            constant: 0,
        }
    }
}

impl<V> LinearExpr<V> {
    pub fn term(var: V) -> Self {
        LinearExpr {
            terms: vec![(1, var)],
            constant: 0,
        }
    }
    /// the plain sum of `vars`
    pub fn sum<I: IntoIterator<Item = V>>(vars: I) -> Self {
        LinearExpr {
            terms: vars.into_iter().map(|v| (1, v)).collect(),
            constant: 0,
        }
    }
    pub fn add_term(mut self, coeff: i64, var: V) -> Self {
        self.terms.push((coeff, var));
        self
    }
    pub fn plus(mut self, other: LinearExpr<V>) -> Self {
        self.terms.extend(other.terms);
        self.constant += other.constant;
        self
    }
    pub fn minus(self, other: LinearExpr<V>) -> Self {
        self.plus(other.scaled(-1))
    }
    pub fn scaled(mut self, k: i64) -> Self {
        for (c, _) in self.terms.iter_mut() {
            *c *= k;
        }
        self.constant *= k;
        self
    }
    pub fn offset(mut self, k: i64) -> Self {
        self.constant += k;
        self
    }
    /// value under an assignment
    pub fn eval<F: Fn(&V) -> i64>(&self, value: F) -> i64 {
        self.constant + self.terms.iter().map(|(c, v)| c * value(v)).sum::<i64>()
    }
    pub fn compare(self, cmp: Cmp, rhs: i64) -> LinearConstraint<V> {
        LinearConstraint {
            expr: self,
            cmp,
            rhs,
        }
    }
    pub fn le(self, rhs: i64) -> LinearConstraint<V> {
        self.compare(Cmp::Le, rhs)
    }
    pub fn lt(self, rhs: i64) -> LinearConstraint<V> {
        self.compare(Cmp::Lt, rhs)
    }
    pub fn eq(self, rhs: i64) -> LinearConstraint<V> {
        self.compare(Cmp::Eq, rhs)
    }
    pub fn ge(self, rhs: i64) -> LinearConstraint<V> {
        self.compare(Cmp::Ge, rhs)
    }
    pub fn gt(self, rhs: i64) -> LinearConstraint<V> {
        self.compare(Cmp::Gt, rhs)
    }
}

/// `expr cmp rhs`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LinearConstraint<V> {
    pub expr: LinearExpr<V>,
    pub cmp: Cmp,
    pub rhs: i64,
}

impl<V> LinearConstraint<V> {
    pub fn holds<F: Fn(&V) -> i64>(&self, value: F) -> bool {
        let lhs = self.expr.eval(value);
        match self.cmp {
            Cmp::Le => lhs <= self.rhs,
            Cmp::Lt => lhs < self.rhs,
            Cmp::Eq => lhs == self.rhs,
            Cmp::Ge => lhs >= self.rhs,
            Cmp::Gt => lhs > self.rhs,
        }
    }
}

/// The SMT-flavored constraint set: bounded integer variables and linear
/// constraints over them.
#[derive(Clone, Debug, Default)]
pub struct LinearSystem {
    vars: Vec<IntVarDecl>,
    constraints: Vec<LinearConstraint<IntVar>>,
}

impl LinearSystem {
    /// declare an integer variable ranging over `lower..=upper`.
    /// No constraint is emitted.
    pub fn new_int_var(&mut self, name: String, lower: i64, upper: i64) -> IntVar {
        let v = IntVar::new(self.vars.len());
        self.vars.push(IntVarDecl { name, lower, upper });
        v
    }
    pub fn decl(&self, v: IntVar) -> &IntVarDecl {
        &self.vars[v.index()]
    }
    pub fn vars(&self) -> &[IntVarDecl] {
        &self.vars
    }
    pub fn constraints(&self) -> &[LinearConstraint<IntVar>] {
        &self.constraints
    }
    /// human readable form, e.g. `y3 + -1*x1 <= 0`
    pub fn render(&self, c: &LinearConstraint<IntVar>) -> String {
        let mut lhs = c
            .expr
            .terms
            .iter()
            .map(|(k, v)| match k {
                1 => self.decl(*v).name.clone(),
                _ => format!("{k}*{}", self.decl(*v).name),
            })
            .collect::<Vec<_>>();
        if c.expr.constant != 0 || lhs.is_empty() {
            lhs.push(c.expr.constant.to_string());
        }
        format!("{} {} {}", lhs.join(" + "), c.cmp, c.rhs)
    }
}

impl ConstraintSinkIF for LinearSystem {
    type Var = IntVar;
    const FLAVOR: Flavor = Flavor::Smt;
    fn new_family_var(&mut self, role: Role, s: usize) -> IntVar {
        self.new_int_var(format!("{}{s}", role.prefix()), 0, 1)
    }
    fn new_bound_var(&mut self, ceiling: i64) -> Option<IntVar> {
        Some(self.new_int_var("z".to_string(), 0, ceiling))
    }
    fn domain(&mut self, v: IntVar, lower: i64, upper: Option<i64>) {
        self.constraints.push(LinearExpr::term(v).ge(lower));
        if let Some(u) = upper {
            self.constraints.push(LinearExpr::term(v).le(u));
        }
    }
    fn implies(&mut self, premise: IntVar, conclusion: IntVar) {
        self.constraints
            .push(LinearExpr::term(premise).add_term(-1, conclusion).le(0));
    }
    fn at_most_one(&mut self, a: IntVar, b: IntVar) {
        self.constraints.push(LinearExpr::sum([a, b]).le(1));
    }
    fn fix(&mut self, v: IntVar, value: bool) {
        self.constraints.push(LinearExpr::term(v).eq(value as i64));
    }
    fn linear(&mut self, c: LinearConstraint<IntVar>) -> Result<()> {
        self.constraints.push(c);
        Ok(())
    }
    fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}
