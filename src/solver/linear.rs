use {
    super::{sat::solve_clauses, SessionIF, SolveIF},
    crate::{
        constraint::{LinearConstraint, LinearExpr, LinearSystem},
        pb,
        types::{Lit, Result},
        var::{IntVar, VarPool},
    },
    tracing::{debug, trace},
};

/// Session over a linear system.
///
/// Every integer variable `v` in `lo..=hi` becomes `hi - lo` order bits
/// `b_1 >= b_2 >= ...` with `v = lo + sum(b_k)`, and every linear constraint
/// over integers becomes a pseudo-Boolean constraint over those bits.
#[derive(Debug)]
pub struct LinearSession {
    pool: VarPool,
    clauses: Vec<Vec<i32>>,
    lower: Vec<i64>,
    bits: Vec<Vec<Lit>>,
    model: Option<Vec<bool>>,
    queries: usize,
}

impl LinearSession {
    /// # Errors
    ///
    /// `ChvatalError::PbEncoding` if a constraint cannot be lowered.
    pub fn new(system: &LinearSystem) -> Result<Self> {
        let mut pool = VarPool::default();
        let mut clauses = Vec::new();
        let mut lower = Vec::with_capacity(system.vars().len());
        let mut bits = Vec::with_capacity(system.vars().len());
        for decl in system.vars() {
            if decl.upper < decl.lower {
                clauses.push(vec![]);
            }
            let b = (0..decl.width())
                .map(|_| pool.new_var())
                .collect::<Vec<_>>();
            for w in b.windows(2) {
                clauses.push(vec![i32::from(!w[1]), i32::from(w[0])]);
            }
            lower.push(decl.lower);
            bits.push(b);
        }
        let mut session = LinearSession {
            pool,
            clauses,
            lower,
            bits,
            model: None,
            queries: 0,
        };
        for c in system.constraints() {
            let encoded = session.lower_constraint(c, None)?;
            if encoded.iter().any(|c| c.is_empty()) {
                trace!(constraint = %system.render(c), "unsatisfiable by itself");
            }
            session.clauses.extend(encoded);
        }
        debug!(
            num_int_vars = system.vars().len(),
            num_constraints = system.constraints().len(),
            num_vars = session.pool.num_vars(),
            num_clauses = session.clauses.len(),
            "open linear session"
        );
        Ok(session)
    }
    /// Encode `c` over order bits, drawing auxiliaries from `pool` or from
    /// the session's own pool.
    fn lower_constraint(
        &mut self,
        c: &LinearConstraint<IntVar>,
        pool: Option<&mut VarPool>,
    ) -> Result<Vec<Vec<i32>>> {
        let mut offset = 0;
        let mut terms = Vec::new();
        for (a, v) in c.expr.terms.iter() {
            offset += a * self.lower[v.index()];
            terms.extend(self.bits[v.index()].iter().map(|b| (*a, *b)));
        }
        let mut lowered = LinearConstraint {
            expr: LinearExpr {
                terms,
                constant: c.expr.constant + offset,
            },
            cmp: c.cmp,
            rhs: c.rhs,
        };
        lowered.expr.terms.retain(|(a, _)| *a != 0);
        match pool {
            Some(p) => pb::encode(&lowered, p),
            None => pb::encode(&lowered, &mut self.pool),
        }
    }
}

impl SessionIF for LinearSession {
    type Var = IntVar;
    fn check(&mut self, assumptions: &[LinearConstraint<IntVar>]) -> Result<bool> {
        self.queries += 1;
        let mut pool = self.pool.clone();
        let mut clauses = self.clauses.clone();
        for a in assumptions {
            clauses.extend(self.lower_constraint(a, Some(&mut pool))?);
        }
        self.model = solve_clauses(&clauses)?;
        debug!(
            query = self.queries,
            satisfiable = self.model.is_some(),
            "check"
        );
        Ok(self.model.is_some())
    }
    fn value(&self, v: IntVar) -> Option<i64> {
        let model = self.model.as_ref()?;
        let mut value = *self.lower.get(v.index())?;
        for b in self.bits[v.index()].iter() {
            if b.under(model.get(b.var() as usize - 1).copied().unwrap_or(false)) {
                value += 1;
            }
        }
        Some(value)
    }
    fn num_queries(&self) -> usize {
        self.queries
    }
}

impl Drop for LinearSession {
    fn drop(&mut self) {
        debug!(queries = self.queries, "close linear session");
    }
}

impl SolveIF for LinearSystem {
    type Session = LinearSession;
    fn open_session(&self) -> Result<LinearSession> {
        LinearSession::new(self)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::constraint::ConstraintSinkIF};

    #[test]
    fn integers_take_their_range() {
        let mut sys = LinearSystem::default();
        let z = sys.new_int_var("z".to_string(), 2, 6);
        let x = sys.new_int_var("x".to_string(), 0, 1);
        sys.linear(LinearExpr::term(z).add_term(3, x).ge(6)).unwrap();
        let mut session = sys.open_session().unwrap();
        assert!(session.check(&[LinearExpr::term(x).eq(0)]).unwrap());
        assert_eq!(session.value(z), Some(6));
        assert!(!session.check(&[LinearExpr::term(z).le(2)]).unwrap());
        assert!(session.check(&[LinearExpr::term(z).eq(4)]).unwrap());
        assert_eq!(session.value(z), Some(4));
        assert_eq!(session.value(x), Some(1));
        assert!(!session.check(&[LinearExpr::term(z).gt(6)]).unwrap());
        assert_eq!(session.num_queries(), 4);
    }

    #[test]
    fn constant_constraints() {
        let mut sys = LinearSystem::default();
        sys.linear(LinearExpr::<IntVar>::default().ge(1)).unwrap();
        let mut session = sys.open_session().unwrap();
        assert!(!session.check(&[]).unwrap());
        let mut sys = LinearSystem::default();
        sys.linear(LinearExpr::<IntVar>::default().offset(1).ge(1)).unwrap();
        assert!(sys.open_session().unwrap().check(&[]).unwrap());
    }
}
