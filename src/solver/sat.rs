use {
    super::{SessionIF, SolveIF},
    crate::{
        constraint::{ClauseSet, LinearConstraint},
        pb,
        types::{ChvatalError, Lit, Result},
        var::VarPool,
    },
    splr::Certificate,
    tracing::{debug, trace},
};

/// Run the SAT engine on `clauses`; `Some(model)` iff satisfiable.
/// The model maps variable `v` to `model[v - 1]`.
///
/// # Errors
///
/// `ChvatalError::SolverFailure` if the engine stops without an answer.
pub fn solve_clauses(clauses: &[Vec<i32>]) -> Result<Option<Vec<bool>>> {
    if clauses.iter().any(|c| c.is_empty()) {
        trace!("empty clause");
        return Ok(None);
    }
    let num_vars = clauses
        .iter()
        .flatten()
        .map(|l| l.unsigned_abs())
        .max()
        .unwrap_or(0) as usize;
    if num_vars == 0 {
        return Ok(Some(vec![]));
    }
    match Certificate::try_from(clauses.to_vec()) {
        Ok(Certificate::SAT(assignment)) => {
            let mut model = vec![false; num_vars];
            for l in assignment {
                let v = l.unsigned_abs() as usize;
                if 0 < v && v <= num_vars {
                    model[v - 1] = 0 < l;
                }
            }
            Ok(Some(model))
        }
        Ok(Certificate::UNSAT) => Ok(None),
        Err(e) => Err(ChvatalError::SolverFailure(format!("{e:?}"))),
    }
}

/// Session over a clause set.
#[derive(Debug)]
pub struct SatSession {
    pool: VarPool,
    clauses: Vec<Vec<i32>>,
    model: Option<Vec<bool>>,
    queries: usize,
}

impl SatSession {
    pub fn new(set: &ClauseSet) -> Self {
        debug!(
            num_vars = set.num_vars(),
            num_clauses = set.clauses().len(),
            "open SAT session"
        );
        SatSession {
            pool: set.pool().clone(),
            clauses: set.clauses().to_vec(),
            model: None,
            queries: 0,
        }
    }
}

impl SessionIF for SatSession {
    type Var = Lit;
    fn check(&mut self, assumptions: &[LinearConstraint<Lit>]) -> Result<bool> {
        self.queries += 1;
        let mut pool = self.pool.clone();
        let mut clauses = self.clauses.clone();
        for a in assumptions {
            clauses.extend(pb::encode(a, &mut pool)?);
        }
        self.model = solve_clauses(&clauses)?;
        debug!(
            query = self.queries,
            satisfiable = self.model.is_some(),
            "check"
        );
        Ok(self.model.is_some())
    }
    fn value(&self, l: Lit) -> Option<i64> {
        let model = self.model.as_ref()?;
        let v = model.get(l.var() as usize - 1).copied().unwrap_or(false);
        Some(l.under(v) as i64)
    }
    fn num_queries(&self) -> usize {
        self.queries
    }
}

impl Drop for SatSession {
    fn drop(&mut self) {
        debug!(queries = self.queries, "close SAT session");
    }
}

impl SolveIF for ClauseSet {
    type Session = SatSession;
    fn open_session(&self) -> Result<SatSession> {
        Ok(SatSession::new(self))
    }
}
