use {
    super::{read_counterexample, Decision, Encoded, FormulationIF},
    crate::{
        constraint::{LinearExpr, LinearSystem},
        ground::SubsetIndex,
        result::Verdict,
        solver::{LinearSession, SessionIF},
        types::{ChvatalError, Families, Result},
        var::IntVar,
    },
    tracing::debug,
};

/// Every star is at most `z`; the objective `|Y| - z` is the margin by which
/// the intersecting family beats the largest star.
///
/// The conjecture holds iff the objective can reach zero but never exceeds
/// it. The reduced model fixes facts that push the optimum below zero for
/// small `n`, so its first query asks for a non-positive objective instead.
#[derive(Clone, Copy, Debug)]
pub struct Optimization {
    reduced: bool,
}

impl Optimization {
    pub fn new(reduced: bool) -> Self {
        Optimization { reduced }
    }
    fn objective(
        index: &SubsetIndex,
        encoded: &Encoded<LinearSystem>,
    ) -> Result<LinearExpr<IntVar>> {
        let z = encoded.vars.z.ok_or_else(|| {
            ChvatalError::SolverFailure("the optimization model has no star bound".to_string())
        })?;
        let members = LinearExpr::sum(index.nonempty().map(|s| encoded.vars.y[s]));
        Ok(members.add_term(-1, z))
    }
}

impl FormulationIF for Optimization {
    type Sink = LinearSystem;
    fn name(&self) -> &'static str {
        if self.reduced {
            "opt_red"
        } else {
            "opt"
        }
    }
    fn families(&self) -> Families {
        if self.reduced {
            Families::OPTIMIZATION | Families::REDUCTION | Families::CARDINALITY
        } else {
            Families::OPTIMIZATION
        }
    }
    fn decide(
        &self,
        index: &SubsetIndex,
        encoded: &Encoded<LinearSystem>,
        session: &mut LinearSession,
    ) -> Result<Decision> {
        let objective = Self::objective(index, encoded)?;
        let attainable = if self.reduced {
            objective.clone().le(0)
        } else {
            objective.clone().eq(0)
        };
        let zero_feasible = session.check(&[attainable])?;
        let positive_feasible = session.check(&[objective.gt(0)])?;
        debug!(zero_feasible, positive_feasible, "objective queries");
        let verdict = Verdict::from_optimization(zero_feasible, positive_feasible)?;
        let counterexample = if positive_feasible {
            read_counterexample(session, index, &encoded.vars)
        } else {
            None
        };
        Ok(Decision {
            verdict,
            counterexample,
        })
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{constraint::ConstraintSinkIF, ground::GroundSet, solver::SolveIF},
    };

    fn decide(reduced: bool, n: i64) -> (Decision, usize) {
        let f = Optimization::new(reduced);
        let index = GroundSet::new(n).unwrap().power_set();
        let encoded = f.build(&index).unwrap();
        let mut session = encoded.sink.open_session().unwrap();
        let decision = f.decide(&index, &encoded, &mut session).unwrap();
        assert_eq!(session.num_queries(), 2);
        (decision, encoded.sink.constraint_count())
    }

    #[test]
    fn empty_ground_set() {
        // Y is empty and z can be 0
        let (d, count) = decide(false, 0);
        assert_eq!(d.verdict, Verdict::Holds);
        assert_eq!(count, 6);
    }

    #[test]
    fn both_models_hold_on_small_ground_sets() {
        for n in 0..=3 {
            assert_eq!(decide(false, n).0.verdict, Verdict::Holds, "opt n={n}");
            assert_eq!(decide(true, n).0.verdict, Verdict::Holds, "opt_red n={n}");
        }
    }

    #[test]
    fn reduced_model_never_reaches_zero_below_five() {
        // the fixed generators make every star larger than any admissible Y
        for n in 1..=4 {
            let f = Optimization::new(true);
            let index = GroundSet::new(n).unwrap().power_set();
            let encoded = f.build(&index).unwrap();
            let objective = Optimization::objective(&index, &encoded).unwrap();
            let mut session = encoded.sink.open_session().unwrap();
            assert!(session.check(&[]).unwrap(), "n={n}");
            assert!(!session.check(&[objective.clone().eq(0)]).unwrap());
            assert!(session.check(&[objective.lt(0)]).unwrap());
        }
    }

    #[test]
    fn reductions_are_consistent_at_four() {
        // every subset of {1,2,3,4} generates, Y holds only its triples and itself
        let f = Optimization::new(true);
        let index = GroundSet::new(4).unwrap().power_set();
        let encoded = f.build(&index).unwrap();
        let mut session = encoded.sink.open_session().unwrap();
        assert!(session.check(&[]).unwrap());
        let ex = read_counterexample(&session, &index, &encoded.vars).unwrap();
        assert_eq!(ex.generators.len(), 16);
        assert!(ex.intersecting.iter().all(|s| 3 <= s.len()));
        assert!(8 <= ex.bound.unwrap());
    }
}
