use {
    super::{read_counterexample, Decision, Encoded, FormulationIF},
    crate::{
        constraint::{ClauseSet, LinearSystem},
        ground::SubsetIndex,
        result::Verdict,
        solver::{SessionIF, SolveIF},
        types::{Families, Flavor, Result},
    },
    std::marker::PhantomData,
};

/// Downset, intersecting family and strict star bounds, all at once.
/// The conjecture holds iff this is unsatisfiable.
///
/// Built against `LinearSystem` it is `inf` (or `inf_red`), against
/// `ClauseSet` it is `inf_sat` (or `inf_sat_red`).
#[derive(Clone, Debug)]
pub struct Infeasibility<S> {
    reduced: bool,
    sink: PhantomData<S>,
}

impl<S> Infeasibility<S> {
    pub fn new(reduced: bool) -> Self {
        Infeasibility {
            reduced,
            sink: PhantomData,
        }
    }
}

impl<S: SolveIF + Default> FormulationIF for Infeasibility<S> {
    type Sink = S;
    fn name(&self) -> &'static str {
        match (S::FLAVOR, self.reduced) {
            (Flavor::Smt, false) => "inf",
            (Flavor::Smt, true) => "inf_red",
            (Flavor::Sat, false) => "inf_sat",
            (Flavor::Sat, true) => "inf_sat_red",
        }
    }
    fn families(&self) -> Families {
        if self.reduced {
            Families::INFEASIBILITY | Families::REDUCTION
        } else {
            Families::INFEASIBILITY
        }
    }
    fn decide(
        &self,
        index: &SubsetIndex,
        encoded: &Encoded<S>,
        session: &mut S::Session,
    ) -> Result<Decision> {
        let satisfiable = session.check(&[])?;
        let counterexample = if satisfiable {
            read_counterexample(session, index, &encoded.vars)
        } else {
            None
        };
        Ok(Decision {
            verdict: Verdict::from_infeasibility(satisfiable),
            counterexample,
        })
    }
}

/// `inf`
pub type LinearInfeasibility = Infeasibility<LinearSystem>;
/// `inf_sat`
pub type ClauseInfeasibility = Infeasibility<ClauseSet>;

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            constraint::{build, ConstraintSinkIF},
            ground::GroundSet,
        },
    };

    fn decide<S: SolveIF + Default>(f: &Infeasibility<S>, n: i64) -> (Decision, usize) {
        let index = GroundSet::new(n).unwrap().power_set();
        let encoded = f.build(&index).unwrap();
        let mut session = encoded.sink.open_session().unwrap();
        let decision = f.decide(&index, &encoded, &mut session).unwrap();
        (decision, encoded.sink.constraint_count())
    }

    #[test]
    fn names() {
        assert_eq!(LinearInfeasibility::new(false).name(), "inf");
        assert_eq!(LinearInfeasibility::new(true).name(), "inf_red");
        assert_eq!(ClauseInfeasibility::new(false).name(), "inf_sat");
        assert_eq!(ClauseInfeasibility::new(true).name(), "inf_sat_red");
    }

    #[test]
    fn empty_ground_set_has_no_counterexample() {
        let (d, count) = decide(&LinearInfeasibility::new(false), 0);
        assert_eq!(d.verdict, Verdict::Holds);
        assert_eq!(count, 6);
        let (d, count) = decide(&ClauseInfeasibility::new(false), 0);
        assert_eq!(d.verdict, Verdict::Holds);
        assert!(d.counterexample.is_none());
        assert_eq!(count, 2);
    }

    fn reduced_base_is_satisfiable<S: SolveIF + Default>() {
        let families = Families::DOMAIN
            | Families::DOWNSET
            | Families::INTERSECTING
            | Families::REDUCTION;
        let index = GroundSet::new(4).unwrap().power_set();
        let mut sink = S::default();
        build(&mut sink, &index, families).unwrap();
        let mut session = sink.open_session().unwrap();
        assert!(session.check(&[]).unwrap(), "{}", S::FLAVOR);
    }

    #[test]
    fn reductions_without_the_star_condition_are_satisfiable() {
        reduced_base_is_satisfiable::<LinearSystem>();
        reduced_base_is_satisfiable::<ClauseSet>();
    }

    #[test]
    fn small_ground_sets() {
        for n in 1..=3 {
            for reduced in [false, true] {
                let (d, _) = decide(&LinearInfeasibility::new(reduced), n);
                assert_eq!(d.verdict, Verdict::Holds, "inf n={n} reduced={reduced}");
                let (d, _) = decide(&ClauseInfeasibility::new(reduced), n);
                assert_eq!(d.verdict, Verdict::Holds, "inf_sat n={n} reduced={reduced}");
            }
        }
    }
}
