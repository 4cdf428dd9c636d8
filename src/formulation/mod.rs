//! The six formulations and the pipeline running them:
//! setup, allocate, build, decide, report.

/// "a counterexample exists" as a satisfiability question
pub mod infeasibility;
/// "the best star is not smaller than the intersecting family" as two queries
pub mod optimization;

pub use self::{infeasibility::Infeasibility, optimization::Optimization};

use {
    crate::{
        config::Config,
        constraint::{build, ClauseSet, ConstraintSinkIF, FamilyCounts, LinearSystem},
        ground::{GroundSet, SubsetIndex},
        result::{Counterexample, FormulationResult, Verdict},
        solver::{SessionIF, SolveIF},
        types::{ChvatalError, Families, Flavor, Result},
        var::FamilyVars,
    },
    std::{fmt, str::FromStr, time::Instant},
    tracing::{debug, info, info_span},
};

/// A built formulation: the constraint set and the variables in it.
#[derive(Debug)]
pub struct Encoded<S: ConstraintSinkIF> {
    pub sink: S,
    pub vars: FamilyVars<S::Var>,
    pub counts: FamilyCounts,
}

/// What `decide` found.
#[derive(Clone, Debug, PartialEq)]
pub struct Decision {
    pub verdict: Verdict,
    pub counterexample: Option<Counterexample>,
}

/// API shared by every formulation.
pub trait FormulationIF {
    type Sink: SolveIF + Default;
    fn name(&self) -> &'static str;
    fn families(&self) -> Families;
    /// allocate variables and emit the families into a fresh sink.
    fn build(&self, index: &SubsetIndex) -> Result<Encoded<Self::Sink>> {
        let mut sink = Self::Sink::default();
        let (vars, counts) = build(&mut sink, index, self.families())?;
        Ok(Encoded { sink, vars, counts })
    }
    /// query the session and interpret the answers.
    fn decide(
        &self,
        index: &SubsetIndex,
        encoded: &Encoded<Self::Sink>,
        session: &mut <Self::Sink as SolveIF>::Session,
    ) -> Result<Decision>;
}

/// Run `formulation` as configured by `config`.
pub fn run<F: FormulationIF>(formulation: &F, config: &Config) -> Result<FormulationResult> {
    let name = formulation.name();
    let ground = GroundSet::new(config.n)?;
    let span = info_span!("run", formulation = name, n = ground.len());
    let _guard = span.enter();
    if config.dimacs_file.is_some() && <F::Sink as ConstraintSinkIF>::FLAVOR != Flavor::Sat {
        return Err(ChvatalError::UnsupportedOperation(format!(
            "{name} is not a SAT formulation and has no DIMACS form"
        )));
    }
    let index = ground.power_set();
    let encoded = formulation.build(&index)?;
    let constraint_count = encoded.sink.constraint_count();
    info!(constraint_count, "built");
    if let Some(path) = config.dimacs_file.as_deref() {
        encoded.sink.export_dimacs(path)?;
        info!(path = %path.display(), "exported");
    }
    if !config.should_solve {
        debug!("not solving");
        return Ok(FormulationResult::new(
            name,
            ground.len(),
            Verdict::Unsolved,
            constraint_count,
            None,
        ));
    }
    let mut session = encoded.sink.open_session()?;
    let start = Instant::now();
    let decision = formulation.decide(&index, &encoded, &mut session)?;
    let elapsed = start.elapsed();
    drop(session);
    info!(verdict = %decision.verdict, runtime = elapsed.as_secs_f64(), "decided");
    let counterexample = if config.extract_counterexample {
        decision.counterexample
    } else {
        None
    };
    Ok(FormulationResult::new(
        name,
        ground.len(),
        decision.verdict,
        constraint_count,
        Some(elapsed),
    )
    .with_counterexample(counterexample))
}

/// Read `Y`, `X` and `z` off the model of the last satisfiable check.
///
/// `y` of the empty set is left free by every family, so `Y` is read over
/// the nonempty sets only.
pub fn read_counterexample<T: SessionIF>(
    session: &T,
    index: &SubsetIndex,
    vars: &FamilyVars<T::Var>,
) -> Option<Counterexample> {
    let mut intersecting = Vec::new();
    for s in index.nonempty() {
        if session.value(vars.y[s])? != 0 {
            intersecting.push(index.subset(s).elements());
        }
    }
    let mut generators = Vec::new();
    for s in index.indices() {
        if session.value(vars.x[s])? != 0 {
            generators.push(index.subset(s).elements());
        }
    }
    let bound = match vars.z {
        Some(z) => Some(session.value(z)?),
        None => None,
    };
    Some(Counterexample {
        intersecting,
        generators,
        bound,
    })
}

/// The six formulations by name.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Variant {
    /// SMT infeasibility model
    Inf,
    /// SMT infeasibility model with reductions
    InfRed,
    /// SMT optimization model
    Opt,
    /// SMT optimization model with reductions and the cardinality bound
    OptRed,
    /// SAT infeasibility model
    InfSat,
    /// SAT infeasibility model with reductions
    InfSatRed,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Inf,
        Variant::InfRed,
        Variant::Opt,
        Variant::OptRed,
        Variant::InfSat,
        Variant::InfSatRed,
    ];
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Inf => "inf",
            Variant::InfRed => "inf_red",
            Variant::Opt => "opt",
            Variant::OptRed => "opt_red",
            Variant::InfSat => "inf_sat",
            Variant::InfSatRed => "inf_sat_red",
        }
    }
    pub fn flavor(&self) -> Flavor {
        match self {
            Variant::InfSat | Variant::InfSatRed => Flavor::Sat,
            _ => Flavor::Smt,
        }
    }
    pub fn is_reduced(&self) -> bool {
        matches!(self, Variant::InfRed | Variant::OptRed | Variant::InfSatRed)
    }
    /// Build, and unless `config.should_solve` is off, decide this formulation
    /// for `config.n`. `config.formulation` is ignored.
    pub fn run(&self, config: &Config) -> Result<FormulationResult> {
        let reduced = self.is_reduced();
        match self {
            Variant::Inf | Variant::InfRed => {
                run(&Infeasibility::<LinearSystem>::new(reduced), config)
            }
            Variant::InfSat | Variant::InfSatRed => {
                run(&Infeasibility::<ClauseSet>::new(reduced), config)
            }
            Variant::Opt | Variant::OptRed => run(&Optimization::new(reduced), config),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Variant {
    type Err = ChvatalError;
    fn from_str(s: &str) -> Result<Self> {
        Variant::ALL
            .iter()
            .find(|v| v.name() == s)
            .copied()
            .ok_or_else(|| {
                let names = Variant::ALL.map(|v| v.name()).join(", ");
                ChvatalError::InvalidArgument(format!(
                    "unknown formulation '{s}', expected one of {names}"
                ))
            })
    }
}

/// Run `config.formulation` as configured.
pub fn check(config: &Config) -> Result<FormulationResult> {
    config.formulation.run(config)
}
