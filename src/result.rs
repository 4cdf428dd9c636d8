//! Outcome of a formulation run.
use {
    crate::types::{ChvatalError, Result},
    serde::Serialize,
    std::{fmt, time::Duration},
};

/// `runtime` of a run that was built but not solved
pub const NOT_SOLVED: f64 = -1.0;

/// What a run concluded about the conjecture for its `n`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Holds,
    Fails,
    /// the solver was not consulted
    Unsolved,
}

impl Verdict {
    /// A counterexample exists iff the infeasibility model is satisfiable.
    pub fn from_infeasibility(satisfiable: bool) -> Verdict {
        if satisfiable {
            Verdict::Fails
        } else {
            Verdict::Holds
        }
    }
    /// Interpret the two optimization queries: is an objective value of zero
    /// (or less, for the reduced model) feasible, and is a positive one.
    ///
    /// # Errors
    ///
    /// `ChvatalError::EncodingInconsistency` if neither query is feasible, or
    /// only the positive one is.
    pub fn from_optimization(zero_feasible: bool, positive_feasible: bool) -> Result<Verdict> {
        match (zero_feasible, positive_feasible) {
            (true, false) => Ok(Verdict::Holds),
            (true, true) => Ok(Verdict::Fails),
            _ => Err(ChvatalError::EncodingInconsistency {
                zero_feasible,
                positive_feasible,
            }),
        }
    }
    /// `Unsolved` reports `false`, which is not a refutation.
    pub fn does_conjecture_hold(&self) -> bool {
        matches!(self, Verdict::Holds)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Verdict::Holds => write!(f, "holds"),
            Verdict::Fails => write!(f, "fails"),
            Verdict::Unsolved => write!(f, "unsolved"),
        }
    }
}

/// A family pair refuting the conjecture, read from a satisfying model.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Counterexample {
    /// the intersecting family `Y`, each set as its sorted elements
    pub intersecting: Vec<Vec<usize>>,
    /// the generators `X` of the downset
    pub generators: Vec<Vec<usize>>,
    /// the star bound `z`, for the optimization model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bound: Option<i64>,
}

/// Record of one run. `runtime` is the time spent solving in seconds, or
/// `NOT_SOLVED`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FormulationResult {
    pub name: String,
    pub n: usize,
    pub does_conjecture_hold: bool,
    pub constraint_count: usize,
    pub runtime: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterexample: Option<Counterexample>,
}

impl FormulationResult {
    pub fn new(
        name: &str,
        n: usize,
        verdict: Verdict,
        constraint_count: usize,
        runtime: Option<Duration>,
    ) -> Self {
        let runtime = match (verdict, runtime) {
            (Verdict::Unsolved, _) | (_, None) => NOT_SOLVED,
            (_, Some(d)) => d.as_secs_f64(),
        };
        FormulationResult {
            name: name.to_string(),
            n,
            does_conjecture_hold: verdict.does_conjecture_hold(),
            constraint_count,
            runtime,
            counterexample: None,
        }
    }
    pub fn with_counterexample(mut self, counterexample: Option<Counterexample>) -> Self {
        self.counterexample = counterexample;
        self
    }
    pub fn is_solved(&self) -> bool {
        0.0 <= self.runtime
    }
}

impl fmt::Display for FormulationResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "FormulationResult(name='{}', n={}, does_conjecture_hold={}, constraint_count={}, runtime={})",
            self.name,
            self.n,
            if self.does_conjecture_hold { "True" } else { "False" },
            self.constraint_count,
            self.runtime,
        )
    }
}
