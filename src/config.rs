//! Run configuration.
use {crate::formulation::Variant, std::path::PathBuf};

/// Parameters of a single formulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    //
    //## what to check
    //
    pub formulation: Variant,
    /// size of the ground set
    pub n: i64,

    //
    //## what to do with it
    //
    /// build only, or also consult the solver
    pub should_solve: bool,
    /// write the clauses of a SAT variant to this file
    pub dimacs_file: Option<PathBuf>,
    /// also look for a counterexample in a satisfying model
    pub extract_counterexample: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            formulation: Variant::InfSat,
            n: 0,
            should_solve: true,
            dimacs_file: None,
            extract_counterexample: true,
        }
    }
}

impl Config {
    pub fn new(formulation: Variant, n: i64) -> Config {
        Config {
            formulation,
            n,
            ..Config::default()
        }
    }
    pub fn build_only(mut self) -> Config {
        self.should_solve = false;
        self
    }
    pub fn with_dimacs_file<P: Into<PathBuf>>(mut self, path: P) -> Config {
        self.dimacs_file = Some(path.into());
        self
    }
}
