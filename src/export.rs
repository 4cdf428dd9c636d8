//! DIMACS CNF output of clause sets.
use {
    crate::{constraint::ClauseSet, types::Result},
    chvatal_cnf::{CnfIf, CNF},
    std::path::Path,
    tracing::info,
};

/// the clause set as a `CNF`, clauses in emission order
pub fn to_cnf(set: &ClauseSet) -> Result<CNF> {
    let mut cnf = CNF::with_num_vars(set.num_vars());
    for c in set.clauses() {
        cnf.add_clause(c)?;
    }
    Ok(cnf)
}

/// Write `set` to `path` in DIMACS CNF; an existing file is overwritten.
pub fn save(set: &ClauseSet, path: &Path) -> Result<()> {
    let cnf = to_cnf(set)?;
    cnf.save(path)?;
    info!(path = %path.display(), "{cnf}");
    Ok(())
}
