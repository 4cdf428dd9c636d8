//! Pseudo-Boolean constraints to CNF.
//!
//! A constraint `sum(a_i * l_i) + c  cmp  rhs` over literals is normalized to
//! one or two `sum(a_i * l_i) <= K` with every `a_i > 0`. Bounds that are
//! decided by the normalization alone become empty or unit clauses; the rest
//! go to the generalized totalizer of `rustsat`.
use {
    crate::{
        constraint::{Cmp, LinearConstraint},
        types::{ChvatalError, Lit, Result},
        var::VarPool,
    },
    rustsat::{
        encodings::pb::{BoundUpper, GeneralizedTotalizer},
        instances::Cnf,
    },
    tracing::trace,
};

/// Clauses equivalent to `c` (under projection to the literals of `c`).
///
/// An unsatisfiable constraint gives a single empty clause; a trivially true
/// one gives nothing. Fresh variables are taken from `pool`.
///
/// # Errors
///
/// `ChvatalError::PbEncoding` if the encoder fails.
pub fn encode(c: &LinearConstraint<Lit>, pool: &mut VarPool) -> Result<Vec<Vec<i32>>> {
    let rhs = c.rhs - c.expr.constant;
    let terms = &c.expr.terms;
    let negated = || terms.iter().map(|(a, l)| (-a, *l)).collect::<Vec<_>>();
    let clauses = match c.cmp {
        Cmp::Le => at_most(terms.clone(), rhs, pool)?,
        Cmp::Lt => at_most(terms.clone(), rhs - 1, pool)?,
        Cmp::Ge => at_most(negated(), -rhs, pool)?,
        Cmp::Gt => at_most(negated(), -rhs - 1, pool)?,
        Cmp::Eq => {
            let mut v = at_most(terms.clone(), rhs, pool)?;
            v.extend(at_most(negated(), -rhs, pool)?);
            v
        }
    };
    trace!(
        terms = terms.len(),
        clauses = clauses.len(),
        num_vars = pool.num_vars(),
        "pb"
    );
    Ok(clauses)
}

/// `sum(a_i * l_i) <= k` with arbitrary signed weights.
fn at_most(terms: Vec<(i64, Lit)>, mut k: i64, pool: &mut VarPool) -> Result<Vec<Vec<i32>>> {
    // a * l == |a| * !l - |a| for a < 0
    let mut items = Vec::with_capacity(terms.len());
    for (a, l) in terms {
        match a {
            0 => (),
            a if 0 < a => items.push((a, l)),
            a => {
                k -= a;
                items.push((-a, !l));
            }
        }
    }
    if k < 0 {
        return Ok(vec![vec![]]);
    }
    if items.iter().map(|(a, _)| a).sum::<i64>() <= k {
        return Ok(vec![]);
    }
    let mut clauses = Vec::new();
    // a term heavier than the bound can never be true
    items.retain(|(a, l)| {
        if k < *a {
            clauses.push(vec![i32::from(!*l)]);
            false
        } else {
            true
        }
    });
    if k < items.iter().map(|(a, _)| a).sum::<i64>() {
        clauses.extend(totalizer(&items, k as usize, pool)?);
    }
    Ok(clauses)
}

/// `items` are positive weights not above `k`, `k >= 1`, whose sum exceeds `k`.
fn totalizer(items: &[(i64, Lit)], k: usize, pool: &mut VarPool) -> Result<Vec<Vec<i32>>> {
    let mut gte = items
        .iter()
        .map(|(a, l)| (rustsat::types::Lit::from(*l), *a as usize))
        .collect::<GeneralizedTotalizer>();
    let mut cnf = Cnf::new();
    gte.encode_ub(k..=k, &mut cnf, pool.manager())
        .map_err(|e| ChvatalError::PbEncoding(e.to_string()))?;
    let mut clauses = cnf
        .iter()
        .map(|cl| cl.iter().map(|l| l.to_ipasir()).collect::<Vec<_>>())
        .collect::<Vec<_>>();
    let units = gte
        .enforce_ub(k)
        .map_err(|e| ChvatalError::PbEncoding(e.to_string()))?;
    for unit in units {
        clauses.push(vec![unit.to_ipasir()]);
    }
    Ok(clauses)
}
