//! Emit the constraint families of a formulation into a sink.
use {
    super::{ConstraintSinkIF, LinearExpr},
    crate::{
        ground::{Subset, SubsetIndex},
        types::{Families, Result},
        var::FamilyVars,
    },
    std::fmt,
    tracing::debug,
};

/// Number of primitive constraints each family contributed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FamilyCounts {
    pub domain: usize,
    pub downset: usize,
    pub intersecting: usize,
    pub star: usize,
    pub reduction: usize,
    pub cardinality: usize,
}

impl FamilyCounts {
    pub fn total(&self) -> usize {
        self.domain
            + self.downset
            + self.intersecting
            + self.star
            + self.reduction
            + self.cardinality
    }
}

impl fmt::Display for FamilyCounts {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "domain {}, downset {}, intersecting {}, star {}, reduction {}, cardinality {}",
            self.domain,
            self.downset,
            self.intersecting,
            self.star,
            self.reduction,
            self.cardinality,
        )
    }
}

/// Allocate the family variables and emit every family in `families`, in a
/// fixed order: downset, intersecting, star, reduction, cardinality.
///
/// # Errors
///
/// whatever the sink reports for a linear constraint it cannot hold.
pub fn build<S: ConstraintSinkIF>(
    sink: &mut S,
    index: &SubsetIndex,
    families: Families,
) -> Result<(FamilyVars<S::Var>, FamilyCounts)> {
    let mut counts = FamilyCounts::default();
    let vars = FamilyVars::allocate(sink, index, families);
    counts.domain = sink.constraint_count();
    if families.contains(Families::DOWNSET) {
        counts.downset = emit(sink, |s| {
            downset(s, index, &vars);
            Ok(())
        })?;
    }
    if families.contains(Families::INTERSECTING) {
        counts.intersecting = emit(sink, |s| {
            intersecting(s, index, &vars);
            Ok(())
        })?;
    }
    if families.contains(Families::STAR_DIRECT) {
        counts.star += emit(sink, |s| star_direct(s, index, &vars))?;
    }
    if families.contains(Families::STAR_BOUND) {
        counts.star += emit(sink, |s| star_bound(s, index, &vars))?;
    }
    if families.contains(Families::REDUCTION) {
        counts.reduction = emit(sink, |s| {
            reduction(s, index, &vars);
            Ok(())
        })?;
    }
    if families.contains(Families::CARDINALITY) {
        counts.cardinality = emit(sink, |s| cardinality(s, index, &vars))?;
    }
    debug_assert_eq!(counts.total(), sink.constraint_count());
    debug!(flavor = %S::FLAVOR, n = index.ground().len(), "{counts}");
    Ok((vars, counts))
}

fn emit<S: ConstraintSinkIF>(
    sink: &mut S,
    f: impl FnOnce(&mut S) -> Result<()>,
) -> Result<usize> {
    let before = sink.constraint_count();
    f(sink)?;
    Ok(sink.constraint_count() - before)
}

/// `y_t -> x_s` whenever `s` is included in `t`, reflexive pairs included.
fn downset<S: ConstraintSinkIF>(sink: &mut S, index: &SubsetIndex, vars: &FamilyVars<S::Var>) {
    for t in index.indices() {
        for s in index.indices() {
            if index.is_subset(s, t) {
                sink.implies(vars.y[t], vars.x[s]);
            }
        }
    }
}

/// no two disjoint nonempty sets in `Y`; each unordered pair appears twice.
fn intersecting<S: ConstraintSinkIF>(sink: &mut S, index: &SubsetIndex, vars: &FamilyVars<S::Var>) {
    for t in index.nonempty() {
        for s in index.nonempty() {
            if index.is_disjoint(s, t) {
                sink.at_most_one(vars.y[t], vars.y[s]);
            }
        }
    }
}

fn nonempty_members<V: Copy>(index: &SubsetIndex, vars: &FamilyVars<V>) -> LinearExpr<V> {
    LinearExpr::sum(index.nonempty().map(|s| vars.y[s]))
}

fn star_members<V: Copy>(index: &SubsetIndex, vars: &FamilyVars<V>, i: usize) -> LinearExpr<V> {
    LinearExpr::sum(index.star(i).map(|s| vars.x[s]))
}

/// `|star(i)| + 1 <= |Y|` for every element `i`.
///
/// Over the empty ground set the single star is empty, leaving `1 <= |Y|`,
/// which no nonempty `Y` exists to satisfy.
fn star_direct<S: ConstraintSinkIF>(
    sink: &mut S,
    index: &SubsetIndex,
    vars: &FamilyVars<S::Var>,
) -> Result<()> {
    let family = nonempty_members(index, vars);
    if index.ground().is_empty() {
        return sink.linear(family.ge(1));
    }
    for i in index.ground().elements() {
        sink.linear(family.clone().minus(star_members(index, vars, i)).ge(1))?;
    }
    Ok(())
}

/// `|star(i)| <= z` for every element `i`.
fn star_bound<S: ConstraintSinkIF>(
    sink: &mut S,
    index: &SubsetIndex,
    vars: &FamilyVars<S::Var>,
) -> Result<()> {
    let Some(z) = vars.z else {
        return Ok(());
    };
    for i in index.ground().elements() {
        sink.linear(star_members(index, vars, i).add_term(-1, z).le(0))?;
    }
    Ok(())
}

/// Facts any minimal counterexample must have:
/// - no set of size one or two is in `Y`,
/// - every singleton generates,
/// - every subset of `{1, 2, 3, 4}` generates.
///
/// Overlapping facts are emitted as many times as they are derived.
fn reduction<S: ConstraintSinkIF>(sink: &mut S, index: &SubsetIndex, vars: &FamilyVars<S::Var>) {
    for (s, p) in index.iter() {
        if (1..=2).contains(&p.len()) {
            sink.fix(vars.y[s], false);
        }
    }
    for (s, p) in index.iter() {
        if p.len() == 1 {
            sink.fix(vars.x[s], true);
        }
    }
    for (s, p) in index.iter() {
        if p.is_subset_of(&Subset::REFERENCE) {
            sink.fix(vars.x[s], true);
        }
    }
}

/// `2 |Y| <= |X|`
fn cardinality<S: ConstraintSinkIF>(
    sink: &mut S,
    index: &SubsetIndex,
    vars: &FamilyVars<S::Var>,
) -> Result<()> {
    let generators = LinearExpr::sum(vars.x.iter().copied());
    let doubled = nonempty_members(index, vars).scaled(2);
    sink.linear(doubled.minus(generators).le(0))
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            constraint::{ClauseSet, LinearSystem},
            ground::GroundSet,
        },
    };

    fn index(n: i64) -> SubsetIndex {
        GroundSet::new(n).unwrap().power_set()
    }

    fn pow3(n: u32) -> usize {
        3usize.pow(n)
    }

    #[test]
    fn infeasibility_counts() {
        for n in 0..=4u32 {
            let p = index(n as i64);
            let mut sys = LinearSystem::default();
            let (_, c) = build(&mut sys, &p, Families::INFEASIBILITY).unwrap();
            assert_eq!(c.domain, 4 << n);
            assert_eq!(c.downset, pow3(n));
            assert_eq!(c.intersecting, pow3(n) + 1 - 2 * (1 << n));
            assert_eq!(c.star, (n as usize).max(1));
            assert_eq!(c.reduction + c.cardinality, 0);
            assert_eq!(c.total(), sys.constraint_count());
        }
    }

    #[test]
    fn small_totals() {
        let mut sys = LinearSystem::default();
        build(&mut sys, &index(0), Families::OPTIMIZATION).unwrap();
        // 4 domain, z >= 0, the reflexive downset pair
        assert_eq!(sys.constraint_count(), 6);
        let mut sys = LinearSystem::default();
        build(&mut sys, &index(2), Families::OPTIMIZATION).unwrap();
        assert_eq!(sys.constraint_count(), 16 + 1 + 9 + 2 + 2);
        let mut sys = LinearSystem::default();
        build(&mut sys, &index(2), Families::INFEASIBILITY).unwrap();
        assert_eq!(sys.constraint_count(), 29);
    }

    #[test]
    fn reduction_overlaps_are_kept() {
        let p = index(4);
        let mut sys = LinearSystem::default();
        let (_, c) = build(
            &mut sys,
            &p,
            Families::OPTIMIZATION | Families::REDUCTION | Families::CARDINALITY,
        )
        .unwrap();
        // 4 + 6 sets of size one or two, 4 singletons, all 16 subsets of {1,2,3,4}
        assert_eq!(c.reduction, 10 + 4 + 16);
        assert_eq!(c.cardinality, 1);
        let p = index(5);
        let mut sys = LinearSystem::default();
        let (_, c) = build(&mut sys, &p, Families::INFEASIBILITY | Families::REDUCTION).unwrap();
        assert_eq!(c.reduction, 15 + 5 + 16);
    }

    #[test]
    fn clause_counts() {
        let mut set = ClauseSet::default();
        let (_, c) = build(&mut set, &index(0), Families::INFEASIBILITY).unwrap();
        assert_eq!((c.domain, c.downset, c.star), (0, 1, 1));
        assert_eq!(set.clauses()[1], Vec::<i32>::new());
        let mut set = ClauseSet::default();
        let (_, c) = build(&mut set, &index(1), Families::INFEASIBILITY).unwrap();
        assert_eq!((c.downset, c.intersecting, c.star), (3, 0, 2));
        assert_eq!(&set.clauses()[3..], &[vec![4], vec![-2]]);
    }
}
