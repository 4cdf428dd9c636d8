//! Variable allocation: one `x` and one `y` per subset, plus the scalar `z`.
use {
    crate::{
        constraint::ConstraintSinkIF,
        ground::SubsetIndex,
        types::{Families, Lit, Role},
    },
    rustsat::instances::{BasicVarManager, ManageVars},
    std::fmt,
};

/// Hands out fresh boolean variables in DIMACS numbering, starting at 1.
/// Pseudo-Boolean encodings draw their auxiliaries from the same manager.
#[derive(Clone, Debug, Default)]
pub struct VarPool {
    manager: BasicVarManager,
}

impl VarPool {
    pub fn new_var(&mut self) -> Lit {
        Lit::from(self.manager.new_var().pos_lit())
    }
    /// the largest id handed out so far
    pub fn num_vars(&self) -> u32 {
        self.manager.n_used()
    }
    pub(crate) fn manager(&mut self) -> &mut BasicVarManager {
        &mut self.manager
    }
}

/// Handle of an integer variable declared in a `LinearSystem`.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct IntVar(u32);

impl fmt::Debug for IntVar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl IntVar {
    pub(crate) fn new(index: usize) -> Self {
        IntVar(index as u32)
    }
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// name and range of an integer variable
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IntVarDecl {
    pub name: String,
    pub lower: i64,
    pub upper: i64,
}

impl IntVarDecl {
    pub fn width(&self) -> usize {
        (self.upper - self.lower).max(0) as usize
    }
}

/// The decision variables of a formulation, indexed like the power set.
#[derive(Clone, Debug)]
pub struct FamilyVars<V> {
    /// generators of the downset `F`
    pub x: Vec<V>,
    /// members of the intersecting family `Y`
    pub y: Vec<V>,
    /// the bound on every star, if the formulation has one
    pub z: Option<V>,
}

impl<V: Copy> FamilyVars<V> {
    /// Allocate all `x` first, then all `y`, then `z` when `STAR_BOUND` is
    /// requested. With `DOMAIN` the sink also receives the range facts.
    pub fn allocate<S>(sink: &mut S, index: &SubsetIndex, families: Families) -> Self
    where
        S: ConstraintSinkIF<Var = V>,
    {
        let x = index
            .indices()
            .map(|s| sink.new_family_var(Role::Generator, s))
            .collect::<Vec<_>>();
        let y = index
            .indices()
            .map(|s| sink.new_family_var(Role::Intersecting, s))
            .collect::<Vec<_>>();
        let z = if families.contains(Families::STAR_BOUND) {
            sink.new_bound_var(index.len() as i64)
        } else {
            None
        };
        if families.contains(Families::DOMAIN) {
            for v in x.iter().chain(y.iter()) {
                sink.domain(*v, 0, Some(1));
            }
            if let Some(z) = z {
                sink.domain(z, 0, None);
            }
        }
        FamilyVars { x, y, z }
    }
    pub fn get(&self, role: Role, s: usize) -> V {
        match role {
            Role::Generator => self.x[s],
            Role::Intersecting => self.y[s],
        }
    }
}
