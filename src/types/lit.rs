use std::{fmt, ops::Not};

/// Literal in DIMACS numbering: `v` or `-v` for a variable id `v >= 1`.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Lit(i32);

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}L", self.0)
    }
}

impl fmt::Debug for Lit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}L", self.0)
    }
}

/// convert literals to `[i32]`.
pub fn i32s(v: &[Lit]) -> Vec<i32> {
    v.iter().map(|l| i32::from(*l)).collect::<Vec<_>>()
}

impl Lit {
    /// the positive literal of variable `id`; ids start at 1.
    pub fn positive(id: u32) -> Self {
        debug_assert!(0 < id && id <= i32::MAX as u32);
        Lit(id as i32)
    }
    pub fn var(&self) -> u32 {
        self.0.unsigned_abs()
    }
    pub fn is_positive(&self) -> bool {
        0 < self.0
    }
    /// the truth value of this literal under a value of its variable.
    pub fn under(&self, var_value: bool) -> bool {
        var_value == self.is_positive()
    }
}

impl From<Lit> for i32 {
    #[inline]
    fn from(l: Lit) -> i32 {
        l.0
    }
}

impl TryFrom<i32> for Lit {
    type Error = ();
    fn try_from(val: i32) -> Result<Self, Self::Error> {
        if val == 0 {
            Err(())
        } else {
            Ok(Lit(val))
        }
    }
}

impl From<rustsat::types::Lit> for Lit {
    #[inline]
    fn from(l: rustsat::types::Lit) -> Self {
        Lit(l.to_ipasir())
    }
}

impl From<Lit> for rustsat::types::Lit {
    #[inline]
    fn from(l: Lit) -> Self {
        rustsat::types::Lit::new(l.var() - 1, !l.is_positive())
    }
}

impl Not for Lit {
    type Output = Lit;
    #[inline]
    fn not(self) -> Self {
        Lit(-self.0)
    }
}
