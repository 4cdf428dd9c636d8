//! Ground set `[n] = {1, ..., n}` and the indexed power set over it.
use {
    crate::types::{ChvatalError, Result},
    ahash::AHashMap,
    std::{fmt, ops::Range},
};

/// The largest `n` whose power set we are willing to index.
pub const MAX_GROUND_SET: usize = 24;

/// A subset of the ground set as a bitmask; element `i` is bit `i - 1`.
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Subset(u32);

impl fmt::Debug for Subset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let elems = self
            .elements()
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>();
        write!(f, "{{{}}}", elems.join(","))
    }
}

impl Subset {
    pub const EMPTY: Subset = Subset(0);

    /// the base case settled in the literature: `{1, 2, 3, 4}`.
    pub const REFERENCE: Subset = Subset(0b1111);

    /// build from elements in `1..=32`; anything else is ignored.
    pub fn from_elements<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Subset(
            iter.into_iter()
                .filter(|i| (1..=32).contains(i))
                .fold(0, |acc, i| acc | (1 << (i - 1))),
        )
    }
    pub fn bits(&self) -> u32 {
        self.0
    }
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn contains(&self, i: usize) -> bool {
        (1..=32).contains(&i) && self.0 & (1 << (i - 1)) != 0
    }
    pub fn is_subset_of(&self, other: &Subset) -> bool {
        self.0 & !other.0 == 0
    }
    pub fn is_disjoint(&self, other: &Subset) -> bool {
        self.0 & other.0 == 0
    }
    pub fn intersection(&self, other: &Subset) -> Subset {
        Subset(self.0 & other.0)
    }
    /// elements in increasing order
    pub fn elements(&self) -> Vec<usize> {
        (1..=32).filter(|i| self.contains(*i)).collect()
    }
}

/// The ground set `N = {1, ..., n}`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GroundSet {
    n: usize,
}

impl GroundSet {
    /// # Errors
    ///
    /// `ChvatalError::InvalidArgument` if `n < 0` or `n > MAX_GROUND_SET`.
    pub fn new(n: i64) -> Result<Self> {
        if n < 0 {
            return Err(ChvatalError::InvalidArgument(format!(
                "the ground set size must be non-negative, got {n}"
            )));
        }
        if (MAX_GROUND_SET as i64) < n {
            return Err(ChvatalError::InvalidArgument(format!(
                "the ground set size must be at most {MAX_GROUND_SET}, got {n}"
            )));
        }
        Ok(GroundSet { n: n as usize })
    }
    pub fn len(&self) -> usize {
        self.n
    }
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
    /// `1..=n` as a half-open range
    pub fn elements(&self) -> Range<usize> {
        1..self.n + 1
    }
    pub fn power_set(&self) -> SubsetIndex {
        SubsetIndex::new(self)
    }
}

/// The power set of a ground set, each subset at a fixed position.
///
/// Subsets are ordered by cardinality, then lexicographically, so the empty
/// set is at 0 and the order only depends on `n`.
#[derive(Clone, Debug)]
pub struct SubsetIndex {
    ground: GroundSet,
    subsets: Vec<Subset>,
    position: AHashMap<Subset, usize>,
}

impl SubsetIndex {
    pub fn new(ground: &GroundSet) -> Self {
        let n = ground.len();
        let mut subsets = Vec::with_capacity(1 << n);
        for r in 0..=n {
            combinations(n, r, |c| {
                subsets.push(Subset::from_elements(c.iter().map(|i| i + 1)))
            });
        }
        debug_assert_eq!(subsets.len(), 1 << n);
        let position = subsets.iter().enumerate().map(|(i, s)| (*s, i)).collect();
        SubsetIndex {
            ground: *ground,
            subsets,
            position,
        }
    }
    pub fn ground(&self) -> &GroundSet {
        &self.ground
    }
    pub fn len(&self) -> usize {
        self.subsets.len()
    }
    /// never true: the empty set is always there.
    pub fn is_empty(&self) -> bool {
        self.subsets.is_empty()
    }
    pub fn indices(&self) -> Range<usize> {
        0..self.subsets.len()
    }
    pub fn subset(&self, s: usize) -> Subset {
        self.subsets[s]
    }
    pub fn iter(&self) -> impl Iterator<Item = (usize, Subset)> + '_ {
        self.subsets.iter().copied().enumerate()
    }
    pub fn index_of(&self, subset: &Subset) -> Option<usize> {
        self.position.get(subset).copied()
    }
    /// `P[s]` is included in `P[t]`
    pub fn is_subset(&self, s: usize, t: usize) -> bool {
        self.subsets[s].is_subset_of(&self.subsets[t])
    }
    /// `P[s]` and `P[t]` share no element
    pub fn is_disjoint(&self, s: usize, t: usize) -> bool {
        self.subsets[s].is_disjoint(&self.subsets[t])
    }
    pub fn cardinality(&self, s: usize) -> usize {
        self.subsets[s].len()
    }
    /// indices of every nonempty subset
    pub fn nonempty(&self) -> impl Iterator<Item = usize> + '_ {
        self.iter().filter(|(_, p)| !p.is_empty()).map(|(s, _)| s)
    }
    /// indices of the subsets containing `i`
    pub fn star(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        self.iter()
            .filter(move |(_, p)| p.contains(i))
            .map(|(s, _)| s)
    }
}

/// call `f` on every `r`-combination of `0..n` in lexicographic order.
fn combinations<F: FnMut(&[usize])>(n: usize, r: usize, mut f: F) {
    if n < r {
        return;
    }
    let mut c = (0..r).collect::<Vec<usize>>();
    loop {
        f(&c);
        let Some(i) = (0..r).rev().find(|&i| c[i] < n - r + i) else {
            return;
        };
        c[i] += 1;
        for j in i + 1..r {
            c[j] = c[j - 1] + 1;
        }
    }
}
