use bitflags::bitflags;

bitflags! {
    /// Constraint families a formulation asks the builder for.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Families: u8 {
        /// `0 <= x, y <= 1` and `z >= 0`; emitted by the allocator.
        const DOMAIN       = 0b0000_0001;
        /// `y_t <= x_s` for every `s` included in `t`.
        const DOWNSET      = 0b0000_0010;
        /// `y_s + y_t <= 1` for disjoint nonempty `s`, `t`.
        const INTERSECTING = 0b0000_0100;
        /// every star strictly smaller than the intersecting family.
        const STAR_DIRECT  = 0b0000_1000;
        /// every star at most `z`.
        const STAR_BOUND   = 0b0001_0000;
        /// fixations taken from already settled cases of the conjecture.
        const REDUCTION    = 0b0010_0000;
        /// `2 |Y| <= |X|`, valid for the reduced optimization model.
        const CARDINALITY  = 0b0100_0000;
    }
}

impl Families {
    /// families of the infeasibility model
    pub const INFEASIBILITY: Families = Families::DOMAIN
        .union(Families::DOWNSET)
        .union(Families::INTERSECTING)
        .union(Families::STAR_DIRECT);
    /// families of the optimization model
    pub const OPTIMIZATION: Families = Families::DOMAIN
        .union(Families::DOWNSET)
        .union(Families::INTERSECTING)
        .union(Families::STAR_BOUND);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn models_differ_only_in_star_form() {
        let common = Families::INFEASIBILITY & Families::OPTIMIZATION;
        assert_eq!(
            common,
            Families::DOMAIN | Families::DOWNSET | Families::INTERSECTING
        );
        assert!(Families::INFEASIBILITY.contains(Families::STAR_DIRECT));
        assert!(!Families::OPTIMIZATION.contains(Families::STAR_DIRECT));
        assert!(!Families::INFEASIBILITY.intersects(Families::REDUCTION));
    }
}
