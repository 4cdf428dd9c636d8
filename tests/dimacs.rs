#![cfg(feature = "dimacs")]
/// WARNING: this test requires feature "dimacs".
use {
    chvatal::{
        check,
        constraint::{build, ClauseSet},
        solver::sat::solve_clauses,
        types::Families,
        Config, GroundSet, Variant,
    },
    chvatal_cnf::{CnfIf, CNF},
    std::fs,
};

#[test]
fn export_without_solving() {
    let dir = tempfile::tempdir().expect("tempdir");
    for v in [Variant::InfSat, Variant::InfSatRed] {
        let path = dir.path().join(format!("{v}.cnf"));
        let r = check(&Config::new(v, 3).build_only().with_dimacs_file(&path))
            .expect("exports");
        assert!(!r.is_solved());
        let cnf = CNF::load(&path).expect("well-formed DIMACS");
        assert_eq!(cnf.num_clauses(), r.constraint_count);
        // family literals first, then auxiliaries
        assert!(2 * 8 < cnf.num_vars());
    }
}

#[test]
fn exported_clauses_are_the_built_ones() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("inf_sat_4.cnf");
    let index = GroundSet::new(4).expect("n").power_set();
    let mut set = ClauseSet::default();
    build(&mut set, &index, Families::INFEASIBILITY).expect("built");
    chvatal::export::save(&set, &path).expect("saved");
    let cnf = CNF::load(&path).expect("loaded");
    assert_eq!(cnf.num_vars(), set.num_vars());
    assert_eq!(cnf.clauses(), set.clauses());
    // the conjecture holds for n = 4, so the re-read formula is unsatisfiable
    assert_eq!(solve_clauses(cnf.clauses()).expect("solved"), None);
}

#[test]
fn empty_ground_set_exports_an_empty_clause() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("inf_sat_0.cnf");
    let r = check(&Config::new(Variant::InfSat, 0).with_dimacs_file(&path))
        .expect("runs");
    assert!(r.does_conjecture_hold);
    let text = fs::read_to_string(&path).expect("readable");
    assert_eq!(text, "p cnf 2 2\n1 -2 0\n0\n");
}

#[test]
fn export_overwrites() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("out.cnf");
    fs::write(&path, "garbage").expect("writable");
    let config = Config::new(Variant::InfSat, 1).build_only();
    check(&config.with_dimacs_file(&path)).expect("exports");
    let cnf = CNF::load(&path).expect("loaded");
    assert_eq!(cnf.num_clauses(), 5);
    assert_eq!(cnf.num_vars(), 4);
}

#[test]
fn unwritable_target_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing").join("out.cnf");
    let config = Config::new(Variant::InfSat, 1).with_dimacs_file(&path);
    let e = check(&config).unwrap_err();
    assert!(!e.is_user_error());
}
