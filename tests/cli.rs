use std::process::{Command, Output};

fn chvatal(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_chvatal"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute chvatal")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

#[test]
fn build_only_still_prints_the_result() {
    let out = chvatal(&["inf", "2", "--no-solve"]);
    assert!(out.status.success());
    let text = stdout(&out);
    let last = text.lines().last().expect("some output");
    assert_eq!(
        last,
        "FormulationResult(name='inf', n=2, does_conjecture_hold=False, constraint_count=29, runtime=-1)"
    );
    assert_eq!(
        text.lines().next(),
        Some("Checking the conjecture for n=2 using formulation inf")
    );
}

#[test]
fn narration_reports_the_verdict() {
    let out = chvatal(&["inf_sat", "3"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.lines().any(|l| l.starts_with("Finished in ")));
    assert!(text.lines().any(|l| l == "Conjecture holds"));
    let last = text.lines().last().expect("some output");
    assert!(
        last.starts_with("FormulationResult(name='inf_sat', n=3, does_conjecture_hold=True"),
        "{last}"
    );
}

#[test]
fn quiet_prints_only_the_result() {
    let quiet: &[&[&str]] = &[&["opt", "1", "-q"], &["opt", "1", "--no-solve", "-q"]];
    for &args in quiet {
        let out = chvatal(args);
        assert!(out.status.success());
        let text = stdout(&out);
        assert_eq!(text.lines().count(), 1, "{text}");
        assert!(text.starts_with("FormulationResult(name='opt', n=1, "));
    }
}

#[test]
fn json_is_parseable() {
    let out = chvatal(&["opt_red", "2", "--json"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("JSON on stdout");
    assert_eq!(v["name"], "opt_red");
    assert_eq!(v["does_conjecture_hold"], true);
    assert!(v.get("counterexample").is_none());
}

#[test]
fn exit_codes_separate_user_errors() {
    let out = chvatal(&["inf", "-1"]);
    assert_eq!(out.status.code(), Some(2));
    let text = stdout(&out);
    assert!(text.lines().all(|l| !l.starts_with("FormulationResult")));
    assert_eq!(chvatal(&["inf-sat", "2"]).status.code(), Some(2));
    let out = chvatal(&["inf", "2", "--dimacs", "never.cnf"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(!std::path::Path::new("never.cnf").exists());
}
