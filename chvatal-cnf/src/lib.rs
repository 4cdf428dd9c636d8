pub mod cnf;
pub use self::cnf::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let build = CNF::from_vec_i32(vec![]);
        assert!(build.is_ok());
        let mut cnf = build.unwrap();
        assert!(cnf.add_clause(vec![1, 3, 2]).is_ok());
        assert_eq!(cnf.num_clauses(), 1);
        assert_eq!(cnf.num_vars(), 3);
        assert!(cnf.add_clause(vec![-1, -4, 3]).is_ok());
        assert_eq!(cnf.num_clauses(), 2);
        assert_eq!(cnf.num_vars(), 4);
        let output = cnf.dump_to_string();
        let mut line = output.lines();
        assert_eq!(line.next(), Some("p cnf 4 2"));
        assert_eq!(line.next(), Some("1 3 2 0"));
        assert_eq!(line.next(), Some("-1 -4 3 0"));
        assert_eq!(line.next(), None);
    }

    #[test]
    fn duplicates_and_empty_clauses_survive() {
        let mut cnf = CNF::with_num_vars(5);
        cnf.add_clause([-1, -2]).unwrap();
        cnf.add_clause([-2, -1]).unwrap();
        cnf.add_clause([-1, -2]).unwrap();
        cnf.add_clause(Vec::<i32>::new()).unwrap();
        assert_eq!(cnf.num_vars(), 5);
        let text = cnf.dump_to_string();
        let back = CNF::parse(text.as_bytes()).unwrap();
        assert_eq!(back, cnf);
        assert_eq!(back.clauses()[3], Vec::<i32>::new());
    }

    #[test]
    fn zero_is_not_a_literal() {
        let mut cnf = CNF::default();
        assert!(matches!(cnf.add_clause([1, 0]), Err(CnfError::ZeroLiteral)));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(matches!(
            CNF::parse("1 2 0\n".as_bytes()),
            Err(CnfError::MissingHeader)
        ));
        assert!(matches!(
            CNF::parse("p cnf 2\n".as_bytes()),
            Err(CnfError::BadHeader(_))
        ));
        assert!(matches!(
            CNF::parse("p cnf 2 1\n1 3 0\n".as_bytes()),
            Err(CnfError::OutOfRange { lit: 3, .. })
        ));
        assert!(matches!(
            CNF::parse("p cnf 2 2\n1 2 0\n".as_bytes()),
            Err(CnfError::ClauseCount {
                declared: 2,
                found: 1
            })
        ));
        assert!(matches!(
            CNF::parse("p cnf 2 1\n1 2\n".as_bytes()),
            Err(CnfError::Unterminated)
        ));
        assert!(matches!(
            CNF::parse("p cnf 2 1\n1 x 0\n".as_bytes()),
            Err(CnfError::BadLiteral { line: 2, .. })
        ));
    }

    #[test]
    fn parse_accepts_comments_and_split_clauses() {
        let text = "c produced by hand\np cnf 3 2\n1 -2\n 3 0 -1 0\n";
        let cnf = CNF::parse(text.as_bytes()).unwrap();
        assert_eq!(cnf.num_vars(), 3);
        assert_eq!(cnf.clauses(), &[vec![1, -2, 3], vec![-1]]);
    }
}
