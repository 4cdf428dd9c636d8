use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

pub type Clause = Vec<i32>;

/// Errors raised while building, reading or writing a CNF.
#[derive(Debug, thiserror::Error)]
pub enum CnfError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no `p cnf` header before the first clause")]
    MissingHeader,
    #[error("malformed header `{0}`")]
    BadHeader(String),
    #[error("line {line}: `{token}` is not a literal")]
    BadLiteral { line: usize, token: String },
    #[error("literal {lit} exceeds the {num_vars} declared variables")]
    OutOfRange { lit: i32, num_vars: u32 },
    #[error("0 is not a literal")]
    ZeroLiteral,
    #[error("header declares {declared} clauses but {found} were read")]
    ClauseCount { declared: usize, found: usize },
    #[error("the last clause is not terminated by 0")]
    Unterminated,
}

/// A clause list plus the number of variables it is declared over.
///
/// Duplicated clauses are kept: the clause count in the header must match
/// what the producer emitted.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CNF {
    num_vars: u32,
    clauses: Vec<Clause>,
}

impl fmt::Display for CNF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CNF({} vars, {} clauses)",
            self.num_vars(),
            self.num_clauses()
        )
    }
}

pub trait CnfIf: Sized {
    type Error;
    /// Append a clause. The variable count grows to cover its literals.
    fn add_clause<C: AsRef<[i32]>>(&mut self, clause: C) -> Result<&mut CNF, Self::Error>;
    fn from_vec_i32<V: AsRef<[Clause]>>(clauses: V) -> Result<Self, Self::Error>;
    fn load(file: &Path) -> Result<Self, Self::Error>;
    fn parse<R: BufRead>(reader: R) -> Result<Self, Self::Error>;
    fn num_vars(&self) -> u32;
    fn num_clauses(&self) -> usize;
    fn save(&self, file: &Path) -> Result<(), Self::Error>;
    fn dump_to_string(&self) -> String;
}

impl CNF {
    /// an empty CNF declared over `num_vars` variables, some of which may
    /// never occur in a clause.
    pub fn with_num_vars(num_vars: u32) -> Self {
        CNF {
            num_vars,
            clauses: Vec::new(),
        }
    }
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }
    pub fn into_clauses(self) -> Vec<Clause> {
        self.clauses
    }
}

impl CnfIf for CNF {
    type Error = CnfError;
    fn add_clause<C: AsRef<[i32]>>(&mut self, clause: C) -> Result<&mut CNF, Self::Error> {
        let c = clause.as_ref();
        if c.contains(&0) {
            return Err(CnfError::ZeroLiteral);
        }
        self.num_vars = self
            .num_vars
            .max(c.iter().map(|v| v.unsigned_abs()).max().unwrap_or(0));
        self.clauses.push(c.to_vec());
        Ok(self)
    }
    fn from_vec_i32<V: AsRef<[Clause]>>(clauses: V) -> Result<Self, Self::Error> {
        let mut cnf = CNF::default();
        for c in clauses.as_ref().iter() {
            cnf.add_clause(c)?;
        }
        Ok(cnf)
    }
    fn load(path: &Path) -> Result<Self, Self::Error> {
        let fs = File::open(path)?;
        CNF::parse(BufReader::new(fs))
    }
    fn parse<R: BufRead>(reader: R) -> Result<Self, Self::Error> {
        let mut header: Option<(u32, usize)> = None;
        let mut cnf = CNF::default();
        let mut clause: Clause = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('c') || trimmed.starts_with('%') {
                continue;
            }
            if trimmed.starts_with('p') {
                let mut iter = trimmed.split_whitespace();
                let (Some("p"), Some("cnf"), Some(v), Some(c), None) = (
                    iter.next(),
                    iter.next(),
                    iter.next(),
                    iter.next(),
                    iter.next(),
                ) else {
                    return Err(CnfError::BadHeader(trimmed.to_string()));
                };
                match (v.parse::<u32>(), c.parse::<usize>()) {
                    (Ok(nv), Ok(nc)) if header.is_none() => header = Some((nv, nc)),
                    _ => return Err(CnfError::BadHeader(trimmed.to_string())),
                }
                continue;
            }
            let Some((nv, _)) = header else {
                return Err(CnfError::MissingHeader);
            };
            for seg in trimmed.split_whitespace() {
                let l = seg.parse::<i32>().map_err(|_| CnfError::BadLiteral {
                    line: i + 1,
                    token: seg.to_string(),
                })?;
                if l == 0 {
                    cnf.clauses.push(std::mem::take(&mut clause));
                } else if nv < l.unsigned_abs() {
                    return Err(CnfError::OutOfRange {
                        lit: l,
                        num_vars: nv,
                    });
                } else {
                    clause.push(l);
                }
            }
        }
        if !clause.is_empty() {
            return Err(CnfError::Unterminated);
        }
        let Some((nv, nc)) = header else {
            return Err(CnfError::MissingHeader);
        };
        if nc != cnf.num_clauses() {
            return Err(CnfError::ClauseCount {
                declared: nc,
                found: cnf.num_clauses(),
            });
        }
        cnf.num_vars = nv;
        Ok(cnf)
    }
    fn num_vars(&self) -> u32 {
        self.num_vars
    }
    fn num_clauses(&self) -> usize {
        self.clauses.len()
    }
    fn save(&self, file: &Path) -> Result<(), Self::Error> {
        let mut buf = BufWriter::new(File::create(file)?);
        buf.write_all(self.dump_to_string().as_bytes())?;
        buf.flush()?;
        Ok(())
    }
    fn dump_to_string(&self) -> String {
        let mut out = format!("p cnf {} {}\n", self.num_vars, self.clauses.len());
        for cls in self.clauses.iter() {
            for l in cls.iter() {
                out.push_str(&format!("{l} "));
            }
            out.push_str("0\n");
        }
        out
    }
}
