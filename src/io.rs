use std::io::{BufRead, BufReader, BufWriter, Read, Write};

use thiserror::Error;

use crate::types::{Clause, Lit, Problem, Solution};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: invalid literal token {token:?}")]
    BadToken { line: usize, token: String },

    #[error("line {line}: 0 is reserved as the clause terminator")]
    ZeroLiteral { line: usize },
}

/// Reads a DIMACS-style CNF problem.
///
/// Comment lines (`c`, `%`), the problem header (`p`, counts unvalidated),
/// blank lines, and a lone `0` are skipped. Every other line is one clause:
/// whitespace-separated integer literals with an optional trailing `0`.
pub fn read_problem(reader: &mut impl Read) -> Result<Problem, ParseError> {
    let mut clauses = vec![];

    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty()
            || line.starts_with('c')
            || line.starts_with('%')
            || line.starts_with('p')
            || line == "0"
        {
            continue;
        }

        let mut tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.last() == Some(&"0") {
            tokens.pop();
        }

        let mut clause = Clause::new();
        for token in tokens {
            let lit: Lit = token.parse().map_err(|_| ParseError::BadToken {
                line: i + 1,
                token: token.to_string(),
            })?;
            if lit == 0 {
                return Err(ParseError::ZeroLiteral { line: i + 1 });
            }
            clause.insert(lit);
        }
        clauses.push(clause);
    }

    Ok(Problem::new(clauses))
}

pub fn write_solution(writer: &mut impl Write, solution: &Solution) -> std::io::Result<()> {
    let mut writer = BufWriter::new(writer);
    writeln!(writer, "c solved by troika")?;

    let solution_str = match solution {
        Solution::Sat { .. } => "SATISFIABLE",
        Solution::Unsat => "UNSATISFIABLE",
    };
    writeln!(writer, "s {solution_str}")?;

    if let Solution::Sat { model } = solution {
        if !model.is_empty() {
            let lits: Vec<Lit> = model
                .iter()
                .map(|(&var, &value)| if value { var as Lit } else { -(var as Lit) })
                .collect();

            const PER_LINE: usize = 10;
            for chunk in lits.chunks(PER_LINE) {
                let chunk_str = chunk
                    .iter()
                    .fold(String::new(), |str, lit| str + &lit.to_string() + " ");
                writeln!(writer, "v {chunk_str}")?;
            }
            writeln!(writer, "v 0")?;
        }
    }

    Ok(())
}

/// Human-readable rendering of the formula, one `( a ∨ ¬b )` line per clause.
pub fn write_problem(writer: &mut impl Write, problem: &Problem) -> std::io::Result<()> {
    let mut writer = BufWriter::new(writer);
    for clause in &problem.clauses {
        let body = clause
            .iter()
            .map(|&lit| {
                if lit < 0 {
                    format!("¬{}", -lit)
                } else {
                    lit.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ∨ ");
        writeln!(writer, "( {body} )")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{read_problem, write_solution, ParseError};
    use crate::types::{Clause, Problem, Solution};

    fn clause(lits: &[i32]) -> Clause {
        lits.iter().copied().collect()
    }

    #[test]
    fn basic() {
        let input = b"c whatever\np cnf 2 2\n1 2 0\n1 -2 0";
        let Problem { clauses } = read_problem(&mut input.as_slice()).unwrap();
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0], clause(&[1, 2]));
        assert_eq!(clauses[1], clause(&[1, -2]));
    }

    #[test]
    fn skipped_lines() {
        let input = b"c comment\n% footer\np cnf 1 1\n\n0\n1 0\n";
        let Problem { clauses } = read_problem(&mut input.as_slice()).unwrap();
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0], clause(&[1]));
    }

    #[test]
    fn terminator_optional() {
        let input = b"1 -2\n-1 2 0";
        let Problem { clauses } = read_problem(&mut input.as_slice()).unwrap();
        assert_eq!(clauses[0], clause(&[1, -2]));
        assert_eq!(clauses[1], clause(&[-1, 2]));
    }

    #[test]
    fn duplicates_collapse() {
        let input = b"1 1 -2 -2 0";
        let Problem { clauses } = read_problem(&mut input.as_slice()).unwrap();
        assert_eq!(clauses[0], clause(&[1, -2]));
    }

    #[test]
    fn bad_token() {
        let input = b"1 two 0";
        let err = read_problem(&mut input.as_slice()).unwrap_err();
        assert!(matches!(err, ParseError::BadToken { line: 1, .. }));
    }

    #[test]
    fn zero_mid_clause() {
        let input = b"1 0 2 0";
        let err = read_problem(&mut input.as_slice()).unwrap_err();
        assert!(matches!(err, ParseError::ZeroLiteral { line: 1 }));
    }

    #[test]
    fn solution_output() {
        let model = BTreeMap::from([(1, true), (2, false)]);
        let mut out = vec![];
        write_solution(&mut out, &Solution::Sat { model }).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("s SATISFIABLE"));
        assert!(text.contains("v 1 -2"));
        assert!(text.contains("v 0"));

        let mut out = vec![];
        write_solution(&mut out, &Solution::Unsat).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("s UNSATISFIABLE"));
        assert!(!text.lines().any(|line| line.starts_with('v')));
    }
}
