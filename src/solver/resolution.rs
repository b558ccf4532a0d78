//! Resolution saturation: close the clause set under binary resolution until
//! the empty clause appears (UNSAT) or no new clause can be derived (SAT).
//! Worst-case exponential in the number of variables, as expected of the
//! textbook procedure.

use std::collections::HashSet;

use log::debug;

use super::{check_clause_count, resolve, Limits, SolverError};
use crate::types::{is_tautology, negate, Clause, Problem, Verdict};

pub fn solve(problem: &Problem, limits: &Limits) -> Result<Verdict, SolverError> {
    let mut clauses: HashSet<Clause> = problem.clauses.iter().cloned().collect();

    if clauses.iter().any(|clause| clause.is_empty()) {
        return Ok(Verdict::Unsat);
    }

    loop {
        let mut fresh: HashSet<Clause> = HashSet::new();

        let pool: Vec<&Clause> = clauses.iter().collect();
        for (i, &c1) in pool.iter().enumerate() {
            for &c2 in &pool[i + 1..] {
                for &lit in c1 {
                    if !c2.contains(&negate(lit)) {
                        continue;
                    }
                    let resolvent = resolve(c1, c2, lit);
                    if resolvent.is_empty() {
                        // resolution refutation found
                        return Ok(Verdict::Unsat);
                    }
                    if is_tautology(&resolvent) || clauses.contains(&resolvent) {
                        continue;
                    }
                    fresh.insert(resolvent);
                }
            }
        }

        if fresh.is_empty() {
            // saturated without deriving the empty clause
            return Ok(Verdict::Sat);
        }

        check_clause_count(clauses.len() + fresh.len(), limits)?;
        debug!(
            "saturation round: {} new clauses, {} total",
            fresh.len(),
            clauses.len() + fresh.len()
        );
        clauses.extend(fresh);
    }
}

#[cfg(test)]
mod tests {
    use super::solve;
    use crate::solver::{Limits, SolverError};
    use crate::types::{Clause, Problem, Verdict};

    fn clause(lits: &[i32]) -> Clause {
        lits.iter().copied().collect()
    }

    fn run(clauses: Vec<Clause>) -> Verdict {
        solve(&Problem::new(clauses), &Limits::default()).unwrap()
    }

    #[test]
    fn complementary_units() {
        assert_eq!(run(vec![clause(&[1]), clause(&[-1])]), Verdict::Unsat);
    }

    #[test]
    fn saturates_sat() {
        let clauses = vec![clause(&[1, 2]), clause(&[-1, 2]), clause(&[1, -2])];
        assert_eq!(run(clauses), Verdict::Sat);
    }

    #[test]
    fn empty_formula() {
        assert_eq!(run(vec![]), Verdict::Sat);
    }

    #[test]
    fn empty_input_clause() {
        assert_eq!(run(vec![Clause::new(), clause(&[1])]), Verdict::Unsat);
    }

    #[test]
    fn tautologies_only() {
        // the only resolvents are tautological, so the set saturates at once
        let clauses = vec![clause(&[1, 2]), clause(&[-1, -2])];
        assert_eq!(run(clauses), Verdict::Sat);
    }

    #[test]
    fn clause_limit() {
        let clauses = vec![clause(&[1, 2]), clause(&[-1, 2]), clause(&[1, -2])];
        let limits = Limits {
            max_clauses: Some(3),
            ..Limits::default()
        };
        assert_eq!(
            solve(&Problem::new(clauses), &limits),
            Err(SolverError::ClauseLimit(3))
        );
    }
}
