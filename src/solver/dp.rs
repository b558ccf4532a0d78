//! Davis–Putnam variable elimination: for each variable, replace every clause
//! mentioning it with the resolvents of its positive/negative occurrences.
//! Cheaper per step than full saturation, but clause blow-up is still
//! worst-case exponential.

use std::collections::HashSet;

use log::debug;

use super::{check_clause_count, resolve, Limits, SolverError};
use crate::types::{is_tautology, Clause, Lit, Problem, Verdict};

pub fn solve(problem: &Problem, limits: &Limits) -> Result<Verdict, SolverError> {
    let mut clauses: HashSet<Clause> = problem.clauses.iter().cloned().collect();

    if clauses.iter().any(|clause| clause.is_empty()) {
        return Ok(Verdict::Unsat);
    }

    // Elimination order is arbitrary; it affects performance, never the
    // verdict.
    for var in problem.variables() {
        let pivot = var as Lit;

        let pos: Vec<Clause> = clauses
            .iter()
            .filter(|clause| clause.contains(&pivot))
            .cloned()
            .collect();
        let neg: Vec<Clause> = clauses
            .iter()
            .filter(|clause| clause.contains(&-pivot))
            .cloned()
            .collect();

        let mut fresh: HashSet<Clause> = HashSet::new();
        for c1 in &pos {
            for c2 in &neg {
                let resolvent = resolve(c1, c2, pivot);
                if resolvent.is_empty() {
                    return Ok(Verdict::Unsat);
                }
                if !is_tautology(&resolvent) {
                    fresh.insert(resolvent);
                }
            }
        }

        clauses.retain(|clause| !clause.contains(&pivot) && !clause.contains(&-pivot));
        clauses.extend(fresh);
        check_clause_count(clauses.len(), limits)?;
        debug!("eliminated {var}: {} clauses remain", clauses.len());
    }

    // An empty remainder means every constraint was eliminated without
    // contradiction; anything left is a residual unsatisfied constraint.
    Ok(if clauses.is_empty() {
        Verdict::Sat
    } else {
        Verdict::Unsat
    })
}
