pub mod dp;
pub mod dpll;
pub mod resolution;

use thiserror::Error;

use crate::types::{is_satisfied, Assignment, Clause, Lit, Problem, Solution, Verdict};

/// Optional resource ceilings. The solvers have no internal bound on clause
/// growth or recursion depth; a breached limit is surfaced as an error, never
/// as a truncated (and possibly wrong) verdict.
#[derive(Clone, Copy, Debug, Default)]
pub struct Limits {
    /// Largest working clause set Resolution/DP may materialize.
    pub max_clauses: Option<usize>,
    /// Deepest branch DPLL may explore.
    pub max_depth: Option<usize>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolverError {
    #[error("working clause set grew past the limit of {0} clauses")]
    ClauseLimit(usize),

    #[error("search exceeded the recursion depth limit of {0}")]
    DepthLimit(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Method {
    /// Resolution saturation
    Resolution,
    /// Davis–Putnam variable elimination
    Dp,
    /// DPLL backtracking search
    Dpll,
}

/// Runs the chosen decision procedure. Only DPLL produces a witness; the
/// saturation solvers report SAT with an empty model.
pub fn solve(problem: &Problem, method: Method, limits: &Limits) -> Result<Solution, SolverError> {
    let solution = match method {
        Method::Resolution => from_verdict(resolution::solve(problem, limits)?),
        Method::Dp => from_verdict(dp::solve(problem, limits)?),
        Method::Dpll => match dpll::solve(problem, limits)? {
            Some(model) => Solution::Sat { model },
            None => Solution::Unsat,
        },
    };
    Ok(solution)
}

fn from_verdict(verdict: Verdict) -> Solution {
    match verdict {
        Verdict::Sat => Solution::Sat {
            model: Assignment::new(),
        },
        Verdict::Unsat => Solution::Unsat,
    }
}

/// The resolvent of `c1` and `c2` on `pivot`: `(c1 \ {pivot}) ∪ (c2 \ {¬pivot})`.
///
/// The caller guarantees `pivot ∈ c1` and `¬pivot ∈ c2`; this is not checked.
pub fn resolve(c1: &Clause, c2: &Clause, pivot: Lit) -> Clause {
    c1.iter()
        .filter(|&&lit| lit != pivot)
        .chain(c2.iter().filter(|&&lit| lit != -pivot))
        .copied()
        .collect()
}

pub(crate) fn check_clause_count(count: usize, limits: &Limits) -> Result<(), SolverError> {
    match limits.max_clauses {
        Some(max) if count > max => Err(SolverError::ClauseLimit(max)),
        _ => Ok(()),
    }
}

/// Checks `solution` against the expected satisfiability of `problem`.
/// A reported model must satisfy every clause; an empty model (saturation
/// solvers) is accepted on the verdict alone.
pub fn verify(problem: &Problem, sat: bool, solution: &Solution) -> bool {
    match solution {
        Solution::Sat { model } => {
            sat && (model.is_empty()
                || problem
                    .clauses
                    .iter()
                    .all(|clause| is_satisfied(clause, model)))
        }
        Solution::Unsat => !sat,
    }
}
