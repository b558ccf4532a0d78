//! DPLL backtracking search: unit propagation and pure-literal elimination,
//! then a two-way case split on an unassigned variable. Each branch extends
//! an independent copy of the assignment, so backtracking is simply dropping
//! the copy. Recursion depth is bounded by the number of variables.

use std::collections::BTreeMap;

use log::trace;

use super::{Limits, SolverError};
use crate::types::{is_conflicting, is_satisfied, to_var, Assignment, Clause, Problem, Var};

/// Returns a satisfying partial assignment, or `None` if the formula is
/// unsatisfiable.
pub fn solve(problem: &Problem, limits: &Limits) -> Result<Option<Assignment>, SolverError> {
    let clauses: Vec<&Clause> = problem.clauses.iter().collect();
    search(&clauses, Assignment::new(), 0, limits)
}

fn search<'a>(
    clauses: &[&'a Clause],
    mut assignment: Assignment,
    depth: usize,
    limits: &Limits,
) -> Result<Option<Assignment>, SolverError> {
    if let Some(max) = limits.max_depth {
        if depth > max {
            return Err(SolverError::DepthLimit(max));
        }
    }

    let remaining: Vec<&'a Clause> = clauses
        .iter()
        .copied()
        .filter(|clause| !is_satisfied(clause, &assignment))
        .collect();

    if remaining
        .iter()
        .any(|clause| is_conflicting(clause, &assignment))
    {
        return Ok(None);
    }
    if remaining.is_empty() {
        return Ok(Some(assignment));
    }

    assign_pure_literals(&remaining, &mut assignment);
    if !propagate_units(&remaining, &mut assignment) {
        return Ok(None);
    }

    let unassigned = remaining
        .iter()
        .flat_map(|clause| clause.iter())
        .map(|&lit| to_var(lit))
        .find(|var| !assignment.contains_key(var));
    let Some(var) = unassigned else {
        // every variable assigned without conflict, so the formula holds
        return Ok(Some(assignment));
    };

    for value in [true, false] {
        trace!("depth {depth}: branching on {var} = {value}");
        let mut branch = assignment.clone();
        branch.insert(var, value);
        if let Some(model) = search(&remaining, branch, depth + 1, limits)? {
            return Ok(Some(model));
        }
    }
    Ok(None)
}

/// Assigns every unassigned variable that occurs with a single polarity the
/// value satisfying its occurrences. Such a variable can never appear in a
/// falsified clause under that value.
fn assign_pure_literals(clauses: &[&Clause], assignment: &mut Assignment) {
    let mut polarity: BTreeMap<Var, (bool, bool)> = BTreeMap::new();
    for clause in clauses {
        for &lit in *clause {
            let entry = polarity.entry(to_var(lit)).or_insert((false, false));
            if lit.is_positive() {
                entry.0 = true;
            } else {
                entry.1 = true;
            }
        }
    }

    for (var, (pos, neg)) in polarity {
        if pos != neg && !assignment.contains_key(&var) {
            assignment.insert(var, pos);
        }
    }
}

/// Repeatedly assigns the last unassigned literal of every not-yet-satisfied
/// clause. Returns `false` on a conflict: some clause ends up fully assigned
/// with no true literal.
fn propagate_units(clauses: &[&Clause], assignment: &mut Assignment) -> bool {
    let mut changed = true;
    while changed {
        changed = false;
        for clause in clauses {
            if is_satisfied(clause, assignment) {
                continue;
            }
            let mut unassigned = clause
                .iter()
                .filter(|&&lit| !assignment.contains_key(&to_var(lit)));
            match (unassigned.next(), unassigned.next()) {
                (Some(&lit), None) => {
                    assignment.insert(to_var(lit), lit.is_positive());
                    changed = true;
                }
                (None, None) => return false,
                _ => (),
            }
        }
    }
    true
}
