use std::collections::{BTreeMap, BTreeSet};

pub type Var = u32;

/// A literal is a nonzero signed variable id; the sign is the polarity.
pub type Lit = i32;

/// A disjunction of literals. Kept as a set so duplicate literals collapse
/// and structural equality/hashing make clause-set membership cheap.
pub type Clause = BTreeSet<Lit>;

/// A partial assignment of truth values to variables.
pub type Assignment = BTreeMap<Var, bool>;

#[derive(Clone, Debug)]
pub struct Problem {
    pub clauses: Vec<Clause>,
}

impl Problem {
    pub fn new(clauses: Vec<Clause>) -> Self {
        Self { clauses }
    }

    /// All variables occurring in the formula.
    pub fn variables(&self) -> BTreeSet<Var> {
        self.clauses.iter().flatten().map(|&lit| to_var(lit)).collect()
    }
}

/// Verdict of the saturation-style solvers, which produce no witness.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Sat,
    Unsat,
}

/// Result surfaced to callers; the model is empty when the chosen solver
/// does not produce a witness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Solution {
    Sat { model: Assignment },
    Unsat,
}

pub fn to_var(lit: Lit) -> Var {
    lit.unsigned_abs()
}

pub fn negate(lit: Lit) -> Lit {
    -lit
}

/// Truth value of `lit` under `assignment`, `None` if its variable is
/// unassigned.
pub fn eval(lit: Lit, assignment: &Assignment) -> Option<bool> {
    assignment
        .get(&to_var(lit))
        .map(|&value| value == lit.is_positive())
}

/// A clause containing a literal and its negation is always true.
pub fn is_tautology(clause: &Clause) -> bool {
    clause.iter().any(|&lit| clause.contains(&negate(lit)))
}

/// Some literal evaluates to true; unassigned literals count as not-true.
pub fn is_satisfied(clause: &Clause, assignment: &Assignment) -> bool {
    clause.iter().any(|&lit| eval(lit, assignment) == Some(true))
}

/// Every literal is assigned and false, i.e. the clause is falsified.
pub fn is_conflicting(clause: &Clause, assignment: &Assignment) -> bool {
    clause.iter().all(|&lit| eval(lit, assignment) == Some(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(lits: &[Lit]) -> Clause {
        lits.iter().copied().collect()
    }

    #[test]
    fn negation_involution() {
        for lit in [1, -1, 7, -42] {
            assert_eq!(negate(negate(lit)), lit);
            assert_ne!(negate(lit), lit);
        }
    }

    #[test]
    fn tautology() {
        assert!(is_tautology(&clause(&[1, -1, 2])));
        assert!(!is_tautology(&clause(&[1, 2, -3])));
        assert!(!is_tautology(&Clause::new()));
    }

    #[test]
    fn clause_status() {
        let assignment = Assignment::from([(1, true), (2, false)]);

        assert!(is_satisfied(&clause(&[1, 3]), &assignment));
        assert!(is_satisfied(&clause(&[-2]), &assignment));
        // 3 is unassigned, so the clause is neither satisfied nor falsified
        assert!(!is_satisfied(&clause(&[-1, 3]), &assignment));
        assert!(!is_conflicting(&clause(&[-1, 3]), &assignment));

        assert!(is_conflicting(&clause(&[-1, 2]), &assignment));
        // the empty clause is vacuously falsified
        assert!(is_conflicting(&Clause::new(), &assignment));
    }

    #[test]
    fn duplicate_literals_collapse() {
        assert_eq!(clause(&[1, 1, -2, -2]).len(), 2);
    }
}
