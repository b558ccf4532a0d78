//! Three textbook decision procedures for CNF satisfiability — resolution
//! saturation, Davis–Putnam variable elimination, and DPLL backtracking —
//! over a shared clause/literal model.

pub mod io;
pub mod solver;
pub mod types;
