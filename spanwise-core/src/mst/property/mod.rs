//! Property-based tests for minimum spanning forest construction.
//!
//! Compares Kruskal against Prim and against an exhaustive oracle on small
//! graphs, validates structural invariants (acyclicity, edge count,
//! component count), and checks that repeated builds are identical.

mod oracle;
mod strategies;
mod tests;
