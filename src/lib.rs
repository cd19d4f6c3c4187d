//! # fasim
//!
//! A small finite automaton execution engine.
//!
//! This library provides functionality to:
//! - Work with discrete math sets: union, intersection, subset test, cross product and power set
//! - Describe a DFA or an NFA with epsilon transitions by its states, alphabet, start state, final
//!   states and a caller supplied transition strategy
//! - Check at construction time that the start and final states belong to the set of states
//! - Run an input string through the automaton to decide whether it is accepted
//! - Materialize the full transition table for inspection
//!
//! The engine logs through `tracing` and never installs a subscriber itself.

// Re-export the modules
pub mod dfa;
pub mod fa;
pub mod nfa;
pub mod pair;
pub mod set;
pub mod table;

// Re-export commonly used items for convenience
pub use dfa::{DFATransition, DFA};
pub use fa::{CompletenessError, State, FA};
pub use nfa::{EpsilonMove, NFATransition, NFA};
pub use pair::OrderedPair;
pub use set::DiscreteSet;
pub use table::{DFATable, NFATable};
