/* Deterministic execution: a single current state, one call to the transition strategy per input
 * symbol, accept if the last state is final. */

use crate::fa::{ensure_completeness, CompletenessError, State, FA};
use crate::pair::OrderedPair;
use crate::set::DiscreteSet;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

/// The transition function of a DFA.
///
/// It is expected to be total over `states × alphabet`. What it does for any other pair is up to
/// the implementor, the engine only promises to call it exactly once per consumed symbol.
pub trait DFATransition {
    fn transition(&self, state: State, symbol: char) -> State;
}

impl<F> DFATransition for F
where
    F: Fn(State, char) -> State,
{
    fn transition(&self, state: State, symbol: char) -> State {
        self(state, symbol)
    }
}

pub struct DFA<T> {
    states: DiscreteSet<State>,
    alphabet: DiscreteSet<char>,
    start_state: State,
    final_states: DiscreteSet<State>,
    transition: T,
}

impl<T> fmt::Debug for DFA<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DFA")
            .field("states", &self.states)
            .field("alphabet", &self.alphabet)
            .field("start_state", &self.start_state)
            .field("final_states", &self.final_states)
            .finish_non_exhaustive()
    }
}

impl<T: DFATransition> DFA<T> {
    /// Build a DFA. Fails if the start state is not in `states` or if `final_states` is not a
    /// subset of `states`.
    pub fn new(
        states: DiscreteSet<State>,
        alphabet: DiscreteSet<char>,
        start_state: State,
        final_states: DiscreteSet<State>,
        transition: T,
    ) -> Result<Self, CompletenessError> {
        if let Err(err) = ensure_completeness(&states, start_state, &final_states) {
            debug!(%err, "rejected incomplete DFA");
            return Err(err);
        }

        debug!(
            states = states.len(),
            alphabet = alphabet.len(),
            finals = final_states.len(),
            start_state,
            "constructed DFA"
        );

        Ok(DFA {
            states,
            alphabet,
            start_state,
            final_states,
            transition,
        })
    }

    /// Consume the input and return the state the DFA ends in. Returns `None` as soon as a
    /// symbol outside the alphabet is read.
    pub fn final_state(&self, input: &str) -> Option<State> {
        let mut current = self.start_state;

        for symbol in input.chars() {
            if !self.alphabet.contains(&symbol) {
                debug!(?symbol, state = current, "symbol outside the alphabet, rejecting");
                return None;
            }

            let next = self.transition.transition(current, symbol);
            trace!(from = current, ?symbol, to = next, "DFA step");
            current = next;
        }

        Some(current)
    }

    /// Evaluate the transition function on every pair of `states × alphabet`. Only meant for
    /// inspection, `run` never looks at the table.
    pub fn transition_table(&self) -> HashMap<OrderedPair<State, char>, State> {
        let mut table = HashMap::with_capacity(self.states.len() * self.alphabet.len());

        for &state in &self.states {
            for &symbol in &self.alphabet {
                table.insert(
                    OrderedPair::new(state, symbol),
                    self.transition.transition(state, symbol),
                );
            }
        }
        table
    }

    pub fn get_transition(&self) -> &T {
        &self.transition
    }
}

impl<T: DFATransition> FA for DFA<T> {
    fn get_states(&self) -> &DiscreteSet<State> {
        &self.states
    }

    fn get_alphabet(&self) -> &DiscreteSet<char> {
        &self.alphabet
    }

    fn get_start_state(&self) -> State {
        self.start_state
    }

    fn get_final_states(&self) -> &DiscreteSet<State> {
        &self.final_states
    }

    fn run(&self, input: &str) -> bool {
        self.final_state(input)
            .is_some_and(|state| self.final_states.contains(&state))
    }
}
