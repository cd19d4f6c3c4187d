use crate::fa::{ensure_completeness, CompletenessError, State, FA};
use crate::pair::OrderedPair;
use crate::set::DiscreteSet;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

/// The transition relation of an NFA. `None` means no transition is defined for the pair, which
/// is how symbols outside the intended alphabet get rejected.
pub trait NFATransition {
    fn transition(&self, state: State, symbol: char) -> Option<DiscreteSet<State>>;
}

impl<F> NFATransition for F
where
    F: Fn(State, char) -> Option<DiscreteSet<State>>,
{
    fn transition(&self, state: State, symbol: char) -> Option<DiscreteSet<State>> {
        self(state, symbol)
    }
}

/// The set of states reachable from `state` through empty string transitions only. It must
/// contain `state` itself.
pub trait EpsilonMove {
    fn epsilon_closure(&self, state: State) -> DiscreteSet<State>;
}

impl<F> EpsilonMove for F
where
    F: Fn(State) -> DiscreteSet<State>,
{
    fn epsilon_closure(&self, state: State) -> DiscreteSet<State> {
        self(state)
    }
}

pub struct NFA<T, E> {
    states: DiscreteSet<State>,
    alphabet: DiscreteSet<char>,
    start_state: State,
    final_states: DiscreteSet<State>,
    transition: T,
    epsilon: E,
}

impl<T, E> fmt::Debug for NFA<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NFA")
            .field("states", &self.states)
            .field("alphabet", &self.alphabet)
            .field("start_state", &self.start_state)
            .field("final_states", &self.final_states)
            .finish_non_exhaustive()
    }
}

impl<T: NFATransition, E: EpsilonMove> NFA<T, E> {
    /// Build an NFA. The same completeness rule as for a DFA applies: the start state must be in
    /// `states` and `final_states` must be a subset of `states`.
    pub fn new(
        states: DiscreteSet<State>,
        alphabet: DiscreteSet<char>,
        start_state: State,
        final_states: DiscreteSet<State>,
        transition: T,
        epsilon: E,
    ) -> Result<Self, CompletenessError> {
        if let Err(err) = ensure_completeness(&states, start_state, &final_states) {
            debug!(%err, "rejected incomplete NFA");
            return Err(err);
        }

        debug!(
            states = states.len(),
            alphabet = alphabet.len(),
            finals = final_states.len(),
            start_state,
            "constructed NFA"
        );

        Ok(NFA {
            states,
            alphabet,
            start_state,
            final_states,
            transition,
            epsilon,
        })
    }

    // Union of the epsilon closures of every state in the set
    fn close(&self, states: &DiscreteSet<State>) -> DiscreteSet<State> {
        let mut closed = DiscreteSet::new();
        for &state in states {
            closed.extend(self.epsilon.epsilon_closure(state));
        }
        closed
    }

    /// Simulate the NFA on the input and return the set of active states once it is consumed.
    ///
    /// The start set is closed first. Then, for every symbol, the current set is closed again
    /// and each of its states is moved on the symbol. The moved set is not closed until the next
    /// symbol comes in, so the returned set carries no trailing closure.
    pub fn current_states(&self, input: &str) -> DiscreteSet<State> {
        let mut current = self.close(&DiscreteSet::from([self.start_state]));

        for symbol in input.chars() {
            let closed = self.close(&current);
            let mut next = DiscreteSet::new();

            for &state in &closed {
                if let Some(targets) = self.transition.transition(state, symbol) {
                    next.extend(targets);
                }
            }

            trace!(?symbol, from = closed.len(), to = next.len(), "NFA step");
            current = next;
        }

        current
    }

    /// Evaluate the transition relation on every pair of `states × alphabet`. Pairs without a
    /// transition are kept in the table with `None`.
    pub fn transition_table(
        &self,
    ) -> HashMap<OrderedPair<State, char>, Option<DiscreteSet<State>>> {
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

    pub fn get_epsilon(&self) -> &E {
        &self.epsilon
    }
}

impl<T: NFATransition, E: EpsilonMove> FA for NFA<T, E> {
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
        !self
            .current_states(input)
            .intersect(&self.final_states)
            .is_empty()
    }
}

#[cfg(test)]
mod nfa_tests {
    use super::*;

    // a* : 0 --ε--> 1, 1 --a--> 1, only 1 is final
    fn a_star() -> NFA<
        impl Fn(State, char) -> Option<DiscreteSet<State>>,
        impl Fn(State) -> DiscreteSet<State>,
    > {
        NFA::new(
            DiscreteSet::from([0, 1]),
            DiscreteSet::from(['a']),
            0,
            DiscreteSet::from([1]),
            |state: State, symbol: char| match (state, symbol) {
                (1, 'a') => Some(DiscreteSet::from([1])),
                _ => None,
            },
            |state: State| match state {
                0 => DiscreteSet::from([0, 1]),
                _ => DiscreteSet::from([state]),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_a_star() {
        let nfa = a_star();
        assert!(nfa.run(""));
        assert!(nfa.run("a"));
        assert!(nfa.run("aaa"));
        assert!(!nfa.run("b"));
        assert!(!nfa.run("aab"));
    }

    #[test]
    fn test_empty_set_propagates() {
        let nfa = a_star();
        assert!(nfa.current_states("b").is_empty());
        assert!(nfa.current_states("baaaa").is_empty());
        assert!(!nfa.run("baaaa"));
    }

    #[test]
    fn test_start_set_is_closed() {
        let nfa = a_star();
        assert_eq!(nfa.current_states(""), DiscreteSet::from([0, 1]));
    }

    #[test]
    fn test_closure_not_applied_after_last_symbol() {
        // 0 loops on 'a' and reaches the final state 1 only through ε. The closure that would
        // reach 1 runs before each symbol, never after the last one.
        let nfa = NFA::new(
            DiscreteSet::from([0, 1]),
            DiscreteSet::from(['a']),
            0,
            DiscreteSet::from([1]),
            |state: State, symbol: char| match (state, symbol) {
                (0, 'a') => Some(DiscreteSet::from([0])),
                _ => None,
            },
            |state: State| match state {
                0 => DiscreteSet::from([0, 1]),
                _ => DiscreteSet::from([state]),
            },
        )
        .unwrap();

        assert!(nfa.run(""));
        assert_eq!(nfa.current_states("aa"), DiscreteSet::from([0]));
        assert!(!nfa.run("aa"));
    }

    #[test]
    fn test_nondeterministic_branches() {
        // Strings over {a, b} whose second to last symbol is 'a'
        let nfa = NFA::new(
            DiscreteSet::from([0, 1, 2]),
            DiscreteSet::from(['a', 'b']),
            0,
            DiscreteSet::from([2]),
            |state: State, symbol: char| match (state, symbol) {
                (0, 'a') => Some(DiscreteSet::from([0, 1])),
                (0, 'b') => Some(DiscreteSet::from([0])),
                (1, 'a') | (1, 'b') => Some(DiscreteSet::from([2])),
                _ => None,
            },
            |state: State| DiscreteSet::from([state]),
        )
        .unwrap();

        let samples = vec![
            ("ab", true),
            ("aa", true),
            ("bab", true),
            ("bbaab", true),
            ("", false),
            ("a", false),
            ("ba", false),
            ("abb", false),
        ];
        for (input, expected) in samples {
            assert_eq!(nfa.run(input), expected, "input: \"{input}\"");
        }
    }

    #[test]
    fn test_start_not_in_states() {
        let nfa = NFA::new(
            DiscreteSet::from([0, 1]),
            DiscreteSet::from(['a']),
            3,
            DiscreteSet::from([1]),
            |_: State, _: char| None,
            |state: State| DiscreteSet::from([state]),
        );
        match nfa {
            Err(CompletenessError::StartNotInStates(3)) => {}
            _ => panic!("StartNotInStates expected"),
        }
    }

    #[test]
    fn test_final_not_in_states() {
        let nfa = NFA::new(
            DiscreteSet::from([0, 1]),
            DiscreteSet::from(['a']),
            0,
            DiscreteSet::from([1, 2]),
            |_: State, _: char| None,
            |state: State| DiscreteSet::from([state]),
        );
        match nfa {
            Err(CompletenessError::FinalsNotSubset(stray)) => assert_eq!(stray, vec![2]),
            _ => panic!("FinalsNotSubset expected"),
        }
    }

    #[test]
    fn test_transition_table() {
        let nfa = a_star();
        let table = nfa.transition_table();

        assert_eq!(table.len(), 2);
        assert_eq!(table[&OrderedPair::new(0, 'a')], None);
        assert_eq!(
            table[&OrderedPair::new(1, 'a')],
            Some(DiscreteSet::from([1]))
        );
    }

    #[test]
    fn test_fa_trait_implementation_for_nfa() {
        let nfa = a_star();
        assert_eq!(nfa.get_start_state(), 0);
        assert_eq!(nfa.get_states().len(), 2);
        assert!(nfa.get_alphabet().contains(&'a'));
        assert_eq!(nfa.get_final_states(), &DiscreteSet::from([1]));
        assert_eq!(nfa.get_epsilon()(0), DiscreteSet::from([0, 1]));
        assert_eq!(nfa.get_transition()(0, 'a'), None);
    }
}
