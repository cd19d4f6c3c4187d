/* Transition strategies backed by explicit edge tables, for callers that would rather list the
 * edges of their automaton than write the transition function by hand. */

use crate::dfa::DFATransition;
use crate::fa::State;
use crate::nfa::{EpsilonMove, NFATransition};
use crate::pair::OrderedPair;
use crate::set::DiscreteSet;
use std::collections::{HashMap, VecDeque};

/// A DFA transition function stored as a `(state, symbol) -> state` table.
///
/// Pairs missing from the table send the automaton to the sink state, `State::MAX` unless set
/// with [`DFATable::with_sink`]. The sink has no outgoing edges, so once there the DFA stays.
#[derive(Debug, Clone)]
pub struct DFATable {
    transitions: HashMap<OrderedPair<State, char>, State>,
    sink: State,
}

impl Default for DFATable {
    fn default() -> Self {
        DFATable {
            transitions: HashMap::new(),
            sink: State::MAX,
        }
    }
}

impl DFATable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sink(mut self, sink: State) -> Self {
        self.sink = sink;
        self
    }

    /// Add the edge `from --symbol--> to`. Returns the target it replaced, if there was one.
    pub fn insert(&mut self, from: State, symbol: char, to: State) -> Option<State> {
        self.transitions.insert(OrderedPair::new(from, symbol), to)
    }

    pub fn get(&self, from: State, symbol: char) -> Option<State> {
        self.transitions.get(&OrderedPair::new(from, symbol)).copied()
    }

    pub fn get_sink(&self) -> State {
        self.sink
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

impl DFATransition for DFATable {
    fn transition(&self, state: State, symbol: char) -> State {
        self.get(state, symbol).unwrap_or(self.sink)
    }
}

// Lets the output of DFA::transition_table drive another DFA
impl From<HashMap<OrderedPair<State, char>, State>> for DFATable {
    fn from(transitions: HashMap<OrderedPair<State, char>, State>) -> Self {
        DFATable {
            transitions,
            sink: State::MAX,
        }
    }
}

/// An NFA stored as symbol edges plus empty string edges. Serves as both the transition relation
/// and the epsilon closure of an [`NFA`](crate::nfa::NFA).
#[derive(Debug, Clone, Default)]
pub struct NFATable {
    transitions: HashMap<OrderedPair<State, char>, DiscreteSet<State>>,
    epsilon_transitions: HashMap<State, DiscreteSet<State>>,
}

impl NFATable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the edge `from --symbol--> to`. Returns false if it was already there.
    pub fn insert(&mut self, from: State, symbol: char, to: State) -> bool {
        self.transitions
            .entry(OrderedPair::new(from, symbol))
            .or_default()
            .add(to)
    }

    /// Add the empty string edge `from --ε--> to`. Returns false if it was already there.
    pub fn insert_epsilon(&mut self, from: State, to: State) -> bool {
        self.epsilon_transitions.entry(from).or_default().add(to)
    }
}

impl NFATransition for NFATable {
    fn transition(&self, state: State, symbol: char) -> Option<DiscreteSet<State>> {
        self.transitions
            .get(&OrderedPair::new(state, symbol))
            .cloned()
    }
}

impl EpsilonMove for NFATable {
    fn epsilon_closure(&self, state: State) -> DiscreteSet<State> {
        let mut closure = DiscreteSet::from([state]); // A state always reaches itself
        let mut work_list = VecDeque::from([state]);

        while let Some(current) = work_list.pop_front() {
            let Some(targets) = self.epsilon_transitions.get(&current) else {
                continue;
            };

            for &target in targets {
                if closure.add(target) {
                    work_list.push_back(target);
                }
            }
        }
        closure
    }
}
