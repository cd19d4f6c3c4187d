use crate::set::DiscreteSet;
use std::fmt;

/// States are numbered
pub type State = usize;

/// Behaviour shared by the deterministic and the nondeterministic engine
pub trait FA {
    fn get_states(&self) -> &DiscreteSet<State>;
    fn get_alphabet(&self) -> &DiscreteSet<char>;
    fn get_start_state(&self) -> State;
    fn get_final_states(&self) -> &DiscreteSet<State>;
    /// Read the whole input and report whether the automaton accepts it
    fn run(&self, input: &str) -> bool;
}

/// Raised when an automaton is built with a start state or final states outside its state set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletenessError {
    /// The start state is not a member of the set of states
    StartNotInStates(State),
    /// These final states are not members of the set of states
    FinalsNotSubset(Vec<State>),
}

impl fmt::Display for CompletenessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletenessError::StartNotInStates(start) => write!(
                f,
                "Error: Automaton is not complete! Start state {} is not in the set of states",
                start
            ),
            CompletenessError::FinalsNotSubset(finals) => write!(
                f,
                "Error: Automaton is not complete! Final states {:?} are not in the set of states",
                finals
            ),
        }
    }
}

impl std::error::Error for CompletenessError {}

/// Check that the start state and every final state belong to the set of states. Both engines
/// run this once, before the automaton exists.
pub fn ensure_completeness(
    states: &DiscreteSet<State>,
    start_state: State,
    final_states: &DiscreteSet<State>,
) -> Result<(), CompletenessError> {
    if !states.contains(&start_state) {
        return Err(CompletenessError::StartNotInStates(start_state));
    }

    if !final_states.is_subset_of(states) {
        let mut stray: Vec<State> = final_states
            .iter()
            .filter(|state| !states.contains(state))
            .copied()
            .collect();
        stray.sort_unstable();
        return Err(CompletenessError::FinalsNotSubset(stray));
    }

    Ok(())
}
