use color_eyre::eyre::Result;
use fasim::{CompletenessError, DFATable, DiscreteSet, OrderedPair, State, DFA, FA};

fn even_ones(state: State, symbol: char) -> State {
    match (state, symbol) {
        (0, '0') | (1, '1') => 0,
        _ => 1,
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let states = DiscreteSet::from([0, 1]);
    let alphabet = DiscreteSet::from(['0', '1']);

    let dfa = DFA::new(
        states.clone(),
        alphabet.clone(),
        0,
        DiscreteSet::from([0]),
        even_ones,
    )?;

    for input in ["", "1", "11", "1011", "2"] {
        println!("{:>6} -> {}", format!("{input:?}"), dfa.run(input));
    }

    let mut table: Vec<(OrderedPair<State, char>, State)> =
        dfa.transition_table().into_iter().collect();
    table.sort();
    for (pair, target) in &table {
        println!("{pair} => {target}");
    }

    // The same automaton rebuilt from its own table
    let rebuilt = DFA::new(
        states.clone(),
        alphabet.clone(),
        0,
        DiscreteSet::from([0]),
        DFATable::from(dfa.transition_table()),
    )?;
    println!("rebuilt accepts 0110: {}", rebuilt.run("0110"));

    let broken = DFA::new(states, alphabet, 5, DiscreteSet::from([0]), even_ones);
    if let Err(err @ CompletenessError::StartNotInStates(_)) = broken {
        println!("{err}");
    }

    Ok(())
}
