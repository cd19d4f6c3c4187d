use color_eyre::eyre::Result;
use fasim::{DiscreteSet, NFATable, FA, NFA};

fn main() -> Result<()> {
    color_eyre::install()?;

    // (ab)* | c
    let mut edges = NFATable::new();
    edges.insert_epsilon(0, 1);
    edges.insert_epsilon(0, 3);
    edges.insert(1, 'a', 2);
    edges.insert(2, 'b', 1);
    edges.insert(3, 'c', 4);

    let nfa = NFA::new(
        DiscreteSet::from([0, 1, 2, 3, 4]),
        DiscreteSet::from(['a', 'b', 'c']),
        0,
        DiscreteSet::from([1, 4]),
        edges.clone(),
        edges,
    )?;

    for input in ["", "ab", "abab", "aba", "c", "cc", "abc"] {
        println!(
            "{:>6} -> {} (active states {})",
            format!("{input:?}"),
            nfa.run(input),
            nfa.current_states(input)
        );
    }

    let power_set = nfa.get_final_states().power_set();
    println!("subsets of the final states: {}", power_set.len());

    Ok(())
}
