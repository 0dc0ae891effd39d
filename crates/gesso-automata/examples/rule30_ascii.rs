//! Elementary cellular automaton demo.
//!
//! Prints the classic rule triangle as ASCII art, one row per generation.
//!
//! Run with: `cargo run -p gesso-automata --example rule30_ascii`

use gesso_automata::{AutomatonConfig, ElementaryAutomaton, InitialCells};

fn main() {
    let config = AutomatonConfig {
        rule: 30,
        start: InitialCells::Middle,
        ..Default::default()
    };

    println!("=== Rule {} ===\n", config.rule);

    let mut ca = ElementaryAutomaton::new(79, config.rule, config.start);

    for row in ca.rows(36) {
        let line: String = row.iter().map(|&c| if c { '█' } else { ' ' }).collect();
        println!("{line}");
    }

    println!("\n{} generations computed", ca.generation());
}
