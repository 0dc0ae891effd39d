#![no_main]

use gesso_automata::next_generation;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // next_generation should never panic for any rule and row
    let Some((&rule, row)) = data.split_first() else {
        return;
    };

    let cells: Vec<bool> = row.iter().map(|&b| b & 1 == 1).collect();
    let next = next_generation(&cells, rule);

    assert_eq!(next.len(), cells.len());
    if let (Some(&first), Some(&last)) = (next.first(), next.last()) {
        assert!(!first && (next.len() == 1 || !last));
    }
});
