#![no_main]

use gesso_fractal::{DragonCurve, FractalGenerator};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|iteration: u8| {
    // sequence generation should never panic; cap the depth to keep the
    // doubling growth within memory
    let iteration = u32::from(iteration % 16);

    let sequence = DragonCurve.sequence(iteration);
    assert_eq!(sequence.len(), 2usize.pow(iteration + 1) - 1);

    let instructions = DragonCurve.instructions(iteration);
    assert_eq!(instructions.len(), sequence.len());
});
