//! Fractal path generators for generative sketches.
//!
//! A generator turns an iteration depth into a stream of turtle
//! instructions, then replays them through a [`Turtle`] anchored at a
//! caller-supplied segment to produce a concrete point path. Two rule sets
//! are provided: the right-angle [`KochIsland`] and the [`DragonCurve`].
//!
//! Instruction generation is independent of absolute scale. Forward
//! distances are fractions of the anchoring segment's length and only get
//! scaled when the instructions are replayed, so the same instruction list
//! serves any segment size.
//!
//! # Example
//!
//! ```
//! use gesso_fractal::{DragonCurve, FractalGenerator, FractalSegment};
//! use glam::Vec2;
//!
//! let dragon = DragonCurve;
//! let segment = FractalSegment::new(Vec2::ZERO, Vec2::new(100.0, 0.0), 0.0);
//! let path = dragon.generate_path(&segment, 8);
//!
//! // 2^8 forward moves plus the starting point.
//! assert_eq!(path.len(), 257);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use gesso_turtle::{Turtle, TurtleInstruction};
use glam::Vec2;

use std::f32::consts::{FRAC_PI_2, PI};

/// Anchors a fractal curve in the plane.
///
/// `angle` is the direction from `start` to `end` in radians and becomes
/// the generator's initial heading. The distance between the two points
/// sets the scale of the replayed instructions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FractalSegment {
    /// Anchor point the curve starts from.
    pub start: Vec2,
    /// Reference end point; sets the curve's scale.
    pub end: Vec2,
    /// Direction from start to end, in radians.
    pub angle: f32,
}

impl FractalSegment {
    /// Creates a segment with an explicit angle.
    pub fn new(start: Vec2, end: Vec2, angle: f32) -> Self {
        Self { start, end, angle }
    }

    /// Creates a segment whose angle is derived from its endpoints.
    pub fn from_endpoints(start: Vec2, end: Vec2) -> Self {
        let delta = end - start;
        Self {
            start,
            end,
            angle: delta.y.atan2(delta.x),
        }
    }

    /// Euclidean distance between the endpoints.
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// A rule set that expands an iteration depth into turtle instructions.
///
/// Implementations are stateless: `instructions(n)` is a pure function of
/// `n`, so a single generator value can serve concurrent callers.
pub trait FractalGenerator {
    /// Generates the instruction list for the given iteration depth.
    ///
    /// Iteration 0 yields the base case, a single unit forward move.
    /// Forward distances are fractions of the anchoring segment's length.
    fn instructions(&self, iteration: u32) -> Vec<TurtleInstruction>;

    /// The segments the full figure is anchored to. A closed shape (such
    /// as the Koch island's square) returns one segment per side.
    fn initial_segments(&self) -> Vec<FractalSegment>;

    /// Practical depth cap for drivers. Instruction counts grow
    /// exponentially with iteration, so callers should clamp requested
    /// depths with [`clamp_iteration`] before generating.
    fn max_iteration(&self) -> u32;

    /// Generates the point path for one segment at the given depth.
    ///
    /// Forward distances are multiplied by the segment length; turns pass
    /// through unscaled. A zero-length segment is valid and produces a
    /// path of coincident points.
    fn generate_path(&self, segment: &FractalSegment, iteration: u32) -> Vec<Vec2> {
        let length = segment.length();
        let mut turtle = Turtle::new(segment.start, segment.angle);

        for instruction in self.instructions(iteration) {
            match instruction {
                TurtleInstruction::Forward(distance) => turtle.forward(distance * length),
                TurtleInstruction::Turn(degrees) => turtle.turn(degrees),
            }
        }

        turtle.path()
    }
}

/// Generates one path per initial segment, tracing the full figure.
pub fn generate_paths(generator: &impl FractalGenerator, iteration: u32) -> Vec<Vec<Vec2>> {
    generator
        .initial_segments()
        .iter()
        .map(|segment| generator.generate_path(segment, iteration))
        .collect()
}

/// Clamps a requested depth to the generator's practical maximum.
pub fn clamp_iteration(generator: &impl FractalGenerator, requested: u32) -> u32 {
    requested.min(generator.max_iteration())
}

// ============================================================================
// Koch island
// ============================================================================

/// Right-angle Koch island.
///
/// Each iteration replaces every forward move with an 8-segment notch
/// motif at quarter length, using 90-degree turns only. The full island is
/// the motif applied to the four sides of a unit square.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KochIsland;

impl FractalGenerator for KochIsland {
    fn instructions(&self, iteration: u32) -> Vec<TurtleInstruction> {
        use TurtleInstruction::{Forward, Turn};

        let mut instructions = vec![Forward(1.0)];

        // Level-by-level expansion. Each forward becomes 14 instructions
        // (8 forwards, 6 turns); turns carry over untouched.
        for _ in 0..iteration {
            let mut next = Vec::with_capacity(instructions.len() * 14);
            for instruction in &instructions {
                match *instruction {
                    Forward(distance) => {
                        let step = distance / 4.0;
                        next.extend_from_slice(&[
                            Forward(step),
                            Turn(90.0),
                            Forward(step),
                            Turn(-90.0),
                            Forward(step),
                            Turn(-90.0),
                            Forward(step),
                            Forward(step),
                            Turn(90.0),
                            Forward(step),
                            Turn(90.0),
                            Forward(step),
                            Turn(-90.0),
                            Forward(step),
                        ]);
                    }
                    Turn(degrees) => next.push(Turn(degrees)),
                }
            }
            instructions = next;
        }

        instructions
    }

    fn initial_segments(&self) -> Vec<FractalSegment> {
        // The four sides of a unit square, traced clockwise in canvas
        // coordinates (y grows downward).
        vec![
            FractalSegment::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), 0.0),
            FractalSegment::new(Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0), FRAC_PI_2),
            FractalSegment::new(Vec2::new(1.0, 1.0), Vec2::new(0.0, 1.0), PI),
            FractalSegment::new(Vec2::new(0.0, 1.0), Vec2::new(0.0, 0.0), 3.0 * FRAC_PI_2),
        ]
    }

    fn max_iteration(&self) -> u32 {
        // 8^n forwards per side; depth 4 is already 4096 segments a side.
        4
    }
}

// ============================================================================
// Dragon curve
// ============================================================================

/// Heighway dragon curve.
///
/// Built by L-system string rewriting over the alphabet `F`, `L`, `R`:
/// each iteration appends an `R` and the reversed, turn-flipped copy of
/// the previous sequence. `F` is a unit forward move, `R`/`L` are
/// 90-degree turns.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DragonCurve;

impl DragonCurve {
    /// Generates the rewriting sequence for the given iteration depth.
    ///
    /// Iteration 0 is `"F"`; each step maps `s` to `s + "R" + flip(rev(s))`
    /// where `flip` swaps `L` and `R`. The length recurrence is
    /// `len(n) = 2 * len(n - 1) + 1 = 2^(n + 1) - 1`.
    pub fn sequence(&self, iteration: u32) -> String {
        let mut sequence = String::from("F");

        for _ in 0..iteration {
            let flipped: String = sequence
                .chars()
                .rev()
                .map(|c| match c {
                    'L' => 'R',
                    'R' => 'L',
                    other => other,
                })
                .collect();

            sequence.reserve(flipped.len() + 1);
            sequence.push('R');
            sequence.push_str(&flipped);
        }

        sequence
    }
}

impl FractalGenerator for DragonCurve {
    fn instructions(&self, iteration: u32) -> Vec<TurtleInstruction> {
        use TurtleInstruction::{Forward, Turn};

        self.sequence(iteration)
            .chars()
            .map(|c| match c {
                'F' => Forward(1.0),
                'R' => Turn(90.0),
                _ => Turn(-90.0),
            })
            .collect()
    }

    fn initial_segments(&self) -> Vec<FractalSegment> {
        vec![FractalSegment::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            0.0,
        )]
    }

    fn max_iteration(&self) -> u32 {
        // 2^n forwards; depth 15 is 32768 segments.
        15
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TurtleInstruction::{Forward, Turn};

    fn forward_count(instructions: &[TurtleInstruction]) -> usize {
        instructions
            .iter()
            .filter(|i| matches!(i, Forward(_)))
            .count()
    }

    #[test]
    fn test_koch_base_case() {
        assert_eq!(KochIsland.instructions(0), vec![Forward(1.0)]);
    }

    #[test]
    fn test_koch_first_iteration_motif() {
        let expected = vec![
            Forward(0.25),
            Turn(90.0),
            Forward(0.25),
            Turn(-90.0),
            Forward(0.25),
            Turn(-90.0),
            Forward(0.25),
            Forward(0.25),
            Turn(90.0),
            Forward(0.25),
            Turn(90.0),
            Forward(0.25),
            Turn(-90.0),
            Forward(0.25),
        ];
        assert_eq!(KochIsland.instructions(1), expected);
    }

    #[test]
    fn test_koch_forward_growth() {
        // 8^n forward instructions per side.
        for n in 0..4 {
            let instructions = KochIsland.instructions(n);
            assert_eq!(forward_count(&instructions), 8usize.pow(n));
        }
    }

    #[test]
    fn test_koch_motif_preserves_endpoint() {
        // The notch detour returns to where a plain forward would end.
        let segment = FractalSegment::new(Vec2::ZERO, Vec2::new(4.0, 0.0), 0.0);

        for n in 0..3 {
            let path = KochIsland.generate_path(&segment, n);
            let end = *path.last().unwrap();
            assert!(
                (end - Vec2::new(4.0, 0.0)).length() < 1e-3,
                "iteration {n} ended at {end:?}"
            );
        }
    }

    #[test]
    fn test_koch_island_four_sides() {
        let segments = KochIsland.initial_segments();
        assert_eq!(segments.len(), 4);

        // Sides chain into a closed square.
        for (side, next) in segments.iter().zip(segments.iter().cycle().skip(1)) {
            assert_eq!(side.end, next.start);
        }
        for side in &segments {
            assert!((side.length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_dragon_base_case() {
        assert_eq!(DragonCurve.sequence(0), "F");
        assert_eq!(DragonCurve.instructions(0), vec![Forward(1.0)]);
    }

    #[test]
    fn test_dragon_sequence_literals() {
        assert_eq!(DragonCurve.sequence(1), "FRF");
        assert_eq!(DragonCurve.sequence(2), "FRFRFLF");
        assert_eq!(DragonCurve.sequence(3), "FRFRFLFRFRFLFLF");
    }

    #[test]
    fn test_dragon_length_recurrence() {
        // len(n) = 2^(n + 1) - 1 characters, 2^n of them forwards.
        for n in 0..10 {
            let sequence = DragonCurve.sequence(n);
            assert_eq!(sequence.len(), 2usize.pow(n + 1) - 1);
            assert_eq!(
                sequence.chars().filter(|&c| c == 'F').count(),
                2usize.pow(n)
            );
        }
    }

    #[test]
    fn test_dragon_turns_are_right_angles() {
        for instruction in DragonCurve.instructions(5) {
            match instruction {
                Forward(d) => assert_eq!(d, 1.0),
                Turn(a) => assert!(a == 90.0 || a == -90.0),
            }
        }
    }

    #[test]
    fn test_generate_path_point_count() {
        let segment = FractalSegment::new(Vec2::ZERO, Vec2::new(1.0, 0.0), 0.0);

        let path = KochIsland.generate_path(&segment, 1);
        assert_eq!(path.len(), 9); // 8 forwards + start

        let path = DragonCurve.generate_path(&segment, 6);
        assert_eq!(path.len(), 65); // 2^6 forwards + start
    }

    #[test]
    fn test_scale_invariance() {
        // Doubling the segment length scales every point by 2 from the
        // origin; instruction generation itself is scale-free.
        let small = FractalSegment::new(Vec2::ZERO, Vec2::new(10.0, 0.0), 0.0);
        let large = FractalSegment::new(Vec2::ZERO, Vec2::new(20.0, 0.0), 0.0);

        for generator in [&KochIsland as &dyn FractalGenerator, &DragonCurve] {
            let path_small = generator.generate_path(&small, 3);
            let path_large = generator.generate_path(&large, 3);

            assert_eq!(path_small.len(), path_large.len());
            for (a, b) in path_small.iter().zip(&path_large) {
                assert!((*a * 2.0 - *b).length() < 1e-3);
            }
        }
    }

    #[test]
    fn test_degenerate_segment() {
        // Zero-length anchor: every forward scales to zero, so the path is
        // all coincident points. Valid, not an error.
        let segment = FractalSegment::new(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0), 0.0);
        let path = DragonCurve.generate_path(&segment, 4);

        assert_eq!(path.len(), 17);
        for point in &path {
            assert_eq!(*point, Vec2::new(5.0, 5.0));
        }
    }

    #[test]
    fn test_generate_paths_per_segment() {
        assert_eq!(generate_paths(&KochIsland, 1).len(), 4);
        assert_eq!(generate_paths(&DragonCurve, 1).len(), 1);
    }

    #[test]
    fn test_clamp_iteration() {
        assert_eq!(clamp_iteration(&KochIsland, 2), 2);
        assert_eq!(clamp_iteration(&KochIsland, 99), 4);
        assert_eq!(clamp_iteration(&DragonCurve, 99), 15);
    }

    #[test]
    fn test_segment_from_endpoints() {
        let segment = FractalSegment::from_endpoints(Vec2::ZERO, Vec2::new(0.0, 2.0));
        assert!((segment.angle - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((segment.length() - 2.0).abs() < 1e-6);
    }
}
