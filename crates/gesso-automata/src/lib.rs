//! Elementary cellular automaton engine for generative sketches.
//!
//! Simulates a 1D binary automaton under a numbered Wolfram rule. The rule
//! byte encodes, bit by bit, the output for each of the 8 possible 3-cell
//! neighborhoods. The row has a fixed absorbing zero boundary: the first
//! and last cells stay dead in every generation and only interior cells
//! are recomputed.
//!
//! # Example
//!
//! ```
//! use gesso_automata::{ElementaryAutomaton, InitialCells};
//!
//! let mut ca = ElementaryAutomaton::new(7, 30, InitialCells::Middle);
//! ca.step();
//!
//! // Rule 30's first step from a single middle seed.
//! assert_eq!(ca.cells(), &[false, false, true, true, true, false, false]);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rand::Rng;
use thiserror::Error;

/// Smallest drawable cell width in pixels.
pub const MIN_CELL_WIDTH: u32 = 2;
/// Largest drawable cell width in pixels.
pub const MAX_CELL_WIDTH: u32 = 100;

/// Grid line color drawn between cells.
///
/// A pure rendering hint: the engine carries it through the config but
/// never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GridColor {
    /// No grid lines.
    Off,
    /// Light gray lines.
    #[default]
    Light,
    /// Dark gray lines.
    Dark,
    /// Black lines.
    Black,
}

/// How the first generation is seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum InitialCells {
    /// A single live cell in the middle of the row.
    #[default]
    Middle,
    /// Every even-indexed cell live.
    Alternating,
    /// Each cell live with probability 0.5.
    Random,
}

/// Error for configuration values outside their documented range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Cell width outside `MIN_CELL_WIDTH..=MAX_CELL_WIDTH`.
    #[error("cell width out of range: {0} (expected {MIN_CELL_WIDTH}..={MAX_CELL_WIDTH})")]
    CellWidthOutOfRange(u32),
}

/// Automaton configuration, owned by the caller and passed to the engine
/// at construction.
///
/// With the `serde` feature, round-trips through shareable
/// query-parameter style configs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AutomatonConfig {
    /// Wolfram rule number. The full 0-255 range is valid by type.
    pub rule: u8,
    /// Cell width in pixels, `MIN_CELL_WIDTH..=MAX_CELL_WIDTH`.
    pub cell_width: u32,
    /// Grid line rendering hint.
    pub grid: GridColor,
    /// Initial condition for the first generation.
    pub start: InitialCells,
}

impl Default for AutomatonConfig {
    fn default() -> Self {
        Self {
            rule: 30,
            cell_width: 10,
            grid: GridColor::Light,
            start: InitialCells::Middle,
        }
    }
}

impl AutomatonConfig {
    /// Rejects out-of-range values instead of clamping.
    pub fn validated(self) -> Result<Self, ConfigError> {
        if !(MIN_CELL_WIDTH..=MAX_CELL_WIDTH).contains(&self.cell_width) {
            return Err(ConfigError::CellWidthOutOfRange(self.cell_width));
        }
        Ok(self)
    }

    /// Clamps out-of-range values into their documented range.
    pub fn clamped(mut self) -> Self {
        self.cell_width = self.cell_width.clamp(MIN_CELL_WIDTH, MAX_CELL_WIDTH);
        self
    }

    /// Number of whole cells that fit across a canvas, leaving `padding`
    /// pixels on each side.
    pub fn column_count(&self, canvas_width: u32, padding: u32) -> usize {
        let usable = canvas_width.saturating_sub(padding * 2);
        (usable / self.cell_width.max(1)) as usize
    }
}

/// Steps the cell width up one notch, with coarser steps at larger widths.
pub fn next_cell_width(current: u32) -> u32 {
    match current {
        w if w < 10 => (w + 1).min(10),
        w if w < 20 => (w + 2).min(20),
        w if w < 50 => (w + 5).min(50),
        w if w < 100 => (w + 10).min(100),
        _ => MAX_CELL_WIDTH,
    }
}

/// Steps the cell width down one notch, mirroring [`next_cell_width`].
pub fn previous_cell_width(current: u32) -> u32 {
    match current {
        w if w <= 10 => w.saturating_sub(1).max(MIN_CELL_WIDTH),
        w if w <= 20 => (w - 2).max(10),
        w if w <= 50 => (w - 5).max(20),
        w if w <= 100 => (w - 10).max(50),
        _ => 50,
    }
}

// ============================================================================
// Rule evaluation
// ============================================================================

/// Looks up the next state of a cell from its 3-cell neighborhood.
///
/// The neighborhood forms a 3-bit index (left is the high bit) into the
/// rule byte. Pure and total over all 256 rules.
pub fn apply_rule(rule: u8, left: bool, center: bool, right: bool) -> bool {
    let index = (left as u8) << 2 | (center as u8) << 1 | right as u8;
    (rule >> index) & 1 == 1
}

/// Computes the next generation of a row.
///
/// The result has the same length as the input. Index 0 and the last index
/// are always dead (absorbing zero boundary, no wrapping); interior cells
/// are recomputed with [`apply_rule`]. The input is not mutated.
pub fn next_generation(cells: &[bool], rule: u8) -> Vec<bool> {
    let mut next = vec![false; cells.len()];

    for i in 1..cells.len().saturating_sub(1) {
        next[i] = apply_rule(rule, cells[i - 1], cells[i], cells[i + 1]);
    }

    next
}

// ============================================================================
// Engine
// ============================================================================

/// A running elementary cellular automaton.
///
/// Holds only the current row; drivers that draw the classic triangle
/// redraw row by row rather than storing history. The row length is fixed
/// at construction; rule, width, or seeding changes require a fresh
/// engine. Stepping is O(columns) so an unbounded number of generations
/// can be requested.
#[derive(Debug, Clone)]
pub struct ElementaryAutomaton {
    cells: Vec<bool>,
    rule: u8,
    generation: u64,
}

impl ElementaryAutomaton {
    /// Creates an automaton with `columns` cells seeded by `start`.
    ///
    /// [`InitialCells::Random`] draws from the thread RNG; use
    /// [`ElementaryAutomaton::new_with_rng`] for reproducible seeding.
    pub fn new(columns: usize, rule: u8, start: InitialCells) -> Self {
        Self::new_with_rng(columns, rule, start, &mut rand::rng())
    }

    /// Creates an automaton with a caller-supplied random source.
    pub fn new_with_rng<R: Rng>(columns: usize, rule: u8, start: InitialCells, rng: &mut R) -> Self {
        let mut cells = vec![false; columns];

        match start {
            InitialCells::Middle => {
                if columns > 0 {
                    cells[columns / 2] = true;
                }
            }
            InitialCells::Alternating => {
                for cell in cells.iter_mut().step_by(2) {
                    *cell = true;
                }
            }
            InitialCells::Random => {
                for cell in &mut cells {
                    *cell = rng.random_bool(0.5);
                }
            }
        }

        Self {
            cells,
            rule,
            generation: 0,
        }
    }

    /// Creates an automaton sized to a canvas from a config.
    pub fn from_config(config: &AutomatonConfig, canvas_width: u32, padding: u32) -> Self {
        Self::from_config_with_rng(config, canvas_width, padding, &mut rand::rng())
    }

    /// Creates an automaton sized to a canvas with a caller-supplied
    /// random source.
    pub fn from_config_with_rng<R: Rng>(
        config: &AutomatonConfig,
        canvas_width: u32,
        padding: u32,
        rng: &mut R,
    ) -> Self {
        let config = config.clamped();
        Self::new_with_rng(
            config.column_count(canvas_width, padding),
            config.rule,
            config.start,
            rng,
        )
    }

    /// Returns the number of columns.
    pub fn columns(&self) -> usize {
        self.cells.len()
    }

    /// Returns the rule number.
    pub fn rule(&self) -> u8 {
        self.rule
    }

    /// Returns how many generations have been computed.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the current row.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Advances by one generation.
    pub fn step(&mut self) {
        self.cells = next_generation(&self.cells, self.rule);
        self.generation += 1;
    }

    /// Advances by `n` generations.
    pub fn steps(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Collects `n` successive generations, starting with the current row.
    ///
    /// Advances the automaton by `n` steps; drivers draw each returned row
    /// as one line of the triangle.
    pub fn rows(&mut self, n: usize) -> Vec<Vec<bool>> {
        let mut rows = Vec::with_capacity(n);
        for _ in 0..n {
            rows.push(self.cells.clone());
            self.step();
        }
        rows
    }
}
