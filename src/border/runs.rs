//! Edge run measurement.
//!
//! An edge run is the number of consecutive white cells from one end of a
//! sample line, stopping at the first black cell or the end of the line.
//! All twelve runs of an image go through the single [`measure_run`].

use super::grid::BinaryGrid;

/// Scan direction. `Vertical` walks down a column, `Horizontal` across a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// Which column (vertical) or row (horizontal) is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePosition {
    First,
    Middle,
    Last,
}

impl LinePosition {
    pub const ALL: [LinePosition; 3] = [Self::First, Self::Middle, Self::Last];

    /// Index of the line among `count` parallel lines. `count` is non-zero.
    pub fn index(self, count: u32) -> u32 {
        match self {
            Self::First => 0,
            Self::Middle => count / 2,
            Self::Last => count - 1,
        }
    }
}

/// End of the line the walk starts from: top/left or bottom/right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Leading,
    Trailing,
}

/// Count leading `true` values.
pub fn run_length<I: IntoIterator<Item = bool>>(cells: I) -> u32 {
    cells.into_iter().take_while(|&white| white).count() as u32
}

/// Measure the white run on one sample line, walking inward from `edge`.
pub fn measure_run(grid: &BinaryGrid, axis: Axis, line: LinePosition, edge: Edge) -> u32 {
    let (len, fixed) = match axis {
        Axis::Vertical => (grid.height(), line.index(grid.width())),
        Axis::Horizontal => (grid.width(), line.index(grid.height())),
    };
    let cell = |i: u32| match axis {
        Axis::Vertical => grid.get(fixed, i),
        Axis::Horizontal => grid.get(i, fixed),
    };
    match edge {
        Edge::Leading => run_length((0..len).map(cell)),
        Edge::Trailing => run_length((0..len).rev().map(cell)),
    }
}

/// Runs from both ends of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineRuns {
    pub leading: u32,
    pub trailing: u32,
}

/// Runs of the first, middle and last lines along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisRuns {
    pub first: LineRuns,
    pub middle: LineRuns,
    pub last: LineRuns,
}

impl AxisRuns {
    pub fn measure(grid: &BinaryGrid, axis: Axis) -> Self {
        let line = |position| LineRuns {
            leading: measure_run(grid, axis, position, Edge::Leading),
            trailing: measure_run(grid, axis, position, Edge::Trailing),
        };
        Self {
            first: line(LinePosition::First),
            middle: line(LinePosition::Middle),
            last: line(LinePosition::Last),
        }
    }

    /// Shortest of the six runs: the border thickness common to all lines.
    pub fn min(&self) -> u32 {
        [self.first, self.middle, self.last]
            .iter()
            .flat_map(|l| [l.leading, l.trailing])
            .min()
            .unwrap_or(0)
    }
}

/// All sampled runs of one image.
///
/// `vertical` holds the left/middle/right columns measured from top and
/// bottom; `horizontal` the top/middle/bottom rows measured from left and right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeRuns {
    pub vertical: AxisRuns,
    pub horizontal: AxisRuns,
}

impl EdgeRuns {
    pub fn measure(grid: &BinaryGrid) -> Self {
        Self {
            vertical: AxisRuns::measure(grid, Axis::Vertical),
            horizontal: AxisRuns::measure(grid, Axis::Horizontal),
        }
    }
}
