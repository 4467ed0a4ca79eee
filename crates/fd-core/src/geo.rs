//! Grid coordinates and the distance/step rules vehicles move by.
//!
//! The world is a square `grid_size × grid_size` lattice.  Travel time
//! between two cells is their Manhattan distance in ticks; vehicles move one
//! unit step per tick, resolving the x-axis before the y-axis.

/// One cell of the square dispatch grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// The four unit offsets a vehicle may step by (W, E, S, N).
    pub const UNIT_STEPS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `|Δx| + |Δy|` between two cells.
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The next cell on the way to `target`: x-axis first, then y-axis.
    /// Returns `self` unchanged when already at `target`.
    pub fn step_toward(self, target: Cell) -> Cell {
        let Cell { x, y } = self;
        if x < target.x {
            Cell::new(x + 1, y)
        } else if x > target.x {
            Cell::new(x - 1, y)
        } else if y < target.y {
            Cell::new(x, y + 1)
        } else if y > target.y {
            Cell::new(x, y - 1)
        } else {
            self
        }
    }

    /// Offset by `(dx, dy)` and clamp into `[0, grid_size - 1]` on both axes.
    pub fn offset_clamped(self, (dx, dy): (i32, i32), grid_size: u32) -> Cell {
        let max = grid_size.saturating_sub(1) as i32;
        Cell::new((self.x + dx).clamp(0, max), (self.y + dy).clamp(0, max))
    }

    /// `true` if the cell lies on a `grid_size × grid_size` grid.
    #[inline]
    pub fn in_grid(self, grid_size: u32) -> bool {
        let n = grid_size as i64;
        (0..n).contains(&(self.x as i64)) && (0..n).contains(&(self.y as i64))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
