use log::{debug, trace};
use ndarray::{Array2, ArrayView2, Axis};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use Side::{Down, Left, Right, Up};

use crate::error::FieldError;

/// Smallest board that can hold the two opening tiles.
pub const MIN_SIZE: usize = 2;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    Down,
    Left,
    Up,
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Up, Down, Left, Right];

    fn lanes(self) -> (Axis, bool) {
        match self {
            Up => (Axis(0), false),
            Down => (Axis(0), true),
            Left => (Axis(1), false),
            Right => (Axis(1), true),
        }
    }
}

/// Returns the compacted line and whether any tile ended up at an index other
/// than the one it started from. A merged tile always counts as moved. Tiles
/// whose double does not fit in `u32` never merge.
fn compact_line(line: &[u32]) -> (Vec<u32>, bool) {
    let mut result = vec![0; line.len()];
    let mut len = 0;
    let mut merged = false;
    let mut moved = false;
    for (pos, &value) in line.iter().enumerate() {
        if value == 0 {
            continue;
        }
        if len > 0 && result[len - 1] == value && !merged && value <= u32::MAX / 2 {
            result[len - 1] *= 2;
            merged = true;
        } else {
            result[len] = value;
            len += 1;
            merged = false;
        }
        if pos != len - 1 {
            moved = true;
        }
    }
    (result, moved)
}

/// Square 2048 board. Cells hold 0 for empty or the tile value.
#[derive(Debug)]
pub struct Field {
    cells: Array2<u32>,
    rng: StdRng,
}

impl Field {
    pub fn new(size: usize) -> Result<Self, FieldError> {
        Self::with_rng(size, StdRng::from_entropy())
    }

    pub fn with_seed(size: usize, seed: u64) -> Result<Self, FieldError> {
        Self::with_rng(size, StdRng::seed_from_u64(seed))
    }

    fn with_rng(size: usize, rng: StdRng) -> Result<Self, FieldError> {
        check_size(size)?;
        let mut field = Self {
            cells: Array2::zeros((size, size)),
            rng,
        };
        field.spawn_tile()?;
        field.spawn_tile()?;
        Ok(field)
    }

    /// Adopts an existing layout as is, without spawning opening tiles.
    pub fn from_array(array: Array2<u32>, seed: u64) -> Result<Self, FieldError> {
        let (rows, cols) = array.dim();
        if rows != cols {
            return Err(FieldError::NotSquare { rows, cols });
        }
        check_size(rows)?;
        for ((row, col), &value) in array.indexed_iter() {
            if value != 0 && (value < 2 || !value.is_power_of_two()) {
                return Err(FieldError::InvalidTile { row, col, value });
            }
        }
        Ok(Self {
            cells: array,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn to_array(&self) -> Array2<u32> {
        self.cells.clone()
    }

    pub fn cells(&self) -> ArrayView2<'_, u32> {
        self.cells.view()
    }

    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.cells.get((row, col)).copied()
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    pub fn spawn_tile(&mut self) -> Result<(usize, usize), FieldError> {
        if !self.cells.iter().any(|&v| v == 0) {
            return Err(FieldError::NoFreeCells);
        }
        let size = self.size();
        let (row, col) = loop {
            let row = self.rng.gen_range(0..size);
            let col = self.rng.gen_range(0..size);
            if self.cells[(row, col)] == 0 {
                break (row, col);
            }
        };
        let value = if self.rng.gen_range(0..10) == 9 { 4 } else { 2 };
        self.cells[(row, col)] = value;
        debug!("spawned {} at ({}, {})", value, row, col);
        Ok((row, col))
    }

    pub fn swipe(&mut self, side: Side) -> bool {
        let (axis, reversed) = side.lanes();
        let mut moved = false;
        for mut lane in self.cells.lanes_mut(axis) {
            if reversed {
                lane.invert_axis(Axis(0));
            }
            let (line, lane_moved) = compact_line(&lane.to_vec());
            for (cell, value) in lane.iter_mut().zip(line) {
                *cell = value;
            }
            moved |= lane_moved;
        }
        trace!("swipe {:?}: moved={}", side, moved);
        moved
    }

    pub fn move_up(&mut self) -> bool {
        self.swipe(Up)
    }

    pub fn move_down(&mut self) -> bool {
        self.swipe(Down)
    }

    pub fn move_left(&mut self) -> bool {
        self.swipe(Left)
    }

    pub fn move_right(&mut self) -> bool {
        self.swipe(Right)
    }

    /// True if a cell is empty or equals its lower or right neighbour. Does not
    /// try the moves themselves.
    pub fn can_move(&self) -> bool {
        let size = self.size();
        self.cells.indexed_iter().any(|((row, col), &value)| {
            value == 0
                || (row + 1 < size && self.cells[(row + 1, col)] == value)
                || (col + 1 < size && self.cells[(row, col + 1)] == value)
        })
    }
}

fn check_size(size: usize) -> Result<(), FieldError> {
    if size < MIN_SIZE {
        return Err(FieldError::InvalidSize {
            size,
            min: MIN_SIZE,
        });
    }
    Ok(())
}
