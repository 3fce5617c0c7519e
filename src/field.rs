use crate::grid::Grid;

#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    grid: Grid,
    data: Vec<f32>,
}

impl Field {
    pub fn new(grid: Grid, fill: f32) -> Self {
        let data = vec![fill; grid.size()];
        Self { grid, data }
    }

    pub fn zeros(grid: Grid) -> Self {
        Self::new(grid, 0.0)
    }

    pub fn from_fn(grid: Grid, f: impl Fn(usize, usize) -> f32) -> Self {
        let data = (0..grid.size())
            .map(|idx| {
                let (i, j) = grid.coords(idx);
                f(i, j)
            })
            .collect();
        Self { grid, data }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.data[self.grid.idx(i, j)]
    }

    pub fn set(&mut self, i: usize, j: usize, value: f32) {
        let idx = self.grid.idx(i, j);
        self.data[idx] = value;
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// `self += other * scale` over every cell, boundary ring included.
    pub fn add_scaled_in_place(&mut self, other: &Self, scale: f32) {
        self.assert_same_grid(other);
        for (value, other_value) in self.data.iter_mut().zip(other.data.iter()) {
            *value += other_value * scale;
        }
    }

    /// Bilinear sample at a fractional cell coordinate.
    ///
    /// The caller keeps `(x, y)` inside `[0, n + 1)` on both axes so that all
    /// four source cells exist.
    pub fn sample_bilinear(&self, x: f32, y: f32) -> f32 {
        let i0 = x.floor() as usize;
        let j0 = y.floor() as usize;
        let i1 = i0 + 1;
        let j1 = j0 + 1;
        let s1 = x - i0 as f32;
        let s0 = 1.0 - s1;
        let t1 = y - j0 as f32;
        let t0 = 1.0 - t1;
        s0 * (t0 * self.get(i0, j0) + t1 * self.get(i0, j1))
            + s1 * (t0 * self.get(i1, j0) + t1 * self.get(i1, j1))
    }

    pub fn interior_sum(&self) -> f32 {
        self.grid.interior().map(|(i, j)| self.get(i, j)).sum()
    }

    pub fn interior_abs_sum(&self) -> f32 {
        self.grid.interior().map(|(i, j)| self.get(i, j).abs()).sum()
    }

    /// Largest magnitude in the buffer; NaN if any cell is NaN.
    pub fn max_abs(&self) -> f32 {
        self.data.iter().map(|value| value.abs()).fold(0.0, nan_max)
    }

    pub fn min_max(&self) -> (f32, f32) {
        let mut iter = self.data.iter().filter(|value| value.is_finite());
        let Some(first) = iter.next() else {
            return (0.0, 0.0);
        };
        let mut min_value = *first;
        let mut max_value = *first;
        for value in iter {
            if *value < min_value {
                min_value = *value;
            }
            if *value > max_value {
                max_value = *value;
            }
        }
        (min_value, max_value)
    }

    fn assert_same_grid(&self, other: &Self) {
        assert_eq!(self.grid, other.grid, "field grid mismatch");
    }
}

/// `max` that keeps a NaN once seen instead of skipping it like `f32::max`.
pub(crate) fn nan_max(acc: f32, value: f32) -> f32 {
    if acc.is_nan() || value.is_nan() {
        f32::NAN
    } else {
        acc.max(value)
    }
}

/// Two buffers of one transported quantity. `current` selects which buffer
/// plays the current role; swapping flips the selector and moves no data.
#[derive(Clone, Debug)]
pub struct FieldPair {
    buffers: [Field; 2],
    current: usize,
}

impl FieldPair {
    pub fn new(grid: Grid) -> Self {
        Self {
            buffers: [Field::zeros(grid), Field::zeros(grid)],
            current: 0,
        }
    }

    pub fn swap(&mut self) {
        self.current ^= 1;
    }

    pub fn current(&self) -> &Field {
        &self.buffers[self.current]
    }

    pub fn previous(&self) -> &Field {
        &self.buffers[self.current ^ 1]
    }

    pub fn current_mut(&mut self) -> &mut Field {
        &mut self.buffers[self.current]
    }

    /// Current buffer for writing alongside the previous one for reading.
    pub fn split_mut(&mut self) -> (&mut Field, &Field) {
        let [first, second] = &mut self.buffers;
        if self.current == 0 {
            (first, &*second)
        } else {
            (second, &*first)
        }
    }

    pub fn reset(&mut self) {
        for buffer in &mut self.buffers {
            buffer.fill(0.0);
        }
        self.current = 0;
    }
}
