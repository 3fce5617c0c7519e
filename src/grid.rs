/// Square `n × n` simulation domain surrounded by a one-cell boundary ring.
///
/// Cells are addressed as `(i, j)` with `0 <= i, j <= n + 1`; `i` is the
/// fast-varying index so neighbouring cells along `i` are adjacent in memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    n: usize,
}

impl Grid {
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "grid resolution must be > 0");
        Self { n }
    }

    /// Number of interior cells along one axis.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Row stride, interior plus both boundary cells.
    pub fn stride(&self) -> usize {
        self.n + 2
    }

    pub fn size(&self) -> usize {
        self.stride() * self.stride()
    }

    pub fn spacing(&self) -> f32 {
        1.0 / self.n as f32
    }

    pub fn idx(&self, i: usize, j: usize) -> usize {
        debug_assert!(
            i <= self.n + 1 && j <= self.n + 1,
            "cell ({i}, {j}) outside grid of resolution {}",
            self.n
        );
        i + self.stride() * j
    }

    pub fn checked_idx(&self, i: usize, j: usize) -> Option<usize> {
        if self.contains(i, j) {
            Some(i + self.stride() * j)
        } else {
            None
        }
    }

    pub fn contains(&self, i: usize, j: usize) -> bool {
        i <= self.n + 1 && j <= self.n + 1
    }

    pub fn is_interior(&self, i: usize, j: usize) -> bool {
        (1..=self.n).contains(&i) && (1..=self.n).contains(&j)
    }

    pub fn coords(&self, idx: usize) -> (usize, usize) {
        debug_assert!(idx < self.size());
        (idx % self.stride(), idx / self.stride())
    }

    pub fn interior(&self) -> impl Iterator<Item = (usize, usize)> {
        let n = self.n;
        (1..=n).flat_map(move |j| (1..=n).map(move |i| (i, j)))
    }
}
