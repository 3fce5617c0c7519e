use crate::field::nan_max;
use crate::{Field, Grid, Vec2};

/// A velocity-like field stored as two independent component fields.
#[derive(Clone, Debug, PartialEq)]
pub struct VecField {
    u: Field,
    v: Field,
}

impl VecField {
    pub fn new(grid: Grid, fill: Vec2) -> Self {
        Self {
            u: Field::new(grid, fill.x),
            v: Field::new(grid, fill.y),
        }
    }

    pub fn from_fn(grid: Grid, f: impl Fn(usize, usize) -> Vec2) -> Self {
        let u = Field::from_fn(grid, |i, j| f(i, j).x);
        let v = Field::from_fn(grid, |i, j| f(i, j).y);
        Self { u, v }
    }

    pub fn grid(&self) -> Grid {
        self.u.grid()
    }

    pub fn get(&self, i: usize, j: usize) -> Vec2 {
        Vec2::new(self.u.get(i, j), self.v.get(i, j))
    }

    pub fn set(&mut self, i: usize, j: usize, value: Vec2) {
        self.u.set(i, j, value.x);
        self.v.set(i, j, value.y);
    }

    pub fn u(&self) -> &Field {
        &self.u
    }

    pub fn v(&self) -> &Field {
        &self.v
    }

    pub fn u_mut(&mut self) -> &mut Field {
        &mut self.u
    }

    pub fn v_mut(&mut self) -> &mut Field {
        &mut self.v
    }

    pub fn fill(&mut self, value: Vec2) {
        self.u.fill(value.x);
        self.v.fill(value.y);
    }
}

/// Discrete central-difference divergence `-0.5 h (du/di + dv/dj)` on interior
/// cells, zero on the boundary ring. Same stencil the projection drives to zero.
pub fn divergence(u: &Field, v: &Field) -> Field {
    let grid = u.grid();
    let h = grid.spacing();
    let mut out = Field::zeros(grid);
    for (i, j) in grid.interior() {
        let du = u.get(i + 1, j) - u.get(i - 1, j);
        let dv = v.get(i, j + 1) - v.get(i, j - 1);
        out.set(i, j, -0.5 * h * (du + dv));
    }
    out
}

/// Largest interior speed; NaN once any interior component is NaN.
pub fn max_speed(u: &Field, v: &Field) -> f32 {
    u.grid()
        .interior()
        .map(|(i, j)| Vec2::new(u.get(i, j), v.get(i, j)).length())
        .fold(0.0, nan_max)
}
