use crate::boundary::{enforce, BoundaryKind};
use crate::Field;

pub const DEFAULT_RELAX_ITERATIONS: usize = 20;

/// Gauss-Seidel sweeps of `x = (x0 + a * sum(neighbours of x)) / c` over the
/// interior, re-applying `kind` boundaries after every sweep.
///
/// Cells are visited with `i` fastest, so the left and lower neighbours
/// already hold this sweep's values.
///
/// Rows are the outer loop to walk memory in order. A column-outer sweep
/// reaches the same fixed point but gives different per-sweep values.
pub fn relax(kind: BoundaryKind, x: &mut Field, x0: &Field, a: f32, c: f32, iterations: usize) {
    let n = x.grid().n();
    let inv_c = 1.0 / c;
    for _ in 0..iterations {
        for j in 1..=n {
            for i in 1..=n {
                let neighbours =
                    x.get(i - 1, j) + x.get(i + 1, j) + x.get(i, j - 1) + x.get(i, j + 1);
                x.set(i, j, (x0.get(i, j) + a * neighbours) * inv_c);
            }
        }
        enforce(kind, x);
    }
}

/// Implicit diffusion of `previous` into `current` at `rate` over `dt`.
pub fn diffuse(
    kind: BoundaryKind,
    current: &mut Field,
    previous: &Field,
    rate: f32,
    dt: f32,
    iterations: usize,
) {
    let n = current.grid().n() as f32;
    let a = dt * rate * n * n;
    relax(kind, current, previous, a, 1.0 + 4.0 * a, iterations);
}

/// Semi-Lagrangian transport of `previous` into `current` along `(vel_x, vel_y)`.
pub fn advect(
    kind: BoundaryKind,
    current: &mut Field,
    previous: &Field,
    vel_x: &Field,
    vel_y: &Field,
    dt: f32,
) {
    let grid = current.grid();
    let n = grid.n();
    let dt0 = dt * n as f32;
    let lo = 0.5;
    let hi = n as f32 + 0.5;
    for j in 1..=n {
        for i in 1..=n {
            let x = (i as f32 - dt0 * vel_x.get(i, j)).clamp(lo, hi);
            let y = (j as f32 - dt0 * vel_y.get(i, j)).clamp(lo, hi);
            current.set(i, j, previous.sample_bilinear(x, y));
        }
    }
    enforce(kind, current);
}

/// Removes the divergent part of `(vel_x, vel_y)` with a pressure solve.
///
/// `pressure` and `divergence` are scratch; their contents on return are the
/// solved pressure and the divergence measured before correction.
pub fn project(
    vel_x: &mut Field,
    vel_y: &mut Field,
    pressure: &mut Field,
    divergence: &mut Field,
    iterations: usize,
) {
    let grid = vel_x.grid();
    let n = grid.n();
    let h = grid.spacing();

    for j in 1..=n {
        for i in 1..=n {
            let du = vel_x.get(i + 1, j) - vel_x.get(i - 1, j);
            let dv = vel_y.get(i, j + 1) - vel_y.get(i, j - 1);
            divergence.set(i, j, -0.5 * h * (du + dv));
            pressure.set(i, j, 0.0);
        }
    }
    enforce(BoundaryKind::Scalar, divergence);
    enforce(BoundaryKind::Scalar, pressure);

    relax(BoundaryKind::Scalar, pressure, divergence, 1.0, 4.0, iterations);

    for j in 1..=n {
        for i in 1..=n {
            let dp_x = pressure.get(i + 1, j) - pressure.get(i - 1, j);
            let dp_y = pressure.get(i, j + 1) - pressure.get(i, j - 1);
            vel_x.set(i, j, vel_x.get(i, j) - 0.5 * dp_x / h);
            vel_y.set(i, j, vel_y.get(i, j) - 0.5 * dp_y / h);
        }
    }
    enforce(BoundaryKind::VelocityX, vel_x);
    enforce(BoundaryKind::VelocityY, vel_y);
}
