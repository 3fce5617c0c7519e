use crate::Field;

/// Which wall condition a field obeys.
///
/// Both velocity components reflect at every wall; walls parallel to a
/// component are not treated differently from perpendicular ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryKind {
    Scalar,
    VelocityX,
    VelocityY,
}

impl BoundaryKind {
    fn edge_sign(self) -> f32 {
        match self {
            BoundaryKind::Scalar => 1.0,
            BoundaryKind::VelocityX | BoundaryKind::VelocityY => -1.0,
        }
    }
}

/// Writes the boundary ring of `field` from its interior.
///
/// Edge cells copy (scalar) or negate (velocity) their interior neighbour.
/// Corners are written last, each the mean of its two edge neighbours.
pub fn enforce(kind: BoundaryKind, field: &mut Field) {
    let n = field.grid().n();
    let sign = kind.edge_sign();
    for k in 1..=n {
        field.set(0, k, sign * field.get(1, k));
        field.set(n + 1, k, sign * field.get(n, k));
        field.set(k, 0, sign * field.get(k, 1));
        field.set(k, n + 1, sign * field.get(k, n));
    }

    field.set(0, 0, 0.5 * (field.get(1, 0) + field.get(0, 1)));
    field.set(0, n + 1, 0.5 * (field.get(1, n + 1) + field.get(0, n)));
    field.set(n + 1, 0, 0.5 * (field.get(n, 0) + field.get(n + 1, 1)));
    field.set(n + 1, n + 1, 0.5 * (field.get(n, n + 1) + field.get(n + 1, n)));
}
