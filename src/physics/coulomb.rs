use super::COULOMB_K;

/// Direction of the force between two charges
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForceKind {
    Repulsive,
    Attractive,
    /// Zero or undefined (NaN) force
    None,
}

impl ForceKind {
    pub fn label(&self) -> &'static str {
        match self {
            ForceKind::Repulsive => "Repulsive",
            ForceKind::Attractive => "Attractive",
            ForceKind::None => "No force",
        }
    }
}

/// Coulomb force between two point charges (coulombs) separated by `r` metres.
///
/// Positive values repel, negative values attract. Returns `+∞` at `r == 0`.
pub fn coulomb_force(q1: f64, q2: f64, r: f64) -> f64 {
    if r == 0.0 {
        return f64::INFINITY;
    }
    COULOMB_K * q1 * q2 / (r * r)
}

pub fn classify_force(f: f64) -> ForceKind {
    if f > 0.0 {
        ForceKind::Repulsive
    } else if f < 0.0 {
        ForceKind::Attractive
    } else {
        ForceKind::None
    }
}
