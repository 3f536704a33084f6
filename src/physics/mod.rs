mod coordinates;
mod coulomb;
mod field;
mod potential;

pub use coordinates::{Cartesian, Cylindrical, Spherical};
pub use coulomb::{classify_force, coulomb_force, ForceKind};
pub use field::{field_at, sample_field, FieldArrow, FieldGrid, PointCharge};
pub use potential::{
    electric_potential, format_potential, format_scientific, potential_curve, snap_distance,
    COULOMB_K, CURVE_POINTS, R_MAX, R_MIN, R_STEP,
};

/// Convert nanocoulombs to coulombs.
pub fn nc_to_c(nc: f64) -> f64 {
    nc * 1e-9
}

/// Convert coulombs to nanocoulombs.
pub fn c_to_nc(c: f64) -> f64 {
    c * 1e9
}

/// Format a force in newtons with the same notation as potentials.
pub fn format_force(f: f64) -> String {
    format!("{} N", format_scientific(f))
}
