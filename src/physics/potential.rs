/// Coulomb's constant in N·m²/C²
pub const COULOMB_K: f64 = 8.99e9;

/// Distance slider bounds in metres
pub const R_MIN: f64 = 0.1;
pub const R_MAX: f64 = 10.0;
pub const R_STEP: f64 = 0.1;

/// Number of samples in the V(r) curve (0.1, 0.2, ..., 10.0)
pub const CURVE_POINTS: usize = 100;

/// Electric potential of a point charge `q` (coulombs) at distance `r` (metres).
///
/// Returns `+∞` at `r == 0`. Non-finite inputs are not rejected; a NaN charge
/// gives a NaN potential.
pub fn electric_potential(q: f64, r: f64) -> f64 {
    if r == 0.0 {
        return f64::INFINITY;
    }
    COULOMB_K * q / r
}

/// Sample V(r) for a fixed charge over the slider range.
///
/// The curve is independent of the currently selected distance. Distances are
/// built as `i / 10` rather than by repeated addition so the last point is
/// exactly 10.0.
pub fn potential_curve(q: f64) -> Vec<(f64, f64)> {
    (1..=CURVE_POINTS)
        .map(|i| {
            let r = i as f64 / 10.0;
            (r, electric_potential(q, r))
        })
        .collect()
}

/// Snap a raw slider value onto the 0.1 grid within [R_MIN, R_MAX].
pub fn snap_distance(r: f64) -> f64 {
    (r.clamp(R_MIN, R_MAX) * 10.0).round() / 10.0
}

/// Scientific notation with three significant digits, or the infinity glyph.
pub fn format_scientific(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "\u{221e}".to_string()
    } else if v == f64::NEG_INFINITY {
        "-\u{221e}".to_string()
    } else {
        format!("{:.2e}", v)
    }
}

/// Potential formatted for display, e.g. `8.99e9 V`.
pub fn format_potential(v: f64) -> String {
    format!("{} V", format_scientific(v))
}
