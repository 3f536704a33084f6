use crate::analytics::{track_event, LabEvent};
use crate::physics::{
    electric_potential, format_potential, format_scientific, potential_curve, snap_distance, R_MAX,
    R_MIN,
};
use crate::sandbox::parse_magnitude;
use crate::storage::LabSettings;
use leptos::*;

// Chart layout constants (SVG coordinate space within viewBox="0 0 400 200")
pub(crate) const CHART_LEFT: f64 = 50.0;
pub(crate) const CHART_WIDTH: f64 = 340.0;
pub(crate) const CHART_RIGHT: f64 = CHART_LEFT + CHART_WIDTH;
pub(crate) const CHART_BOTTOM: f64 = 170.0;
pub(crate) const CHART_HEIGHT: f64 = 150.0;

/// Vertical extent of a curve, always including zero so the axis is visible.
/// `None` when the curve holds non-finite values.
pub(crate) fn value_range(curve: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut lo = 0.0_f64;
    let mut hi = 0.0_f64;
    for &(_, v) in curve {
        if !v.is_finite() {
            return None;
        }
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if hi - lo < f64::MIN_POSITIVE {
        // Flat (q = 0): give the line something to sit in
        return Some((-1.0, 1.0));
    }
    Some((lo, hi))
}

pub(crate) fn to_x(r: f64) -> f64 {
    CHART_LEFT + (r - R_MIN) / (R_MAX - R_MIN) * CHART_WIDTH
}

pub(crate) fn to_y(v: f64, (lo, hi): (f64, f64)) -> f64 {
    CHART_BOTTOM - (v - lo) / (hi - lo) * CHART_HEIGHT
}

/// SVG polyline points for a V(r) curve. Empty when the curve can't be drawn.
pub(crate) fn to_chart_points(curve: &[(f64, f64)]) -> String {
    let Some(range) = value_range(curve) else {
        return String::new();
    };
    curve
        .iter()
        .map(|&(r, v)| format!("{:.1},{:.1}", to_x(r), to_y(v, range)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Potential of a point charge: the value at the selected distance plus the
/// whole V(r) curve.
#[component]
pub fn PotentialGraph() -> impl IntoView {
    let settings = LabSettings::use_settings();
    let q_input = settings.potential_q_input;
    let r = settings.potential_r;

    let q = create_memo(move |_| parse_magnitude(&q_input.get()));
    // Depends on q only; moving the slider doesn't resample
    let curve = create_memo(move |_| potential_curve(q.get()));
    let range = create_memo(move |_| value_range(&curve.get()));
    let value = create_memo(move |_| electric_potential(q.get(), r.get()));

    view! {
        <div class="widget potential-graph">
            <h3>"Electric Potential of a Point Charge"</h3>
            <p class="formula">"V = kq / r,  k = 8.99 \u{00d7} 10\u{2079} N\u{00b7}m\u{00b2}/C\u{00b2}"</p>

            <div class="control-group">
                <label for="potential-q">"Charge q (C)"</label>
                <input
                    type="text"
                    id="potential-q"
                    inputmode="decimal"
                    prop:value=move || q_input.get()
                    on:input=move |ev| {
                        q_input.set(event_target_value(&ev));
                        track_event(LabEvent::PotentialInputChanged);
                    }
                />
            </div>

            <div class="control-group">
                <label for="potential-r">"Distance r: " {move || format!("{:.1} m", r.get())}</label>
                <input
                    type="range"
                    id="potential-r"
                    min=R_MIN
                    max=R_MAX
                    step="0.1"
                    prop:value=move || r.get()
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                            r.set(snap_distance(v));
                        }
                    }
                />
            </div>

            <div class="metric highlight">
                <span class="metric-value">{move || format_potential(value.get())}</span>
                <span class="metric-label">"Potential at r"</span>
            </div>

            <svg viewBox="0 0 400 200" class="potential-chart" role="img" aria-labelledby="potential-chart-title">
                <title id="potential-chart-title">"Potential versus distance"</title>
                // Y-axis labels
                <text x="2" y="24" class="axis-label">
                    {move || range.get().map(|(_, hi)| format_scientific(hi)).unwrap_or_default()}
                </text>
                <text x="2" y="174" class="axis-label">
                    {move || range.get().map(|(lo, _)| format_scientific(lo)).unwrap_or_default()}
                </text>

                // X-axis labels
                <text x=CHART_LEFT y="192" class="axis-label">"0.1"</text>
                <text x=to_x(5.0) y="192" class="axis-label">"5"</text>
                <text x=CHART_RIGHT - 30.0 y="192" class="axis-label">"10 m"</text>

                // Zero line
                <line
                    x1=CHART_LEFT
                    y1=move || range.get().map(|rg| to_y(0.0, rg)).unwrap_or(CHART_BOTTOM)
                    x2=CHART_RIGHT
                    y2=move || range.get().map(|rg| to_y(0.0, rg)).unwrap_or(CHART_BOTTOM)
                    class="grid-line"
                />

                <polyline class="potential-line" points=move || to_chart_points(&curve.get())/>

                // Selected distance
                {move || {
                    let rg = range.get()?;
                    let v = value.get();
                    v.is_finite().then(|| {
                        let x = to_x(r.get());
                        let y = to_y(v, rg);
                        view! {
                            <line x1=x y1=CHART_BOTTOM x2=x y2=y class="grid-line selected-r"/>
                            <circle cx=x cy=y r="5" class="selected-marker"/>
                        }
                    })
                }}
            </svg>
            {move || (!q.get().is_finite()).then(|| view! {
                <p class="input-warning">"Charge is not a number; values shown as NaN."</p>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_fills_chart_width() {
        let curve = potential_curve(1e-9);
        let points = to_chart_points(&curve);
        let coords: Vec<&str> = points.split(' ').collect();
        assert_eq!(coords.len(), 100);
        assert_eq!(coords[0], "50.0,20.0");
        assert!(coords[99].starts_with("390.0,"));
    }

    #[test]
    fn test_negative_charge_range() {
        let curve = potential_curve(-1e-9);
        let (lo, hi) = value_range(&curve).unwrap();
        assert_eq!(hi, 0.0);
        assert!((lo - electric_potential(-1e-9, 0.1)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_charge_is_flat_line() {
        let curve = potential_curve(0.0);
        assert_eq!(value_range(&curve), Some((-1.0, 1.0)));
        assert!(to_chart_points(&curve).split(' ').all(|p| p.ends_with(",95.0")));
    }

    #[test]
    fn test_nan_curve_is_not_drawn() {
        assert_eq!(to_chart_points(&potential_curve(f64::NAN)), "");
    }
}
