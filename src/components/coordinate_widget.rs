use crate::physics::Cartesian;
use leptos::*;

fn parse_or_zero(s: &str) -> f64 {
    s.trim().parse::<f64>().unwrap_or(0.0)
}

/// Display rows for a point: cylindrical then spherical, angles in degrees.
pub(crate) fn describe(p: Cartesian) -> [(&'static str, String); 6] {
    let cyl = p.to_cylindrical();
    let sph = p.to_spherical();
    [
        ("\u{03c1}", format!("{:.3}", cyl.rho)),
        ("\u{03c6}", format!("{:.1}\u{00b0}", cyl.phi.to_degrees())),
        ("z", format!("{:.3}", cyl.z)),
        ("r", format!("{:.3}", sph.r)),
        ("\u{03b8}", format!("{:.1}\u{00b0}", sph.theta.to_degrees())),
        ("\u{03c6}", format!("{:.1}\u{00b0}", sph.phi.to_degrees())),
    ]
}

#[component]
fn AxisInput(id: &'static str, label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="control-group">
            <label for=id>{label}</label>
            <input
                type="text"
                id=id
                inputmode="decimal"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn CoordinateWidget() -> impl IntoView {
    let x = create_rw_signal("1".to_string());
    let y = create_rw_signal("1".to_string());
    let z = create_rw_signal("1".to_string());

    let rows = create_memo(move |_| {
        describe(Cartesian::new(
            parse_or_zero(&x.get()),
            parse_or_zero(&y.get()),
            parse_or_zero(&z.get()),
        ))
    });

    let row_view = move |i: usize| {
        view! {
            <tr>
                <th>{move || rows.with(|r| r[i].0)}</th>
                <td>{move || rows.with(|r| r[i].1.clone())}</td>
            </tr>
        }
    };

    view! {
        <div class="widget coordinate-widget">
            <h3>"Coordinate Systems"</h3>
            <AxisInput id="coord-x" label="x" value=x/>
            <AxisInput id="coord-y" label="y" value=y/>
            <AxisInput id="coord-z" label="z" value=z/>

            <div class="coordinate-tables">
                <table>
                    <caption>"Cylindrical (\u{03c1}, \u{03c6}, z)"</caption>
                    <tbody>{(0..3).map(row_view).collect_view()}</tbody>
                </table>
                <table>
                    <caption>"Spherical (r, \u{03b8}, \u{03c6})"</caption>
                    <tbody>{(3..6).map(row_view).collect_view()}</tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_cube_corner() {
        let rows = describe(Cartesian::new(1.0, 1.0, 1.0));
        assert_eq!(rows[0].1, "1.414");
        assert_eq!(rows[1].1, "45.0\u{00b0}");
        assert_eq!(rows[3].1, "1.732");
        assert_eq!(rows[4].1, "54.7\u{00b0}");
    }

    #[test]
    fn test_blank_axis_reads_as_zero() {
        assert_eq!(parse_or_zero(" "), 0.0);
        assert_eq!(parse_or_zero("2.5"), 2.5);
        let rows = describe(Cartesian::new(0.0, 0.0, 0.0));
        assert_eq!(rows[4].1, "0.0\u{00b0}");
    }
}
