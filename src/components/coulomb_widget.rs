use crate::physics::{classify_force, coulomb_force, format_force, nc_to_c, ForceKind, R_MAX, R_MIN};
use crate::sandbox::parse_magnitude;
use leptos::*;

/// Force for two charge entries in nC at `r` metres.
pub(crate) fn force_between(q1_input: &str, q2_input: &str, r: f64) -> f64 {
    coulomb_force(
        nc_to_c(parse_magnitude(q1_input)),
        nc_to_c(parse_magnitude(q2_input)),
        r,
    )
}

fn kind_class(kind: ForceKind) -> &'static str {
    match kind {
        ForceKind::Repulsive => "force-kind repulsive",
        ForceKind::Attractive => "force-kind attractive",
        ForceKind::None => "force-kind",
    }
}

#[component]
pub fn CoulombWidget() -> impl IntoView {
    let (q1, set_q1) = create_signal("2".to_string());
    let (q2, set_q2) = create_signal("-3".to_string());
    let (r, set_r) = create_signal(1.0_f64);

    let force = create_memo(move |_| force_between(&q1.get(), &q2.get(), r.get()));
    let kind = move || classify_force(force.get());

    view! {
        <div class="widget coulomb-widget">
            <h3>"Coulomb Force"</h3>
            <p class="formula">"F = k q\u{2081} q\u{2082} / r\u{00b2}"</p>

            <div class="control-group">
                <label for="coulomb-q1">"q\u{2081} (nC)"</label>
                <input
                    type="text"
                    id="coulomb-q1"
                    inputmode="decimal"
                    prop:value=move || q1.get()
                    on:input=move |ev| set_q1.set(event_target_value(&ev))
                />
            </div>
            <div class="control-group">
                <label for="coulomb-q2">"q\u{2082} (nC)"</label>
                <input
                    type="text"
                    id="coulomb-q2"
                    inputmode="decimal"
                    prop:value=move || q2.get()
                    on:input=move |ev| set_q2.set(event_target_value(&ev))
                />
            </div>
            <div class="control-group">
                <label for="coulomb-r">"Separation r: " {move || format!("{:.1} m", r.get())}</label>
                <input
                    type="range"
                    id="coulomb-r"
                    min=R_MIN
                    max=R_MAX
                    step="0.1"
                    prop:value=move || r.get()
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                            set_r.set(v);
                        }
                    }
                />
            </div>

            <div class="metrics-grid">
                <div class="metric highlight">
                    <span class="metric-value">{move || format_force(force.get())}</span>
                    <span class="metric-label">"Force"</span>
                </div>
                <div class="metric">
                    <span class=move || kind_class(kind())>{move || kind().label()}</span>
                    <span class="metric-label">"Interaction"</span>
                </div>
            </div>
        </div>
    }
}
