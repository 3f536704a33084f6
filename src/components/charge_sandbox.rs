use crate::analytics::{track_event, LabEvent};
use crate::components::sandbox_renderer::{context_2d, draw};
use crate::sandbox::{DropOutcome, SandboxState, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use crate::storage::LabSettings;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlCanvasElement, HtmlElement, KeyboardEvent, PointerEvent};

/// Map a client-space pointer position onto the canvas backing store, which
/// may be scaled by CSS.
pub(crate) fn to_canvas_coords(
    client: (f64, f64),
    rect_origin: (f64, f64),
    rect_size: (f64, f64),
    canvas_size: (f64, f64),
) -> (f64, f64) {
    let sx = if rect_size.0 > 0.0 { canvas_size.0 / rect_size.0 } else { 1.0 };
    let sy = if rect_size.1 > 0.0 { canvas_size.1 / rect_size.1 } else { 1.0 };
    ((client.0 - rect_origin.0) * sx, (client.1 - rect_origin.1) * sy)
}

fn pointer_position(canvas: &HtmlCanvasElement, ev: &PointerEvent) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    to_canvas_coords(
        (ev.client_x() as f64, ev.client_y() as f64),
        (rect.left(), rect.top()),
        (rect.width(), rect.height()),
        (canvas.width() as f64, canvas.height() as f64),
    )
}

/// Form controls that take a typed space themselves
pub(crate) fn is_text_entry_tag(tag: &str) -> bool {
    matches!(
        tag.to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    )
}

/// Typing a space into a form field shouldn't flip the overlay.
fn is_text_entry(ev: &KeyboardEvent) -> bool {
    let Some(target) = ev.target() else {
        return false;
    };
    if target
        .dyn_ref::<HtmlElement>()
        .is_some_and(|el| el.is_content_editable())
    {
        return true;
    }
    target
        .dyn_ref::<Element>()
        .is_some_and(|el| is_text_entry_tag(&el.tag_name()))
}

/// The stored setting owns the overlay flag; the sandbox only mirrors it.
fn follow_overlay_setting(settings: LabSettings, state: RwSignal<SandboxState>) {
    create_effect(move |_| {
        let enabled = settings.field_overlay.get();
        state.update(|s| s.set_field_overlay(enabled));
    });
}

#[component]
pub fn ChargeSandbox() -> impl IntoView {
    let settings = LabSettings::use_settings();
    let positive_input = settings.positive_input;
    let negative_input = settings.negative_input;

    let state = create_rw_signal(SandboxState::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT));
    let canvas_ref = create_node_ref::<html::Canvas>();

    follow_overlay_setting(settings, state);

    // Repaint after every state change
    create_effect(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        match context_2d(&canvas) {
            Ok(ctx) => state.with(|s| draw(&ctx, s)),
            Err(e) => {
                web_sys::console::warn_1(&format!("EM Lab: canvas unavailable: {}", e).into())
            }
        }
    });

    let toggle_overlay = move || {
        settings.field_overlay.update(|on| *on = !*on);
        track_event(LabEvent::FieldOverlayToggled);
    };

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == " " && !is_text_entry(&ev) {
            ev.prevent_default();
            toggle_overlay();
        }
    });
    on_cleanup(move || keydown.remove());

    let on_pointer_down = move |ev: PointerEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let (x, y) = pointer_position(&canvas, &ev);
        let magnitudes = settings.untracked_stored().tray_magnitudes();
        let started = state.try_update(|s| s.begin_drag(x, y, &magnitudes)).unwrap_or(false);
        if started {
            // Keep receiving moves while the pointer is outside the canvas
            let _ = canvas.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }
    };

    let on_pointer_move = move |ev: PointerEvent| {
        if !state.with_untracked(|s| s.is_dragging()) {
            return;
        }
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let (x, y) = pointer_position(&canvas, &ev);
        state.update(|s| s.update_drag(x, y));
    };

    let on_pointer_up = move |ev: PointerEvent| {
        if !state.with_untracked(|s| s.is_dragging()) {
            return;
        }
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let (x, y) = pointer_position(&canvas, &ev);
        let outcome = state.try_update(|s| s.end_drag(x, y));
        match outcome {
            Some(DropOutcome::Placed) => track_event(LabEvent::ChargePlaced),
            Some(DropOutcome::Removed) => track_event(LabEvent::ChargeRemoved),
            _ => {}
        }
    };

    let on_pointer_cancel = move |_: PointerEvent| {
        state.update(|s| {
            s.cancel_drag();
        });
    };

    let charge_count = move || state.with(|s| s.charges().len());

    view! {
        <div class="widget charge-sandbox">
            <h3>"Coulomb's Law Sandbox"</h3>
            <p class="widget-help">
                "Drag a " <strong>"+"</strong> " or " <strong>"\u{2212}"</strong>
                " charge out of the tray. Drag a charge back into the tray to delete it. "
                "Press space to show the electric field."
            </p>
            <canvas
                node_ref=canvas_ref
                class="sandbox-canvas"
                width=DEFAULT_CANVAS_WIDTH
                height=DEFAULT_CANVAS_HEIGHT
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointercancel=on_pointer_cancel
            ></canvas>
            <div class="tray-inputs">
                <div class="control-group">
                    <label for="tray-positive">"+ charge (nC)"</label>
                    <input
                        type="text"
                        id="tray-positive"
                        inputmode="decimal"
                        prop:value=move || positive_input.get()
                        on:input=move |ev| positive_input.set(event_target_value(&ev))
                    />
                </div>
                <div class="control-group">
                    <label for="tray-negative">"\u{2212} charge (nC)"</label>
                    <input
                        type="text"
                        id="tray-negative"
                        inputmode="decimal"
                        prop:value=move || negative_input.get()
                        on:input=move |ev| negative_input.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="sandbox-actions">
                <button
                    class="unit-toggle"
                    class:active=move || settings.field_overlay.get()
                    on:click=move |_| toggle_overlay()
                >
                    {move || if settings.field_overlay.get() { "Hide field" } else { "Show field" }}
                </button>
                <button class="reset-button" on:click=move |_| state.update(|s| s.reset())>
                    "Clear charges"
                </button>
                <span class="charge-count">
                    {move || match charge_count() {
                        1 => "1 charge".to_string(),
                        n => format!("{} charges", n),
                    }}
                </span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StoredSettings;

    #[test]
    fn test_overlay_follows_settings_reset() {
        let runtime = create_runtime();
        let settings = LabSettings::from_stored(StoredSettings {
            field_overlay: true,
            ..Default::default()
        });
        let state = create_rw_signal(SandboxState::default());
        follow_overlay_setting(settings, state);
        assert!(state.with_untracked(|s| s.field_overlay()));

        settings.reset();
        assert!(!state.with_untracked(|s| s.field_overlay()));

        settings.field_overlay.set(true);
        assert!(state.with_untracked(|s| s.field_overlay()));
        runtime.dispose();
    }

    #[test]
    fn test_unscaled_canvas() {
        let p = to_canvas_coords((150.0, 90.0), (50.0, 40.0), (800.0, 560.0), (800.0, 560.0));
        assert_eq!(p, (100.0, 50.0));
    }

    #[test]
    fn test_css_scaled_canvas() {
        // Canvas shown at half size on a narrow screen
        let p = to_canvas_coords((210.0, 140.0), (10.0, 0.0), (400.0, 280.0), (800.0, 560.0));
        assert_eq!(p, (400.0, 280.0));
    }

    #[test]
    fn test_form_controls_keep_their_space_key() {
        for tag in ["INPUT", "TEXTAREA", "SELECT", "textarea"] {
            assert!(is_text_entry_tag(tag), "{}", tag);
        }
        for tag in ["CANVAS", "BODY", "BUTTON"] {
            assert!(!is_text_entry_tag(tag), "{}", tag);
        }
    }

    #[test]
    fn test_collapsed_rect_does_not_divide_by_zero() {
        let p = to_canvas_coords((5.0, 5.0), (0.0, 0.0), (0.0, 0.0), (800.0, 560.0));
        assert_eq!(p, (5.0, 5.0));
    }
}
