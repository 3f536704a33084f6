use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = umami, js_name = track)]
    fn umami_track(event: &str);
}

/// Anonymous usage events. No payloads, no identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabEvent {
    ChargePlaced,
    ChargeRemoved,
    FieldOverlayToggled,
    PotentialInputChanged,
    FeedbackSubmitted,
}

impl LabEvent {
    pub fn name(&self) -> &'static str {
        match self {
            LabEvent::ChargePlaced => "charge-placed",
            LabEvent::ChargeRemoved => "charge-removed",
            LabEvent::FieldOverlayToggled => "field-overlay-toggled",
            LabEvent::PotentialInputChanged => "potential-input-changed",
            LabEvent::FeedbackSubmitted => "feedback-submitted",
        }
    }
}

/// Send an event to Umami when the tracker script is loaded.
/// Does nothing if it was blocked or never included.
pub fn track_event(event: LabEvent) {
    let loaded = js_sys::eval("typeof umami !== 'undefined'")
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    if loaded {
        umami_track(event.name());
    }
}
