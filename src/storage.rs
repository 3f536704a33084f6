use crate::physics::snap_distance;
use crate::sandbox::{parse_magnitude, TrayMagnitudes};
use leptos::*;
use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "emlab_settings";

/// Lab preferences kept between visits. Charges themselves are never saved.
///
/// Text inputs are stored as typed so an invalid entry comes back as the same
/// invalid entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredSettings {
    pub positive_input: String,
    pub negative_input: String,
    pub field_overlay: bool,
    pub potential_q_input: String,
    pub potential_r: f64,
}

impl Default for StoredSettings {
    fn default() -> Self {
        Self {
            positive_input: "1".to_string(),
            negative_input: "1".to_string(),
            field_overlay: false,
            potential_q_input: "1e-9".to_string(),
            potential_r: 1.0,
        }
    }
}

impl StoredSettings {
    pub fn tray_magnitudes(&self) -> TrayMagnitudes {
        TrayMagnitudes {
            positive: parse_magnitude(&self.positive_input),
            negative: parse_magnitude(&self.negative_input),
        }
    }

    /// Bring values written by older builds back into range.
    pub fn sanitized(mut self) -> Self {
        self.potential_r = if self.potential_r.is_finite() {
            snap_distance(self.potential_r)
        } else {
            StoredSettings::default().potential_r
        };
        self
    }
}

/// Attempts to get the browser's localStorage.
///
/// `None` outside a browser, in private modes that disable storage, or when
/// access raises a SecurityError.
fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn log_warning(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

/// Load settings, falling back to defaults when storage is unavailable, empty
/// or holds JSON we can't read.
pub fn load_settings() -> StoredSettings {
    let Some(storage) = get_storage() else {
        return StoredSettings::default();
    };
    match storage.get_item(STORAGE_KEY) {
        Ok(Some(json)) => parse_settings(&json).unwrap_or_else(|e| {
            log_warning(&format!("EM Lab: ignoring stored settings ({})", e));
            StoredSettings::default()
        }),
        Ok(None) => StoredSettings::default(),
        Err(_) => {
            log_warning("EM Lab: could not read localStorage, using defaults");
            StoredSettings::default()
        }
    }
}

pub fn parse_settings(json: &str) -> Result<StoredSettings, serde_json::Error> {
    serde_json::from_str::<StoredSettings>(json).map(StoredSettings::sanitized)
}

/// Save settings. Failures only produce a console warning.
pub fn save_settings(settings: &StoredSettings) {
    let Some(storage) = get_storage() else {
        return;
    };
    let json = match serde_json::to_string(settings) {
        Ok(j) => j,
        Err(e) => {
            log_warning(&format!("EM Lab: failed to serialize settings: {}", e));
            return;
        }
    };
    if storage.set_item(STORAGE_KEY, &json).is_err() {
        log_warning("EM Lab: could not save settings (private mode or quota exceeded)");
    }
}

pub fn clear_settings() {
    if let Some(storage) = get_storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}

/// Reactive view of [`StoredSettings`], shared through context by every page.
#[derive(Clone, Copy)]
pub struct LabSettings {
    pub positive_input: RwSignal<String>,
    pub negative_input: RwSignal<String>,
    pub field_overlay: RwSignal<bool>,
    pub potential_q_input: RwSignal<String>,
    pub potential_r: RwSignal<f64>,
}

impl LabSettings {
    pub fn from_stored(stored: StoredSettings) -> Self {
        Self {
            positive_input: create_rw_signal(stored.positive_input),
            negative_input: create_rw_signal(stored.negative_input),
            field_overlay: create_rw_signal(stored.field_overlay),
            potential_q_input: create_rw_signal(stored.potential_q_input),
            potential_r: create_rw_signal(stored.potential_r),
        }
    }

    pub fn to_stored(&self) -> StoredSettings {
        StoredSettings {
            positive_input: self.positive_input.get(),
            negative_input: self.negative_input.get(),
            field_overlay: self.field_overlay.get(),
            potential_q_input: self.potential_q_input.get(),
            potential_r: self.potential_r.get(),
        }
    }

    /// Snapshot for event handlers, without subscribing to anything.
    pub fn untracked_stored(&self) -> StoredSettings {
        StoredSettings {
            positive_input: self.positive_input.get_untracked(),
            negative_input: self.negative_input.get_untracked(),
            field_overlay: self.field_overlay.get_untracked(),
            potential_q_input: self.potential_q_input.get_untracked(),
            potential_r: self.potential_r.get_untracked(),
        }
    }

    /// Load from localStorage, provide to the component tree and save on every change.
    pub fn provide() -> Self {
        let settings = Self::from_stored(load_settings());
        provide_context(settings);
        create_effect(move |_| save_settings(&settings.to_stored()));
        settings
    }

    /// Settings from context; a fresh copy when rendered outside the root.
    pub fn use_settings() -> Self {
        use_context::<LabSettings>().unwrap_or_else(|| Self::from_stored(load_settings()))
    }

    pub fn reset(&self) {
        let d = StoredSettings::default();
        self.positive_input.set(d.positive_input);
        self.negative_input.set(d.negative_input);
        self.field_overlay.set(d.field_overlay);
        self.potential_q_input.set(d.potential_q_input);
        self.potential_r.set(d.potential_r);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse_to_unit_charges() {
        let m = StoredSettings::default().tray_magnitudes();
        assert_eq!(m, TrayMagnitudes { positive: 1.0, negative: 1.0 });
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let parsed = parse_settings(r#"{"field_overlay": true}"#).unwrap();
        assert!(parsed.field_overlay);
        assert_eq!(parsed.positive_input, "1");
        assert_eq!(parsed.potential_r, 1.0);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let parsed = parse_settings(r#"{"theme": "dark", "negative_input": "4"}"#).unwrap();
        assert_eq!(parsed.negative_input, "4");
    }

    #[test]
    fn test_corrupt_json_is_an_error() {
        assert!(parse_settings("{not json").is_err());
    }

    #[test]
    fn test_invalid_text_survives_round_trip() {
        let settings = StoredSettings {
            positive_input: "oops".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back = parse_settings(&json).unwrap();
        assert_eq!(back.positive_input, "oops");
        assert!(back.tray_magnitudes().positive.is_nan());
    }

    #[test]
    fn test_distance_is_snapped_into_slider_range() {
        assert_eq!(parse_settings(r#"{"potential_r": 42.0}"#).unwrap().potential_r, 10.0);
        assert_eq!(parse_settings(r#"{"potential_r": 0.0}"#).unwrap().potential_r, 0.1);
        assert_eq!(parse_settings(r#"{"potential_r": 2.34}"#).unwrap().potential_r, 2.3);
    }
}
