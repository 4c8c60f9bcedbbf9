use crate::data::filter::Selection;
use crate::data::view::{render, MapView};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The raw bytes of the most recent upload.
pub struct Upload {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Uploaded file (None until the user opens one).
    pub upload: Option<Upload>,

    /// Provider / specialty multi-select state.
    pub selection: Selection,

    /// Result of the last pipeline run; rebuilt on every interaction.
    pub view: Option<MapView>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Replace the upload, reset the filters and render.
    pub fn set_upload(&mut self, name: String, bytes: Vec<u8>) {
        self.upload = Some(Upload { name, bytes });
        self.selection = Selection::default();
        self.refresh();
        if let (Some(upload), Some(view)) = (&self.upload, &self.view) {
            log::info!(
                "Loaded {}: {} records, {} providers, {} specialties",
                upload.name,
                view.matching_records,
                view.provider_options.len(),
                view.specialty_options.len()
            );
        }
    }

    /// Re-run load → filter → aggregate against the stored upload.
    pub fn refresh(&mut self) {
        let Some(upload) = &self.upload else {
            self.view = None;
            return;
        };
        match render(&upload.bytes, &self.selection) {
            Ok(view) => {
                self.view = Some(view);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to render {}: {e}", upload.name);
                self.view = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Toggle one provider in the selection.
    pub fn toggle_provider(&mut self, provider: &str) {
        toggle(&mut self.selection.providers, provider);
        self.refresh();
    }

    /// Toggle one specialty in the selection.
    pub fn toggle_specialty(&mut self, specialty: &str) {
        toggle(&mut self.selection.specialties, specialty);
        self.refresh();
    }

    /// Drop the provider restriction.
    pub fn clear_providers(&mut self) {
        self.selection.providers.clear();
        self.refresh();
    }

    /// Drop the specialty restriction.
    pub fn clear_specialties(&mut self) {
        self.selection.specialties.clear();
        self.refresh();
    }
}

fn toggle(set: &mut std::collections::BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const UPLOAD: &[u8] = b"Provider,Specialty,Licenses\n\
        Dr. A,Cardiology,\"TX,CA\"\n\
        Dr. B,Neurology,TX\n";

    fn loaded() -> AppState {
        let mut state = AppState::default();
        state.set_upload("providers.csv".into(), UPLOAD.to_vec());
        state
    }

    fn codes(state: &AppState) -> Vec<String> {
        state
            .view
            .as_ref()
            .map(|v| v.aggregates.iter().map(|a| a.code.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn upload_renders_everything() {
        let state = loaded();
        assert_eq!(codes(&state), vec!["CA", "TX"]);
        assert_eq!(state.status_message, None);
    }

    #[test]
    fn toggling_filters_rerenders() {
        let mut state = loaded();
        state.toggle_provider("Dr. B");
        assert_eq!(codes(&state), vec!["TX"]);

        state.toggle_provider("Dr. B");
        assert_eq!(codes(&state), vec!["CA", "TX"]);

        state.toggle_specialty("Cardiology");
        state.toggle_provider("Dr. B");
        assert_eq!(codes(&state), Vec::<String>::new());

        state.clear_providers();
        assert_eq!(codes(&state), vec!["CA", "TX"]);
        state.clear_specialties();
        assert!(state.selection.is_unrestricted());
    }

    #[test]
    fn new_upload_resets_selection() {
        let mut state = loaded();
        state.toggle_provider("Dr. B");
        state.set_upload("again.csv".into(), UPLOAD.to_vec());
        assert!(state.selection.is_unrestricted());
    }

    #[test]
    fn malformed_upload_clears_view() {
        let mut state = loaded();
        state.set_upload("bad.csv".into(), b"Provider\nDr. A\n".to_vec());
        assert!(state.view.is_none());
        let msg = state.status_message.unwrap();
        assert!(msg.contains("Specialty, Licenses"), "{msg}");
    }
}
