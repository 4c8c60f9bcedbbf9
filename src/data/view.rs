use super::aggregate::{aggregate, flatten, provider_colors};
use super::filter::{filter_records, Selection};
use super::loader::{load_bytes, LoadError};
use super::model::{LicenseTable, StateAggregate};
use crate::color::ColorAssignment;

// ---------------------------------------------------------------------------
// MapView – everything one render needs
// ---------------------------------------------------------------------------

/// The result of one load → filter → aggregate run.
#[derive(Debug, Clone, Default)]
pub struct MapView {
    /// Choices for the multi-select controls, from the whole upload.
    pub provider_options: Vec<String>,
    pub specialty_options: Vec<String>,
    /// Records that passed the selection.
    pub matching_records: usize,
    /// One row per state present in the filtered data, ordered by code.
    pub aggregates: Vec<StateAggregate>,
    pub colors: ColorAssignment,
}

/// Aggregate an already-loaded table under `selection`.
pub fn build_view(table: &LicenseTable, selection: &Selection) -> MapView {
    if table.is_empty() {
        log::warn!("Upload has a header row but no records");
    }
    let filtered = filter_records(&table.records, selection);
    let entries = flatten(&filtered);
    let colors = provider_colors(&entries);
    let aggregates = aggregate(&entries, &colors);

    log::debug!(
        "{} of {} records selected, {} license entries, {} providers across {} states",
        filtered.len(),
        table.len(),
        entries.len(),
        colors.len(),
        aggregates.len()
    );

    MapView {
        provider_options: table.providers.clone(),
        specialty_options: table.specialties.clone(),
        matching_records: filtered.len(),
        aggregates,
        colors,
    }
}

/// Full pipeline over the raw upload. The bytes are reparsed on every call.
pub fn render(upload: &[u8], selection: &Selection) -> Result<MapView, LoadError> {
    let table = load_bytes(upload)?;
    Ok(build_view(&table, selection))
}
