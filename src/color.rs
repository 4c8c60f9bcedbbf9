use std::collections::HashMap;

use eframe::egui::Color32;
use palette::Srgb;

use crate::data::model::distinct;

// ---------------------------------------------------------------------------
// Qualitative palette
// ---------------------------------------------------------------------------

/// Plotly's ten-colour qualitative palette.
pub const PROVIDER_PALETTE: [Srgb<u8>; 10] = [
    Srgb::new(0x63, 0x6E, 0xFA),
    Srgb::new(0xEF, 0x55, 0x3B),
    Srgb::new(0x00, 0xCC, 0x96),
    Srgb::new(0xAB, 0x63, 0xFA),
    Srgb::new(0xFF, 0xA1, 0x5A),
    Srgb::new(0x19, 0xD3, 0xF3),
    Srgb::new(0xFF, 0x66, 0x92),
    Srgb::new(0xB6, 0xE8, 0x80),
    Srgb::new(0xFF, 0x97, 0xFF),
    Srgb::new(0xFE, 0xCB, 0x52),
];

/// `#RRGGBB` form used in description markup.
pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02X}{:02X}{:02X}", color.red, color.green, color.blue)
}

/// Parse `#RRGGBB` (or `RRGGBB`) back into a colour.
pub fn from_hex(hex: &str) -> Option<Srgb<u8>> {
    hex.trim().parse::<Srgb<u8>>().ok()
}

pub fn to_color32(color: Srgb<u8>) -> Color32 {
    Color32::from_rgb(color.red, color.green, color.blue)
}

// ---------------------------------------------------------------------------
// Provider → colour assignment
// ---------------------------------------------------------------------------

/// Maps each distinct provider to a palette colour.
///
/// The colour of a provider depends only on its position in the distinct
/// provider sequence, wrapping around the palette.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorAssignment {
    entries: Vec<(String, Srgb<u8>)>,
    index: HashMap<String, usize>,
}

impl ColorAssignment {
    /// Build the assignment from providers in discovery order; repeats are
    /// ignored after their first appearance.
    pub fn from_providers<'a>(providers: impl IntoIterator<Item = &'a str>) -> Self {
        let entries: Vec<(String, Srgb<u8>)> = distinct(providers)
            .into_iter()
            .enumerate()
            .map(|(i, p)| (p, PROVIDER_PALETTE[i % PROVIDER_PALETTE.len()]))
            .collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (p, _))| (p.clone(), i))
            .collect();
        ColorAssignment { entries, index }
    }

    pub fn color_for(&self, provider: &str) -> Option<Srgb<u8>> {
        self.index.get(provider).map(|&i| self.entries[i].1)
    }

    /// Legend entries (provider → colour) in assignment order.
    pub fn entries(&self) -> &[(String, Srgb<u8>)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn assignment_follows_first_seen_order() {
        let colors = ColorAssignment::from_providers(["Dr. B", "Dr. A", "Dr. B"]);
        assert_eq!(colors.len(), 2);
        assert_eq!(colors.color_for("Dr. B"), Some(PROVIDER_PALETTE[0]));
        assert_eq!(colors.color_for("Dr. A"), Some(PROVIDER_PALETTE[1]));
        assert_eq!(colors.color_for("Dr. Z"), None);
    }

    #[test]
    fn assignment_is_deterministic() {
        let providers = ["P1", "P2", "P3", "P1"];
        assert_eq!(
            ColorAssignment::from_providers(providers),
            ColorAssignment::from_providers(providers)
        );
    }

    #[test]
    fn palette_wraps_past_its_size() {
        let names: Vec<String> = (0..12).map(|i| format!("Provider {i}")).collect();
        let colors = ColorAssignment::from_providers(names.iter().map(String::as_str));
        assert_eq!(colors.color_for("Provider 10"), Some(PROVIDER_PALETTE[0]));
        assert_eq!(colors.color_for("Provider 11"), Some(PROVIDER_PALETTE[1]));
        assert_eq!(colors.color_for("Provider 9"), Some(PROVIDER_PALETTE[9]));
    }

    #[test]
    fn hex_round_trip() {
        assert_eq!(to_hex(PROVIDER_PALETTE[0]), "#636EFA");
        assert_eq!(from_hex("#636EFA"), Some(PROVIDER_PALETTE[0]));
        assert_eq!(from_hex("not a colour"), None);
    }
}
