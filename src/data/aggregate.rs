use std::collections::BTreeMap;

use palette::Srgb;

use super::model::{FlattenedEntry, Record, StateAggregate};
use crate::color::{from_hex, to_hex, ColorAssignment, PROVIDER_PALETTE};
use crate::geo;

/// Joins the descriptions of one state.
pub const DETAIL_SEPARATOR: &str = " | ";

const SPAN_CLOSE: &str = "</span>";
const SPAN_OPEN: &str = "<span";

// ---------------------------------------------------------------------------
// Expand
// ---------------------------------------------------------------------------

/// Explode every record into one entry per license token, in row order.
///
/// Tokens are trimmed again and blanks skipped so records built outside the
/// loader obey the same rule.
pub fn flatten<'a>(records: &[&'a Record]) -> Vec<FlattenedEntry<'a>> {
    records
        .iter()
        .flat_map(|&r| {
            r.licenses.iter().map(move |state| FlattenedEntry {
                provider: &r.provider,
                specialty: &r.specialty,
                state: state.trim(),
            })
        })
        .filter(|e| !e.state.is_empty())
        .collect()
}

/// Colour assignment for the providers that actually appear on the map.
pub fn provider_colors(entries: &[FlattenedEntry<'_>]) -> ColorAssignment {
    ColorAssignment::from_providers(entries.iter().map(|e| e.provider))
}

// ---------------------------------------------------------------------------
// Descriptions
// ---------------------------------------------------------------------------

/// `Provider (Specialty)` wrapped in an inline colour style.
pub fn describe(entry: &FlattenedEntry<'_>, color: Srgb<u8>) -> String {
    format!(
        "<span style='color:{}'>{} ({})</span>",
        to_hex(color),
        entry.provider,
        entry.specialty
    )
}

/// Inverse of [`describe`]: the colour and the plain text of a description.
/// Returns `None` for text that does not carry the colour markup.
pub fn parse_description(markup: &str) -> Option<(Srgb<u8>, &str)> {
    let rest = markup.strip_prefix("<span style='color:")?;
    let (hex, rest) = rest.split_once("'>")?;
    let text = rest.strip_suffix("</span>")?;
    Some((from_hex(hex)?, text))
}

/// Split an aggregate's joined details back into single descriptions.
///
/// Only a separator sitting between `</span>` and `<span` counts, so provider
/// or specialty text containing `" | "` stays inside its description.
pub fn split_details(details: &str) -> Vec<&str> {
    if details.is_empty() {
        return Vec::new();
    }
    let boundary = format!("{SPAN_CLOSE}{DETAIL_SEPARATOR}{SPAN_OPEN}");
    let mut parts = Vec::new();
    let mut start = 0;
    for (idx, _) in details.match_indices(&boundary) {
        let end = idx + SPAN_CLOSE.len();
        parts.push(&details[start..end]);
        start = end + DETAIL_SEPARATOR.len();
    }
    parts.push(&details[start..]);
    parts
}

// ---------------------------------------------------------------------------
// Group
// ---------------------------------------------------------------------------

/// Group entries by state code (ascending), joining each state's
/// descriptions in entry order.
///
/// Codes outside the 50-state table are kept with no display name.
pub fn aggregate(entries: &[FlattenedEntry<'_>], colors: &ColorAssignment) -> Vec<StateAggregate> {
    let mut groups: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for entry in entries {
        let color = colors
            .color_for(entry.provider)
            .unwrap_or(PROVIDER_PALETTE[0]);
        groups
            .entry(entry.state)
            .or_default()
            .push(describe(entry, color));
    }

    groups
        .into_iter()
        .map(|(code, descriptions)| {
            let name = geo::state_name(code);
            if name.is_none() {
                log::warn!("License code {code:?} is not a U.S. state; showing it by code");
            }
            StateAggregate {
                code: code.to_string(),
                name,
                descriptions,
            }
        })
        .collect()
}
