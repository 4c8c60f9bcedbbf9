use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Record – one row of the uploaded CSV
// ---------------------------------------------------------------------------

/// A single provider row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub provider: String,
    pub specialty: String,
    /// State-code tokens, trimmed, never empty strings.
    pub licenses: Vec<String>,
}

#[cfg(test)]
impl Record {
    pub fn new(provider: &str, specialty: &str, licenses: &[&str]) -> Self {
        Record {
            provider: provider.to_string(),
            specialty: specialty.to_string(),
            licenses: licenses.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// LicenseTable – the complete loaded upload
// ---------------------------------------------------------------------------

/// All records of an upload plus the distinct values that feed the
/// multi-select controls.
#[derive(Debug, Clone, Default)]
pub struct LicenseTable {
    pub records: Vec<Record>,
    /// Distinct providers in first-seen order.
    pub providers: Vec<String>,
    /// Distinct specialties in first-seen order.
    pub specialties: Vec<String>,
}

impl LicenseTable {
    /// Build the distinct-value indices from the loaded records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let providers = distinct(records.iter().map(|r| r.provider.as_str()));
        let specialties = distinct(records.iter().map(|r| r.specialty.as_str()));
        LicenseTable {
            records,
            providers,
            specialties,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Distinct values in first-seen order.
pub fn distinct<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// FlattenedEntry / StateAggregate – aggregation stages
// ---------------------------------------------------------------------------

/// One (provider, specialty, state) triple exploded from a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedEntry<'a> {
    pub provider: &'a str,
    pub specialty: &'a str,
    pub state: &'a str,
}

/// Per-state rollup handed to the presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateAggregate {
    pub code: String,
    /// Full state name, absent for codes outside the 50 states.
    pub name: Option<&'static str>,
    /// Formatted descriptions, one per entry, in row order.
    pub descriptions: Vec<String>,
}

impl StateAggregate {
    /// Heading text: the full name, or the raw code when unknown.
    pub fn title(&self) -> &str {
        match self.name {
            Some(name) => name,
            None => &self.code,
        }
    }

    /// Descriptions joined by [`DETAIL_SEPARATOR`](super::aggregate::DETAIL_SEPARATOR).
    pub fn details(&self) -> String {
        self.descriptions.join(super::aggregate::DETAIL_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn distinct_values_keep_first_seen_order() {
        let table = LicenseTable::from_records(vec![
            Record::new("Dr. B", "Neurology", &["TX"]),
            Record::new("Dr. A", "Cardiology", &[]),
            Record::new("Dr. B", "Cardiology", &["CA"]),
        ]);
        assert_eq!(table.providers, vec!["Dr. B", "Dr. A"]);
        assert_eq!(table.specialties, vec!["Neurology", "Cardiology"]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn title_falls_back_to_code() {
        let agg = StateAggregate {
            code: "PR".into(),
            name: None,
            descriptions: Vec::new(),
        };
        assert_eq!(agg.title(), "PR");
    }
}
