use std::collections::BTreeSet;

use super::model::Record;

// ---------------------------------------------------------------------------
// Selection: which providers / specialties the user picked
// ---------------------------------------------------------------------------

/// The two multi-select filter sets.
/// An empty set means "no restriction" on that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub providers: BTreeSet<String>,
    pub specialties: BTreeSet<String>,
}

impl Selection {
    #[cfg(test)]
    pub fn new<P, S>(providers: P, specialties: S) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Selection {
            providers: providers.into_iter().map(Into::into).collect(),
            specialties: specialties.into_iter().map(Into::into).collect(),
        }
    }

    /// True when neither dimension restricts anything.
    pub fn is_unrestricted(&self) -> bool {
        self.providers.is_empty() && self.specialties.is_empty()
    }

    /// Whether a record passes both dimensions.
    pub fn matches(&self, record: &Record) -> bool {
        passes(&self.providers, &record.provider) && passes(&self.specialties, &record.specialty)
    }
}

fn passes(selected: &BTreeSet<String>, value: &str) -> bool {
    selected.is_empty() || selected.contains(value)
}

/// Return the records passing `selection`, in input order.
pub fn filter_records<'a>(records: &'a [Record], selection: &Selection) -> Vec<&'a Record> {
    records.iter().filter(|r| selection.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Record> {
        vec![
            Record::new("Dr. A", "Cardiology", &["TX", "CA"]),
            Record::new("Dr. B", "Neurology", &["TX"]),
            Record::new("Dr. C", "Cardiology", &[]),
        ]
    }

    #[test]
    fn empty_selection_is_identity() {
        let records = sample();
        let filtered = filter_records(&records, &Selection::default());
        assert_eq!(filtered, records.iter().collect::<Vec<_>>());
    }

    #[test]
    fn filters_by_provider() {
        let records = sample();
        let sel = Selection::new(["Dr. B"], Vec::<String>::new());
        let filtered = filter_records(&records, &sel);
        assert_eq!(filtered, vec![&records[1]]);
    }

    #[test]
    fn dimensions_combine_with_and() {
        let records = sample();
        let sel = Selection::new(["Dr. A", "Dr. B"], ["Cardiology"]);
        assert_eq!(filter_records(&records, &sel), vec![&records[0]]);

        let sel = Selection::new(["Dr. B"], ["Cardiology"]);
        assert!(filter_records(&records, &sel).is_empty());
    }

    #[test]
    fn unknown_value_matches_nothing() {
        let records = sample();
        let sel = Selection::new(["Dr. Z"], Vec::<String>::new());
        assert!(filter_records(&records, &sel).is_empty());

        let sel = Selection::new(Vec::<String>::new(), ["Dermatology"]);
        assert!(filter_records(&records, &sel).is_empty());
    }

    #[test]
    fn filtering_leaves_source_untouched() {
        let records = sample();
        let before = records.clone();
        let _ = filter_records(&records, &Selection::new(["Dr. A"], ["Cardiology"]));
        assert_eq!(records, before);
    }
}
