//! In-memory rows.

/// One row of tabular data: ordered header to optional cell value.
///
/// `None` marks a missing value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, Option<String>)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. A header that is already present is overwritten in place.
    #[must_use]
    pub fn with(mut self, header: impl Into<String>, value: Option<&str>) -> Self {
        self.insert(header, value.map(ToString::to_string));
        self
    }

    pub fn insert(&mut self, header: impl Into<String>, value: Option<String>) {
        let header = header.into();
        match self.fields.iter_mut().find(|(h, _)| *h == header) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((header, value)),
        }
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(h, _)| h == header)
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn contains(&self, header: &str) -> bool {
        self.fields.iter().any(|(h, _)| h == header)
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(h, _)| h.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = Option<&str>> {
        self.fields.iter().map(|(_, v)| v.as_deref())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<H: Into<String>> FromIterator<(H, Option<String>)> for Record {
    fn from_iter<I: IntoIterator<Item = (H, Option<String>)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (header, value) in iter {
            record.insert(header, value);
        }
        record
    }
}
