use crate::epub::IdentifierRecord;

/// URN prefix marking an identifier value as an ISBN
pub const URN_PREFIX: &str = "urn:isbn:";

/// Evidence that an identifier record holds an ISBN
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsbnSignal {
    /// `scheme` equals `isbn`
    Scheme,
    /// The value starts with `urn:isbn:`
    UrnPrefix,
    /// `id` contains `isbn`
    IdAttribute,
}

impl IsbnSignal {
    /// Signals in the order they are checked
    pub const ALL: [IsbnSignal; 3] = [
        IsbnSignal::Scheme,
        IsbnSignal::UrnPrefix,
        IsbnSignal::IdAttribute,
    ];

    /// Does this signal hold for `record`? All checks ignore ASCII case.
    pub fn matches(self, record: &IdentifierRecord) -> bool {
        match self {
            IsbnSignal::Scheme => record.scheme.eq_ignore_ascii_case("isbn"),
            IsbnSignal::UrnPrefix => has_urn_prefix(&record.value),
            IsbnSignal::IdAttribute => record.id.to_ascii_lowercase().contains("isbn"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IsbnSignal::Scheme => "scheme",
            IsbnSignal::UrnPrefix => "urn",
            IsbnSignal::IdAttribute => "id",
        }
    }
}

impl std::fmt::Display for IsbnSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) fn has_urn_prefix(value: &str) -> bool {
    value
        .get(..URN_PREFIX.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(URN_PREFIX))
}

/// The first signal, in [`IsbnSignal::ALL`] order, that marks `record` as an ISBN
pub fn classify(record: &IdentifierRecord) -> Option<IsbnSignal> {
    IsbnSignal::ALL.into_iter().find(|signal| signal.matches(record))
}

/// Whether any signal marks `record` as an ISBN.
///
/// This is a loose heuristic: an id such as `my-isbn-alt` is enough.
pub fn is_isbn(record: &IdentifierRecord) -> bool {
    classify(record).is_some()
}

/// The first record, in document order, classified as an ISBN
pub fn first_isbn<'a, I>(records: I) -> Option<&'a IdentifierRecord>
where
    I: IntoIterator<Item = &'a IdentifierRecord>,
{
    records.into_iter().find(|record| is_isbn(record))
}
