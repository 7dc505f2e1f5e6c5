use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::{BookError, Result};

use super::attribute;

/// One `<identifier>` entry of the package metadata.
///
/// Absent `id` or `scheme` attributes are stored as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierRecord {
    pub id: String,
    pub value: String,
    pub scheme: String,
}

impl IdentifierRecord {
    pub fn new(id: impl Into<String>, value: impl Into<String>, scheme: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            scheme: scheme.into(),
        }
    }
}

/// Identifier records in the order they appear in the package document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataSet {
    identifiers: Vec<IdentifierRecord>,
}

impl MetadataSet {
    pub fn new(identifiers: Vec<IdentifierRecord>) -> Self {
        Self { identifiers }
    }

    pub fn identifiers(&self) -> &[IdentifierRecord] {
        &self.identifiers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IdentifierRecord> {
        self.identifiers.iter()
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}

impl<'a> IntoIterator for &'a MetadataSet {
    type Item = &'a IdentifierRecord;
    type IntoIter = std::slice::Iter<'a, IdentifierRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.identifiers.iter()
    }
}

/// Identifier being collected between its start and end tags
struct PendingIdentifier {
    id: String,
    scheme: String,
    value: String,
    /// Stack depth of the identifier's own content
    depth: usize,
}

impl PendingIdentifier {
    fn finish(self) -> IdentifierRecord {
        IdentifierRecord {
            id: self.id,
            value: self.value.trim().to_string(),
            scheme: self.scheme,
        }
    }
}

/// Decode `package/metadata/identifier` elements from a package document.
///
/// Element and attribute names are matched on their local part, so both
/// `<dc:identifier opf:scheme="ISBN">` and `<identifier scheme="ISBN">`
/// are recognized. Only character data directly inside an identifier
/// makes up its value; surrounding whitespace is trimmed.
pub fn extract_metadata(xml: &[u8]) -> Result<MetadataSet> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();

    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut identifiers = Vec::new();
    let mut pending: Option<PendingIdentifier> = None;

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| BookError::MetadataParse(e.to_string()))?;

        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let name = e.local_name();

                if stack.is_empty() && name.as_ref() != b"package" {
                    return Err(BookError::MetadataParse(format!(
                        "expected root element <package>, found <{}>",
                        String::from_utf8_lossy(name.as_ref())
                    )));
                }

                let is_identifier = pending.is_none()
                    && stack.len() == 2
                    && stack[1] == b"metadata"
                    && name.as_ref() == b"identifier";

                if is_identifier {
                    let id = attribute(e, b"id").map_err(BookError::MetadataParse)?;
                    let scheme = attribute(e, b"scheme").map_err(BookError::MetadataParse)?;
                    let identifier = PendingIdentifier {
                        id: id.unwrap_or_default(),
                        scheme: scheme.unwrap_or_default(),
                        value: String::new(),
                        depth: stack.len() + 1,
                    };
                    if matches!(event, Event::Empty(_)) {
                        identifiers.push(identifier.finish());
                    } else {
                        pending = Some(identifier);
                    }
                }

                if matches!(event, Event::Start(_)) {
                    stack.push(name.as_ref().to_vec());
                } else if stack.is_empty() {
                    break;
                }
            }
            Event::Text(ref e) => {
                if let Some(identifier) = pending.as_mut().filter(|p| p.depth == stack.len()) {
                    let text = e
                        .unescape()
                        .map_err(|e| BookError::MetadataParse(e.to_string()))?;
                    identifier.value.push_str(&text);
                }
            }
            Event::CData(ref e) => {
                if let Some(identifier) = pending.as_mut().filter(|p| p.depth == stack.len()) {
                    let text = std::str::from_utf8(e)
                        .map_err(|e| BookError::MetadataParse(e.to_string()))?;
                    identifier.value.push_str(text);
                }
            }
            Event::End(_) => {
                if let Some(identifier) = pending.take_if(|p| p.depth == stack.len()) {
                    identifiers.push(identifier.finish());
                }
                stack.pop();
                if stack.is_empty() {
                    break;
                }
            }
            Event::Eof => {
                return Err(BookError::MetadataParse(if stack.is_empty() {
                    "document has no root element".into()
                } else {
                    "unexpected end of document".into()
                }));
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(MetadataSet::new(identifiers))
}
