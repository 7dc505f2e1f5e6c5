use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::debug;

use crate::error::{BookError, Result};
use crate::io::ReadAt;
use crate::zip::Archive;

use super::attribute;

/// Fixed location of the bootstrap manifest inside every EPUB
pub const CONTAINER_PATH: &str = "META-INF/container.xml";

/// Read the container manifest and return the package document's path.
///
/// A missing manifest surfaces as [`BookError::EntryNotFound`].
pub fn resolve_content_document_path<R: ReadAt>(archive: &Archive<R>) -> Result<String> {
    let data = archive.resolve(CONTAINER_PATH)?;
    let path = parse_container(&data)?;
    debug!(path = %path, "container manifest names package document");
    Ok(path)
}

/// Extract `full-path` from the first `<rootfiles>/<rootfile>` under the root.
///
/// An empty `full-path` is returned as-is; resolving it fails later with
/// [`BookError::EntryNotFound`].
pub fn parse_container(xml: &[u8]) -> Result<String> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();

    // Local names of the currently open elements
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut seen_root = false;
    let mut rootfile: Option<Option<String>> = None;

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| BookError::ManifestParse(e.to_string()))?;

        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let name = e.local_name();
                let is_rootfile = rootfile.is_none()
                    && stack.len() == 2
                    && stack[1] == b"rootfiles"
                    && name.as_ref() == b"rootfile";

                if is_rootfile {
                    let full_path =
                        attribute(e, b"full-path").map_err(BookError::ManifestParse)?;
                    rootfile = Some(full_path);
                }

                seen_root = true;
                if matches!(event, Event::Start(_)) {
                    stack.push(name.as_ref().to_vec());
                } else if stack.is_empty() {
                    break;
                }
            }
            Event::End(_) => {
                stack.pop();
                if stack.is_empty() {
                    break;
                }
            }
            Event::Eof => {
                if !seen_root {
                    return Err(BookError::ManifestParse("document has no root element".into()));
                }
                return Err(BookError::ManifestParse("unexpected end of document".into()));
            }
            _ => {}
        }
        buf.clear();
    }

    match rootfile {
        None => Err(BookError::ManifestShape("no rootfiles/rootfile element")),
        Some(None) => Err(BookError::ManifestShape("rootfile has no full-path attribute")),
        Some(Some(path)) => Ok(path),
    }
}
