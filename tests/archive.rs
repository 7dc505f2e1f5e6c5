mod common;

use std::io::{Cursor, Write};

use bookid::{Archive, BookError};
use common::{DEFLATE, STORED, ZipBuilder};

#[test]
fn resolves_stored_and_deflated_entries() {
    let text = "chapter one ".repeat(200);
    let bytes = ZipBuilder::new()
        .stored("mimetype", b"application/epub+zip")
        .deflated("OEBPS/Text/ch1.xhtml", text.as_bytes())
        .build();

    let archive = Archive::from_bytes(bytes).unwrap();
    assert_eq!(archive.entries().len(), 2);
    assert_eq!(archive.resolve("mimetype").unwrap(), b"application/epub+zip");
    assert_eq!(archive.resolve("OEBPS/Text/ch1.xhtml").unwrap(), text.as_bytes());
}

#[test]
fn backslash_entry_found_by_forward_slash_path() {
    let bytes = ZipBuilder::new()
        .stored(r"OEBPS\content.opf", b"<package/>")
        .build();
    let archive = Archive::from_bytes(bytes).unwrap();
    assert_eq!(archive.resolve("OEBPS/content.opf").unwrap(), b"<package/>");
}

#[test]
fn forward_slash_entry_found_by_backslash_path() {
    let bytes = ZipBuilder::new()
        .stored("OEBPS/content.opf", b"<package/>")
        .build();
    let archive = Archive::from_bytes(bytes).unwrap();
    assert_eq!(archive.resolve(r"OEBPS\content.opf").unwrap(), b"<package/>");
}

#[test]
fn lookup_is_exact_and_case_sensitive() {
    let bytes = ZipBuilder::new()
        .stored("OEBPS/content.opf", b"<package/>")
        .build();
    let archive = Archive::from_bytes(bytes).unwrap();

    for path in ["oebps/content.opf", "OEBPS/CONTENT.OPF", "content.opf", "OEBPS/content", "OEBPS/"] {
        match archive.resolve(path) {
            Err(BookError::EntryNotFound(p)) => assert_eq!(p, path),
            other => panic!("{path}: expected EntryNotFound, got {other:?}"),
        }
    }
}

#[test]
fn first_entry_in_directory_order_wins() {
    let bytes = ZipBuilder::new()
        .stored(r"a\b.txt", b"first")
        .stored("a/b.txt", b"second")
        .build();
    let archive = Archive::from_bytes(bytes).unwrap();
    assert_eq!(archive.resolve("a/b.txt").unwrap(), b"first");
}

#[test]
fn archive_with_trailing_comment_opens() {
    let bytes = ZipBuilder::new()
        .stored("mimetype", b"application/epub+zip")
        .comment(b"made by a test")
        .build();
    let archive = Archive::from_bytes(bytes).unwrap();
    assert_eq!(archive.resolve("mimetype").unwrap(), b"application/epub+zip");
}

#[test]
fn empty_archive_has_no_entries() {
    let archive = Archive::from_bytes(ZipBuilder::new().build()).unwrap();
    assert!(archive.entries().is_empty());
    assert!(matches!(
        archive.resolve("mimetype"),
        Err(BookError::EntryNotFound(_))
    ));
}

#[test]
fn non_zip_bytes_fail_to_open() {
    for bytes in [
        Vec::new(),
        b"PK".to_vec(),
        b"this is plainly not a zip archive, just some text".to_vec(),
    ] {
        assert!(matches!(
            Archive::from_bytes(bytes),
            Err(BookError::ArchiveOpen(_))
        ));
    }
    assert!(matches!(
        Archive::from_reader(Cursor::new(b"<html></html>".repeat(10))),
        Err(BookError::ArchiveOpen(_))
    ));
}

#[test]
fn truncated_archive_fails_to_open() {
    let bytes = ZipBuilder::new()
        .stored("mimetype", b"application/epub+zip")
        .build();
    let truncated = bytes[10..].to_vec();
    assert!(matches!(
        Archive::from_bytes(truncated),
        Err(BookError::ArchiveOpen(_))
    ));
}

#[test]
fn checksum_mismatch_is_reported() {
    let bytes = ZipBuilder::new()
        .entry("OEBPS/content.opf", b"<package/>", DEFLATE, 0, Some(0xDEADBEEF))
        .build();
    let archive = Archive::from_bytes(bytes).unwrap();
    match archive.resolve("OEBPS/content.opf") {
        Err(BookError::EntryRead { name, reason }) => {
            assert_eq!(name, "OEBPS/content.opf");
            assert!(reason.contains("checksum"), "{reason}");
        }
        other => panic!("expected EntryRead, got {other:?}"),
    }
}

#[test]
fn encrypted_and_unknown_methods_are_rejected() {
    let bytes = ZipBuilder::new()
        .entry("secret.opf", b"<package/>", STORED, 0x0001, None)
        .entry("bzip.opf", b"<package/>", 12, 0, None)
        .build();
    let archive = Archive::from_bytes(bytes).unwrap();
    assert!(matches!(
        archive.resolve("secret.opf"),
        Err(BookError::EntryRead { .. })
    ));
    assert!(matches!(
        archive.resolve("bzip.opf"),
        Err(BookError::EntryRead { .. })
    ));
}

#[test]
fn opens_archive_from_path() {
    let bytes = ZipBuilder::new()
        .deflated("META-INF/container.xml", b"<container/>")
        .build();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&bytes).unwrap();
    file.flush().unwrap();

    let archive = Archive::open(file.path()).unwrap();
    assert_eq!(
        archive.resolve("META-INF/container.xml").unwrap(),
        b"<container/>"
    );
}

#[test]
fn missing_path_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.epub");
    assert!(matches!(
        Archive::open(&missing),
        Err(BookError::ArchiveOpen(_))
    ));
}
