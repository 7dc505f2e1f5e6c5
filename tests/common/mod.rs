//! In-memory zip writer for building test containers.

#![allow(dead_code)]

use byteorder::{LittleEndian, WriteBytesExt};
use flate2::write::DeflateEncoder;
use flate2::{Compression, Crc};
use std::io::Write;

pub const STORED: u16 = 0;
pub const DEFLATE: u16 = 8;

pub const CONTAINER_PATH: &str = "META-INF/container.xml";

#[derive(Default)]
pub struct ZipBuilder {
    data: Vec<u8>,
    central: Vec<u8>,
    count: u16,
    comment: Vec<u8>,
}

impl ZipBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stored(self, name: &str, contents: &[u8]) -> Self {
        self.entry(name, contents, STORED, 0, None)
    }

    pub fn deflated(self, name: &str, contents: &[u8]) -> Self {
        self.entry(name, contents, DEFLATE, 0, None)
    }

    pub fn comment(mut self, comment: &[u8]) -> Self {
        self.comment = comment.to_vec();
        self
    }

    /// Add an entry with full control over method, flags and recorded CRC.
    ///
    /// Methods other than DEFLATE store `contents` unchanged.
    pub fn entry(
        mut self,
        name: &str,
        contents: &[u8],
        method: u16,
        flags: u16,
        crc_override: Option<u32>,
    ) -> Self {
        let mut crc = Crc::new();
        crc.update(contents);
        let crc = crc_override.unwrap_or(crc.sum());

        let payload = if method == DEFLATE {
            let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(contents).unwrap();
            encoder.finish().unwrap()
        } else {
            contents.to_vec()
        };

        let offset = self.data.len() as u32;
        let name = name.as_bytes();

        let d = &mut self.data;
        d.write_all(b"PK\x03\x04").unwrap();
        d.write_u16::<LittleEndian>(20).unwrap();
        d.write_u16::<LittleEndian>(flags).unwrap();
        d.write_u16::<LittleEndian>(method).unwrap();
        d.write_u16::<LittleEndian>(0).unwrap();
        d.write_u16::<LittleEndian>(0x5A21).unwrap();
        d.write_u32::<LittleEndian>(crc).unwrap();
        d.write_u32::<LittleEndian>(payload.len() as u32).unwrap();
        d.write_u32::<LittleEndian>(contents.len() as u32).unwrap();
        d.write_u16::<LittleEndian>(name.len() as u16).unwrap();
        d.write_u16::<LittleEndian>(0).unwrap();
        d.write_all(name).unwrap();
        d.write_all(&payload).unwrap();

        let c = &mut self.central;
        c.write_all(b"PK\x01\x02").unwrap();
        c.write_u16::<LittleEndian>(20).unwrap();
        c.write_u16::<LittleEndian>(20).unwrap();
        c.write_u16::<LittleEndian>(flags).unwrap();
        c.write_u16::<LittleEndian>(method).unwrap();
        c.write_u16::<LittleEndian>(0).unwrap();
        c.write_u16::<LittleEndian>(0x5A21).unwrap();
        c.write_u32::<LittleEndian>(crc).unwrap();
        c.write_u32::<LittleEndian>(payload.len() as u32).unwrap();
        c.write_u32::<LittleEndian>(contents.len() as u32).unwrap();
        c.write_u16::<LittleEndian>(name.len() as u16).unwrap();
        c.write_u16::<LittleEndian>(0).unwrap();
        c.write_u16::<LittleEndian>(0).unwrap();
        c.write_u16::<LittleEndian>(0).unwrap();
        c.write_u16::<LittleEndian>(0).unwrap();
        c.write_u32::<LittleEndian>(0).unwrap();
        c.write_u32::<LittleEndian>(offset).unwrap();
        c.write_all(name).unwrap();

        self.count += 1;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut out = self.data;
        let cd_offset = out.len() as u32;
        out.extend_from_slice(&self.central);

        out.write_all(b"PK\x05\x06").unwrap();
        out.write_u16::<LittleEndian>(0).unwrap();
        out.write_u16::<LittleEndian>(0).unwrap();
        out.write_u16::<LittleEndian>(self.count).unwrap();
        out.write_u16::<LittleEndian>(self.count).unwrap();
        out.write_u32::<LittleEndian>(self.central.len() as u32).unwrap();
        out.write_u32::<LittleEndian>(cd_offset).unwrap();
        out.write_u16::<LittleEndian>(self.comment.len() as u16).unwrap();
        out.write_all(&self.comment).unwrap();
        out
    }
}

pub fn container_xml(full_path: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
  <rootfiles>
    <rootfile full-path="{full_path}" media-type="application/oebps-package+xml"/>
  </rootfiles>
</container>"#
    )
}

/// A package document whose metadata holds the given identifier elements
pub fn package_opf(identifiers: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<package xmlns="http://www.idpf.org/2007/opf" unique-identifier="BookId" version="2.0">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:opf="http://www.idpf.org/2007/opf">
    <dc:title>Computer Networks</dc:title>
    <dc:language>ru</dc:language>
    {identifiers}
  </metadata>
  <manifest>
    <item id="ncx" href="toc.ncx" media-type="application/x-dtbncx+xml"/>
  </manifest>
  <spine toc="ncx"/>
</package>"#
    )
}

/// A minimal EPUB: mimetype, container manifest and a deflated package document
pub fn epub(opf_path: &str, opf: &str) -> Vec<u8> {
    ZipBuilder::new()
        .stored("mimetype", b"application/epub+zip")
        .deflated(CONTAINER_PATH, container_xml(opf_path).as_bytes())
        .deflated(opf_path, opf.as_bytes())
        .build()
}
