//! Font file recognition and name-table access

use std::fmt;

use ttf_parser::{name_id, Face, Tag};

use crate::error::{Error, Result};

/// TrueType sfnt version magic
pub const TRUETYPE_MAGIC: [u8; 4] = [0x00, 0x01, 0x00, 0x00];
/// OpenType CFF container magic ("OTTO")
pub const OPENTYPE_MAGIC: [u8; 4] = [0x4F, 0x54, 0x54, 0x4F];

/// Kind of glyph outlines carried by a font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineKind {
    /// TrueType outlines (glyf table)
    TrueType,
    /// PostScript outlines (CFF table)
    Postscript,
    /// Neither outline table present
    Unknown,
}

impl fmt::Display for OutlineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutlineKind::TrueType => write!(f, "TrueType (glyf)"),
            OutlineKind::Postscript => write!(f, "PostScript (CFF)"),
            OutlineKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// Check the four-byte sfnt magic of a font file.
pub fn has_font_magic(data: &[u8]) -> bool {
    data.len() >= 4 && (data[..4] == TRUETYPE_MAGIC || data[..4] == OPENTYPE_MAGIC)
}

/// Parse font data, mapping parse failures into a crate error.
pub fn parse_face(data: &[u8]) -> Result<Face<'_>> {
    Face::parse(data, 0).map_err(|e| Error::Font(format!("failed to parse font: {}", e)))
}

/// Determine which outline table a font carries.
pub fn outline_kind(face: &Face) -> OutlineKind {
    let raw = face.raw_face();
    if raw.table(Tag::from_bytes(b"CFF ")).is_some() {
        OutlineKind::Postscript
    } else if raw.table(Tag::from_bytes(b"glyf")).is_some() {
        OutlineKind::TrueType
    } else {
        OutlineKind::Unknown
    }
}

/// Read the family name from a font's name table, preferring the
/// typographic family record when present.
pub fn family_name(face: &Face) -> Option<String> {
    let names = face.names();
    let mut family = None;
    for i in 0..names.len() {
        let name = match names.get(i) {
            Some(name) => name,
            None => continue,
        };
        match name.name_id {
            name_id::TYPOGRAPHIC_FAMILY => {
                if let Some(value) = name.to_string() {
                    return Some(value);
                }
            }
            name_id::FAMILY => {
                if family.is_none() {
                    family = name.to_string();
                }
            }
            _ => {}
        }
    }
    family
}
