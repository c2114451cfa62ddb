//! Page records and their fixed-shape members.
//!
//! `Page` is a field-named map on the wire. `Size`, `Glyph` and `Rect` are
//! positional arrays with no field names; the derived impls read them in
//! declaration order.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use super::path::Path;

/// One decoded page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Page {
    /// One-based position in the stream, assigned by the reader. Any
    /// `Number` entry on the wire is ignored.
    #[serde(skip_deserializing)]
    pub number: usize,
    pub size: Size,
    /// Glyphs in the order the producer emitted them.
    pub glyphs: Vec<Glyph>,
    /// Drawing operations in paint order.
    pub paths: Vec<Path>,
}

impl Page {
    /// Concatenated glyph text in encoded order.
    pub fn text(&self) -> String {
        self.glyphs.iter().map(|g| g.text.as_str()).collect()
    }
}

/// Physical page size in PDF points, `[W, H]` on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

/// A positioned piece of text, `[Rect, Text]` on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Glyph {
    pub rect: Rect,
    /// Invalid UTF-8 sequences are replaced with U+FFFD.
    #[serde(deserialize_with = "lossy_string")]
    pub text: String,
}

fn lossy_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    deserializer.deserialize_string(LossyStringVisitor)
}

struct LossyStringVisitor;

impl<'de> Visitor<'de> for LossyStringVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("glyph text")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_owned())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<String, E> {
        Ok(String::from_utf8_lossy(v).into_owned())
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<String, E> {
        Ok(String::from_utf8(v)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
    }
}

/// Bounding box, `[X1, Y1, X2, Y2]` on the wire.
///
/// Corner order is whatever the producer wrote; it is not normalised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Rect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rect {
    pub fn width(&self) -> f64 {
        (self.x2 - self.x1).abs()
    }

    pub fn height(&self) -> f64 {
        (self.y2 - self.y1).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(x1: f64, text: &str) -> Glyph {
        Glyph {
            rect: Rect {
                x1,
                y1: 10.0,
                x2: x1 + 5.0,
                y2: 22.0,
            },
            text: text.to_string(),
        }
    }

    #[test]
    fn test_text_keeps_encoded_order() {
        let page = Page {
            glyphs: vec![glyph(20.0, "b"), glyph(10.0, "a"), glyph(30.0, " ")],
            ..Page::default()
        };
        assert_eq!(page.text(), "ba ");
    }

    #[test]
    fn test_rect_extent_ignores_corner_order() {
        let rect = Rect {
            x1: 30.0,
            y1: 40.0,
            x2: 10.0,
            y2: 15.0,
        };
        assert_eq!(rect.width(), 20.0);
        assert_eq!(rect.height(), 25.0);
    }

    #[test]
    fn test_glyph_text_decodes_lossily() {
        let g: Glyph = serde_json::from_str(r#"[[0, 0, 4, 8], "ok"]"#).unwrap();
        assert_eq!(g.text, "ok");

        let text = LossyStringVisitor
            .visit_bytes::<de::value::Error>(b"a\xffb")
            .unwrap();
        assert_eq!(text, "a\u{fffd}b");
        let text = LossyStringVisitor
            .visit_byte_buf::<de::value::Error>(b"caf\xc3\xa9".to_vec())
            .unwrap();
        assert_eq!(text, "caf\u{e9}");
    }
}
