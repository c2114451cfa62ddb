//! Stream fixtures written the way pdf2msgpack lays them out.

#![allow(dead_code)]

use p2m_core::{FontInfo, Glyph, Page, Path, PathType, Rect, Size};
use rmp::encode;

pub fn write_str_entry(buf: &mut Vec<u8>, key: &str, value: &str) {
    encode::write_str(buf, key).unwrap();
    encode::write_str(buf, value).unwrap();
}

pub fn write_font(buf: &mut Vec<u8>, font: &FontInfo) {
    encode::write_map_len(buf, 6).unwrap();
    write_str_entry(buf, "Name", &font.name);
    write_str_entry(buf, "Type", &font.font_type);
    write_str_entry(buf, "Encoding", &font.encoding);
    encode::write_str(buf, "Embedded").unwrap();
    encode::write_bool(buf, font.embedded).unwrap();
    encode::write_str(buf, "Subset").unwrap();
    encode::write_bool(buf, font.subset).unwrap();
    encode::write_str(buf, "ToUnicode").unwrap();
    encode::write_bool(buf, font.to_unicode).unwrap();
}

/// Version followed by a Meta map with `Pages` and `Producer` only.
pub fn write_header(buf: &mut Vec<u8>, version: i64, declared_pages: i64) {
    encode::write_sint(buf, version).unwrap();
    encode::write_map_len(buf, 2).unwrap();
    encode::write_str(buf, "Pages").unwrap();
    encode::write_sint(buf, declared_pages).unwrap();
    write_str_entry(buf, "Producer", "p2m-fixture");
}

pub fn write_rect(buf: &mut Vec<u8>, rect: &Rect) {
    encode::write_array_len(buf, 4).unwrap();
    for v in [rect.x1, rect.y1, rect.x2, rect.y2] {
        encode::write_f64(buf, v).unwrap();
    }
}

pub fn write_glyph(buf: &mut Vec<u8>, glyph: &Glyph) {
    encode::write_array_len(buf, 2).unwrap();
    write_rect(buf, &glyph.rect);
    encode::write_str(buf, &glyph.text).unwrap();
}

/// Path with an arbitrary wire tag, so tests can write undefined codes.
pub fn write_path_raw(buf: &mut Vec<u8>, code: u8, path: &Path) {
    encode::write_array_len(buf, 4).unwrap();
    encode::write_uint(buf, u64::from(code)).unwrap();
    encode::write_array_len(buf, path.data.len() as u32).unwrap();
    for subpath in &path.data {
        encode::write_array_len(buf, subpath.len() as u32).unwrap();
        for v in subpath {
            encode::write_f64(buf, *v).unwrap();
        }
    }
    encode::write_f64(buf, path.stroke_width).unwrap();
    encode::write_array_len(buf, 3).unwrap();
    for c in [path.color.r, path.color.g, path.color.b] {
        encode::write_uint(buf, u64::from(c)).unwrap();
    }
}

pub fn write_path(buf: &mut Vec<u8>, path: &Path) {
    write_path_raw(buf, path.kind.code(), path);
}

/// Page map including a bogus `Number`, which readers must ignore.
pub fn write_page(buf: &mut Vec<u8>, page: &Page) {
    encode::write_map_len(buf, 4).unwrap();
    encode::write_str(buf, "Number").unwrap();
    encode::write_sint(buf, 1000).unwrap();
    encode::write_str(buf, "Size").unwrap();
    encode::write_array_len(buf, 2).unwrap();
    encode::write_f64(buf, page.size.w).unwrap();
    encode::write_f64(buf, page.size.h).unwrap();
    encode::write_str(buf, "Glyphs").unwrap();
    encode::write_array_len(buf, page.glyphs.len() as u32).unwrap();
    for glyph in &page.glyphs {
        write_glyph(buf, glyph);
    }
    encode::write_str(buf, "Paths").unwrap();
    encode::write_array_len(buf, page.paths.len() as u32).unwrap();
    for path in &page.paths {
        write_path(buf, path);
    }
}

pub fn glyph(x: f64, text: &str) -> Glyph {
    Glyph {
        rect: Rect {
            x1: x,
            y1: 700.0,
            x2: x + 6.0,
            y2: 712.0,
        },
        text: text.to_string(),
    }
}

/// Letter-sized page whose glyphs spell `text`.
pub fn sample_page(text: &str) -> Page {
    Page {
        number: 0,
        size: Size { w: 612.0, h: 792.0 },
        glyphs: text
            .chars()
            .enumerate()
            .map(|(i, c)| glyph(72.0 + 6.0 * i as f64, &c.to_string()))
            .collect(),
        paths: vec![
            Path {
                kind: PathType::SetStrokeWidth,
                stroke_width: 1.5,
                ..Path::default()
            },
            Path {
                kind: PathType::Stroke,
                data: vec![vec![72.0, 72.0, 540.0, 72.0]],
                ..Path::default()
            },
        ],
    }
}

/// Complete stream holding one page per entry in `texts`.
pub fn build_stream(texts: &[&str]) -> Vec<u8> {
    let mut buf = Vec::new();
    write_header(&mut buf, 0, texts.len() as i64);
    for text in texts {
        write_page(&mut buf, &sample_page(text));
    }
    buf
}
