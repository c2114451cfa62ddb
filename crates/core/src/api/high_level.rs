//! High-level stream reading API.
//!
//! Provides the main public API on top of [`StreamReader`]:
//! - `read_document()` - Decode a whole stream into a [`Document`]
//! - `read_document_from_path()` - Same, reading from a file
//! - `read_pages()` - Lazy iterator over selected pages
//! - `read_text()` - Glyph text of the selected pages as a String

use std::fs::File;
use std::io::Read;
use std::ops::RangeInclusive;

use serde::Serialize;

use crate::error::{P2mError, Result};
use crate::model::{Meta, Page};
use crate::reader::{Pages, StreamReader};

/// Options for reading a stream.
///
/// Mirrors the page selection switches of the pdf2msgpack producer, applied
/// on the reading side.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReadOptions {
    /// One-based inclusive range of page numbers to keep. None means all.
    pub page_range: Option<RangeInclusive<usize>>,

    /// Maximum number of pages to return. 0 means no limit.
    pub maxpages: usize,

    /// Decode only the header and skip every page.
    pub meta_only: bool,
}

impl ReadOptions {
    /// Parse a page range written as `a-b`, e.g. `2-5`.
    ///
    /// Both ends are one-based and inclusive; `a` must be at least 1 and
    /// `b` must not be smaller than `a`.
    pub fn parse_page_range(value: &str) -> Result<RangeInclusive<usize>> {
        let invalid = || P2mError::InvalidPageRange(format!("{value:?}: specify like 1-10"));

        let (start, end) = value.split_once('-').ok_or_else(invalid)?;
        let start: usize = start.trim().parse().map_err(|_| invalid())?;
        let end: usize = end.trim().parse().map_err(|_| invalid())?;
        if start < 1 || end < start {
            return Err(invalid());
        }
        Ok(start..=end)
    }

    fn selects(&self, number: usize) -> bool {
        self.page_range
            .as_ref()
            .is_none_or(|range| range.contains(&number))
    }

    fn past_range(&self, number: usize) -> bool {
        self.page_range
            .as_ref()
            .is_some_and(|range| number > *range.end())
    }
}

/// A fully decoded stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Document {
    pub version: i64,
    pub meta: Meta,
    pub pages: Vec<Page>,
}

/// Iterator over the pages selected by [`ReadOptions`].
///
/// Pages outside the selection are still decoded, since the stream offers
/// no way to skip them, but are not yielded. Iteration stops as soon as the
/// selection is exhausted, leaving later records unread.
pub struct PageIterator<R> {
    pages: Pages<R>,
    options: ReadOptions,
    yielded: usize,
    finished: bool,
}

impl<R: Read> PageIterator<R> {
    pub fn version(&self) -> i64 {
        self.pages.reader().version()
    }

    pub fn meta(&self) -> &Meta {
        self.pages.reader().meta()
    }

    fn limit_reached(&self) -> bool {
        self.options.maxpages > 0 && self.yielded >= self.options.maxpages
    }
}

impl<R: Read> Iterator for PageIterator<R> {
    type Item = Result<Page>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.options.meta_only || self.limit_reached() {
            return None;
        }

        loop {
            let page = match self.pages.next()? {
                Ok(page) => page,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            };
            if self.options.past_range(page.number) {
                self.finished = true;
                return None;
            }
            if self.options.selects(page.number) {
                self.yielded += 1;
                return Some(Ok(page));
            }
        }
    }
}

/// Open a stream and return an iterator over its selected pages.
///
/// # Arguments
/// * `source` - Byte source positioned at the start of the stream
/// * `options` - Read options (None for defaults)
pub fn read_pages<R: Read>(source: R, options: Option<ReadOptions>) -> Result<PageIterator<R>> {
    let reader = StreamReader::open(source)?;
    Ok(PageIterator {
        pages: reader.pages(),
        options: options.unwrap_or_default(),
        yielded: 0,
        finished: false,
    })
}

/// Decode a stream into a [`Document`] holding the selected pages.
///
/// # Example
/// ```ignore
/// use p2m_core::api::read_document;
///
/// let file = std::fs::File::open("document.p2m")?;
/// let doc = read_document(file, None)?;
/// println!("{} pages", doc.pages.len());
/// ```
pub fn read_document<R: Read>(source: R, options: Option<ReadOptions>) -> Result<Document> {
    let iter = read_pages(source, options)?;
    let version = iter.version();
    let meta = iter.meta().clone();
    let pages = iter.collect::<Result<Vec<_>>>()?;
    Ok(Document {
        version,
        meta,
        pages,
    })
}

/// Decode an in-memory stream.
pub fn read_document_from_bytes(data: &[u8], options: Option<ReadOptions>) -> Result<Document> {
    read_document(data, options)
}

/// Decode the stream stored in a file.
pub fn read_document_from_path(
    path: impl AsRef<std::path::Path>,
    options: Option<ReadOptions>,
) -> Result<Document> {
    let file = File::open(path)?;
    read_document(file, options)
}

/// Glyph text of the selected pages, each page followed by a form feed.
pub fn read_text<R: Read>(source: R, options: Option<ReadOptions>) -> Result<String> {
    let mut text = String::new();
    for page in read_pages(source, options)? {
        text.push_str(&page?.text());
        text.push('\x0c');
    }
    Ok(text)
}
