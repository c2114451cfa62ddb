//! Sequential pdf2msgpack stream reader.
//!
//! A stream is a version integer, one [`Meta`] map, then page maps until the
//! source runs dry:
//!
//! ```text
//! Version  Meta  Page  Page  ...  <eof>
//! ```
//!
//! There is no terminator record and no page index. Pages can only be read
//! front to back, and their numbers come from a counter owned by the reader.

use std::io::{self, BufRead, BufReader, Read};

use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::error::{DecodeError, P2mError, Result};
use crate::model::{Meta, Page};

/// Pull-based reader over one p2m stream.
///
/// Each reader owns its source and its page counter. Readers share nothing,
/// so separate streams can be decoded on separate threads.
pub struct StreamReader<R> {
    source: BufReader<R>,
    version: i64,
    meta: Meta,
    current_number: usize,
    pages_read: usize,
}

impl<R: Read> StreamReader<R> {
    /// Decode the version and metadata from the front of `source`.
    ///
    /// The version is handed to the caller as-is; no compatibility check is
    /// made against it.
    pub fn open(source: R) -> Result<Self> {
        let mut source = BufReader::new(source);

        let version: i64 = decode(&mut source).map_err(P2mError::MalformedHeader)?;
        let meta: Meta = decode(&mut source).map_err(P2mError::MalformedHeader)?;
        debug!(
            version,
            declared_pages = meta.pages,
            fonts = meta.fonts().len(),
            "decoded stream header"
        );

        Ok(Self {
            source,
            version,
            meta,
            current_number: 0,
            pages_read: 0,
        })
    }

    pub fn version(&self) -> i64 {
        self.version
    }

    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    /// Number of pages successfully decoded so far.
    pub fn pages_read(&self) -> usize {
        self.pages_read
    }

    /// Decode the next page.
    ///
    /// Returns `Ok(None)` once the source is exhausted at a record boundary.
    /// Running out of bytes inside a record is a `MalformedPage` error. After
    /// any error the stream is unusable; the counter is not rolled back.
    pub fn next_page(&mut self) -> Result<Option<Page>> {
        self.current_number += 1;
        let number = self.current_number;

        let at_end = at_eof(&mut self.source).map_err(|e| P2mError::MalformedPage {
            page: number,
            source: DecodeError::Io(e),
        })?;
        if at_end {
            debug!(pages = self.pages_read, "end of stream");
            return Ok(None);
        }

        let mut page: Page = decode(&mut self.source).map_err(|source| {
            debug!(page = number, error = %source, "failed to decode page");
            P2mError::MalformedPage {
                page: number,
                source,
            }
        })?;
        page.number = number;
        self.pages_read += 1;
        trace!(
            page = number,
            glyphs = page.glyphs.len(),
            paths = page.paths.len(),
            "decoded page"
        );

        Ok(Some(page))
    }

    /// Turn the reader into an iterator over the remaining pages.
    pub fn pages(self) -> Pages<R> {
        Pages {
            reader: self,
            done: false,
        }
    }

    /// Give back the underlying source.
    ///
    /// Bytes already pulled into the internal buffer are lost.
    pub fn into_inner(self) -> R {
        self.source.into_inner()
    }
}

/// True when the source has no bytes left. Interrupted reads are retried.
fn at_eof<R: BufRead>(source: &mut R) -> io::Result<bool> {
    loop {
        match source.fill_buf() {
            Ok(buf) => return Ok(buf.is_empty()),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

fn decode<T: DeserializeOwned, R: Read>(source: &mut R) -> std::result::Result<T, DecodeError> {
    Ok(rmp_serde::from_read(source)?)
}

/// Iterator over the remaining pages of a [`StreamReader`].
///
/// Yields each page in order and stops for good after the end of the stream
/// or the first error.
pub struct Pages<R> {
    reader: StreamReader<R>,
    done: bool,
}

impl<R: Read> Pages<R> {
    pub fn reader(&self) -> &StreamReader<R> {
        &self.reader
    }
}

impl<R: Read> Iterator for Pages<R> {
    type Item = Result<Page>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.reader.next_page() {
            Ok(Some(page)) => Some(Ok(page)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: Read> std::iter::FusedIterator for Pages<R> {}
