//! p2m - Reader for the page streams written by pdf2msgpack.
//!
//! A stream holds a format version, document metadata and then one record
//! per page with the page size, positioned glyphs and vector drawing
//! operations. [`StreamReader`] decodes it one page at a time.
//!
//! ```ignore
//! use p2m_core::StreamReader;
//!
//! let mut reader = StreamReader::open(std::io::stdin().lock())?;
//! println!("version {}, {} pages declared", reader.version(), reader.meta().pages);
//! while let Some(page) = reader.next_page()? {
//!     println!("page {}: {} glyphs", page.number, page.glyphs.len());
//! }
//! ```

pub mod api;
pub mod error;
pub mod model;
pub mod reader;

// Re-export high_level for convenience
pub use api::high_level;

pub use error::{DecodeError, P2mError, Result};
pub use model::{Color, FontInfo, Glyph, Meta, Page, Path, PathOp, PathType, Rect, Size};
pub use reader::{Pages, StreamReader};
